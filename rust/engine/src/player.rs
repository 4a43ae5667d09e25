use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::Deck;

/// Fixed seat a player occupies for the whole session.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    /// Top seat, seated first and plays first in automated rounds
    First,
    /// Bottom seat
    Second,
}

impl Slot {
    pub const BOTH: [Slot; 2] = [Slot::First, Slot::Second];

    pub fn index(self) -> usize {
        match self {
            Slot::First => 0,
            Slot::Second => 1,
        }
    }

    pub fn other(self) -> Slot {
        match self {
            Slot::First => Slot::Second,
            Slot::Second => Slot::First,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::First => f.write_str("first"),
            Slot::Second => f.write_str("second"),
        }
    }
}

/// Who decides when a seat plays its next card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlMode {
    /// Plays automatically, either on the timer or in response to the opponent
    Automated,
    /// Plays only when an external reveal action arrives
    Manual,
}

/// A seated player: identity, control mode, remaining cards and score.
///
/// `current_card` is only set between the reveal and the resolution of a round.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    control: ControlMode,
    deck: Deck,
    score: u32,
    current_card: Option<Card>,
}

impl Player {
    pub fn new(name: impl Into<String>, control: ControlMode, deck: Deck) -> Self {
        Self {
            name: name.into(),
            control,
            deck,
            score: 0,
            current_card: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn control(&self) -> ControlMode {
        self.control
    }
    pub fn is_manual(&self) -> bool {
        self.control == ControlMode::Manual
    }
    pub fn deck(&self) -> &Deck {
        &self.deck
    }
    pub fn score(&self) -> u32 {
        self.score
    }
    pub fn current_card(&self) -> Option<Card> {
        self.current_card
    }

    /// Moves the front card of the deck into play.
    /// Leaves the player untouched when the deck is exhausted.
    pub fn draw(&mut self) -> Option<Card> {
        let card = self.deck.draw()?;
        self.current_card = Some(card);
        Some(card)
    }

    pub(crate) fn award_point(&mut self) {
        self.score += 1;
    }

    pub(crate) fn clear_current(&mut self) -> Option<Card> {
        self.current_card.take()
    }
}

/// Seats a player with a zero score and nothing in play.
pub fn create_player(name: impl Into<String>, control: ControlMode, deck: Deck) -> Player {
    Player::new(name, control, deck)
}

//! Round resolution: strength, comparison, scoring and game conclusion.
//!
//! Everything here is mode-agnostic. The controller decides *when* cards are
//! drawn; these functions decide what a pair of revealed cards means.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::events::{GameEvent, Outbox};
use crate::game::GameSession;
use crate::player::{Player, Slot};

/// Comparison value of a card. Ace counts above King; suit is ignored.
///
/// ```
/// use cardwar_engine::cards::{Card, Rank, Suit};
/// use cardwar_engine::round::strength;
///
/// assert_eq!(strength(Card::new(Rank::Ace, Suit::Hearts)), 14);
/// assert_eq!(strength(Card::new(Rank::King, Suit::Hearts)), 13);
/// assert_eq!(strength(Card::new(Rank::Two, Suit::Hearts)), 2);
/// ```
pub fn strength(card: Card) -> u8 {
    if card.rank == Rank::Ace {
        14
    } else {
        card.value()
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundOutcome {
    Winner(Slot),
    Tie,
}

/// Pure comparison of the two cards of a round.
pub fn compare(first: Card, second: Card) -> RoundOutcome {
    match strength(first).cmp(&strength(second)) {
        Ordering::Greater => RoundOutcome::Winner(Slot::First),
        Ordering::Less => RoundOutcome::Winner(Slot::Second),
        Ordering::Equal => RoundOutcome::Tie,
    }
}

/// Takes the front card of the player's deck and puts it in play.
/// `None` signals an exhausted deck.
pub fn draw_card(player: &mut Player) -> Option<Card> {
    player.draw()
}

/// How a reveal is narrated in the game log.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum RevealKind {
    /// A manual player pressed "play"
    Human,
    /// The automated opponent answering a human reveal
    Response,
    /// Timer-driven round
    Automatic,
}

impl RevealKind {
    fn verb(self) -> &'static str {
        match self {
            RevealKind::Human => "reveals",
            RevealKind::Response => "responds with",
            RevealKind::Automatic => "plays",
        }
    }
}

pub(crate) fn reveal(
    session: &GameSession,
    slot: Slot,
    card: Card,
    kind: RevealKind,
    outbox: &mut Outbox,
) {
    outbox.push(GameEvent::PlayerRevealed { slot, card });
    let name = session.player(slot).name();
    outbox.log(format!("{} {} {}.", name, kind.verb(), card));
}

/// Scores the round once both players have a card in play.
///
/// Returns `None` without touching the session if either card is missing.
/// Otherwise awards the point, clears both cards, advances the round counter
/// and concludes the game if a deck ran out.
pub fn resolve_round(session: &mut GameSession, outbox: &mut Outbox) -> Option<RoundOutcome> {
    let (Some(top), Some(bottom)) = (
        session.players[0].current_card(),
        session.players[1].current_card(),
    ) else {
        return None;
    };

    session.last_played = [Some(top), Some(bottom)];
    let outcome = compare(top, bottom);
    match outcome {
        RoundOutcome::Winner(slot) => {
            let winner = &mut session.players[slot.index()];
            winner.award_point();
            outbox.log(format!("{} wins the round!", winner.name()));
        }
        RoundOutcome::Tie => outbox.log("It's a tie. No points awarded."),
    }

    for player in session.players.iter_mut() {
        player.clear_current();
    }
    session.round += 1;

    tracing::debug!(
        round = session.round - 1,
        outcome = ?outcome,
        top = %top,
        bottom = %bottom,
        "round resolved"
    );
    outbox.push(GameEvent::RoundResolved {
        top_score: session.players[0].score(),
        bottom_score: session.players[1].score(),
        round: session.round,
    });

    if session.any_deck_empty() {
        conclude(session, outbox);
    }
    Some(outcome)
}

/// Ends the game: cancels the timer, freezes input and announces the result.
///
/// Returns `false` and does nothing if the game was already concluded.
pub fn conclude(session: &mut GameSession, outbox: &mut Outbox) -> bool {
    if session.finished {
        return false;
    }
    session.finished = true;
    session.cancel_timer();

    let [top, bottom] = &session.players;
    outbox.log(format!(
        "Final Score → {}: {} | {}: {}",
        top.name(),
        top.score(),
        bottom.name(),
        bottom.score()
    ));

    let winner = session.winner();
    match winner {
        Some(slot) => outbox.log(format!("{} wins the game!", session.player(slot).name())),
        None => outbox.log("The game ends in a draw."),
    }

    tracing::info!(
        generation = session.generation(),
        rounds = session.round - 1,
        top_score = top.score(),
        bottom_score = bottom.score(),
        winner = ?winner,
        "game concluded"
    );
    outbox.push(GameEvent::GameConcluded { winner });
    true
}

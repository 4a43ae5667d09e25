//! Text and JSON rendering of game notifications.
//!
//! The engine queues [`GameEvent`]s; the CLI drains them after every command
//! and hands them to an [`EventRenderer`]. In text mode narration lines get a
//! `[HH:MM:SS]` local timestamp and every resolved round is followed by a
//! scoreboard line. In JSON mode each event is written as one JSON object per
//! line, unchanged.
//!
//! ## Example
//!
//! ```rust
//! use cardwar_engine::deck::Deck;
//! use cardwar_cli::formatters::format_deck;
//!
//! let deck = Deck::new_with_seed(1);
//! assert!(format_deck(&deck).starts_with('['));
//! ```

use std::io::Write;

use cardwar_engine::deck::Deck;
use cardwar_engine::events::GameEvent;
use cardwar_engine::player::Slot;

/// Local wall-clock time formatted as `HH:MM:SS`.
pub fn timestamp() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

/// Format a deck as a bracketed, space-separated list in draw order.
pub fn format_deck(deck: &Deck) -> String {
    let cards: Vec<String> = deck.iter().map(|c| c.to_string()).collect();
    format!("[{}]", cards.join(" "))
}

/// Scoreboard line printed after each resolved round.
///
/// `round` is the number of the round about to be played.
pub fn format_scoreboard(names: &[String; 2], scores: (u32, u32), round: u32) -> String {
    format!(
        "Round {} | {}: {} | {}: {}",
        round, names[0], scores.0, names[1], scores.1
    )
}

/// Renders engine notifications for one game.
#[derive(Debug, Clone)]
pub struct EventRenderer {
    names: [String; 2],
    json: bool,
}

impl EventRenderer {
    pub fn new(names: [String; 2], json: bool) -> Self {
        Self { names, json }
    }

    pub fn is_json(&self) -> bool {
        self.json
    }

    fn name(&self, slot: Slot) -> &str {
        &self.names[slot.index()]
    }

    pub fn render(&self, event: &GameEvent, out: &mut dyn Write) -> std::io::Result<()> {
        if self.json {
            let line = serde_json::to_string(event).map_err(std::io::Error::other)?;
            return writeln!(out, "{}", line);
        }
        match event {
            GameEvent::Log { message } => writeln!(out, "[{}] {}", timestamp(), message),
            GameEvent::RoundResolved {
                top_score,
                bottom_score,
                round,
            } => writeln!(
                out,
                "{}",
                format_scoreboard(&self.names, (*top_score, *bottom_score), *round)
            ),
            GameEvent::GameConcluded { winner } => match winner {
                Some(slot) => writeln!(out, "Game over. Winner: {}", self.name(*slot)),
                None => writeln!(out, "Game over. Draw."),
            },
            // narration already names the card
            GameEvent::PlayerRevealed { .. } => Ok(()),
        }
    }

    pub fn render_all(&self, events: &[GameEvent], out: &mut dyn Write) -> std::io::Result<()> {
        for event in events {
            self.render(event, out)?;
        }
        Ok(())
    }
}

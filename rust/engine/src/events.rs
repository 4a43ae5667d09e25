use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::player::Slot;

/// Outbound notifications for the presentation layer, in emission order.
/// Each carries everything needed to render it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    PlayerRevealed {
        slot: Slot,
        card: Card,
    },
    RoundResolved {
        top_score: u32,
        bottom_score: u32,
        /// Round counter after advancing
        round: u32,
    },
    Log {
        message: String,
    },
    GameConcluded {
        /// `None` on a draw
        winner: Option<Slot>,
    },
}

/// Queue of notifications waiting to be drained by the presentation layer.
#[derive(Debug, Default)]
pub struct Outbox {
    events: Vec<GameEvent>,
}

impl Outbox {
    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Narration line for the game log.
    pub fn log(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(%message, "game log");
        self.events.push(GameEvent::Log { message });
    }

    pub fn take(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_drains_in_order() {
        let mut outbox = Outbox::default();
        outbox.log("one");
        outbox.push(GameEvent::GameConcluded { winner: None });
        let events = outbox.take();
        assert_eq!(events.len(), 2);
        assert!(matches!(&events[0], GameEvent::Log { message } if message == "one"));
        assert!(outbox.is_empty());
    }
}

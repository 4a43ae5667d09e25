use thiserror::Error;

use crate::player::Slot;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid rank value: {0} (expected 1-13)")]
    InvalidRank(u8),
    #[error("Unknown game mode: {0}")]
    UnknownMode(String),
    #[error("Deck for the {0} player is empty")]
    EmptyDeck(Slot),
}

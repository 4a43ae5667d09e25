//! # cardwar-engine: Two-Player Card Comparison Core
//!
//! A "War"-style game for two seats: each round both players reveal the top
//! card of their half of the deck, the stronger card scores a point, and the
//! game ends when a half runs out. Three control modes are supported
//! (computer vs computer on a timer, human vs computer, human vs human).
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction order
//! - [`deck`] - Shuffling (seeded ChaCha20 or thread RNG) and partitioning
//! - [`player`] - Seats, control modes and per-player state
//! - [`round`] - Card strength, round resolution and game conclusion
//! - [`game`] - Session ownership and the mode state machine
//! - [`scheduler`] - Timer seam used by computer vs computer games
//! - [`events`] - Outbound notifications for the presentation layer
//! - [`errors`] - Error types for construction-time misuse
//!
//! ## Quick Start
//!
//! ```rust
//! use cardwar_engine::game::{GameController, GameMode, GameSettings, Phase};
//! use cardwar_engine::scheduler::ManualScheduler;
//!
//! let scheduler = ManualScheduler::new();
//! let mut game = GameController::new(scheduler.clone(), GameSettings::default());
//! game.select_mode(GameMode::AutoAuto);
//!
//! // Deliver timer ticks by hand until the decks run out
//! let generation = game.session().unwrap().generation();
//! while game.phase() == Phase::InProgress {
//!     game.tick(generation);
//! }
//! assert_eq!(game.session().unwrap().round(), 27);
//! assert!(scheduler.active_generations().is_empty());
//! ```
//!
//! ## Deterministic Decks
//!
//! ```rust
//! use cardwar_engine::deck::Deck;
//!
//! assert_eq!(Deck::new_with_seed(42), Deck::new_with_seed(42));
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod events;
pub mod game;
pub mod player;
pub mod round;
pub mod scheduler;

//! Command handler modules for the cardwar CLI.
//!
//! Each command lives in its own module file with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers: Helper functions specific to that command
//! - Dependency injection: Output streams (`&mut dyn Write`) passed as parameters
//! - Error propagation: All errors propagated via `CliError` enum
//!
//! # Example
//!
//! ```rust
//! use cardwar_cli::commands::handle_deal_command;
//!
//! let mut out = Vec::new();
//! handle_deal_command(Some(3), &mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().contains("Seed: 3"));
//! ```

pub mod cfg;
pub mod deal;
pub mod play;
pub mod sim;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use play::handle_play_command;
pub use sim::handle_sim_command;

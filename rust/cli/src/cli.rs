//! Command-line argument types for the `cardwar` binary.

use cardwar_engine::game::GameMode;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "cardwar",
    version,
    about = "Two-player card comparison game: the higher card wins the round"
)]
pub struct CardwarCli {
    /// Print engine diagnostics to stderr (overridden by RUST_LOG)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play one game in the chosen mode
    Play {
        /// Who controls each seat (defaults to the configured mode)
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,
        /// Seed for the shuffle
        #[arg(long)]
        seed: Option<u64>,
        /// Milliseconds between rounds in computer vs computer games
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        interval_ms: Option<u64>,
        /// Emit notifications as JSON lines instead of the text log
        #[arg(long)]
        json: bool,
    },
    /// Play many computer vs computer games instantly and tally the results
    Sim {
        #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..))]
        games: u32,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Shuffle, split and print both players' halves
    Deal {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

/// Game mode as spelled on the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Computer vs Computer, rounds play on a timer
    AutoAuto,
    /// You (bottom seat) vs the computer
    HumanAuto,
    /// Two humans sharing the terminal
    HumanHuman,
}

impl ModeArg {
    /// Returns the string representation of the mode.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cardwar_cli::ModeArg;
    /// assert_eq!(ModeArg::HumanAuto.as_str(), "human-auto");
    /// ```
    pub fn as_str(&self) -> &'static str {
        GameMode::from(*self).as_str()
    }
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::AutoAuto => GameMode::AutoAuto,
            ModeArg::HumanAuto => GameMode::HumanAuto,
            ModeArg::HumanHuman => GameMode::HumanHuman,
        }
    }
}

//! Simulation command handler.
//!
//! Plays many computer vs computer games back to back without a wall clock:
//! the games run on a [`ManualScheduler`] and are ticked as fast as the
//! engine can resolve rounds. Narration is discarded; only the tally is
//! printed.
//!
//! # Examples
//!
//! ```
//! use cardwar_cli::commands::sim::simulate;
//!
//! let tally = simulate(3, 42).unwrap();
//! assert_eq!(tally.games, 3);
//! assert_eq!(tally.rounds, 3 * 26);
//! ```

use crate::error::CliError;
use crate::ui;
use cardwar_engine::game::{ActionOutcome, GameController, GameMode, GameSettings, Phase};
use cardwar_engine::player::Slot;
use cardwar_engine::scheduler::ManualScheduler;
use std::io::Write;

/// Aggregate results of a batch of automated games.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SimTally {
    pub games: u32,
    pub first_wins: u32,
    pub second_wins: u32,
    pub draws: u32,
    pub rounds: u64,
    pub tied_rounds: u64,
}

impl SimTally {
    fn record(&mut self, winner: Option<Slot>, rounds: u32, scores: (u32, u32)) {
        self.games += 1;
        match winner {
            Some(Slot::First) => self.first_wins += 1,
            Some(Slot::Second) => self.second_wins += 1,
            None => self.draws += 1,
        }
        self.rounds += u64::from(rounds);
        self.tied_rounds += u64::from(rounds.saturating_sub(scores.0 + scores.1));
    }
}

/// Play `games` automated games from one seeded controller.
pub fn simulate(games: u32, seed: u64) -> Result<SimTally, CliError> {
    let settings = GameSettings {
        seed: Some(seed),
        ..GameSettings::default()
    };
    let mut game = GameController::new(ManualScheduler::new(), settings);
    let mut tally = SimTally::default();

    for _ in 0..games {
        game.select_mode(GameMode::AutoAuto);
        let generation = game
            .session()
            .map(|s| s.generation())
            .ok_or_else(|| CliError::Engine("no session after mode selection".into()))?;

        while game.phase() == Phase::InProgress {
            if let ActionOutcome::Ignored(reason) = game.tick(generation) {
                return Err(CliError::Engine(format!(
                    "simulation stalled: tick ignored ({:?})",
                    reason
                )));
            }
        }
        game.take_events();

        let session = game
            .session()
            .ok_or_else(|| CliError::Engine("session vanished before tally".into()))?;
        tally.record(
            session.winner(),
            session.round().saturating_sub(1),
            session.scores(),
        );
    }
    game.return_to_menu();
    Ok(tally)
}

fn percent(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        0.0
    } else {
        f64::from(part) * 100.0 / f64::from(whole)
    }
}

/// Handle the sim command.
pub fn handle_sim_command(
    games: u32,
    seed: Option<u64>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if games == 0 {
        ui::write_error(err, "games must be >= 1")?;
        return Err(CliError::InvalidInput("games must be >= 1".to_string()));
    }
    let seed = seed.unwrap_or_else(rand::random);
    let [(first, _), (second, _)] = GameMode::AutoAuto.seats();

    let tally = simulate(games, seed)?;

    writeln!(out, "sim: games={} seed={}", games, seed)?;
    writeln!(
        out,
        "{} wins: {} ({:.1}%)",
        first,
        tally.first_wins,
        percent(tally.first_wins, tally.games)
    )?;
    writeln!(
        out,
        "{} wins: {} ({:.1}%)",
        second,
        tally.second_wins,
        percent(tally.second_wins, tally.games)
    )?;
    writeln!(
        out,
        "Draws: {} ({:.1}%)",
        tally.draws,
        percent(tally.draws, tally.games)
    )?;
    writeln!(
        out,
        "Rounds played: {} (tied: {})",
        tally.rounds, tally.tied_rounds
    )?;
    Ok(())
}

//! # Play Command
//!
//! Plays one game in any of the three modes:
//!
//! - **Computer vs Computer**: rounds resolve on a wall-clock interval driven
//!   by a current-thread tokio runtime. Ctrl+C leaves the game.
//! - **Human vs Computer**: you press Enter to reveal your card and the
//!   computer answers at once.
//! - **Human vs Human**: both players share the terminal and pick a seat
//!   for every reveal.
//!
//! Typing `q`/`quit`, or closing stdin, returns to the menu.

use crate::config;
use crate::error::CliError;
use crate::formatters::{EventRenderer, format_scoreboard};
use crate::io_utils::read_stdin_line;
use crate::scheduler::IntervalScheduler;
use crate::ui;
use crate::validation::{TurnInput, parse_turn_input, prompt_for};
use cardwar_engine::game::{GameController, GameMode, GameSettings, Phase};
use cardwar_engine::scheduler::{ManualScheduler, TickScheduler};
use std::io::{BufRead, Write};
use std::time::Duration;
use tokio::sync::mpsc;

/// Handle the play command.
///
/// Flags override the layered configuration (see [`crate::config`]).
///
/// # Arguments
///
/// * `mode` - Game mode (default: configured mode)
/// * `seed` - RNG seed for the shuffle (default: configured seed, else random)
/// * `interval_ms` - Delay between automated rounds (default: configured interval)
/// * `json` - Write notifications as JSON lines
/// * `out` - Output stream for the game log
/// * `err` - Error stream for warnings and input errors
/// * `stdin` - Input stream for human reveals
///
/// # Returns
///
/// * `Ok(())` when the game ends or the user returns to the menu
/// * `Err(CliError::Interrupted)` when a computer game is stopped with Ctrl+C
///
/// # Examples
///
/// ```
/// use cardwar_cli::commands::handle_play_command;
/// use cardwar_engine::game::GameMode;
/// use std::io::Cursor;
///
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let mut input = Cursor::new("q\n");
///
/// handle_play_command(
///     Some(GameMode::HumanHuman), Some(1), None, false,
///     &mut out, &mut err, &mut input,
/// ).unwrap();
/// assert!(String::from_utf8(out).unwrap().contains("Returned to menu."));
/// ```
pub fn handle_play_command(
    mode: Option<GameMode>,
    seed: Option<u64>,
    interval_ms: Option<u64>,
    json: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = match config::load() {
        Ok(c) => c,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(format!("Invalid configuration: {}", e)));
        }
    };

    let mode = mode.unwrap_or(cfg.mode);
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    if interval_ms.is_some() && mode != GameMode::AutoAuto {
        ui::warn_parameter_unused(err, "interval-ms", mode.as_str())?;
    }
    let interval_ms = interval_ms.unwrap_or(cfg.interval_ms);
    if interval_ms == 0 {
        ui::write_error(err, "interval-ms must be >= 1")?;
        return Err(CliError::InvalidInput("interval-ms must be >= 1".to_string()));
    }

    if !json {
        writeln!(
            out,
            "play: mode={} seed={} interval_ms={}",
            mode, seed, interval_ms
        )?;
    }

    let settings = GameSettings {
        seed: Some(seed),
        tick_interval: Duration::from_millis(interval_ms),
    };
    let [(first, _), (second, _)] = mode.seats();
    let renderer = EventRenderer::new([first.to_string(), second.to_string()], json);

    match mode {
        GameMode::AutoAuto => play_automatic(settings, &renderer, out),
        GameMode::HumanAuto | GameMode::HumanHuman => {
            play_interactive(mode, settings, &renderer, out, err, stdin)
        }
    }
}

fn play_interactive(
    mode: GameMode,
    settings: GameSettings,
    renderer: &EventRenderer,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let mut game = GameController::new(ManualScheduler::new(), settings);
    game.select_mode(mode);
    announce(&mut game, renderer, out)?;

    while game.phase() == Phase::InProgress {
        if !renderer.is_json() {
            write!(out, "{}", prompt_for(mode))?;
        }
        out.flush()?;

        let Some(line) = read_stdin_line(stdin)? else {
            return leave_game(&mut game, renderer, out);
        };
        match parse_turn_input(mode, &line) {
            TurnInput::Reveal(slot) => {
                game.human_reveal(slot);
                flush_events(&mut game, renderer, out)?;
            }
            TurnInput::Quit => return leave_game(&mut game, renderer, out),
            TurnInput::Invalid(msg) => ui::write_error(err, &msg)?,
        }
    }
    Ok(())
}

fn play_automatic(
    settings: GameSettings,
    renderer: &EventRenderer,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(async {
        let (scheduler, mut ticks) = IntervalScheduler::channel();
        let mut game = GameController::new(scheduler, settings);
        drive_automatic(
            &mut game,
            &mut ticks,
            tokio::signal::ctrl_c(),
            renderer,
            out,
        )
        .await
    })
}

/// Runs a computer game until it concludes or `shutdown` resolves.
async fn drive_automatic<F>(
    game: &mut GameController<IntervalScheduler>,
    ticks: &mut mpsc::UnboundedReceiver<u64>,
    shutdown: F,
    renderer: &EventRenderer,
    out: &mut dyn Write,
) -> Result<(), CliError>
where
    F: Future<Output = std::io::Result<()>>,
{
    game.select_mode(GameMode::AutoAuto);
    announce(game, renderer, out)?;

    tokio::pin!(shutdown);

    while game.phase() == Phase::InProgress {
        tokio::select! {
            Some(generation) = ticks.recv() => {
                game.tick(generation);
                flush_events(game, renderer, out)?;
            }
            signal = &mut shutdown => {
                signal?;
                leave_game(game, renderer, out)?;
                return Err(CliError::Interrupted("game stopped with Ctrl+C".into()));
            }
        }
    }
    Ok(())
}

/// Start-of-game narration plus the opening scoreboard.
fn announce<S: TickScheduler>(
    game: &mut GameController<S>,
    renderer: &EventRenderer,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    flush_events(game, renderer, out)?;
    if !renderer.is_json()
        && let Some(session) = game.session()
    {
        let [first, second] = session.players();
        let names = [first.name().to_string(), second.name().to_string()];
        writeln!(
            out,
            "{}",
            format_scoreboard(&names, session.scores(), session.round())
        )?;
    }
    Ok(())
}

fn flush_events<S: TickScheduler>(
    game: &mut GameController<S>,
    renderer: &EventRenderer,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let events = game.take_events();
    renderer.render_all(&events, out)?;
    out.flush()?;
    Ok(())
}

fn leave_game<S: TickScheduler>(
    game: &mut GameController<S>,
    renderer: &EventRenderer,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    game.return_to_menu();
    flush_events(game, renderer, out)?;
    if !renderer.is_json() {
        writeln!(out)?;
        writeln!(out, "Returned to menu.")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn play(mode: GameMode, seed: u64, input: &str) -> (Result<(), CliError>, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(input.to_string());
        let result = handle_play_command(
            Some(mode),
            Some(seed),
            None,
            false,
            &mut out,
            &mut err,
            &mut stdin,
        );
        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn header_shows_mode_and_seed() {
        let (result, out, _) = play(GameMode::HumanAuto, 8, "q\n");
        assert!(result.is_ok());
        assert!(out.starts_with("play: mode=human-auto seed=8 interval_ms="));
        assert!(out.contains("Starting Human vs Computer game."));
        assert!(out.contains("Round 1 | Computer North: 0 | You: 0"));
    }

    #[test]
    fn eof_returns_to_menu() {
        let (result, out, _) = play(GameMode::HumanHuman, 8, "");
        assert!(result.is_ok());
        assert!(out.trim_end().ends_with("Returned to menu."));
    }

    #[test]
    fn human_auto_plays_all_rounds_on_enter() {
        let input = "\n".repeat(26);
        let (result, out, err) = play(GameMode::HumanAuto, 21, &input);
        assert!(result.is_ok());
        assert_eq!(out.matches("You reveals ").count(), 26);
        assert_eq!(out.matches("Computer North responds with ").count(), 26);
        assert!(out.contains("Final Score → Computer North: "));
        assert!(out.contains("Game over. "));
        assert!(!out.contains("Returned to menu."));
        assert!(err.is_empty());
    }

    #[test]
    fn invalid_input_reprompts() {
        let (result, out, err) = play(GameMode::HumanHuman, 4, "x\n1\nq\n");
        assert!(result.is_ok());
        assert!(err.contains("Unrecognized input 'x'"));
        assert!(out.contains("Player North reveals "));
        assert!(out.contains("Returned to menu."));
    }

    #[test]
    fn interval_is_ignored_outside_computer_games() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new("q\n".to_string());
        handle_play_command(
            Some(GameMode::HumanHuman),
            Some(1),
            Some(50),
            false,
            &mut out,
            &mut err,
            &mut stdin,
        )
        .unwrap();
        assert!(
            String::from_utf8(err)
                .unwrap()
                .contains("Parameter --interval-ms is not used in human-human games.")
        );
    }

    #[test]
    fn zero_interval_is_rejected() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(String::new());
        let result = handle_play_command(
            Some(GameMode::AutoAuto),
            Some(1),
            Some(0),
            false,
            &mut out,
            &mut err,
            &mut stdin,
        );
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_signal_interrupts_computer_game() {
        let (scheduler, mut ticks) = IntervalScheduler::channel();
        let settings = GameSettings {
            seed: Some(6),
            tick_interval: Duration::from_millis(10),
        };
        let mut game = GameController::new(scheduler, settings);
        let renderer = EventRenderer::new(
            ["Computer North".to_string(), "Computer South".to_string()],
            false,
        );
        let mut out = Vec::new();
        let shutdown = async {
            tokio::time::sleep(Duration::from_millis(35)).await;
            Ok::<(), std::io::Error>(())
        };

        let result = drive_automatic(&mut game, &mut ticks, shutdown, &renderer, &mut out).await;

        assert!(matches!(result, Err(CliError::Interrupted(_))));
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Computer North plays "));
        assert!(!out.contains("Final Score"));
        assert!(out.trim_end().ends_with("Returned to menu."));
        assert_eq!(game.phase(), Phase::SelectingMode);

        // the aborted interval task releases its sender; no more ticks arrive
        drop(game);
        let drained = tokio::time::timeout(Duration::from_secs(1), async {
            while ticks.recv().await.is_some() {}
        })
        .await;
        assert!(drained.is_ok(), "interval task kept ticking after shutdown");
    }

    #[test]
    fn unreadable_input_is_an_error_not_a_quit() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(b"1\n\xff\xfe\n2\n".to_vec());
        let result = handle_play_command(
            Some(GameMode::HumanHuman),
            Some(4),
            None,
            false,
            &mut out,
            &mut err,
            &mut stdin,
        );
        assert!(matches!(result, Err(CliError::Io(_))));
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Player North reveals "));
        assert!(!out.contains("Player South reveals "));
        assert!(!out.contains("Returned to menu."));
    }

    #[test]
    fn computer_game_runs_to_completion() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(String::new());
        handle_play_command(
            Some(GameMode::AutoAuto),
            Some(12),
            Some(1),
            false,
            &mut out,
            &mut err,
            &mut stdin,
        )
        .unwrap();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.matches("Computer North plays ").count(), 26);
        assert_eq!(out.matches("Computer South plays ").count(), 26);
        assert!(out.contains("Round 27 | Computer North: "));
    }
}

//! Input parsing for interactive games.
//!
//! Each line typed at the prompt maps to a [`TurnInput`]: a reveal for one
//! seat, a request to leave the game, or an error message to show before
//! prompting again. Which words are accepted depends on the game mode.

use cardwar_engine::game::GameMode;
use cardwar_engine::player::Slot;

/// Result of parsing one line of user input.
#[derive(Debug, PartialEq, Eq)]
pub enum TurnInput {
    /// Reveal the next card for the given seat
    Reveal(Slot),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse a line of user input for the given mode.
///
/// Accepted input (case-insensitive):
/// - human-auto: empty line, "p" or "play" reveals for the human seat
/// - human-human: "1", "n", "north", "top" or "first" reveals for the top
///   seat; "2", "s", "south", "bottom" or "second" for the bottom seat
/// - any mode: "q" or "quit" leaves the game
///
/// # Example
///
/// ```rust
/// # use cardwar_cli::validation::{parse_turn_input, TurnInput};
/// use cardwar_engine::game::GameMode;
/// use cardwar_engine::player::Slot;
///
/// assert_eq!(parse_turn_input(GameMode::HumanAuto, ""), TurnInput::Reveal(Slot::Second));
/// assert_eq!(parse_turn_input(GameMode::HumanHuman, "North"), TurnInput::Reveal(Slot::First));
/// assert_eq!(parse_turn_input(GameMode::HumanHuman, "q"), TurnInput::Quit);
/// ```
pub fn parse_turn_input(mode: GameMode, input: &str) -> TurnInput {
    let input = input.trim().to_lowercase();

    if input == "q" || input == "quit" {
        return TurnInput::Quit;
    }

    match mode {
        GameMode::HumanAuto => match input.as_str() {
            "" | "p" | "play" => TurnInput::Reveal(Slot::Second),
            other => TurnInput::Invalid(format!(
                "Unrecognized input '{}'. Press Enter (or type 'play') to reveal your card, 'q' to quit",
                other
            )),
        },
        GameMode::HumanHuman => match input.as_str() {
            "1" | "n" | "north" | "top" | "first" => TurnInput::Reveal(Slot::First),
            "2" | "s" | "south" | "bottom" | "second" => TurnInput::Reveal(Slot::Second),
            "" => TurnInput::Invalid(
                "Choose a player: '1' for North or '2' for South, 'q' to quit".to_string(),
            ),
            other => TurnInput::Invalid(format!(
                "Unrecognized input '{}'. Valid input: 1/north, 2/south, q",
                other
            )),
        },
        GameMode::AutoAuto => TurnInput::Invalid(
            "Computer vs Computer games take no input; press Ctrl+C to stop".to_string(),
        ),
    }
}

/// Prompt shown before reading a line in an interactive mode.
pub fn prompt_for(mode: GameMode) -> &'static str {
    match mode {
        GameMode::HumanAuto => "Press Enter to reveal your card (q to quit): ",
        GameMode::HumanHuman => "Reveal for 1=North or 2=South (q to quit): ",
        GameMode::AutoAuto => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn human_auto_accepts_enter_and_play() {
        for input in ["", "  ", "p", "P", "play", " Play "] {
            assert_eq!(
                parse_turn_input(GameMode::HumanAuto, input),
                TurnInput::Reveal(Slot::Second),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn human_auto_rejects_seat_choices() {
        assert!(matches!(
            parse_turn_input(GameMode::HumanAuto, "north"),
            TurnInput::Invalid(msg) if msg.contains("Unrecognized")
        ));
    }

    #[test]
    fn human_human_maps_aliases_to_seats() {
        for input in ["1", "n", "north", "TOP", "first"] {
            assert_eq!(
                parse_turn_input(GameMode::HumanHuman, input),
                TurnInput::Reveal(Slot::First)
            );
        }
        for input in ["2", "s", "South", "bottom", "second"] {
            assert_eq!(
                parse_turn_input(GameMode::HumanHuman, input),
                TurnInput::Reveal(Slot::Second)
            );
        }
    }

    #[test]
    fn human_human_requires_a_seat() {
        assert!(matches!(
            parse_turn_input(GameMode::HumanHuman, ""),
            TurnInput::Invalid(_)
        ));
        assert!(matches!(
            parse_turn_input(GameMode::HumanHuman, "3"),
            TurnInput::Invalid(msg) if msg.contains("'3'")
        ));
    }

    #[test]
    fn quit_works_in_every_mode() {
        for mode in GameMode::ALL {
            assert_eq!(parse_turn_input(mode, "quit"), TurnInput::Quit);
            assert_eq!(parse_turn_input(mode, "Q"), TurnInput::Quit);
        }
    }
}

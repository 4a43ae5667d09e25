//! Deal command handler.
//!
//! Shuffles a full deck, splits it between the two seats and prints both
//! halves in draw order. With the same seed, `play` deals exactly these
//! halves for its first game.

use crate::error::CliError;
use crate::formatters::format_deck;
use cardwar_engine::deck::{Deck, partition};
use std::io::Write;

/// Handle the deal command.
///
/// # Examples
///
/// ```
/// use cardwar_cli::commands::deal::handle_deal_command;
/// let mut out = Vec::new();
/// handle_deal_command(Some(42), &mut out).unwrap();
/// ```
pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let (first, second) = partition(Deck::new_with_seed(seed));

    writeln!(out, "Seed: {}", seed)?;
    writeln!(out, "First  ({} cards): {}", first.len(), format_deck(&first))?;
    writeln!(out, "Second ({} cards): {}", second.len(), format_deck(&second))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deal(seed: u64) -> String {
        let mut out = Vec::new();
        handle_deal_command(Some(seed), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn deal_prints_two_halves_of_26() {
        let output = deal(5);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Seed: 5");
        assert!(lines[1].starts_with("First  (26 cards): ["));
        assert!(lines[2].starts_with("Second (26 cards): ["));
        let cards = lines[1].split(": ").nth(1).unwrap().split(' ').count();
        assert_eq!(cards, 26);
    }

    #[test]
    fn same_seed_same_deal() {
        assert_eq!(deal(11), deal(11));
        assert_ne!(deal(11), deal(12));
    }
}

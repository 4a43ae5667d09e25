//! Configuration command handler.
//!
//! This module implements the `cfg` command, which displays the resolved
//! cardwar configuration with the source of every value (default,
//! configuration file, or environment).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "mode": {
//!     "value": "auto-auto",
//!     "source": "default"
//!   },
//!   "seed": {
//!     "value": null,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(format!("Invalid configuration: {}", e)));
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "mode": {
            "value": config.mode,
            "source": sources.mode,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "interval_ms": {
            "value": config.interval_ms,
            "source": sources.interval_ms,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cfg_writes_pretty_json_with_sources() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let result = handle_cfg_command(&mut out, &mut err);
        assert!(result.is_ok(), "cfg failed: {:?}", result);

        let output = String::from_utf8(out).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        for key in ["mode", "seed", "interval_ms"] {
            assert!(json[key].get("value").is_some(), "missing {}.value", key);
            assert!(json[key]["source"].is_string(), "missing {}.source", key);
        }
        assert!(output.contains("\n  "), "output should be pretty-printed");
        assert!(err.is_empty(), "should not write to stderr on success");
    }
}

//! UI helper functions for terminal output formatting.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Display parameter ignored warning
pub fn warn_parameter_unused(
    err: &mut dyn Write,
    param_name: &str,
    context: &str,
) -> std::io::Result<()> {
    display_warning(
        err,
        &format!("Parameter --{} is not used in {} games.", param_name, context),
    )
}

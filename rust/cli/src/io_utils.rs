//! Terminal input helpers for interactive commands.

use std::io::{self, BufRead};

/// Reads a line of input from a buffered reader, blocking until available.
///
/// Trims whitespace and returns `Ok(None)` on EOF. Read failures, including
/// input that is not valid UTF-8, are returned as errors.
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
/// # use cardwar_cli::io_utils::read_stdin_line;
///
/// let mut input = Cursor::new("  play \n");
/// assert_eq!(read_stdin_line(&mut input).unwrap().as_deref(), Some("play"));
/// assert_eq!(read_stdin_line(&mut input).unwrap(), None);
///
/// let mut garbled = Cursor::new(b"\xff\xfe\n".to_vec());
/// assert!(read_stdin_line(&mut garbled).is_err());
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    match stdin.read_line(&mut line)? {
        0 => Ok(None), // EOF
        _ => Ok(Some(line.trim().to_string())),
    }
}

//! Reading the single input line.

use std::io::BufRead;

use thiserror::Error;

/// A read from the input stream failed part-way.
///
/// Carries whatever was read before the failure so the caller can still
/// analyze it.
#[derive(Debug, Error)]
#[error("failed to read input: {source}")]
pub struct InputError {
    partial: String,
    #[source]
    source: std::io::Error,
}

impl InputError {
    /// Text decoded from the bytes read before the error.
    pub fn into_partial(self) -> String {
        self.partial
    }
}

/// Read up to and excluding the first `\n`.
///
/// A trailing `\r` is dropped so CRLF input behaves like LF input. Anything
/// after the first newline is left unread. End of stream without a newline
/// returns what was read; an empty stream returns an empty string. Invalid
/// UTF-8 is replaced with U+FFFD, which the analyzer discards as a non-letter.
///
/// # Errors
///
/// Returns [`InputError`] if the underlying reader fails; the partial line is
/// available through [`InputError::into_partial`].
pub fn read_first_line<R: BufRead>(reader: &mut R) -> Result<String, InputError> {
    let mut buf = Vec::new();
    let outcome = reader.read_until(b'\n', &mut buf);

    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    let line = String::from_utf8_lossy(&buf).into_owned();

    match outcome {
        Ok(_) => Ok(line),
        Err(source) => Err(InputError {
            partial: line,
            source,
        }),
    }
}

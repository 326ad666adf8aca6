use crate::character_sets::{hex_pair, is_no_escape, is_unreserved};
use crate::error::{Error, Result};
use percent_encoding::percent_encode_byte;

/// How a section's characters are canonicalised
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canonicalise {
    /// Lower-case ASCII letters (scheme and host only)
    pub fold_case: bool,
    /// Percent-encode bytes outside the no-escape set
    pub escape: bool,
}

impl Canonicalise {
    /// Rules for scheme and host text
    pub const FOLD: Self = Self {
        fold_case: true,
        escape: false,
    };

    /// Rules for credentials, path, query and fragment text
    pub const ESCAPE: Self = Self {
        fold_case: false,
        escape: true,
    };
}

fn flush(buffer: &mut String, raw: &str, from: usize, to: usize) {
    if from < to {
        buffer.push_str(&raw[from..to]);
    }
}

/// Canonicalise percent-encoding in `raw` and append the result to `buffer`.
///
/// - `%XY` encoding an unreserved byte is decoded.
/// - Any other valid `%XY` is kept, with upper-case hex digits.
/// - A `%` without two hex digits after it is kept as a literal.
/// - With `escape`, bytes outside the no-escape set are percent-encoded.
/// - With `fold_case`, ASCII upper-case letters are lower-cased.
pub fn canonicalise_into(buffer: &mut String, raw: &str, rules: Canonicalise) -> Result<()> {
    let worst_case = if rules.escape { raw.len() * 3 } else { raw.len() };
    buffer
        .try_reserve(worst_case)
        .map_err(|_| Error::NoMemory)?;

    let bytes = raw.as_bytes();
    // Start of the run of bytes that are copied through unchanged
    let mut run = 0;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];

        if b == b'%' {
            let Some(value) = bytes
                .get(i + 1..i + 3)
                .and_then(|hex| hex_pair(hex[0], hex[1]))
            else {
                i += 1;
                continue;
            };

            flush(buffer, raw, run, i);
            if is_unreserved(value) {
                let value = if rules.fold_case {
                    value.to_ascii_lowercase()
                } else {
                    value
                };
                buffer.push(value as char);
            } else {
                buffer.push_str(percent_encode_byte(value));
            }
            i += 3;
            run = i;
        } else if rules.escape && !is_no_escape(b) {
            flush(buffer, raw, run, i);
            buffer.push_str(percent_encode_byte(b));
            i += 1;
            run = i;
        } else if rules.fold_case && b.is_ascii_uppercase() {
            flush(buffer, raw, run, i);
            buffer.push(b.to_ascii_lowercase() as char);
            i += 1;
            run = i;
        } else {
            i += 1;
        }
    }

    flush(buffer, raw, run, bytes.len());
    Ok(())
}

/// Canonicalise percent-encoding in `raw` into a new string
pub fn canonicalise(raw: &str, rules: Canonicalise) -> Result<String> {
    let mut buffer = String::new();
    canonicalise_into(&mut buffer, raw, rules)?;
    Ok(buffer)
}

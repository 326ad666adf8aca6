use crate::character_sets::is_scheme_char;
use crate::types::SchemeType;

/// Check if the text after a host colon can be a port.
/// An empty string qualifies; the caller decides what an empty port means.
pub fn is_port(text: &str) -> bool {
    text.bytes().all(|b| b.is_ascii_digit())
}

/// Check if a port is the one elided for this scheme
pub fn is_redundant_port(scheme_type: SchemeType, port: &str) -> bool {
    scheme_type.redundant_port() == Some(port)
}

/// Check if a string is a syntactically valid scheme:
/// `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`
pub fn is_scheme(scheme: &str) -> bool {
    let mut bytes = scheme.bytes();
    bytes.next().is_some_and(|b| b.is_ascii_alphabetic()) && bytes.all(is_scheme_char)
}

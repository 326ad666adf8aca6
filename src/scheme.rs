use crate::types::SchemeType;

/// Get the scheme type from a scheme string, ignoring ASCII case.
/// Filters by length and first byte before the full comparison.
pub fn get_scheme_type(scheme: &str) -> SchemeType {
    let bytes = scheme.as_bytes();
    let is = |name: &[u8]| bytes.eq_ignore_ascii_case(name);

    match (bytes.len(), bytes.first().map(u8::to_ascii_lowercase)) {
        (3, Some(b'f')) if is(b"ftp") => SchemeType::Ftp,
        (4, Some(b'h')) if is(b"http") => SchemeType::Http,
        (4, Some(b'f')) if is(b"file") => SchemeType::File,
        (4, Some(b'd')) if is(b"data") => SchemeType::Data,
        (5, Some(b'h')) if is(b"https") => SchemeType::Https,
        (6, Some(b'm')) if is(b"mailto") => SchemeType::Mailto,
        _ => SchemeType::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_type() {
        assert_eq!(get_scheme_type("http"), SchemeType::Http);
        assert_eq!(get_scheme_type("https"), SchemeType::Https);
        assert_eq!(get_scheme_type("ftp"), SchemeType::Ftp);
        assert_eq!(get_scheme_type("file"), SchemeType::File);
        assert_eq!(get_scheme_type("mailto"), SchemeType::Mailto);
        assert_eq!(get_scheme_type("data"), SchemeType::Data);
        assert_eq!(get_scheme_type("custom"), SchemeType::Other);
    }

    #[test]
    fn test_scheme_type_ignores_case() {
        assert_eq!(get_scheme_type("HTTP"), SchemeType::Http);
        assert_eq!(get_scheme_type("hTtPs"), SchemeType::Https);
        assert_eq!(get_scheme_type("MailTo"), SchemeType::Mailto);
        assert_eq!(get_scheme_type("httpx"), SchemeType::Other);
        assert_eq!(get_scheme_type(""), SchemeType::Other);
    }
}

/// Check if 4 bytes match "xn--" (case insensitive)
fn is_punycode_prefix(slice: &[u8]) -> bool {
    slice.len() >= 4
        && matches!(slice[0], b'x' | b'X')
        && matches!(slice[1], b'n' | b'N')
        && slice[2] == b'-'
        && slice[3] == b'-'
}

/// Check if domain contains Punycode (xn-- prefix, case insensitive)
pub fn has_punycode(domain: &str) -> bool {
    let bytes = domain.as_bytes();
    if bytes.len() < 4 {
        return false;
    }

    if is_punycode_prefix(bytes) {
        return true;
    }

    memchr::memchr_iter(b'.', bytes).any(|pos| is_punycode_prefix(&bytes[pos + 1..]))
}

/// Encode a host into its ASCII-compatible form (IDNA `ToASCII`).
///
/// Returns `None` when the host cannot be encoded; callers keep the
/// normalised host text in that case.
pub fn idna_encode(host: &str) -> Option<String> {
    if host.is_empty() {
        return None;
    }

    // Plain LDH hosts need no IDNA processing, only lower-casing
    if host.is_ascii() && !host.contains('%') && !has_punycode(host) {
        let mut result = String::with_capacity(host.len());

        for b in host.bytes() {
            match b {
                b'A'..=b'Z' => result.push(b.to_ascii_lowercase() as char),
                b'a'..=b'z' | b'0'..=b'9' | b'.' | b'-' => result.push(b as char),
                _ => return None,
            }
        }

        return Some(result);
    }

    idna::domain_to_ascii(host).ok()
}

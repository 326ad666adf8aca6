/// RFC 3986 section 2.3 unreserved characters:
/// `ALPHA / DIGIT / "-" / "." / "_" / "~"`
const UNRESERVED_TABLE: [bool; 256] = {
    let mut table = [false; 256];

    let mut i = b'a';
    while i <= b'z' {
        table[i as usize] = true;
        i += 1;
    }
    let mut i = b'A';
    while i <= b'Z' {
        table[i as usize] = true;
        i += 1;
    }
    let mut i = b'0';
    while i <= b'9' {
        table[i as usize] = true;
        i += 1;
    }
    table[b'-' as usize] = true;
    table[b'.' as usize] = true;
    table[b'_' as usize] = true;
    table[b'~' as usize] = true;

    table
};

/// Bytes that may stay unescaped in any section of a normalised URL.
/// Controls, space, DEL and every byte above 0x7F must be escaped.
const NO_ESCAPE_TABLE: [bool; 256] = {
    let mut table = [false; 256];

    let mut i = 0x21;
    while i <= 0x7E {
        table[i] = true;
        i += 1;
    }

    table[b'"' as usize] = false;
    table[b'%' as usize] = false;
    table[b'<' as usize] = false;
    table[b'>' as usize] = false;
    table[b'\\' as usize] = false;
    table[b'^' as usize] = false;
    table[b'`' as usize] = false;
    table[b'{' as usize] = false;
    table[b'}' as usize] = false;

    table
};

/// Check if a byte is an unreserved character
pub fn is_unreserved(b: u8) -> bool {
    UNRESERVED_TABLE[b as usize]
}

/// Check if a byte can be left unescaped
pub fn is_no_escape(b: u8) -> bool {
    NO_ESCAPE_TABLE[b as usize]
}

/// Check if a byte is ASCII whitespace (space, tab, LF, VT, FF, CR)
pub fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Check if a byte may follow the first letter of a scheme
pub fn is_scheme_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.')
}

/// Value of a single hex digit
pub fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Decode the two hex digits of a percent-encoded triplet
pub fn hex_pair(hi: u8, lo: u8) -> Option<u8> {
    Some((hex_value(hi)? << 4) | hex_value(lo)?)
}

use tracing::trace;

/// Remove `.` and `..` segments from a path (RFC 3986 section 5.2.4).
///
/// The output is built in a separate buffer; `path` is only read.
pub fn remove_dot_segments(path: &str) -> String {
    let input = path.as_bytes();
    let at = |i: usize| input.get(i).copied().unwrap_or(0);
    let mut output = String::with_capacity(path.len());
    let mut i = 0;

    while i < input.len() {
        match (at(i), at(i + 1), at(i + 2), at(i + 3)) {
            // "../" prefix
            (b'.', b'.', b'/', _) => i += 3,
            // "./" prefix
            (b'.', b'/', _, _) => i += 2,
            // "/./" becomes "/"
            (b'/', b'.', b'/', _) => i += 2,
            // "/." at the end becomes "/"
            (b'/', b'.', 0, _) if i + 2 == input.len() => {
                output.push('/');
                break;
            }
            // "/../" becomes "/" and drops the last output segment
            (b'/', b'.', b'.', b'/') => {
                i += 3;
                let cut = output.rfind('/').unwrap_or(0);
                output.truncate(cut);
            }
            // "/.." at the end becomes "/" and drops the last output segment
            (b'/', b'.', b'.', 0) if i + 3 == input.len() => {
                let cut = output.rfind('/').unwrap_or(0);
                output.truncate(cut);
                output.push('/');
                break;
            }
            // "." or ".." is all that is left
            (b'.', 0, _, _) if i + 1 == input.len() => break,
            (b'.', b'.', 0, _) if i + 2 == input.len() => break,
            _ => {
                // Copy the first byte, then up to but not including the next "/"
                let next = memchr::memchr(b'/', &input[i + 1..]).map_or(input.len(), |n| i + 1 + n);
                output.push_str(&path[i..next]);
                i = next;
            }
        }
    }

    trace!(input = path, output = %output, "removed dot segments");
    output
}

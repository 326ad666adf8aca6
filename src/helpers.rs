/// All of a base path up to and including its last `/`.
/// This is the part a relative path is appended to when merging.
pub fn merge_prefix(path: &str) -> &str {
    memchr::memrchr(b'/', path.as_bytes()).map_or("", |pos| &path[..=pos])
}

/// Last segment of a path.
/// The root path is its own leaf; a path ending in `/` has an empty leaf.
pub fn leaf(path: &str) -> &str {
    if path == "/" {
        return path;
    }
    memchr::memrchr(b'/', path.as_bytes()).map_or(path, |pos| &path[pos + 1..])
}

/// Path of the parent directory: drops any trailing `/`, then the last
/// segment, keeping the `/` before it.
pub fn parent_path(path: &str) -> &str {
    if path.len() <= 1 {
        return path;
    }
    let trimmed = path.strip_suffix('/').unwrap_or(path);
    merge_prefix(trimmed)
}

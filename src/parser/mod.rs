mod dot_segments;
mod markers;
mod section;

pub use dot_segments::remove_dot_segments;
pub use markers::{Markers, scan};
pub use section::{Section, normalize_section};

use crate::error::{Error, Result};
use crate::helpers::merge_prefix;
use crate::url_components::UrlComponents;
use tracing::debug;

/// Parse and normalise an absolute URL string.
///
/// Input without a scheme is taken to be an `http` URL. An `http` or
/// `https` URL without a host is rejected with [`Error::BadUrl`].
pub fn parse_url(input: &str) -> Result<UrlComponents> {
    let markers = scan(input, false);
    let mut c = UrlComponents::default();

    for section in Section::ALL {
        normalize_section(input, section, &markers, &mut c)?;
    }

    let needs_host = c
        .scheme
        .as_deref()
        .is_some_and(|scheme| scheme == "http" || scheme == "https");
    if needs_host && c.host.is_none() {
        debug!(input, "rejecting URL without a host");
        return Err(Error::BadUrl);
    }

    Ok(c)
}

/// Resolve a relative reference against `base` (RFC 3986 section 5.2.2).
///
/// Components missing from `relative` are inherited from `base`, up to
/// the first one `relative` supplies. The fragment always comes from
/// `relative`.
pub fn join_url(base: &UrlComponents, relative: &str) -> Result<UrlComponents> {
    let markers = scan(relative, true);
    debug!(relative, ?markers, "joining URL");

    let mut c = UrlComponents::default();
    // Path text that still has to be normalised, after dot-segment removal
    let mut path = None;
    let mut inherit_query = false;

    if markers.has_scheme() {
        normalize_section(relative, Section::Scheme, &markers, &mut c)?;
    } else {
        c.scheme = base.scheme.clone();
        c.scheme_type = base.scheme_type;
    }

    if markers.has_scheme() || markers.has_authority() {
        normalize_section(relative, Section::Credentials, &markers, &mut c)?;
        normalize_section(relative, Section::Host, &markers, &mut c)?;
        path = Some(remove_dot_segments(markers.path(relative)));
    } else {
        c.username = base.username.clone();
        c.password = base.password.clone();
        c.host = base.host.clone();
        c.port = base.port.clone();

        let relative_path = markers.path(relative);
        if !markers.has_path() {
            c.path = base.path.clone();
            inherit_query = !markers.has_query();
        } else if !relative_path.starts_with('/') {
            let mut merged = String::from(merge_prefix(base.path.as_deref().unwrap_or("/")));
            merged
                .try_reserve(relative_path.len())
                .map_err(|_| Error::NoMemory)?;
            merged.push_str(relative_path);
            path = Some(remove_dot_segments(&merged));
        } else {
            path = Some(remove_dot_segments(relative_path));
        }
    }

    if let Some(path) = path {
        normalize_section(&path, Section::Path, &Markers::for_path(path.len()), &mut c)?;
    }

    if inherit_query {
        c.query = base.query.clone();
    } else {
        normalize_section(relative, Section::Query, &markers, &mut c)?;
    }
    normalize_section(relative, Section::Fragment, &markers, &mut c)?;

    Ok(c)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::SchemeType;
    use crate::url_components::ComponentMask;

    fn string(c: &UrlComponents) -> String {
        c.serialize(ComponentMask::WITH_FRAGMENT).unwrap()
    }

    fn join(base: &str, relative: &str) -> String {
        let base = parse_url(base).unwrap();
        string(&join_url(&base, relative).unwrap())
    }

    #[test]
    fn test_parse_basic() {
        let c = parse_url("http://example.com").unwrap();
        assert_eq!(c.scheme.as_deref(), Some("http"));
        assert_eq!(c.host.as_deref(), Some("example.com"));
        assert_eq!(c.path.as_deref(), Some("/"));
        assert_eq!(c.scheme_type, SchemeType::Http);
    }

    #[test]
    fn test_parse_leaves_dot_segments() {
        let c = parse_url("http://example.com/a/../b").unwrap();
        assert_eq!(c.path.as_deref(), Some("/a/../b"));
    }

    #[test]
    fn test_parse_rejects_missing_host() {
        assert_eq!(parse_url("http://"), Err(Error::BadUrl));
        assert_eq!(parse_url("https://?q"), Err(Error::BadUrl));
        assert_eq!(parse_url("http:///"), Err(Error::BadUrl));
        assert_eq!(parse_url(""), Err(Error::BadUrl));
        assert_eq!(parse_url("   "), Err(Error::BadUrl));
        assert!(parse_url("mailto:").is_ok());
        assert!(parse_url("file:///x").is_ok());
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let c = parse_url("  http://a/b  \n").unwrap();
        assert_eq!(string(&c), "http://a/b");
    }

    #[test]
    fn test_join_inherits() {
        let base = "http://u:p@a:8/b/c?q#f";
        assert_eq!(join(base, ""), "http://u:p@a:8/b/c?q");
        assert_eq!(join(base, "#g"), "http://u:p@a:8/b/c?q#g");
        assert_eq!(join(base, "?y"), "http://u:p@a:8/b/c?y");
        assert_eq!(join(base, "d"), "http://u:p@a:8/b/d");
        assert_eq!(join(base, "/d"), "http://u:p@a:8/d");
        assert_eq!(join(base, "//h/d"), "http://h/d");
        assert_eq!(join(base, "ftp://h/d"), "ftp://h/d");
    }

    #[test]
    fn test_join_removes_dot_segments() {
        let base = "http://a/b/c/d;p?q";
        assert_eq!(join(base, "../g"), "http://a/b/g");
        assert_eq!(join(base, "/./g"), "http://a/g");
        assert_eq!(join(base, "//g/x/../y"), "http://g/y");
        assert_eq!(join(base, "g/./h/.."), "http://a/b/c/g/");
    }

    #[test]
    fn test_join_keeps_scheme_without_host() {
        assert_eq!(join("http://a/b", "http:g"), "http:g");
    }

    #[test]
    fn test_join_onto_base_without_path() {
        assert_eq!(join("mailto:me@host", "x"), "mailto://me@host/x");
    }
}

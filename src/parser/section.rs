use super::markers::Markers;
use crate::checkers::{is_port, is_redundant_port};
use crate::error::Result;
use crate::intern::Atom;
use crate::scheme::get_scheme_type;
use crate::unicode::idna::idna_encode;
use crate::unicode::percent_encode::{Canonicalise, canonicalise};
use crate::url_components::UrlComponents;
use tracing::debug;

/// The parts of a URL string that are normalised independently
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Scheme,
    Credentials,
    Host,
    Path,
    Query,
    Fragment,
}

impl Section {
    /// Every section, in the order they must be normalised
    ///
    /// The path default depends on the scheme and host, so those come first.
    pub const ALL: [Self; 6] = [
        Self::Scheme,
        Self::Credentials,
        Self::Host,
        Self::Path,
        Self::Query,
        Self::Fragment,
    ];
}

fn intern_nonempty(text: &str) -> Option<Atom> {
    (!text.is_empty()).then(|| Atom::intern(text))
}

/// Normalise one section of `input` and store it in `c`.
///
/// Sections already normalised into `c` are read where a later one
/// depends on them: the path default needs the scheme type and the host.
pub fn normalize_section(
    input: &str,
    section: Section,
    markers: &Markers,
    c: &mut UrlComponents,
) -> Result<()> {
    match section {
        Section::Scheme => {
            let scheme = canonicalise(markers.scheme(input), Canonicalise::FOLD)?;
            let scheme = if scheme.is_empty() { "http" } else { &scheme };
            c.scheme_type = get_scheme_type(scheme);
            c.scheme = Some(Atom::intern(scheme));
        }
        Section::Credentials => {
            c.username = None;
            c.password = None;

            if c.scheme_type.suppresses_authority() {
                return Ok(());
            }
            let Some(credentials) = markers.credentials(input) else {
                return Ok(());
            };
            // mailto local parts may hold colons
            let split = if c.scheme_type.splits_authority_colons() {
                credentials.split_once(':')
            } else {
                None
            };
            let (username, password) = match split {
                // An empty username means no credentials at all
                Some(("", _)) => return Ok(()),
                Some((username, password)) => (username, password),
                None => (credentials, ""),
            };
            c.username = intern_nonempty(&canonicalise(username, Canonicalise::ESCAPE)?);
            c.password = intern_nonempty(&canonicalise(password, Canonicalise::ESCAPE)?);
        }
        Section::Host => {
            c.host = None;
            c.port = None;

            if c.scheme_type.suppresses_authority() {
                return Ok(());
            }

            let host_start = markers.host_start(input);
            let text = markers.host(input);
            let (host, port) = match port_separator(markers, host_start) {
                Some(colon) if is_port(&input[colon + 1..markers.path]) => (
                    &input[host_start..colon],
                    &input[colon + 1..markers.path],
                ),
                _ => (text, ""),
            };

            if host.is_empty() {
                // No host, no credentials
                c.username = None;
                c.password = None;
                return Ok(());
            }

            let folded = canonicalise(host, Canonicalise::FOLD)?;
            let host = match idna_encode(&folded) {
                Some(encoded) => encoded,
                None => {
                    debug!(host = %folded, "IDNA encoding failed, keeping host text");
                    canonicalise(&folded, Canonicalise::ESCAPE)?
                }
            };
            c.host = Some(Atom::intern(&host));

            if !is_redundant_port(c.scheme_type, port) {
                c.port = intern_nonempty(port);
            }
        }
        Section::Path => {
            let path = canonicalise(markers.path(input), Canonicalise::ESCAPE)?;
            c.path = if !path.is_empty() {
                Some(Atom::intern(&path))
            } else if c.scheme_type.defaults_path(c.host.is_some()) {
                Some(Atom::intern("/"))
            } else {
                None
            };
        }
        Section::Query => {
            c.query = match markers.query(input) {
                Some(query) => Some(Atom::intern(&canonicalise(query, Canonicalise::ESCAPE)?)),
                None => None,
            };
        }
        Section::Fragment => {
            let fragment = canonicalise(markers.fragment(input), Canonicalise::ESCAPE)?;
            c.fragment = intern_nonempty(&fragment);
        }
    }

    Ok(())
}

/// Offset of the colon separating host and port, if the host has one.
///
/// The last colon in the authority wins when it lies in the host; with a
/// single colon, the first one is used.
fn port_separator(markers: &Markers, host_start: usize) -> Option<usize> {
    let in_host = |pos: usize| pos >= host_start && pos < markers.path;

    if markers.colon_last != markers.authority && in_host(markers.colon_last) {
        Some(markers.colon_last)
    } else if markers.colon_first != markers.authority && in_host(markers.colon_first) {
        Some(markers.colon_first)
    } else {
        None
    }
}

use crate::checkers::{is_redundant_port, is_scheme};
use crate::error::{Error, Result};
use crate::helpers::{leaf, parent_path};
use crate::intern::Atom;
use crate::parser::{Markers, Section, join_url, normalize_section, parse_url};
use crate::scheme::get_scheme_type;
use crate::types::SchemeType;
use crate::url_components::{ComponentMask, UrlComponents};
use core::fmt;
use core::hash::{Hash, Hasher};
use core::str::FromStr;
use std::sync::Arc;
use tracing::debug;

struct UrlInner {
    components: UrlComponents,
    /// Full string, fragment included
    string: String,
    /// Fragment-insensitive hash of the components
    hash: u32,
}

/// An immutable, normalised URL
///
/// Cloning a `Url` takes another reference to the same value; the
/// components and the cached string are freed with the last reference.
/// A `Url` can be shared between threads.
///
/// # Examples
///
/// ```
/// use nsurl::Url;
///
/// let url = Url::parse("HTTP://Example.COM:80/a/b?q#top").unwrap();
/// assert_eq!(url.as_str(), "http://example.com/a/b?q#top");
/// assert_eq!(url.host(), Some("example.com"));
/// assert_eq!(url.port(), None);
/// ```
#[derive(Clone)]
pub struct Url(Arc<UrlInner>);

impl Url {
    fn from_components(components: UrlComponents) -> Result<Self> {
        let string = components.serialize(ComponentMask::WITH_FRAGMENT)?;
        let hash = components.hash_value();
        Ok(Self(Arc::new(UrlInner {
            components,
            string,
            hash,
        })))
    }

    /// Parse and normalise an absolute URL
    ///
    /// Leading and trailing whitespace is ignored. Text without a scheme is
    /// taken to be an `http` URL, so `"example.com"` gives
    /// `"http://example.com/"`.
    ///
    /// # Errors
    ///
    /// [`Error::BadUrl`] if an `http` or `https` URL has no host.
    pub fn parse(input: &str) -> Result<Self> {
        Self::from_components(parse_url(input)?)
    }

    /// Resolve a relative reference against this URL
    ///
    /// # Examples
    ///
    /// ```
    /// use nsurl::Url;
    ///
    /// let base = Url::parse("http://a/b/c/d;p?q").unwrap();
    /// assert_eq!(base.join("../g").unwrap().as_str(), "http://a/b/g");
    /// assert_eq!(base.join("#s").unwrap().as_str(), "http://a/b/c/d;p?q#s");
    /// ```
    pub fn join(&self, relative: &str) -> Result<Self> {
        Self::from_components(join_url(&self.0.components, relative)?)
    }

    /// Check if both values are the same reference
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }

    /// Number of live references to this value
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.0)
    }

    /// Check if the components in `parts` match in both URLs
    ///
    /// A component missing from one URL only matches if it is missing from
    /// the other as well.
    pub fn compare(&self, other: &Self, parts: ComponentMask) -> bool {
        Self::ptr_eq(self, other) || self.0.components.compare(&other.0.components, parts)
    }

    /// The full URL string
    pub fn as_str(&self) -> &str {
        &self.0.string
    }

    /// The URL string for log output, with `data:` URLs abbreviated
    pub fn access_log(&self) -> &str {
        match self.scheme_type() {
            SchemeType::Data => "[data url]",
            SchemeType::Other
            | SchemeType::Http
            | SchemeType::Https
            | SchemeType::File
            | SchemeType::Ftp
            | SchemeType::Mailto => self.as_str(),
        }
    }

    /// Byte length of the full URL string
    pub fn length(&self) -> usize {
        self.0.string.len()
    }

    /// Hash of every component except the fragment
    pub fn hash_value(&self) -> u32 {
        self.0.hash
    }

    /// Build a string holding only the components in `parts`
    ///
    /// # Errors
    ///
    /// [`Error::BadUrl`] if none of the requested components are present.
    ///
    /// # Examples
    ///
    /// ```
    /// use nsurl::{ComponentMask, Url};
    ///
    /// let url = Url::parse("https://example.com:8443/index.html").unwrap();
    /// let origin = url
    ///     .get(ComponentMask::SCHEME | ComponentMask::HOST | ComponentMask::PORT)
    ///     .unwrap();
    /// assert_eq!(origin, "https://example.com:8443");
    /// ```
    pub fn get(&self, parts: ComponentMask) -> Result<String> {
        self.0.components.serialize(parts)
    }

    /// Get one component
    ///
    /// Returns `None` if the component is absent, or if `part` does not
    /// name exactly one component.
    pub fn component(&self, part: ComponentMask) -> Option<Atom> {
        match self.0.components.slot(part) {
            Some(slot) => slot.clone(),
            None => {
                debug!(?part, "component() needs a single component");
                None
            }
        }
    }

    /// Check if a component is present
    ///
    /// [`ComponentMask::CREDENTIALS`] asks whether there is a username.
    pub fn has_component(&self, part: ComponentMask) -> bool {
        if part == ComponentMask::CREDENTIALS {
            return self.0.components.username.is_some();
        }
        match self.0.components.slot(part) {
            Some(slot) => slot.is_some(),
            None => {
                debug!(?part, "has_component() needs a single component");
                false
            }
        }
    }

    pub fn scheme(&self) -> &str {
        self.0.components.scheme.as_deref().unwrap_or_default()
    }

    pub fn username(&self) -> Option<&str> {
        self.0.components.username.as_deref()
    }

    pub fn password(&self) -> Option<&str> {
        self.0.components.password.as_deref()
    }

    pub fn host(&self) -> Option<&str> {
        self.0.components.host.as_deref()
    }

    pub fn port(&self) -> Option<&str> {
        self.0.components.port.as_deref()
    }

    pub fn path(&self) -> Option<&str> {
        self.0.components.path.as_deref()
    }

    /// Query text, without the `?`
    pub fn query(&self) -> Option<&str> {
        self.0.components.query.as_deref()
    }

    /// Fragment text, without the `#`
    pub fn fragment(&self) -> Option<&str> {
        self.0.components.fragment.as_deref()
    }

    pub fn scheme_type(&self) -> SchemeType {
        self.0.components.scheme_type
    }

    /// Last segment of the path
    ///
    /// The root path gives `"/"`, a URL without a path gives `""`.
    pub fn leaf(&self) -> &str {
        self.path().map_or("", leaf)
    }

    /// This URL without its fragment
    pub fn defragment(&self) -> Result<Self> {
        if self.0.components.fragment.is_none() {
            return Ok(self.clone());
        }
        Self::from_components(UrlComponents {
            fragment: None,
            ..self.0.components.clone()
        })
    }

    /// This URL with its fragment replaced
    ///
    /// `fragment` is given without a leading `#` and is normalised. An
    /// empty fragment removes it.
    pub fn refragment(&self, fragment: &str) -> Result<Self> {
        let mut components = self.0.components.clone();
        let markers = Markers::for_fragment(fragment.len());
        normalize_section(fragment, Section::Fragment, &markers, &mut components)?;
        Self::from_components(components)
    }

    /// This URL with its query replaced
    ///
    /// `query` must start with `?`; the rest is normalised as query text.
    ///
    /// # Errors
    ///
    /// [`Error::BadParameter`] if `query` does not start with `?`.
    pub fn replace_query(&self, query: &str) -> Result<Self> {
        if !query.starts_with('?') {
            return Err(Error::BadParameter);
        }

        let mut components = self.0.components.clone();
        let markers = Markers::for_query(query.len());
        normalize_section(query, Section::Query, &markers, &mut components)?;
        Self::from_components(components)
    }

    /// This URL with a different scheme
    ///
    /// The rules of the new scheme are applied to the other components:
    /// `file` drops the authority and `http` drops port 80.
    ///
    /// # Errors
    ///
    /// [`Error::BadParameter`] if `scheme` is not a valid scheme name, and
    /// [`Error::BadUrl`] if the new scheme needs a host that is missing.
    pub fn replace_scheme(&self, scheme: &str) -> Result<Self> {
        if !is_scheme(scheme) {
            return Err(Error::BadParameter);
        }

        let scheme = scheme.to_ascii_lowercase();
        let scheme_type = get_scheme_type(&scheme);
        let mut components = UrlComponents {
            scheme: Some(Atom::intern(&scheme)),
            scheme_type,
            ..self.0.components.clone()
        };

        if scheme_type.suppresses_authority() {
            components.username = None;
            components.password = None;
            components.host = None;
            components.port = None;
        }
        if components
            .port
            .as_deref()
            .is_some_and(|port| is_redundant_port(scheme_type, port))
        {
            components.port = None;
        }
        if components.path.is_none() && scheme_type.defaults_path(components.host.is_some()) {
            components.path = Some(Atom::intern("/"));
        }
        if scheme_type.is_http() && components.host.is_none() {
            debug!(scheme = %scheme, "new scheme needs a host");
            return Err(Error::BadUrl);
        }

        Self::from_components(components)
    }

    /// Suggest a file name for the resource
    ///
    /// Uses the last path segment, skipping a trailing `index.*` or
    /// `default.*` page. Falls back to the host with `.` replaced by `_`.
    ///
    /// # Examples
    ///
    /// ```
    /// use nsurl::Url;
    ///
    /// let url = Url::parse("http://www.example.org/docs/guide.pdf").unwrap();
    /// assert_eq!(url.nice(false).as_deref(), Some("guide.pdf"));
    /// assert_eq!(url.nice(true).as_deref(), Some("guide"));
    ///
    /// let url = Url::parse("http://www.example.org/").unwrap();
    /// assert_eq!(url.nice(false).as_deref(), Some("www_example_org"));
    /// ```
    pub fn nice(&self, remove_extensions: bool) -> Option<String> {
        if let Some(name) = self.path().and_then(nice_segment) {
            let name = match name.find('.') {
                Some(dot) if remove_extensions && dot != 0 => &name[..dot],
                _ => name,
            };
            return Some(name.to_string());
        }

        self.host().map(|host| host.replace('.', "_"))
    }

    /// The URL of the parent directory, without query or fragment
    ///
    /// # Examples
    ///
    /// ```
    /// use nsurl::Url;
    ///
    /// let url = Url::parse("http://a/b/c/d?q#f").unwrap();
    /// assert_eq!(url.parent().unwrap().as_str(), "http://a/b/c/");
    /// ```
    pub fn parent(&self) -> Result<Self> {
        let c = &self.0.components;
        let path = match c.path.as_deref() {
            Some(path) => {
                let parent = parent_path(path);
                if parent.len() == path.len() {
                    c.path.clone()
                } else {
                    Some(Atom::intern(parent))
                }
            }
            None => None,
        };

        Self::from_components(UrlComponents {
            path,
            query: None,
            fragment: None,
            ..c.clone()
        })
    }
}

fn is_index_page(segment: &str) -> bool {
    let starts_with = |prefix: &str| {
        segment
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    };
    starts_with("index.") || starts_with("default.")
}

/// Last non-empty path segment worth naming a file after
fn nice_segment(path: &str) -> Option<&str> {
    let mut segments = path.split('/').filter(|s| !s.is_empty()).rev();
    let mut segment = segments.next()?;
    if is_index_page(segment) {
        segment = segments.next()?;
    }
    (!is_index_page(segment)).then_some(segment)
}

impl FromStr for Url {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl PartialEq for Url {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other, ComponentMask::WITH_FRAGMENT)
    }
}

impl Eq for Url {}

impl Hash for Url {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.hash_value());
    }
}

impl AsRef<str> for Url {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Url").field(&self.as_str()).finish()
    }
}

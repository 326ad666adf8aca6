//! Immutable, normalised URL values.
//!
//! [`Url::parse`] scans a URL string, normalises each component (case,
//! percent-encoding, IDNA hosts, default ports) and caches the canonical
//! string. [`Url::join`] resolves relative references against a base as in
//! RFC 3986. Components are interned [`Atom`]s, so equal URLs share
//! storage and compare cheaply.
//!
//! ```
//! use nsurl::{ComponentMask, Url};
//!
//! let base = Url::parse("http://Example.COM/a/b/c").unwrap();
//! let url = base.join("../d?x=1 2").unwrap();
//! assert_eq!(url.as_str(), "http://example.com/a/d?x=1%202");
//! assert!(url.compare(&base, ComponentMask::SCHEME | ComponentMask::HOST));
//! ```

// Internal modules (not public API)
mod character_sets;
mod checkers;
mod error;
mod helpers;
mod intern;
mod parser;
mod scheme;
mod types;
mod unicode;
mod url;
mod url_components;

// Public API
pub use error::{Error, Result};
pub use intern::Atom;
pub use parser::remove_dot_segments;
pub use types::SchemeType;
pub use url::Url;
pub use url_components::ComponentMask;

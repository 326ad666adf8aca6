//! Process-wide table of interned component strings.
//!
//! Every URL component is stored as an [`Atom`]. Interning the same text
//! twice yields handles to the same allocation for as long as any handle is
//! alive, which makes equality a pointer comparison in the common case and
//! lets URLs that share components share their storage.

use std::collections::HashMap;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::{Arc, LazyLock, Mutex, PoisonError, Weak};

type AtomTable = HashMap<Arc<str>, Weak<AtomData>>;

static ATOMS: LazyLock<Mutex<AtomTable>> = LazyLock::new(|| Mutex::new(HashMap::new()));

struct AtomData {
    text: Arc<str>,
    hash: u32,
}

impl Drop for AtomData {
    fn drop(&mut self) {
        let mut table = ATOMS.lock().unwrap_or_else(PoisonError::into_inner);
        // A racing intern may already have replaced this entry with a live atom.
        if table
            .get(&*self.text)
            .is_some_and(|entry| entry.strong_count() == 0)
        {
            table.remove(&*self.text);
        }
    }
}

fn hash_text(text: &str) -> u32 {
    let mut hasher = DefaultHasher::new();
    text.hash(&mut hasher);
    hasher.finish() as u32
}

/// An interned, immutable, reference-counted string.
///
/// Cloning takes another reference; dropping the last reference releases the
/// string from the table.
#[derive(Clone)]
pub struct Atom(Arc<AtomData>);

impl Atom {
    /// Intern `text`, returning the existing atom if one is alive.
    pub fn intern(text: &str) -> Self {
        let mut table = ATOMS.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(existing) = table.get(text).and_then(Weak::upgrade) {
            return Self(existing);
        }

        let key: Arc<str> = Arc::from(text);
        let data = Arc::new(AtomData {
            text: Arc::clone(&key),
            hash: hash_text(text),
        });
        table.insert(key, Arc::downgrade(&data));
        Self(data)
    }

    /// Get the interned text
    pub fn as_str(&self) -> &str {
        &self.0.text
    }

    /// Length of the text in bytes
    pub fn len(&self) -> usize {
        self.0.text.len()
    }

    /// Check if the text is empty
    pub fn is_empty(&self) -> bool {
        self.0.text.is_empty()
    }

    /// Hash of the text, computed once when it was interned
    pub fn hash_value(&self) -> u32 {
        self.0.hash
    }

    /// Check if two handles refer to the same interned string
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }

    /// Number of live handles to this string
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.0)
    }
}

impl PartialEq for Atom {
    fn eq(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other) || self.0.text == other.0.text
    }
}

impl Eq for Atom {}

impl PartialEq<str> for Atom {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Atom {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl Hash for Atom {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.0.hash);
    }
}

impl core::ops::Deref for Atom {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for Atom {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl core::fmt::Display for Atom {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::fmt::Debug for Atom {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(self.as_str(), f)
    }
}

#[cfg(test)]
fn is_interned(text: &str) -> bool {
    ATOMS
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get(text)
        .is_some_and(|entry| entry.strong_count() > 0)
}

//! Identity inputs: who the avatar is for.
//!
//! - `DisplayNameProvider` - capability implemented by any identity source
//! - `hash` - identity key → palette index
//! - `glyph` - display name → rendered label

mod glyph;
mod hash;

pub use glyph::{extract_glyph, PLACEHOLDER};
pub use hash::{background_colour, hash_to_index, is_canonical_hex, normalize_identity};

/// Anything an avatar can be drawn for: a user, a guest, a group.
pub trait DisplayNameProvider {
    /// Human-readable name the glyph is taken from.
    fn display_name(&self) -> &str;

    /// Stable key hashed for the background colour.
    ///
    /// Defaults to the display name.
    fn identity_key(&self) -> &str {
        self.display_name()
    }
}

impl DisplayNameProvider for str {
    fn display_name(&self) -> &str {
        self
    }
}

impl DisplayNameProvider for String {
    fn display_name(&self) -> &str {
        self
    }
}

impl<T: DisplayNameProvider + ?Sized> DisplayNameProvider for &T {
    fn display_name(&self) -> &str {
        (**self).display_name()
    }

    fn identity_key(&self) -> &str {
        (**self).identity_key()
    }
}

/// A display name paired with an independent identity key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    display_name: String,
    key: String,
}

impl Identity {
    /// Identity whose key is its display name.
    pub fn new(display_name: impl Into<String>) -> Self {
        let display_name = display_name.into();
        Self {
            key: display_name.clone(),
            display_name,
        }
    }

    /// Identity with a separate stable key (user id, stored hash).
    pub fn with_key(display_name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            key: key.into(),
        }
    }
}

impl DisplayNameProvider for Identity {
    fn display_name(&self) -> &str {
        &self.display_name
    }

    fn identity_key(&self) -> &str {
        &self.key
    }
}

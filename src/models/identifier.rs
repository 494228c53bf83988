//! Account identifiers: usernames and UUIDs.
//!
//! The service accepts either form in the same path position, so the client
//! itself takes a plain `&str`. [`Identifier`] is for callers that want to
//! know which one they hold, e.g. to normalise UUIDs before display.

use std::fmt;

use uuid::Uuid;

/// Dashed UUID of the stock "Steve" account.
pub const STEVE_UUID: &str = "8667ba71-b85a-4004-af54-457a9734eed7";

/// Dashed UUID of the stock "Alex" account.
pub const ALEX_UUID: &str = "6ab43178-89fd-4905-97f6-0f67d9d76fd9";

/// A username or a UUID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifier {
    Username(String),
    Uuid(Uuid),
}

impl Identifier {
    /// Classify raw input.
    ///
    /// Only the 32-digit (undashed) and 36-character (dashed) hex forms count
    /// as UUIDs. Anything else is kept verbatim as a username.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if matches!(raw.len(), 32 | 36) {
            if let Ok(uuid) = Uuid::parse_str(raw) {
                return Identifier::Uuid(uuid);
            }
        }
        Identifier::Username(raw.to_string())
    }

    /// The string to place in a request path: the dashed UUID or the username.
    pub fn as_path_segment(&self) -> String {
        match self {
            Identifier::Username(name) => name.clone(),
            Identifier::Uuid(uuid) => uuid.hyphenated().to_string(),
        }
    }

    pub fn is_uuid(&self) -> bool {
        matches!(self, Identifier::Uuid(_))
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_path_segment())
    }
}

/// The skin the game shows for an account without a custom one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultSkin {
    Steve,
    Alex,
}

impl DefaultSkin {
    /// Dashed UUID of the stock account wearing this skin.
    pub fn uuid(&self) -> &'static str {
        match self {
            DefaultSkin::Steve => STEVE_UUID,
            DefaultSkin::Alex => ALEX_UUID,
        }
    }
}

impl fmt::Display for DefaultSkin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultSkin::Steve => write!(f, "steve"),
            DefaultSkin::Alex => write!(f, "alex"),
        }
    }
}

/// Pick Steve or Alex the way the game does.
///
/// Mirrors Java's `UUID.hashCode() & 1`: xor the two 64-bit halves, fold the
/// result to 32 bits, and look at the low bit. Even is Steve.
pub fn default_skin(uuid: &Uuid) -> DefaultSkin {
    let value = uuid.as_u128();
    let hilo = ((value >> 64) as u64) ^ (value as u64);
    let hash = (hilo >> 32) ^ hilo;
    if hash & 1 == 0 {
        DefaultSkin::Steve
    } else {
        DefaultSkin::Alex
    }
}

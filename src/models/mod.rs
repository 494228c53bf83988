//! Shared types used across all modules.
//!
//! The decoded profile structure and identifier helpers. The client, the
//! renderers and the CLI import from here.

pub mod identifier;
pub mod profile;

pub use identifier::{DefaultSkin, Identifier};
pub use profile::{SkinModel, Textures, UserProfile, UsernameChange};

/// Raw bytes of an encoded avatar image, exactly as the service sent them.
pub type AvatarImage = Vec<u8>;

//! Output renderers for looked-up profiles: terminal and JSON.

pub mod json;
pub mod terminal;

use crate::models::UserProfile;

/// Trait for rendering a profile to an output format.
pub trait ProfileRenderer {
    /// Render the profile to a string.
    fn render(&self, profile: &UserProfile) -> String;
}

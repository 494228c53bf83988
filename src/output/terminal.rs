//! Terminal renderer: styled key/value block followed by the name history.

use colored::Colorize;

use crate::models::UserProfile;
use crate::output::ProfileRenderer;

/// Terminal output renderer with colored, flowing text.
pub struct TerminalRenderer;

impl ProfileRenderer for TerminalRenderer {
    fn render(&self, profile: &UserProfile) -> String {
        let mut output = String::new();

        output.push_str(&format!(" {} {}\n", "●".green().bold(), profile.username.bold()));
        output.push_str(&format!("   {}     {}\n", "uuid:".cyan(), profile.uuid));
        output.push_str(&format!("   {}     {}\n", "skin:".cyan(), profile.textures.skin));
        match profile.textures.cape {
            Some(ref cape) => output.push_str(&format!("   {}     {}\n", "cape:".cyan(), cape)),
            None => output.push_str(&format!("   {}     {}\n", "cape:".cyan(), "none".dimmed())),
        }
        output.push_str(&format!("   {}    {}\n", "model:".cyan(), profile.skin_model()));
        if let Some(skin) = profile.default_skin() {
            output.push_str(&format!("   {}  {}\n", "default:".cyan(), skin));
        }

        if profile.username_history.is_empty() {
            return output;
        }

        output.push('\n');
        output.push_str(&format!("   {}\n", "history:".cyan()));
        for change in &profile.username_history {
            let when = match change.changed_at {
                Some(at) => at.format("%Y-%m-%d %H:%M UTC").to_string(),
                None => "original".to_string(),
            };
            output.push_str(&format!("     {}  {}\n", change.username, when.dimmed()));
        }

        output
    }
}

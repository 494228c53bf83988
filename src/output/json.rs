//! JSON output renderer.
//!
//! Emits the profile under the service's own field names, plus the derived
//! `undashed_uuid`, `skin_model` and `default_skin` values.

use crate::models::UserProfile;
use crate::output::ProfileRenderer;

/// JSON output renderer.
pub struct JsonRenderer;

impl ProfileRenderer for JsonRenderer {
    fn render(&self, profile: &UserProfile) -> String {
        let output = serde_json::json!({
            "profile": profile,
            "undashed_uuid": profile.undashed_uuid(),
            "skin_model": profile.skin_model().to_string(),
            "default_skin": profile.default_skin().map(|skin| skin.to_string()),
        });

        serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Textures, UsernameChange};

    #[test]
    fn render_json() {
        let profile = UserProfile {
            uuid: "069a79f4-44e9-4726-a5be-fca90e38aaf5".into(),
            username: "Notch".into(),
            username_history: vec![UsernameChange {
                username: "Notch".into(),
                changed_at: None,
            }],
            textures: Textures {
                skin: "http://textures.minecraft.net/texture/abc".into(),
                cape: None,
                slim: false,
            },
        };

        let output = JsonRenderer.render(&profile);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["profile"]["uuid_dashed"], "069a79f4-44e9-4726-a5be-fca90e38aaf5");
        assert_eq!(parsed["profile"]["username_history"].as_array().unwrap().len(), 1);
        assert_eq!(parsed["undashed_uuid"], "069a79f444e94726a5befca90e38aaf5");
        assert_eq!(parsed["skin_model"], "classic");
        assert_eq!(parsed["default_skin"], "steve");
    }
}

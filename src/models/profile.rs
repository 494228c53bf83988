//! Decoded response of the profile endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::identifier::{self, DefaultSkin};

/// A Minecraft account as described by the profile endpoint.
///
/// Built fresh from each response and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Dashed UUID, e.g. `069a79f4-44e9-4726-a5be-fca90e38aaf5`.
    #[serde(rename = "uuid_dashed")]
    pub uuid: String,
    /// Current display name.
    pub username: String,
    /// Name changes, oldest first, in the order the service sent them.
    pub username_history: Vec<UsernameChange>,
    pub textures: Textures,
}

/// One entry in the username history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsernameChange {
    pub username: String,
    /// When the name was taken. The original name has no timestamp.
    #[serde(default)]
    pub changed_at: Option<DateTime<Utc>>,
}

/// Cosmetic texture URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Textures {
    pub skin: String,
    /// Accounts without a cape get `null` or no field at all.
    #[serde(default)]
    pub cape: Option<String>,
    /// `true` for the thin-armed ("Alex") player model.
    #[serde(default)]
    pub slim: bool,
}

/// Arm width of the player model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkinModel {
    Classic,
    Slim,
}

impl std::fmt::Display for SkinModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkinModel::Classic => write!(f, "classic"),
            SkinModel::Slim => write!(f, "slim"),
        }
    }
}

impl UserProfile {
    /// The account UUID as a typed value, if the service sent a valid one.
    pub fn parsed_uuid(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.uuid).ok()
    }

    /// The UUID without dashes, the form Mojang's own APIs use.
    pub fn undashed_uuid(&self) -> String {
        match self.parsed_uuid() {
            Some(uuid) => uuid.simple().to_string(),
            None => self.uuid.replace('-', ""),
        }
    }

    pub fn skin_model(&self) -> SkinModel {
        if self.textures.slim {
            SkinModel::Slim
        } else {
            SkinModel::Classic
        }
    }

    /// The skin the game falls back to when the account has none.
    pub fn default_skin(&self) -> Option<DefaultSkin> {
        self.parsed_uuid().map(|uuid| identifier::default_skin(&uuid))
    }

    /// Names held before the current one, oldest first.
    pub fn previous_usernames(&self) -> impl Iterator<Item = &str> {
        let current = self.username.as_str();
        let history = match self.username_history.last() {
            Some(last) if last.username == current => {
                &self.username_history[..self.username_history.len() - 1]
            }
            _ => &self.username_history[..],
        };
        history.iter().map(|change| change.username.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    const NOTCH: &str = r#"{
        "uuid": "069a79f444e94726a5befca90e38aaf5",
        "uuid_dashed": "069a79f4-44e9-4726-a5be-fca90e38aaf5",
        "username": "Notch",
        "username_history": [
            { "username": "Notch" }
        ],
        "textures": {
            "skin": "http://textures.minecraft.net/texture/292009a4925b58f02c77dadc3ecef07ea4c7472f64e0fdc32ce5522489362680",
            "cape": null,
            "slim": false
        },
        "cached_at": "2019-01-01T00:00:00.000Z"
    }"#;

    #[test]
    fn decodes_service_payload() {
        let profile: UserProfile = serde_json::from_str(NOTCH).unwrap();
        assert_eq!(profile.uuid, "069a79f4-44e9-4726-a5be-fca90e38aaf5");
        assert_eq!(profile.username, "Notch");
        assert_eq!(
            profile.username_history,
            vec![UsernameChange {
                username: "Notch".into(),
                changed_at: None,
            }]
        );
        assert!(profile.textures.cape.is_none());
        assert!(!profile.textures.slim);
    }

    #[test]
    fn decodes_change_timestamps() {
        let json = r#"{
            "uuid_dashed": "853c80ef-3c37-49fd-aa49-938b674adae6",
            "username": "jeb_",
            "username_history": [
                { "username": "jeb" },
                { "username": "jeb_", "changed_at": "2015-02-04T21:37:40.000Z" }
            ],
            "textures": { "skin": "http://example.invalid/skin", "cape": "http://example.invalid/cape", "slim": true }
        }"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(
            profile.username_history[1].changed_at,
            Some(Utc.with_ymd_and_hms(2015, 2, 4, 21, 37, 40).unwrap())
        );
        assert_eq!(profile.textures.cape.as_deref(), Some("http://example.invalid/cape"));
        assert_eq!(profile.skin_model(), SkinModel::Slim);
        assert_eq!(profile.previous_usernames().collect::<Vec<_>>(), vec!["jeb"]);
    }

    #[test]
    fn missing_required_field_is_an_error() {
        let json = r#"{ "username": "Notch", "username_history": [], "textures": { "skin": "x" } }"#;
        assert!(serde_json::from_str::<UserProfile>(json).is_err());
    }

    #[test]
    fn error_payload_is_not_a_profile() {
        let json = r#"{ "code": 404, "error": "Not Found", "reason": "No user with the name 'nobody' was found" }"#;
        assert!(serde_json::from_str::<UserProfile>(json).is_err());
    }

    #[test]
    fn uuid_forms() {
        let profile: UserProfile = serde_json::from_str(NOTCH).unwrap();
        assert_eq!(profile.undashed_uuid(), "069a79f444e94726a5befca90e38aaf5");
        assert!(profile.parsed_uuid().is_some());
        assert!(profile.default_skin().is_some());
    }

    #[test]
    fn serializes_with_wire_names() {
        let profile: UserProfile = serde_json::from_str(NOTCH).unwrap();
        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["uuid_dashed"], "069a79f4-44e9-4726-a5be-fca90e38aaf5");
        assert!(value.get("uuid").is_none());
    }
}

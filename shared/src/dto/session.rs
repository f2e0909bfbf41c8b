use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::dto::character::{CharacterDto, CharacterId};

/// Access key granting visibility into any character's profile. Everyone
/// else only sees characters on their own account.
pub const PROFILE_VIEW_ALL: &str = "profiles:view-all";

/// Authenticated session as reported by `GET /api/auth/whoami`.
///
/// Owned by the auth provider; the rest of the client treats it as
/// read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionDto {
    /// The character the session is currently acting as.
    pub current: CharacterDto,
    /// Every character the account is allowed to act as.
    pub characters: Vec<CharacterDto>,
    /// Named permission flags granted to the account.
    #[serde(default)]
    pub access: HashSet<String>,
}

impl SessionDto {
    pub fn has_access(&self, key: &str) -> bool {
        self.access.contains(key)
    }

    pub fn owns_character(&self, id: CharacterId) -> bool {
        self.characters.iter().any(|c| c.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn session() -> SessionDto {
        SessionDto {
            current: CharacterDto {
                id: CharacterId(100),
                name: "Rin Arzad".to_string(),
            },
            characters: vec![
                CharacterDto {
                    id: CharacterId(100),
                    name: "Rin Arzad".to_string(),
                },
                CharacterDto {
                    id: CharacterId(200),
                    name: "Rin's Hauler".to_string(),
                },
            ],
            access: [PROFILE_VIEW_ALL.to_string()].into_iter().collect(),
        }
    }

    #[test]
    fn ownership_checks_the_character_list() {
        let session = session();
        assert!(session.owns_character(CharacterId(200)));
        assert!(!session.owns_character(CharacterId(999)));
    }

    #[test]
    fn access_keys_are_exact_strings() {
        let session = session();
        assert!(session.has_access(PROFILE_VIEW_ALL));
        assert!(!session.has_access("profiles:view"));
    }

    #[test]
    fn missing_access_field_defaults_to_empty() {
        let json = r#"{
            "current": { "id": 100, "name": "Rin Arzad" },
            "characters": [{ "id": 100, "name": "Rin Arzad" }]
        }"#;
        let session: SessionDto = serde_json::from_str(json).unwrap();
        assert_eq!(session.access.len(), 0);
        assert!(!session.has_access(PROFILE_VIEW_ALL));
    }
}

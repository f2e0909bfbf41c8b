use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SharedError;

/// Character identifier as issued by the game API.
///
/// Newtype over the numeric id so route parameters and DTO fields share a
/// single parse path: only strings of ASCII digits round-trip.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CharacterId(pub i64);

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for CharacterId {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SharedError::Conversion(format!(
                "invalid character id: {:?}",
                s
            )));
        }
        s.parse::<i64>()
            .map(CharacterId)
            .map_err(|e| SharedError::Conversion(format!("invalid character id {:?}: {}", s, e)))
    }
}

impl From<i64> for CharacterId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// A character attached to an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterDto {
    pub id: CharacterId,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn parses_digit_strings() {
        assert_eq!("42".parse::<CharacterId>().unwrap(), CharacterId(42));
        assert_eq!(
            "93000123".parse::<CharacterId>().unwrap(),
            CharacterId(93_000_123)
        );
    }

    #[test_case(""; "empty")]
    #[test_case("zork"; "letters")]
    #[test_case("12x"; "trailing garbage")]
    #[test_case("-5"; "negative sign")]
    #[test_case(" 7"; "leading space")]
    fn rejects_non_digit_strings(input: &str) {
        assert!(input.parse::<CharacterId>().is_err());
    }

    #[test]
    fn display_round_trips() {
        let id = CharacterId(2114001);
        assert_eq!(id.to_string().parse::<CharacterId>().unwrap(), id);
    }

    #[test]
    fn serializes_as_bare_number() {
        let json = serde_json::to_string(&CharacterId(7)).unwrap();
        assert_eq!(json, "7");
        let back: CharacterId = serde_json::from_str("7").unwrap();
        assert_eq!(back, CharacterId(7));
    }
}

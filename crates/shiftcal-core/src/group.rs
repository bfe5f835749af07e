//! Rotation groups.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// One of the five predefined rotation assignments.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize,
)]
pub enum Group {
    #[default]
    A,
    B,
    C,
    D,
    E,
}

impl Group {
    pub const ALL: [Group; 5] = [Group::A, Group::B, Group::C, Group::D, Group::E];

    pub fn name(self) -> &'static str {
        match self {
            Group::A => "A",
            Group::B => "B",
            Group::C => "C",
            Group::D => "D",
            Group::E => "E",
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Group {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Group::ALL
            .into_iter()
            .find(|g| g.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::UnknownGroup(s.to_string()))
    }
}

/// Accepts the same spellings as [`FromStr`], so `"c"` in a config file
/// means group C.
impl<'de> Deserialize<'de> for Group {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("c".parse::<Group>().unwrap(), Group::C);
        assert_eq!(" E ".parse::<Group>().unwrap(), Group::E);
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!(
            "F".parse::<Group>(),
            Err(ParseError::UnknownGroup("F".into()))
        );
    }

    #[test]
    fn default_is_a() {
        assert_eq!(Group::default(), Group::A);
    }

    #[test]
    fn deserialize_matches_from_str() {
        let g: Group = serde_json::from_str("\"e\"").unwrap();
        assert_eq!(g, Group::E);
        let err = serde_json::from_str::<Group>("\"Z\"").unwrap_err();
        assert!(err.to_string().contains("unknown group 'Z'"), "{err}");
    }

    #[test]
    fn serialize_is_uppercase_name() {
        assert_eq!(serde_json::to_string(&Group::C).unwrap(), "\"C\"");
    }
}

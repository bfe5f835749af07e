//! Fixed 35-day rotation patterns.
//!
//! A pattern is written as a string of shift codes (`M`, `T`, `N`, `D`), one
//! per day of the cycle. Whitespace is ignored so long patterns can be split
//! into weeks for readability.

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::PatternError;
use crate::group::Group;
use crate::shift::ShiftType;

/// Number of days in one rotation cycle.
pub const CYCLE_LEN: usize = 35;

/// Built-in rotation sheet.
pub const BUILTIN_PATTERNS: [(Group, &str); 5] = [
    (Group::A, "DDDDMMMTTTTDDDDDDDTTTNNNNDDDMMMMNNN"),
    (Group::B, "NNNNDDDMMMMNNNDDDDMMMTTTTDDDDDDDTTT"),
    (Group::C, "TTTTDDDDDDDTTTNNNNDDDMMMMNNNDDDDMMM"),
    (Group::D, "DDDDTTTNNNNDDDMMMMNNNDDDDMMMTTTTDDD"),
    (Group::E, "MMMMNNNDDDDMMMTTTTDDDDDDDTTTNNNNDDD"),
];

/// One group's 35-day cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern {
    slots: [ShiftType; CYCLE_LEN],
}

impl Pattern {
    /// Parse a pattern string.
    ///
    /// Whitespace anywhere in the string is skipped and letters are matched
    /// case-insensitively; any character that is not a known shift code is
    /// read as a rest day.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::WrongLength`] if the cleaned string does not
    /// hold exactly [`CYCLE_LEN`] codes.
    pub fn parse(s: &str) -> Result<Self, PatternError> {
        let codes: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if codes.len() != CYCLE_LEN {
            return Err(PatternError::WrongLength {
                expected: CYCLE_LEN,
                actual: codes.len(),
            });
        }

        let mut slots = [ShiftType::Rest; CYCLE_LEN];
        for (slot, ch) in slots.iter_mut().zip(codes) {
            *slot = ShiftType::from_code(ch);
        }
        Ok(Self { slots })
    }

    /// Shift on cycle day `index`. Out-of-range indices read as rest.
    pub fn get(&self, index: usize) -> ShiftType {
        self.slots.get(index).copied().unwrap_or(ShiftType::Rest)
    }

    /// How many days of the cycle carry `shift`.
    pub fn count(&self, shift: ShiftType) -> usize {
        self.slots.iter().filter(|s| **s == shift).count()
    }

    /// The pattern written back as a code string.
    pub fn to_code_string(&self) -> String {
        self.slots.iter().map(|s| s.code()).collect()
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_code_string())
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_code_string())
    }
}

/// Patterns keyed by group. A group may be absent; lookups for it fall back
/// to rest days in the resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternTable {
    patterns: BTreeMap<Group, Pattern>,
}

impl PatternTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in rotation sheet for groups A through E.
    pub fn builtin() -> Self {
        let mut table = Self::empty();
        for (group, code) in BUILTIN_PATTERNS {
            match Pattern::parse(code) {
                Ok(pattern) => table.insert(group, pattern),
                Err(e) => tracing::error!("built-in pattern for group {group} rejected: {e}"),
            }
        }
        table
    }

    pub fn insert(&mut self, group: Group, pattern: Pattern) {
        self.patterns.insert(group, pattern);
    }

    pub fn remove(&mut self, group: Group) -> Option<Pattern> {
        self.patterns.remove(&group)
    }

    pub fn get(&self, group: Group) -> Option<&Pattern> {
        self.patterns.get(&group)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Group, &Pattern)> {
        self.patterns.iter().map(|(g, p)| (*g, p))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Apply code-string overrides on top of this table.
    ///
    /// Overrides that fail to parse are logged and the group is removed, so
    /// a malformed entry degrades to rest days instead of silently keeping
    /// the previous pattern.
    pub fn apply_overrides<'a, I>(&mut self, overrides: I)
    where
        I: IntoIterator<Item = (Group, &'a str)>,
    {
        for (group, code) in overrides {
            match Pattern::parse(code) {
                Ok(pattern) => self.insert(group, pattern),
                Err(e) => {
                    tracing::warn!("ignoring pattern override for group {group}: {e}");
                    self.remove(group);
                }
            }
        }
    }
}

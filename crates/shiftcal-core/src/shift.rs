//! Shift types and their display attributes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// ARGB color used for a day cell that falls on a holiday.
pub const HOLIDAY_COLOR: u32 = 0xFFFF_B3B3;

/// Kind of work (or rest) assigned to a day.
///
/// Codes follow the rotation sheets: `M` morning, `T` afternoon
/// (*tarde*), `N` night, `D` rest (*descanso*).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftType {
    Morning,
    Afternoon,
    Night,
    Rest,
}

impl ShiftType {
    pub const ALL: [ShiftType; 4] = [
        ShiftType::Morning,
        ShiftType::Afternoon,
        ShiftType::Night,
        ShiftType::Rest,
    ];

    /// Map a pattern character to a shift. Unknown characters are rest days.
    pub fn from_code(ch: char) -> Self {
        match ch.to_ascii_uppercase() {
            'M' => ShiftType::Morning,
            'T' => ShiftType::Afternoon,
            'N' => ShiftType::Night,
            _ => ShiftType::Rest,
        }
    }

    /// Single-letter code as used in pattern strings.
    pub fn code(self) -> char {
        match self {
            ShiftType::Morning => 'M',
            ShiftType::Afternoon => 'T',
            ShiftType::Night => 'N',
            ShiftType::Rest => 'D',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ShiftType::Morning => "Morning",
            ShiftType::Afternoon => "Afternoon",
            ShiftType::Night => "Night",
            ShiftType::Rest => "Rest",
        }
    }

    /// Display color as `0xAARRGGBB`.
    pub fn color(self) -> u32 {
        match self {
            ShiftType::Morning => 0xFFFF_FF99,
            ShiftType::Afternoon => 0xFFB2_FFB2,
            ShiftType::Night => 0xFFB2_CFFF,
            ShiftType::Rest => 0xFFE0_E0E0,
        }
    }

    /// Display color as a `#rrggbb` string, alpha dropped.
    pub fn color_hex(self) -> String {
        format!("#{:06x}", self.color() & 0x00FF_FFFF)
    }

    pub fn is_working(self) -> bool {
        self != ShiftType::Rest
    }
}

impl fmt::Display for ShiftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ShiftType {
    type Err = ParseError;

    /// Accepts either the single-letter code or the label, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            return match ch.to_ascii_uppercase() {
                'M' | 'T' | 'N' | 'D' => Ok(Self::from_code(ch)),
                _ => Err(ParseError::UnknownShift(s.to_string())),
            };
        }
        Self::ALL
            .into_iter()
            .find(|shift| shift.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseError::UnknownShift(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_map_both_ways() {
        for shift in ShiftType::ALL {
            assert_eq!(ShiftType::from_code(shift.code()), shift);
        }
    }

    #[test]
    fn lowercase_codes_are_accepted() {
        assert_eq!(ShiftType::from_code('m'), ShiftType::Morning);
        assert_eq!(ShiftType::from_code('t'), ShiftType::Afternoon);
        assert_eq!(ShiftType::from_code('n'), ShiftType::Night);
    }

    #[test]
    fn unknown_code_is_rest() {
        assert_eq!(ShiftType::from_code('X'), ShiftType::Rest);
        assert_eq!(ShiftType::from_code('7'), ShiftType::Rest);
    }

    #[test]
    fn colors_match_palette() {
        assert_eq!(ShiftType::Morning.color(), 0xFFFFFF99);
        assert_eq!(ShiftType::Rest.color_hex(), "#e0e0e0");
        assert_eq!(ShiftType::Night.color_hex(), "#b2cfff");
    }

    #[test]
    fn parse_accepts_code_or_label() {
        assert_eq!("n".parse::<ShiftType>().unwrap(), ShiftType::Night);
        assert_eq!("Afternoon".parse::<ShiftType>().unwrap(), ShiftType::Afternoon);
        assert!("X".parse::<ShiftType>().is_err());
        assert!("evening".parse::<ShiftType>().is_err());
    }
}

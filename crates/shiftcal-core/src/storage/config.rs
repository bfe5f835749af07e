//! TOML-based application configuration.
//!
//! Stores:
//! - Default group and year for the calendar views
//! - Cycle epoch and per-group pattern overrides
//! - Holiday sources (national table on/off, extra dates)
//!
//! Configuration is stored at `~/.config/shiftcal/config.toml`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::{ConfigError, CoreError};
use crate::group::Group;
use crate::holidays::{CombinedHolidays, SpanishNationalHolidays, StaticHolidays};
use crate::resolver::{ShiftResolver, DEFAULT_EPOCH};

/// Calendar view defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarConfig {
    #[serde(default)]
    pub default_group: Group,
    /// Year shown when none is given; the current year when unset.
    #[serde(default)]
    pub default_year: Option<i32>,
}

/// Rotation cycle settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleConfig {
    #[serde(default = "default_epoch")]
    pub epoch: NaiveDate,
    /// Pattern strings keyed by group name, replacing the built-in sheet.
    #[serde(default)]
    pub patterns: BTreeMap<String, String>,
}

/// Holiday sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidaysConfig {
    /// Include the national fixed-date holidays.
    #[serde(default = "default_true")]
    pub national: bool,
    #[serde(default)]
    pub extra: Vec<NaiveDate>,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/shiftcal/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub calendar: CalendarConfig,
    #[serde(default)]
    pub cycle: CycleConfig,
    #[serde(default)]
    pub holidays: HolidaysConfig,
}

fn default_epoch() -> NaiveDate {
    DEFAULT_EPOCH
}
fn default_true() -> bool {
    true
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            epoch: default_epoch(),
            patterns: BTreeMap::new(),
        }
    }
}

impl Default for HolidaysConfig {
    fn default() -> Self {
        Self {
            national: true,
            extra: Vec::new(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        if key.is_empty() {
            return Err(ConfigError::UnknownKey(key.to_string()));
        }

        let mut parts = key.split('.').peekable();

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            let obj = current
                .as_object_mut()
                .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;

            if is_leaf {
                let is_override = key.starts_with("cycle.patterns.");
                // Pattern overrides are an open map; every other key must exist.
                let existing = match obj.get(part) {
                    Some(v) => v.clone(),
                    None if is_override => serde_json::Value::Null,
                    None => return Err(ConfigError::UnknownKey(key.to_string())),
                };

                // `null` or an empty value clears an optional setting.
                let clears = value.is_empty() || value == "null";
                let optional = matches!(
                    existing,
                    serde_json::Value::Number(_) | serde_json::Value::Null
                );
                if clears && (is_override || optional) {
                    if is_override {
                        obj.remove(part);
                    } else {
                        obj.insert(part.to_string(), serde_json::Value::Null);
                    }
                    return Ok(());
                }

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value
                            .parse::<bool>()
                            .map_err(|e| invalid(e.to_string()))?,
                    ),
                    serde_json::Value::Number(_) => {
                        let n = value
                            .parse::<i64>()
                            .map_err(|_| invalid(format!("cannot parse '{value}' as number")))?;
                        serde_json::Value::Number(n.into())
                    }
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        serde_json::from_str(value).map_err(|e| invalid(e.to_string()))?
                    }
                    serde_json::Value::Null => serde_json::from_str::<serde_json::Value>(value)
                        .ok()
                        .filter(|v| v.is_number())
                        .unwrap_or_else(|| serde_json::Value::String(value.into())),
                    serde_json::Value::String(_) => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = obj
                .get_mut(part)
                .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
        }

        Err(ConfigError::UnknownKey(key.to_string()))
    }

    pub fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the default location, writing defaults there if no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, CoreError> {
        let path = Self::path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            let cfg = Self::default();
            cfg.save_to(&path)?;
            Ok(cfg)
        }
    }

    /// Load from an explicit path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn load_from(path: &Path) -> Result<Self, CoreError> {
        let content = std::fs::read_to_string(path)?;
        let cfg = toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(cfg)
    }

    /// Persist to the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<(), CoreError> {
        self.save_to(&Self::path()?)
    }

    /// Persist to an explicit path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save_to(&self, path: &Path) -> Result<(), CoreError> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        std::fs::write(path, content)?;
        tracing::debug!(path = %path.display(), "config saved");
        Ok(())
    }

    /// Load from disk, returning default on error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!("falling back to default config: {e}");
            Self::default()
        })
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::Null => Some(String::new()),
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Update a value in memory by dot-separated key.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value does not fit it.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json = serde_json::to_value(&*self).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        *self = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Set a value by key and save.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// or the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), CoreError> {
        self.set_value(key, value)?;
        self.save()
    }

    /// Pattern overrides with valid group names. Unknown names are skipped.
    pub fn pattern_overrides(&self) -> Vec<(Group, &str)> {
        self.cycle
            .patterns
            .iter()
            .filter_map(|(name, code)| match name.parse::<Group>() {
                Ok(group) => Some((group, code.as_str())),
                Err(e) => {
                    tracing::warn!("ignoring pattern override: {e}");
                    None
                }
            })
            .collect()
    }

    pub fn resolver(&self) -> ShiftResolver {
        ShiftResolver::from_config(self)
    }

    /// Holiday provider assembled from the `[holidays]` section.
    pub fn holiday_provider(&self) -> CombinedHolidays {
        let mut combined = CombinedHolidays::new();
        if self.holidays.national {
            combined = combined.with(SpanishNationalHolidays);
        }
        if !self.holidays.extra.is_empty() {
            combined = combined.with(StaticHolidays::new(self.holidays.extra.iter().copied()));
        }
        combined
    }

    /// Configured default year, or `fallback` when unset.
    pub fn year_or(&self, fallback: i32) -> i32 {
        self.calendar.default_year.unwrap_or(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holidays::HolidayProvider;
    use crate::shift::ShiftType;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, cfg);
        assert_eq!(parsed.cycle.epoch, DEFAULT_EPOCH);
        assert!(parsed.holidays.national);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let parsed: Config = toml::from_str("[calendar]\ndefault_group = \"C\"\n").unwrap();
        assert_eq!(parsed.calendar.default_group, Group::C);
        assert_eq!(parsed.cycle.epoch, DEFAULT_EPOCH);
        assert!(parsed.holidays.extra.is_empty());
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("calendar.default_group").as_deref(), Some("A"));
        assert_eq!(cfg.get("cycle.epoch").as_deref(), Some("2026-01-01"));
        assert_eq!(cfg.get("holidays.national").as_deref(), Some("true"));
        assert!(cfg.get("calendar.missing_key").is_none());
        assert!(cfg.get("").is_none());
    }

    #[test]
    fn set_value_updates_nested_fields() {
        let mut cfg = Config::default();
        cfg.set_value("calendar.default_group", "D").unwrap();
        cfg.set_value("calendar.default_year", "2027").unwrap();
        cfg.set_value("holidays.national", "false").unwrap();
        cfg.set_value("cycle.epoch", "2025-06-01").unwrap();
        assert_eq!(cfg.calendar.default_group, Group::D);
        assert_eq!(cfg.calendar.default_year, Some(2027));
        assert!(!cfg.holidays.national);
        assert_eq!(cfg.cycle.epoch, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
    }

    #[test]
    fn set_value_accepts_lowercase_group() {
        let mut cfg = Config::default();
        cfg.set_value("calendar.default_group", "e").unwrap();
        assert_eq!(cfg.calendar.default_group, Group::E);
        assert_eq!(cfg.get("calendar.default_group").as_deref(), Some("E"));
    }

    #[test]
    fn hand_edited_lowercase_group_keeps_rest_of_file() {
        let parsed: Config = toml::from_str(
            "[calendar]\ndefault_group = \"c\"\n\n[cycle]\nepoch = \"2025-06-01\"\n",
        )
        .unwrap();
        assert_eq!(parsed.calendar.default_group, Group::C);
        assert_eq!(parsed.cycle.epoch, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
    }

    #[test]
    fn default_year_can_be_cleared() {
        let mut cfg = Config::default();
        assert_eq!(cfg.get("calendar.default_year").as_deref(), Some(""));
        cfg.set_value("calendar.default_year", "2027").unwrap();
        assert_eq!(cfg.get("calendar.default_year").as_deref(), Some("2027"));
        cfg.set_value("calendar.default_year", "null").unwrap();
        assert_eq!(cfg.calendar.default_year, None);
        cfg.set_value("calendar.default_year", "2028").unwrap();
        cfg.set_value("calendar.default_year", "").unwrap();
        assert_eq!(cfg.calendar.default_year, None);
    }

    #[test]
    fn clearing_pattern_override_removes_it() {
        let mut cfg = Config::default();
        cfg.set_value("cycle.patterns.B", &"N".repeat(35)).unwrap();
        cfg.set_value("cycle.patterns.B", "null").unwrap();
        assert!(cfg.cycle.patterns.is_empty());
    }

    #[test]
    fn set_value_accepts_json_arrays() {
        let mut cfg = Config::default();
        cfg.set_value("holidays.extra", r#"["2026-03-19"]"#).unwrap();
        assert_eq!(cfg.holidays.extra.len(), 1);
    }

    #[test]
    fn set_value_adds_pattern_override() {
        let mut cfg = Config::default();
        let nights = "N".repeat(35);
        cfg.set_value("cycle.patterns.B", &nights).unwrap();
        assert_eq!(cfg.cycle.patterns.get("B"), Some(&nights));
    }

    #[test]
    fn set_value_rejects_unknown_keys_and_bad_values() {
        let mut cfg = Config::default();
        assert!(matches!(
            cfg.set_value("calendar.colour", "red"),
            Err(ConfigError::UnknownKey(_))
        ));
        assert!(cfg.set_value("holidays.national", "maybe").is_err());
        assert!(cfg.set_value("calendar.default_group", "Z").is_err());
        assert!(cfg.set_value("cycle.epoch", "not-a-date").is_err());
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn resolver_applies_overrides() {
        let mut cfg = Config::default();
        cfg.cycle.patterns.insert("a".into(), "N".repeat(35));
        cfg.cycle.patterns.insert("B".into(), "short".into());
        cfg.cycle.patterns.insert("Q".into(), "M".repeat(35));
        let r = cfg.resolver();
        assert_eq!(r.resolve(Group::A, DEFAULT_EPOCH), ShiftType::Night);
        assert_eq!(r.resolve(Group::B, DEFAULT_EPOCH), ShiftType::Rest);
        assert!(r.patterns().get(Group::B).is_none());
        assert!(r.patterns().get(Group::C).is_some());
    }

    #[test]
    fn holiday_provider_follows_config() {
        let mut cfg = Config::default();
        let st_joseph = NaiveDate::from_ymd_opt(2026, 3, 19).unwrap();
        cfg.holidays.extra.push(st_joseph);
        assert_eq!(cfg.holiday_provider().holidays(2026).len(), 10);

        cfg.holidays.national = false;
        let provider = cfg.holiday_provider();
        assert_eq!(provider.holidays(2026).len(), 1);
        assert!(provider.is_holiday(st_joseph));
    }

    #[test]
    fn year_or_prefers_configured_year() {
        let mut cfg = Config::default();
        assert_eq!(cfg.year_or(2030), 2030);
        cfg.calendar.default_year = Some(2026);
        assert_eq!(cfg.year_or(2030), 2026);
    }
}

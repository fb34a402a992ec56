//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - Profile (user id, height and the unit it was entered in)
//! - Interpolation policy for charts
//! - Default log level
//!
//! Configuration is stored at `~/.config/weightlog/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::derivation::HeightProvider;
use crate::error::{ConfigError, Result};
use crate::series::{Extrapolation, SeriesInterpolator};
use crate::units::{Length, LengthUnit};

/// Profile of the person weighing in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// When set, the profile height only applies to this user's records.
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub height_unit: LengthUnit,
}

/// Gap-filling configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InterpolationConfig {
    #[serde(default)]
    pub extrapolation: Extrapolation,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `WEIGHTLOG_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/weightlog/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub interpolation: InterpolationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_log_level() -> String {
    "info".into()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    fn lookup<'a>(root: &'a serde_json::Value, key: &str) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }
        key.split('.').try_fold(root, |node, part| node.get(part))
    }

    fn assign(
        root: &mut serde_json::Value,
        key: &str,
        raw: &str,
        unset_as_number: bool,
    ) -> Result<()> {
        let unknown = || ConfigError::InvalidValue {
            key: key.to_string(),
            message: "unknown config key".to_string(),
        };

        let (parent_path, leaf) = match key.rsplit_once('.') {
            Some((parent, leaf)) => (Some(parent), leaf),
            None => (None, key),
        };
        if leaf.is_empty() {
            return Err(unknown().into());
        }

        let mut node = root;
        if let Some(parent_path) = parent_path {
            for part in parent_path.split('.') {
                node = node.get_mut(part).ok_or_else(unknown)?;
            }
        }
        let section = node.as_object_mut().ok_or_else(unknown)?;
        let existing = section.get(leaf).ok_or_else(unknown)?;

        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };
        let parsed = match existing {
            serde_json::Value::Bool(_) => raw
                .parse::<bool>()
                .map(serde_json::Value::Bool)
                .map_err(|e| invalid(e.to_string()))?,
            serde_json::Value::Number(_) => parse_number(raw)
                .ok_or_else(|| invalid(format!("cannot parse '{raw}' as number")))?,
            serde_json::Value::Null => match parse_number(raw) {
                Some(number) if unset_as_number => number,
                _ => serde_json::Value::String(raw.to_string()),
            },
            serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                serde_json::from_str(raw).map_err(|e| invalid(e.to_string()))?
            }
            serde_json::Value::String(_) => serde_json::Value::String(raw.to_string()),
        };

        section.insert(leaf.to_string(), parsed);
        Ok(())
    }

    /// Default config file location.
    pub fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk or return default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            let cfg = Self::default();
            cfg.save_to(&path)?;
            Ok(cfg)
        }
    }

    /// Load from an explicit file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let cfg: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(cfg)
    }

    /// Persist to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Persist to an explicit file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        match Self::lookup(&json, key)? {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a value in memory by dot-separated key.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value does not fit it.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        let current = serde_json::to_value(&*self)?;

        // An unset optional field has no type to go by: try it as a number
        // first, then as text.
        let mut last_error = None;
        for unset_as_number in [true, false] {
            let mut json = current.clone();
            Self::assign(&mut json, key, value, unset_as_number)?;
            match serde_json::from_value(json) {
                Ok(updated) => {
                    *self = updated;
                    return Ok(());
                }
                Err(e) => last_error = Some(e),
            }
        }

        Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: last_error.map(|e| e.to_string()).unwrap_or_default(),
        }
        .into())
    }

    /// Set a value by key and save to the default location.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.set_value(key, value)?;
        self.save()
    }

    /// Profile height, if one is configured.
    pub fn height(&self) -> Option<Length> {
        self.profile
            .height
            .map(|value| Length::new(value, self.profile.height_unit))
    }

    /// Interpolator configured with this file's policy.
    pub fn interpolator(&self) -> SeriesInterpolator {
        SeriesInterpolator::new().with_extrapolation(self.interpolation.extrapolation)
    }
}

/// The profile height applies to records of the profile's user, or to every
/// record when no profile user is configured.
impl HeightProvider for Config {
    fn height_for(&self, user_id: Option<&str>) -> Option<Length> {
        match (self.profile.user_id.as_deref(), user_id) {
            (Some(owner), Some(user)) if owner != user => None,
            _ => self.height(),
        }
    }
}

fn parse_number(raw: &str) -> Option<serde_json::Value> {
    if let Ok(n) = raw.parse::<i64>() {
        return Some(serde_json::Value::Number(n.into()));
    }
    raw.parse::<f64>()
        .ok()
        .and_then(serde_json::Number::from_f64)
        .map(serde_json::Value::Number)
}

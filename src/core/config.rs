use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::health::DEFAULT_UNHEALTHY_THRESHOLD;

/// Prefix for environment overrides, e.g. `SYSPROBE_DISK_PATH`
pub const ENV_PREFIX: &str = "SYSPROBE_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Failed checks at or above this count mark the host unhealthy
    pub unhealthy_threshold: usize,
    pub cpu_sample_ms: u64,
    pub quick_cpu_sample_ms: u64,
    /// Path whose volume the disk check reports on
    pub disk_path: String,
    pub health_poll_secs: u64,
    pub quick_poll_secs: u64,
    pub system_info_poll_secs: u64,
    pub bridge_ready_timeout_ms: u64,
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            unhealthy_threshold: DEFAULT_UNHEALTHY_THRESHOLD,
            cpu_sample_ms: 1000,
            quick_cpu_sample_ms: 200,
            disk_path: default_disk_path().to_string(),
            health_poll_secs: 10,
            quick_poll_secs: 5,
            system_info_poll_secs: 30,
            bridge_ready_timeout_ms: 5000,
            debug: false,
        }
    }
}

fn default_disk_path() -> &'static str {
    if cfg!(windows) {
        "C:\\"
    } else {
        "/"
    }
}

impl Config {
    /// Load from the user config directory, then apply environment overrides
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        let mut config = Self::load_from(&config_path)?;
        config.apply_overrides(std::env::vars())?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file. A missing or empty file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if data.trim().is_empty() {
            return Ok(Config::default());
        }

        let config: Config = serde_json::from_str(&data)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let data = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, data)
            .with_context(|| format!("Failed to write config file: {:?}", path))?;

        Ok(())
    }

    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;

        Ok(config_dir.join("sysprobe").join("config.json"))
    }

    /// Apply `SYSPROBE_<FIELD>` overrides and the plain `DEBUG` flag.
    /// Unrelated variables are ignored.
    pub fn apply_overrides<I>(&mut self, vars: I) -> Result<()>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (key, value) in vars {
            if key == "DEBUG" {
                self.debug = parse_bool(&value);
                continue;
            }

            if let Some(field) = key.strip_prefix(ENV_PREFIX) {
                let field = field.to_lowercase();
                if Self::keys().contains(&field.as_str()) {
                    self.set(&field, &value)
                        .with_context(|| format!("Invalid value in {}", key))?;
                }
            }
        }

        Ok(())
    }

    /// Settable keys, in display order
    pub fn keys() -> &'static [&'static str] {
        &[
            "unhealthy_threshold",
            "cpu_sample_ms",
            "quick_cpu_sample_ms",
            "disk_path",
            "health_poll_secs",
            "quick_poll_secs",
            "system_info_poll_secs",
            "bridge_ready_timeout_ms",
            "debug",
        ]
    }

    /// Set one field from its string form
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            "unhealthy_threshold" => self.unhealthy_threshold = parse_number(key, value)?,
            "cpu_sample_ms" => self.cpu_sample_ms = parse_number(key, value)?,
            "quick_cpu_sample_ms" => self.quick_cpu_sample_ms = parse_number(key, value)?,
            "disk_path" => {
                if value.is_empty() {
                    bail!("disk_path cannot be empty");
                }
                self.disk_path = value.to_string();
            }
            "health_poll_secs" => self.health_poll_secs = parse_number(key, value)?,
            "quick_poll_secs" => self.quick_poll_secs = parse_number(key, value)?,
            "system_info_poll_secs" => self.system_info_poll_secs = parse_number(key, value)?,
            "bridge_ready_timeout_ms" => {
                self.bridge_ready_timeout_ms = parse_number(key, value)?
            }
            "debug" => self.debug = parse_bool(value),
            _ => bail!(
                "Unknown config key '{}'. Valid keys: {}",
                key,
                Self::keys().join(", ")
            ),
        }
        Ok(())
    }

    /// Look up one field as a string
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "unhealthy_threshold" => self.unhealthy_threshold.to_string(),
            "cpu_sample_ms" => self.cpu_sample_ms.to_string(),
            "quick_cpu_sample_ms" => self.quick_cpu_sample_ms.to_string(),
            "disk_path" => self.disk_path.clone(),
            "health_poll_secs" => self.health_poll_secs.to_string(),
            "quick_poll_secs" => self.quick_poll_secs.to_string(),
            "system_info_poll_secs" => self.system_info_poll_secs.to_string(),
            "bridge_ready_timeout_ms" => self.bridge_ready_timeout_ms.to_string(),
            "debug" => self.debug.to_string(),
            _ => return None,
        };
        Some(value)
    }

    pub fn validate(&self) -> Result<()> {
        if self.unhealthy_threshold == 0 {
            bail!("unhealthy_threshold must be at least 1");
        }
        if self.cpu_sample_ms == 0 || self.quick_cpu_sample_ms == 0 {
            bail!("CPU sample windows must be at least 1 ms");
        }
        if self.health_poll_secs == 0 || self.quick_poll_secs == 0 || self.system_info_poll_secs == 0
        {
            bail!("Poll periods must be at least 1 second");
        }
        if self.disk_path.trim().is_empty() {
            bail!("disk_path cannot be empty");
        }
        Ok(())
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .parse::<T>()
        .map_err(|_| anyhow::anyhow!("{} expects a non-negative integer, got '{}'", key, value))
}

fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}

//! Harness configuration
//!
//! Stored as JSON at `<data_dir>/analogue-harness/config.json`. Environment
//! variables (`XMOS_ROOT`, `XSIG_PATH`, `XSIG_CONFIG_ROOT`, `XRUN_PATH`,
//! `DUT_ADAPTER`, `HARNESS_ADAPTER`) override the file, and the command line
//! overrides both.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Errors for settings that have no usable default
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("XMOS_ROOT is not set (config key xmos_root)")]
    MissingXmosRoot,

    #[error("No {0} adapter configured")]
    MissingAdapter(&'static str),
}

fn default_xsig_path() -> PathBuf {
    PathBuf::from("xsig")
}

fn default_xrun_path() -> PathBuf {
    PathBuf::from("xrun")
}

fn default_device_timeout_secs() -> u64 {
    crate::DEFAULT_DEVICE_TIMEOUT_SECS
}

fn default_flash_timeout_secs() -> u64 {
    120
}

/// Harness configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarnessConfig {
    /// Root of the XMOS sandbox holding `sw_usb_audio` and `sw_audio_analyzer`
    #[serde(default)]
    pub xmos_root: Option<PathBuf>,
    /// The `xsig` signal tool
    #[serde(default = "default_xsig_path")]
    pub xsig_path: PathBuf,
    /// Directory of xsig JSON configs (default `{xmos_root}/sw_usb_audio/tests/xsig_configs`)
    #[serde(default)]
    pub xsig_config_root: Option<PathBuf>,
    /// The `xrun` flashing tool
    #[serde(default = "default_xrun_path")]
    pub xrun_path: PathBuf,
    /// xTAG adapter id of the device under test
    #[serde(default)]
    pub dut_adapter: Option<String>,
    /// xTAG adapter id of the measurement harness
    #[serde(default)]
    pub harness_adapter: Option<String>,
    /// Seconds to wait for the device to enumerate
    #[serde(default = "default_device_timeout_secs")]
    pub device_timeout_secs: u64,
    /// Seconds allowed for one `xrun` load
    #[serde(default = "default_flash_timeout_secs")]
    pub flash_timeout_secs: u64,
    /// Directory watched by the CI supervisor on macOS (default `~/exec_all`)
    #[serde(default)]
    pub watched_dir: Option<PathBuf>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            xmos_root: None,
            xsig_path: default_xsig_path(),
            xsig_config_root: None,
            xrun_path: default_xrun_path(),
            dut_adapter: None,
            harness_adapter: None,
            device_timeout_secs: default_device_timeout_secs(),
            flash_timeout_secs: default_flash_timeout_secs(),
            watched_dir: None,
        }
    }
}

impl HarnessConfig {
    /// Config file path: `<data_dir>/analogue-harness/config.json`
    pub fn path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("analogue-harness")
            .join("config.json")
    }

    /// Load config from the default path with environment overrides applied
    pub fn load() -> Self {
        Self::load_from(&Self::path()).with_env_overrides(|key| std::env::var(key).ok())
    }

    /// Load config from a file, falling back to defaults on any error
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    tracing::info!(path = %path.display(), "Loaded config from disk");
                    config
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                tracing::info!(path = %path.display(), "No config file found, using defaults");
                Self::default()
            }
        }
    }

    /// Save config to disk, creating parent directories if needed
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        tracing::info!(path = %path.display(), "Config saved to disk");
        Ok(())
    }

    /// Apply overrides from environment-style variables
    ///
    /// `lookup` maps a variable name to its value, normally `std::env::var`.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("XMOS_ROOT") {
            self.xmos_root = Some(v.into());
        }
        if let Some(v) = lookup("XSIG_PATH") {
            self.xsig_path = v.into();
        }
        if let Some(v) = lookup("XSIG_CONFIG_ROOT") {
            self.xsig_config_root = Some(v.into());
        }
        if let Some(v) = lookup("XRUN_PATH") {
            self.xrun_path = v.into();
        }
        if let Some(v) = lookup("DUT_ADAPTER") {
            self.dut_adapter = Some(v);
        }
        if let Some(v) = lookup("HARNESS_ADAPTER") {
            self.harness_adapter = Some(v);
        }
        self
    }

    /// Sandbox root, required for any firmware lookup
    pub fn xmos_root(&self) -> Result<&Path, ConfigError> {
        self.xmos_root
            .as_deref()
            .ok_or(ConfigError::MissingXmosRoot)
    }

    /// Directory holding the xsig JSON configs
    pub fn xsig_config_root(&self) -> Result<PathBuf, ConfigError> {
        match &self.xsig_config_root {
            Some(root) => Ok(root.clone()),
            None => Ok(self
                .xmos_root()?
                .join("sw_usb_audio")
                .join("tests")
                .join("xsig_configs")),
        }
    }

    /// Adapter ids as (device under test, harness)
    pub fn adapters(&self) -> Result<(String, String), ConfigError> {
        let dut = self
            .dut_adapter
            .clone()
            .ok_or(ConfigError::MissingAdapter("DUT"))?;
        let harness = self
            .harness_adapter
            .clone()
            .ok_or(ConfigError::MissingAdapter("harness"))?;
        Ok((dut, harness))
    }

    /// Directory the macOS CI supervisor executes scripts from
    pub fn watched_dir(&self) -> PathBuf {
        self.watched_dir.clone().unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("exec_all")
        })
    }

    pub fn device_timeout(&self) -> Duration {
        Duration::from_secs(self.device_timeout_secs)
    }

    pub fn flash_timeout(&self) -> Duration {
        Duration::from_secs(self.flash_timeout_secs)
    }
}

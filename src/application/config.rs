use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::domain::value_objects::formats::{ExportFormat, SourceFormat};

/// Top-level application configuration loaded from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub collector: CollectorConfig,
    #[serde(default)]
    pub population: PopulationConfig,
}

/// Where the log corpus lives and how it is shaped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default = "default_input_path")]
    pub path: String,
    #[serde(default)]
    pub format: SourceFormat,
}

/// Report artifact destination and format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_output_path")]
    pub output: String,
    #[serde(default)]
    pub format: ExportFormat,
}

/// Host sampling settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectorConfig {
    /// Delay between the priming sample and the measured one.
    #[serde(default = "default_cpu_sample_ms")]
    pub cpu_sample_ms: u64,
}

/// Population lookup service endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopulationConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

// --- Defaults ---

fn default_input_path() -> String {
    "logs.txt".into()
}

fn default_output_path() -> String {
    "system_report.csv".into()
}

const fn default_cpu_sample_ms() -> u64 {
    500
}

fn default_base_url() -> String {
    crate::infrastructure::geo::geo_api::DEFAULT_BASE_URL.into()
}

const fn default_timeout() -> u64 {
    10
}

// --- Default impls ---

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: default_input_path(),
            format: SourceFormat::default(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output: default_output_path(),
            format: ExportFormat::default(),
        }
    }
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            cpu_sample_ms: default_cpu_sample_ms(),
        }
    }
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

// --- Accessors ---

impl InputConfig {
    /// Input path with a leading `~` expanded.
    #[must_use]
    pub fn resolved_path(&self) -> PathBuf {
        expand(&self.path)
    }
}

impl ReportConfig {
    /// Output path with a leading `~` expanded.
    #[must_use]
    pub fn resolved_output(&self) -> PathBuf {
        expand(&self.output)
    }
}

impl CollectorConfig {
    #[must_use]
    pub const fn cpu_sample_interval(&self) -> Duration {
        Duration::from_millis(self.cpu_sample_ms)
    }
}

impl PopulationConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn expand(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

// --- AppConfig methods ---

impl AppConfig {
    /// Load config from default path or create default config file
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined,
    /// the file cannot be read, or the TOML content is invalid.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_or_create(&path)
    }

    /// Load from a specific path, or create a default config file if missing
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML content is invalid,
    /// or the default config file cannot be written.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from(path)
        } else {
            let config = Self::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    /// Load from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML content is invalid.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).context("Failed to read config file")?;
        toml::from_str(&content).context("Failed to parse config file")
    }

    /// Save config to a specific path, creating parent directories if needed
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created,
    /// serialization fails, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content).context("Failed to write config file")?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join("triage").join("config.toml"))
    }
}

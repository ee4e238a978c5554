//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{AuditError, AuditResult};

use super::types::{AuditConfig, AuditRules, LabelConfig};

/// Loads and provides access to the engine configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// assembles the [`AuditConfig`] used by the parser and the auditors.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/default/
/// ├── audit.yaml   # Tolerances, exemptions, adjustment markers, projection
/// └── labels.yaml  # Label synonyms for fields, sections, columns, categories
/// ```
///
/// # Example
///
/// ```no_run
/// use paystub_audit::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// let tolerance = loader.config().rules().tolerances.money;
/// println!("Money tolerance: {}", tolerance);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AuditConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/default")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    pub fn load<P: AsRef<Path>>(path: P) -> AuditResult<Self> {
        let path = path.as_ref();

        let audit_path = path.join("audit.yaml");
        let rules = Self::load_yaml::<AuditRules>(&audit_path)?;

        let labels_path = path.join("labels.yaml");
        let labels = Self::load_yaml::<LabelConfig>(&labels_path)?;

        Ok(Self {
            config: AuditConfig::new(rules, labels),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> AuditResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| AuditError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| AuditError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &AuditConfig {
        &self.config
    }
}

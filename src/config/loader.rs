//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading toolkit
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ToolkitError, ToolkitResult};

use super::types::{CalculatorConfig, IntegrationConfig, ToolkitConfig, ValidationConfig};

/// Loads toolkit configuration from a directory.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── calculator.yaml   # Default tax and discount tiers
/// ├── validation.yaml   # Amount and name limits
/// └── integration.yaml  # Peer service URLs and timeout
/// ```
///
/// # Example
///
/// ```no_run
/// use logistics_toolkit::config::ConfigLoader;
///
/// let config = ConfigLoader::load("./config/default")?;
/// println!("Default tax: {}%", config.calculator().default_tax_percentage);
/// # Ok::<(), logistics_toolkit::error::ToolkitError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if any file is missing, contains invalid YAML, or
    /// describes an inconsistent discount schedule.
    pub fn load<P: AsRef<Path>>(path: P) -> ToolkitResult<ToolkitConfig> {
        let path = path.as_ref();

        let calculator = Self::load_yaml::<CalculatorConfig>(&path.join("calculator.yaml"))?;
        let validation = Self::load_yaml::<ValidationConfig>(&path.join("validation.yaml"))?;
        let integration = Self::load_yaml::<IntegrationConfig>(&path.join("integration.yaml"))?;

        if validation.min_business_amount > validation.max_business_amount {
            return Err(ToolkitError::InvalidConfig {
                message: format!(
                    "min_business_amount {} exceeds max_business_amount {}",
                    validation.min_business_amount, validation.max_business_amount
                ),
            });
        }

        if validation.min_name_length > validation.max_name_length {
            return Err(ToolkitError::InvalidConfig {
                message: format!(
                    "min_name_length {} exceeds max_name_length {}",
                    validation.min_name_length, validation.max_name_length
                ),
            });
        }

        debug!(
            path = %path.display(),
            tiers = calculator.discount_tiers.tiers().len(),
            "Configuration loaded"
        );

        Ok(ToolkitConfig::new(calculator, validation, integration))
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> ToolkitResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ToolkitError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| ToolkitError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}

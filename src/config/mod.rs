//! Configuration loading and management for the logistics toolkit.
//!
//! Business thresholds, validation limits and peer service locations are read
//! once from YAML files and kept in immutable structs.
//!
//! # Example
//!
//! ```no_run
//! use logistics_toolkit::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Orders service: {}", config.integration().orders_base_url);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CalculatorConfig, IntegrationConfig, ToolkitConfig, ValidationConfig};

//! Application state for the toolkit API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calculation::Calculator;
use crate::config::ToolkitConfig;

/// Shared application state.
///
/// Holds the configuration loaded at startup and a calculator bound to it.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ToolkitConfig>,
    calculator: Arc<Calculator>,
}

impl AppState {
    /// Creates a new application state from the loaded configuration.
    pub fn new(config: ToolkitConfig) -> Self {
        let calculator = Calculator::new(config.calculator().clone());
        Self {
            config: Arc::new(config),
            calculator: Arc::new(calculator),
        }
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &ToolkitConfig {
        &self.config
    }

    /// Returns the calculator.
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_calculator_uses_configured_tax() {
        let state = AppState::new(ToolkitConfig::default());
        assert_eq!(
            state.calculator().default_tax_percentage(),
            state.config().calculator().default_tax_percentage
        );
    }
}

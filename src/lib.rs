//! redsettings - Flow Runtime Settings Provider
//!
//! Builds the deployment settings record a Node-RED flow runtime reads at
//! startup: user data directory, flow-file formatting, console logging, and
//! a credential-encryption secret sourced from the environment.

pub mod cli;
pub mod config;
pub mod error;

// Re-export commonly used types
pub use config::{load_settings, load_settings_from, Settings, CREDENTIAL_SECRET_ENV};
pub use error::{RedsettingsError, Result};

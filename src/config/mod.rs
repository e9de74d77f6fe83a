//! Configuration module
//!
//! This module constructs the settings record the flow runtime consumes at
//! startup: fixed deployment values plus one optional secret read from the
//! process environment.

pub mod settings;

pub use settings::*;

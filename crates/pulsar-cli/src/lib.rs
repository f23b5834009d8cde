//! CLI library components for the Pulsar query editor.

pub mod logging;
pub mod script;
pub mod settings;

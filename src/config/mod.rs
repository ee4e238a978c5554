//! Configuration loading and management for the paystub audit engine.
//!
//! This module provides functionality to load the engine configuration from
//! YAML files: audit tolerances, exemptions, adjustment markers, projection
//! settings, and the label vocabulary the parser matches against.
//!
//! # Example
//!
//! ```no_run
//! use paystub_audit::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/default").unwrap();
//! println!("Money tolerance: {}", loader.config().rules().tolerances.money);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AdjustmentMarkers, AuditConfig, AuditRules, ColumnLabels, FieldLabels, LabelConfig,
    ProjectionConfig, SectionLabels, Tolerances,
};

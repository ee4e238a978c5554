//! Application state for the paystub audit API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::AuditConfig;
use crate::parser::DocumentParser;
use crate::store::PeriodStore;

/// Shared application state.
///
/// The period store sits behind a single reader/writer lock so an
/// in-flight replacement is atomic with respect to report and trend
/// readers, so no reader observes a half-replaced record.
#[derive(Clone)]
pub struct AppState {
    /// The period store, behind the one global write lock.
    store: Arc<RwLock<PeriodStore>>,
    /// The loaded engine configuration.
    config: Arc<AuditConfig>,
    /// The compiled document parser.
    parser: Arc<DocumentParser>,
}

impl AppState {
    /// Creates a new application state from the loaded configuration.
    pub fn new(config: AuditConfig) -> Self {
        let parser = DocumentParser::new(&config);
        Self {
            store: Arc::new(RwLock::new(PeriodStore::new())),
            config: Arc::new(config),
            parser: Arc::new(parser),
        }
    }

    /// Returns the shared period store.
    pub fn store(&self) -> &RwLock<PeriodStore> {
        &self.store
    }

    /// Returns the engine configuration.
    pub fn config(&self) -> &AuditConfig {
        &self.config
    }

    /// Returns the compiled document parser.
    pub fn parser(&self) -> &DocumentParser {
        &self.parser
    }
}

//! Pairing of an adapter with its configuration.

use crate::ports::source_adapter::SourceAdapter;
use askme_domain::SourceAdapterConfig;
use std::sync::Arc;

/// An adapter together with the configuration it is queried with
#[derive(Clone)]
pub struct RegisteredSource {
    pub adapter: Arc<dyn SourceAdapter>,
    pub config: SourceAdapterConfig,
}

impl RegisteredSource {
    pub fn new(adapter: Arc<dyn SourceAdapter>, config: SourceAdapterConfig) -> Self {
        Self { adapter, config }
    }

    pub fn name(&self) -> &str {
        self.adapter.name()
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }
}

impl std::fmt::Debug for RegisteredSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisteredSource")
            .field("name", &self.adapter.name())
            .field("kind", &self.adapter.kind())
            .field("config", &self.config)
            .finish()
    }
}

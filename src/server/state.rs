use crate::{config::OpenAlexConfig, error::Result, openalex::OpenAlex};
use std::sync::Arc;

/// Shared by every handler. Holds no mutable state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub openalex: Arc<OpenAlex>,
}

impl AppState {
    pub fn new(config: &OpenAlexConfig) -> Result<Self> {
        Ok(Self::with_client(OpenAlex::new(config)?))
    }

    pub fn with_client(client: OpenAlex) -> Self {
        Self {
            openalex: Arc::new(client),
        }
    }
}

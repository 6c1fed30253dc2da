use axum::extract::FromRef;

use crate::dataset::Dataset;
use std::sync::Arc;

use super::ServerConfig;

/// The dataset is immutable once loaded, readers share it without locking.
pub type SharedDataset = Arc<Dataset>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub dataset: SharedDataset,
}

impl ServerState {
    pub fn new(config: ServerConfig, dataset: SharedDataset) -> ServerState {
        ServerState {
            config,
            dataset,
        }
    }
}

impl FromRef<ServerState> for SharedDataset {
    fn from_ref(input: &ServerState) -> Self {
        input.dataset.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}

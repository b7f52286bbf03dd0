use std::sync::Arc;

use crate::config::Config;
use crate::gateway::QueryGateway;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub gateway: QueryGateway,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        // Per-request timeout (if any) is applied in `retrieve`; the client
        // keeps reqwest's defaults otherwise.
        let http_client = reqwest::Client::builder().build()?;
        let gateway = QueryGateway::new(http_client, config.retrieval.clone());

        Ok(Self {
            config: Arc::new(config),
            gateway,
        })
    }
}

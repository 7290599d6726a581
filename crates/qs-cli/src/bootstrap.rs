use std::sync::Arc;

use anyhow::Context;
use qs_config::QsConfig;
use qs_docs::{DocsClient, JsonFileStore, SaveService};

pub fn load_config() -> anyhow::Result<QsConfig> {
    QsConfig::load_with_dotenv().context("failed to load quiz-saver configuration")
}

/// Everything a command needs, built once from configuration.
pub struct AppContext {
    pub config: QsConfig,
    pub service: Arc<SaveService>,
}

impl AppContext {
    pub fn init(config: QsConfig) -> anyhow::Result<Self> {
        let store_path = config
            .storage
            .resolved_path()
            .context("no storage path configured and no home directory found")?;
        tracing::debug!(path = %store_path.display(), "using local store");

        let tokens = qs_auth::provider_from_config(&config.auth)
            .context("no credential source; set auth.token_command or auth.token")?;

        let service = SaveService::from_parts(
            DocsClient::new(config.docs.base_url()),
            tokens,
            Arc::new(JsonFileStore::new(store_path)),
            config.docs.title_prefix.clone(),
        );

        Ok(Self {
            config,
            service: Arc::new(service),
        })
    }
}

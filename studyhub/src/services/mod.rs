use crate::config::Config;
use crate::services::assistant_service::GeminiClient;
use crate::services::content_store::ContentStore;
use crate::services::storage::FileStorage;

pub struct AppState {
    pub config: Config,
    pub store: ContentStore,
    pub assistant: Option<GeminiClient>,
}

impl AppState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let storage = FileStorage::new(&config.data_file);
        let store = ContentStore::open(Box::new(storage)).await?;

        let assistant = match &config.gemini_api_key {
            Some(key) if !key.is_empty() => Some(GeminiClient::new(
                key.clone(),
                config.gemini_base_url.clone(),
                config.gemini_model.clone(),
            )),
            _ => {
                tracing::warn!("GEMINI_API_KEY is not set, assistant features are disabled");
                None
            }
        };

        Ok(Self {
            config,
            store,
            assistant,
        })
    }
}

pub mod assistant_service;
pub mod content_store;
pub mod quiz_service;
pub mod seed;
pub mod storage;
pub mod transfer_service;

use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Path of the single JSON document mirroring the app state.
    pub data_file: String,
    /// Directory that receives export files.
    pub export_dir: String,
    /// Assistant features are disabled when no key is configured.
    pub gemini_api_key: Option<String>,
    pub gemini_base_url: String,
    pub gemini_model: String,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        // Determine environment (defaults to dev)
        let env = env::var("APP_ENV").unwrap_or_else(|_| "dev".to_string());

        // Build configuration from config/*.toml + ENV overrides
        let config_builder = config::Config::builder()
            .add_source(
                config::File::with_name(&format!("config/{}", env)).required(false), // Allow missing config file, fallback to ENV
            )
            .add_source(config::Environment::with_prefix("APP").separator("__"));

        let settings = config_builder.build()?;

        let data_file = settings
            .get_string("storage.data_file")
            .or_else(|_| env::var("STUDYHUB_DATA_FILE"))
            .unwrap_or_else(|_| "data/studyhub.json".to_string());

        let export_dir = settings
            .get_string("storage.export_dir")
            .or_else(|_| env::var("STUDYHUB_EXPORT_DIR"))
            .unwrap_or_else(|_| "exports".to_string());

        let gemini_api_key = settings
            .get_string("assistant.api_key")
            .ok()
            .or_else(|| env::var("GEMINI_API_KEY").ok());

        let gemini_base_url = settings
            .get_string("assistant.base_url")
            .or_else(|_| env::var("GEMINI_BASE_URL"))
            .unwrap_or_else(|_| "https://generativelanguage.googleapis.com/v1beta".to_string());

        let gemini_model = settings
            .get_string("assistant.model")
            .or_else(|_| env::var("GEMINI_MODEL"))
            .unwrap_or_else(|_| "gemini-3-flash-preview".to_string());

        Ok(Config {
            data_file,
            export_dir,
            gemini_api_key,
            gemini_base_url,
            gemini_model,
        })
    }
}

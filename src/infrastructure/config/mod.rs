use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    /// Which speech backend to delegate to.
    pub provider: TtsProvider,
    pub default_voice: String,
    // DashScope (CosyVoice)
    pub dashscope_api_key: Option<String>,
    pub dashscope_model: String,
    // AWS (Polly)
    pub aws_region: String,
    /// Upper bound on a single provider call, in seconds.
    pub synthesis_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum TtsProvider {
    CosyVoice,
    Polly,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()?,
            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "production" => Environment::Production,
                    _ => Environment::Development,
                })?,
            log_format: env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })?,
            provider: env::var("TTS_PROVIDER")
                .unwrap_or_else(|_| "cosyvoice".to_string())
                .parse::<String>()
                .map(|s| match s.to_lowercase().as_str() {
                    "polly" => TtsProvider::Polly,
                    _ => TtsProvider::CosyVoice,
                })?,
            default_voice: env::var("DEFAULT_VOICE")
                .unwrap_or_else(|_| "longxiaochun".to_string()),
            dashscope_api_key: env::var("DASHSCOPE_API_KEY").ok(),
            dashscope_model: env::var("DASHSCOPE_MODEL")
                .unwrap_or_else(|_| "cosyvoice-v3-plus".to_string()),
            aws_region: env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            synthesis_timeout_secs: env::var("SYNTHESIS_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()?,
        };

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}

use std::sync::Arc;
use std::time::Duration;

use hanzimaster_tts::controllers::tts::TtsController;
use hanzimaster_tts::domain::tts::TtsService;
use hanzimaster_tts::infrastructure::config::{Config, LogFormat, TtsProvider};
use hanzimaster_tts::infrastructure::http::start_http_server;
use hanzimaster_tts::infrastructure::synthesizers::{
    CosyVoiceSynthesizer, PollySynthesizer, Synthesizer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting HanziMaster TTS Service on {}:{}",
        config.host,
        config.port
    );

    let timeout = Duration::from_secs(config.synthesis_timeout_secs);

    let synthesizer: Arc<dyn Synthesizer> = match config.provider {
        TtsProvider::CosyVoice => {
            if config.dashscope_api_key.is_none() {
                tracing::warn!(
                    "DASHSCOPE_API_KEY not set; synthesis requests will fail until configured"
                );
            }
            Arc::new(CosyVoiceSynthesizer::new(
                config.dashscope_api_key.clone(),
                config.dashscope_model.clone(),
                timeout,
            ))
        }
        TtsProvider::Polly => {
            tracing::info!("Initializing AWS Polly client with region: {}", config.aws_region);

            let has_access_key = std::env::var("AWS_ACCESS_KEY_ID").is_ok();
            let has_secret_key = std::env::var("AWS_SECRET_ACCESS_KEY").is_ok();
            if !has_access_key || !has_secret_key {
                tracing::warn!("AWS credentials not found in environment variables. Will attempt to use other credential providers (instance metadata, etc.)");
            }

            let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
                .region(aws_config::Region::new(config.aws_region.clone()))
                .load()
                .await;
            let polly_client = Arc::new(aws_sdk_polly::Client::new(&aws_config));

            Arc::new(PollySynthesizer::new(polly_client, timeout))
        }
    };

    tracing::info!(
        provider = synthesizer.name(),
        configured = synthesizer.is_configured(),
        "Synthesizer initialized"
    );

    let config = Arc::new(config);

    let tts_service = Arc::new(TtsService::new(
        synthesizer.clone(),
        config.default_voice.clone(),
    ));
    let tts_controller = Arc::new(TtsController::new(tts_service));

    start_http_server(config, synthesizer, tts_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "hanzimaster_tts=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "hanzimaster_tts=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}

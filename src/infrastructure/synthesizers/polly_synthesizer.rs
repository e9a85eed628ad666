use super::{SynthesisError, Synthesizer};
use crate::domain::tts::AnnotationStyle;
use async_trait::async_trait;
use aws_sdk_polly::{
    types::{Engine, OutputFormat, TextType, VoiceId},
    Client as PollyClient,
};
use std::sync::Arc;
use std::time::Duration;

/// AWS Polly implementation of the synthesizer capability.
///
/// Polly accepts SSML, so pronunciation hints arrive as a phoneme-annotated
/// markup document (markup annotation style). The voice id travels both in
/// the markup and as the request parameter.
pub struct PollySynthesizer {
    polly_client: Arc<PollyClient>,
    timeout: Duration,
}

impl PollySynthesizer {
    pub fn new(polly_client: Arc<PollyClient>, timeout: Duration) -> Self {
        Self {
            polly_client,
            timeout,
        }
    }
}

#[async_trait]
impl Synthesizer for PollySynthesizer {
    fn name(&self) -> &'static str {
        "polly"
    }

    fn annotation_style(&self) -> AnnotationStyle {
        AnnotationStyle::Markup
    }

    fn is_configured(&self) -> bool {
        // The SDK also supports instance-profile credentials, but for this
        // service explicit env credentials are the deployment contract.
        std::env::var("AWS_ACCESS_KEY_ID").is_ok() && std::env::var("AWS_SECRET_ACCESS_KEY").is_ok()
    }

    async fn synthesize(&self, payload: &str, voice_id: &str) -> Result<Vec<u8>, SynthesisError> {
        tracing::info!(
            voice = voice_id,
            text_length = payload.len(),
            output_format = "Mp3",
            "Calling AWS Polly synthesize_speech"
        );

        let request = self
            .polly_client
            .synthesize_speech()
            .text(payload)
            .text_type(TextType::Ssml)
            .voice_id(VoiceId::from(voice_id))
            .output_format(OutputFormat::Mp3)
            .engine(Engine::Neural)
            .send();

        let result = tokio::time::timeout(self.timeout, request)
            .await
            .map_err(|_| {
                tracing::error!(
                    voice = voice_id,
                    timeout_secs = self.timeout.as_secs(),
                    "AWS Polly call exceeded timeout"
                );
                SynthesisError::Timeout
            })?
            .map_err(|e| {
                tracing::error!(
                    error = ?e,
                    voice = voice_id,
                    text_length = payload.len(),
                    "AWS Polly synthesize_speech failed"
                );
                SynthesisError::Provider(format!("AWS Polly error: {:?}", e))
            })?;

        let audio_stream = result.audio_stream.collect().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to collect audio stream from Polly response");
            SynthesisError::MalformedResponse
        })?;

        let audio_bytes = audio_stream.into_bytes().to_vec();
        tracing::debug!(
            audio_size = audio_bytes.len(),
            "Polly audio stream collected successfully"
        );

        Ok(audio_bytes)
    }
}

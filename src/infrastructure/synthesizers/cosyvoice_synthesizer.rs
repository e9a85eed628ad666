use super::{SynthesisError, Synthesizer};
use crate::domain::tts::AnnotationStyle;
use async_trait::async_trait;
use base64::Engine as _;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

const SYNTHESIZE_URL: &str =
    "https://dashscope.aliyuncs.com/api/v1/services/aigc/text2audio/text-synthesize";
const SAMPLE_RATE: u32 = 22050;

/// DashScope CosyVoice implementation of the synthesizer capability.
///
/// CosyVoice has no markup support; pronunciation hints reach it embedded in
/// the input text (inline annotation style). Uses the synchronous HTTP API
/// rather than the WebSocket one for serverless compatibility.
pub struct CosyVoiceSynthesizer {
    http_client: reqwest::Client,
    api_key: Option<String>,
    model: String,
}

#[derive(Debug, Deserialize)]
struct DashScopeResponse {
    output: Option<DashScopeOutput>,
}

#[derive(Debug, Deserialize)]
struct DashScopeOutput {
    audio: Option<String>,
    audio_url: Option<String>,
}

impl CosyVoiceSynthesizer {
    pub fn new(api_key: Option<String>, model: String, timeout: Duration) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            http_client,
            api_key,
            model,
        }
    }

    fn map_transport_error(e: reqwest::Error) -> SynthesisError {
        if e.is_timeout() {
            SynthesisError::Timeout
        } else {
            SynthesisError::Provider(format!("DashScope request failed: {}", e))
        }
    }

    /// Some responses inline the audio as base64, others hand back a URL to
    /// download from.
    async fn extract_audio(&self, output: DashScopeOutput) -> Result<Vec<u8>, SynthesisError> {
        if let Some(audio_base64) = output.audio {
            return base64::engine::general_purpose::STANDARD
                .decode(audio_base64.as_bytes())
                .map_err(|e| {
                    tracing::error!(error = %e, "DashScope returned undecodable audio payload");
                    SynthesisError::MalformedResponse
                });
        }

        if let Some(audio_url) = output.audio_url {
            tracing::debug!(url = %audio_url, "Downloading audio from DashScope URL");
            let response = self
                .http_client
                .get(&audio_url)
                .send()
                .await
                .map_err(Self::map_transport_error)?;
            let bytes = response.bytes().await.map_err(Self::map_transport_error)?;
            return Ok(bytes.to_vec());
        }

        Err(SynthesisError::MalformedResponse)
    }
}

#[async_trait]
impl Synthesizer for CosyVoiceSynthesizer {
    fn name(&self) -> &'static str {
        "cosyvoice"
    }

    fn annotation_style(&self) -> AnnotationStyle {
        AnnotationStyle::Inline
    }

    fn is_configured(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }

    async fn synthesize(&self, payload: &str, voice_id: &str) -> Result<Vec<u8>, SynthesisError> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                SynthesisError::Provider("DashScope API key not configured".to_string())
            })?;

        tracing::info!(
            model = %self.model,
            voice = voice_id,
            text_length = payload.len(),
            "Calling DashScope text2audio API"
        );

        let response = self
            .http_client
            .post(SYNTHESIZE_URL)
            .bearer_auth(api_key)
            .header("X-DashScope-Async", "disable")
            .json(&json!({
                "model": self.model,
                "input": { "text": payload },
                "parameters": {
                    "voice": voice_id,
                    "format": "mp3",
                    "sample_rate": SAMPLE_RATE,
                },
            }))
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            tracing::error!(
                status = %status,
                detail = %detail,
                "DashScope API returned an error"
            );
            return Err(SynthesisError::Provider(format!(
                "DashScope API error: {}",
                detail
            )));
        }

        let body: DashScopeResponse = response.json().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to parse DashScope response body");
            SynthesisError::MalformedResponse
        })?;

        let output = body.output.ok_or(SynthesisError::MalformedResponse)?;
        let audio_bytes = self.extract_audio(output).await?;

        tracing::debug!(
            audio_size = audio_bytes.len(),
            "DashScope audio received successfully"
        );

        Ok(audio_bytes)
    }
}

use super::error::TtsServiceError;
use super::payload::build_payload;
use super::voice::{self, VoiceProfile};
use crate::infrastructure::synthesizers::Synthesizer;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Instant;

/// Result of one successful synthesis call, returned to the controller.
#[derive(Debug, Clone)]
pub struct SynthesisOutcome {
    pub audio_data: Vec<u8>,
    pub characters_used: usize,
    pub voice_key: String,
    pub latency_ms: u64,
    pub used_phoneme: bool,
}

pub struct TtsService {
    synthesizer: Arc<dyn Synthesizer>,
    default_voice: String,
}

impl TtsService {
    pub fn new(synthesizer: Arc<dyn Synthesizer>, default_voice: String) -> Self {
        Self {
            synthesizer,
            default_voice,
        }
    }

    fn resolve_voice(&self, key: Option<&str>) -> Result<&'static VoiceProfile, TtsServiceError> {
        let key = key.filter(|k| !k.is_empty()).unwrap_or(&self.default_voice);
        voice::find(key).ok_or_else(|| TtsServiceError::Invalid(format!("Unknown voice: {}", key)))
    }
}

#[async_trait]
pub trait TtsServiceApi: Send + Sync {
    /// Synthesize speech from Chinese text.
    ///
    /// The optional pinyin hint disambiguates pronunciation of single and
    /// double character words; on longer text it is ignored. The payload
    /// shape follows the configured provider's annotation style.
    async fn synthesize(
        &self,
        text: &str,
        voice: Option<&str>,
        pinyin: Option<&str>,
    ) -> Result<SynthesisOutcome, TtsServiceError>;
}

#[async_trait]
impl TtsServiceApi for TtsService {
    async fn synthesize(
        &self,
        text: &str,
        voice: Option<&str>,
        pinyin: Option<&str>,
    ) -> Result<SynthesisOutcome, TtsServiceError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TtsServiceError::Invalid("Text is required".to_string()));
        }
        let characters_used = text.chars().count();

        let voice = self.resolve_voice(voice)?;

        let payload = build_payload(
            self.synthesizer.annotation_style(),
            text,
            voice.id,
            pinyin,
        );

        tracing::info!(
            provider = self.synthesizer.name(),
            voice = voice.key,
            characters = characters_used,
            used_phoneme = payload.used_phoneme,
            "TTS synthesis request"
        );

        let start_time = Instant::now();
        let audio_data = self
            .synthesizer
            .synthesize(&payload.text, voice.id)
            .await
            .map_err(|e| {
                // The payload is opaque to the provider layer; log it verbatim
                // so failures can be diagnosed against provider docs.
                tracing::error!(
                    provider = self.synthesizer.name(),
                    voice = voice.key,
                    payload = %payload.text,
                    error = %e,
                    "Synthesis failed"
                );
                TtsServiceError::from(e)
            })?;
        let latency_ms = start_time.elapsed().as_millis() as u64;

        tracing::info!(
            provider = self.synthesizer.name(),
            voice = voice.key,
            latency_ms = latency_ms,
            audio_size_bytes = audio_data.len(),
            "TTS synthesis completed"
        );

        Ok(SynthesisOutcome {
            audio_data,
            characters_used,
            voice_key: voice.key.to_string(),
            latency_ms,
            used_phoneme: payload.used_phoneme,
        })
    }
}

pub mod cosyvoice_synthesizer;
pub mod polly_synthesizer;

pub use cosyvoice_synthesizer::CosyVoiceSynthesizer;
pub use polly_synthesizer::PollySynthesizer;

use crate::domain::tts::AnnotationStyle;
use async_trait::async_trait;

/// Failures from the external speech provider, classified so the caller can
/// tell a retryable timeout apart from a hard provider error.
#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("synthesis request timed out")]
    Timeout,
    #[error("provider error: {0}")]
    Provider(String),
    #[error("unexpected provider response format")]
    MalformedResponse,
}

/// Abstracts the underlying speech provider (DashScope CosyVoice, AWS Polly,
/// ...). Implementations own their transport, authentication and timeout
/// handling; the payload they receive is already fully assembled.
#[async_trait]
pub trait Synthesizer: Send + Sync {
    /// Short provider name for logs and the health endpoint.
    fn name(&self) -> &'static str;

    /// How this provider accepts pronunciation hints, which decides the
    /// payload shape the request builder produces.
    fn annotation_style(&self) -> AnnotationStyle;

    /// Whether provider credentials are present in the environment.
    fn is_configured(&self) -> bool;

    /// Convert a finished payload (annotated text or markup document) and a
    /// resolved provider voice id into raw audio bytes (MP3).
    async fn synthesize(&self, payload: &str, voice_id: &str) -> Result<Vec<u8>, SynthesisError>;
}

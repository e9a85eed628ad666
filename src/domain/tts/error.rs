use crate::error::AppError;
use crate::infrastructure::synthesizers::SynthesisError;

#[derive(Debug, thiserror::Error)]
pub enum TtsServiceError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("synthesis request timed out")]
    Timeout,
    #[error("provider error: {0}")]
    Provider(String),
    #[error("synthesis failed: unexpected provider response")]
    MalformedResponse,
}

impl From<SynthesisError> for TtsServiceError {
    fn from(err: SynthesisError) -> Self {
        match err {
            SynthesisError::Timeout => TtsServiceError::Timeout,
            SynthesisError::Provider(msg) => TtsServiceError::Provider(msg),
            SynthesisError::MalformedResponse => TtsServiceError::MalformedResponse,
        }
    }
}

impl From<TtsServiceError> for AppError {
    fn from(err: TtsServiceError) -> Self {
        match err {
            TtsServiceError::Invalid(msg) => AppError::BadRequest(msg),
            TtsServiceError::Timeout => {
                AppError::Timeout("Synthesis request timed out".to_string())
            }
            TtsServiceError::Provider(msg) => AppError::ExternalService(msg),
            TtsServiceError::MalformedResponse => {
                AppError::ExternalService("Synthesis failed".to_string())
            }
        }
    }
}

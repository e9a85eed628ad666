pub mod dto;
pub mod error;
pub mod payload;
pub mod pinyin;
pub mod service;
pub mod voice;

pub use dto::{
    BatchSynthesizeItem, BatchSynthesizeRequest, BatchSynthesizeResponse, HealthResponse,
    SynthesizeRequest, SynthesizeResponse, VoiceInfo,
};
pub use error::TtsServiceError;
pub use payload::{build_payload, AnnotationStyle, SynthesisPayload};
pub use pinyin::normalize;
pub use service::{SynthesisOutcome, TtsService, TtsServiceApi};
pub use voice::{VoiceProfile, DEFAULT_VOICE, VOICES};

use serde::{Deserialize, Serialize};

/// Request for POST /synthesize
#[derive(Debug, Serialize, Deserialize)]
pub struct SynthesizeRequest {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice: Option<String>,
    /// Optional pinyin hint for pronunciation disambiguation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pinyin: Option<String>,
}

/// Response with synthesized audio
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesizeResponse {
    pub audio_base64: String,
    pub format: String,
    pub characters_used: usize,
    pub voice: String,
    pub latency_ms: u64,
    pub used_phoneme: bool,
}

/// Request for POST /synthesize-batch
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchSynthesizeRequest {
    pub texts: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice: Option<String>,
}

/// One per-text entry in the batch response. Failures are reported in place
/// so a single bad text does not sink the whole batch.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSynthesizeItem {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_base64: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub success: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BatchSynthesizeResponse {
    pub results: Vec<BatchSynthesizeItem>,
}

/// Voice information for GET /voices
#[derive(Debug, Serialize, Deserialize)]
pub struct VoiceInfo {
    pub id: String,
    pub key: String,
    pub name: String,
    pub gender: String,
    pub description: String,
    pub language: String,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub configured: bool,
    pub provider: String,
    pub voice_count: usize,
}

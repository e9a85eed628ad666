use axum::{extract::State, Json};
use std::sync::Arc;

use crate::domain::tts::{voice, HealthResponse, VoiceInfo};
use crate::infrastructure::synthesizers::Synthesizer;

/// GET /health - liveness plus provider credential status
pub async fn health(State(synthesizer): State<Arc<dyn Synthesizer>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        configured: synthesizer.is_configured(),
        provider: synthesizer.name().to_string(),
        voice_count: voice::VOICES.len(),
    })
}

/// GET /voices - the static voice table
pub async fn voices() -> Json<Vec<VoiceInfo>> {
    let voices = voice::VOICES
        .iter()
        .map(|v| VoiceInfo {
            id: v.id.to_string(),
            key: v.key.to_string(),
            name: v.name.to_string(),
            gender: v.gender.to_string(),
            description: v.description.to_string(),
            language: v.language.to_string(),
        })
        .collect();

    Json(voices)
}

use axum::{extract::State, Json};
use base64::Engine as _;
use std::sync::Arc;

use crate::{
    domain::tts::{
        BatchSynthesizeItem, BatchSynthesizeRequest, BatchSynthesizeResponse, SynthesizeRequest,
        SynthesizeResponse, TtsService, TtsServiceApi,
    },
    error::{AppError, AppResult},
};

const MAX_TEXT_CHARS: usize = 10_000;
const AUDIO_FORMAT: &str = "mp3";

pub struct TtsController {
    tts_service: Arc<TtsService>,
}

impl TtsController {
    pub fn new(tts_service: Arc<TtsService>) -> Self {
        Self { tts_service }
    }

    fn validate_text(text: &str) -> AppResult<()> {
        if text.trim().is_empty() {
            return Err(AppError::BadRequest("Text is required".to_string()));
        }
        if text.chars().count() > MAX_TEXT_CHARS {
            return Err(AppError::PayloadTooLarge(format!(
                "Text must be {} characters or less",
                MAX_TEXT_CHARS
            )));
        }
        Ok(())
    }

    /// POST /synthesize - Convert Chinese text to speech
    ///
    /// For single/double character words a pinyin hint can be provided to
    /// ensure correct pronunciation.
    pub async fn synthesize(
        State(controller): State<Arc<TtsController>>,
        Json(request): Json<SynthesizeRequest>,
    ) -> AppResult<Json<SynthesizeResponse>> {
        Self::validate_text(&request.text)?;

        let outcome = controller
            .tts_service
            .synthesize(
                &request.text,
                request.voice.as_deref(),
                request.pinyin.as_deref(),
            )
            .await
            .map_err(AppError::from)?;

        Ok(Json(SynthesizeResponse {
            audio_base64: base64::engine::general_purpose::STANDARD.encode(&outcome.audio_data),
            format: AUDIO_FORMAT.to_string(),
            characters_used: outcome.characters_used,
            voice: outcome.voice_key,
            latency_ms: outcome.latency_ms,
            used_phoneme: outcome.used_phoneme,
        }))
    }

    /// POST /synthesize-batch - Convert multiple texts in one call
    ///
    /// Texts are synthesized sequentially; per-text failures are reported in
    /// the matching result entry instead of failing the batch.
    pub async fn synthesize_batch(
        State(controller): State<Arc<TtsController>>,
        Json(request): Json<BatchSynthesizeRequest>,
    ) -> AppResult<Json<BatchSynthesizeResponse>> {
        if request.texts.is_empty() {
            return Err(AppError::BadRequest("texts cannot be empty".to_string()));
        }

        let mut results = Vec::with_capacity(request.texts.len());
        for text in request.texts {
            let item = match Self::validate_text(&text) {
                Err(e) => BatchSynthesizeItem {
                    text,
                    audio_base64: None,
                    error: Some(e.to_string()),
                    success: false,
                },
                Ok(()) => match controller
                    .tts_service
                    .synthesize(&text, request.voice.as_deref(), None)
                    .await
                {
                    Ok(outcome) => BatchSynthesizeItem {
                        text,
                        audio_base64: Some(
                            base64::engine::general_purpose::STANDARD
                                .encode(&outcome.audio_data),
                        ),
                        error: None,
                        success: true,
                    },
                    Err(e) => BatchSynthesizeItem {
                        text,
                        audio_base64: None,
                        error: Some(e.to_string()),
                        success: false,
                    },
                },
            };
            results.push(item);
        }

        Ok(Json(BatchSynthesizeResponse { results }))
    }
}

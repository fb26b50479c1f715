#[cfg(feature = "ssr")]
use actix_web::{web, HttpResponse};
#[cfg(feature = "ssr")]
use std::sync::Arc;
#[cfg(feature = "ssr")]
use leptos::logging::log;

#[cfg(feature = "ssr")]
use crate::llm::ReviewModel;
#[cfg(feature = "ssr")]
use crate::models::review::{ApiError, GeneratedReview, ReviewRequest};
#[cfg(feature = "ssr")]
use crate::prompt::build_review_prompt;

/// Returned when OPENAI_API_KEY is absent from the environment.
#[cfg(feature = "ssr")]
pub const CONFIG_ERROR_MESSAGE: &str = "サーバー設定エラー: API キーが設定されていません";

/// Returned when a required request field is missing or empty.
#[cfg(feature = "ssr")]
pub const VALIDATION_ERROR_MESSAGE: &str = "すべての項目を入力してください";

/// Returned for any failure while invoking the generation model.
#[cfg(feature = "ssr")]
pub const GENERATION_ERROR_MESSAGE: &str =
    "口コミの生成に失敗しました。時間をおいてもう一度お試しください。";

// Log previews are capped so a long comment never floods the server log.
#[cfg(feature = "ssr")]
const COMMENT_PREVIEW_CHARS: usize = 20;

/// POST /api/generate-review: validates the payload, builds the prompt and
/// asks the model for a review. Every outcome is a JSON body; nothing
/// propagates to the transport layer uncaught.
#[cfg(feature = "ssr")]
pub async fn generate_review(
    model: web::Data<Arc<dyn ReviewModel>>,
    body: web::Bytes,
) -> HttpResponse {
    // Credential check comes first, before the body is even parsed.
    if std::env::var("OPENAI_API_KEY").is_err() {
        log!("[API] OPENAI_API_KEY environment variable is not set");
        return HttpResponse::InternalServerError().json(ApiError::new(CONFIG_ERROR_MESSAGE));
    }

    let request: ReviewRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(err) => {
            // Unparseable bodies take the generic failure path, same as any
            // other exception inside the handler.
            log!("[API] Failed to parse request body: {}", err);
            return HttpResponse::InternalServerError()
                .json(ApiError::with_details(GENERATION_ERROR_MESSAGE, err.to_string()));
        }
    };

    if !request.has_required_fields() {
        log!("[API] Rejected incomplete request");
        return HttpResponse::BadRequest().json(ApiError::new(VALIDATION_ERROR_MESSAGE));
    }

    // Only a bounded preview of the comment is logged, never the full text.
    let preview: String = request.comment.chars().take(COMMENT_PREVIEW_CHARS).collect();
    log!(
        "[API] Generating review - ratings: {}/{}/{}, comment: {:?}...",
        request.service,
        request.skill,
        request.atmosphere,
        preview
    );

    let prompt = build_review_prompt(&request);
    match model.generate(&prompt).await {
        Ok(text) => {
            log!("[API] Review generated ({} chars)", text.trim().chars().count());
            HttpResponse::Ok().json(GeneratedReview {
                review: text.trim().to_string(),
            })
        }
        Err(err) => {
            leptos::logging::error!("[API] Review generation failed: {:?}", err);
            HttpResponse::InternalServerError()
                .json(ApiError::with_details(GENERATION_ERROR_MESSAGE, err.to_string()))
        }
    }
}

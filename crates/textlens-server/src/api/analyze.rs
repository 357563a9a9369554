use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    Extension, Json,
};
use serde::Deserialize;
use textlens_core::AnalysisResult;

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct AnalyzeRequest {
    pub text: String,
}

/// `POST /api/v1/analyze`
///
/// Unlike the stdin binary, the whole `text` is analyzed; embedded newlines
/// are ordinary separators.
pub(super) async fn analyze_text(
    Extension(req_id): Extension<RequestId>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<AnalysisResult>>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "rejected analyze payload");
        ApiError::new(
            req_id.0.clone(),
            rejection_code(rejection.status()),
            rejection.body_text(),
        )
    })?;

    let data = textlens_core::analyze(&request.text);
    tracing::info!(
        request_id = %req_id.0,
        word_count = data.word_count,
        sentiment_score = data.sentiment_score,
        "analyzed text"
    );

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}

fn rejection_code(status: StatusCode) -> &'static str {
    match status {
        StatusCode::PAYLOAD_TOO_LARGE => "payload_too_large",
        StatusCode::UNSUPPORTED_MEDIA_TYPE => "unsupported_media_type",
        StatusCode::UNPROCESSABLE_ENTITY => "validation_error",
        _ => "bad_request",
    }
}

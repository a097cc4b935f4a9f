use crate::herbal_guide::context::HerbalContext;
use crate::herbal_guide::handler::decode_image;
use crate::herbal_guide::prediction_result::{join_herbs, PredictionResult};
use crate::library::error::HerbalError;
use crate::web::error::ApiError;
use crate::web::page::INDEX_HTML;
use axum::extract::multipart::MultipartRejection;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Multipart, State};
use axum::response::Html;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    #[serde(flatten)]
    pub result: PredictionResult,
    pub confidence: String,
    pub recommended: String,
}

impl From<PredictionResult> for PredictResponse {
    fn from(result: PredictionResult) -> Self {
        Self {
            confidence: result.confidence_display(),
            recommended: result.recommended_display(),
            result,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    #[serde(default)]
    pub symptoms: String,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub recommended_herbs: BTreeSet<String>,
    pub recommended: String,
}

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// `multipart/form-data` with an `image` file part and an optional
/// `symptoms` text part.
pub async fn predict(
    State(context): State<HerbalContext>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<PredictResponse>, ApiError> {
    let mut multipart = multipart?;
    let mut image_bytes = None;
    let mut symptoms = String::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| HerbalError::InvalidRequest(e.to_string()))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("image") => {
                image_bytes = Some(
                    field
                        .bytes()
                        .await
                        .map_err(|e| HerbalError::InvalidRequest(e.to_string()))?,
                );
            }
            Some("symptoms") => {
                symptoms = field
                    .text()
                    .await
                    .map_err(|e| HerbalError::InvalidRequest(e.to_string()))?;
            }
            _ => {}
        }
    }

    let image_bytes = image_bytes
        .filter(|bytes| !bytes.is_empty())
        .ok_or_else(|| HerbalError::InvalidRequest("missing image upload".to_string()))?;

    // Decoding and inference are CPU bound.
    let result = tokio::task::spawn_blocking(move || {
        let image = decode_image(&image_bytes)?;
        context.handle(&image, &symptoms)
    })
    .await
    .map_err(|e| HerbalError::Inference(format!("inference task failed: {}", e)))??;

    Ok(Json(result.into()))
}

pub async fn recommend(
    State(context): State<HerbalContext>,
    request: Result<Json<RecommendRequest>, JsonRejection>,
) -> Result<Json<RecommendResponse>, ApiError> {
    let Json(request) = request?;
    let recommended_herbs = context.recommend(&request.symptoms);
    Ok(Json(RecommendResponse {
        recommended: join_herbs(&recommended_herbs),
        recommended_herbs,
    }))
}


use axum::extract::{Query, State};
use axum::response::Html;
use lib::service::CommonService;
use lib::utilities::{format_system_response, normalize_text};

use crate::error::AnalyzeError;

pub const TEXT_TO_ANALYZE: &str = "textToAnalyze";
const INDEX_HTML: &str = include_str!("../templates/index.html");


pub async fn render_index_page() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /emotionDetector?textToAnalyze=...
///
/// Only the first `textToAnalyze` value is used.
pub async fn emotion_detector(
    State(service): State<CommonService>,
    Query(params): Query<Vec<(String, String)>>
) -> Result<String, AnalyzeError> {

    let text = params.iter()
        .find(|(key, _)| key == TEXT_TO_ANALYZE)
        .map(|(_, value)| value.as_str());

    let Some(text) = normalize_text(text) else {
        tracing::info!("rejecting empty text");
        return Err(AnalyzeError::InvalidInput);
    };

    let scores = service.detector.detect(text).await?;
    scores.validate()?;
    tracing::debug!(?scores, "scores detected");

    Ok(format_system_response(&scores))
}


use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use reqwest::{header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE}, Client};
use serde::Deserialize;
use serde_json::json;

use crate::env_keys::WATSON_URL;
use super::common_structs::EmotionScores;
use super::detector::EmotionDetector;

pub const EMOTION_PREDICT_ENDPOINT: &str = "https://sn-watson-emotion.labs.skills.network/v1/watson.runtime.nlp.v1/NlpService/EmotionPredict";
const MODEL_ID_HEADER: &str = "grpc-metadata-mm-model-id";
const MODEL_ID: &str = "emotion_aggregated-workflow_lang_en_stock";


#[derive(Debug, Clone)]
pub struct WatsonService {
    client: Client,
    endpoint: String,
    headers: HeaderMap,
}

#[derive(Debug, Deserialize)]
struct EmotionPredictResponse {
    #[serde(rename = "emotionPredictions")]
    emotion_predictions: Vec<EmotionPrediction>,
}

#[derive(Debug, Deserialize)]
struct EmotionPrediction {
    emotion: EmotionScores,
}


impl WatsonService {
    pub fn new() -> Self {
        let endpoint = std::env::var(WATSON_URL).unwrap_or(EMOTION_PREDICT_ENDPOINT.to_owned());
        Self::with_endpoint(&endpoint)
    }

    pub fn with_endpoint(endpoint: &str) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static(MODEL_ID_HEADER), HeaderValue::from_static(MODEL_ID));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Self {
            client: Client::new(),
            endpoint: endpoint.to_owned(),
            headers
        }
    }

    pub fn parse_emotion_predict_output(body: &str) -> Result<EmotionScores> {
        let response = serde_json::from_str::<EmotionPredictResponse>(body)
            .context("Error parsing emotion predictions")?;
        let prediction = response.emotion_predictions
            .into_iter()
            .next()
            .context("No emotion prediction returned")?;
        Ok(prediction.emotion)
    }
}

impl Default for WatsonService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmotionDetector for WatsonService {
    async fn detect(&self, text: &str) -> Result<EmotionScores> {
        let body = json!({
            "raw_document": {
                "text": text
            }
        });

        let response = self.client
            .post(&self.endpoint)
            .headers(self.headers.clone())
            .body(serde_json::to_string(&body)?)
            .send()
            .await?;

        let status = response.status();
        let body_string = response.text().await?;
        tracing::debug!(%status, body = %body_string, "watson response");

        if !status.is_success() {
            bail!("Emotion predict failed with status {}: {}", status, body_string);
        }

        Self::parse_emotion_predict_output(&body_string)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use axum::extract::State;
    use axum::http::{HeaderMap as AxumHeaderMap, StatusCode};
    use axum::routing::post;
    use axum::Router;
    use serde_json::Value;

    const PREDICTION_BODY: &str = r#"{
        "emotionPredictions": [
            {
                "emotion": {"anger": 0.01, "disgust": 0.02, "fear": 0.03, "joy": 0.9, "sadness": 0.04}
            }
        ]
    }"#;

    #[derive(Clone, Default)]
    struct Received {
        requests: Arc<Mutex<Vec<(Option<String>, Value)>>>,
    }

    async fn record(State(received): State<Received>, headers: AxumHeaderMap, body: String) {
        let model_id = headers.get(MODEL_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_owned());
        let body = serde_json::from_str(&body).unwrap_or(Value::Null);
        received.requests.lock().unwrap().push((model_id, body));
    }

    async fn predict_ok(state: State<Received>, headers: AxumHeaderMap, body: String) -> &'static str {
        record(state, headers, body).await;
        PREDICTION_BODY
    }

    async fn predict_unavailable(state: State<Received>, headers: AxumHeaderMap, body: String) -> (StatusCode, &'static str) {
        record(state, headers, body).await;
        (StatusCode::SERVICE_UNAVAILABLE, "model is loading")
    }

    async fn serve_predict() -> (String, Received) {
        let received = Received::default();
        let app = Router::new()
            .route("/ok", post(predict_ok))
            .route("/unavailable", post(predict_unavailable))
            .with_state(received.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{}", addr), received)
    }

    #[tokio::test]
    async fn test_detect_sends_model_header_and_raw_document() {
        let (base_url, received) = serve_predict().await;
        let service = WatsonService::with_endpoint(&format!("{}/ok", base_url));

        let scores = service.detect("I am glad").await.unwrap();
        assert_eq!(scores.joy, 0.9);
        assert_eq!(scores.sadness, 0.04);

        let requests = received.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].0.as_deref(), Some(MODEL_ID));
        assert_eq!(requests[0].1, json!({"raw_document": {"text": "I am glad"}}));
    }

    #[tokio::test]
    async fn test_detect_non_success_status_fails() {
        let (base_url, received) = serve_predict().await;
        let service = WatsonService::with_endpoint(&format!("{}/unavailable", base_url));

        let error = service.detect("hello").await.unwrap_err();
        assert!(error.to_string().contains("503"), "error: {}", error);
        assert_eq!(received.requests.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_parse_emotion_predict_output() {
        let body = r#"{
            "emotionPredictions": [
                {
                    "emotion": {
                        "anger": 0.0132405795,
                        "disgust": 0.0020517302,
                        "fear": 0.009090992,
                        "joy": 0.9699522,
                        "sadness": 0.054984167
                    },
                    "target": "",
                    "emotionMentions": []
                }
            ],
            "producerId": {"name": "Ensemble Aggregated Emotion Workflow", "version": "0.0.1"}
        }"#;

        let scores = WatsonService::parse_emotion_predict_output(body).unwrap();
        assert_eq!(scores.joy, 0.9699522);
        assert_eq!(scores.anger, 0.0132405795);
    }

    #[test]
    fn test_parse_empty_predictions_fails() {
        let body = r#"{"emotionPredictions": []}"#;
        assert!(WatsonService::parse_emotion_predict_output(body).is_err());
    }

    #[test]
    fn test_parse_missing_emotion_fails() {
        let body = r#"{"emotionPredictions": [{"emotion": {"anger": 0.1, "joy": 0.2}}]}"#;
        assert!(WatsonService::parse_emotion_predict_output(body).is_err());
    }

    #[test]
    fn test_parse_not_json_fails() {
        assert!(WatsonService::parse_emotion_predict_output("<html>bad gateway</html>").is_err());
    }
}

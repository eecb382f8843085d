pub mod bedrock_service;
pub mod watson_service;
pub mod detector;
pub mod common_structs;

use std::str::FromStr;
use std::sync::Arc;
use anyhow::{bail, Result};
use detector::EmotionDetector;


#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetectorBackend {
    #[default]
    Watson,
    Bedrock,
}

impl FromStr for DetectorBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "watson" => Ok(DetectorBackend::Watson),
            "bedrock" => Ok(DetectorBackend::Bedrock),
            other => bail!("Unknown emotion backend: {}", other),
        }
    }
}


/// Shared, read-only state handed to every request.
#[derive(Clone)]
pub struct CommonService {
    pub detector: Arc<dyn EmotionDetector>,
}

impl CommonService {
    pub async fn new(backend: DetectorBackend) -> Self {
        let detector: Arc<dyn EmotionDetector> = match backend {
            DetectorBackend::Watson => Arc::new(watson_service::WatsonService::new()),
            DetectorBackend::Bedrock => {
                let config = aws_config::load_from_env().await;
                let bedrock_client = aws_sdk_bedrockruntime::Client::new(&config);
                Arc::new(bedrock_service::BedrockService::new(&bedrock_client))
            },
        };
        Self { detector }
    }

    pub fn from_detector(detector: Arc<dyn EmotionDetector>) -> Self {
        Self { detector }
    }
}

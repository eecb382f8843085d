
use anyhow::Result;
use async_trait::async_trait;

use super::common_structs::EmotionScores;


/// Anything that can score a piece of text for the five tracked emotions.
#[async_trait]
pub trait EmotionDetector: Send + Sync {
    async fn detect(&self, text: &str) -> Result<EmotionScores>;
}

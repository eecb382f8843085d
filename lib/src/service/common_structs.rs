
use std::fmt;
use anyhow::{bail, Result};
use serde::Deserialize;


/// The five tracked emotions, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emotion {
    Anger,
    Disgust,
    Fear,
    Joy,
    Sadness,
}

impl Emotion {
    pub const ALL: [Emotion; 5] = [
        Emotion::Anger,
        Emotion::Disgust,
        Emotion::Fear,
        Emotion::Joy,
        Emotion::Sadness,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Emotion::Anger => "anger",
            Emotion::Disgust => "disgust",
            Emotion::Fear => "fear",
            Emotion::Joy => "joy",
            Emotion::Sadness => "sadness",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}


/// Scores returned by a detector for one piece of text.
/// Extra keys in the source mapping (e.g. `dominant_emotion`) are ignored.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct EmotionScores {
    pub anger: f64,
    pub disgust: f64,
    pub fear: f64,
    pub joy: f64,
    pub sadness: f64,
}

impl EmotionScores {
    pub fn score(&self, emotion: Emotion) -> f64 {
        match emotion {
            Emotion::Anger => self.anger,
            Emotion::Disgust => self.disgust,
            Emotion::Fear => self.fear,
            Emotion::Joy => self.joy,
            Emotion::Sadness => self.sadness,
        }
    }

    pub fn validate(&self) -> Result<()> {
        for emotion in Emotion::ALL {
            let score = self.score(emotion);
            if !score.is_finite() || score < 0.0 {
                bail!("Invalid score for {}: {}", emotion, score);
            }
        }
        Ok(())
    }

    // ties go to the earliest label in Emotion::ALL
    pub fn dominant_emotion(&self) -> Emotion {
        let mut dominant = Emotion::ALL[0];
        for emotion in Emotion::ALL.into_iter().skip(1) {
            if self.score(emotion) > self.score(dominant) {
                dominant = emotion;
            }
        }
        dominant
    }
}

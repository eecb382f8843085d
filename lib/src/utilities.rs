use crate::service::common_structs::EmotionScores;

pub const INVALID_TEXT_MESSAGE: &str = "Invalid Text! Please try again!";


// None for absent, empty or whitespace-only text
pub fn normalize_text(text: Option<&str>) -> Option<&str> {
    let trimmed = text?.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed)
}

// Shortest round-trip digits, whole values keep ".0", and exponents below -4
// or from 16 up switch to "1.5e-05" form.
pub fn format_score(score: f64) -> String {
    if !score.is_finite() {
        return score.to_string().to_lowercase();
    }
    if score == 0.0 {
        return if score.is_sign_negative() { "-0.0".to_owned() } else { "0.0".to_owned() };
    }

    let scientific = format!("{:e}", score);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or_default()),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= 16 {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}e{}{:02}", mantissa, sign, exponent.abs());
    }

    let fixed = score.to_string();
    if fixed.contains('.') {
        fixed
    } else {
        format!("{}.0", fixed)
    }
}

pub fn format_system_response(scores: &EmotionScores) -> String {
    format!(
        "For the given statement, the system response is \
        'anger': {}, 'disgust': {}, 'fear': {}, \
        'joy': {} and 'sadness': {}. \
        The dominant emotion is {}.",
        format_score(scores.anger),
        format_score(scores.disgust),
        format_score(scores.fear),
        format_score(scores.joy),
        format_score(scores.sadness),
        scores.dominant_emotion()
    )
}

use serde_json::{json, Map, Value};
use super::tools::{ToDocument, ToolDefinition};
use crate::service::common_structs::Emotion;

pub const EMOTION_SCORES_TOOL_NAME: &str = "print_emotion_scores";


pub fn get_emotion_scores_tool_definition() -> ToolDefinition {
    let description = "Print emotion score of a given text.";

    let mut properties = Map::new();
    for emotion in Emotion::ALL {
        properties.insert(emotion.label().to_owned(), json!({
            "type": "number",
            "description": format!("Score for {}, ranging from 0.0 to 1.0.", emotion),
        }));
    }
    let required: Vec<&str> = Emotion::ALL.iter().map(|e| e.label()).collect();

    let json_schema = json!({
        "type": "object",
        "properties": Value::Object(properties),
        "required": required,
    });

    ToolDefinition::new(EMOTION_SCORES_TOOL_NAME, description, &json_schema.to_document())
}

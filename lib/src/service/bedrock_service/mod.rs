
pub mod tools;
pub mod emotion_scores_tool;

use std::env;
use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use aws_sdk_bedrockruntime::types::{SpecificToolChoice, ToolChoice};
use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::types::{ContentBlock, Message, SystemContentBlock, Tool, ToolConfiguration, ToolInputSchema, ToolSpecification, ConversationRole::User};
use aws_sdk_bedrockruntime::operation::converse::ConverseOutput;
use aws_sdk_bedrockruntime::types::ConverseOutput as ConverseOutputType;
use emotion_scores_tool::get_emotion_scores_tool_definition;

use tools::ToValue;
use crate::env_keys::CHAT_MODEL;
use super::common_structs::EmotionScores;
use super::detector::EmotionDetector;


#[derive(Debug, Clone)]
pub struct BedrockService {
    client: Client,
    chat_model_id: String,
}

impl BedrockService {
    pub fn new(client: &aws_sdk_bedrockruntime::Client) -> Self {
        Self {
            client: client.to_owned(),
            chat_model_id: env::var(CHAT_MODEL).unwrap_or("".to_owned())
        }
    }

    pub async fn get_emotion_scores(&self, text: &str) -> Result<EmotionScores> {
        let tool_definition = get_emotion_scores_tool_definition();
        let emotion_scores_tool = Tool::ToolSpec(
            ToolSpecification::builder()
                .name(&tool_definition.name)
                .description(&tool_definition.description)
                .input_schema(ToolInputSchema::Json(tool_definition.schema))
                .build()?
        );

        let tool_config = ToolConfiguration::builder()
            .set_tools(Some(vec![emotion_scores_tool]))
            .tool_choice(ToolChoice::Tool(SpecificToolChoice::builder().name(&tool_definition.name).build()?))
            .build()?;

        let system_prompt = format!("
            You are an expert at reading emotions within short pieces of text.
            The target text will be surrounded by <text></text>.
            Score anger, disgust, fear, joy and sadness independently.
            You have to use {} to print out the score for each emotion.
        ", tool_definition.name);

        let message = Message::builder()
            .role(User)
            .content(ContentBlock::Text(format!("<text>{}</text>", text)))
            .build()?;

        let response = self.send(&system_prompt, vec![message], Some(tool_config)).await?;

        tracing::debug!(?response, "bedrock response");
        Self::process_emotion_scores_output(response.output, &tool_definition.name)
    }


    fn process_emotion_scores_output(output: Option<ConverseOutputType>, tool_name: &str) -> Result<EmotionScores> {
        let output = output.context("Error getting output")?;
        let message = match output.as_message() {
            Ok(message) => message.to_owned(),
            Err(output) => {
                bail!("Converse output is not message: {:?}", output)
            },
        };

        let scores = message.content
            .iter()
            .filter_map(|content| content.as_tool_use().ok())
            .filter(|tool_use| tool_use.name() == tool_name)
            .find_map(|tool_use| {
                match serde_json::from_value::<EmotionScores>(tool_use.input().to_value()) {
                    Ok(scores) => Some(scores),
                    Err(error) => {
                        tracing::warn!(%error, "error getting scores from tool input");
                        None
                    },
                }
            });

        tracing::debug!(tool_name, ?scores, "tool use");

        scores.context("Error getting emotion scores")
    }


    async fn send(&self, system_prompt: &str, messages: Vec<Message>, tool_config: Option<ToolConfiguration>) -> Result<ConverseOutput> {
        let builder = self.client
            .converse()
            .model_id(&self.chat_model_id)
            .system(SystemContentBlock::Text(system_prompt.to_owned()))
            .set_messages(Some(messages))
            .set_tool_config(tool_config);

        let response = builder
            .send()
            .await?;
        Ok(response)
    }
}

#[async_trait]
impl EmotionDetector for BedrockService {
    async fn detect(&self, text: &str) -> Result<EmotionScores> {
        self.get_emotion_scores(text).await
    }
}

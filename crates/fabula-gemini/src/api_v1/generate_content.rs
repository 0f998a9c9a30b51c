use fabula_core::generic::{GenericMessage, GenericRole};
use serde::{Deserialize, Serialize};

use crate::impl_builder_methods;

use super::common::UsageMetadata;

/// Body of `POST /models/{model}:generateContent`.
#[derive(Debug, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    pub fn new(contents: Vec<Content>) -> Self {
        Self {
            contents,
            ..Default::default()
        }
    }

    /// Split generic messages into the request shape Gemini expects: system
    /// messages become the `systemInstruction`, everything else a content turn.
    pub fn from_messages<I>(messages: I) -> Self
    where
        I: IntoIterator<Item = GenericMessage>,
    {
        let mut system = Vec::new();
        let mut contents = Vec::new();

        for message in messages {
            match message.role {
                GenericRole::System => system.push(Part::text(message.content)),
                _ => contents.push(Content::from(message)),
            }
        }

        let request = Self::new(contents);
        if system.is_empty() {
            request
        } else {
            request.system_instruction(Content {
                role: None,
                parts: system,
            })
        }
    }
}

impl_builder_methods!(
    GenerateContentRequest,
    system_instruction: Content,
    generation_config: GenerationConfig
);

#[derive(Debug, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

impl GenerationConfig {
    /// `None` when no option is set, so the field is omitted from the body.
    pub fn from_options(temperature: Option<f64>, max_output_tokens: Option<u32>) -> Option<Self> {
        if temperature.is_none() && max_output_tokens.is_none() {
            return None;
        }
        Some(Self {
            temperature,
            max_output_tokens,
        })
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<ContentRole>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl From<GenericMessage> for Content {
    fn from(value: GenericMessage) -> Self {
        let role = match value.role {
            GenericRole::Assistant => ContentRole::Model,
            GenericRole::User | GenericRole::System => ContentRole::User,
        };
        Content {
            role: Some(role),
            parts: vec![Part::text(value.content)],
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ContentRole {
    User,
    Model,
}

/// A content part. Only text parts are produced; other part kinds in a
/// response deserialize with `text: None` and are skipped.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thought: Option<bool>,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            thought: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub usage_metadata: Option<UsageMetadata>,
    pub prompt_feedback: Option<PromptFeedback>,
    pub model_version: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, ignoring thought parts.
    /// `None` if there is no candidate or it carries no text at all.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let mut texts = content
            .parts
            .iter()
            .filter(|part| part.thought != Some(true))
            .filter_map(|part| part.text.as_deref())
            .peekable();
        texts.peek()?;
        Some(texts.collect())
    }

    pub fn block_reason(&self) -> Option<&str> {
        self.prompt_feedback.as_ref()?.block_reason.as_deref()
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    pub finish_reason: Option<FinishReason>,
    pub index: Option<u32>,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FinishReason {
    Stop,
    MaxTokens,
    Safety,
    Recitation,
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

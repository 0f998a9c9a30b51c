//! Assembles the single instruction prompt from the current form values.
use fabula_core::{
    generic::{GenericMessage, GenericRole},
    model::{GeminiModel, Model},
    template::{IntoPrompt, PromptTemplate},
};
use fabula_prompt::builder::PromptBuilder;

use crate::{
    defaults::{
        DEFAULT_EXCLUDE_GRAMMAR, DEFAULT_INCLUDE_GRAMMAR, DEFAULT_PLOT, DEFAULT_THEME,
        DEFAULT_TONE,
    },
    form::{FieldId, StoryForm},
};

const ROLE: &str = "You are a story generator. The user will provide conditions in separate \
                    fields or by selecting options. Use those conditions to create a complete text.";

const TASK: [&str; 7] = [
    "Write the text entirely in English.",
    "Follow the user’s conditions strictly.",
    "Keep the language level appropriate for the chosen reader age and proficiency.",
    "If the writing type is “storybook,” divide it into short chapters with titles.",
    "Ensure the grammar rules (include/exclude) are respected.",
    "Make the text coherent, warm, and engaging.",
    "Keep the total length under 1000 words, unless the user sets a different limit.",
];

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.is_empty() { default } else { value }
}

/// Build the prompt for `form`. Empty free-text fields fall back to their
/// default block; selector values are inserted verbatim.
pub fn assemble_prompt(form: &StoryForm) -> String {
    PromptBuilder::new()
        .add_line(ROLE)
        .add_blank_line()
        .add_line("Here are the conditions the user has provided:")
        .add_blank_line()
        .add_key_value(FieldId::Plot.label(), or_default(&form.plot, DEFAULT_PLOT))
        .add_key_value(FieldId::Theme.label(), or_default(&form.theme, DEFAULT_THEME))
        .add_key_value(FieldId::Tone.label(), or_default(&form.tone, DEFAULT_TONE))
        .add_key_value(FieldId::WritingType.label(), form.writing_type)
        .add_key_value(FieldId::AgeGroup.label(), form.age_group)
        .add_key_value(FieldId::Proficiency.label(), form.proficiency)
        .add_labeled_block(
            FieldId::IncludeGrammar.label(),
            or_default(&form.include_grammar, DEFAULT_INCLUDE_GRAMMAR),
        )
        .add_labeled_block(
            FieldId::ExcludeGrammar.label(),
            or_default(&form.exclude_grammar, DEFAULT_EXCLUDE_GRAMMAR),
        )
        .add_blank_line()
        .add_line("Your task:")
        .add_blank_line()
        .add_lines(TASK)
        .finalize()
}

/// The assembled prompt as a one-message [`PromptTemplate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryPrompt {
    text: String,
}

impl StoryPrompt {
    pub fn from_form(form: &StoryForm) -> Self {
        Self {
            text: assemble_prompt(form),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl IntoPrompt for StoryPrompt {
    type Message = GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        vec![GenericMessage::new(self.text, GenericRole::User)]
    }
}

impl PromptTemplate for StoryPrompt {
    const MODEL: Model = Model::Gemini(GeminiModel::Gemini25Flash);
}

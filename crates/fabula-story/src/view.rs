//! Framework-agnostic render model derived from a [`StoryState`].
//!
//! [`render`] is a pure function of the snapshot; any front-end (terminal,
//! web, immediate-mode GUI) draws the resulting [`StoryView`]. The `Display`
//! impl is a plain-text rendering used by terminals and logs.
use std::fmt;

use crate::{
    defaults::{
        DEFAULT_EXCLUDE_GRAMMAR, DEFAULT_INCLUDE_GRAMMAR, DEFAULT_PLOT, DEFAULT_THEME,
        DEFAULT_TONE,
    },
    form::{AgeGroup, FieldId, Proficiency, StoryForm, WritingType},
    state::StoryState,
};

pub const TITLE: &str = "Grammar-Aware Story Generator";
pub const OUTPUT_LABEL: &str = "Generated Story";
pub const OUTPUT_PLACEHOLDER: &str = "Your generated story will appear here...";
pub const BUTTON_IDLE_LABEL: &str = "Generate Story";
pub const BUTTON_BUSY_LABEL: &str = "Generating...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryView {
    pub title: &'static str,
    pub fields: Vec<FieldView>,
    pub button: ButtonView,
    /// Present only when the last run failed.
    pub error: Option<String>,
    pub output_label: &'static str,
    pub output: OutputView,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub id: FieldId,
    pub label: &'static str,
    pub full_width: bool,
    pub control: Control,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control {
    TextInput {
        value: String,
        placeholder: &'static str,
    },
    TextArea {
        value: String,
        placeholder: &'static str,
    },
    Select {
        options: Vec<SelectOption>,
        selected: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonView {
    pub label: &'static str,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputView {
    Loading,
    Story(String),
    Placeholder(&'static str),
}

fn options<T: Copy>(
    all: &[T],
    value: impl Fn(T) -> &'static str,
    label: impl Fn(T) -> &'static str,
) -> Vec<SelectOption> {
    all.iter()
        .map(|option| SelectOption {
            value: value(*option),
            label: label(*option),
        })
        .collect()
}

fn control(form: &StoryForm, field: FieldId) -> Control {
    let text = |value: &str, placeholder| Control::TextInput {
        value: value.to_owned(),
        placeholder,
    };
    let area = |value: &str, placeholder| Control::TextArea {
        value: value.to_owned(),
        placeholder,
    };

    match field {
        FieldId::Plot => text(&form.plot, DEFAULT_PLOT),
        FieldId::Theme => text(&form.theme, DEFAULT_THEME),
        FieldId::Tone => text(&form.tone, DEFAULT_TONE),
        FieldId::WritingType => Control::Select {
            options: options(WritingType::ALL, WritingType::value, WritingType::label),
            selected: form.writing_type.value(),
        },
        FieldId::AgeGroup => Control::Select {
            options: options(AgeGroup::ALL, AgeGroup::value, AgeGroup::label),
            selected: form.age_group.value(),
        },
        FieldId::Proficiency => Control::Select {
            options: options(Proficiency::ALL, Proficiency::value, Proficiency::label),
            selected: form.proficiency.value(),
        },
        FieldId::IncludeGrammar => area(&form.include_grammar, DEFAULT_INCLUDE_GRAMMAR),
        FieldId::ExcludeGrammar => area(&form.exclude_grammar, DEFAULT_EXCLUDE_GRAMMAR),
    }
}

/// Project a snapshot onto the render model.
pub fn render(state: &StoryState) -> StoryView {
    let fields = FieldId::ALL
        .into_iter()
        .map(|id| FieldView {
            id,
            label: id.label(),
            full_width: matches!(
                id,
                FieldId::Plot | FieldId::IncludeGrammar | FieldId::ExcludeGrammar
            ),
            control: control(&state.form, id),
        })
        .collect();

    let in_progress = state.generation.is_in_progress();

    let output = if in_progress {
        OutputView::Loading
    } else if let Some(story) = state.generation.story().filter(|story| !story.is_empty()) {
        OutputView::Story(story.to_owned())
    } else {
        OutputView::Placeholder(OUTPUT_PLACEHOLDER)
    };

    StoryView {
        title: TITLE,
        fields,
        button: ButtonView {
            label: if in_progress {
                BUTTON_BUSY_LABEL
            } else {
                BUTTON_IDLE_LABEL
            },
            disabled: !state.can_generate(),
        },
        error: state.generation.error().map(str::to_owned),
        output_label: OUTPUT_LABEL,
        output,
    }
}

impl fmt::Display for StoryView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", "=".repeat(self.title.chars().count()))?;

        for field in &self.fields {
            match &field.control {
                Control::TextInput { value, placeholder } => {
                    let shown = if value.is_empty() { *placeholder } else { value.as_str() };
                    writeln!(f, "{}: {shown}", field.label)?;
                }
                Control::TextArea { value, placeholder } => {
                    let shown = if value.is_empty() { *placeholder } else { value.as_str() };
                    writeln!(f, "{}:", field.label)?;
                    for line in shown.lines() {
                        writeln!(f, "  {line}")?;
                    }
                }
                Control::Select { options, selected } => {
                    let label = options
                        .iter()
                        .find(|option| option.value == *selected)
                        .map_or(*selected, |option| option.label);
                    writeln!(f, "{}: {label}", field.label)?;
                }
            }
        }

        let marker = if self.button.disabled { " (disabled)" } else { "" };
        writeln!(f)?;
        writeln!(f, "[ {} ]{marker}", self.button.label)?;

        if let Some(error) = &self.error {
            writeln!(f)?;
            writeln!(f, "! {error}")?;
        }

        writeln!(f)?;
        writeln!(f, "{}:", self.output_label)?;
        match &self.output {
            OutputView::Loading => writeln!(f, "  ..."),
            OutputView::Story(story) => writeln!(f, "{story}"),
            OutputView::Placeholder(placeholder) => writeln!(f, "  {placeholder}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        form::FieldEdit,
        generator::GENERATION_FAILED_MESSAGE,
        state::{GenerationOutcome, GenerationStatus, StoryEvent, reduce},
    };

    fn state_with(plot: &str, generation: GenerationStatus) -> StoryState {
        StoryState {
            form: StoryForm {
                plot: plot.into(),
                ..StoryForm::default()
            },
            generation,
        }
    }

    #[test]
    fn initial_view_shows_placeholders_and_disabled_button() {
        let view = render(&StoryState::default());

        assert_eq!(view.title, TITLE);
        assert_eq!(view.fields.len(), 8);
        assert_eq!(view.button, ButtonView {
            label: BUTTON_IDLE_LABEL,
            disabled: true
        });
        assert_eq!(view.error, None);
        assert_eq!(view.output, OutputView::Placeholder(OUTPUT_PLACEHOLDER));
        assert_eq!(view.fields[0].control, Control::TextInput {
            value: String::new(),
            placeholder: DEFAULT_PLOT
        });
    }

    #[test]
    fn button_is_disabled_without_plot_or_while_running() {
        let cases = [
            ("", GenerationStatus::Idle, true),
            ("", GenerationStatus::InProgress, true),
            ("x", GenerationStatus::InProgress, true),
            ("x", GenerationStatus::Idle, false),
            (
                "x",
                GenerationStatus::Completed(GenerationOutcome::Failed("e".into())),
                false,
            ),
            (
                "",
                GenerationStatus::Completed(GenerationOutcome::Story("s".into())),
                true,
            ),
        ];

        for (plot, generation, disabled) in cases {
            let view = render(&state_with(plot, generation.clone()));
            assert_eq!(view.button.disabled, disabled, "plot={plot:?} {generation:?}");
        }
    }

    #[test]
    fn loading_hides_previous_outcome() {
        let view = render(&state_with("x", GenerationStatus::InProgress));

        assert_eq!(view.output, OutputView::Loading);
        assert_eq!(view.error, None);
        assert_eq!(view.button.label, BUTTON_BUSY_LABEL);
    }

    #[test]
    fn success_and_failure_are_exclusive() {
        let ok = render(&state_with(
            "x",
            GenerationStatus::Completed(GenerationOutcome::Story("Chapter One: ...".into())),
        ));
        assert_eq!(ok.output, OutputView::Story("Chapter One: ...".into()));
        assert_eq!(ok.error, None);

        let failed = render(&state_with(
            "x",
            GenerationStatus::Completed(GenerationOutcome::Failed(
                GENERATION_FAILED_MESSAGE.into(),
            )),
        ));
        assert_eq!(failed.output, OutputView::Placeholder(OUTPUT_PLACEHOLDER));
        assert_eq!(failed.error.as_deref(), Some(GENERATION_FAILED_MESSAGE));
    }

    #[test]
    fn selectors_list_every_option_and_mark_selection() {
        let state = reduce(
            &StoryState::default(),
            StoryEvent::Edit(FieldEdit::WritingType(WritingType::SciFiNarrative)),
        );
        let view = render(&state);

        let Control::Select { options, selected } = &view.fields[3].control else {
            panic!("writing type should be a selector");
        };
        assert_eq!(options.len(), WritingType::ALL.len());
        assert_eq!(*selected, "sci-fi narrative");
        assert!(view.to_string().contains("Type of Writing: Sci-Fi Narrative\n"));
    }

    #[test]
    fn text_rendering_shows_story_and_error_regions() {
        let failed = render(&state_with(
            "x",
            GenerationStatus::Completed(GenerationOutcome::Failed(
                GENERATION_FAILED_MESSAGE.into(),
            )),
        ))
        .to_string();
        assert!(failed.contains(&format!("! {GENERATION_FAILED_MESSAGE}\n")));
        assert!(failed.contains(OUTPUT_PLACEHOLDER));

        let ok = render(&state_with(
            "x",
            GenerationStatus::Completed(GenerationOutcome::Story("Chapter One: ...".into())),
        ))
        .to_string();
        assert!(ok.ends_with("Generated Story:\nChapter One: ...\n"));
        assert!(!ok.contains("! "));
    }
}

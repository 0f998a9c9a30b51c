//! Form fields of the story generator.
//!
//! Free-text fields are plain `String`s. The three enumerated fields are
//! closed enums whose option *values* are what ends up in the prompt and on
//! the wire, while *labels* are what a selector shows.
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("unknown {field} option `{value}`")]
    UnknownOption { field: &'static str, value: String },
}

/// Declares a closed set of selector options with their value and label.
macro_rules! select_options {
    (
        $(#[$meta:meta])*
        $name:ident ($field:literal) {
            $($variant:ident => ($value:literal, $label:literal)),+ $(,)?
        }
        default = $default:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            /// Every option, in selector order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Option value inserted into the prompt.
            pub fn value(self) -> &'static str {
                match self {
                    $($name::$variant => $value,)+
                }
            }

            /// Human-readable selector label.
            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.value())
            }
        }

        impl FromStr for $name {
            type Err = FormError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $name::ALL
                    .iter()
                    .copied()
                    .find(|option| option.value() == s)
                    .ok_or_else(|| FormError::UnknownOption {
                        field: $field,
                        value: s.to_owned(),
                    })
            }
        }
    };
}

select_options! {
    /// Kind of text to write.
    WritingType ("writing type") {
        Storybook => ("storybook", "Storybook"),
        Story => ("story", "Story"),
        Essay => ("essay", "Essay"),
        Poem => ("poem", "Poem"),
        Article => ("article", "Article"),
        SciFiNarrative => ("sci-fi narrative", "Sci-Fi Narrative"),
    }
    default = Storybook
}

select_options! {
    /// Target reader age group.
    AgeGroup ("age group") {
        Elementary => ("elementary", "Elementary School"),
        MiddleSchool => ("middle school", "Middle School"),
        HighSchool => ("high school", "High School"),
        University => ("university", "University"),
        General => ("general", "General"),
    }
    default = MiddleSchool
}

select_options! {
    /// Reader proficiency level.
    Proficiency ("proficiency") {
        Beginner => ("beginner", "Beginner"),
        LowerIntermediate => ("lower-intermediate", "Lower-Intermediate"),
        Intermediate => ("intermediate", "Intermediate"),
        Advanced => ("advanced", "Advanced"),
    }
    default = LowerIntermediate
}

/// Current values of every form field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoryForm {
    pub plot: String,
    pub theme: String,
    pub tone: String,
    pub writing_type: WritingType,
    pub age_group: AgeGroup,
    pub proficiency: Proficiency,
    pub include_grammar: String,
    pub exclude_grammar: String,
}

impl StoryForm {
    /// A plot is the only required field.
    pub fn has_plot(&self) -> bool {
        !self.plot.is_empty()
    }

    /// Copy of the form with `edit` applied.
    pub fn with_edit(&self, edit: FieldEdit) -> Self {
        let mut form = self.clone();
        match edit {
            FieldEdit::Plot(value) => form.plot = value,
            FieldEdit::Theme(value) => form.theme = value,
            FieldEdit::Tone(value) => form.tone = value,
            FieldEdit::WritingType(value) => form.writing_type = value,
            FieldEdit::AgeGroup(value) => form.age_group = value,
            FieldEdit::Proficiency(value) => form.proficiency = value,
            FieldEdit::IncludeGrammar(value) => form.include_grammar = value,
            FieldEdit::ExcludeGrammar(value) => form.exclude_grammar = value,
        }
        form
    }
}

/// Identifies one input of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Plot,
    Theme,
    Tone,
    WritingType,
    AgeGroup,
    Proficiency,
    IncludeGrammar,
    ExcludeGrammar,
}

impl FieldId {
    /// Form order.
    pub const ALL: [FieldId; 8] = [
        FieldId::Plot,
        FieldId::Theme,
        FieldId::Tone,
        FieldId::WritingType,
        FieldId::AgeGroup,
        FieldId::Proficiency,
        FieldId::IncludeGrammar,
        FieldId::ExcludeGrammar,
    ];

    /// Stable element id.
    pub fn key(self) -> &'static str {
        match self {
            FieldId::Plot => "plot",
            FieldId::Theme => "theme",
            FieldId::Tone => "tone",
            FieldId::WritingType => "writingType",
            FieldId::AgeGroup => "ageGroup",
            FieldId::Proficiency => "proficiency",
            FieldId::IncludeGrammar => "includeGrammar",
            FieldId::ExcludeGrammar => "excludeGrammar",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldId::Plot => "General Plot",
            FieldId::Theme => "Theme to Emphasize",
            FieldId::Tone => "Tone/Style",
            FieldId::WritingType => "Type of Writing",
            FieldId::AgeGroup => "Target Reader Age Group",
            FieldId::Proficiency => "Reader Proficiency Level",
            FieldId::IncludeGrammar => "Grammar Features to Include",
            FieldId::ExcludeGrammar => "Grammar Features to Exclude",
        }
    }
}

/// A single user edit of one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Plot(String),
    Theme(String),
    Tone(String),
    WritingType(WritingType),
    AgeGroup(AgeGroup),
    Proficiency(Proficiency),
    IncludeGrammar(String),
    ExcludeGrammar(String),
}

impl FieldEdit {
    /// Translate a raw input event (field + entered text or selected option
    /// value) into an edit.
    ///
    /// # Errors
    ///
    /// [`FormError::UnknownOption`] if a selector receives a value outside
    /// its option set.
    pub fn from_input(field: FieldId, raw: impl Into<String>) -> Result<Self, FormError> {
        let raw = raw.into();
        Ok(match field {
            FieldId::Plot => FieldEdit::Plot(raw),
            FieldId::Theme => FieldEdit::Theme(raw),
            FieldId::Tone => FieldEdit::Tone(raw),
            FieldId::WritingType => FieldEdit::WritingType(raw.parse()?),
            FieldId::AgeGroup => FieldEdit::AgeGroup(raw.parse()?),
            FieldId::Proficiency => FieldEdit::Proficiency(raw.parse()?),
            FieldId::IncludeGrammar => FieldEdit::IncludeGrammar(raw),
            FieldId::ExcludeGrammar => FieldEdit::ExcludeGrammar(raw),
        })
    }

    pub fn field(&self) -> FieldId {
        match self {
            FieldEdit::Plot(_) => FieldId::Plot,
            FieldEdit::Theme(_) => FieldId::Theme,
            FieldEdit::Tone(_) => FieldId::Tone,
            FieldEdit::WritingType(_) => FieldId::WritingType,
            FieldEdit::AgeGroup(_) => FieldId::AgeGroup,
            FieldEdit::Proficiency(_) => FieldId::Proficiency,
            FieldEdit::IncludeGrammar(_) => FieldId::IncludeGrammar,
            FieldEdit::ExcludeGrammar(_) => FieldId::ExcludeGrammar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_initial_selection() {
        let form = StoryForm::default();
        assert_eq!(form.writing_type, WritingType::Storybook);
        assert_eq!(form.age_group, AgeGroup::MiddleSchool);
        assert_eq!(form.proficiency, Proficiency::LowerIntermediate);
        assert!(!form.has_plot());
    }

    #[test]
    fn option_values_parse_back() {
        for option in WritingType::ALL {
            assert_eq!(option.value().parse::<WritingType>(), Ok(*option));
        }
        for option in AgeGroup::ALL {
            assert_eq!(option.to_string().parse::<AgeGroup>(), Ok(*option));
        }
        for option in Proficiency::ALL {
            assert_eq!(option.value().parse::<Proficiency>(), Ok(*option));
        }
    }

    #[test]
    fn labels_differ_from_values() {
        assert_eq!(WritingType::SciFiNarrative.value(), "sci-fi narrative");
        assert_eq!(WritingType::SciFiNarrative.label(), "Sci-Fi Narrative");
        assert_eq!(AgeGroup::Elementary.label(), "Elementary School");
    }

    #[test]
    fn unknown_option_is_rejected() {
        assert_eq!(
            FieldEdit::from_input(FieldId::AgeGroup, "kindergarten"),
            Err(FormError::UnknownOption {
                field: "age group",
                value: "kindergarten".into()
            })
        );
    }

    #[test]
    fn edits_touch_only_their_field() {
        let form = StoryForm::default();
        let edited = form.with_edit(FieldEdit::from_input(FieldId::Proficiency, "advanced").unwrap());

        assert_eq!(edited.proficiency, Proficiency::Advanced);
        assert_eq!(edited.with_edit(FieldEdit::Proficiency(form.proficiency)), form);
    }

    #[test]
    fn form_serializes_with_option_values() {
        let form = StoryForm {
            plot: "A robot learns to paint.".into(),
            writing_type: WritingType::SciFiNarrative,
            ..StoryForm::default()
        };

        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["writingType"], "sci-fi narrative");
        assert_eq!(json["ageGroup"], "middle school");

        let back: StoryForm = serde_json::from_value(json).unwrap();
        assert_eq!(back, form);
    }

    #[test]
    fn every_field_round_trips_through_its_edit() {
        for field in FieldId::ALL {
            let raw = match field {
                FieldId::WritingType => "poem",
                FieldId::AgeGroup => "general",
                FieldId::Proficiency => "beginner",
                _ => "text",
            };
            assert_eq!(FieldEdit::from_input(field, raw).unwrap().field(), field);
        }
    }
}

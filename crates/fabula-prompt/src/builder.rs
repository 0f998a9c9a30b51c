//! Builder-style helper for constructing **plain-text prompts**.
//!
//! Writing long prompt strings inline is tedious and error-prone.
//! `PromptBuilder` offers a fluent API so you can focus on the *content*
//! instead of the layout. Every method returns `self`:
//!
//! ```rust
//! use fabula_prompt::builder::PromptBuilder;
//!
//! let prompt = PromptBuilder::new()
//!     .add_line("You are a story generator.")
//!     .add_blank_line()
//!     .add_key_value("General Plot", "Two friends build a boat.")
//!     .add_labeled_block("Grammar Features to Include", "- gerunds")
//!     .finalize();
//!
//! assert_eq!(
//!     prompt,
//!     "You are a story generator.\n\nGeneral Plot: Two friends build a boat.\n\
//!      Grammar Features to Include:\n- gerunds\n"
//! );
//! ```
//!
//! Newlines and whitespace are emitted exactly as requested; the builder does
//! no smart formatting.

use std::fmt::Display;

/// Fluent helper owning a growing `String` buffer.
/// Call [`Self::finalize`] to obtain the assembled text.
#[derive(Debug, Default, Clone)]
pub struct PromptBuilder {
    buffer: String,
}

impl PromptBuilder {
    /// Create a fresh, empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a plain line of text and a trailing newline.
    pub fn add_line(mut self, line: impl Display) -> Self {
        self.buffer.push_str(&line.to_string());
        self.buffer.push('\n');
        self
    }

    /// Add several lines in order.
    pub fn add_lines<I>(self, lines: I) -> Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        lines.into_iter().fold(self, |builder, line| builder.add_line(line))
    }

    /// Add a `Key: Value` line.
    pub fn add_key_value(self, key: impl Display, value: impl Display) -> Self {
        self.add_line(format_args!("{key}: {value}"))
    }

    /// Add a `Label:` line followed by `body` starting on the next line.
    pub fn add_labeled_block(self, label: impl Display, body: impl Display) -> Self {
        self.add_line(format_args!("{label}:")).add_line(body)
    }

    /// Insert a single blank line.
    pub fn add_blank_line(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Retrieve the accumulated text and consume the builder.
    pub fn finalize(self) -> String {
        self.buffer
    }
}

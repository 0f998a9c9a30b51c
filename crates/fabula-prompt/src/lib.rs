//! Helpers for composing plain-text prompts.
pub mod builder;

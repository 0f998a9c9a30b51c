//! Provider-agnostic building blocks shared by every Fabula crate.
//!
//! * [`template`] – turn a value into chat messages and pin it to a model.
//! * [`provider`] – the traits a backend implements to run a prompt.
//! * [`client`]   – a thin, cloneable wrapper around one backend.
//! * [`error`]    – the workspace-wide error type.
pub mod client;
pub mod error;
pub mod generic;
pub mod model;
pub mod provider;
pub mod template;

pub use client::FabulaClient;

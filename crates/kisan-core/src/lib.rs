//! # kisan-core
//!
//! Core types, traits, configuration, and error handling for the Kisan assistant.

pub mod config;
pub mod error;
pub mod language;
pub mod notice;
pub mod traits;

pub use config::shellexpand;

//! # dobby-core
//!
//! Core types, traits, configuration, and the pure prompt/parse logic
//! for the Dobby bot.

pub mod command;
pub mod config;
pub mod error;
pub mod message;
pub mod options;
pub mod prompt;
pub mod store;
pub mod tone;
pub mod traits;

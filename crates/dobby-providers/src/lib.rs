//! # dobby-providers
//!
//! Completion provider implementations for Dobby.

pub mod openai;

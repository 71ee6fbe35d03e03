//! # dobby-channels
//!
//! Messaging platform integrations for Dobby.

pub mod telegram;

//! In-memory per-chat tone preferences.
//!
//! Entries live for the process lifetime; there is no eviction and no
//! persistence. The store is a small interface over a shared map so a
//! persistent backend could replace it without touching the dispatcher.

use crate::tone::Tone;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Shared map from Telegram chat id to tone preference.
#[derive(Clone)]
pub struct ToneStore {
    default: Tone,
    tones: Arc<Mutex<HashMap<i64, Tone>>>,
}

impl ToneStore {
    /// Create an empty store resolving absent entries to `default`.
    pub fn new(default: Tone) -> Self {
        Self {
            default,
            tones: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Record the tone for a chat, overwriting any prior value.
    pub fn set(&self, chat_id: i64, tone: Tone) {
        self.tones.lock().unwrap().insert(chat_id, tone);
    }

    /// Resolve the tone for a chat, falling back to the process default.
    pub fn get(&self, chat_id: i64) -> Tone {
        self.tones
            .lock()
            .unwrap()
            .get(&chat_id)
            .copied()
            .unwrap_or(self.default)
    }
}

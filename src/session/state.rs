use bytes::Bytes;
use serde_json::{Value, json};

use crate::language::LANGUAGES;

/// Result state that persists across the actions of one session.
///
/// Text and language are always replaced together, and replacing them drops
/// any audio synthesized for the previous text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionResult {
    translated_text: String,
    translated_lang: String,
    audio: Option<Bytes>,
}

impl SessionResult {
    pub fn new() -> Self {
        Self {
            translated_text: String::new(),
            translated_lang: LANGUAGES[0].0.to_string(),
            audio: None,
        }
    }

    pub fn translated_text(&self) -> &str {
        &self.translated_text
    }

    pub fn translated_lang(&self) -> &str {
        &self.translated_lang
    }

    pub const fn audio(&self) -> Option<&Bytes> {
        self.audio.as_ref()
    }

    pub fn has_translation(&self) -> bool {
        !self.translated_text.is_empty()
    }

    pub const fn has_audio(&self) -> bool {
        self.audio.is_some()
    }

    /// Stores a new translation and invalidates the audio of the old one.
    pub fn commit_translation(&mut self, text: String, lang: String) {
        self.translated_text = text;
        self.translated_lang = lang;
        self.audio = None;
    }

    pub fn attach_audio(&mut self, audio: Bytes) {
        self.audio = Some(audio);
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }

    pub fn diagnostics(&self) -> Value {
        json!({
            "translated_lang": self.translated_lang,
            "translated_length": self.translated_text.chars().count(),
            "audio_ready": self.audio.is_some(),
        })
    }
}

impl Default for SessionResult {
    fn default() -> Self {
        Self::new()
    }
}

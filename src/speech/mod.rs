mod client;
pub mod tokenizer;

pub use client::{DEFAULT_SPEECH_ENDPOINT, GoogleSpeech, SpeechRequest, SpeechSynthesizer};

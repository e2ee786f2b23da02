mod client;

pub use client::{
    DEFAULT_TRANSLATE_ENDPOINT, GoogleTranslator, TranslationRequest, Translator,
    parse_translation,
};

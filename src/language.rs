//! Language catalog and code resolution.
//!
//! The catalog maps ISO 639-1 codes to the display names shown in the form
//! selectors. The speech provider accepts a partially different code set,
//! kept in a second table.

use std::fmt;

use crate::ui::Style;

/// Reserved source selection that lets the provider detect the language.
pub const AUTO_DETECT: &str = "Auto Detect";

/// Provider code sent in place of a source language when detecting.
pub const AUTO_CODE: &str = "auto";

/// Speech code used when the translated language has no speech mapping.
pub const FALLBACK_SPEECH_CODE: &str = "en";

/// Supported language codes (ISO 639-1) and their display names, in selector order.
pub const LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("it", "Italian"),
    ("pt", "Portuguese"),
    ("ru", "Russian"),
    ("zh", "Chinese"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("ar", "Arabic"),
    ("hi", "Hindi"),
];

/// Catalog code to speech-provider code.
pub const SPEECH_CODES: &[(&str, &str)] = &[
    ("en", "en"),
    ("es", "es"),
    ("fr", "fr"),
    ("de", "de"),
    ("it", "it"),
    ("pt", "pt"),
    ("ru", "ru"),
    // The speech provider needs a regional variant for Chinese
    ("zh", "zh-CN"),
    ("ja", "ja"),
    ("ko", "ko"),
    ("ar", "ar"),
    ("hi", "hi"),
];

/// Language lookup errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageError {
    /// No catalog entry matches the given name or code.
    UnknownLanguage(String),
}

impl fmt::Display for LanguageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownLanguage(name) => write!(
                f,
                "Unknown language: '{name}'\n\n\
                 Run 'polyglot languages' to see all supported languages."
            ),
        }
    }
}

impl std::error::Error for LanguageError {}

/// A resolved speech-provider code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeechCode {
    /// Code to send to the speech provider.
    pub code: &'static str,
    /// Set when the translated language had no mapping and English was substituted.
    pub fell_back: bool,
}

/// Returns the catalog code for a display name.
pub fn code_for_display_name(name: &str) -> Result<&'static str, LanguageError> {
    LANGUAGES
        .iter()
        .find(|(_, display)| *display == name)
        .map(|(code, _)| *code)
        .ok_or_else(|| LanguageError::UnknownLanguage(name.to_string()))
}

/// Resolves a source selection to a provider code, mapping the sentinel to `"auto"`.
pub fn resolve_source_code(selection: &str) -> Result<&'static str, LanguageError> {
    if selection == AUTO_DETECT {
        return Ok(AUTO_CODE);
    }
    code_for_display_name(selection)
}

/// Returns the speech code for a translated language, falling back to English.
pub fn speech_code_for(code: &str) -> SpeechCode {
    SPEECH_CODES
        .iter()
        .find(|(catalog_code, _)| *catalog_code == code)
        .map_or(
            SpeechCode {
                code: FALLBACK_SPEECH_CODE,
                fell_back: true,
            },
            |(_, speech)| SpeechCode {
                code: *speech,
                fell_back: false,
            },
        )
}

/// Returns the display name for a catalog code.
pub fn display_name_for(code: &str) -> Option<&'static str> {
    LANGUAGES
        .iter()
        .find(|(catalog_code, _)| *catalog_code == code)
        .map(|(_, name)| *name)
}

/// Turns a CLI or config value into a target selection (display name).
///
/// Accepts either a display name or a catalog code, case-insensitively.
pub fn parse_target_arg(input: &str) -> Result<&'static str, LanguageError> {
    let input = input.trim();
    LANGUAGES
        .iter()
        .find(|(code, name)| code.eq_ignore_ascii_case(input) || name.eq_ignore_ascii_case(input))
        .map(|(_, name)| *name)
        .ok_or_else(|| LanguageError::UnknownLanguage(input.to_string()))
}

/// Turns a CLI or config value into a source selection.
///
/// Same as [`parse_target_arg`], plus `auto` and `Auto Detect` for detection.
pub fn parse_source_arg(input: &str) -> Result<&'static str, LanguageError> {
    let trimmed = input.trim();
    if trimmed.eq_ignore_ascii_case(AUTO_CODE) || trimmed.eq_ignore_ascii_case(AUTO_DETECT) {
        return Ok(AUTO_DETECT);
    }
    parse_target_arg(trimmed)
}

/// Source selector options: the sentinel followed by every display name.
pub fn source_options() -> Vec<&'static str> {
    std::iter::once(AUTO_DETECT)
        .chain(LANGUAGES.iter().map(|(_, name)| *name))
        .collect()
}

/// Target selector options: every display name.
pub fn target_options() -> Vec<&'static str> {
    LANGUAGES.iter().map(|(_, name)| *name).collect()
}

/// The default target selection (first catalog entry).
pub const fn default_target() -> &'static str {
    LANGUAGES[0].1
}

/// Prints all supported languages to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Supported languages"));
    for (code, name) in LANGUAGES {
        let speech = speech_code_for(code);
        println!(
            "  {:5} {:12} {}",
            Style::code(code),
            name,
            Style::secondary(format!("speech: {}", speech.code))
        );
    }
}

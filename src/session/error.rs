use std::fmt;

use crate::input::MAX_INPUT_CHARS;
use crate::language::LanguageError;

const TROUBLESHOOTING: &str = "Troubleshooting:\n  \
     1) Try shorter text (under 500 chars)\n  \
     2) Check your internet connection\n  \
     3) Try a different language pair\n  \
     4) Enable debug for details";

/// Errors raised by session actions.
///
/// Each one is rendered to the user at the point of the action; none of them
/// ends the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Submitted text was empty or whitespace only.
    EmptyInput,
    /// Submitted text exceeded the character limit.
    InputTooLong { chars: usize },
    /// A selection did not match the catalog.
    UnknownLanguage(LanguageError),
    /// The translation provider failed or timed out.
    Translation(String),
    /// Read aloud was requested before any translation was committed.
    NothingToSpeak,
    /// The speech provider failed or timed out.
    Synthesis(String),
    /// Download was requested before audio was synthesized.
    NoAudio,
    /// Writing the audio file failed.
    Export(String),
}

impl SessionError {
    /// Returns `true` for input problems shown as warnings rather than errors.
    pub const fn is_warning(&self) -> bool {
        matches!(
            self,
            Self::EmptyInput | Self::InputTooLong { .. } | Self::NothingToSpeak | Self::NoAudio
        )
    }

    /// Guidance shown after a failed translation.
    pub const fn troubleshooting(&self) -> Option<&'static str> {
        match self {
            Self::Translation(_) => Some(TROUBLESHOOTING),
            _ => None,
        }
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Please enter some text to translate."),
            Self::InputTooLong { chars } => write!(
                f,
                "Text is too long ({chars} characters). The limit is {MAX_INPUT_CHARS} characters."
            ),
            Self::UnknownLanguage(err) => write!(f, "{err}"),
            Self::Translation(message) => write!(f, "Translation failed: {message}"),
            Self::NothingToSpeak => write!(f, "Translate some text before reading it aloud."),
            Self::Synthesis(message) => write!(f, "Speech synthesis failed: {message}"),
            Self::NoAudio => write!(f, "No audio yet. Use 'Read aloud' first."),
            Self::Export(message) => write!(f, "Failed to save audio: {message}"),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<LanguageError> for SessionError {
    fn from(err: LanguageError) -> Self {
        Self::UnknownLanguage(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warnings() {
        assert!(SessionError::EmptyInput.is_warning());
        assert!(SessionError::NothingToSpeak.is_warning());
        assert!(SessionError::NoAudio.is_warning());
        assert!(!SessionError::Translation("boom".to_string()).is_warning());
        assert!(!SessionError::Synthesis("boom".to_string()).is_warning());
    }

    #[test]
    fn test_troubleshooting_only_for_translation() {
        let err = SessionError::Translation("timed out".to_string());
        assert!(err.troubleshooting().unwrap_or_default().contains("shorter text"));
        assert!(SessionError::Synthesis("x".to_string()).troubleshooting().is_none());
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            SessionError::EmptyInput.to_string(),
            "Please enter some text to translate."
        );
        assert_eq!(
            SessionError::Translation("network down".to_string()).to_string(),
            "Translation failed: network down"
        );
        assert!(
            SessionError::InputTooLong { chars: 5001 }
                .to_string()
                .contains("5000")
        );
    }

    #[test]
    fn test_from_language_error() {
        let err: SessionError = LanguageError::UnknownLanguage("Klingon".to_string()).into();
        assert!(err.to_string().contains("Klingon"));
    }
}

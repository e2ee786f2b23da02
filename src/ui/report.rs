//! Rendering of session outcomes shared by the form and the one-shot command.

use crate::language::speech_code_for;
use crate::session::{SessionError, SessionResult};

use super::Style;

/// Formats a session error the way it is shown to the user.
pub fn format_session_error(err: &SessionError) -> String {
    let mut message = if err.is_warning() {
        format!("{} {err}", Style::warning("Warning:"))
    } else {
        format!("{} {err}", Style::error("Error:"))
    };

    if let Some(guidance) = err.troubleshooting() {
        message.push_str("\n\n");
        message.push_str(&Style::hint(guidance));
    }

    message
}

/// Prints a session error to stderr.
pub fn print_session_error(err: &SessionError) {
    eprintln!("{}", format_session_error(err));
    eprintln!();
}

/// Warning shown when speech falls back to English.
fn speech_fallback_message(lang: &str) -> String {
    format!(
        "{} Speech not supported for '{lang}'. Falling back to English.",
        Style::warning("Warning:")
    )
}

/// The fallback warning for the committed translation, if reading it aloud
/// would fall back to English.
pub fn speech_fallback_notice(state: &SessionResult) -> Option<String> {
    let lang = state.translated_lang();
    (state.has_translation() && speech_code_for(lang).fell_back)
        .then(|| speech_fallback_message(lang))
}

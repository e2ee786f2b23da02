//! Form UI components.

use crate::session::{SessionResult, TranslateOutcome};
use crate::ui::Style;

use super::session::FormSettings;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header() {
    println!(
        "{} {} - Universal Language Translator",
        Style::header("polyglot"),
        Style::version(format!("v{VERSION}"))
    );
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

pub fn print_selection(settings: &FormSettings) {
    println!(
        "  {}   {}",
        Style::label("from"),
        Style::value(&settings.source)
    );
    println!(
        "  {}     {}",
        Style::label("to"),
        Style::value(&settings.target)
    );
    if settings.debug {
        println!("  {}  {}", Style::label("debug"), Style::value("on"));
    }
    println!();
}

pub fn print_translation(text: &str) {
    println!("{}", Style::header("Translated Text:"));
    println!("{text}");
    println!();
}

pub fn print_request_debug(outcome: &TranslateOutcome) {
    println!(
        "{} Translating from {} to {}",
        Style::label("Debug:"),
        Style::code(outcome.source_code),
        Style::code(outcome.target_code)
    );
    println!(
        "{} Original text length: {}",
        Style::label("Debug:"),
        outcome.input_chars
    );
}

pub fn print_diagnostics(state: &SessionResult) {
    let diagnostics = serde_json::to_string_pretty(&state.diagnostics()).unwrap_or_default();
    println!("{}", Style::secondary(diagnostics));
    println!();
}

pub fn print_success(message: &str) {
    println!("{} {message}", Style::success("✓"));
    println!();
}

use anyhow::Result;
use std::path::PathBuf;

use super::build_controller;
use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::input::InputReader;
use crate::session::{FormInput, SessionResult};
use crate::ui::{Spinner, Style, speech_fallback_notice};
use crate::{status, warn};

pub struct TranslateOptions {
    pub file: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub audio: bool,
    pub output_dir: Option<PathBuf>,
    pub debug: bool,
}

/// Translates the input once and prints the result to stdout.
///
/// Session errors are returned unchanged so the caller can render them.
pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let config_file = ConfigManager::new().load_or_default()?;
    let config = resolve_config(
        &ResolveOptions {
            from: options.from,
            to: options.to,
            output_dir: options.output_dir,
            debug: options.debug,
        },
        &config_file,
    )?;

    let text = InputReader::read(options.file.as_deref())?;
    let input = FormInput {
        source: config.source.to_string(),
        target: config.target.to_string(),
        text,
    };

    let mut controller = build_controller(&config)?;
    let mut state = SessionResult::new();

    let spinner = Spinner::new("Translating...");
    let result = controller.translate(&mut state, &input).await;
    spinner.stop();
    let outcome = result?;

    if config.debug {
        status!(
            "{} Translating from {} to {} ({} characters)",
            Style::label("Debug:"),
            Style::code(outcome.source_code),
            Style::code(outcome.target_code),
            outcome.input_chars
        );
    }

    println!("{}", state.translated_text());

    if !options.audio {
        return Ok(());
    }

    if let Some(notice) = speech_fallback_notice(&state) {
        warn!("{notice}");
    }

    let spinner = Spinner::new("Generating speech...");
    let result = controller.read_aloud(&mut state).await;
    spinner.stop();
    result?;

    let path = controller.download(&state, &config.output_dir)?;
    status!(
        "{} Saved {}",
        Style::success("✓"),
        Style::secondary(path.display().to_string())
    );

    if config.debug {
        status!(
            "{}",
            serde_json::to_string_pretty(&state.diagnostics()).unwrap_or_default()
        );
    }

    Ok(())
}

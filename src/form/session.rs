use anyhow::Result;
use inquire::validator::Validation;
use inquire::{CustomUserError, Editor, InquireError, Select};
use std::path::PathBuf;

use super::action::{FormAction, available_actions};
use super::ui;
use crate::audio;
use crate::config::ResolvedConfig;
use crate::input::{MAX_INPUT_CHARS, trim_line_endings};
use crate::language::{source_options, target_options};
use crate::session::{FormInput, SessionController, SessionResult};
use crate::speech::SpeechSynthesizer;
use crate::translation::Translator;
use crate::ui::{
    Spinner, Style, is_prompt_cancelled, print_session_error, speech_fallback_notice,
};
use crate::{info, warn};

/// Rejects editor input over the character limit, ignoring trailing line endings.
fn validate_length(text: &str) -> Result<Validation, CustomUserError> {
    let chars = trim_line_endings(text).chars().count();
    if chars > MAX_INPUT_CHARS {
        return Ok(Validation::Invalid(
            format!("Text is {chars} characters; the limit is {MAX_INPUT_CHARS}").into(),
        ));
    }
    Ok(Validation::Valid)
}

/// Form selections and preferences that can change during a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSettings {
    pub source: &'static str,
    pub target: &'static str,
    pub debug: bool,
    pub output_dir: PathBuf,
    pub player: Option<String>,
}

impl FormSettings {
    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            source: config.source,
            target: config.target,
            debug: config.debug,
            output_dir: config.output_dir.clone(),
            player: config.player.clone(),
        }
    }
}

/// An interactive translation form.
///
/// Every action error is rendered and the loop continues; only quitting or
/// cancelling the menu ends the session.
pub struct FormSession<T, S> {
    controller: SessionController<T, S>,
    state: SessionResult,
    settings: FormSettings,
    // Pre-fills the editor on the next translation
    last_text: String,
}

impl<T: Translator, S: SpeechSynthesizer> FormSession<T, S> {
    pub fn new(controller: SessionController<T, S>, settings: FormSettings) -> Self {
        Self {
            controller,
            state: SessionResult::new(),
            settings,
            last_text: String::new(),
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header();
        ui::print_selection(&self.settings);

        loop {
            let choice = Select::new("Action:", available_actions(&self.state))
                .with_help_message("Esc or Ctrl+C to quit")
                .prompt();

            let action = match choice {
                Ok(action) => action,
                Err(e) if is_prompt_cancelled(&e) => {
                    println!();
                    break;
                }
                Err(e) => return Err(e.into()),
            };

            if !self.handle_action(action).await? {
                break;
            }

            if self.settings.debug {
                ui::print_diagnostics(&self.state);
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    async fn handle_action(&mut self, action: FormAction) -> Result<bool> {
        match action {
            FormAction::Translate => self.translate().await?,
            FormAction::ReadAloud => self.read_aloud().await,
            FormAction::Download => self.download(),
            FormAction::ChangeLanguages => self.change_languages()?,
            FormAction::ToggleDebug => {
                self.settings.debug = !self.settings.debug;
                let status = if self.settings.debug { "on" } else { "off" };
                ui::print_success(&format!("Debug information {status}"));
            }
            FormAction::Clear => {
                self.state.clear();
                ui::print_success("Result cleared");
            }
            FormAction::Quit => return Ok(false),
        }
        Ok(true)
    }

    async fn translate(&mut self) -> Result<()> {
        let prompt = Editor::new("Enter text to translate")
            .with_predefined_text(&self.last_text)
            .with_validator(validate_length)
            .with_help_message("Opens your editor. Save and close to submit.")
            .prompt();

        let text = match prompt {
            Ok(text) => text,
            Err(e) if is_prompt_cancelled(&e) => return Ok(()),
            Err(e) => return Err(e.into()),
        };
        let text = trim_line_endings(&text).to_string();

        let input = FormInput {
            source: self.settings.source.to_string(),
            target: self.settings.target.to_string(),
            text,
        };

        let spinner = Spinner::new("Translating...");
        let result = self.controller.translate(&mut self.state, &input).await;
        spinner.stop();

        match result {
            Ok(outcome) => {
                if self.settings.debug {
                    ui::print_request_debug(&outcome);
                }
                ui::print_success("Translation successful!");
                ui::print_translation(self.state.translated_text());
                self.last_text = input.text;
            }
            Err(e) => print_session_error(&e),
        }

        Ok(())
    }

    async fn read_aloud(&mut self) {
        if let Some(notice) = speech_fallback_notice(&self.state) {
            warn!("{notice}");
        }

        let spinner = Spinner::new("Generating speech...");
        let result = self.controller.read_aloud(&mut self.state).await;
        spinner.stop();

        let outcome = match result {
            Ok(outcome) => outcome,
            Err(e) => {
                print_session_error(&e);
                return;
            }
        };

        if self.settings.debug {
            println!(
                "{} speech code {}, {} bytes{}",
                Style::label("Debug:"),
                Style::code(outcome.speech_code.code),
                outcome.audio_bytes,
                if outcome.from_cache { " (cached)" } else { "" }
            );
        }

        let Some(player) = self.settings.player.as_deref() else {
            info!("No player configured. Set 'player' in config.toml or choose 'Download MP3'.");
            ui::print_success("Audio ready");
            return;
        };

        let Some(audio) = self.state.audio() else {
            return;
        };
        match audio::play(player, audio).await {
            Ok(()) => ui::print_success("Playback finished"),
            Err(e) => {
                eprintln!("{} Playback failed: {e:#}", Style::error("Error:"));
                eprintln!();
            }
        }
    }

    fn download(&self) {
        match self
            .controller
            .download(&self.state, &self.settings.output_dir)
        {
            Ok(path) => ui::print_success(&format!(
                "Saved {}",
                Style::secondary(path.display().to_string())
            )),
            Err(e) => print_session_error(&e),
        }
    }

    fn change_languages(&mut self) -> Result<()> {
        let result = self.select_languages();
        match result {
            Ok(()) => {
                ui::print_selection(&self.settings);
                Ok(())
            }
            Err(e)
                if e.downcast_ref::<InquireError>()
                    .is_some_and(is_prompt_cancelled) =>
            {
                println!();
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    fn select_languages(&mut self) -> Result<()> {
        let sources = source_options();
        let source_index = sources
            .iter()
            .position(|s| *s == self.settings.source)
            .unwrap_or(0);
        let source = Select::new("Select source language:", sources)
            .with_starting_cursor(source_index)
            .prompt()?;

        let targets = target_options();
        let target_index = targets
            .iter()
            .position(|t| *t == self.settings.target)
            .unwrap_or(0);
        let target = Select::new("Select target language:", targets)
            .with_starting_cursor(target_index)
            .prompt()?;

        self.settings.source = source;
        self.settings.target = target;
        Ok(())
    }
}

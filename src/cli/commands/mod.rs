//! Subcommand implementations.

/// Interactive form command handler.
pub mod form;

/// One-shot translation command handler.
pub mod translate;

use anyhow::Result;

use crate::cache::SpeechCache;
use crate::config::ResolvedConfig;
use crate::session::SessionController;
use crate::speech::GoogleSpeech;
use crate::translation::GoogleTranslator;

/// Builds a controller wired to the configured Google endpoints.
pub fn build_controller(
    config: &ResolvedConfig,
) -> Result<SessionController<GoogleTranslator, GoogleSpeech>> {
    let translator = GoogleTranslator::new(config.translate_endpoint.clone(), config.timeout)?;
    let synthesizer = GoogleSpeech::new(config.speech_endpoint.clone(), config.timeout)?;

    Ok(SessionController::new(
        translator,
        synthesizer,
        SpeechCache::new(config.speech_cache_capacity),
        config.timeout,
    ))
}

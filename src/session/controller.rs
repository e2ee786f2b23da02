use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::audio;
use crate::cache::SpeechCache;
use crate::input::MAX_INPUT_CHARS;
use crate::language::{SpeechCode, code_for_display_name, resolve_source_code, speech_code_for};
use crate::speech::{SpeechRequest, SpeechSynthesizer};
use crate::translation::{TranslationRequest, Translator};

use super::error::SessionError;
use super::state::SessionResult;

/// Default bound on a single provider call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// One form submission, with languages given as selector values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormInput {
    /// A display name or [`crate::language::AUTO_DETECT`].
    pub source: String,
    /// A display name.
    pub target: String,
    pub text: String,
}

/// What a successful translation resolved and produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateOutcome {
    pub source_code: &'static str,
    pub target_code: &'static str,
    pub input_chars: usize,
}

/// What a successful read-aloud resolved and produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeechOutcome {
    pub speech_code: SpeechCode,
    /// Audio came from the session cache without calling the provider.
    pub from_cache: bool,
    pub audio_bytes: usize,
}

/// Orchestrates the translation and speech providers for one session.
///
/// The controller holds the collaborators and the speech cache; result state
/// lives in a [`SessionResult`] passed into each action.
pub struct SessionController<T, S> {
    translator: T,
    synthesizer: S,
    cache: SpeechCache,
    timeout: Duration,
}

impl<T: Translator, S: SpeechSynthesizer> SessionController<T, S> {
    pub fn new(translator: T, synthesizer: S, cache: SpeechCache, timeout: Duration) -> Self {
        Self {
            translator,
            synthesizer,
            cache,
            timeout,
        }
    }

    pub const fn translator(&self) -> &T {
        &self.translator
    }

    pub const fn synthesizer(&self) -> &S {
        &self.synthesizer
    }

    pub const fn cache(&self) -> &SpeechCache {
        &self.cache
    }

    /// Translates the submitted text and commits it to `state`.
    ///
    /// On any error `state` is left exactly as it was.
    pub async fn translate(
        &self,
        state: &mut SessionResult,
        input: &FormInput,
    ) -> Result<TranslateOutcome, SessionError> {
        if input.text.trim().is_empty() {
            return Err(SessionError::EmptyInput);
        }

        let input_chars = input.text.chars().count();
        if input_chars > MAX_INPUT_CHARS {
            return Err(SessionError::InputTooLong { chars: input_chars });
        }

        let source_code = resolve_source_code(&input.source)?;
        let target_code = code_for_display_name(&input.target)?;

        let request = TranslationRequest {
            source_code: source_code.to_string(),
            target_code: target_code.to_string(),
            text: input.text.clone(),
        };
        tracing::debug!(source_code, target_code, input_chars, "translating");

        let translated = with_timeout(self.timeout, self.translator.translate(&request))
            .await
            .map_err(SessionError::Translation)?;

        state.commit_translation(translated, target_code.to_string());

        Ok(TranslateOutcome {
            source_code,
            target_code,
            input_chars,
        })
    }

    /// Synthesizes speech for the committed translation and attaches it to `state`.
    pub async fn read_aloud(
        &mut self,
        state: &mut SessionResult,
    ) -> Result<SpeechOutcome, SessionError> {
        if !state.has_translation() {
            return Err(SessionError::NothingToSpeak);
        }

        let speech_code = speech_code_for(state.translated_lang());
        if speech_code.fell_back {
            tracing::debug!(
                lang = state.translated_lang(),
                "no speech mapping, falling back to English"
            );
        }

        let request = SpeechRequest {
            text: state.translated_text().to_string(),
            lang_code: speech_code.code.to_string(),
        };

        let (audio, from_cache) = if let Some(cached) = self.cache.get(&request) {
            tracing::debug!(lang = speech_code.code, "speech cache hit");
            (cached, true)
        } else {
            // The timeout bounds each provider request, not the whole clip
            let requests =
                u32::try_from(self.synthesizer.request_count(&request)).unwrap_or(u32::MAX);
            let bound = self.timeout.saturating_mul(requests.max(1));
            let audio = with_timeout(bound, self.synthesizer.synthesize(&request))
                .await
                .map_err(SessionError::Synthesis)?;
            self.cache.put(&request, audio.clone());
            (audio, false)
        };

        let audio_bytes = audio.len();
        state.attach_audio(audio);

        Ok(SpeechOutcome {
            speech_code,
            from_cache,
            audio_bytes,
        })
    }

    /// Saves the attached audio as `translation_<lang>.mp3` in `dir`.
    pub fn download(&self, state: &SessionResult, dir: &Path) -> Result<PathBuf, SessionError> {
        let audio = state.audio().ok_or(SessionError::NoAudio)?;
        audio::save(dir, state.translated_lang(), audio)
            .map_err(|e| SessionError::Export(format!("{e:#}")))
    }
}

async fn with_timeout<V>(
    timeout: Duration,
    call: impl Future<Output = anyhow::Result<V>>,
) -> Result<V, String> {
    match tokio::time::timeout(timeout, call).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => Err(format!("{e:#}")),
        Err(_) => Err(format!(
            "request timed out after {}s",
            timeout.as_secs_f64()
        )),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::language::AUTO_DETECT;
    use crate::speech::tokenizer::{MAX_CHUNK_CHARS, split_text};
    use async_trait::async_trait;
    use bytes::Bytes;
    use std::sync::Mutex;
    use tempfile::TempDir;

    #[derive(Default)]
    struct FakeTranslator {
        calls: Mutex<Vec<TranslationRequest>>,
        failure: Option<String>,
        delay: Option<Duration>,
    }

    impl FakeTranslator {
        fn failing(message: &str) -> Self {
            Self {
                failure: Some(message.to_string()),
                ..Self::default()
            }
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl Translator for FakeTranslator {
        async fn translate(&self, request: &TranslationRequest) -> anyhow::Result<String> {
            self.calls.lock().unwrap().push(request.clone());
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            if let Some(message) = &self.failure {
                anyhow::bail!("{message}");
            }
            Ok(match request.text.as_str() {
                "Hello" => "Hola".to_string(),
                other => format!("[{}] {other}", request.target_code),
            })
        }
    }

    #[derive(Default)]
    struct FakeSpeech {
        calls: Mutex<Vec<SpeechRequest>>,
        failure: Option<String>,
        chunk_delay: Option<Duration>,
    }

    impl FakeSpeech {
        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }

        fn last_call(&self) -> Option<SpeechRequest> {
            self.calls.lock().unwrap().last().cloned()
        }
    }

    #[async_trait]
    impl SpeechSynthesizer for FakeSpeech {
        async fn synthesize(&self, request: &SpeechRequest) -> anyhow::Result<Bytes> {
            self.calls.lock().unwrap().push(request.clone());
            if let Some(delay) = self.chunk_delay {
                for _ in 0..self.request_count(request) {
                    tokio::time::sleep(delay).await;
                }
            }
            if let Some(message) = &self.failure {
                anyhow::bail!("{message}");
            }
            Ok(Bytes::from(format!("mp3:{}:{}", request.lang_code, request.text)))
        }

        fn request_count(&self, request: &SpeechRequest) -> usize {
            split_text(&request.text, MAX_CHUNK_CHARS).len().max(1)
        }
    }

    fn create_controller(
        translator: FakeTranslator,
        speech: FakeSpeech,
    ) -> SessionController<FakeTranslator, FakeSpeech> {
        SessionController::new(
            translator,
            speech,
            SpeechCache::default(),
            Duration::from_secs(5),
        )
    }

    fn form(source: &str, target: &str, text: &str) -> FormInput {
        FormInput {
            source: source.to_string(),
            target: target.to_string(),
            text: text.to_string(),
        }
    }

    fn committed_state(text: &str, lang: &str) -> SessionResult {
        let mut state = SessionResult::new();
        state.commit_translation(text.to_string(), lang.to_string());
        state
    }

    #[tokio::test]
    async fn test_auto_detect_to_spanish() {
        let controller = create_controller(FakeTranslator::default(), FakeSpeech::default());
        let mut state = SessionResult::new();

        let outcome = controller
            .translate(&mut state, &form(AUTO_DETECT, "Spanish", "Hello"))
            .await
            .unwrap();

        let calls = controller.translator().calls.lock().unwrap().clone();
        assert_eq!(
            calls,
            vec![TranslationRequest {
                source_code: "auto".to_string(),
                target_code: "es".to_string(),
                text: "Hello".to_string(),
            }]
        );
        assert_eq!(outcome.source_code, "auto");
        assert_eq!(outcome.target_code, "es");
        assert_eq!(outcome.input_chars, 5);
        assert_eq!(state.translated_text(), "Hola");
        assert_eq!(state.translated_lang(), "es");
        assert!(state.audio().is_none());
    }

    #[tokio::test]
    async fn test_empty_input_skips_provider() {
        let controller = create_controller(FakeTranslator::default(), FakeSpeech::default());

        for text in ["", "   ", "\n\t "] {
            let mut state = committed_state("Hola", "es");
            let before = state.clone();

            let err = controller
                .translate(&mut state, &form(AUTO_DETECT, "Spanish", text))
                .await
                .unwrap_err();

            assert_eq!(err, SessionError::EmptyInput);
            assert_eq!(state, before);
        }
        assert_eq!(controller.translator().call_count(), 0);
    }

    #[tokio::test]
    async fn test_too_long_input_skips_provider() {
        let controller = create_controller(FakeTranslator::default(), FakeSpeech::default());
        let mut state = SessionResult::new();
        let text = "é".repeat(MAX_INPUT_CHARS + 1);

        let err = controller
            .translate(&mut state, &form(AUTO_DETECT, "Spanish", &text))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            SessionError::InputTooLong {
                chars: MAX_INPUT_CHARS + 1
            }
        );
        assert_eq!(controller.translator().call_count(), 0);
    }

    #[tokio::test]
    async fn test_input_at_limit_is_accepted() {
        let controller = create_controller(FakeTranslator::default(), FakeSpeech::default());
        let mut state = SessionResult::new();
        let text = "é".repeat(MAX_INPUT_CHARS);

        controller
            .translate(&mut state, &form("French", "English", &text))
            .await
            .unwrap();

        assert!(state.has_translation());
    }

    #[tokio::test]
    async fn test_unknown_language_keeps_state() {
        let controller = create_controller(FakeTranslator::default(), FakeSpeech::default());
        let mut state = committed_state("Hola", "es");
        let before = state.clone();

        let err = controller
            .translate(&mut state, &form(AUTO_DETECT, "Klingon", "Hello"))
            .await
            .unwrap_err();

        assert!(matches!(err, SessionError::UnknownLanguage(_)));
        assert_eq!(state, before);
        assert_eq!(controller.translator().call_count(), 0);
    }

    #[tokio::test]
    async fn test_commit_invalidates_audio() {
        let mut controller = create_controller(FakeTranslator::default(), FakeSpeech::default());
        let mut state = SessionResult::new();

        controller
            .translate(&mut state, &form(AUTO_DETECT, "Spanish", "Hello"))
            .await
            .unwrap();
        controller.read_aloud(&mut state).await.unwrap();
        assert!(state.has_audio());

        controller
            .translate(&mut state, &form("English", "French", "Goodbye"))
            .await
            .unwrap();

        assert_eq!(state.translated_text(), "[fr] Goodbye");
        assert!(state.audio().is_none());
    }

    #[tokio::test]
    async fn test_failed_translation_keeps_state() {
        let mut controller =
            create_controller(FakeTranslator::failing("network down"), FakeSpeech::default());
        let mut state = committed_state("Hola", "es");
        controller.read_aloud(&mut state).await.unwrap();
        let before = state.clone();

        let err = controller
            .translate(&mut state, &form(AUTO_DETECT, "German", "Hello"))
            .await
            .unwrap_err();

        assert_eq!(err, SessionError::Translation("network down".to_string()));
        assert!(err.troubleshooting().is_some());
        assert_eq!(state, before);
    }

    #[tokio::test]
    async fn test_translation_timeout_is_failure() {
        let translator = FakeTranslator {
            delay: Some(Duration::from_secs(2)),
            ..FakeTranslator::default()
        };
        let controller = SessionController::new(
            translator,
            FakeSpeech::default(),
            SpeechCache::default(),
            Duration::from_millis(50),
        );
        let mut state = SessionResult::new();

        let err = controller
            .translate(&mut state, &form(AUTO_DETECT, "Spanish", "Hello"))
            .await
            .unwrap_err();

        assert!(matches!(err, SessionError::Translation(ref m) if m.contains("timed out")));
        assert!(!state.has_translation());
    }

    #[tokio::test]
    async fn test_resubmission_calls_provider_again() {
        let controller = create_controller(FakeTranslator::default(), FakeSpeech::default());
        let mut state = SessionResult::new();
        let input = form(AUTO_DETECT, "Spanish", "Hello");

        controller.translate(&mut state, &input).await.unwrap();
        let first = state.clone();
        controller.translate(&mut state, &input).await.unwrap();

        assert_eq!(controller.translator().call_count(), 2);
        assert_eq!(state, first);
    }

    #[tokio::test]
    async fn test_read_aloud_requires_translation() {
        let mut controller = create_controller(FakeTranslator::default(), FakeSpeech::default());
        let mut state = SessionResult::new();

        let err = controller.read_aloud(&mut state).await.unwrap_err();

        assert_eq!(err, SessionError::NothingToSpeak);
        assert_eq!(controller.synthesizer().call_count(), 0);
    }

    #[tokio::test]
    async fn test_read_aloud_uses_speech_code() {
        let mut controller = create_controller(FakeTranslator::default(), FakeSpeech::default());
        let mut state = committed_state("你好", "zh");

        let outcome = controller.read_aloud(&mut state).await.unwrap();

        assert_eq!(outcome.speech_code.code, "zh-CN");
        assert!(!outcome.speech_code.fell_back);
        assert_eq!(
            controller.synthesizer().last_call().unwrap().lang_code,
            "zh-CN"
        );
        assert_eq!(state.audio().unwrap(), &Bytes::from("mp3:zh-CN:你好"));
    }

    #[tokio::test]
    async fn test_read_aloud_unmapped_falls_back_to_english() {
        let mut controller = create_controller(FakeTranslator::default(), FakeSpeech::default());
        let mut state = committed_state("blorp", "xx");

        let outcome = controller.read_aloud(&mut state).await.unwrap();

        assert_eq!(outcome.speech_code.code, "en");
        assert!(outcome.speech_code.fell_back);
        assert_eq!(controller.synthesizer().last_call().unwrap().lang_code, "en");
    }

    #[tokio::test]
    async fn test_read_aloud_twice_hits_cache() {
        let mut controller = create_controller(FakeTranslator::default(), FakeSpeech::default());
        let mut state = committed_state("Hola", "es");

        let first = controller.read_aloud(&mut state).await.unwrap();
        let first_audio = state.audio().cloned();
        let second = controller.read_aloud(&mut state).await.unwrap();

        assert!(!first.from_cache);
        assert!(second.from_cache);
        assert_eq!(controller.synthesizer().call_count(), 1);
        assert_eq!(state.audio().cloned(), first_audio);
        assert_eq!(controller.cache().len(), 1);
    }

    #[tokio::test]
    async fn test_cache_survives_retranslation_of_same_text() {
        let mut controller = create_controller(FakeTranslator::default(), FakeSpeech::default());
        let mut state = SessionResult::new();
        let input = form(AUTO_DETECT, "Spanish", "Hello");

        controller.translate(&mut state, &input).await.unwrap();
        controller.read_aloud(&mut state).await.unwrap();
        controller.translate(&mut state, &input).await.unwrap();
        assert!(!state.has_audio());

        let outcome = controller.read_aloud(&mut state).await.unwrap();

        assert!(outcome.from_cache);
        assert_eq!(controller.synthesizer().call_count(), 1);
    }

    #[tokio::test]
    async fn test_failed_synthesis_keeps_text() {
        let speech = FakeSpeech {
            failure: Some("503 from provider".to_string()),
            ..FakeSpeech::default()
        };
        let mut controller = create_controller(FakeTranslator::default(), speech);
        let mut state = committed_state("Hola", "es");

        let err = controller.read_aloud(&mut state).await.unwrap_err();

        assert_eq!(
            err,
            SessionError::Synthesis("503 from provider".to_string())
        );
        assert_eq!(state.translated_text(), "Hola");
        assert!(state.audio().is_none());
        assert!(controller.cache().is_empty());
    }

    #[tokio::test]
    async fn test_long_clip_gets_time_per_chunk() {
        let speech = FakeSpeech {
            chunk_delay: Some(Duration::from_millis(150)),
            ..FakeSpeech::default()
        };
        let mut controller = SessionController::new(
            FakeTranslator::default(),
            speech,
            SpeechCache::default(),
            Duration::from_millis(400),
        );
        let text = "Hola amigo. ".repeat(10);
        let mut state = committed_state(text.trim(), "es");

        let outcome = controller.read_aloud(&mut state).await.unwrap();

        let request = controller.synthesizer().last_call().unwrap();
        assert_eq!(controller.synthesizer().request_count(&request), 10);
        assert!(!outcome.from_cache);
        assert!(state.has_audio());
    }

    #[tokio::test]
    async fn test_stalled_chunk_times_out() {
        let speech = FakeSpeech {
            chunk_delay: Some(Duration::from_millis(600)),
            ..FakeSpeech::default()
        };
        let mut controller = SessionController::new(
            FakeTranslator::default(),
            speech,
            SpeechCache::default(),
            Duration::from_millis(200),
        );
        let mut state = committed_state("Hola", "es");

        let err = controller.read_aloud(&mut state).await.unwrap_err();

        assert!(matches!(err, SessionError::Synthesis(ref m) if m.contains("timed out")));
        assert!(state.audio().is_none());
        assert!(controller.cache().is_empty());
    }

    #[tokio::test]
    async fn test_download_writes_named_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut controller = create_controller(FakeTranslator::default(), FakeSpeech::default());
        let mut state = committed_state("你好", "zh");
        controller.read_aloud(&mut state).await.unwrap();

        let path = controller.download(&state, temp_dir.path()).unwrap();

        assert_eq!(path, temp_dir.path().join("translation_zh.mp3"));
        assert_eq!(
            std::fs::read(&path).unwrap(),
            "mp3:zh-CN:你好".as_bytes()
        );
    }

    #[tokio::test]
    async fn test_download_without_audio() {
        let temp_dir = TempDir::new().unwrap();
        let controller = create_controller(FakeTranslator::default(), FakeSpeech::default());
        let state = committed_state("Hola", "es");

        let err = controller.download(&state, temp_dir.path()).unwrap_err();

        assert_eq!(err, SessionError::NoAudio);
    }
}

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use bytes::{Bytes, BytesMut};
use reqwest::{Client, Url};
use sha2::{Digest, Sha256};
use std::time::Duration;

use super::tokenizer::{MAX_CHUNK_CHARS, split_text};

/// Default base URL of the Google Translate TTS endpoint.
pub const DEFAULT_SPEECH_ENDPOINT: &str = "https://translate.google.com";

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; WOW64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/47.0.2526.106 Safari/537.36";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechRequest {
    pub text: String,
    /// Speech-provider code (e.g. `zh-CN`), not necessarily a catalog code.
    pub lang_code: String,
}

impl SpeechRequest {
    /// Compute cache key for this request
    pub fn cache_key(&self) -> String {
        let cache_input = serde_json::json!({
            "text": self.text,
            "lang_code": self.lang_code,
        });

        let mut hasher = Sha256::new();
        hasher.update(cache_input.to_string().as_bytes());
        hex::encode(hasher.finalize())
    }
}

/// An external text-to-speech provider returning MP3 audio.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(&self, request: &SpeechRequest) -> Result<Bytes>;

    /// Number of provider requests `synthesize` makes for `request`.
    fn request_count(&self, _request: &SpeechRequest) -> usize {
        1
    }
}

pub struct GoogleSpeech {
    client: Client,
    endpoint: String,
}

impl GoogleSpeech {
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, endpoint })
    }

    fn chunk_url(&self, chunk: &str, lang_code: &str, idx: usize, total: usize) -> Result<Url> {
        let base = format!("{}/translate_tts", self.endpoint.trim_end_matches('/'));
        let total = total.to_string();
        let idx = idx.to_string();
        let textlen = chunk.chars().count().to_string();

        Url::parse_with_params(
            &base,
            &[
                ("ie", "UTF-8"),
                ("q", chunk),
                ("tl", lang_code),
                ("total", total.as_str()),
                ("idx", idx.as_str()),
                ("textlen", textlen.as_str()),
                ("client", "tw-ob"),
            ],
        )
        .with_context(|| format!("Invalid speech endpoint: {}", self.endpoint))
    }

    async fn fetch_chunk(&self, url: Url) -> Result<Bytes> {
        let response = self
            .client
            .get(url)
            .header("Referer", "http://translate.google.com/")
            .header("User-Agent", USER_AGENT)
            .send()
            .await
            .with_context(|| format!("Failed to connect to speech service: {}", self.endpoint))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("Speech service returned status {status}: {body}");
        }

        response
            .bytes()
            .await
            .context("Failed to read speech response")
    }
}

#[async_trait]
impl SpeechSynthesizer for GoogleSpeech {
    async fn synthesize(&self, request: &SpeechRequest) -> Result<Bytes> {
        let chunks = split_text(&request.text, MAX_CHUNK_CHARS);
        if chunks.is_empty() {
            bail!("Nothing to synthesize: text has no speakable content");
        }

        tracing::debug!(
            lang = %request.lang_code,
            chunks = chunks.len(),
            "sending speech requests"
        );

        let total = chunks.len();
        let mut audio = BytesMut::new();

        for (idx, chunk) in chunks.iter().enumerate() {
            let url = self.chunk_url(chunk, &request.lang_code, idx, total)?;
            let part = self
                .fetch_chunk(url)
                .await
                .with_context(|| format!("Speech chunk {} of {total} failed", idx + 1))?;
            audio.extend_from_slice(&part);
        }

        if audio.is_empty() {
            bail!("Empty audio received from speech service");
        }

        Ok(audio.freeze())
    }

    fn request_count(&self, request: &SpeechRequest) -> usize {
        split_text(&request.text, MAX_CHUNK_CHARS).len().max(1)
    }
}

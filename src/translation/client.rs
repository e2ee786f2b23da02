use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;
use std::time::Duration;

/// Default base URL of the Google Translate `gtx` endpoint.
pub const DEFAULT_TRANSLATE_ENDPOINT: &str = "https://translate.googleapis.com";

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    /// Catalog code, or `"auto"` to let the provider detect it.
    pub source_code: String,
    pub target_code: String,
    pub text: String,
}

/// An external translation provider.
///
/// Every failure (network, unsupported pair, rate limit) is reported as one
/// opaque error.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, request: &TranslationRequest) -> Result<String>;
}

pub struct GoogleTranslator {
    client: Client,
    endpoint: String,
}

impl GoogleTranslator {
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, endpoint })
    }

    fn request_url(&self, request: &TranslationRequest) -> Result<Url> {
        let base = format!(
            "{}/translate_a/single",
            self.endpoint.trim_end_matches('/')
        );

        Url::parse_with_params(
            &base,
            &[
                ("client", "gtx"),
                ("sl", request.source_code.as_str()),
                ("tl", request.target_code.as_str()),
                ("dt", "t"),
                ("q", request.text.as_str()),
            ],
        )
        .with_context(|| format!("Invalid translation endpoint: {}", self.endpoint))
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(&self, request: &TranslationRequest) -> Result<String> {
        let url = self.request_url(request)?;
        tracing::debug!(
            source = %request.source_code,
            target = %request.target_code,
            chars = request.text.chars().count(),
            "sending translation request"
        );

        let response = self
            .client
            .get(url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await
            .with_context(|| {
                format!("Failed to connect to translation service: {}", self.endpoint)
            })?;

        let status = response.status();
        tracing::debug!(%status, "translation response received");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("Translation service returned status {status}: {body}");
        }

        let body = response
            .text()
            .await
            .context("Failed to read translation response")?;

        parse_translation(&body)
    }
}

/// Extracts the translated text from a `translate_a/single` response body.
///
/// The provider answers with nested arrays where `[0]` holds one entry per
/// translated segment and each entry carries its text at index 0.
pub fn parse_translation(body: &str) -> Result<String> {
    let json: Value =
        serde_json::from_str(body).context("Failed to parse translation response")?;

    let segments = json
        .get(0)
        .and_then(Value::as_array)
        .context("Invalid translation response format: missing segments")?;

    let translation: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    if translation.is_empty() {
        bail!("Empty translation received from translation service");
    }

    Ok(translation)
}

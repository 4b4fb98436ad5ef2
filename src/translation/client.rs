use anyhow::{Context, Result, bail};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use super::translator::{TextResult, TextResults, TranslateTextOptions, Translator};

const PRO_SERVER_URL: &str = "https://api.deepl.com";
const FREE_SERVER_URL: &str = "https://api-free.deepl.com";

#[derive(Debug, Serialize)]
struct TranslateBody<'a> {
    text: [&'a str; 1],
    target_lang: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_lang: Option<&'a str>,
    show_billed_characters: bool,
    #[serde(flatten)]
    options: &'a TranslateTextOptions,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
struct Translation {
    text: String,
    detected_source_language: String,
    #[serde(default)]
    billed_characters: u64,
}

impl From<Translation> for TextResult {
    fn from(t: Translation) -> Self {
        Self {
            text: t.text,
            detected_source_lang: t.detected_source_language.to_lowercase(),
            billed_characters: t.billed_characters,
        }
    }
}

/// HTTP client for the DeepL `v2/translate` endpoint.
pub struct DeepLClient {
    client: Client,
    server_url: String,
    auth_key: String,
}

impl DeepLClient {
    /// Creates a client, picking the free or pro server from the key suffix.
    pub fn new(auth_key: String) -> Self {
        let server_url = server_url_for(&auth_key).to_string();
        Self::with_server_url(auth_key, server_url)
    }

    pub fn with_server_url(auth_key: String, server_url: String) -> Self {
        Self {
            client: Client::new(),
            server_url,
            auth_key,
        }
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    async fn post_translate(
        &self,
        text: &str,
        source_lang: Option<&str>,
        target_lang: &str,
        options: &TranslateTextOptions,
    ) -> Result<TextResults> {
        let url = format!("{}/v2/translate", self.server_url.trim_end_matches('/'));

        let body = TranslateBody {
            text: [text],
            target_lang,
            source_lang,
            show_billed_characters: true,
            options,
        };

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("DeepL-Auth-Key {}", self.auth_key))
            .header("User-Agent", user_agent())
            .json(&body)
            .send()
            .await
            .with_context(|| format!("Failed to connect to DeepL API: {url}"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!(describe_failure(status, &body));
        }

        let parsed: TranslateResponse = response
            .json()
            .await
            .context("Failed to parse DeepL API response")?;

        Ok(TextResults::Many(
            parsed.translations.into_iter().map(Into::into).collect(),
        ))
    }
}

impl Translator for DeepLClient {
    fn translate_text(
        &self,
        text: &str,
        source_lang: Option<&str>,
        target_lang: &str,
        options: &TranslateTextOptions,
    ) -> impl Future<Output = Result<TextResults>> + Send {
        self.post_translate(text, source_lang, target_lang, options)
    }
}

/// Free-tier authentication keys end in `:fx`.
fn server_url_for(auth_key: &str) -> &'static str {
    if auth_key.ends_with(":fx") {
        FREE_SERVER_URL
    } else {
        PRO_SERVER_URL
    }
}

fn user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

fn describe_failure(status: StatusCode, body: &str) -> String {
    let detail = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string());

    let summary = match status.as_u16() {
        403 => "Authorization failure, check auth_key".to_string(),
        456 => "Quota for this billing period has been exceeded".to_string(),
        429 => "Too many requests, DeepL servers are currently experiencing high load".to_string(),
        _ => format!("DeepL API request failed with status {status}"),
    };

    if detail.is_empty() {
        summary
    } else {
        format!("{summary}, message: {detail}")
    }
}

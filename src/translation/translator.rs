use anyhow::{Result, anyhow};
use serde::Serialize;

use super::Formality;

/// Optional knobs forwarded to the backend.
///
/// Unset fields are left out of the serialized form entirely: the DeepL API
/// treats an absent `formality` differently from an explicit `"default"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TranslateTextOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formality: Option<Formality>,
}

/// One translated text as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextResult {
    pub text: String,
    pub detected_source_lang: String,
    pub billed_characters: u64,
}

/// A backend may answer a single-text request with either a bare result
/// or a one-element list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextResults {
    Single(TextResult),
    Many(Vec<TextResult>),
}

impl TextResults {
    /// Returns the only (or first) result.
    pub fn into_first(self) -> Option<TextResult> {
        match self {
            Self::Single(result) => Some(result),
            Self::Many(results) => results.into_iter().next(),
        }
    }
}

/// Anything able to translate text: the DeepL HTTP client, or a test double.
pub trait Translator {
    /// `source_lang` of `None` asks the backend to detect the language.
    fn translate_text(
        &self,
        text: &str,
        source_lang: Option<&str>,
        target_lang: &str,
        options: &TranslateTextOptions,
    ) -> impl Future<Output = Result<TextResults>> + Send;
}

/// Parameters of a single translation.
#[derive(Debug, Clone)]
pub struct TranslationRequest {
    pub text: String,
    pub source_lang: Option<String>,
    pub target_lang: String,
    pub context: Option<String>,
    pub formality: Option<Formality>,
}

impl TranslationRequest {
    /// Builds the options bag, carrying only what the caller actually set.
    pub fn options(&self) -> TranslateTextOptions {
        TranslateTextOptions {
            context: self.context.clone().filter(|c| !c.is_empty()),
            formality: self.formality,
        }
    }
}

/// Translates `request` with `translator` and normalizes the response.
///
/// Backend errors are returned untouched.
pub async fn translate<T: Translator>(
    translator: &T,
    request: &TranslationRequest,
) -> Result<TextResult> {
    let options = request.options();

    tracing::debug!(
        target_lang = %request.target_lang,
        source_lang = ?request.source_lang,
        has_context = options.context.is_some(),
        formality = ?options.formality,
        "sending translation request"
    );

    let results = translator
        .translate_text(
            &request.text,
            request.source_lang.as_deref(),
            &request.target_lang,
            &options,
        )
        .await?;

    results
        .into_first()
        .ok_or_else(|| anyhow!("Translation response contained no results"))
}

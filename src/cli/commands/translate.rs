use anyhow::Result;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::cli::ParsedArgs;
use crate::config::{ConfigManager, ShellCommandRunner, resolve_api_key};
use crate::input::InputReader;
use crate::output::OutputConfig;
use crate::translation::{DeepLClient, Formality, TranslationRequest, Translator, translate};

pub struct TranslateOptions {
    pub text: Option<String>,
    pub target: String,
    pub source: Option<String>,
    pub context: Option<String>,
    pub formality: Option<Formality>,
    pub verbose: bool,
    pub config_path: PathBuf,
}

impl TranslateOptions {
    pub fn new(args: ParsedArgs, config_path: PathBuf) -> Self {
        Self {
            text: args.text,
            target: args.target,
            source: args.source,
            context: args.context,
            formality: args.formality,
            verbose: args.verbose,
            config_path,
        }
    }
}

/// Reads the text, resolves the API key and prints the translation.
pub async fn run_translate(options: TranslateOptions, output: &OutputConfig) -> Result<()> {
    let text = InputReader::acquire(options.text).await?;

    let config = ConfigManager::with_path(options.config_path).load()?;
    let api_key = resolve_api_key(&config, &ShellCommandRunner)?;
    let client = DeepLClient::new(api_key);

    let request = TranslationRequest {
        text,
        source_lang: options.source,
        target_lang: options.target,
        context: options.context,
        formality: options.formality,
    };

    translate_and_print(
        &client,
        &request,
        options.verbose,
        output,
        &mut io::stdout(),
        &mut io::stderr(),
    )
    .await
}

/// Translates and writes the result: text to `out`, metadata to `err`.
///
/// Nothing is written to `out` unless the translation succeeded.
pub async fn translate_and_print<T, O, E>(
    translator: &T,
    request: &TranslationRequest,
    verbose: bool,
    output: &OutputConfig,
    out: &mut O,
    err: &mut E,
) -> Result<()>
where
    T: Translator,
    O: Write,
    E: Write,
{
    let spinner = output.start_spinner("Translating...");
    let result = translate(translator, request).await;
    spinner.stop();
    let result = result?;

    output.write_translation(out, &result.text)?;

    if verbose {
        output.write_metadata(err, &result)?;
    }

    Ok(())
}

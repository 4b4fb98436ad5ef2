use clap::{CommandFactory, Parser};
use std::ffi::OsString;

use crate::error::{Error, Result};
use crate::translation::Formality;

const EXAMPLES: &str = "\
Examples:
  deepl-cli -t de \"Hello, world!\"
  deepl-cli -t de -c \"Email greeting\" \"Hello\"
  echo \"Hello\" | deepl-cli -t de
  deepl-cli -t de -f more \"How are you?\"";

/// Raw command-line surface. Help and version are plain flags so that
/// [`parse_cli_args`] decides what they mean.
#[derive(Parser, Debug)]
#[command(name = "deepl-cli")]
#[command(about = "Translate text using the DeepL API.")]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(args_override_self = true)]
#[command(after_help = EXAMPLES)]
pub struct Args {
    /// Text to translate (or pipe via stdin)
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,

    /// Target language code (required, e.g. "de", "en-US")
    #[arg(short = 't', long, value_name = "LANG")]
    pub target: Option<String>,

    /// Source language code (default: auto-detect)
    #[arg(short = 's', long, value_name = "LANG")]
    pub source: Option<String>,

    /// Additional context for translation (not translated, not billed)
    #[arg(short = 'c', long, value_name = "TEXT")]
    pub context: Option<String>,

    /// Formality: less, more, default, prefer_less, prefer_more
    #[arg(short = 'f', long, value_name = "LEVEL")]
    pub formality: Option<String>,

    /// Show metadata (detected source lang, billed characters)
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Show this help
    #[arg(short = 'h', long)]
    pub help: bool,

    /// Show version
    #[arg(long)]
    pub version: bool,
}

/// What the invocation asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Translate,
    Help,
    Version,
}

/// A validated invocation.
///
/// In help and version mode every other field keeps its default, so
/// `target` is the empty string there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedArgs {
    pub target: String,
    pub source: Option<String>,
    pub context: Option<String>,
    pub formality: Option<Formality>,
    pub verbose: bool,
    pub mode: Mode,
    pub text: Option<String>,
}

impl ParsedArgs {
    const fn for_mode(mode: Mode) -> Self {
        Self {
            target: String::new(),
            source: None,
            context: None,
            formality: None,
            verbose: false,
            mode,
            text: None,
        }
    }
}

/// Parses the arguments that follow the program name.
///
/// No arguments at all means help. `--help` and `--version` skip every
/// other check; otherwise `--target` must be present and non-empty and
/// `--formality`, when given, must be a known level.
pub fn parse_cli_args<I, T>(args: I) -> Result<ParsedArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut argv: Vec<OsString> = vec![OsString::from("deepl-cli")];
    argv.extend(args.into_iter().map(Into::into));

    if argv.len() == 1 {
        return Ok(ParsedArgs::for_mode(Mode::Help));
    }

    let args = Args::try_parse_from(argv).map_err(usage_error)?;

    if args.help {
        return Ok(ParsedArgs::for_mode(Mode::Help));
    }
    if args.version {
        return Ok(ParsedArgs::for_mode(Mode::Version));
    }

    let target = args
        .target
        .filter(|t| !t.is_empty())
        .ok_or(Error::MissingTarget)?;

    let formality = args
        .formality
        .filter(|f| !f.is_empty())
        .map(|f| f.parse::<Formality>())
        .transpose()?;

    Ok(ParsedArgs {
        target,
        source: args.source.filter(|s| !s.is_empty()),
        context: args.context,
        formality,
        verbose: args.verbose,
        mode: Mode::Translate,
        text: (!args.text.is_empty()).then(|| args.text.join(" ")),
    })
}

/// The full `--help` output.
pub fn help_text() -> String {
    Args::command().render_help().to_string()
}

fn usage_error(err: clap::Error) -> Error {
    let message = err.to_string();
    let message = message.strip_prefix("error: ").unwrap_or(&message);
    Error::Usage(message.trim_end().to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> ParsedArgs {
        parse_cli_args(args.iter().copied()).unwrap()
    }

    fn parse_err(args: &[&str]) -> Error {
        parse_cli_args(args.iter().copied()).unwrap_err()
    }

    #[test]
    fn test_command_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_target_long_and_short() {
        assert_eq!(parse(&["--target", "de", "Hello"]).target, "de");
        assert_eq!(parse(&["-t", "de", "Hello"]).target, "de");
    }

    #[test]
    fn test_source_long_and_short() {
        assert_eq!(parse(&["-t", "de", "--source", "en", "Hello"]).source.as_deref(), Some("en"));
        assert_eq!(parse(&["-t", "de", "-s", "en", "Hello"]).source.as_deref(), Some("en"));
    }

    #[test]
    fn test_source_defaults_to_none() {
        assert_eq!(parse(&["-t", "de", "Hello"]).source, None);
        assert_eq!(parse(&["-t", "de", "-s", "", "Hello"]).source, None);
    }

    #[test]
    fn test_context_long_and_short() {
        let long = parse(&["-t", "de", "--context", "Email greeting", "Hello"]);
        let short = parse(&["-t", "de", "-c", "Email greeting", "Hello"]);
        assert_eq!(long.context.as_deref(), Some("Email greeting"));
        assert_eq!(short.context.as_deref(), Some("Email greeting"));
    }

    #[test]
    fn test_formality_long_and_short() {
        assert_eq!(parse(&["-t", "de", "--formality", "more", "Hello"]).formality, Some(Formality::More));
        assert_eq!(parse(&["-t", "de", "-f", "less", "Hello"]).formality, Some(Formality::Less));
    }

    #[test]
    fn test_all_formality_values_accepted() {
        for value in ["less", "more", "default", "prefer_less", "prefer_more"] {
            let parsed = parse(&["-t", "de", "-f", value, "Hello"]);
            assert_eq!(parsed.formality.unwrap().as_str(), value);
        }
    }

    #[test]
    fn test_invalid_formality() {
        let message = parse_err(&["-t", "de", "-f", "invalid", "Hello"]).to_string();
        assert!(message.contains("Invalid formality value"));
        assert!(message.contains("invalid"));
        assert!(message.contains("prefer_more"));
    }

    #[test]
    fn test_verbose_flag() {
        assert!(parse(&["-t", "de", "--verbose", "Hello"]).verbose);
        assert!(parse(&["-t", "de", "-v", "Hello"]).verbose);
        assert!(!parse(&["-t", "de", "Hello"]).verbose);
    }

    #[test]
    fn test_single_positional() {
        assert_eq!(parse(&["-t", "de", "Hello, world!"]).text.as_deref(), Some("Hello, world!"));
    }

    #[test]
    fn test_positionals_joined_with_space() {
        assert_eq!(parse(&["-t", "de", "Hello,", "world!"]).text.as_deref(), Some("Hello, world!"));
    }

    #[test]
    fn test_options_after_positionals() {
        let parsed = parse(&["Hello,", "-t", "de", "world!"]);
        assert_eq!(parsed.target, "de");
        assert_eq!(parsed.text.as_deref(), Some("Hello, world!"));
    }

    #[test]
    fn test_double_dash_ends_options() {
        let parsed = parse(&["-t", "de", "--", "-5 degrees"]);
        assert_eq!(parsed.text.as_deref(), Some("-5 degrees"));
    }

    #[test]
    fn test_text_none_without_positionals() {
        assert_eq!(parse(&["-t", "de"]).text, None);
    }

    #[test]
    fn test_missing_target() {
        let err = parse_err(&["Hello"]);
        assert!(matches!(err, Error::MissingTarget));
        assert!(err.to_string().contains("--target"));
    }

    #[test]
    fn test_empty_target() {
        assert!(matches!(parse_err(&["-t", "", "Hello"]), Error::MissingTarget));
    }

    #[test]
    fn test_missing_target_checked_before_formality() {
        assert!(matches!(parse_err(&["-f", "bogus", "Hello"]), Error::MissingTarget));
    }

    #[test]
    fn test_help_flags() {
        assert_eq!(parse(&["--help"]).mode, Mode::Help);
        assert_eq!(parse(&["-h"]).mode, Mode::Help);
    }

    #[test]
    fn test_help_skips_validation() {
        let parsed = parse(&["--help"]);
        assert_eq!(parsed.target, "");

        let parsed = parse(&["-f", "bogus", "-h", "Hello"]);
        assert_eq!(parsed, ParsedArgs::for_mode(Mode::Help));
    }

    #[test]
    fn test_help_wins_over_version() {
        assert_eq!(parse(&["--version", "--help"]).mode, Mode::Help);
    }

    #[test]
    fn test_version_skips_validation() {
        let parsed = parse(&["--version"]);
        assert_eq!(parsed.mode, Mode::Version);
        assert_eq!(parsed.target, "");
    }

    #[test]
    fn test_no_arguments_is_help() {
        let parsed = parse_cli_args(Vec::<String>::new()).unwrap();
        assert_eq!(parsed.mode, Mode::Help);
    }

    #[test]
    fn test_unknown_option_is_usage_error() {
        let err = parse_err(&["-t", "de", "--bogus", "Hello"]);
        assert!(matches!(err, Error::Usage(_)));
        let message = err.to_string();
        assert!(message.contains("--bogus"));
        assert!(!message.starts_with("error:"));
    }

    #[test]
    fn test_repeated_option_keeps_last_value() {
        let parsed = parse(&["-t", "de", "-t", "fr", "x"]);
        assert_eq!(parsed.target, "fr");
        assert_eq!(parsed.text.as_deref(), Some("x"));
    }

    #[test]
    fn test_repeated_flag_is_accepted() {
        assert!(parse(&["-t", "de", "-v", "-v", "Hello"]).verbose);
    }

    #[test]
    fn test_option_without_value_is_usage_error() {
        assert!(matches!(parse_err(&["Hello", "-t"]), Error::Usage(_)));
    }

    #[test]
    fn test_all_flags_together() {
        let parsed = parse(&[
            "-t",
            "de",
            "-s",
            "en",
            "-c",
            "context text",
            "-f",
            "more",
            "-v",
            "Translate this",
        ]);

        assert_eq!(
            parsed,
            ParsedArgs {
                target: "de".to_string(),
                source: Some("en".to_string()),
                context: Some("context text".to_string()),
                formality: Some(Formality::More),
                verbose: true,
                mode: Mode::Translate,
                text: Some("Translate this".to_string()),
            }
        );
    }

    #[test]
    fn test_help_text_lists_options_and_examples() {
        let help = help_text();
        for needle in [
            "--target",
            "--source",
            "--context",
            "--formality",
            "--verbose",
            "--help",
            "--version",
            "Examples:",
        ] {
            assert!(help.contains(needle), "missing {needle}");
        }
    }
}

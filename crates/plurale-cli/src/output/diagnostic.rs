//! Miette diagnostics for rejected command-line input.

use miette::{Diagnostic, NamedSource, SourceSpan};
use plurale::{ErrorKind, PluralRulesError};
use thiserror::Error;

/// A malformed `--options` JSON bag, pointing at the offending character.
#[derive(Debug, Error, Diagnostic)]
#[error("invalid options: {message}")]
#[diagnostic(code(plurale::options::syntax))]
pub struct OptionsDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl OptionsDiagnostic {
    /// Create a diagnostic from a JSON error with the bag as source context.
    pub fn from_json_error(content: &str, err: &serde_json::Error) -> Self {
        // serde_json reports 1-based lines and columns; column 0 means the
        // error is at the end of the line.
        let offset = content
            .lines()
            .take(err.line().saturating_sub(1))
            .map(|l| l.len() + 1)
            .sum::<usize>()
            + err.column().saturating_sub(1);
        let offset = offset.min(content.len().saturating_sub(1));

        OptionsDiagnostic {
            src: NamedSource::new("--options", content.to_owned()),
            span: (offset, 1).into(),
            message: err.to_string(),
            help: Some("pass a JSON object, e.g. '{\"type\": \"ordinal\"}'".to_owned()),
        }
    }
}

/// A construction or query error reported by the plural rules library.
#[derive(Debug, Error, Diagnostic)]
#[error("{kind} error: {message}")]
#[diagnostic(code(plurale::rejected))]
pub struct RulesDiagnostic {
    kind: &'static str,

    message: String,

    #[help]
    help: Option<String>,
}

impl RulesDiagnostic {
    /// Create a diagnostic with a fix-it hint where one applies.
    pub fn from_error(err: &PluralRulesError) -> Self {
        let help = match err {
            PluralRulesError::InvalidLocaleTag { .. } => {
                Some("language tags look like `en`, `en-US` or `sr-Latn-RS`".to_owned())
            }
            PluralRulesError::InvalidOption { allowed, .. } => {
                Some(format!("use one of: {}", allowed.join(", ")))
            }
            PluralRulesError::DigitOutOfRange { min, max, .. } => {
                Some(format!("use a whole number from {min} to {max}"))
            }
            PluralRulesError::UnknownOption { .. } => Some(
                "recognized options are type, localeMatcher, minimumIntegerDigits, \
                 minimumFractionDigits, maximumFractionDigits, minimumSignificantDigits \
                 and maximumSignificantDigits"
                    .to_owned(),
            ),
            PluralRulesError::OptionsNotObject => {
                Some("omit --options or pass a JSON object".to_owned())
            }
            PluralRulesError::AlreadyInitialized
            | PluralRulesError::NotInitialized { .. }
            | PluralRulesError::UnboundService { .. } => None,
        };

        RulesDiagnostic {
            kind: match err.kind() {
                ErrorKind::Type => "type",
                ErrorKind::Range => "range",
            },
            message: err.to_string(),
            help,
        }
    }
}

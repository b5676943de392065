//! Error types for plural rule construction and queries.

use thiserror::Error;

/// Broad class of a [`PluralRulesError`].
///
/// Mirrors the two failure classes callers of an `Intl`-style API expect:
/// type errors for misuse of the API surface, range errors for values
/// outside their allowed domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The call itself was malformed (wrong receiver, wrong argument shape).
    Type,
    /// An argument was well-formed but outside its allowed values.
    Range,
}

/// An error raised while constructing or querying plural rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PluralRulesError {
    /// Initialization was attempted on an instance that is already initialized.
    #[error("plural rules instance has already been initialized")]
    AlreadyInitialized,

    /// A query method was called on an instance that was never initialized.
    #[error("`{method}` called on an uninitialized plural rules instance")]
    NotInitialized { method: &'static str },

    /// The options argument cannot be treated as a property bag.
    #[error("options must be an object or undefined, got null")]
    OptionsNotObject,

    /// The options bag carries a key that is not a plural rules option.
    #[error("unknown option '{name}'")]
    UnknownOption { name: String },

    /// A named service has no registered locale data.
    #[error("service '{name}' has no registered locale data")]
    UnboundService { name: String },

    /// A requested locale is not a well-formed language tag.
    #[error("invalid language tag '{tag}'")]
    InvalidLocaleTag { tag: String },

    /// An enumerated option had a value outside its allowed set.
    #[error("value '{value}' out of range for option '{option}', expected one of: {}", allowed.join(", "))]
    InvalidOption {
        option: &'static str,
        value: String,
        allowed: Vec<&'static str>,
    },

    /// A digit option fell outside its numeric bounds.
    #[error("value {value} out of range for option '{option}', expected {min}..={max}")]
    DigitOutOfRange {
        option: &'static str,
        value: String,
        min: u32,
        max: u32,
    },
}

impl PluralRulesError {
    /// The class this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PluralRulesError::AlreadyInitialized
            | PluralRulesError::NotInitialized { .. }
            | PluralRulesError::OptionsNotObject
            | PluralRulesError::UnknownOption { .. }
            | PluralRulesError::UnboundService { .. } => ErrorKind::Type,
            PluralRulesError::InvalidLocaleTag { .. }
            | PluralRulesError::InvalidOption { .. }
            | PluralRulesError::DigitOutOfRange { .. } => ErrorKind::Range,
        }
    }
}

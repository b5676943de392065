//! Canonicalization of requested locale lists.

use std::slice;

use icu_locale_core::Locale;

use crate::error::PluralRulesError;

/// The locales a caller asks for.
///
/// Accepts a single tag, a list of tags in preference order, or nothing at
/// all (in which case negotiation falls back to the default locale).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Locales {
    /// No preference was given.
    #[default]
    Default,
    /// A single requested tag.
    One(String),
    /// Requested tags, most preferred first.
    Many(Vec<String>),
}

impl Locales {
    fn tags(&self) -> &[String] {
        match self {
            Locales::Default => &[],
            Locales::One(tag) => slice::from_ref(tag),
            Locales::Many(tags) => tags,
        }
    }
}

impl From<&str> for Locales {
    fn from(tag: &str) -> Self {
        Locales::One(tag.to_owned())
    }
}

impl From<String> for Locales {
    fn from(tag: String) -> Self {
        Locales::One(tag)
    }
}

impl From<Vec<String>> for Locales {
    fn from(tags: Vec<String>) -> Self {
        Locales::Many(tags)
    }
}

impl From<Vec<&str>> for Locales {
    fn from(tags: Vec<&str>) -> Self {
        Locales::Many(tags.into_iter().map(str::to_owned).collect())
    }
}

impl From<&[&str]> for Locales {
    fn from(tags: &[&str]) -> Self {
        Locales::Many(tags.iter().copied().map(str::to_owned).collect())
    }
}

impl From<&[String]> for Locales {
    fn from(tags: &[String]) -> Self {
        Locales::Many(tags.to_vec())
    }
}

impl<const N: usize> From<[&str; N]> for Locales {
    fn from(tags: [&str; N]) -> Self {
        Locales::Many(tags.into_iter().map(str::to_owned).collect())
    }
}

/// Validate and canonicalize a list of requested locales.
///
/// Each tag is parsed as a BCP-47 locale and rendered in canonical casing
/// (`EN-us` becomes `en-US`). Duplicates are removed, keeping the first
/// occurrence, so the result preserves the caller's preference order.
///
/// # Errors
///
/// Returns [`PluralRulesError::InvalidLocaleTag`] for the first tag that is
/// not well-formed.
///
/// # Example
///
/// ```
/// use plurale::{Locales, canonicalize_locale_list};
///
/// let tags = canonicalize_locale_list(&Locales::from(["EN-us", "fr", "en-US"])).unwrap();
/// assert_eq!(tags, vec!["en-US", "fr"]);
/// ```
pub fn canonicalize_locale_list(locales: &Locales) -> Result<Vec<String>, PluralRulesError> {
    let mut seen: Vec<String> = Vec::new();
    for tag in locales.tags() {
        let canonical = Locale::try_from_str(tag)
            .map_err(|_| PluralRulesError::InvalidLocaleTag { tag: tag.clone() })?
            .to_string();
        if !seen.contains(&canonical) {
            seen.push(canonical);
        }
    }
    Ok(seen)
}

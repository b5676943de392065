//! Locale negotiation between requested and available locales.
//!
//! Implements the two matching modes of an `Intl`-style negotiator:
//! resolving a single locale for a new instance, and filtering a requested
//! list down to the locales that are supported.

use tracing::debug;

use crate::types::{LocaleMatcher, LocaleTag};

/// Find the longest available truncation of `locale`.
///
/// Subtags are removed from the end one at a time. A truncation that would
/// leave a dangling single-character subtag (the start of an extension) is
/// skipped, so `de-x-foo` never matches `de-x`.
pub fn best_available_locale<'a>(available: &'a [String], locale: &LocaleTag) -> Option<&'a str> {
    let segments = locale.segments();
    (1..=segments.len())
        .rev()
        .filter(|&len| segments[len - 1].len() > 1 || len == 1)
        .map(|len| segments[..len].join("-"))
        .find_map(|candidate| {
            available
                .iter()
                .find(|tag| tag.eq_ignore_ascii_case(&candidate))
                .map(String::as_str)
        })
}

/// Find an available locale sharing the primary language of `locale`.
fn language_match<'a>(available: &'a [String], locale: &LocaleTag) -> Option<&'a str> {
    let language = locale.language()?;
    available
        .iter()
        .find(|tag| {
            LocaleTag::parse(tag)
                .language()
                .is_some_and(|l| l.eq_ignore_ascii_case(language))
        })
        .map(String::as_str)
}

/// Resolve the single best locale for `requested` among `available`.
///
/// `requested` must already be canonicalized. With
/// [`LocaleMatcher::Lookup`], the first requested tag that has an available
/// truncation wins. [`LocaleMatcher::BestFit`] runs the same lookup first and,
/// if nothing matched, accepts the first available locale with the same
/// language as some requested tag. When neither produces a match the
/// `default_locale` is returned.
///
/// # Example
///
/// ```
/// use plurale::{LocaleMatcher, resolve_locale};
///
/// let available = vec!["en".to_string(), "pt-PT".to_string()];
/// let requested = vec!["pt-BR".to_string()];
///
/// assert_eq!(resolve_locale(&available, &requested, LocaleMatcher::Lookup, "en"), "en");
/// assert_eq!(resolve_locale(&available, &requested, LocaleMatcher::BestFit, "en"), "pt-PT");
/// ```
pub fn resolve_locale(
    available: &[String],
    requested: &[String],
    matcher: LocaleMatcher,
    default_locale: &str,
) -> String {
    let tags: Vec<LocaleTag> = requested
        .iter()
        .map(|tag| LocaleTag::parse(tag).without_unicode_extensions())
        .collect();

    if let Some(found) = tags
        .iter()
        .find_map(|tag| best_available_locale(available, tag))
    {
        debug!(locale = found, ?requested, "resolved locale by lookup");
        return found.to_owned();
    }

    if matcher == LocaleMatcher::BestFit {
        if let Some(found) = tags.iter().find_map(|tag| language_match(available, tag)) {
            debug!(locale = found, ?requested, "resolved locale by language match");
            return found.to_owned();
        }
    }

    debug!(locale = default_locale, ?requested, "no requested locale supported, using default");
    default_locale.to_owned()
}

/// Filter `requested` down to the tags supported by `available`.
///
/// Returned tags are the requested ones (extensions included), in request
/// order. Unlike [`resolve_locale`] this never substitutes a default, so the
/// result may be empty.
pub fn supported_locales(
    available: &[String],
    requested: &[String],
    matcher: LocaleMatcher,
) -> Vec<String> {
    requested
        .iter()
        .filter(|tag| {
            let tag = LocaleTag::parse(tag).without_unicode_extensions();
            best_available_locale(available, &tag).is_some()
                || (matcher == LocaleMatcher::BestFit && language_match(available, &tag).is_some())
        })
        .cloned()
        .collect()
}

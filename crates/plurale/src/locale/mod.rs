//! Locale list canonicalization and negotiation.
//!
//! Requested locales are validated and canonicalized once, then matched
//! against the locales a service has data for.

mod canonical;
mod negotiate;

pub use canonical::{Locales, canonicalize_locale_list};
pub use negotiate::{best_available_locale, resolve_locale, supported_locales};

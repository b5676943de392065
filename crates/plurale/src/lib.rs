//! Locale-sensitive plural category selection.
//!
//! Given a number and a requested set of locales, `plurale` picks the CLDR
//! plural category (`zero`, `one`, `two`, `few`, `many`, `other`) that
//! applies, for cardinal ("3 files") or ordinal ("3rd file") use.
//!
//! ```
//! use plurale::{PluralCategory, PluralRules, PluralRulesOptions};
//!
//! let rules = PluralRules::new(["ru"], PluralRulesOptions::default()).unwrap();
//! assert_eq!(rules.select(1).unwrap(), PluralCategory::One);
//! assert_eq!(rules.select(3).unwrap(), PluralCategory::Few);
//! assert_eq!(rules.select(5).unwrap(), PluralCategory::Many);
//! assert_eq!(rules.select(f64::NAN).unwrap(), PluralCategory::Other);
//! ```

pub mod error;
pub mod global;
pub mod locale;
pub mod number;
pub mod rules;
pub mod types;

pub use error::{ErrorKind, PluralRulesError};
pub use fixed_decimal::Decimal;
pub use icu_plurals::PluralCategory;
pub use locale::{Locales, canonicalize_locale_list, resolve_locale, supported_locales};
pub use number::{
    DigitOptions, DigitRequest, SignificantDigits, format_number, format_number_to_string,
};
pub use rules::{
    CldrRuleSet, FnRuleSet, LocaleData, PluralRules, PluralRulesOptions, ResolvedOptions,
    RuleSet, RuleTable, ServiceRegistry, category_name, resolve_options, resolve_value_options,
};
pub use types::{LocaleMatcher, LocaleTag, PluralType, Value};

//! Plural rule data, locale fallback and the `PluralRules` query surface.
//!
//! This module ties the pieces together: options are resolved, a locale is
//! negotiated against [`LocaleData`], and selection renders the number under
//! the resolved digit bounds before dispatching to the nearest rule set.

mod dispatch;
mod options;
mod plural_rules;
mod registry;
mod table;

pub use dispatch::{dispatch, rules_for};
pub use options::{
    DEFAULT_MAXIMUM_FRACTION_DIGITS, PluralRulesOptions, ResolvedSettings, get_option,
    resolve_options, resolve_value_options,
};
pub use plural_rules::{PluralRules, ResolvedOptions};
pub use registry::{DEFAULT_LOCALE, LocaleData, PLURAL_RULES, ServiceRegistry};
pub use table::{
    CLDR_LOCALES, CldrRuleSet, FnRuleSet, RuleSet, RuleTable, SelectorFn, category_name,
};

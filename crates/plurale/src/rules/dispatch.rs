//! Locale fallback for rule lookup.

use fixed_decimal::Decimal;
use icu_plurals::PluralCategory;
use tracing::debug;

use crate::rules::table::{RuleSet, RuleTable};
use crate::types::{LocaleTag, PluralType};

/// Find the rules for `locale` or its nearest ancestor.
///
/// Walks the tag from most to least specific (`pt-PT`, then `pt`) and
/// returns the first entry present in `table`.
pub fn rules_for<'a>(table: &'a RuleTable, locale: &LocaleTag) -> Option<&'a dyn RuleSet> {
    locale
        .fallback_chain()
        .find_map(|candidate| table.get(&candidate))
}

/// Select the plural category of `number` for `locale`.
///
/// Regional variants without their own entry use their base language's
/// rules. A locale with no entry anywhere in its chain selects
/// [`PluralCategory::Other`].
pub fn dispatch(
    table: &RuleTable,
    locale: &LocaleTag,
    plural_type: PluralType,
    number: &Decimal,
) -> PluralCategory {
    match rules_for(table, locale) {
        Some(rules) => rules.select(plural_type, number),
        None => {
            debug!(%locale, "no plural rules for locale or its ancestors, selecting other");
            PluralCategory::Other
        }
    }
}

//! Per-locale plural rule data.
//!
//! A [`RuleTable`] maps locale tags to [`RuleSet`]s. The built-in table is
//! backed by CLDR data compiled into `icu_plurals`; custom tables can be
//! assembled from plain functions with [`FnRuleSet`].
//!
//! ICU rule objects are cached per thread per locale and type, so repeated
//! selections reuse the previously constructed `PluralRules`. The cache is
//! initialized lazily on first access within each thread.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

use bon::Builder;
use fixed_decimal::Decimal;
use icu_locale_core::Locale;
use icu_plurals::{PluralCategory, PluralOperands, PluralRules, PluralRulesPreferences};
use tracing::debug;

use crate::types::{LocaleTag, PluralType};

/// Locales the built-in table carries CLDR rules for.
pub const CLDR_LOCALES: &[&str] = &[
    "af", "am", "ar", "az", "be", "bg", "bn", "bs", "ca", "cs", "cy", "da", "de", "el", "en", "es",
    "et", "eu", "fa", "fi", "fil", "fr", "ga", "gd", "gl", "gu", "he", "hi", "hr", "hu", "hy", "id",
    "is", "it", "ja", "ka", "kk", "km", "kn", "ko", "lt", "lv", "mk", "ml", "mn", "mr", "ms", "my",
    "nb", "ne", "nl", "pa", "pl", "pt", "pt-PT", "ro", "ru", "si", "sk", "sl", "sq", "sr", "sv",
    "sw", "ta", "te", "th", "tr", "uk", "ur", "uz", "vi", "zh", "zu",
];

thread_local! {
    /// Per-thread cache of ICU `PluralRules` keyed by locale tag and type.
    static CLDR_RULES_CACHE: RefCell<Vec<(String, PluralType, Option<PluralRules>)>> =
        const { RefCell::new(Vec::new()) };
}

/// Translate a `PluralCategory` to its CLDR keyword.
pub fn category_name(category: PluralCategory) -> &'static str {
    match category {
        PluralCategory::Zero => "zero",
        PluralCategory::One => "one",
        PluralCategory::Two => "two",
        PluralCategory::Few => "few",
        PluralCategory::Many => "many",
        PluralCategory::Other => "other",
    }
}

/// Plural rules for one locale.
///
/// Selectors receive a number already rendered by
/// [`format_number`](crate::format_number), so rules can inspect its digit
/// shape.
pub trait RuleSet: Send + Sync {
    /// Select the category for `number`.
    fn select(&self, plural_type: PluralType, number: &Decimal) -> PluralCategory;

    /// Every category `select` can return for `plural_type`.
    fn categories(&self, plural_type: PluralType) -> Vec<PluralCategory>;
}

/// Signature of a plain selector function.
pub type SelectorFn = fn(&str) -> PluralCategory;

fn always_other(_: &str) -> PluralCategory {
    PluralCategory::Other
}

/// A [`RuleSet`] built from plain selector functions.
///
/// Selectors see the rendered number as a string such as `"1"` or `"1.50"`.
///
/// # Example
///
/// ```
/// use plurale::{Decimal, FnRuleSet, PluralCategory, PluralType, RuleSet};
///
/// let rules = FnRuleSet::builder()
///     .cardinal(|n| if n == "1" { PluralCategory::One } else { PluralCategory::Other })
///     .cardinal_categories(vec![PluralCategory::One, PluralCategory::Other])
///     .build();
///
/// let one = Decimal::try_from_str("1").unwrap();
/// assert_eq!(rules.select(PluralType::Cardinal, &one), PluralCategory::One);
/// assert_eq!(rules.select(PluralType::Ordinal, &one), PluralCategory::Other);
/// ```
#[derive(Debug, Clone, Builder)]
pub struct FnRuleSet {
    /// Selector for cardinal numbers.
    #[builder(default = always_other as SelectorFn)]
    cardinal: SelectorFn,

    /// Selector for ordinal numbers.
    #[builder(default = always_other as SelectorFn)]
    ordinal: SelectorFn,

    /// Categories the cardinal selector can produce.
    #[builder(default = vec![PluralCategory::Other])]
    cardinal_categories: Vec<PluralCategory>,

    /// Categories the ordinal selector can produce.
    #[builder(default = vec![PluralCategory::Other])]
    ordinal_categories: Vec<PluralCategory>,
}

impl RuleSet for FnRuleSet {
    fn select(&self, plural_type: PluralType, number: &Decimal) -> PluralCategory {
        let rendered = number.to_string();
        match plural_type {
            PluralType::Cardinal => (self.cardinal)(&rendered),
            PluralType::Ordinal => (self.ordinal)(&rendered),
        }
    }

    fn categories(&self, plural_type: PluralType) -> Vec<PluralCategory> {
        let mut categories = match plural_type {
            PluralType::Cardinal => self.cardinal_categories.clone(),
            PluralType::Ordinal => self.ordinal_categories.clone(),
        };
        if !categories.contains(&PluralCategory::Other) {
            categories.push(PluralCategory::Other);
        }
        categories
    }
}

/// A [`RuleSet`] backed by CLDR data compiled into `icu_plurals`.
#[derive(Debug, Clone)]
pub struct CldrRuleSet {
    tag: String,
    locale: Locale,
}

impl CldrRuleSet {
    /// Rules for `locale`.
    pub fn new(locale: Locale) -> Self {
        Self {
            tag: locale.to_string(),
            locale,
        }
    }

    /// Run `f` against the cached ICU rules for this locale and type.
    ///
    /// Returns `None` if ICU has no data for the locale.
    fn with_rules<T>(&self, plural_type: PluralType, f: impl FnOnce(&PluralRules) -> T) -> Option<T> {
        CLDR_RULES_CACHE.with_borrow_mut(|cache| {
            if let Some((_, _, rules)) = cache
                .iter()
                .find(|(tag, ty, _)| *tag == self.tag && *ty == plural_type)
            {
                return rules.as_ref().map(f);
            }
            let rules = build_rules(&self.locale, plural_type);
            let result = rules.as_ref().map(f);
            cache.push((self.tag.clone(), plural_type, rules));
            result
        })
    }
}

/// Build ICU `PluralRules` for a locale and type.
fn build_rules(locale: &Locale, plural_type: PluralType) -> Option<PluralRules> {
    let prefs = PluralRulesPreferences::from(locale);
    let rules = match plural_type {
        PluralType::Cardinal => PluralRules::try_new_cardinal(prefs),
        PluralType::Ordinal => PluralRules::try_new_ordinal(prefs),
    };
    match rules {
        Ok(rules) => Some(rules),
        Err(error) => {
            debug!(%locale, %plural_type, %error, "no CLDR plural data for locale");
            None
        }
    }
}

impl RuleSet for CldrRuleSet {
    fn select(&self, plural_type: PluralType, number: &Decimal) -> PluralCategory {
        let operands = PluralOperands::from(number);
        self.with_rules(plural_type, |rules| rules.category_for(operands))
            .unwrap_or(PluralCategory::Other)
    }

    fn categories(&self, plural_type: PluralType) -> Vec<PluralCategory> {
        self.with_rules(plural_type, |rules| rules.categories().collect())
            .unwrap_or_else(|| vec![PluralCategory::Other])
    }
}

/// Mapping from locale tag to the plural rules for that locale.
///
/// Keys are stored with `-` delimiters; `pt_PT` and `pt-PT` name the same
/// entry.
#[derive(Clone, Default)]
pub struct RuleTable {
    entries: BTreeMap<String, Arc<dyn RuleSet>>,
}

impl RuleTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in table of CLDR rules for [`CLDR_LOCALES`].
    pub fn cldr() -> Self {
        let mut table = Self::new();
        for locale in CLDR_LOCALES
            .iter()
            .filter_map(|tag| Locale::try_from_str(tag).ok())
        {
            let tag = locale.to_string();
            table.insert(&tag, CldrRuleSet::new(locale));
        }
        table
    }

    /// Add or replace the rules for `tag`.
    pub fn insert(&mut self, tag: &str, rules: impl RuleSet + 'static) -> &mut Self {
        self.entries
            .insert(LocaleTag::parse(tag).to_string(), Arc::new(rules));
        self
    }

    /// Builder-style variant of [`RuleTable::insert`].
    pub fn with(mut self, tag: &str, rules: impl RuleSet + 'static) -> Self {
        self.insert(tag, rules);
        self
    }

    /// Get the rules registered for exactly `tag`.
    pub fn get(&self, tag: &str) -> Option<&dyn RuleSet> {
        self.entries.get(tag).map(Arc::as_ref)
    }

    /// Returns true if rules are registered for exactly `tag`.
    pub fn contains(&self, tag: &str) -> bool {
        self.entries.contains_key(tag)
    }

    /// Tags with registered rules, in sorted order.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of locales in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no locales.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Debug for RuleTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_set().entries(self.entries.keys()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{CLDR_LOCALES, RuleTable, category_name};
    use icu_plurals::PluralCategory;

    #[test]
    fn every_cldr_locale_parses() {
        assert_eq!(RuleTable::cldr().len(), CLDR_LOCALES.len());
    }

    #[test]
    fn underscore_keys_are_normalized() {
        let table = RuleTable::new().with("pt_PT", super::FnRuleSet::builder().build());
        assert!(table.contains("pt-PT"));
    }

    #[test]
    fn category_names_match_cldr_keywords() {
        assert_eq!(category_name(PluralCategory::Few), "few");
        assert_eq!(category_name(PluralCategory::Other), "other");
    }
}

//! Locale-aware plural category selection.

use std::sync::Arc;

use icu_plurals::PluralCategory;
use serde::Serialize;
use tracing::debug;

use crate::error::PluralRulesError;
use crate::global;
use crate::locale::{Locales, canonicalize_locale_list, resolve_locale};
use crate::number::{DigitOptions, format_number};
use crate::rules::dispatch::{dispatch, rules_for};
use crate::rules::options::{
    PluralRulesOptions, ResolvedSettings, resolve_options, resolve_value_options,
};
use crate::rules::registry::{LocaleData, PLURAL_RULES};
use crate::types::{LocaleMatcher, LocaleTag, PluralType, Value};

/// The configuration fixed when an instance is initialized.
#[derive(Debug, Clone)]
struct Internal {
    locale: String,
    tag: LocaleTag,
    plural_type: PluralType,
    digits: DigitOptions,
}

/// Selects plural categories for numbers in a negotiated locale.
///
/// An instance negotiates its locale and validates its options once, at
/// initialization; afterwards it is read-only. Selection never fails for an
/// initialized instance: non-finite values and locales without rules select
/// [`PluralCategory::Other`].
///
/// # Example
///
/// ```
/// use plurale::{PluralCategory, PluralRules, PluralRulesOptions, PluralType};
///
/// let rules = PluralRules::new("en", PluralRulesOptions::default()).unwrap();
/// assert_eq!(rules.select(1).unwrap(), PluralCategory::One);
/// assert_eq!(rules.select(2).unwrap(), PluralCategory::Other);
///
/// let ordinal = PluralRules::new(
///     "en",
///     PluralRulesOptions::builder().plural_type(PluralType::Ordinal).build(),
/// )
/// .unwrap();
/// assert_eq!(ordinal.select(3).unwrap(), PluralCategory::Few);
/// ```
#[derive(Debug, Clone)]
pub struct PluralRules {
    data: Arc<LocaleData>,
    internal: Option<Internal>,
}

impl PluralRules {
    /// Construct rules using the process-wide plural rules data.
    ///
    /// # Errors
    ///
    /// Fails if a locale tag is malformed or an option is out of range.
    pub fn new(
        locales: impl Into<Locales>,
        options: PluralRulesOptions,
    ) -> Result<Self, PluralRulesError> {
        Self::with_data(global::plural_rules_data()?, locales, options)
    }

    /// Construct rules using the process-wide data and a dynamic option bag.
    ///
    /// Locales are canonicalized before the bag is read, so a malformed tag
    /// is reported ahead of any bad option.
    ///
    /// # Errors
    ///
    /// Fails for the reasons given on [`PluralRulesOptions::from_value`] and
    /// [`PluralRules::new`].
    pub fn from_value(
        locales: impl Into<Locales>,
        options: &Value,
    ) -> Result<Self, PluralRulesError> {
        let mut rules = Self::uninitialized(global::plural_rules_data()?);
        rules.initialize_from_value(locales, options)?;
        Ok(rules)
    }

    /// Construct rules against specific locale data.
    ///
    /// # Errors
    ///
    /// Fails if a locale tag is malformed or an option is out of range.
    pub fn with_data(
        data: Arc<LocaleData>,
        locales: impl Into<Locales>,
        options: PluralRulesOptions,
    ) -> Result<Self, PluralRulesError> {
        let mut rules = Self::uninitialized(data);
        rules.initialize(locales, &options)?;
        Ok(rules)
    }

    /// Allocate an instance that has not been initialized yet.
    ///
    /// Every query on it fails until [`PluralRules::initialize`] succeeds.
    pub fn uninitialized(data: Arc<LocaleData>) -> Self {
        Self {
            data,
            internal: None,
        }
    }

    /// Returns true once [`PluralRules::initialize`] has succeeded.
    pub fn is_initialized(&self) -> bool {
        self.internal.is_some()
    }

    /// Negotiate the locale and fix the options of this instance.
    ///
    /// Locales are canonicalized first, then options are validated, then a
    /// locale is negotiated against the instance's locale data. Nothing is
    /// written until every step has succeeded, so a failed call leaves the
    /// instance uninitialized.
    ///
    /// # Errors
    ///
    /// - [`PluralRulesError::AlreadyInitialized`] if called a second time;
    ///   the first configuration stays in effect.
    /// - [`PluralRulesError::InvalidLocaleTag`] for malformed locales.
    /// - [`PluralRulesError::DigitOutOfRange`] for violated digit bounds.
    pub fn initialize(
        &mut self,
        locales: impl Into<Locales>,
        options: &PluralRulesOptions,
    ) -> Result<&mut Self, PluralRulesError> {
        self.initialize_with(locales.into(), || resolve_options(options))
    }

    /// Like [`PluralRules::initialize`], reading options from a dynamic
    /// property bag.
    ///
    /// # Errors
    ///
    /// Fails for the reasons given on [`PluralRules::initialize`] and
    /// [`PluralRulesOptions::from_value`].
    pub fn initialize_from_value(
        &mut self,
        locales: impl Into<Locales>,
        options: &Value,
    ) -> Result<&mut Self, PluralRulesError> {
        self.initialize_with(locales.into(), || resolve_value_options(options))
    }

    fn initialize_with(
        &mut self,
        locales: Locales,
        read_options: impl FnOnce() -> Result<ResolvedSettings, PluralRulesError>,
    ) -> Result<&mut Self, PluralRulesError> {
        if self.internal.is_some() {
            return Err(PluralRulesError::AlreadyInitialized);
        }

        let requested = canonicalize_locale_list(&locales)?;
        let settings = read_options()?;
        let locale = resolve_locale(
            self.data.available_locales(),
            &requested,
            settings.locale_matcher,
            self.data.default_locale(),
        );
        debug!(
            %locale,
            plural_type = %settings.plural_type,
            "initialized plural rules"
        );

        self.internal = Some(Internal {
            tag: LocaleTag::parse(&locale),
            locale,
            plural_type: settings.plural_type,
            digits: settings.digits,
        });
        Ok(self)
    }

    fn internal(&self, method: &'static str) -> Result<&Internal, PluralRulesError> {
        self.internal
            .as_ref()
            .ok_or(PluralRulesError::NotInitialized { method })
    }

    /// Select the plural category for `value`.
    ///
    /// The value is coerced to a number; NaN and infinities select
    /// [`PluralCategory::Other`] without consulting any rule. Finite numbers
    /// are rendered under the instance's digit bounds first, so the rule sees
    /// the same digit shape a formatted number would show.
    ///
    /// # Errors
    ///
    /// Returns [`PluralRulesError::NotInitialized`] on an uninitialized
    /// instance.
    pub fn select(&self, value: impl Into<Value>) -> Result<PluralCategory, PluralRulesError> {
        let internal = self.internal("select")?;
        let Some(number) = format_number(&internal.digits, value.into().to_number()) else {
            return Ok(PluralCategory::Other);
        };
        Ok(dispatch(
            self.data.rules(),
            &internal.tag,
            internal.plural_type,
            &number,
        ))
    }

    /// A snapshot of the configuration fixed at initialization.
    ///
    /// # Errors
    ///
    /// Returns [`PluralRulesError::NotInitialized`] on an uninitialized
    /// instance.
    pub fn resolved_options(&self) -> Result<ResolvedOptions, PluralRulesError> {
        let internal = self.internal("resolved_options")?;
        let significant = internal.digits.significant;
        Ok(ResolvedOptions {
            locale: internal.locale.clone(),
            plural_type: internal.plural_type,
            minimum_integer_digits: internal.digits.minimum_integer_digits,
            minimum_fraction_digits: internal.digits.minimum_fraction_digits,
            maximum_fraction_digits: internal.digits.maximum_fraction_digits,
            minimum_significant_digits: significant.map(|s| s.minimum),
            maximum_significant_digits: significant.map(|s| s.maximum),
        })
    }

    /// Categories this instance can select, always including `other`.
    ///
    /// # Errors
    ///
    /// Returns [`PluralRulesError::NotInitialized`] on an uninitialized
    /// instance.
    pub fn categories(&self) -> Result<Vec<PluralCategory>, PluralRulesError> {
        let internal = self.internal("categories")?;
        let mut categories = rules_for(self.data.rules(), &internal.tag)
            .map(|rules| rules.categories(internal.plural_type))
            .unwrap_or_default();
        if !categories.contains(&PluralCategory::Other) {
            categories.push(PluralCategory::Other);
        }
        Ok(categories)
    }

    /// Filter `locales` down to those the process-wide plural rules data
    /// supports, without constructing an instance.
    ///
    /// # Errors
    ///
    /// Returns [`PluralRulesError::InvalidLocaleTag`] for malformed tags.
    pub fn supported_locales_of(
        locales: impl Into<Locales>,
        matcher: LocaleMatcher,
    ) -> Result<Vec<String>, PluralRulesError> {
        global::services().supported_locales_of(PLURAL_RULES, locales, matcher)
    }
}

/// Options resolved for a [`PluralRules`] instance.
///
/// Serializes with the option names callers pass in (`minimumFractionDigits`
/// and so on); fields that were never set are omitted rather than
/// serialized as null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedOptions {
    pub locale: String,
    #[serde(rename = "type")]
    pub plural_type: PluralType,
    pub minimum_integer_digits: u32,
    pub minimum_fraction_digits: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_fraction_digits: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_significant_digits: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_significant_digits: Option<u32>,
}

impl ResolvedOptions {
    /// Names of the options present in this snapshot, in canonical order.
    pub fn keys(&self) -> Vec<&'static str> {
        let mut keys = vec![
            "locale",
            "type",
            "minimumIntegerDigits",
            "minimumFractionDigits",
        ];
        let optional = [
            ("maximumFractionDigits", self.maximum_fraction_digits),
            ("minimumSignificantDigits", self.minimum_significant_digits),
            ("maximumSignificantDigits", self.maximum_significant_digits),
        ];
        keys.extend(
            optional
                .into_iter()
                .filter_map(|(key, value)| value.map(|_| key)),
        );
        keys
    }
}

//! Locale data and the registry of language services.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::PluralRulesError;
use crate::locale::{Locales, canonicalize_locale_list, supported_locales};
use crate::rules::table::RuleTable;
use crate::types::LocaleMatcher;

/// Name under which plural rules register their locale data.
pub const PLURAL_RULES: &str = "PluralRules";

/// Locale used when no requested locale is supported.
pub const DEFAULT_LOCALE: &str = "en";

/// Everything a plural rules service needs to resolve locales and select
/// categories.
///
/// The set of available locales drives negotiation and is usually the set of
/// rule table keys. It may be widened with
/// [`LocaleData::with_available_locales`] to model a data set that knows more
/// locales than it has rules for; such locales resolve normally and then
/// select through the fallback chain.
#[derive(Debug, Clone)]
pub struct LocaleData {
    available_locales: Vec<String>,
    rules: RuleTable,
    default_locale: String,
}

impl LocaleData {
    /// Locale data whose available locales are exactly the table's keys.
    pub fn new(rules: RuleTable) -> Self {
        Self {
            available_locales: rules.locales().map(str::to_owned).collect(),
            rules,
            default_locale: DEFAULT_LOCALE.to_owned(),
        }
    }

    /// Locale data for the built-in CLDR rule table.
    pub fn cldr() -> Self {
        Self::new(RuleTable::cldr())
    }

    /// Add `locales` to the available set, keeping existing entries.
    ///
    /// Tags are canonicalized the same way requested locales are, so
    /// `PT-br` is stored as `pt-BR`.
    ///
    /// # Errors
    ///
    /// Returns [`PluralRulesError::InvalidLocaleTag`] for a malformed tag.
    pub fn with_available_locales(
        mut self,
        locales: impl Into<Locales>,
    ) -> Result<Self, PluralRulesError> {
        for tag in canonicalize_locale_list(&locales.into())? {
            if !self.available_locales.contains(&tag) {
                self.available_locales.push(tag);
            }
        }
        Ok(self)
    }

    /// Replace the locale used when nothing requested is supported.
    pub fn with_default_locale(mut self, locale: impl Into<String>) -> Self {
        self.default_locale = locale.into();
        self
    }

    /// Locales negotiation may choose from.
    pub fn available_locales(&self) -> &[String] {
        &self.available_locales
    }

    /// The rule table used for selection.
    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// The fallback locale for negotiation.
    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Filter `locales` down to those this data supports.
    ///
    /// # Errors
    ///
    /// Returns [`PluralRulesError::InvalidLocaleTag`] if a requested tag is
    /// malformed.
    pub fn supported_locales_of(
        &self,
        locales: impl Into<Locales>,
        matcher: LocaleMatcher,
    ) -> Result<Vec<String>, PluralRulesError> {
        let requested = canonicalize_locale_list(&locales.into())?;
        Ok(supported_locales(&self.available_locales, &requested, matcher))
    }
}

/// A namespace of named language services and their locale data.
///
/// Services register once; registering a name that is already present keeps
/// the existing data, so population is idempotent.
#[derive(Debug, Clone, Default)]
pub struct ServiceRegistry {
    services: BTreeMap<String, Arc<LocaleData>>,
}

impl ServiceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `data` under `name` unless the name is already taken.
    ///
    /// Returns the data registered under `name` after the call.
    pub fn register(&mut self, name: &str, data: LocaleData) -> Arc<LocaleData> {
        Arc::clone(
            self.services
                .entry(name.to_owned())
                .or_insert_with(|| Arc::new(data)),
        )
    }

    /// Register the plural rules service with the built-in CLDR data.
    pub fn register_plural_rules(&mut self) -> Arc<LocaleData> {
        if let Some(existing) = self.get(PLURAL_RULES) {
            return existing;
        }
        self.register(PLURAL_RULES, LocaleData::cldr())
    }

    /// Get the data registered under `name`.
    pub fn get(&self, name: &str) -> Option<Arc<LocaleData>> {
        self.services.get(name).cloned()
    }

    /// Returns true if a service is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.services.contains_key(name)
    }

    /// Supported-locale query bound to the service registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`PluralRulesError::UnboundService`] if no data is registered
    /// under `name`, or [`PluralRulesError::InvalidLocaleTag`] for malformed
    /// requested tags.
    pub fn supported_locales_of(
        &self,
        name: &str,
        locales: impl Into<Locales>,
        matcher: LocaleMatcher,
    ) -> Result<Vec<String>, PluralRulesError> {
        let data = self
            .get(name)
            .ok_or_else(|| PluralRulesError::UnboundService {
                name: name.to_owned(),
            })?;
        data.supported_locales_of(locales, matcher)
    }
}

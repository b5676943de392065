//! Process-wide language services.
//!
//! The shared registry is populated exactly once, the first time any caller
//! touches it, and is read-only afterwards.

use std::sync::{Arc, LazyLock};

use crate::error::PluralRulesError;
use crate::rules::{LocaleData, PLURAL_RULES, ServiceRegistry};

static SERVICES: LazyLock<ServiceRegistry> = LazyLock::new(|| {
    let mut registry = ServiceRegistry::new();
    registry.register_plural_rules();
    registry
});

/// The process-wide service registry.
pub fn services() -> &'static ServiceRegistry {
    &SERVICES
}

/// Locale data of the process-wide plural rules service.
///
/// # Errors
///
/// Returns [`PluralRulesError::UnboundService`] if the service is missing
/// from the registry.
pub fn plural_rules_data() -> Result<Arc<LocaleData>, PluralRulesError> {
    services()
        .get(PLURAL_RULES)
        .ok_or_else(|| PluralRulesError::UnboundService {
            name: PLURAL_RULES.to_owned(),
        })
}

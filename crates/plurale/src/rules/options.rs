//! Construction options for plural rules.

use std::collections::BTreeMap;

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::error::PluralRulesError;
use crate::number::{DigitOptions, DigitRequest, floor_digit_count, set_digit_options};
use crate::types::{LocaleMatcher, PluralType, Value};

/// Option names recognized in a dynamic option bag.
const KNOWN_OPTIONS: &[&str] = &[
    "type",
    "localeMatcher",
    "minimumIntegerDigits",
    "minimumFractionDigits",
    "maximumFractionDigits",
    "minimumSignificantDigits",
    "maximumSignificantDigits",
];

/// Fraction digits kept by default when no maximum is given.
///
/// Wider than general number formatting so that rules depending on visible
/// trailing zeros can tell `1.0` from `1.00`.
pub const DEFAULT_MAXIMUM_FRACTION_DIGITS: u32 = 3;

/// Options accepted when constructing [`PluralRules`](crate::PluralRules).
///
/// # Example
///
/// ```
/// use plurale::{PluralRulesOptions, PluralType};
///
/// let options = PluralRulesOptions::builder()
///     .plural_type(PluralType::Ordinal)
///     .minimum_fraction_digits(1)
///     .build();
/// assert_eq!(options.plural_type, PluralType::Ordinal);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct PluralRulesOptions {
    /// Cardinal or ordinal selection.
    #[builder(default)]
    #[serde(rename = "type")]
    pub plural_type: PluralType,

    /// Negotiation strategy for the requested locales.
    #[builder(default)]
    pub locale_matcher: LocaleMatcher,

    pub minimum_integer_digits: Option<u32>,
    pub minimum_fraction_digits: Option<u32>,
    pub maximum_fraction_digits: Option<u32>,
    pub minimum_significant_digits: Option<u32>,
    pub maximum_significant_digits: Option<u32>,
}

impl PluralRulesOptions {
    /// Read options from a dynamic property bag.
    ///
    /// `undefined` yields the defaults, as does any primitive other than
    /// `null` (primitives have no option properties). Enumerated options are
    /// coerced to strings and checked against their allowed values; digit
    /// options are coerced to numbers, checked against their bounds in
    /// order, and floored.
    ///
    /// # Errors
    ///
    /// - [`PluralRulesError::OptionsNotObject`] for `null`.
    /// - [`PluralRulesError::UnknownOption`] for keys that are not options.
    /// - [`PluralRulesError::InvalidOption`] for an unknown `type` or
    ///   `localeMatcher` value.
    /// - [`PluralRulesError::DigitOutOfRange`] for NaN or out-of-range digits.
    pub fn from_value(value: &Value) -> Result<Self, PluralRulesError> {
        let (plural_type, locale_matcher, request) = read_option_bag(value)?;
        set_digit_options(&request, 0)?;
        Ok(Self {
            plural_type,
            locale_matcher,
            minimum_integer_digits: request.minimum_integer_digits.map(floor_digit_count),
            minimum_fraction_digits: request.minimum_fraction_digits.map(floor_digit_count),
            maximum_fraction_digits: request.maximum_fraction_digits.map(floor_digit_count),
            minimum_significant_digits: request
                .minimum_significant_digits
                .map(floor_digit_count),
            maximum_significant_digits: request
                .maximum_significant_digits
                .map(floor_digit_count),
        })
    }

    /// The digit bounds requested by these options.
    pub fn digit_request(&self) -> DigitRequest {
        DigitRequest::from_counts(
            self.minimum_integer_digits,
            self.minimum_fraction_digits,
            self.maximum_fraction_digits,
            self.minimum_significant_digits,
            self.maximum_significant_digits,
        )
    }
}

/// Read `type`, `localeMatcher` and the raw digit counts, in that order.
fn read_option_bag(
    value: &Value,
) -> Result<(PluralType, LocaleMatcher, DigitRequest), PluralRulesError> {
    let bag = match value {
        Value::Null => return Err(PluralRulesError::OptionsNotObject),
        Value::Object(bag) => bag,
        _ => {
            return Ok((
                PluralType::default(),
                LocaleMatcher::default(),
                DigitRequest::default(),
            ));
        }
    };

    if let Some(name) = bag
        .keys()
        .find(|key| !KNOWN_OPTIONS.contains(&key.as_str()))
    {
        return Err(PluralRulesError::UnknownOption { name: name.clone() });
    }

    let plural_type: PluralType = get_option(bag, "type", PluralType::ALLOWED)?
        .map(|s| s.parse())
        .transpose()?
        .unwrap_or_default();
    let locale_matcher: LocaleMatcher = get_option(bag, "localeMatcher", LocaleMatcher::ALLOWED)?
        .map(|s| s.parse())
        .transpose()?
        .unwrap_or_default();
    let request = DigitRequest {
        minimum_integer_digits: get_number_option(bag, "minimumIntegerDigits"),
        minimum_fraction_digits: get_number_option(bag, "minimumFractionDigits"),
        maximum_fraction_digits: get_number_option(bag, "maximumFractionDigits"),
        minimum_significant_digits: get_number_option(bag, "minimumSignificantDigits"),
        maximum_significant_digits: get_number_option(bag, "maximumSignificantDigits"),
    };
    Ok((plural_type, locale_matcher, request))
}

/// Read a string option from `bag`, validating it against `allowed`.
///
/// Absent and `undefined` values yield `None`.
///
/// # Errors
///
/// Returns [`PluralRulesError::InvalidOption`] if the coerced string is not
/// in `allowed`.
pub fn get_option(
    bag: &BTreeMap<String, Value>,
    option: &'static str,
    allowed: &[&'static str],
) -> Result<Option<String>, PluralRulesError> {
    let Some(value) = bag.get(option).filter(|v| !v.is_undefined()) else {
        return Ok(None);
    };
    let value = value.to_display_string();
    if allowed.contains(&value.as_str()) {
        Ok(Some(value))
    } else {
        Err(PluralRulesError::InvalidOption {
            option,
            value,
            allowed: allowed.to_vec(),
        })
    }
}

/// Read a digit-count option from `bag`, coerced to a number.
///
/// Absent and `undefined` values yield `None`. Bounds are checked later by
/// [`set_digit_options`], which knows each option's range.
fn get_number_option(bag: &BTreeMap<String, Value>, option: &str) -> Option<f64> {
    bag.get(option)
        .filter(|v| !v.is_undefined())
        .map(Value::to_number)
}

/// Canonical configuration derived from [`PluralRulesOptions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedSettings {
    pub plural_type: PluralType,
    pub locale_matcher: LocaleMatcher,
    pub digits: DigitOptions,
}

/// Validate options and compute the digit bounds used for selection.
///
/// The minimum fraction digit count defaults to 0. When the caller gives no
/// maximum, it defaults to `max(minimumFractionDigits, 3)`.
///
/// # Errors
///
/// Returns [`PluralRulesError::DigitOutOfRange`] for violated digit bounds.
///
/// # Example
///
/// ```
/// use plurale::{PluralRulesOptions, resolve_options};
///
/// let options = PluralRulesOptions::builder().minimum_fraction_digits(5).build();
/// let settings = resolve_options(&options).unwrap();
/// assert_eq!(settings.digits.maximum_fraction_digits, Some(5));
/// ```
pub fn resolve_options(options: &PluralRulesOptions) -> Result<ResolvedSettings, PluralRulesError> {
    resolve_settings(
        options.plural_type,
        options.locale_matcher,
        &options.digit_request(),
    )
}

/// Validate a dynamic option bag and compute the digit bounds used for
/// selection, reading options in the same order as
/// [`PluralRulesOptions::from_value`].
///
/// # Errors
///
/// Fails for the reasons given on [`PluralRulesOptions::from_value`].
pub fn resolve_value_options(value: &Value) -> Result<ResolvedSettings, PluralRulesError> {
    let (plural_type, locale_matcher, request) = read_option_bag(value)?;
    resolve_settings(plural_type, locale_matcher, &request)
}

fn resolve_settings(
    plural_type: PluralType,
    locale_matcher: LocaleMatcher,
    request: &DigitRequest,
) -> Result<ResolvedSettings, PluralRulesError> {
    let mut digits = set_digit_options(request, 0)?;
    if digits.maximum_fraction_digits.is_none() {
        digits.maximum_fraction_digits = Some(
            digits
                .minimum_fraction_digits
                .max(DEFAULT_MAXIMUM_FRACTION_DIGITS),
        );
    }
    Ok(ResolvedSettings {
        plural_type,
        locale_matcher,
        digits,
    })
}

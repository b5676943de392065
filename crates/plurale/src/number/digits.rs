//! Digit-count options shared by every component that renders numbers.

use crate::error::PluralRulesError;
use crate::types::Value;

/// Digit bounds as requested by a caller, before validation.
///
/// Values are already coerced to numbers but not yet range-checked or
/// floored, so NaN and fractional counts are representable here.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DigitRequest {
    pub minimum_integer_digits: Option<f64>,
    pub minimum_fraction_digits: Option<f64>,
    pub maximum_fraction_digits: Option<f64>,
    pub minimum_significant_digits: Option<f64>,
    pub maximum_significant_digits: Option<f64>,
}

impl DigitRequest {
    /// A request for exact digit counts.
    pub fn from_counts(
        minimum_integer_digits: Option<u32>,
        minimum_fraction_digits: Option<u32>,
        maximum_fraction_digits: Option<u32>,
        minimum_significant_digits: Option<u32>,
        maximum_significant_digits: Option<u32>,
    ) -> Self {
        Self {
            minimum_integer_digits: minimum_integer_digits.map(f64::from),
            minimum_fraction_digits: minimum_fraction_digits.map(f64::from),
            maximum_fraction_digits: maximum_fraction_digits.map(f64::from),
            minimum_significant_digits: minimum_significant_digits.map(f64::from),
            maximum_significant_digits: maximum_significant_digits.map(f64::from),
        }
    }
}

/// Significant-digit bounds; present only when a caller asked for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignificantDigits {
    pub minimum: u32,
    pub maximum: u32,
}

/// Validated digit bounds controlling how a number is rendered.
///
/// Invariants: `minimum_fraction_digits <= maximum_fraction_digits` when the
/// maximum is set, and `significant.minimum <= significant.maximum`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitOptions {
    pub minimum_integer_digits: u32,
    pub minimum_fraction_digits: u32,
    pub maximum_fraction_digits: Option<u32>,
    pub significant: Option<SignificantDigits>,
}

impl DigitOptions {
    /// The maximum fraction digit count used for rendering.
    ///
    /// Falls back to the minimum when no maximum was set.
    pub fn effective_maximum_fraction_digits(&self) -> u32 {
        self.maximum_fraction_digits
            .unwrap_or(self.minimum_fraction_digits)
    }
}

impl Default for DigitOptions {
    fn default() -> Self {
        Self {
            minimum_integer_digits: 1,
            minimum_fraction_digits: 0,
            maximum_fraction_digits: None,
            significant: None,
        }
    }
}

/// Round a range-checked digit count down to a whole number.
pub fn floor_digit_count(value: f64) -> u32 {
    // Callers check `value` against a u32 range first.
    value.floor() as u32
}

/// Validate a single numeric option against `min..=max`, then floor it.
///
/// Absent values take `fallback`. The range check happens before flooring,
/// so `20.5` is rejected by a maximum of 20.
///
/// # Errors
///
/// Returns [`PluralRulesError::DigitOutOfRange`] when a supplied value is NaN
/// or lies outside the bounds.
pub fn number_option(
    value: Option<f64>,
    option: &'static str,
    min: u32,
    max: u32,
    fallback: Option<u32>,
) -> Result<Option<u32>, PluralRulesError> {
    match value {
        None => Ok(fallback),
        Some(v) if (f64::from(min)..=f64::from(max)).contains(&v) => {
            Ok(Some(floor_digit_count(v)))
        }
        Some(v) => Err(PluralRulesError::DigitOutOfRange {
            option,
            value: Value::Float(v).to_display_string(),
            min,
            max,
        }),
    }
}

/// Validate requested digit bounds.
///
/// Options are read in a fixed order, each bound constraining the next:
/// `minimumIntegerDigits` (1..=21, default 1), `minimumFractionDigits`
/// (0..=20, default `default_minimum_fraction`), `maximumFractionDigits`
/// (minimum..=20, no default). Significant digits are only set when at least
/// one of them was requested: `minimumSignificantDigits` (1..=21, default 1)
/// then `maximumSignificantDigits` (minimum..=21, default 21).
///
/// # Errors
///
/// Returns [`PluralRulesError::DigitOutOfRange`] for the first bound that is
/// violated.
pub fn set_digit_options(
    request: &DigitRequest,
    default_minimum_fraction: u32,
) -> Result<DigitOptions, PluralRulesError> {
    let mnid = number_option(
        request.minimum_integer_digits,
        "minimumIntegerDigits",
        1,
        21,
        Some(1),
    )?
    .unwrap_or(1);
    let mnfd = number_option(
        request.minimum_fraction_digits,
        "minimumFractionDigits",
        0,
        20,
        Some(default_minimum_fraction),
    )?
    .unwrap_or(default_minimum_fraction);
    let mxfd = number_option(
        request.maximum_fraction_digits,
        "maximumFractionDigits",
        mnfd,
        20,
        None,
    )?;

    let significant = if request.minimum_significant_digits.is_some()
        || request.maximum_significant_digits.is_some()
    {
        let minimum = number_option(
            request.minimum_significant_digits,
            "minimumSignificantDigits",
            1,
            21,
            Some(1),
        )?
        .unwrap_or(1);
        let maximum = number_option(
            request.maximum_significant_digits,
            "maximumSignificantDigits",
            minimum,
            21,
            Some(21),
        )?
        .unwrap_or(21);
        Some(SignificantDigits { minimum, maximum })
    } else {
        None
    };

    Ok(DigitOptions {
        minimum_integer_digits: mnid,
        minimum_fraction_digits: mnfd,
        maximum_fraction_digits: mxfd,
        significant,
    })
}

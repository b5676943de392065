//! Rendering numbers under digit bounds.
//!
//! The output carries no grouping separators or locale-specific symbols.
//! It exists so that the observable digit shape of a number (fraction digit
//! count, trailing zeros) is fixed before plural rules look at it.

use fixed_decimal::{Decimal, FloatPrecision, Sign, SignedRoundingMode, UnsignedRoundingMode};

use crate::number::digits::DigitOptions;

const HALF_EXPAND: SignedRoundingMode = SignedRoundingMode::Unsigned(UnsignedRoundingMode::HalfExpand);

/// A digit count as a decimal magnitude; counts are bounded by 21.
fn magnitude(count: u32) -> i16 {
    i16::try_from(count).unwrap_or(i16::MAX)
}

/// Round to at most `maximum` significant digits, then keep at least
/// `minimum` of them.
fn apply_precision(decimal: &mut Decimal, minimum: u32, maximum: u32) {
    let position = decimal.nonzero_magnitude_start() - (magnitude(maximum) - 1);
    decimal.round_with_mode(position, HALF_EXPAND);
    decimal.trim_end();
    let position = decimal.nonzero_magnitude_start() - (magnitude(minimum) - 1);
    decimal.pad_end(position);
}

/// Round to at most `maximum` fraction digits, keep at least `minimum`, and
/// left-pad the integer part to `minimum_integer` digits.
fn apply_fixed(decimal: &mut Decimal, minimum_integer: u32, minimum: u32, maximum: u32) {
    decimal.round_with_mode(-magnitude(maximum), HALF_EXPAND);
    decimal.trim_end();
    decimal.pad_end(-magnitude(minimum));
    decimal.pad_start(magnitude(minimum_integer));
}

/// Render `x` as a decimal honoring `options`.
///
/// Significant-digit bounds take precedence over integer and fraction
/// bounds when present. Rounding is half away from zero, applied to the
/// shortest decimal expansion that round-trips to `x`. A result that rounds
/// to zero carries no sign. Returns `None` for NaN and infinities.
pub fn format_number(options: &DigitOptions, x: f64) -> Option<Decimal> {
    let mut decimal = Decimal::try_from_f64(x, FloatPrecision::RoundTrip).ok()?;
    match options.significant {
        Some(significant) => {
            apply_precision(&mut decimal, significant.minimum, significant.maximum);
        }
        None => apply_fixed(
            &mut decimal,
            options.minimum_integer_digits,
            options.minimum_fraction_digits,
            options.effective_maximum_fraction_digits(),
        ),
    }
    if decimal.is_zero() {
        decimal.sign = Sign::None;
    }
    Some(decimal)
}

/// Render `x` as a plain decimal string honoring `options`.
///
/// Finite values render as [`format_number`] does. Non-finite values render
/// as `NaN`, `Infinity` or `-Infinity`.
///
/// # Example
///
/// ```
/// use plurale::{DigitOptions, format_number_to_string};
///
/// let options = DigitOptions {
///     minimum_fraction_digits: 1,
///     maximum_fraction_digits: Some(3),
///     ..DigitOptions::default()
/// };
/// assert_eq!(format_number_to_string(&options, 1.0), "1.0");
/// assert_eq!(format_number_to_string(&options, 2.34567), "2.346");
/// ```
pub fn format_number_to_string(options: &DigitOptions, x: f64) -> String {
    match format_number(options, x) {
        Some(decimal) => decimal.to_string(),
        None if x.is_nan() => "NaN".to_owned(),
        None if x > 0.0 => "Infinity".to_owned(),
        None => "-Infinity".to_owned(),
    }
}

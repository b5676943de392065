//! Digit-bound validation and decimal rendering.
//!
//! Plural rules depend on the visible shape of a number ("1" and "1.0" can
//! select different categories), so numbers are rendered under validated
//! digit bounds before any rule sees them.

mod digits;
mod format;

pub use digits::{
    DigitOptions, DigitRequest, SignificantDigits, floor_digit_count, number_option,
    set_digit_options,
};
pub use format::{format_number, format_number_to_string};

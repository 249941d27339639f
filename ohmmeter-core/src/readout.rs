//! Fixed-capacity text for the meter screen
//!
//! Every field is formatted into a `heapless::String`. A value that does
//! not fit is replaced by a placeholder rather than shown cut short or
//! empty.

use core::fmt::{self, Write};

use heapless::String;

use crate::bands::BandCode;

/// Capacity of a numeric field
pub const VALUE_LEN: usize = 12;

/// Capacity of a colour-name line
pub const NAMES_LEN: usize = 16;

/// Shown when a number does not fit its field
pub const VALUE_PLACEHOLDER: &str = "----";

/// Shown when a colour line does not fit
pub const NAMES_PLACEHOLDER: &str = "?";

/// Format into a fixed string, falling back to `placeholder`
///
/// The placeholder itself is cut at the capacity.
pub fn format_or<const N: usize>(args: fmt::Arguments<'_>, placeholder: &str) -> String<N> {
    let mut text = String::new();
    if text.write_fmt(args).is_ok() {
        return text;
    }

    text.clear();
    for c in placeholder.chars() {
        if text.push(c).is_err() {
            break;
        }
    }
    text
}

/// Whole-number reading such as the ADC mean or the resistance
pub fn whole(value: f32) -> String<VALUE_LEN> {
    format_or(format_args!("{:.0}", value), VALUE_PLACEHOLDER)
}

/// Voltage with two decimals and a unit, e.g. `1.65V`
pub fn volts(value: f32) -> String<VALUE_LEN> {
    format_or(format_args!("{:.2}V", value), VALUE_PLACEHOLDER)
}

/// The two lines naming a code's bands
///
/// First line: both digit colours. Second line: the multiplier.
pub fn band_names(code: &BandCode) -> (String<NAMES_LEN>, String<NAMES_LEN>) {
    let [first, second, multiplier] = code.colors();
    (
        format_or(
            format_args!("{} {}", first.name(), second.name()),
            NAMES_PLACEHOLDER,
        ),
        format_or(format_args!("x {}", multiplier.name()), NAMES_PLACEHOLDER),
    )
}

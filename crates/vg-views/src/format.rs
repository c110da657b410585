//! Human readable sales magnitudes

use std::fmt;

/// Unit a sales figure (given in millions) is shown in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MagnitudeUnit {
    Million,
    Billion,
}

impl fmt::Display for MagnitudeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MagnitudeUnit::Million => f.write_str("million"),
            MagnitudeUnit::Billion => f.write_str("billion"),
        }
    }
}

/// Split a value in millions into the scaled number and its unit
pub fn scale(value: f64) -> (f64, MagnitudeUnit) {
    if value >= 1000.0 {
        (value / 1000.0, MagnitudeUnit::Billion)
    } else {
        (value, MagnitudeUnit::Million)
    }
}

/// Render a value in millions, e.g. `350.25` -> `"350.250 million"` and
/// `1011.14` -> `"1.011 billion"`. Three decimals, comma-grouped thousands.
pub fn format_magnitude(value: f64) -> String {
    let (scaled, unit) = scale(value);
    format!("{} {}", group_thousands(&format!("{:.3}", scaled)), unit)
}

/// Insert thousands separators into the integer part of a plain decimal string
fn group_thousands(number: &str) -> String {
    let (sign, unsigned) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (int_part, frac_part) = match unsigned.find('.') {
        Some(pos) => unsigned.split_at(pos),
        None => (unsigned, ""),
    };

    if !int_part.bytes().all(|b| b.is_ascii_digit()) {
        // inf / NaN
        return number.to_string();
    }

    let mut result = String::with_capacity(number.len() + int_part.len() / 3);
    result.push_str(sign);
    let digit_count = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (digit_count - i) % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.push_str(frac_part);
    result
}

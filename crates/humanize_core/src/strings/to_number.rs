/// Converts loosely typed text to a number, returning NaN for anything that
/// is not a number. Blank text is 0.
///
/// Accepted forms, after trimming whitespace:
/// - decimal literals with optional sign, fraction and exponent
///   ("42", "-1.5", ".5", "1e3")
/// - `Infinity` with an optional sign
/// - unsigned `0x`, `0o` and `0b` integers
///
/// The formatters treat NaN as 0, so `number_format(to_number("abc"), ..)`
/// prints a zero instead of failing.
pub fn to_number(text: &str) -> f64 {
    let text = text.trim();
    if text.is_empty() {
        return 0.0;
    }

    match text {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some(radix) = radix_prefix(text) {
        return parse_radix(&text[2..], radix);
    }

    // `f64::from_str` also takes "inf" and "NaN", which are not numbers here
    let is_decimal = text
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !is_decimal {
        return f64::NAN;
    }
    text.parse().unwrap_or(f64::NAN)
}

fn radix_prefix(text: &str) -> Option<u32> {
    match text.get(..2)? {
        "0x" | "0X" => Some(16),
        "0o" | "0O" => Some(8),
        "0b" | "0B" => Some(2),
        _ => None,
    }
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits
        .chars()
        .try_fold(0.0, |acc: f64, c| {
            c.to_digit(radix).map(|d| acc * radix as f64 + d as f64)
        })
        .unwrap_or(f64::NAN)
}

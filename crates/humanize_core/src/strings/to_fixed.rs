/// The smallest positive f64 is 2^-1074, which has 1074 digits after the
/// decimal point. Printing with this precision yields the exact value.
const EXACT_DIGITS: usize = 1074;

/// Formats a number in fixed-point notation with exactly `digits` decimals
/// (e.g. 1234.5678 -> "1234.57").
///
/// Rounding looks at the exact binary value, and an exact tie rounds up:
/// 2.5 becomes "3" and 0.125 becomes "0.13", while 1.005 (stored as
/// 1.00499...) becomes "1.00". The sign is dropped and non-finite input
/// is treated as 0; callers handle both themselves.
pub fn to_fixed(value: f64, digits: usize) -> String {
    let value = if value.is_finite() { value.abs() } else { 0.0 };

    let exact = format!("{:.*}", EXACT_DIGITS, value);
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(digits))
        .collect();
    kept.resize(int_part.len() + digits, b'0');

    let round_up = frac_part
        .as_bytes()
        .get(digits)
        .is_some_and(|&next| next >= b'5');
    if round_up {
        increment_digits(&mut kept);
    }

    let split = kept.len() - digits;
    let mut res = String::with_capacity(kept.len() + 1);
    res.extend(kept[..split].iter().map(|&b| b as char));
    if digits > 0 {
        res.push('.');
        res.extend(kept[split..].iter().map(|&b| b as char));
    }
    res
}

/// Adds one unit in the last place to a run of ASCII digits, carrying
/// leftwards and growing the run on overflow ("999" -> "1000").
fn increment_digits(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

use super::to_fixed::to_fixed;
use num_traits::ToPrimitive;

/// Decimals used when none (or an invalid count) is given.
pub const DEFAULT_DECIMALS: u32 = 2;

/// Widest fixed-point width supported; larger counts are clamped.
pub const MAX_DECIMALS: u32 = 100;

/// Note the defaults are the European style, "1.234,56", not "1,234.56".
pub const DEFAULT_DEC_POINT: &str = ",";
pub const DEFAULT_THOUSANDS_SEP: &str = ".";

/// Rounding and separator settings for [`number_format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat<'a> {
    pub decimals: u32,
    pub dec_point: &'a str,
    pub thousands_sep: &'a str,
}

impl Default for NumberFormat<'_> {
    fn default() -> Self {
        NumberFormat {
            decimals: DEFAULT_DECIMALS,
            dec_point: DEFAULT_DEC_POINT,
            thousands_sep: DEFAULT_THOUSANDS_SEP,
        }
    }
}

impl<'a> NumberFormat<'a> {
    /// Builds a format from optional settings; anything missing falls back
    /// to the defaults and negative decimal counts are made positive.
    pub fn new(
        decimals: Option<i32>,
        dec_point: Option<&'a str>,
        thousands_sep: Option<&'a str>,
    ) -> Self {
        NumberFormat {
            decimals: decimals.map_or(DEFAULT_DECIMALS, |d| d.unsigned_abs().min(MAX_DECIMALS)),
            dec_point: dec_point.unwrap_or(DEFAULT_DEC_POINT),
            thousands_sep: thousands_sep.unwrap_or(DEFAULT_THOUSANDS_SEP),
        }
    }

    pub fn format<T>(&self, number: T) -> String
    where
        T: ToPrimitive,
    {
        let number = number
            .to_f64()
            .filter(|n| n.is_finite())
            .unwrap_or(0.0);
        let decimals = self.decimals as usize;

        let fixed = to_fixed(number, decimals);
        let int_part = fixed
            .split_once('.')
            .map_or(fixed.as_str(), |(int_part, _)| int_part);

        let mut res = String::with_capacity(fixed.len() * 2);
        if number < 0.0 {
            res.push('-');
        }
        push_grouped(&mut res, int_part, self.thousands_sep);

        if decimals > 0 {
            // The fraction is re-derived from the rounded value rather than
            // sliced from `fixed`, so it can differ for very large numbers.
            let rounded: f64 = fixed.parse().unwrap_or(0.0);
            let whole: f64 = int_part.parse().unwrap_or(0.0);
            let fraction = to_fixed((rounded - whole).abs(), decimals);

            res.push_str(self.dec_point);
            res.push_str(fraction.get(2..).unwrap_or(""));
            trim_zero_suffix(&mut res, self.dec_point);
        }
        res
    }
}

/// Formats `number` rounded to `decimals` places with custom separators.
///
/// Missing arguments use the defaults: 2 decimals, "," as the decimal point
/// and "." between thousands. A non-numeric or non-finite `number` formats
/// as 0.
///
/// ```
/// use humanize_core::strings::number_format;
///
/// assert_eq!(number_format(1234.5678, Some(2), Some("."), Some("")), "1234.57");
/// assert_eq!(number_format(1000, Some(0), None, None), "1.000");
/// assert_eq!(number_format(12, None, None, None), "12");
/// ```
pub fn number_format<T>(
    number: T,
    decimals: Option<i32>,
    dec_point: Option<&str>,
    thousands_sep: Option<&str>,
) -> String
where
    T: ToPrimitive,
{
    NumberFormat::new(decimals, dec_point, thousands_sep).format(number)
}

/// Appends ASCII `digits`, inserting `sep` before every group of three
/// counted from the right.
fn push_grouped(res: &mut String, digits: &str, sep: &str) {
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            res.push_str(sep);
        }
        res.push(c);
    }
}

/// Drops a trailing `dec_point + "00"`, but only when that is also the
/// first place the pattern occurs in the string. "12,00" becomes "12";
/// "12,000" and "1.000.00" (with "." for both separators) are kept.
fn trim_zero_suffix(res: &mut String, dec_point: &str) {
    let Some(start) = res.len().checked_sub(dec_point.len() + 2) else {
        return;
    };
    let pattern = format!("{dec_point}00");
    if res.find(&pattern) == Some(start) {
        res.truncate(start);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_separators() {
        assert_eq!(number_format(1234.5678, Some(2), Some("."), Some("")), "1234.57");
        assert_eq!(number_format(-5.5, Some(1), Some("."), Some(",")), "-5.5");
        assert_eq!(
            number_format(1234567890, Some(0), None, Some(" ")),
            "1 234 567 890"
        );
    }

    #[test]
    fn test_defaults() {
        assert_eq!(number_format(1000, Some(0), None, None), "1.000");
        assert_eq!(number_format(1234567.891, None, None, None), "1.234.567,89");
        assert_eq!(NumberFormat::default(), NumberFormat::new(None, None, None));
    }

    #[test]
    fn test_grouping() {
        assert_eq!(number_format(0, Some(0), None, None), "0");
        assert_eq!(number_format(999, Some(0), None, None), "999");
        assert_eq!(number_format(123456, Some(0), None, None), "123.456");
        assert_eq!(number_format(-1234567, Some(0), None, None), "-1.234.567");
    }

    #[test]
    fn test_negative_decimals_are_made_positive() {
        assert_eq!(number_format(3.14159, Some(-3), Some("."), None), "3.142");
    }

    #[test]
    fn test_decimals_are_clamped() {
        let res = number_format(1, Some(500), Some("."), Some(""));
        assert_eq!(res.len(), 2 + MAX_DECIMALS as usize);
        assert!(res.starts_with("1."));
        assert!(res[2..].bytes().all(|b| b == b'0'));
    }

    #[test]
    fn test_non_numeric_is_zero() {
        assert_eq!(number_format(f64::NAN, Some(2), Some("."), Some(",")), "0");
        assert_eq!(number_format(f64::INFINITY, Some(1), Some("."), None), "0.0");
        assert_eq!(number_format(f64::NEG_INFINITY, Some(0), None, None), "0");
    }

    #[test]
    fn test_sign() {
        assert_eq!(number_format(-0.001, Some(2), None, None), "-0");
        assert_eq!(number_format(-0.0, Some(1), Some("."), None), "0.0");
    }

    #[test]
    fn test_ties_round_up() {
        assert_eq!(number_format(2.5, Some(0), None, None), "3");
        assert_eq!(number_format(0.125, Some(2), Some("."), None), "0.13");
    }

    #[test]
    fn test_rounding_carries_into_integer_part() {
        assert_eq!(number_format(999.999, Some(2), Some("."), Some(",")), "1,000");
        assert_eq!(number_format(999.999, Some(1), Some("."), Some(",")), "1,000.0");
    }

    #[test]
    fn test_trailing_zero_trim() {
        assert_eq!(number_format(12.0, None, None, None), "12");
        assert_eq!(number_format(12.5, None, None, None), "12,50");
        assert_eq!(number_format(12.0, Some(3), None, None), "12,000");
        assert_eq!(number_format(12.0, Some(1), None, None), "12,0");
    }

    #[test]
    fn test_trailing_zero_trim_checks_first_occurrence() {
        assert_eq!(
            number_format(1000.0, Some(2), Some("."), Some(".")),
            "1.000.00"
        );
        assert_eq!(number_format(100, Some(2), Some(""), Some("")), "10000");
        assert_eq!(number_format(5, Some(2), Some(""), None), "5");
    }

    #[test]
    fn test_multibyte_separators() {
        assert_eq!(
            number_format(1234.5, Some(2), Some("·"), Some("’")),
            "1’234·50"
        );
    }

    #[test]
    fn test_regrouping_is_stable() {
        for n in [7u64, 1_000, 65_536, 1_234_567, 9_876_543_210] {
            let formatted = number_format(n, Some(0), None, None);
            let value: f64 = formatted.replace('.', "").parse().unwrap();
            assert_eq!(number_format(value, Some(0), None, None), formatted);
        }
    }

    #[test]
    fn test_integer_inputs() {
        assert_eq!(number_format(42u8, Some(1), Some("."), None), "42.0");
        assert_eq!(number_format(-42i64, Some(0), None, None), "-42");
        assert_eq!(number_format(4096usize, None, Some("."), Some(",")), "4,096");
    }
}

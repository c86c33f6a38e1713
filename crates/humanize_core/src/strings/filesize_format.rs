use super::number_format::number_format;
use num_traits::ToPrimitive;

const KIB: f64 = 1024.0;
const MIB: f64 = 1048576.0;
const GIB: f64 = 1073741824.0;

/// The unit a byte count is displayed in. Thresholds are binary but the
/// labels are the familiar KB/MB/GB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    Bytes,
    Kilobytes,
    Megabytes,
    Gigabytes,
}

impl SizeTier {
    /// Picks the largest tier whose threshold `size` reaches. NaN and
    /// negative sizes land in `Bytes`.
    pub fn of(size: f64) -> Self {
        if size >= GIB {
            SizeTier::Gigabytes
        } else if size >= MIB {
            SizeTier::Megabytes
        } else if size >= KIB {
            SizeTier::Kilobytes
        } else {
            SizeTier::Bytes
        }
    }

    pub fn divisor(self) -> f64 {
        match self {
            SizeTier::Bytes => 1.0,
            SizeTier::Kilobytes => KIB,
            SizeTier::Megabytes => MIB,
            SizeTier::Gigabytes => GIB,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            SizeTier::Bytes => "bytes",
            SizeTier::Kilobytes => "KB",
            SizeTier::Megabytes => "MB",
            SizeTier::Gigabytes => "GB",
        }
    }
}

/// Formats a byte count for display, e.g. 2048 -> "2 KB".
///
/// GB and MB values get two decimals using `dec_point` (default ",") and no
/// thousands separator. KB and byte values are whole numbers grouped with
/// the default "." separator, so 1023 bytes reads "1.023 bytes".
pub fn filesizeformat<T>(filesize: T, dec_point: Option<&str>) -> String
where
    T: ToPrimitive,
{
    let size = filesize.to_f64().unwrap_or(f64::NAN);
    let tier = SizeTier::of(size);
    let scaled = size / tier.divisor();

    let value = match tier {
        SizeTier::Gigabytes | SizeTier::Megabytes => {
            number_format(scaled, Some(2), dec_point, Some(""))
        }
        SizeTier::Kilobytes | SizeTier::Bytes => number_format(scaled, Some(0), None, None),
    };
    format!("{} {}", value, tier.suffix())
}

//! Human-readable byte counts

/// Binary size units, smallest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Unit {
    B,
    KB,
    MB,
    GB,
    TB,
}

impl Unit {
    /// The unit table in ascending order.
    pub const ALL: [Unit; 5] = [Unit::B, Unit::KB, Unit::MB, Unit::GB, Unit::TB];

    pub fn abbreviation(self) -> &'static str {
        match self {
            Unit::B => "B",
            Unit::KB => "KB",
            Unit::MB => "MB",
            Unit::GB => "GB",
            Unit::TB => "TB",
        }
    }

    fn next(self) -> Option<Unit> {
        match self {
            Unit::B => Some(Unit::KB),
            Unit::KB => Some(Unit::MB),
            Unit::MB => Some(Unit::GB),
            Unit::GB => Some(Unit::TB),
            Unit::TB => None,
        }
    }
}

const THRESHOLD: f64 = 1024.0;
const DEFAULT_PRECISION: usize = 1;

/// Converts byte counts into strings such as `1.5KB` or `0.0B `.
///
/// The unit is always padded to two columns so that a column of sizes
/// lines up when right-aligned.
#[derive(Debug, Clone, Copy)]
pub struct SizeFormatter {
    precision: usize,
}

impl SizeFormatter {
    pub fn new() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
        }
    }

    /// Number of digits after the decimal point.
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Scale a byte count down to the largest unit it reaches.
    ///
    /// A value of exactly 1024 already moves up a unit, so 1024 bytes is
    /// `1.0 KB`. Division stops at TB: anything larger is reported as a big
    /// TB value.
    pub fn scale(bytes: u64) -> (f64, Unit) {
        let mut value = bytes as f64;
        let mut unit = Unit::B;
        while value >= THRESHOLD {
            match unit.next() {
                Some(next) => {
                    value /= THRESHOLD;
                    unit = next;
                }
                None => break,
            }
        }
        (value, unit)
    }

    pub fn format(&self, bytes: u64) -> String {
        let (value, unit) = Self::scale(bytes);
        format!(
            "{:.prec$}{:<2}",
            value,
            unit.abbreviation(),
            prec = self.precision
        )
    }

    /// Like [`format`](Self::format), but byte-sized values are printed as
    /// plain integers (`512B `) since a fraction of a byte means nothing.
    pub fn format_compact(&self, bytes: u64) -> String {
        let (value, unit) = Self::scale(bytes);
        if unit == Unit::B {
            format!("{}{:<2}", bytes, unit.abbreviation())
        } else {
            format!(
                "{:.prec$}{:<2}",
                value,
                unit.abbreviation(),
                prec = self.precision
            )
        }
    }
}

impl Default for SizeFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Format with the default precision.
pub fn format_size(bytes: u64) -> String {
    SizeFormatter::new().format(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_bytes() {
        assert_eq!(format_size(0), "0.0B ");
    }

    #[test]
    fn test_threshold_boundary() {
        assert_eq!(SizeFormatter::scale(1023), (1023.0, Unit::B));
        assert_eq!(SizeFormatter::scale(1024), (1.0, Unit::KB));
        assert_eq!(format_size(1023), "1023.0B ");
        assert_eq!(format_size(1024), "1.0KB");
    }

    #[test]
    fn test_each_unit() {
        assert_eq!(format_size(1536), "1.5KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.0MB");
        assert_eq!(format_size(3 * 1024 * 1024 * 1024), "3.0GB");
        assert_eq!(format_size(2 * 1024u64.pow(4)), "2.0TB");
    }

    #[test]
    fn test_caps_at_terabytes() {
        let (value, unit) = SizeFormatter::scale(4096 * 1024u64.pow(4));
        assert_eq!(unit, Unit::TB);
        assert_eq!(value, 4096.0);
        assert_eq!(format_size(4096 * 1024u64.pow(4)), "4096.0TB");
        // The largest representable count must not run off the unit table
        assert_eq!(SizeFormatter::scale(u64::MAX).1, Unit::TB);
    }

    #[test]
    fn test_precision() {
        let two = SizeFormatter::new().with_precision(2);
        assert_eq!(two.format(1536), "1.50KB");
        assert_eq!(two.precision(), 2);
        let none = SizeFormatter::new().with_precision(0);
        assert_eq!(none.format(2048), "2KB");
    }

    #[test]
    fn test_format_compact() {
        let fmt = SizeFormatter::new().with_precision(2);
        assert_eq!(fmt.format_compact(0), "0B ");
        assert_eq!(fmt.format_compact(512), "512B ");
        assert_eq!(fmt.format_compact(1024), "1.00KB");
        assert_eq!(fmt.format_compact(10 * 1024 * 1024 + 512 * 1024), "10.50MB");
    }

    #[test]
    fn test_unit_table_order() {
        let names: Vec<_> = Unit::ALL.iter().map(|u| u.abbreviation()).collect();
        assert_eq!(names, ["B", "KB", "MB", "GB", "TB"]);
    }
}

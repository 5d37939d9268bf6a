//! Core data types for lunisolar calendar calculations.

use core::fmt;

/// A date in the Japanese traditional lunisolar calendar (kyūreki).
///
/// Produced by the resolution functions in [`crate::lunisolar`]. Month
/// numbers run 1 to 12; in years with an intercalary (leap) month the same
/// month number occurs twice, the second occurrence flagged by
/// [`is_leap_month`](Self::is_leap_month).
///
/// # Example
/// ```
/// use kyureki::lunisolar;
///
/// let date = lunisolar::from_gregorian(2023, 6, 1).unwrap();
/// assert_eq!(date.year(), 2023);
/// assert_eq!(date.month(), 4);
/// assert!(!date.is_leap_month());
/// assert_eq!(date.day(), 13);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KyurekiDate {
    /// Lunisolar year
    year: i32,
    /// Lunisolar month (1-12)
    month: u32,
    /// Whether the month is an intercalary (leap) month
    is_leap_month: bool,
    /// Day of the lunisolar month (1-based)
    day: u32,
}

impl KyurekiDate {
    /// Creates a new lunisolar date.
    pub(crate) const fn new(year: i32, month: u32, is_leap_month: bool, day: u32) -> Self {
        Self {
            year,
            month,
            is_leap_month,
            day,
        }
    }

    /// Gets the lunisolar year.
    ///
    /// The lunisolar year rolls over at the lunisolar new year, weeks after
    /// the Gregorian one, so dates in early Gregorian January usually belong
    /// to the previous lunisolar year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Gets the lunisolar month number (1-12).
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Returns `true` if the month is an intercalary (leap) month.
    #[must_use]
    pub const fn is_leap_month(&self) -> bool {
        self.is_leap_month
    }

    /// Gets the day of the lunisolar month (1-based).
    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Gets the rokuyō label for this date.
    ///
    /// # Example
    /// ```
    /// use kyureki::{lunisolar, Rokuyou};
    ///
    /// let date = lunisolar::from_gregorian(2023, 6, 1).unwrap();
    /// assert_eq!(date.rokuyou(), Rokuyou::Butsumetsu);
    /// ```
    #[must_use]
    pub fn rokuyou(&self) -> Rokuyou {
        crate::rokuyou::from_month_day(self.month, self.day)
    }
}

impl fmt::Display for KyurekiDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_leap_month {
            write!(f, "{}年閏{}月{}日", self.year, self.month, self.day)
        } else {
            write!(f, "{}年{}月{}日", self.year, self.month, self.day)
        }
    }
}

/// The six-day rokuyō cycle of the Japanese calendar.
///
/// Variants are listed in canonical cycle order, starting from the label of
/// the first day of the first lunisolar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rokuyou {
    /// 先勝 — good luck before noon
    Sensho,
    /// 友引 — a draw; funerals avoided
    Tomobiki,
    /// 先負 — good luck after noon
    Senbu,
    /// 仏滅 — the unluckiest day
    Butsumetsu,
    /// 大安 — the luckiest day
    Taian,
    /// 赤口 — unlucky except midday
    Shakko,
}

impl Rokuyou {
    /// The six labels in canonical cycle order.
    pub const CYCLE: [Self; 6] = [
        Self::Sensho,
        Self::Tomobiki,
        Self::Senbu,
        Self::Butsumetsu,
        Self::Taian,
        Self::Shakko,
    ];

    /// Gets the traditional kanji name of the label.
    ///
    /// # Example
    /// ```
    /// use kyureki::Rokuyou;
    ///
    /// assert_eq!(Rokuyou::Taian.name(), "大安");
    /// ```
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Sensho => "先勝",
            Self::Tomobiki => "友引",
            Self::Senbu => "先負",
            Self::Butsumetsu => "仏滅",
            Self::Taian => "大安",
            Self::Shakko => "赤口",
        }
    }
}

impl fmt::Display for Rokuyou {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kyureki_date_accessors() {
        let date = KyurekiDate::new(2023, 2, true, 29);
        assert_eq!(date.year(), 2023);
        assert_eq!(date.month(), 2);
        assert!(date.is_leap_month());
        assert_eq!(date.day(), 29);
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_display() {
        assert_eq!(KyurekiDate::new(2023, 4, false, 13).to_string(), "2023年4月13日");
        assert_eq!(KyurekiDate::new(2023, 2, true, 1).to_string(), "2023年閏2月1日");
        assert_eq!(Rokuyou::Butsumetsu.to_string(), "仏滅");
    }

    #[test]
    fn test_cycle_order_matches_names() {
        let names: [&str; 6] = [
            "先勝", "友引", "先負", "仏滅", "大安", "赤口",
        ];
        for (label, name) in Rokuyou::CYCLE.iter().zip(names) {
            assert_eq!(label.name(), name);
        }
    }
}

//! Months of the Gregorian year.

use std::fmt;

/// A Gregorian month.  Displays as its English name.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// Every month in calendar order.
    pub const ALL: [Month; 12] = {
        use Month::*;
        [
            January, February, March, April, May, June, July, August, September, October,
            November, December,
        ]
    };

    /// The month numbered `n` (January is 1), or `None` outside `1..=12`.
    pub fn from_number(n: u8) -> Option<Self> {
        let idx = usize::from(n).checked_sub(1)?;
        Self::ALL.get(idx).copied()
    }

    /// 1-based month number.
    pub fn number(self) -> u8 {
        self as u8 + 1
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

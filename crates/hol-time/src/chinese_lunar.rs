//! Chinese lunisolar calendar.
//!
//! Months begin on the day of the new moon (China time) and a year has
//! twelve or thirteen of them; the intercalary month repeats the number of
//! the month it follows.  Month lengths and leap-month positions are
//! astronomical, so they are tabulated for the lunar years starting in
//! 1900–2100 and the Gregorian dates are accumulated from a known new year.
//! Outside that window no dates are produced.

use crate::date::Date;
use hol_core::Year;

/// Traditional festivals on fixed lunar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChineseFestival {
    /// 1st day of the 1st month.
    LunarNewYear,
    /// 8th day of the 4th month.
    BuddhasBirthday,
    /// 5th day of the 5th month (Dragon Boat).
    TuenNg,
    /// 15th day of the 8th month.
    MidAutumn,
    /// 9th day of the 9th month.
    ChungYeung,
}

impl ChineseFestival {
    /// Lunar `(month, day)` of the festival.
    pub fn lunar_date(self) -> (u8, u8) {
        match self {
            ChineseFestival::LunarNewYear => (1, 1),
            ChineseFestival::BuddhasBirthday => (4, 8),
            ChineseFestival::TuenNg => (5, 5),
            ChineseFestival::MidAutumn => (8, 15),
            ChineseFestival::ChungYeung => (9, 9),
        }
    }
}

/// One word per lunar year:
///
/// * bits 0–3: number of the month followed by a leap month, 0 if none,
/// * bits 4–15: months 12 down to 1, set when the month has 30 days,
/// * bit 16: set when the leap month has 30 days.
const MONTH_INFO: [u32; 201] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2,
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977,
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970,
    0x06566, 0x0d4a0, 0x0ea50, 0x16a95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950,
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557,
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5b0, 0x14573, 0x052b0, 0x0a9a8, 0x0e950, 0x06aa0,
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0,
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b6a0, 0x195a6,
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570,
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x05ac0, 0x0ab60, 0x096d5, 0x092e0,
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5,
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930,
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530,
    0x05aa0, 0x076a3, 0x096d0, 0x04afb, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45,
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0,
    0x14b63, 0x09370, 0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06b20, 0x1a6c4, 0x0aae0,
    0x092e0, 0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0a6d0, 0x055d4,
    0x052d0, 0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0,
    0x0b273, 0x06930, 0x07337, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d160,
    0x0e968, 0x0d520, 0x0daa0, 0x16aa6, 0x056d0, 0x04ae0, 0x0a9d4, 0x0a2d0, 0x0d150, 0x0f252,
    0x0d520,
];

/// Lunar new year of 1900.
const ANCHOR: Date = Date::from_ymd_unchecked(1900, 1, 31);

fn leap_month_of(info: u32) -> u8 {
    (info & 0xf) as u8
}

fn month_days(info: u32, month: u8) -> i32 {
    if info & (0x10000 >> month) != 0 {
        30
    } else {
        29
    }
}

fn leap_days(info: u32) -> i32 {
    match leap_month_of(info) {
        0 => 0,
        _ if info & 0x10000 != 0 => 30,
        _ => 29,
    }
}

fn year_days(info: u32) -> i32 {
    (1..=12).map(|m| month_days(info, m)).sum::<i32>() + leap_days(info)
}

/// Precomputed Chinese new years for the supported window.
///
/// ```
/// use hol_time::{ChineseFestival, ChineseLunisolar, Date};
///
/// let cal = ChineseLunisolar::new();
/// assert_eq!(cal.new_year(2023), Some(Date::from_ymd(2023, 1, 22).unwrap()));
/// let mid_autumn = cal.festival_date(2023, ChineseFestival::MidAutumn).unwrap();
/// assert_eq!(mid_autumn, Date::from_ymd(2023, 9, 29).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct ChineseLunisolar {
    new_years: Vec<Date>,
}

impl Default for ChineseLunisolar {
    fn default() -> Self {
        Self::new()
    }
}

impl ChineseLunisolar {
    /// First lunar year in the table.
    pub const START_YEAR: Year = 1900;

    /// Last lunar year in the table.
    pub const END_YEAR: Year = 2100;

    /// Build the new-year table.
    pub fn new() -> Self {
        let mut new_years = Vec::with_capacity(MONTH_INFO.len());
        let mut start = ANCHOR;
        for info in MONTH_INFO {
            new_years.push(start);
            start += year_days(info);
        }
        Self { new_years }
    }

    fn index(year: Year) -> Option<usize> {
        let idx = usize::try_from(year.checked_sub(Self::START_YEAR)?).ok()?;
        (idx < MONTH_INFO.len()).then_some(idx)
    }

    /// First day of the lunar year beginning in Gregorian `year`.
    pub fn new_year(&self, year: Year) -> Option<Date> {
        self.new_years.get(Self::index(year)?).copied()
    }

    /// The month followed by an intercalary month in `year`, if any.
    pub fn leap_month(&self, year: Year) -> Option<u8> {
        let month = leap_month_of(MONTH_INFO[Self::index(year)?]);
        (month != 0).then_some(month)
    }

    /// Length in days of the lunar year beginning in `year`.
    pub fn year_length(&self, year: Year) -> Option<i32> {
        Self::index(year).map(|idx| year_days(MONTH_INFO[idx]))
    }

    /// Gregorian date of `day` in the regular (non-leap) lunar `month` of
    /// the lunar year beginning in `year`.
    ///
    /// `None` outside the table, for a month outside `1..=12`, or for a day
    /// the month does not have.
    pub fn to_solar(&self, year: Year, month: u8, day: u8) -> Option<Date> {
        let idx = Self::index(year)?;
        let info = MONTH_INFO[idx];
        if !(1..=12).contains(&month) || day == 0 || i32::from(day) > month_days(info, month) {
            return None;
        }
        let leap = leap_month_of(info);
        let mut offset = i32::from(day) - 1;
        for m in 1..month {
            offset += month_days(info, m);
            if m == leap {
                offset += leap_days(info);
            }
        }
        Some(self.new_years[idx] + offset)
    }

    /// Date of `festival` in Gregorian `year`.
    pub fn festival_date(&self, year: Year, festival: ChineseFestival) -> Option<Date> {
        let (month, day) = festival.lunar_date();
        self.to_solar(year, month, day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: Year, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn new_years() {
        let cal = ChineseLunisolar::new();
        assert_eq!(cal.new_year(1900), Some(date(1900, 1, 31)));
        assert_eq!(cal.new_year(1901), Some(date(1901, 2, 19)));
        assert_eq!(cal.new_year(1941), Some(date(1941, 1, 27)));
        assert_eq!(cal.new_year(2000), Some(date(2000, 2, 5)));
        assert_eq!(cal.new_year(2024), Some(date(2024, 2, 10)));
        assert_eq!(cal.new_year(2099), Some(date(2099, 1, 21)));
        assert_eq!(cal.new_year(2100), Some(date(2100, 2, 9)));
    }

    #[test]
    fn window_bounds() {
        let cal = ChineseLunisolar::new();
        assert!(cal.new_year(1899).is_none());
        assert!(cal.new_year(2101).is_none());
        assert!(cal.new_year(i32::MIN).is_none());
        assert!(cal.festival_date(2101, ChineseFestival::MidAutumn).is_none());
        assert_eq!(cal.to_solar(2100, 12, 1), Some(date(2100, 12, 31)));
    }

    #[test]
    fn leap_months() {
        let cal = ChineseLunisolar::new();
        assert_eq!(cal.leap_month(2020), Some(4));
        assert_eq!(cal.leap_month(2023), Some(2));
        assert_eq!(cal.leap_month(2025), Some(6));
        assert_eq!(cal.leap_month(2033), Some(11));
        assert_eq!(cal.leap_month(2022), None);
        assert_eq!(cal.year_length(2023), Some(384));
        assert_eq!(cal.year_length(2022), Some(355));
    }

    #[test]
    fn regular_month_skips_preceding_leap_month() {
        let cal = ChineseLunisolar::new();
        // The leap 4th month of 2020 comes after the regular one.
        assert_eq!(cal.to_solar(2020, 4, 8), Some(date(2020, 4, 30)));
        assert_eq!(cal.to_solar(2020, 5, 5), Some(date(2020, 6, 25)));
        // 2023 repeats the 2nd month.
        assert_eq!(cal.to_solar(2023, 3, 1), Some(date(2023, 4, 20)));
        assert_eq!(cal.to_solar(2033, 12, 1), Some(date(2034, 1, 20)));
    }

    #[test]
    fn invalid_lunar_dates() {
        let cal = ChineseLunisolar::new();
        assert!(cal.to_solar(2023, 0, 1).is_none());
        assert!(cal.to_solar(2023, 13, 1).is_none());
        assert!(cal.to_solar(2023, 1, 0).is_none());
        // The 1st month of 2023 has 29 days, the 12th has 30.
        assert!(cal.to_solar(2023, 1, 30).is_none());
        assert_eq!(cal.to_solar(2023, 12, 30), Some(date(2024, 2, 9)));
    }

    #[test]
    fn years_are_contiguous() {
        let cal = ChineseLunisolar::new();
        for y in ChineseLunisolar::START_YEAR..ChineseLunisolar::END_YEAR {
            let start = cal.new_year(y).unwrap();
            let next = cal.new_year(y + 1).unwrap();
            assert_eq!(next - start, cal.year_length(y).unwrap());
            assert!((date(y, 1, 21)..=date(y, 2, 20)).contains(&start), "{y}: {start}");
        }
    }
}

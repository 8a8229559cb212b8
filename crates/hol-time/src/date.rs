//! `Date` type and weekday arithmetic.
//!
//! Dates are stored as a **Rata Die** day number on the proleptic Gregorian
//! calendar: serial 1 is January 1 of year 1 (a Monday).  The valid range is
//! 0001-01-01 to 9999-12-31, which comfortably covers every holiday rule,
//! including rules that look one year back or forward.
//!
//! The weekday helpers used by rule sets (`nth_weekday_of_month`,
//! `weekday_on_or_before`, `weekday_on_or_after`, `is_weekend`, …) live here
//! as methods so that they compose with plain `Date + i32` arithmetic.

use std::str::FromStr;

use crate::month::Month;
use crate::weekday::Weekday;
use hol_core::errors::{Error, Result};
use hol_core::{ensure, Year};

/// A calendar date represented as a Rata Die serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

/// Serial of 1970-01-01, the epoch of the civil-days conversion below.
const UNIX_EPOCH_SERIAL: i32 = 719_163;

impl Date {
    /// First supported year.
    pub const MIN_YEAR: Year = 1;

    /// Last supported year.
    pub const MAX_YEAR: Year = 9999;

    /// Minimum valid date: January 1, 0001.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 9999.
    pub const MAX: Date = Date(3_652_059);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number (1 = 0001-01-01).
    pub fn from_serial(serial: i32) -> Result<Self> {
        let d = Date(serial);
        if d < Self::MIN || d > Self::MAX {
            return Err(Error::Date(format!(
                "serial {serial} out of range [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(d)
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: Year, month: u8, day: u8) -> Result<Self> {
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [{}, {}]",
                Self::MIN_YEAR,
                Self::MAX_YEAR
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Self::from_ymd_unchecked(year, month, day))
    }

    /// Create a date from components already known to be valid.
    pub(crate) const fn from_ymd_unchecked(year: Year, month: u8, day: u8) -> Self {
        Date(days_from_civil(year, month, day) + UNIX_EPOCH_SERIAL)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year.
    pub fn year(&self) -> Year {
        civil_from_days(self.0 - UNIX_EPOCH_SERIAL).0
    }

    /// Return the month.
    pub fn month(&self) -> Month {
        let m = civil_from_days(self.0 - UNIX_EPOCH_SERIAL).1;
        Month::ALL[usize::from(m) - 1]
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        civil_from_days(self.0 - UNIX_EPOCH_SERIAL).2
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let jan1 = Self::from_ymd_unchecked(self.year(), 1, 1);
        (self.0 - jan1.0 + 1) as u16
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // Serial 1 (0001-01-01) is a Monday.
        let w = ((self.0 - 1).rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(w).expect("rem_euclid always in 1..=7")
    }

    /// `true` on Saturdays and Sundays.
    pub fn is_weekend(&self) -> bool {
        self.weekday().is_weekend()
    }

    /// `true` on Saturdays.
    pub fn is_saturday(&self) -> bool {
        self.weekday() == Weekday::Saturday
    }

    /// `true` on Sundays.
    pub fn is_sunday(&self) -> bool {
        self.weekday() == Weekday::Sunday
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let serial = self
            .0
            .checked_add(n)
            .ok_or_else(|| Error::Date(format!("date arithmetic overflow: {self} + {n}")))?;
        Self::from_serial(serial)
    }

    /// Return the number of calendar days from `self` to `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    /// The first `weekday` falling on or after `self`.
    pub fn weekday_on_or_after(self, weekday: Weekday) -> Self {
        self + self.weekday().days_until(weekday)
    }

    /// The last `weekday` falling on or before `self`.
    pub fn weekday_on_or_before(self, weekday: Weekday) -> Self {
        self - weekday.days_until(self.weekday())
    }

    /// Return the *n*-th occurrence of `weekday` in `year`/`month`.
    ///
    /// Positive `n` counts from the start of the month (1 = first), negative
    /// `n` from the end (-1 = last).  For example the last Monday of May 2024:
    ///
    /// ```
    /// use hol_time::{Date, Weekday};
    /// let d = Date::nth_weekday_of_month(2024, 5, Weekday::Monday, -1).unwrap();
    /// assert_eq!(d.to_string(), "2024-05-27");
    /// ```
    ///
    /// # Errors
    /// Returns an error if `n` is zero, if the month has fewer than `|n|`
    /// such weekdays, or if the month itself is invalid.
    pub fn nth_weekday_of_month(year: Year, month: u8, weekday: Weekday, n: i32) -> Result<Self> {
        ensure!(n != 0, "nth_weekday_of_month: n must be non-zero");
        let first = Date::from_ymd(year, month, 1)?;
        let last_day = days_in_month(year, month);
        let day = if n > 0 {
            1 + first.weekday().days_until(weekday) + 7 * (n - 1)
        } else {
            let last = Self::from_ymd_unchecked(year, month, last_day);
            last_day as i32 - weekday.days_until(last.weekday()) - 7 * (-n - 1)
        };
        if day < 1 || day > last_day as i32 {
            return Err(Error::Date(format!(
                "nth_weekday_of_month: {n}-th {weekday} does not exist in {year}-{month:02}"
            )));
        }
        Ok(Self::from_ymd_unchecked(year, month, day as u8))
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

impl std::ops::AddAssign<i32> for Date {
    fn add_assign(&mut self, rhs: i32) {
        *self = *self + rhs;
    }
}

impl std::ops::SubAssign<i32> for Date {
    fn sub_assign(&mut self, rhs: i32) {
        *self = *self - rhs;
    }
}

// ── Formatting and parsing ────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = civil_from_days(self.0 - UNIX_EPOCH_SERIAL);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

/// Parses ISO `YYYY-MM-DD`.
impl FromStr for Date {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let parse_err = || Error::Parse(s.to_string());
        let mut parts = s.trim().splitn(3, '-');
        let (Some(y), Some(m), Some(d)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(parse_err());
        };
        if y.len() != 4 || m.len() != 2 || d.len() != 2 {
            return Err(parse_err());
        }
        let all_digits = |p: &str| p.bytes().all(|b| b.is_ascii_digit());
        if !(all_digits(y) && all_digits(m) && all_digits(d)) {
            return Err(parse_err());
        }
        let year: Year = y.parse().map_err(|_| parse_err())?;
        let month: u8 = m.parse().map_err(|_| parse_err())?;
        let day: u8 = d.parse().map_err(|_| parse_err())?;
        Date::from_ymd(year, month, day)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Date {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ── chrono interop ────────────────────────────────────────────────────────────

#[cfg(feature = "chrono")]
impl From<Date> for chrono::NaiveDate {
    fn from(d: Date) -> Self {
        // Both count 0001-01-01 as day 1.
        chrono::NaiveDate::from_num_days_from_ce_opt(d.0)
            .expect("every Date is within chrono's range")
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<chrono::NaiveDate> for Date {
    type Error = Error;

    fn try_from(d: chrono::NaiveDate) -> Result<Self> {
        use chrono::Datelike;
        Date::from_serial(d.num_days_from_ce())
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: Year) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: Year, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => unreachable!(),
    }
}

/// Days since 1970-01-01 for a proleptic Gregorian date.
///
/// Works on 400-year eras starting in March so that the leap day is the
/// last day of the computational year.
const fn days_from_civil(year: Year, month: u8, day: u8) -> i32 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = (month as i32 + 9) % 12;
    let doy = (153 * mp + 2) / 5 + day as i32 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Inverse of [`days_from_civil`].
fn civil_from_days(days: i32) -> (Year, u8, u8) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let m = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
    let y = yoe + era * 400;
    (if m <= 2 { y + 1 } else { y }, m, d)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

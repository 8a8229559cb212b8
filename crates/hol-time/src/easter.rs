//! Western (Gregorian) Easter.
//!
//! Uses the anonymous Gregorian computus (Meeus/Jones/Butcher), valid for
//! every year of the Gregorian calendar and, proleptically, before it.

use crate::date::Date;
use hol_core::errors::Result;
use hol_core::Year;

/// Easter Sunday of `year`.
///
/// ```
/// use hol_time::easter_sunday;
/// assert_eq!(easter_sunday(2024).unwrap().to_string(), "2024-03-31");
/// ```
///
/// # Errors
/// Only when `year` is outside the representable [`Date`] range.
pub fn easter_sunday(year: Year) -> Result<Date> {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    Date::from_ymd(year, month as u8, day as u8)
}

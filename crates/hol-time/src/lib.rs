//! # hol-time
//!
//! Calendar primitives for the holiday engine: a proleptic Gregorian
//! [`Date`], the [`Weekday`] and [`Month`] enums, weekday arithmetic, and
//! the movable-feast calculators (Western Easter, the Thai lunisolar
//! Buddhist calendar and the Chinese lunisolar calendar).

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Chinese lunisolar calendar (traditional festivals).
pub mod chinese_lunar;

/// `Date` type and weekday arithmetic.
pub mod date;

/// Gregorian ecclesiastical Easter.
pub mod easter;

/// `Month`, the month of the year.
pub mod month;

/// Thai lunisolar calendar (Buddhist feast days).
pub mod thai_lunar;

/// `Weekday`, the day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use chinese_lunar::{ChineseFestival, ChineseLunisolar};
pub use date::Date;
pub use easter::easter_sunday;
pub use month::Month;
pub use thai_lunar::{ThaiFeast, ThaiLunisolar, ThaiYearKind};
pub use weekday::Weekday;

//! Hong Kong holiday integration tests.
//!
//! Covers the Lunar New Year variants, the Sunday "day following" rule,
//! the Mid-Autumn eras and the Ching Ming / Easter Monday interplay.

use std::sync::Arc;

use hol_calendars::{HolidayMap, HongKong, Registry};
use hol_core::JurisdictionConfig;
use hol_time::{Date, Weekday};
use proptest::prelude::*;

fn date(y: i32, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn hong_kong(observed: bool) -> HolidayMap {
    HolidayMap::new(
        Arc::new(HongKong::new()),
        JurisdictionConfig::default().with_observed(observed),
    )
    .unwrap()
}

fn label(map: &HolidayMap, y: i32, m: u8, d: u8) -> Option<String> {
    map.label_of(date(y, m, d))
}

fn assert_year(map: &HolidayMap, year: i32, expected: &[((u8, u8), &str)]) {
    let got: Vec<_> = map
        .range(date(year, 1, 1), date(year, 12, 31))
        .into_iter()
        .map(|e| (e.date, e.label))
        .collect();
    let expected: Vec<_> = expected
        .iter()
        .map(|&((m, d), l)| (date(year, m, d), l.to_string()))
        .collect();
    assert_eq!(got, expected);
}

// ─── Whole years ──────────────────────────────────────────────────────────────

#[test]
fn year_2023() {
    assert_year(
        &hong_kong(true),
        2023,
        &[
            ((1, 2), "The day following the first day of January"),
            ((1, 22), "Lunar New Year's Day"),
            ((1, 23), "The second day of Lunar New Year"),
            ((1, 24), "The third day of Lunar New Year"),
            ((1, 25), "The fourth day of Lunar New Year"),
            ((4, 5), "Ching Ming Festival"),
            ((4, 7), "Good Friday"),
            ((4, 8), "The day following Good Friday"),
            ((4, 10), "Easter Monday"),
            ((5, 1), "Labour Day"),
            ((5, 26), "Birthday of the Buddha"),
            ((6, 22), "Tuen Ng Festival"),
            ((7, 1), "Hong Kong Special Administrative Region Establishment Day"),
            ((9, 30), "The day following the Chinese Mid-Autumn Festival"),
            ((10, 2), "The day following National Day"),
            ((10, 23), "Chung Yeung Festival"),
            ((12, 25), "Christmas Day"),
            ((12, 26), "The first weekday after Christmas Day"),
        ],
    );
}

#[test]
fn year_2022() {
    assert_year(
        &hong_kong(true),
        2022,
        &[
            ((1, 1), "The first day of January"),
            ((2, 1), "Lunar New Year's Day"),
            ((2, 2), "The second day of Lunar New Year"),
            ((2, 3), "The third day of Lunar New Year"),
            ((4, 5), "Ching Ming Festival"),
            ((4, 15), "Good Friday"),
            ((4, 16), "The day following Good Friday"),
            ((4, 18), "Easter Monday"),
            ((5, 2), "The day following Labour Day"),
            ((5, 9), "The day following Birthday of the Buddha"),
            ((6, 3), "Tuen Ng Festival"),
            ((7, 1), "Hong Kong Special Administrative Region Establishment Day"),
            ((9, 12), "The second day of the Chinese Mid-Autumn Festival (Monday)"),
            ((10, 1), "National Day"),
            ((10, 4), "Chung Yeung Festival"),
            ((12, 25), "Christmas Day"),
            ((12, 26), "The first weekday after Christmas Day"),
            ((12, 27), "The second weekday after Christmas Day"),
        ],
    );
}

#[test]
fn year_2023_without_observed() {
    assert_year(
        &hong_kong(false),
        2023,
        &[
            ((1, 1), "The first day of January"),
            ((1, 22), "Lunar New Year's Day"),
            ((1, 23), "The second day of Lunar New Year"),
            ((1, 24), "The third day of Lunar New Year"),
            ((4, 5), "Ching Ming Festival"),
            ((4, 7), "Good Friday"),
            ((4, 8), "The day following Good Friday"),
            ((4, 10), "Easter Monday"),
            ((5, 1), "Labour Day"),
            ((5, 26), "Birthday of the Buddha"),
            ((6, 22), "Tuen Ng Festival"),
            ((7, 1), "Hong Kong Special Administrative Region Establishment Day"),
            ((9, 29), "Chinese Mid-Autumn Festival"),
            ((10, 1), "National Day"),
            ((10, 23), "Chung Yeung Festival"),
            ((12, 25), "Christmas Day"),
            ((12, 26), "The day following Christmas Day"),
        ],
    );
}

#[test]
fn year_2024_saturday_new_year() {
    assert_year(
        &hong_kong(true),
        2024,
        &[
            ((1, 1), "The first day of January"),
            ((2, 10), "Lunar New Year's Day"),
            ((2, 12), "The third day of Lunar New Year"),
            ((2, 13), "The fourth day of Lunar New Year"),
            ((3, 29), "Good Friday"),
            ((3, 30), "The day following Good Friday"),
            ((4, 1), "Easter Monday"),
            ((4, 4), "Ching Ming Festival"),
            ((5, 1), "Labour Day"),
            ((5, 15), "Birthday of the Buddha"),
            ((6, 10), "Tuen Ng Festival"),
            ((7, 1), "Hong Kong Special Administrative Region Establishment Day"),
            ((9, 18), "The day following the Chinese Mid-Autumn Festival"),
            ((10, 1), "National Day"),
            ((10, 11), "Chung Yeung Festival"),
            ((12, 25), "Christmas Day"),
            ((12, 26), "The first weekday after Christmas Day"),
        ],
    );
}

// ─── Lunar New Year ───────────────────────────────────────────────────────────

#[test]
fn sunday_new_year_gives_the_eve_in_some_years() {
    let map = hong_kong(true);
    for (y, m, d) in [(2006, 1, 28), (2007, 2, 17), (2010, 2, 13)] {
        assert_eq!(
            label(&map, y, m, d).as_deref(),
            Some("The day preceding Lunar New Year's Day"),
            "{y}"
        );
    }
    assert!(label(&map, 2010, 2, 17).is_none());
    // 2013 uses the fourth day instead.
    assert!(label(&map, 2013, 2, 9).is_none());
    assert_eq!(
        label(&map, 2013, 2, 13).as_deref(),
        Some("The fourth day of Lunar New Year")
    );
}

#[test]
fn friday_new_year_skips_the_sunday() {
    let map = hong_kong(true);
    assert_eq!(label(&map, 2021, 2, 13).as_deref(), Some("The second day of Lunar New Year"));
    assert!(label(&map, 2021, 2, 14).is_none());
    assert_eq!(label(&map, 2021, 2, 15).as_deref(), Some("The fourth day of Lunar New Year"));
}

// ─── Ching Ming and Easter ────────────────────────────────────────────────────

#[test]
fn ching_ming_on_easter_monday() {
    let map = hong_kong(true);
    // 2010: Ching Ming itself is Easter Monday.
    assert_eq!(label(&map, 2010, 4, 5).as_deref(), Some("Ching Ming Festival"));
    assert_eq!(label(&map, 2010, 4, 6).as_deref(), Some("The day following Easter Monday"));
    // 2015: Sunday Ching Ming moves onto Easter Monday.
    assert_eq!(
        label(&map, 2015, 4, 6).as_deref(),
        Some("The day following Ching Ming Festival")
    );
    assert_eq!(label(&map, 2015, 4, 7).as_deref(), Some("The day following Easter Monday"));
}

#[test]
fn ching_ming_day_follows_leap_years() {
    let map = hong_kong(false);
    assert!(map.contains(date(2020, 4, 4)));
    assert!(map.contains(date(2021, 4, 4)));
    assert!(map.contains(date(2022, 4, 5)));
    assert!(map.contains(date(2008, 4, 4)));
    assert!(map.contains(date(2009, 4, 4)));
    assert!(map.contains(date(2007, 4, 5)));
}

// ─── Mid-Autumn and National Day ──────────────────────────────────────────────

#[test]
fn mid_autumn_holiday_can_push_national_day() {
    let map = hong_kong(true);
    // 2020: festival Oct 1, holiday Oct 2, National Day stays.
    assert_eq!(label(&map, 2020, 10, 1).as_deref(), Some("National Day"));
    assert_eq!(
        label(&map, 2020, 10, 2).as_deref(),
        Some("The day following the Chinese Mid-Autumn Festival")
    );
    // 2006: National Day on a Sunday.
    assert_eq!(label(&map, 2006, 10, 2).as_deref(), Some("The day following National Day"));
}

#[test]
fn saturday_mid_autumn_between_1983_and_2010_stays() {
    let map = hong_kong(true);
    assert_eq!(label(&map, 2009, 10, 3).as_deref(), Some("Chinese Mid-Autumn Festival"));
    assert!(label(&map, 2009, 10, 5).is_none());
}

// ─── Specials, range and aliases ──────────────────────────────────────────────

#[test]
fn victory_anniversary_2015() {
    let map = hong_kong(false);
    let label = label(&map, 2015, 9, 3).unwrap();
    assert!(label.starts_with("The 70th anniversary day of the victory"));
    assert!(label.ends_with("war of resistance against Japanese aggression"));
    assert!(!map.contains(date(2016, 9, 3)));
}

#[test]
fn years_outside_the_lunar_table_are_empty() {
    let holidays = Registry::global().get_holidays("HK", [1899, 2101], true).unwrap();
    assert!(holidays.is_empty());
    let holidays = Registry::global().get_holidays("HK", [1900, 2100], true).unwrap();
    assert!(!holidays.is_empty());
}

#[test]
fn aliases_behave_identically() {
    let registry = Registry::global();
    let hk = registry.get_holidays("HK", 2005..=2007, true).unwrap();
    let hkg = registry.get_holidays("hkg", 2005..=2007, true).unwrap();
    assert_eq!(hk, hkg);
    assert_eq!(registry.rule_set("HKG").unwrap().name(), "Hong Kong");
}

// ─── Properties ───────────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn observed_holidays_rarely_fall_on_sunday(year in 1900i32..=2100) {
        // National Day is pushed onto a Sunday when the Mid-Autumn holiday
        // takes a Saturday Oct 1 (1955, 2050).
        let allowed = [
            "Lunar New Year's Day",
            "Christmas Day",
            "The day following National Day",
        ];
        let map = hong_kong(true);
        for entry in map.range(date(year, 1, 1), date(year, 12, 31)) {
            if entry.date.weekday() == Weekday::Sunday {
                prop_assert!(
                    allowed.contains(&entry.label.as_str()),
                    "{} {}", entry.date, entry.label
                );
            }
        }
    }

    #[test]
    fn every_year_has_the_lunar_festivals(year in 1900i32..=2100, observed: bool) {
        let map = hong_kong(observed);
        let labels: Vec<String> = map
            .range(date(year, 1, 1), date(year, 12, 31))
            .into_iter()
            .map(|e| e.label)
            .collect();
        for festival in ["Lunar New Year's Day", "Tuen Ng Festival", "Chung Yeung Festival"] {
            prop_assert!(labels.iter().any(|l| l.ends_with(festival)), "{} {}", year, festival);
        }
    }
}

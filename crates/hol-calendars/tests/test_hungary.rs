//! Hungarian holiday integration tests.
//!
//! Covers the legislative eras (Soviet-period holidays, the 1955 omissions,
//! Good Friday from 2017) and the Tuesday/Thursday rest days.

use std::sync::Arc;

use hol_calendars::{HolidayMap, Hungary};
use hol_core::JurisdictionConfig;
use hol_time::Date;

fn date(y: i32, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn hungary(observed: bool) -> HolidayMap {
    HolidayMap::new(
        Arc::new(Hungary),
        JurisdictionConfig::default().with_observed(observed),
    )
    .unwrap()
}

fn year_labels(map: &HolidayMap, year: i32) -> Vec<(String, String)> {
    map.range(date(year, 1, 1), date(year, 12, 31))
        .into_iter()
        .map(|e| (e.date.to_string(), e.label))
        .collect()
}

#[test]
fn year_2023() {
    let map = hungary(true);
    let expected = [
        ("2023-01-01", "Újév"),
        ("2023-03-15", "Nemzeti ünnep"),
        ("2023-04-07", "Nagypéntek"),
        ("2023-04-09", "Húsvét"),
        ("2023-04-10", "Húsvét Hétfő"),
        ("2023-05-01", "A Munka ünnepe"),
        ("2023-05-28", "Pünkösd"),
        ("2023-05-29", "Pünkösdhétfő"),
        ("2023-08-20", "Az államalapítás ünnepe"),
        ("2023-10-23", "Nemzeti ünnep"),
        ("2023-11-01", "Mindenszentek"),
        ("2023-12-25", "Karácsony"),
        ("2023-12-26", "Karácsony másnapja"),
    ];
    let expected: Vec<_> = expected
        .iter()
        .map(|(d, l)| (d.to_string(), l.to_string()))
        .collect();
    assert_eq!(year_labels(&map, 2023), expected);
}

#[test]
fn year_1955_omits_easter_monday_and_boxing_day() {
    let map = hungary(true);
    assert!(map.contains(date(1955, 4, 10)));
    assert!(!map.contains(date(1955, 4, 11)));
    assert!(map.contains(date(1955, 12, 25)));
    assert!(!map.contains(date(1955, 12, 26)));
    assert_eq!(year_labels(&map, 1955).len(), 9);
    assert_eq!(
        map.label_of(date(1955, 11, 7)).as_deref(),
        Some("A nagy októberi szocialista forradalom ünnepe")
    );
}

#[test]
fn year_1956_has_easter_monday() {
    let map = hungary(true);
    assert_eq!(map.label_of(date(1956, 4, 2)).as_deref(), Some("Húsvét Hétfő"));
    assert!(map.contains(date(1956, 12, 26)));
    // No Nov 7 in 1956.
    assert!(!map.contains(date(1956, 11, 7)));
}

#[test]
fn good_friday_from_2017() {
    let map = hungary(true);
    // Good Friday 2016 was Mar 25.
    assert!(!map.contains(date(2016, 3, 25)));
    assert!(map.get_named("Nagypéntek").is_empty());
    assert_eq!(map.label_of(date(2017, 4, 14)).as_deref(), Some("Nagypéntek"));
}

#[test]
fn good_friday_era_gate_over_all_years() {
    let map = hungary(true);
    map.range(date(1901, 1, 1), date(2060, 12, 31));
    let fridays = map.get_named("Nagypéntek");
    let expected: Vec<Date> = (2017..=2060)
        .map(|y| hol_time::easter_sunday(y).unwrap() - 2)
        .collect();
    assert_eq!(fridays, expected);
}

#[test]
fn rest_days_around_tuesday_and_thursday() {
    let map = hungary(true);
    assert_eq!(
        map.label_of(date(2019, 8, 19)).as_deref(),
        Some("Az államalapítás ünnepe előtti pihenőnap")
    );
    assert_eq!(map.label_of(date(2019, 12, 24)).as_deref(), Some("Szenteste"));
    assert_eq!(
        map.label_of(date(2019, 12, 27)).as_deref(),
        Some("Karácsony másnapja utáni pihenőnap")
    );
    assert_eq!(year_labels(&map, 2019).len(), 16);
}

#[test]
fn observed_off_drops_rest_days() {
    let map = hungary(false);
    assert!(!map.contains(date(2019, 8, 19)));
    assert!(!map.contains(date(2019, 12, 24)));
    assert!(!map.contains(date(2019, 12, 27)));
    assert_eq!(year_labels(&map, 2024).len(), 13);
}

#[test]
fn monday_new_years_eve_is_szilveszter() {
    let map = hungary(true);
    assert_eq!(map.label_of(date(2018, 12, 31)).as_deref(), Some("Szilveszter"));
}

#[test]
fn aliases_behave_identically() {
    let registry = hol_calendars::Registry::global();
    let hu = registry.get_holidays("HU", 2010..=2012, true).unwrap();
    let hun = registry.get_holidays("HUN", 2010..=2012, true).unwrap();
    assert_eq!(hu, hun);
}

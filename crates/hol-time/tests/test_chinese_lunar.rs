//! Chinese lunisolar calendar against published festival dates.

use hol_time::{ChineseFestival, ChineseLunisolar, Date};
use proptest::prelude::*;

fn date(y: i32, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

const FESTIVALS: [ChineseFestival; 5] = [
    ChineseFestival::LunarNewYear,
    ChineseFestival::BuddhasBirthday,
    ChineseFestival::TuenNg,
    ChineseFestival::MidAutumn,
    ChineseFestival::ChungYeung,
];

#[test]
fn published_dates() {
    let cal = ChineseLunisolar::new();
    let expected = [
        (2016, [(2, 8), (5, 14), (6, 9), (9, 15), (10, 9)]),
        (2017, [(1, 28), (5, 3), (5, 30), (10, 4), (10, 28)]),
        (2018, [(2, 16), (5, 22), (6, 18), (9, 24), (10, 17)]),
        (2019, [(2, 5), (5, 12), (6, 7), (9, 13), (10, 7)]),
        (2020, [(1, 25), (4, 30), (6, 25), (10, 1), (10, 25)]),
        (2021, [(2, 12), (5, 19), (6, 14), (9, 21), (10, 14)]),
        (2022, [(2, 1), (5, 8), (6, 3), (9, 10), (10, 4)]),
        (2023, [(1, 22), (5, 26), (6, 22), (9, 29), (10, 23)]),
        (2024, [(2, 10), (5, 15), (6, 10), (9, 17), (10, 11)]),
        (2025, [(1, 29), (5, 5), (5, 31), (10, 6), (10, 29)]),
    ];
    for (year, dates) in expected {
        for (festival, (m, d)) in FESTIVALS.iter().zip(dates) {
            assert_eq!(
                cal.festival_date(year, *festival),
                Some(date(year, m, d)),
                "{year} {festival:?}"
            );
        }
    }
}

#[test]
fn new_year_is_first_festival() {
    let cal = ChineseLunisolar::new();
    for year in ChineseLunisolar::START_YEAR..=ChineseLunisolar::END_YEAR {
        assert_eq!(
            cal.festival_date(year, ChineseFestival::LunarNewYear),
            cal.new_year(year)
        );
    }
}

proptest! {
    #[test]
    fn festivals_stay_in_their_seasons(year in 1900i32..=2100) {
        let cal = ChineseLunisolar::new();
        let windows = [
            (date(year, 1, 21), date(year, 2, 20)),
            (date(year, 4, 28), date(year, 5, 29)),
            (date(year, 5, 27), date(year, 6, 26)),
            (date(year, 9, 7), date(year, 10, 8)),
            (date(year, 10, 1), date(year, 11, 1)),
        ];
        for (festival, (lo, hi)) in FESTIVALS.iter().zip(windows) {
            let d = cal.festival_date(year, *festival).unwrap();
            prop_assert!(lo <= d && d <= hi, "{} {:?}: {}", year, festival, d);
        }
    }
}

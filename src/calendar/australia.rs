//! Built-in Australian public holidays, 2024–2026.
//!
//! National holidays carry the `ALL` token. State and territory holidays
//! carry their jurisdiction codes (ACT, NSW, NT, QLD, SA, TAS, VIC, WA).
//! Where two regions observe differently-named holidays on the same day,
//! each is its own entry.

use crate::models::{CalendarDate, HolidayFact};

pub(super) const VERSION: &str = "au-2024.2026-r1";

type Row = (u32, u32, i32, &'static str, &'static [&'static str]);

const ALL: &[&str] = &["ALL"];
const EASTER_SATURDAY: &[&str] = &["ACT", "NSW", "NT", "QLD", "SA", "VIC"];
const KINGS_BIRTHDAY: &[&str] = &["ACT", "NSW", "NT", "SA", "TAS", "VIC"];

#[rustfmt::skip]
const ROWS: &[Row] = &[
    // 2024
    (1, 1, 2024, "New Year's Day", ALL),
    (26, 1, 2024, "Australia Day", ALL),
    (4, 3, 2024, "Labour Day", &["WA"]),
    (11, 3, 2024, "Labour Day", &["VIC"]),
    (11, 3, 2024, "Canberra Day", &["ACT"]),
    (11, 3, 2024, "Adelaide Cup Day", &["SA"]),
    (11, 3, 2024, "Eight Hours Day", &["TAS"]),
    (29, 3, 2024, "Good Friday", ALL),
    (30, 3, 2024, "Easter Saturday", EASTER_SATURDAY),
    (1, 4, 2024, "Easter Monday", ALL),
    (25, 4, 2024, "Anzac Day", ALL),
    (6, 5, 2024, "May Day", &["NT"]),
    (6, 5, 2024, "Labour Day", &["QLD"]),
    (3, 6, 2024, "Western Australia Day", &["WA"]),
    (10, 6, 2024, "King's Birthday", KINGS_BIRTHDAY),
    (23, 9, 2024, "King's Birthday", &["WA"]),
    (7, 10, 2024, "Labour Day", &["ACT", "NSW", "SA"]),
    (7, 10, 2024, "King's Birthday", &["QLD"]),
    (5, 11, 2024, "Melbourne Cup Day", &["VIC"]),
    (25, 12, 2024, "Christmas Day", ALL),
    (26, 12, 2024, "Boxing Day", ALL),
    // 2025
    (1, 1, 2025, "New Year's Day", ALL),
    (27, 1, 2025, "Australia Day", ALL),
    (3, 3, 2025, "Labour Day", &["WA"]),
    (10, 3, 2025, "Labour Day", &["VIC"]),
    (10, 3, 2025, "Canberra Day", &["ACT"]),
    (10, 3, 2025, "Adelaide Cup Day", &["SA"]),
    (10, 3, 2025, "Eight Hours Day", &["TAS"]),
    (18, 4, 2025, "Good Friday", ALL),
    (19, 4, 2025, "Easter Saturday", EASTER_SATURDAY),
    (21, 4, 2025, "Easter Monday", ALL),
    (25, 4, 2025, "Anzac Day", ALL),
    (5, 5, 2025, "May Day", &["NT"]),
    (5, 5, 2025, "Labour Day", &["QLD"]),
    (2, 6, 2025, "Western Australia Day", &["WA"]),
    (9, 6, 2025, "King's Birthday", KINGS_BIRTHDAY),
    (29, 9, 2025, "King's Birthday", &["WA"]),
    (6, 10, 2025, "Labour Day", &["ACT", "NSW", "SA"]),
    (6, 10, 2025, "King's Birthday", &["QLD"]),
    (4, 11, 2025, "Melbourne Cup Day", &["VIC"]),
    (25, 12, 2025, "Christmas Day", ALL),
    (26, 12, 2025, "Boxing Day", ALL),
    // 2026
    (1, 1, 2026, "New Year's Day", ALL),
    (26, 1, 2026, "Australia Day", ALL),
    (2, 3, 2026, "Labour Day", &["WA"]),
    (9, 3, 2026, "Labour Day", &["VIC"]),
    (9, 3, 2026, "Canberra Day", &["ACT"]),
    (9, 3, 2026, "Adelaide Cup Day", &["SA"]),
    (9, 3, 2026, "Eight Hours Day", &["TAS"]),
    (3, 4, 2026, "Good Friday", ALL),
    (4, 4, 2026, "Easter Saturday", EASTER_SATURDAY),
    (6, 4, 2026, "Easter Monday", ALL),
    (25, 4, 2026, "Anzac Day", ALL),
    (4, 5, 2026, "May Day", &["NT"]),
    (4, 5, 2026, "Labour Day", &["QLD"]),
    (1, 6, 2026, "Western Australia Day", &["WA"]),
    (8, 6, 2026, "King's Birthday", KINGS_BIRTHDAY),
    (28, 9, 2026, "King's Birthday", &["WA"]),
    (5, 10, 2026, "Labour Day", &["ACT", "NSW", "SA"]),
    (5, 10, 2026, "King's Birthday", &["QLD"]),
    (3, 11, 2026, "Melbourne Cup Day", &["VIC"]),
    (25, 12, 2026, "Christmas Day", ALL),
    (26, 12, 2026, "Boxing Day", ALL),
    (28, 12, 2026, "Boxing Day (substitute)", ALL),
];

pub(super) fn facts() -> impl Iterator<Item = HolidayFact> {
    ROWS.iter().filter_map(|&(day, month, year, name, jurisdictions)| {
        CalendarDate::from_ymd(year, month, day)
            .map(|date| HolidayFact::new(date, name, jurisdictions.iter().copied()))
    })
}

//! French month and weekday names, keyed by their lowercase accent-stripped
//! spelling (the form the preprocessor produces).

use chrono::Weekday;

pub(crate) const MONTHS: [(&str, u32); 12] = [
    ("janvier", 1),
    ("fevrier", 2),
    ("mars", 3),
    ("avril", 4),
    ("mai", 5),
    ("juin", 6),
    ("juillet", 7),
    ("aout", 8),
    ("septembre", 9),
    ("octobre", 10),
    ("novembre", 11),
    ("decembre", 12),
];

pub(crate) const WEEKDAYS: [(&str, Weekday); 7] = [
    ("lundi", Weekday::Mon),
    ("mardi", Weekday::Tue),
    ("mercredi", Weekday::Wed),
    ("jeudi", Weekday::Thu),
    ("vendredi", Weekday::Fri),
    ("samedi", Weekday::Sat),
    ("dimanche", Weekday::Sun),
];

pub(crate) fn month(name: &str) -> Option<u32> {
    MONTHS
        .iter()
        .find_map(|(label, number)| (*label == name).then_some(*number))
}

pub(crate) fn weekday(name: &str) -> Option<Weekday> {
    WEEKDAYS
        .iter()
        .find_map(|(label, day)| (*label == name).then_some(*day))
}

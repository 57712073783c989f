use chrono::{Datelike, Days, NaiveDate, Weekday};

use engine::{DateNormalizer, EngineError, ErrorKind, MinorUnits, normalize_amount, normalize_date};

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn amount(raw: &str) -> i64 {
    normalize_amount(raw).unwrap().minor()
}

#[test]
fn spoken_amounts() {
    assert_eq!(amount("150"), 15_000);
    assert_eq!(amount("150,5"), 15_050);
    assert_eq!(amount("1 234,56 dhs"), 123_456);
    assert_eq!(amount("45 dirhams"), 4_500);
    assert_eq!(amount("1,234.56"), 123_456);
}

#[test]
fn unrecognized_amounts() {
    for raw in ["", "dirhams", "12.34.56", "cinquante"] {
        let err = normalize_amount(raw).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AmountNotRecognized, "{raw}");
        assert_eq!(err.to_string(), "Montant non reconnu.");
    }
}

#[test]
fn sole_separator_with_two_digits_is_exact() {
    for major in [0_i64, 1, 7, 42, 999, 1_000, 123_456] {
        for cents in [0_i64, 1, 5, 10, 49, 50, 99] {
            let expected = major * 100 + cents;
            assert_eq!(amount(&format!("{major},{cents:02}")), expected);
            assert_eq!(amount(&format!("{major}.{cents:02}")), expected);
        }
        assert_eq!(amount(&format!("{major},5")), major * 100 + 50);
    }
}

#[test]
fn amount_renderings_read_back() {
    for minor in [0_i64, 1, 99, 100, 15_050, 123_456, 100_000_000, i64::MAX] {
        let value = MinorUnits::new(minor);
        assert_eq!(normalize_amount(&value.to_string()).unwrap(), value);
        assert_eq!(normalize_amount(&value.format_fr()).unwrap(), value);
        assert_eq!(
            normalize_amount(&value.format_with_currency(engine::Currency::Mad)).unwrap(),
            value
        );
    }
}

#[test]
fn absolute_dates_ignore_reference() {
    for reference in [ymd(2000, 1, 1), ymd(2025, 1, 10), ymd(2030, 12, 31)] {
        assert_eq!(normalize_date("2024-03-05", reference).unwrap(), ymd(2024, 3, 5));
        assert_eq!(normalize_date("5/3/2024", reference).unwrap(), ymd(2024, 3, 5));
        assert_eq!(normalize_date("5/3/24", reference).unwrap(), ymd(2024, 3, 5));
    }
}

#[test]
fn relative_dates() {
    let reference = ymd(2025, 1, 10);
    assert_eq!(normalize_date("aujourd hui", reference).unwrap(), reference);
    assert_eq!(normalize_date("Aujourd’hui", reference).unwrap(), reference);
    assert_eq!(normalize_date("hier", reference).unwrap(), ymd(2025, 1, 9));
    assert_eq!(normalize_date("avant-hier", reference).unwrap(), ymd(2025, 1, 8));
    assert_eq!(normalize_date("hier", ymd(2025, 1, 1)).unwrap(), ymd(2024, 12, 31));
}

#[test]
fn named_dates_without_year_stay_in_the_past() {
    let reference = ymd(2025, 1, 10);
    assert_eq!(normalize_date("3 mars", reference).unwrap(), ymd(2024, 3, 3));
    assert_eq!(normalize_date("le 12 Février", reference).unwrap(), ymd(2024, 2, 12));
    assert_eq!(normalize_date("12 fevrier", reference).unwrap(), ymd(2024, 2, 12));
    assert_eq!(normalize_date("5 janvier", reference).unwrap(), ymd(2025, 1, 5));
    assert_eq!(normalize_date("3 mars 2026", reference).unwrap(), ymd(2026, 3, 3));
    assert_eq!(normalize_date("1er août", reference).unwrap(), ymd(2024, 8, 1));
}

#[test]
fn weekday_is_most_recent_on_or_before_reference() {
    let friday = ymd(2025, 1, 10);
    assert_eq!(friday.weekday(), Weekday::Fri);
    let monday = normalize_date("lundi", friday).unwrap();
    assert_eq!(monday, ymd(2025, 1, 6));

    let names = ["lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi", "dimanche"];
    for name in names {
        let date = normalize_date(name, friday).unwrap();
        assert!(date <= friday, "{name}");
        assert!(date > friday.checked_sub_days(Days::new(7)).unwrap(), "{name}");
    }
    assert_eq!(normalize_date("vendredi", friday).unwrap(), friday);
}

#[test]
fn bare_day_walks_back_to_a_month_that_has_it() {
    assert_eq!(normalize_date("31", ymd(2025, 2, 10)).unwrap(), ymd(2025, 1, 31));
    assert_eq!(normalize_date("le 30", ymd(2025, 3, 5)).unwrap(), ymd(2025, 1, 30));
    assert_eq!(normalize_date("10", ymd(2025, 2, 10)).unwrap(), ymd(2025, 2, 10));
    assert_eq!(normalize_date("29", ymd(2024, 3, 1)).unwrap(), ymd(2024, 2, 29));
}

#[test]
fn partial_dates_never_resolve_to_the_future() {
    let reference = ymd(2025, 6, 15);
    for raw in ["20", "31", "14 juillet", "25 decembre", "dimanche", "hier"] {
        let date = normalize_date(raw, reference).unwrap();
        assert!(date <= reference, "{raw} -> {date}");
    }
}

#[test]
fn unrecognized_dates() {
    let reference = ymd(2025, 1, 10);
    for raw in ["", "demain matin", "32", "2024", "fevrier"] {
        let err = normalize_date(raw, reference).unwrap_err();
        assert!(
            matches!(err, EngineError::DateNotRecognized { .. }),
            "{raw}: {err:?}"
        );
        assert_eq!(err.to_string(), "Date non reconnue.");
    }
}

#[test]
fn impossible_dates_fall_through() {
    let reference = ymd(2025, 1, 10);
    assert_eq!(normalize_date("31/02/2024", reference).unwrap(), ymd(2024, 12, 31));
    assert_eq!(normalize_date("31 avril", reference).unwrap(), ymd(2024, 12, 31));
    assert_eq!(normalize_date("30 fevrier 2024", reference).unwrap(), ymd(2024, 12, 30));
    assert_eq!(normalize_date("2024-13-01", reference).unwrap(), ymd(2024, 12, 13));
}

#[test]
fn iso_rendering_is_idempotent() {
    let reference = ymd(2025, 1, 10);
    for raw in ["hier", "3 mars", "lundi", "31", "29/02/24"] {
        let first = normalize_date(raw, reference).unwrap();
        let again = normalize_date(&first.to_string(), reference).unwrap();
        assert_eq!(first, again, "{raw}");
    }
}

#[test]
fn same_input_same_output_across_threads() {
    let reference = ymd(2025, 1, 10);
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(move || {
                (
                    normalize_date("3 mars", reference).unwrap(),
                    normalize_amount("1 234,56 dhs").unwrap(),
                )
            })
        })
        .collect();
    for handle in handles {
        let (date, amount) = handle.join().unwrap();
        assert_eq!(date, ymd(2024, 3, 3));
        assert_eq!(amount.minor(), 123_456);
    }
}

#[test]
fn custom_lookback_bounds_the_bare_day_search() {
    let reference = ymd(2025, 3, 10);
    let short = DateNormalizer::default().with_month_lookback(2);
    assert!(short.parse("31", reference).is_err());
    assert_eq!(
        DateNormalizer::default().parse("31", reference).unwrap(),
        ymd(2025, 1, 31)
    );
}

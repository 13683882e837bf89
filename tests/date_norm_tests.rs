use chrono::{Datelike, NaiveDate};
use itlogbook::core::date_norm::{
    from_wire_date, parse_wire_date, to_short_date, to_short_date_or_dash, to_wire_date,
};

#[test]
fn wire_date_round_trips_through_local_time() {
    for s in ["2024-03-01", "2024-02-29", "2023-12-31", "2025-01-01", "2024-03-31"] {
        let local = from_wire_date(s).expect("valid wire date");
        assert_eq!(to_wire_date(local.date_naive()), s);
    }
}

#[test]
fn first_of_month_keeps_its_day() {
    let dt = from_wire_date("2024-03-01").unwrap();
    assert_eq!((dt.year(), dt.month(), dt.day()), (2024, 3, 1));
}

#[test]
fn wire_date_is_always_ten_chars() {
    let d = NaiveDate::from_ymd_opt(987, 1, 2).unwrap();
    assert_eq!(to_wire_date(d), "0987-01-02");
}

#[test]
fn parse_rejects_non_wire_forms() {
    assert!(parse_wire_date("2024-3-1").is_err());
    assert!(parse_wire_date("01/03/2024").is_err());
    assert!(parse_wire_date("2024-02-30").is_err());
    assert!(parse_wire_date("").is_err());
    assert!(parse_wire_date(" 2024-03-01 ").is_ok());
}

#[test]
fn short_date_uses_format_and_dash_for_missing() {
    let d = NaiveDate::from_ymd_opt(2023, 5, 10).unwrap();
    assert_eq!(to_short_date(d, "%d/%m/%Y"), "10/05/2023");
    assert_eq!(to_short_date_or_dash(None, "%d/%m/%Y"), "-");
    assert_eq!(to_short_date_or_dash(Some(d), "%Y.%m.%d"), "2023.05.10");
}

#[test]
fn broken_format_falls_back_to_wire() {
    let d = NaiveDate::from_ymd_opt(2023, 5, 10).unwrap();
    assert_eq!(to_short_date(d, "%Q"), "2023-05-10");
}

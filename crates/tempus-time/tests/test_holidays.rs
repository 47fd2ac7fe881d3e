//! Holiday resolution across rule kinds, observed shifting, relative
//! chains, and registry failure modes.

use tempus_core::errors::Error;
use tempus_time::{DateTime, HolidayRegistry, HolidayRule, Weekday};

#[test]
fn us_federal_2024() {
    let reg = HolidayRegistry::us_federal();
    let expected = [
        ("New Year's Day", 1, 1),   // Monday, unmoved
        ("MLK Day", 1, 15),         // 3rd Monday
        ("Presidents Day", 2, 19),  // 3rd Monday
        ("Memorial Day", 5, 27),    // last Monday
        ("Juneteenth", 6, 19),      // Wednesday, unmoved
        ("Independence Day", 7, 4), // Thursday, unmoved
        ("Labor Day", 9, 2),        // 1st Monday
        ("Columbus Day", 10, 14),   // 2nd Monday
        ("Veterans Day", 11, 11),   // Monday, unmoved
        ("Thanksgiving", 11, 28),   // 4th Thursday
        ("Christmas", 12, 25),      // Wednesday, unmoved
    ];
    for (name, month, day) in expected {
        let dt = reg.resolve(name, 2024).unwrap();
        assert_eq!((dt.month, dt.day), (month, day), "{name} in 2024");
        assert!(dt.validate());
        assert_ne!(dt.weekday, -1);
    }
}

#[test]
fn observed_shifts_saturday_back_and_sunday_forward() {
    let reg = HolidayRegistry::us_federal();

    // 2021-07-04 was a Sunday → observed Monday July 5.
    let independence = reg.resolve("Independence Day", 2021).unwrap();
    assert_eq!((independence.month, independence.day), (7, 5));
    assert_eq!(independence.weekday, Weekday::Monday.index());

    // 2021-12-25 was a Saturday → observed Friday December 24.
    let christmas = reg.resolve("Christmas", 2021).unwrap();
    assert_eq!((christmas.month, christmas.day), (12, 24));
    assert_eq!(christmas.weekday, Weekday::Friday.index());
}

#[test]
fn nth_weekday_third_monday_of_january_2024() {
    let reg = HolidayRegistry::us_federal();
    let mlk = reg.resolve("MLK Day", 2024).unwrap();
    assert_eq!((mlk.year, mlk.month, mlk.day), (2024, 1, 15));
    assert_eq!(mlk.weekday, 1);
}

#[test]
fn relative_offset_rolls_month_forward() {
    let mut reg = HolidayRegistry::new();
    // 2023-05-31 is a Wednesday; one day later must be June 1.
    reg.register(HolidayRule::fixed("Last of May", 5, 31)).unwrap();
    reg.register(HolidayRule::relative("First of June", "Last of May", 1))
        .unwrap();

    let dt = reg.resolve("First of June", 2023).unwrap();
    assert_eq!((dt.month, dt.day), (6, 1));
    assert_eq!(dt.weekday, Weekday::Thursday.index());
}

#[test]
fn relative_offset_rolls_year_backward() {
    let mut reg = HolidayRegistry::new();
    // 2024-01-01 is a Monday (no observed shift); two days earlier is
    // 2023-12-30.
    reg.register(HolidayRule::fixed("New Year", 1, 1)).unwrap();
    reg.register(HolidayRule::relative("Runup", "New Year", -2))
        .unwrap();

    let dt = reg.resolve("Runup", 2024).unwrap();
    assert_eq!((dt.year, dt.month, dt.day), (2023, 12, 30));
}

#[test]
fn unknown_names_and_cycles_are_distinguishable() {
    let mut reg = HolidayRegistry::new();
    reg.register(HolidayRule::relative("A", "B", 7)).unwrap();
    reg.register(HolidayRule::relative("B", "A", 7)).unwrap();

    assert!(matches!(reg.resolve("missing", 2024), Err(Error::UnknownRule(_))));
    assert!(matches!(reg.resolve("A", 2024), Err(Error::RuleCycle(_))));
}

#[test]
fn is_holiday_reports_first_match_in_registry_order() {
    let mut reg = HolidayRegistry::new();
    reg.register(HolidayRule::fixed("First", 3, 14)).unwrap();
    reg.register(HolidayRule::fixed("Shadow", 3, 14)).unwrap();

    // 2024-03-14 is a Thursday, so neither rule shifts.
    let dt = DateTime::from_ymd(2024, 3, 14);
    assert_eq!(reg.is_holiday(&dt), Some("First"));
}

#[test]
fn resolution_is_per_year() {
    let reg = HolidayRegistry::us_federal();
    // Thanksgiving wanders: Nov 28 in 2024, Nov 27 in 2025.
    assert_eq!(reg.resolve("Thanksgiving", 2024).unwrap().day, 28);
    assert_eq!(reg.resolve("Thanksgiving", 2025).unwrap().day, 27);
}

#[test]
fn list_covers_every_rule_once() {
    let reg = HolidayRegistry::us_federal();
    let dates = reg.list(2023);
    assert_eq!(dates.len(), reg.len());
    // Registry order: first entry is New Year's Day (2023-01-01 was a
    // Sunday, observed Monday the 2nd).
    assert_eq!((dates[0].month, dates[0].day), (1, 2));
}

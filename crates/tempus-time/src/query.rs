//! A small string query DSL evaluated against a `DateTime`.
//!
//! The string form is parsed exactly once, at the boundary, into the
//! closed [`Query`] enum; evaluation switches on enums and never compares
//! strings. Supported forms:
//!
//! * `today` — same civil date as the reference value
//! * `weekend` / `weekday` — Saturday/Sunday vs Monday–Friday
//! * a lowercase day name (`monday` … `sunday`)
//! * `field=value` — equality on one of the field getters
//!   (`year=2024`, `weekday=1`, `tz_offset_minutes=-300`, …)

use crate::date::{precision, DateTime};
use crate::weekday::Weekday;
use tempus_core::{errors::Error, Result};

/// A field a query may read, mirroring the getters on [`DateTime`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Field {
    /// Calendar year.
    Year,
    /// Month of year.
    Month,
    /// Day of month.
    Day,
    /// Hour.
    Hour,
    /// Minute.
    Minute,
    /// Second.
    Second,
    /// Derived weekday (0 = Sunday … 6 = Saturday).
    Weekday,
    /// Derived day of year.
    Yearday,
    /// Milliseconds.
    Millisecond,
    /// Microseconds.
    Microsecond,
    /// Nanoseconds.
    Nanosecond,
    /// Fixed UTC offset in minutes.
    TzOffsetMinutes,
}

impl Field {
    /// Parse a field name. This is the single string boundary for field
    /// identifiers.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "year" => Some(Field::Year),
            "month" => Some(Field::Month),
            "day" => Some(Field::Day),
            "hour" => Some(Field::Hour),
            "minute" => Some(Field::Minute),
            "second" => Some(Field::Second),
            "weekday" => Some(Field::Weekday),
            "yearday" => Some(Field::Yearday),
            "millisecond" => Some(Field::Millisecond),
            "microsecond" => Some(Field::Microsecond),
            "nanosecond" => Some(Field::Nanosecond),
            "tz_offset_minutes" => Some(Field::TzOffsetMinutes),
            _ => None,
        }
    }

    /// Read the field from a date, honoring the precision mask.
    ///
    /// Absent fields (precision bit unset, or a −1 derived-field sentinel)
    /// read as `None`. The tz offset is always meaningful and always reads
    /// as `Some`.
    pub fn get(&self, dt: &DateTime) -> Option<i64> {
        let masked = |bit: u64, value: i64| {
            if dt.has(bit) {
                Some(value)
            } else {
                None
            }
        };
        match self {
            Field::Year => masked(precision::YEAR, i64::from(dt.year)),
            Field::Month => masked(precision::MONTH, i64::from(dt.month)),
            Field::Day => masked(precision::DAY, i64::from(dt.day)),
            Field::Hour => masked(precision::HOUR, i64::from(dt.hour)),
            Field::Minute => masked(precision::MINUTE, i64::from(dt.minute)),
            Field::Second => masked(precision::SECOND, i64::from(dt.second)),
            Field::Weekday => (dt.weekday >= 0).then(|| i64::from(dt.weekday)),
            Field::Yearday => (dt.yearday >= 0).then(|| i64::from(dt.yearday)),
            Field::Millisecond => masked(precision::MILLI, i64::from(dt.millisecond)),
            Field::Microsecond => masked(precision::MICRO, i64::from(dt.microsecond)),
            Field::Nanosecond => masked(precision::NANO, i64::from(dt.nanosecond)),
            Field::TzOffsetMinutes => Some(i64::from(dt.tz_offset_minutes)),
        }
    }
}

/// A parsed query.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Query {
    /// Same civil date as the reference "now" value.
    Today,
    /// Saturday or Sunday.
    Weekend,
    /// Monday through Friday.
    Weekday,
    /// A specific day of the week.
    On(Weekday),
    /// Equality against one field getter.
    Equals {
        /// The field to read.
        field: Field,
        /// The value it must equal.
        value: i64,
    },
}

impl Query {
    /// Parse a query string.
    ///
    /// # Errors
    /// [`Error::UnknownQuery`] when the string matches no query form;
    /// [`Error::InvalidArgument`] when a `field=value` right-hand side is
    /// not an integer.
    pub fn parse(input: &str) -> Result<Query> {
        let input = input.trim();
        match input {
            "today" => return Ok(Query::Today),
            "weekend" => return Ok(Query::Weekend),
            "weekday" => return Ok(Query::Weekday),
            _ => {}
        }
        if let Some(day) = Weekday::from_name(input) {
            return Ok(Query::On(day));
        }
        if let Some((name, raw)) = input.split_once('=') {
            let field = Field::parse(name.trim())
                .ok_or_else(|| Error::UnknownQuery(input.to_string()))?;
            let value = raw
                .trim()
                .parse::<i64>()
                .map_err(|_| Error::InvalidArgument(format!("not an integer: {raw}")))?;
            return Ok(Query::Equals { field, value });
        }
        Err(Error::UnknownQuery(input.to_string()))
    }

    /// Evaluate against a date, with an optional reference "now" value.
    ///
    /// `Today` is false without a reference value; weekday forms are false
    /// while the date's weekday is unknown; `Equals` is false when the
    /// field is absent from the mask. Absence never matches.
    pub fn eval(&self, dt: &DateTime, now: Option<&DateTime>) -> bool {
        match self {
            Query::Today => match now {
                Some(reference) => {
                    let bits = precision::CIVIL_DATE;
                    dt.has(bits)
                        && reference.has(bits)
                        && dt.year == reference.year
                        && dt.month == reference.month
                        && dt.day == reference.day
                }
                None => false,
            },
            Query::Weekend => dt.weekday().is_some_and(|w| w.is_weekend()),
            Query::Weekday => dt.weekday().is_some_and(|w| w.is_weekday()),
            Query::On(day) => dt.weekday() == Some(*day),
            Query::Equals { field, value } => field.get(dt) == Some(*value),
        }
    }
}

/// Parse and evaluate in one step.
///
/// # Errors
/// Propagates the parse errors of [`Query::parse`].
pub fn search(dt: &DateTime, now: Option<&DateTime>, query: &str) -> Result<bool> {
    Ok(Query::parse(query)?.eval(dt, now))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: i8, d: i8) -> DateTime {
        DateTime::from_ymd(y, m, d)
    }

    #[test]
    fn today_needs_a_reference() {
        let dt = date(2024, 6, 1);
        let now = date(2024, 6, 1);
        assert!(Query::parse("today").unwrap().eval(&dt, Some(&now)));
        assert!(!Query::parse("today").unwrap().eval(&dt, None));
        assert!(!Query::parse("today").unwrap().eval(&dt, Some(&date(2024, 6, 2))));
    }

    #[test]
    fn weekend_and_weekday() {
        let saturday = date(2024, 6, 1);
        let monday = date(2024, 6, 3);
        assert!(Query::parse("weekend").unwrap().eval(&saturday, None));
        assert!(!Query::parse("weekend").unwrap().eval(&monday, None));
        assert!(Query::parse("weekday").unwrap().eval(&monday, None));
        assert!(Query::parse("saturday").unwrap().eval(&saturday, None));
        assert!(!Query::parse("sunday").unwrap().eval(&saturday, None));
    }

    #[test]
    fn unknown_weekday_never_matches() {
        let blank = DateTime::new();
        assert!(!Query::parse("weekend").unwrap().eval(&blank, None));
        assert!(!Query::parse("monday").unwrap().eval(&blank, None));
    }

    #[test]
    fn field_equality_honors_mask() {
        let dt = date(2024, 6, 1);
        assert!(Query::parse("year=2024").unwrap().eval(&dt, None));
        assert!(!Query::parse("year=2023").unwrap().eval(&dt, None));
        // Hour bit is unset on a pure civil date: absence never matches.
        assert!(!Query::parse("hour=0").unwrap().eval(&dt, None));
        assert!(Query::parse("tz_offset_minutes=0").unwrap().eval(&dt, None));
    }

    #[test]
    fn parse_errors_are_distinguishable() {
        assert!(matches!(
            Query::parse("fortnight"),
            Err(Error::UnknownQuery(_))
        ));
        assert!(matches!(
            Query::parse("lightyears=3"),
            Err(Error::UnknownQuery(_))
        ));
        assert!(matches!(
            Query::parse("year=twenty"),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn search_is_parse_then_eval() {
        let dt = date(2024, 12, 31);
        assert!(search(&dt, None, "yearday=366").unwrap());
        assert!(search(&dt, None, " weekday ").unwrap()); // Tuesday, trimmed
    }
}

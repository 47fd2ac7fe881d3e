//! `DateTime` — the precision-masked date/time record.
//!
//! Every field carries a bit in [`precision`]; a field whose bit is unset
//! holds no meaningful data and must be treated as absent, not as zero.
//! The only exception is conversion to Unix time, where absent fields
//! substitute their minimal valid value (1 for month/day, 0 for
//! time-of-day) — the substitution documented on [`DateTime::to_unix_seconds`].

use crate::calendar;
use crate::epoch;
use crate::span::Span;
use crate::weekday::Weekday;

/// Precision-mask bits for [`DateTime`] fields.
///
/// One bit per field group, 14 bits total. Composite masks for the common
/// groupings are provided.
pub mod precision {
    /// Year field.
    pub const YEAR: u64 = 1 << 0;
    /// Month field.
    pub const MONTH: u64 = 1 << 1;
    /// Day-of-month field.
    pub const DAY: u64 = 1 << 2;
    /// Hour field.
    pub const HOUR: u64 = 1 << 3;
    /// Minute field.
    pub const MINUTE: u64 = 1 << 4;
    /// Second field.
    pub const SECOND: u64 = 1 << 5;
    /// Millisecond field.
    pub const MILLI: u64 = 1 << 6;
    /// Microsecond field.
    pub const MICRO: u64 = 1 << 7;
    /// Nanosecond field.
    pub const NANO: u64 = 1 << 8;
    /// Picosecond field.
    pub const PICO: u64 = 1 << 9;
    /// Femtosecond field.
    pub const FEMTO: u64 = 1 << 10;
    /// Attosecond field.
    pub const ATTO: u64 = 1 << 11;
    /// Zeptosecond field.
    pub const ZEPTO: u64 = 1 << 12;
    /// Yoctosecond field.
    pub const YOCTO: u64 = 1 << 13;

    /// The civil-date triple: year, month, day.
    pub const CIVIL_DATE: u64 = YEAR | MONTH | DAY;
    /// The clock triple: hour, minute, second.
    pub const CLOCK_TIME: u64 = HOUR | MINUTE | SECOND;
}

/// A date/time value with explicit per-field precision.
///
/// `DateTime` is a plain value: copied freely, no interior state, no
/// synchronization. It is constructed blank (mask = 0), by hand via
/// [`DateTime::from_ymd`]-style constructors, or from Unix time; `validate`
/// and `normalize` are idempotent and may be applied in any order.
///
/// `weekday` (0 = Sunday … 6 = Saturday) and `yearday` (1–366) are derived
/// fields; `-1` means "unknown" and is what [`DateTime::normalize`] stores
/// when the civil-date bits are not all present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DateTime {
    /// Calendar year (proleptic Gregorian, no artificial range limit).
    pub year: i32,
    /// Month of year, 1–12.
    pub month: i8,
    /// Day of month, 1–31.
    pub day: i8,
    /// Hour, 0–23.
    pub hour: i8,
    /// Minute, 0–59.
    pub minute: i8,
    /// Second, 0–60 (60 tolerates a leap second).
    pub second: i8,
    /// Milliseconds, 0–999.
    pub millisecond: i16,
    /// Microseconds, 0–999.
    pub microsecond: i16,
    /// Nanoseconds, 0–999.
    pub nanosecond: i16,
    /// Picoseconds, 0–999.
    pub picosecond: i16,
    /// Femtoseconds, 0–999.
    pub femtosecond: i16,
    /// Attoseconds, 0–999.
    pub attosecond: i16,
    /// Zeptoseconds, 0–999.
    pub zeptosecond: i16,
    /// Yoctoseconds, 0–999.
    pub yoctosecond: i16,
    /// Derived weekday (0 = Sunday … 6 = Saturday), −1 if unknown.
    pub weekday: i8,
    /// Derived day of year (1–366), −1 if unknown.
    pub yearday: i16,
    /// Fixed UTC offset in minutes; stored fields are local to this offset.
    pub tz_offset_minutes: i16,
    /// Bitset marking which fields hold meaningful data (see [`precision`]).
    pub precision_mask: u64,
}

impl DateTime {
    /// A blank value: every field zero, derived fields unknown, mask empty.
    pub fn new() -> Self {
        DateTime {
            year: 0,
            month: 0,
            day: 0,
            hour: 0,
            minute: 0,
            second: 0,
            millisecond: 0,
            microsecond: 0,
            nanosecond: 0,
            picosecond: 0,
            femtosecond: 0,
            attosecond: 0,
            zeptosecond: 0,
            yoctosecond: 0,
            weekday: -1,
            yearday: -1,
            tz_offset_minutes: 0,
            precision_mask: 0,
        }
    }

    /// A civil date with mask {year, month, day} and derived fields computed.
    ///
    /// The fields are not range-checked; call [`DateTime::validate`] when
    /// the input is not known-good.
    pub fn from_ymd(year: i32, month: i8, day: i8) -> Self {
        let mut dt = DateTime::new();
        dt.year = year;
        dt.month = month;
        dt.day = day;
        dt.precision_mask = precision::CIVIL_DATE;
        dt.normalize();
        dt
    }

    /// A civil date-time with mask {year … second} and derived fields computed.
    pub fn from_ymd_hms(year: i32, month: i8, day: i8, hour: i8, minute: i8, second: i8) -> Self {
        let mut dt = DateTime::from_ymd(year, month, day);
        dt.hour = hour;
        dt.minute = minute;
        dt.second = second;
        dt.precision_mask |= precision::CLOCK_TIME;
        dt
    }

    /// `true` if every bit in `bits` is set in the precision mask.
    pub fn has(&self, bits: u64) -> bool {
        self.precision_mask & bits == bits
    }

    /// Range-check every field whose precision bit is set.
    ///
    /// Checks month 1–12, day 1–`days_in_month(year, month)`, hour 0–23,
    /// minute 0–59, second 0–60. Sub-second fields are assumed in range by
    /// construction and are not checked. Returns `false` on the first
    /// violation; absent fields are never inspected.
    pub fn validate(&self) -> bool {
        if self.has(precision::MONTH) && !(1..=12).contains(&self.month) {
            return false;
        }
        if self.has(precision::DAY)
            && (self.day < 1 || self.day > calendar::days_in_month(self.year, self.month))
        {
            return false;
        }
        if self.has(precision::HOUR) && !(0..=23).contains(&self.hour) {
            return false;
        }
        if self.has(precision::MINUTE) && !(0..=59).contains(&self.minute) {
            return false;
        }
        if self.has(precision::SECOND) && !(0..=60).contains(&self.second) {
            return false;
        }
        true
    }

    /// Recompute the derived `weekday` and `yearday` fields.
    ///
    /// This is a conservative operation: numeric fields are never altered
    /// and no overflow is carried across day boundaries. Callers that need
    /// calendar carry add a [`Span`] and re-derive. When the civil-date
    /// bits are not all present, both derived fields are set to the −1
    /// "unknown" sentinel instead of reading absent data.
    pub fn normalize(&mut self) {
        if self.has(precision::CIVIL_DATE) {
            self.weekday = calendar::weekday_of(self.year, self.month, self.day).index();
            self.yearday = calendar::year_day(self.year, self.month, self.day);
        } else {
            self.weekday = -1;
            self.yearday = -1;
        }
    }

    /// Lexicographic temporal comparison.
    ///
    /// Fields are compared raw in the fixed order year, month, day, hour,
    /// minute, second, millisecond, microsecond, nanosecond; the first
    /// difference decides. Fields beyond nanosecond do not participate.
    pub fn compare(&self, other: &DateTime) -> std::cmp::Ordering {
        macro_rules! cmp_field {
            ($field:ident) => {
                match self.$field.cmp(&other.$field) {
                    std::cmp::Ordering::Equal => {}
                    ord => return ord,
                }
            };
        }
        cmp_field!(year);
        cmp_field!(month);
        cmp_field!(day);
        cmp_field!(hour);
        cmp_field!(minute);
        cmp_field!(second);
        cmp_field!(millisecond);
        cmp_field!(microsecond);
        cmp_field!(nanosecond);
        std::cmp::Ordering::Equal
    }

    /// `self − other` in whole seconds, via Unix time.
    pub fn diff_seconds(&self, other: &DateTime) -> i64 {
        self.to_unix_seconds() - other.to_unix_seconds()
    }

    /// Signed seconds since 1970-01-01T00:00:00Z.
    ///
    /// Stored fields are interpreted as local time at `tz_offset_minutes`,
    /// so the offset is subtracted from the computed seconds. Absent fields
    /// substitute their minimal valid value: 1970 for the year, 1 for month
    /// and day, 0 for hour/minute/second.
    pub fn to_unix_seconds(&self) -> i64 {
        let year = if self.has(precision::YEAR) { self.year } else { 1970 };
        let month = if self.has(precision::MONTH) { self.month } else { 1 };
        let day = if self.has(precision::DAY) { self.day } else { 1 };
        let hour = if self.has(precision::HOUR) { self.hour } else { 0 };
        let minute = if self.has(precision::MINUTE) { self.minute } else { 0 };
        let second = if self.has(precision::SECOND) { self.second } else { 0 };

        epoch::civil_to_epoch_seconds(year, month, day, hour, minute, second)
            - i64::from(self.tz_offset_minutes) * 60
    }

    /// Signed nanoseconds since the epoch: seconds scaled by 10⁹ plus the
    /// milli/micro/nano fields whose precision bits are set.
    ///
    /// Picoseconds and below are not included; they do not scale into the
    /// 64-bit nanosecond range.
    pub fn to_unix_nanoseconds(&self) -> i64 {
        let mut ns: i64 = 0;
        if self.has(precision::MILLI) {
            ns += i64::from(self.millisecond) * 1_000_000;
        }
        if self.has(precision::MICRO) {
            ns += i64::from(self.microsecond) * 1_000;
        }
        if self.has(precision::NANO) {
            ns += i64::from(self.nanosecond);
        }
        self.to_unix_seconds() * 1_000_000_000 + ns
    }

    /// A UTC value for signed seconds since the epoch.
    ///
    /// The mask is exactly {year, month, day, hour, minute, second},
    /// `tz_offset_minutes` is 0, and the derived fields are computed.
    pub fn from_unix_seconds(seconds: i64) -> Self {
        let (year, month, day, hour, minute, second) = epoch::epoch_seconds_to_civil(seconds);

        let mut dt = DateTime::new();
        dt.year = year;
        dt.month = month;
        dt.day = day;
        dt.hour = hour;
        dt.minute = minute;
        dt.second = second;
        dt.tz_offset_minutes = 0;
        dt.precision_mask = precision::CIVIL_DATE | precision::CLOCK_TIME;
        dt.normalize();
        dt
    }

    /// The derived weekday as an enum, `None` while unknown.
    pub fn weekday(&self) -> Option<Weekday> {
        Weekday::from_index(self.weekday)
    }

    /// Calendar quarter (1–4), or 0 when the month bit is unset.
    pub fn quarter(&self) -> i8 {
        if !self.has(precision::MONTH) {
            return 0;
        }
        calendar::quarter_of(self.month)
    }

    /// Calendar half-year (1–2), or 0 when the month bit is unset.
    pub fn half(&self) -> i8 {
        if !self.has(precision::MONTH) {
            return 0;
        }
        calendar::half_of(self.month)
    }

    /// Shift this value by a span, at whole-second resolution.
    ///
    /// The result is rebuilt from Unix time and is therefore always UTC
    /// with mask {year … second}; callers needing calendar carry get it
    /// here, as `normalize` never crosses day boundaries.
    pub fn add_span(&self, span: &Span) -> DateTime {
        DateTime::from_unix_seconds(self.to_unix_seconds() + span.to_seconds())
    }

    /// Shift this value backwards by a span, at whole-second resolution.
    pub fn sub_span(&self, span: &Span) -> DateTime {
        DateTime::from_unix_seconds(self.to_unix_seconds() - span.to_seconds())
    }
}

impl Default for DateTime {
    fn default() -> Self {
        DateTime::new()
    }
}

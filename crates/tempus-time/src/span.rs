//! `Span` — an unanchored duration over an SI unit ladder.
//!
//! A span is not a calendar date: its fields are independent counters
//! governed by a precision mask. `add`/`sub` are pure field-wise algebra
//! and never normalize, so callers can inspect raw signed deltas; carrying
//! into canonical form is the separate, explicit [`Span::normalize`] pass.

use crate::unit::{DurationHint, Unit};

/// Precision-mask bits for [`Span`] fields, one bit per unit.
pub mod precision {
    /// Days field.
    pub const DAYS: u64 = 1 << 0;
    /// Hours field.
    pub const HOURS: u64 = 1 << 1;
    /// Minutes field.
    pub const MINUTES: u64 = 1 << 2;
    /// Seconds field.
    pub const SECONDS: u64 = 1 << 3;
    /// Milliseconds field.
    pub const MILLI: u64 = 1 << 4;
    /// Microseconds field.
    pub const MICRO: u64 = 1 << 5;
    /// Nanoseconds field.
    pub const NANO: u64 = 1 << 6;
    /// Picoseconds field.
    pub const PICO: u64 = 1 << 7;
    /// Femtoseconds field.
    pub const FEMTO: u64 = 1 << 8;
    /// Attoseconds field.
    pub const ATTO: u64 = 1 << 9;
    /// Zeptoseconds field.
    pub const ZEPTO: u64 = 1 << 10;
    /// Yoctoseconds field.
    pub const YOCTO: u64 = 1 << 11;
}

/// An unanchored duration with explicit per-unit precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    /// Whole days.
    pub days: i64,
    /// Hours.
    pub hours: i32,
    /// Minutes.
    pub minutes: i32,
    /// Seconds.
    pub seconds: i32,
    /// Milliseconds.
    pub milliseconds: i32,
    /// Microseconds.
    pub microseconds: i32,
    /// Nanoseconds.
    pub nanoseconds: i32,
    /// Picoseconds.
    pub picoseconds: i32,
    /// Femtoseconds.
    pub femtoseconds: i32,
    /// Attoseconds.
    pub attoseconds: i32,
    /// Zeptoseconds.
    pub zeptoseconds: i32,
    /// Yoctoseconds.
    pub yoctoseconds: i32,
    /// Bitset marking which units hold meaningful data (see [`precision`]).
    pub precision_mask: u64,
}

impl Span {
    /// An empty span: all fields and the mask zero.
    pub fn new() -> Self {
        Span::default()
    }

    /// Zero all fields and the mask.
    pub fn clear(&mut self) {
        *self = Span::default();
    }

    /// A span with exactly one unit set, and that unit's precision bit.
    ///
    /// Every other field is zero. Sub-day units truncate the value to
    /// `i32`; only the days field is 64-bit.
    pub fn from_unit(value: i64, unit: Unit) -> Self {
        let mut span = Span::default();
        match unit {
            Unit::Days => {
                span.days = value;
                span.precision_mask = precision::DAYS;
            }
            Unit::Hours => {
                span.hours = value as i32;
                span.precision_mask = precision::HOURS;
            }
            Unit::Minutes => {
                span.minutes = value as i32;
                span.precision_mask = precision::MINUTES;
            }
            Unit::Seconds => {
                span.seconds = value as i32;
                span.precision_mask = precision::SECONDS;
            }
            Unit::Milliseconds => {
                span.milliseconds = value as i32;
                span.precision_mask = precision::MILLI;
            }
            Unit::Microseconds => {
                span.microseconds = value as i32;
                span.precision_mask = precision::MICRO;
            }
            Unit::Nanoseconds => {
                span.nanoseconds = value as i32;
                span.precision_mask = precision::NANO;
            }
            Unit::Picoseconds => {
                span.picoseconds = value as i32;
                span.precision_mask = precision::PICO;
            }
            Unit::Femtoseconds => {
                span.femtoseconds = value as i32;
                span.precision_mask = precision::FEMTO;
            }
            Unit::Attoseconds => {
                span.attoseconds = value as i32;
                span.precision_mask = precision::ATTO;
            }
            Unit::Zeptoseconds => {
                span.zeptoseconds = value as i32;
                span.precision_mask = precision::ZEPTO;
            }
            Unit::Yoctoseconds => {
                span.yoctoseconds = value as i32;
                span.precision_mask = precision::YOCTO;
            }
        }
        span
    }

    /// A span for a semantic duration hint.
    pub fn from_hint(hint: DurationHint) -> Self {
        match hint {
            DurationHint::Moment => Span::from_unit(250, Unit::Milliseconds),
            DurationHint::Short => Span::from_unit(1, Unit::Seconds),
            DurationHint::Long => Span::from_unit(10, Unit::Seconds),
            DurationHint::Frame => Span::from_unit(16, Unit::Milliseconds),
            DurationHint::HumanTick => Span::from_unit(100, Unit::Milliseconds),
        }
    }

    /// Conservative range check for an already-normalized span.
    ///
    /// Checks hours in [0, 24), minutes and seconds in [0, 60). Days and
    /// sub-second fields are not checked; an unnormalized accumulator is
    /// expected to fail here until [`Span::normalize`] has run.
    pub fn validate(&self) -> bool {
        if !(0..24).contains(&self.hours) {
            return false;
        }
        if !(0..60).contains(&self.minutes) {
            return false;
        }
        if !(0..60).contains(&self.seconds) {
            return false;
        }
        true
    }

    /// Carry each unit upward into the next, strictly bottom-up:
    /// nanoseconds → microseconds → milliseconds → seconds → minutes →
    /// hours → days (radix 1000 below the second, then 60/60/24).
    ///
    /// Picoseconds and the units below them are informational only and do
    /// not participate in the carry chain.
    ///
    /// A carry can move data into any higher unit, so presence propagates
    /// upward from the lowest set bit; the total of [`Span::to_seconds`]
    /// is preserved across normalization.
    pub fn normalize(&mut self) {
        if self.precision_mask & precision::NANO != 0 {
            self.precision_mask |= precision::MICRO;
        }
        if self.precision_mask & precision::MICRO != 0 {
            self.precision_mask |= precision::MILLI;
        }
        if self.precision_mask & precision::MILLI != 0 {
            self.precision_mask |= precision::SECONDS;
        }
        if self.precision_mask & precision::SECONDS != 0 {
            self.precision_mask |= precision::MINUTES;
        }
        if self.precision_mask & precision::MINUTES != 0 {
            self.precision_mask |= precision::HOURS;
        }
        if self.precision_mask & precision::HOURS != 0 {
            self.precision_mask |= precision::DAYS;
        }

        self.microseconds += self.nanoseconds / 1000;
        self.nanoseconds %= 1000;

        self.milliseconds += self.microseconds / 1000;
        self.microseconds %= 1000;

        self.seconds += self.milliseconds / 1000;
        self.milliseconds %= 1000;

        self.minutes += self.seconds / 60;
        self.seconds %= 60;

        self.hours += self.minutes / 60;
        self.minutes %= 60;

        self.days += i64::from(self.hours / 24);
        self.hours %= 24;
    }

    /// Field-wise sum. The result mask is `a.mask | b.mask` and the result
    /// is not normalized.
    pub fn add(&self, other: &Span) -> Span {
        let mut result = *self;
        result.days += other.days;
        result.hours += other.hours;
        result.minutes += other.minutes;
        result.seconds += other.seconds;
        result.milliseconds += other.milliseconds;
        result.microseconds += other.microseconds;
        result.nanoseconds += other.nanoseconds;
        result.picoseconds += other.picoseconds;
        result.femtoseconds += other.femtoseconds;
        result.attoseconds += other.attoseconds;
        result.zeptoseconds += other.zeptoseconds;
        result.yoctoseconds += other.yoctoseconds;
        result.precision_mask |= other.precision_mask;
        result
    }

    /// Field-wise difference. The result mask is `a.mask | b.mask` and the
    /// result is not normalized, so fields may come out negative.
    pub fn sub(&self, other: &Span) -> Span {
        let mut result = *self;
        result.days -= other.days;
        result.hours -= other.hours;
        result.minutes -= other.minutes;
        result.seconds -= other.seconds;
        result.milliseconds -= other.milliseconds;
        result.microseconds -= other.microseconds;
        result.nanoseconds -= other.nanoseconds;
        result.picoseconds -= other.picoseconds;
        result.femtoseconds -= other.femtoseconds;
        result.attoseconds -= other.attoseconds;
        result.zeptoseconds -= other.zeptoseconds;
        result.yoctoseconds -= other.yoctoseconds;
        result.precision_mask |= other.precision_mask;
        result
    }

    /// Total whole seconds of the mask-present day/hour/minute/second
    /// fields. Absent units contribute 0.
    pub fn to_seconds(&self) -> i64 {
        let mut total: i64 = 0;
        if self.precision_mask & precision::DAYS != 0 {
            total += self.days * 86_400;
        }
        if self.precision_mask & precision::HOURS != 0 {
            total += i64::from(self.hours) * 3_600;
        }
        if self.precision_mask & precision::MINUTES != 0 {
            total += i64::from(self.minutes) * 60;
        }
        if self.precision_mask & precision::SECONDS != 0 {
            total += i64::from(self.seconds);
        }
        total
    }

    /// Total nanoseconds: [`Span::to_seconds`] scaled by 10⁹ plus the
    /// mask-present milli/micro/nano fields. Picoseconds and below are not
    /// included.
    pub fn to_nanoseconds(&self) -> i64 {
        let mut total = self.to_seconds() * 1_000_000_000;
        if self.precision_mask & precision::MILLI != 0 {
            total += i64::from(self.milliseconds) * 1_000_000;
        }
        if self.precision_mask & precision::MICRO != 0 {
            total += i64::from(self.microseconds) * 1_000;
        }
        if self.precision_mask & precision::NANO != 0 {
            total += i64::from(self.nanoseconds);
        }
        total
    }
}

impl std::ops::Add for Span {
    type Output = Span;
    fn add(self, rhs: Span) -> Span {
        Span::add(&self, &rhs)
    }
}

impl std::ops::Sub for Span {
    type Output = Span;
    fn sub(self, rhs: Span) -> Span {
        Span::sub(&self, &rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_unit_sets_exactly_one_bit() {
        let span = Span::from_unit(1000, Unit::Milliseconds);
        assert_eq!(span.milliseconds, 1000);
        assert_eq!(span.precision_mask, precision::MILLI);
        assert_eq!(span.seconds, 0);
    }

    #[test]
    fn normalize_carries_bottom_up() {
        let mut span = Span::from_unit(1000, Unit::Milliseconds);
        span.normalize();
        assert_eq!(span.seconds, 1);
        assert_eq!(span.milliseconds, 0);
    }

    #[test]
    fn normalize_full_ladder() {
        let mut span = Span::default();
        span.nanoseconds = 1_500_000;
        span.seconds = 3_601;
        span.normalize();
        assert_eq!(span.nanoseconds, 0);
        assert_eq!(span.microseconds, 500);
        assert_eq!(span.milliseconds, 1);
        assert_eq!(span.seconds, 1);
        assert_eq!(span.minutes, 0);
        assert_eq!(span.hours, 1);
    }

    #[test]
    fn normalize_is_idempotent() {
        let mut span = Span::from_unit(90, Unit::Minutes);
        span.normalize();
        let once = span;
        span.normalize();
        assert_eq!(span, once);
    }

    #[test]
    fn normalize_leaves_sub_nanosecond_alone() {
        let mut span = Span::from_unit(5_000, Unit::Picoseconds);
        span.normalize();
        assert_eq!(span.picoseconds, 5_000);
        assert_eq!(span.nanoseconds, 0);
    }

    #[test]
    fn add_then_sub_recovers_raw_fields() {
        let a = Span::from_unit(90, Unit::Minutes);
        let b = Span::from_unit(45, Unit::Seconds);
        let roundtrip = a.add(&b).sub(&b);
        assert_eq!(roundtrip.days, a.days);
        assert_eq!(roundtrip.minutes, a.minutes);
        assert_eq!(roundtrip.seconds, a.seconds);
        assert_eq!(roundtrip.nanoseconds, a.nanoseconds);
    }

    #[test]
    fn sub_exposes_negative_fields() {
        let a = Span::from_unit(1, Unit::Seconds);
        let b = Span::from_unit(500, Unit::Milliseconds);
        let d = a.sub(&b);
        assert_eq!(d.seconds, 1);
        assert_eq!(d.milliseconds, -500);
        assert_eq!(d.precision_mask, precision::SECONDS | precision::MILLI);
    }

    #[test]
    fn to_seconds_honors_mask() {
        let mut span = Span::from_unit(2, Unit::Hours);
        span.minutes = 30; // bit unset: must not contribute
        assert_eq!(span.to_seconds(), 7_200);

        span.precision_mask |= precision::MINUTES;
        assert_eq!(span.to_seconds(), 9_000);
    }

    #[test]
    fn to_nanoseconds_ignores_picoseconds() {
        let mut span = Span::from_unit(1, Unit::Seconds);
        span = span.add(&Span::from_unit(250, Unit::Milliseconds));
        span = span.add(&Span::from_unit(999, Unit::Picoseconds));
        assert_eq!(span.to_nanoseconds(), 1_250_000_000);
    }

    #[test]
    fn validate_expects_normalized_form() {
        let mut span = Span::from_unit(90, Unit::Minutes);
        assert!(!span.validate());
        span.normalize();
        assert!(span.validate());
    }

    #[test]
    fn hints() {
        assert_eq!(Span::from_hint(DurationHint::Moment).milliseconds, 250);
        assert_eq!(Span::from_hint(DurationHint::Long).seconds, 10);
        assert_eq!(
            Span::from_hint(DurationHint::Frame).precision_mask,
            precision::MILLI
        );
    }
}

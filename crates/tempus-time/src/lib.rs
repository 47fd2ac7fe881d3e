//! # tempus-time
//!
//! Precision-masked date/time and span values, deterministic civil ⇄ epoch
//! conversion, and rule-based holiday resolution.
//!
//! Every value here carries an explicit precision mask: a field without its
//! bit holds no data and is treated as absent, never as zero. The calendar
//! math is self-contained — no timezone database, no platform calendar
//! routine — so results are identical on every host.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Pure civil-calendar math (leap years, month lengths, weekdays).
pub mod calendar;

/// System-clock access.
pub mod clock;

/// `DateTime` — the precision-masked date/time record.
pub mod date;

/// Deterministic civil ⇄ Unix-seconds conversion.
pub mod epoch;

/// String rendering for dates and spans.
pub mod format;

/// Holiday rules and the resolving registry.
pub mod holiday;

/// String query DSL over dates.
pub mod query;

/// Season classification.
pub mod season;

/// `Span` — an unanchored duration over an SI unit ladder.
pub mod span;

/// `Unit` — span units and semantic duration hints.
pub mod unit;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::DateTime;
pub use format::{DateStyle, SpanStyle};
pub use holiday::{HolidayRegistry, HolidayRule, RuleKind};
pub use query::{Field, Query};
pub use season::{Hemisphere, Season, SeasonSystem};
pub use span::Span;
pub use unit::{DurationHint, Unit};
pub use weekday::Weekday;

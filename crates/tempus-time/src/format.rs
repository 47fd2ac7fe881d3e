//! String rendering for dates and spans.
//!
//! Formatting is a read-only layer over the core types and honors the
//! precision mask: output truncates at the first absent field and presence
//! is never inferred from a zero value.

use crate::date::{precision, DateTime};
use crate::span::{precision as span_precision, Span};

/// A date rendering style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DateStyle {
    /// `2024-02-29T12:34:56Z`, truncated to the present fields.
    Iso,
    /// `20240229-123456`, truncated to the present fields.
    Log,
}

impl DateStyle {
    /// Parse a style identifier (`iso`, `log`).
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "iso" => Some(DateStyle::Iso),
            "log" => Some(DateStyle::Log),
            _ => None,
        }
    }
}

/// A span rendering style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpanStyle {
    /// `2d 3h 15m 42s`.
    Short,
    /// `2 days, 3 hours, 15 minutes, 42 seconds`.
    Human,
}

impl SpanStyle {
    /// Parse a style identifier (`short`, `human`).
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "short" => Some(SpanStyle::Short),
            "human" => Some(SpanStyle::Human),
            _ => None,
        }
    }
}

/// Render a date in the given style.
///
/// The year → second chain is walked in order; rendering stops at the
/// first field whose precision bit is unset. A value with no year bit
/// renders as an empty string.
pub fn format_date(dt: &DateTime, style: DateStyle) -> String {
    let mut out = String::new();
    if !dt.has(precision::YEAR) {
        return out;
    }

    match style {
        DateStyle::Iso => {
            out.push_str(&format!("{:04}", dt.year));
            if dt.has(precision::MONTH) {
                out.push_str(&format!("-{:02}", dt.month));
                if dt.has(precision::DAY) {
                    out.push_str(&format!("-{:02}", dt.day));
                    if dt.has(precision::HOUR) {
                        out.push_str(&format!("T{:02}", dt.hour));
                        if dt.has(precision::MINUTE) {
                            out.push_str(&format!(":{:02}", dt.minute));
                            if dt.has(precision::SECOND) {
                                out.push_str(&format!(":{:02}", dt.second));
                            }
                        }
                        out.push('Z');
                    }
                }
            }
        }
        DateStyle::Log => {
            out.push_str(&format!("{:04}", dt.year));
            if dt.has(precision::MONTH) {
                out.push_str(&format!("{:02}", dt.month));
                if dt.has(precision::DAY) {
                    out.push_str(&format!("{:02}", dt.day));
                    if dt.has(precision::HOUR) {
                        out.push_str(&format!("-{:02}", dt.hour));
                        if dt.has(precision::MINUTE) {
                            out.push_str(&format!("{:02}", dt.minute));
                            if dt.has(precision::SECOND) {
                                out.push_str(&format!("{:02}", dt.second));
                            }
                        }
                    }
                }
            }
        }
    }
    out
}

/// Render a date relative to a reference value, in whole seconds:
/// `"now"`, `"in N seconds"`, or `"N seconds ago"`.
pub fn format_relative(dt: &DateTime, now: &DateTime) -> String {
    let diff = dt.diff_seconds(now);
    if diff == 0 {
        "now".to_string()
    } else if diff > 0 {
        format!("in {diff} seconds")
    } else {
        format!("{} seconds ago", -diff)
    }
}

/// Render a span in the given style.
///
/// Only the day/hour/minute/second fields whose precision bits are set are
/// rendered; sub-second fields are never rendered. A span with none of the
/// four bits set renders as `"0s"` / `"0 seconds"`.
pub fn format_span(span: &Span, style: SpanStyle) -> String {
    let mut parts: Vec<String> = Vec::new();

    let present = [
        (span_precision::DAYS, span.days, "d", "days"),
        (span_precision::HOURS, i64::from(span.hours), "h", "hours"),
        (span_precision::MINUTES, i64::from(span.minutes), "m", "minutes"),
        (span_precision::SECONDS, i64::from(span.seconds), "s", "seconds"),
    ];

    for (bit, value, short, long) in present {
        if span.precision_mask & bit != 0 {
            parts.push(match style {
                SpanStyle::Short => format!("{value}{short}"),
                SpanStyle::Human => format!("{value} {long}"),
            });
        }
    }

    if parts.is_empty() {
        return match style {
            SpanStyle::Short => "0s".to_string(),
            SpanStyle::Human => "0 seconds".to_string(),
        };
    }

    match style {
        SpanStyle::Short => parts.join(" "),
        SpanStyle::Human => parts.join(", "),
    }
}

impl std::fmt::Display for DateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format_date(self, DateStyle::Iso))
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format_span(self, SpanStyle::Short))
    }
}

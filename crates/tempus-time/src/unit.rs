//! `Unit` — the closed enumeration of span units, and the semantic
//! duration hints.
//!
//! External strings are converted to these enums exactly once, at the
//! boundary ([`Unit::from_symbol`], [`DurationHint::from_id`]); internal
//! logic switches on the enum, never on strings.

/// A span unit, from days down the SI ladder to yoctoseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Unit {
    /// Calendar days.
    Days,
    /// Hours.
    Hours,
    /// Minutes.
    Minutes,
    /// Seconds.
    Seconds,
    /// Milliseconds (10⁻³ s).
    Milliseconds,
    /// Microseconds (10⁻⁶ s).
    Microseconds,
    /// Nanoseconds (10⁻⁹ s).
    Nanoseconds,
    /// Picoseconds (10⁻¹² s).
    Picoseconds,
    /// Femtoseconds (10⁻¹⁵ s).
    Femtoseconds,
    /// Attoseconds (10⁻¹⁸ s).
    Attoseconds,
    /// Zeptoseconds (10⁻²¹ s).
    Zeptoseconds,
    /// Yoctoseconds (10⁻²⁴ s).
    Yoctoseconds,
}

impl Unit {
    /// Parse a unit symbol.
    ///
    /// Accepted symbols: `days`, `hours`, `minutes`, `seconds`, `ms`,
    /// `us`, `ns`, `ps`, `fs`, `as`, `zs`, `ys`. Returns `None` for
    /// anything else.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "days" => Some(Unit::Days),
            "hours" => Some(Unit::Hours),
            "minutes" => Some(Unit::Minutes),
            "seconds" => Some(Unit::Seconds),
            "ms" => Some(Unit::Milliseconds),
            "us" => Some(Unit::Microseconds),
            "ns" => Some(Unit::Nanoseconds),
            "ps" => Some(Unit::Picoseconds),
            "fs" => Some(Unit::Femtoseconds),
            "as" => Some(Unit::Attoseconds),
            "zs" => Some(Unit::Zeptoseconds),
            "ys" => Some(Unit::Yoctoseconds),
            _ => None,
        }
    }

    /// The symbol accepted by [`Unit::from_symbol`].
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Days => "days",
            Unit::Hours => "hours",
            Unit::Minutes => "minutes",
            Unit::Seconds => "seconds",
            Unit::Milliseconds => "ms",
            Unit::Microseconds => "us",
            Unit::Nanoseconds => "ns",
            Unit::Picoseconds => "ps",
            Unit::Femtoseconds => "fs",
            Unit::Attoseconds => "as",
            Unit::Zeptoseconds => "zs",
            Unit::Yoctoseconds => "ys",
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A semantic duration hint, mapping a human notion to a concrete span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DurationHint {
    /// A barely perceptible pause (250 ms).
    Moment,
    /// A short wait (1 s).
    Short,
    /// A long wait (10 s).
    Long,
    /// One frame at 60 Hz (16 ms).
    Frame,
    /// The smallest delay a person registers as a tick (100 ms).
    HumanTick,
}

impl DurationHint {
    /// Parse a hint identifier: `moment`, `short`, `long`, `frame`,
    /// `human_tick`.
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "moment" => Some(DurationHint::Moment),
            "short" => Some(DurationHint::Short),
            "long" => Some(DurationHint::Long),
            "frame" => Some(DurationHint::Frame),
            "human_tick" => Some(DurationHint::HumanTick),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_roundtrip() {
        for unit in [
            Unit::Days,
            Unit::Hours,
            Unit::Minutes,
            Unit::Seconds,
            Unit::Milliseconds,
            Unit::Microseconds,
            Unit::Nanoseconds,
            Unit::Picoseconds,
            Unit::Femtoseconds,
            Unit::Attoseconds,
            Unit::Zeptoseconds,
            Unit::Yoctoseconds,
        ] {
            assert_eq!(Unit::from_symbol(unit.symbol()), Some(unit));
        }
    }

    #[test]
    fn unknown_symbols_rejected() {
        assert!(Unit::from_symbol("weeks").is_none());
        assert!(Unit::from_symbol("MS").is_none());
        assert!(Unit::from_symbol("").is_none());
    }

    #[test]
    fn hint_ids() {
        assert_eq!(DurationHint::from_id("moment"), Some(DurationHint::Moment));
        assert_eq!(
            DurationHint::from_id("human_tick"),
            Some(DurationHint::HumanTick)
        );
        assert!(DurationHint::from_id("eternity").is_none());
    }
}

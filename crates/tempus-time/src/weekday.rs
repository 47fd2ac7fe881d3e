//! `Weekday` — day-of-week enum.

/// Day of the week.
///
/// Variants are numbered 0–6 (Sunday = 0, Saturday = 6), the convention
/// used by every derived-field computation in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i8)]
pub enum Weekday {
    /// Sunday (0).
    Sunday = 0,
    /// Monday (1).
    Monday = 1,
    /// Tuesday (2).
    Tuesday = 2,
    /// Wednesday (3).
    Wednesday = 3,
    /// Thursday (4).
    Thursday = 4,
    /// Friday (5).
    Friday = 5,
    /// Saturday (6).
    Saturday = 6,
}

impl Weekday {
    /// Construct from the index (0 = Sunday … 6 = Saturday).
    ///
    /// Returns `None` if the value is out of range. `-1`, the "unknown"
    /// sentinel stored on a [`DateTime`](crate::DateTime), maps to `None`.
    pub fn from_index(n: i8) -> Option<Self> {
        match n {
            0 => Some(Weekday::Sunday),
            1 => Some(Weekday::Monday),
            2 => Some(Weekday::Tuesday),
            3 => Some(Weekday::Wednesday),
            4 => Some(Weekday::Thursday),
            5 => Some(Weekday::Friday),
            6 => Some(Weekday::Saturday),
            _ => None,
        }
    }

    /// Parse a lowercase English day name (`"sunday"` … `"saturday"`).
    ///
    /// This is the single string boundary for day names; internal logic
    /// switches on the enum only.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sunday" => Some(Weekday::Sunday),
            "monday" => Some(Weekday::Monday),
            "tuesday" => Some(Weekday::Tuesday),
            "wednesday" => Some(Weekday::Wednesday),
            "thursday" => Some(Weekday::Thursday),
            "friday" => Some(Weekday::Friday),
            "saturday" => Some(Weekday::Saturday),
            _ => None,
        }
    }

    /// Return the index (0 = Sunday … 6 = Saturday).
    pub fn index(&self) -> i8 {
        *self as i8
    }

    /// Return `true` if this is Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self, Weekday::Saturday | Weekday::Sunday)
    }

    /// Return `true` if this is Monday–Friday.
    pub fn is_weekday(&self) -> bool {
        !self.is_weekend()
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_roundtrip() {
        for n in 0..=6i8 {
            let w = Weekday::from_index(n).unwrap();
            assert_eq!(w.index(), n);
        }
    }

    #[test]
    fn out_of_range() {
        assert!(Weekday::from_index(-1).is_none());
        assert!(Weekday::from_index(7).is_none());
    }

    #[test]
    fn weekend() {
        assert!(Weekday::Saturday.is_weekend());
        assert!(Weekday::Sunday.is_weekend());
        assert!(Weekday::Wednesday.is_weekday());
    }

    #[test]
    fn names() {
        assert_eq!(Weekday::from_name("friday"), Some(Weekday::Friday));
        assert!(Weekday::from_name("Friday").is_none());
        assert!(Weekday::from_name("fryday").is_none());
    }
}

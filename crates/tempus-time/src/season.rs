//! Season classification for civil dates.
//!
//! Two systems are supported: meteorological (exact month ranges) and
//! astronomical (fixed approximate solstice/equinox boundaries, ±1 day
//! worst case — good enough for civil use). Southern-hemisphere seasons
//! are the northern ones inverted.

use crate::date::{precision, DateTime};

/// A season of the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Season {
    /// Spring.
    Spring,
    /// Summer.
    Summer,
    /// Autumn.
    Autumn,
    /// Winter.
    Winter,
}

impl Season {
    /// The English season name.
    pub fn name(&self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
            Season::Winter => "Winter",
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Which hemisphere a date is classified for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Hemisphere {
    /// Northern hemisphere.
    #[default]
    Northern,
    /// Southern hemisphere (seasons inverted).
    Southern,
}

/// Which boundary convention classifies a date into a season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SeasonSystem {
    /// Whole months: Mar–May spring, Jun–Aug summer, Sep–Nov autumn.
    #[default]
    Meteorological,
    /// Approximate solstice/equinox boundaries:
    /// Mar 20, Jun 21, Sep 22, Dec 21.
    Astronomical,
}

/// Season of a date, or `None` when the month precision bit is unset.
///
/// When the day bit is unset, day 1 is substituted (only the astronomical
/// system reads the day at all).
pub fn season_of(date: &DateTime, hemisphere: Hemisphere, system: SeasonSystem) -> Option<Season> {
    if !date.has(precision::MONTH) {
        return None;
    }
    let month = date.month;
    let day = if date.has(precision::DAY) { date.day } else { 1 };

    let northern = match system {
        SeasonSystem::Meteorological => meteorological(month),
        SeasonSystem::Astronomical => astronomical(month, day),
    };

    Some(match hemisphere {
        Hemisphere::Northern => northern,
        Hemisphere::Southern => invert(northern),
    })
}

fn meteorological(month: i8) -> Season {
    match month {
        3..=5 => Season::Spring,
        6..=8 => Season::Summer,
        9..=11 => Season::Autumn,
        _ => Season::Winter,
    }
}

fn astronomical(month: i8, day: i8) -> Season {
    match (month, day) {
        (12, 21..) | (1, _) | (2, _) | (3, ..=19) => Season::Winter,
        (3, _) | (4, _) | (5, _) | (6, ..=20) => Season::Spring,
        (6, _) | (7, _) | (8, _) | (9, ..=21) => Season::Summer,
        _ => Season::Autumn,
    }
}

fn invert(season: Season) -> Season {
    match season {
        Season::Spring => Season::Autumn,
        Season::Summer => Season::Winter,
        Season::Autumn => Season::Spring,
        Season::Winter => Season::Summer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: i8, d: i8) -> DateTime {
        DateTime::from_ymd(y, m, d)
    }

    #[test]
    fn meteorological_months() {
        let july = date(2024, 7, 15);
        assert_eq!(
            season_of(&july, Hemisphere::Northern, SeasonSystem::Meteorological),
            Some(Season::Summer)
        );
        assert_eq!(
            season_of(&july, Hemisphere::Southern, SeasonSystem::Meteorological),
            Some(Season::Winter)
        );
        assert_eq!(
            season_of(&date(2024, 12, 1), Hemisphere::Northern, SeasonSystem::Meteorological),
            Some(Season::Winter)
        );
    }

    #[test]
    fn astronomical_boundary_straddle() {
        assert_eq!(
            season_of(&date(2024, 3, 19), Hemisphere::Northern, SeasonSystem::Astronomical),
            Some(Season::Winter)
        );
        assert_eq!(
            season_of(&date(2024, 3, 20), Hemisphere::Northern, SeasonSystem::Astronomical),
            Some(Season::Spring)
        );
        assert_eq!(
            season_of(&date(2024, 12, 21), Hemisphere::Northern, SeasonSystem::Astronomical),
            Some(Season::Winter)
        );
        assert_eq!(
            season_of(&date(2024, 9, 22), Hemisphere::Northern, SeasonSystem::Astronomical),
            Some(Season::Autumn)
        );
    }

    #[test]
    fn month_bit_required() {
        let mut dt = DateTime::new();
        dt.month = 7; // bit unset: absent, not July
        assert_eq!(
            season_of(&dt, Hemisphere::Northern, SeasonSystem::Meteorological),
            None
        );
    }

    #[test]
    fn absent_day_substitutes_first() {
        let mut dt = DateTime::new();
        dt.year = 2024;
        dt.month = 6;
        dt.precision_mask = precision::YEAR | precision::MONTH;
        // June 1 is still spring astronomically.
        assert_eq!(
            season_of(&dt, Hemisphere::Northern, SeasonSystem::Astronomical),
            Some(Season::Spring)
        );
    }
}

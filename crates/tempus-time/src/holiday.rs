//! Holiday rules and the registry that resolves them to concrete dates.
//!
//! A [`HolidayRegistry`] is an explicit, caller-owned object: construct it
//! once (empty or from [`HolidayRegistry::us_federal`]), append rules at
//! startup, and treat it as read-only during resolution. The registry has
//! no internal locking; concurrent mutation requires external
//! synchronization.
//!
//! Rules are not validated at registration. A malformed rule (say, a fixed
//! rule with month 0) resolves to whatever the calendar's sentinel
//! arithmetic produces; rule tables are small and hand-authored, and
//! [`DateTime::validate`] is available on the result.

use crate::calendar;
use crate::date::DateTime;
use crate::weekday::Weekday;
use tempus_core::{ensure, errors::Error, Result};

/// Fixed capacity of a [`HolidayRegistry`].
pub const MAX_RULES: usize = 128;

/// How a holiday's date is derived for a given year.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RuleKind {
    /// The same month/day every year, shifted off weekends when observed
    /// (Saturday → Friday, Sunday → Monday).
    Fixed {
        /// Month, 1–12.
        month: i8,
        /// Day of month, 1–31.
        day: i8,
    },
    /// The n-th occurrence of a weekday in a month (n ≥ 1).
    NthWeekday {
        /// Month, 1–12.
        month: i8,
        /// The weekday to land on.
        weekday: Weekday,
        /// Which occurrence, counting from 1.
        nth: i8,
    },
    /// The last occurrence of a weekday in a month.
    LastWeekday {
        /// Month, 1–12.
        month: i8,
        /// The weekday to land on.
        weekday: Weekday,
    },
    /// A fixed day offset from another registered rule's date.
    Relative {
        /// Name of the rule this one is anchored to.
        base: String,
        /// Signed day offset from the base rule's date.
        offset_days: i32,
    },
}

/// A named holiday rule.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HolidayRule {
    /// Unique registry key.
    pub name: String,
    /// How the date is derived.
    pub kind: RuleKind,
}

impl HolidayRule {
    /// A fixed-date rule.
    pub fn fixed(name: impl Into<String>, month: i8, day: i8) -> Self {
        HolidayRule {
            name: name.into(),
            kind: RuleKind::Fixed { month, day },
        }
    }

    /// An n-th-weekday rule.
    pub fn nth_weekday(name: impl Into<String>, month: i8, weekday: Weekday, nth: i8) -> Self {
        HolidayRule {
            name: name.into(),
            kind: RuleKind::NthWeekday {
                month,
                weekday,
                nth,
            },
        }
    }

    /// A last-weekday rule.
    pub fn last_weekday(name: impl Into<String>, month: i8, weekday: Weekday) -> Self {
        HolidayRule {
            name: name.into(),
            kind: RuleKind::LastWeekday { month, weekday },
        }
    }

    /// A rule anchored to another rule by name.
    pub fn relative(name: impl Into<String>, base: impl Into<String>, offset_days: i32) -> Self {
        HolidayRule {
            name: name.into(),
            kind: RuleKind::Relative {
                base: base.into(),
                offset_days,
            },
        }
    }
}

/// An insertion-ordered, bounded collection of holiday rules keyed by
/// unique name.
#[derive(Debug, Clone, Default)]
pub struct HolidayRegistry {
    rules: Vec<HolidayRule>,
}

impl HolidayRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        HolidayRegistry { rules: Vec::new() }
    }

    /// A registry pre-populated with the U.S. federal holiday set.
    pub fn us_federal() -> Self {
        let mut reg = HolidayRegistry::new();
        let defaults = [
            HolidayRule::fixed("New Year's Day", 1, 1),
            HolidayRule::nth_weekday("MLK Day", 1, Weekday::Monday, 3),
            HolidayRule::nth_weekday("Presidents Day", 2, Weekday::Monday, 3),
            HolidayRule::last_weekday("Memorial Day", 5, Weekday::Monday),
            HolidayRule::fixed("Juneteenth", 6, 19),
            HolidayRule::fixed("Independence Day", 7, 4),
            HolidayRule::nth_weekday("Labor Day", 9, Weekday::Monday, 1),
            HolidayRule::nth_weekday("Columbus Day", 10, Weekday::Monday, 2),
            HolidayRule::fixed("Veterans Day", 11, 11),
            HolidayRule::nth_weekday("Thanksgiving", 11, Weekday::Thursday, 4),
            HolidayRule::fixed("Christmas", 12, 25),
        ];
        for rule in defaults {
            reg.register(rule).expect("default rule set fits the registry");
        }
        reg
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// `true` if no rules are registered.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The rules in registration order.
    pub fn rules(&self) -> &[HolidayRule] {
        &self.rules
    }

    /// Append a rule.
    ///
    /// # Errors
    /// Fails with [`Error::DuplicateRule`] if a rule with the same name is
    /// already registered, and [`Error::RegistryFull`] once [`MAX_RULES`]
    /// rules are present.
    pub fn register(&mut self, rule: HolidayRule) -> Result<()> {
        ensure!(!rule.name.is_empty(), "holiday rule name must not be empty");
        if self.lookup(&rule.name).is_some() {
            return Err(Error::DuplicateRule(rule.name));
        }
        if self.rules.len() >= MAX_RULES {
            return Err(Error::RegistryFull(MAX_RULES));
        }
        self.rules.push(rule);
        Ok(())
    }

    /// Find a rule by name.
    pub fn lookup(&self, name: &str) -> Option<&HolidayRule> {
        self.rules.iter().find(|r| r.name == name)
    }

    /// Resolve a registered rule to its date in `year`.
    ///
    /// # Errors
    /// [`Error::UnknownRule`] if `name` is not registered (or a relative
    /// chain references an unregistered name), [`Error::RuleCycle`] if the
    /// relative chain loops back on itself.
    pub fn resolve(&self, name: &str, year: i32) -> Result<DateTime> {
        let rule = self
            .lookup(name)
            .ok_or_else(|| Error::UnknownRule(name.to_string()))?;
        let mut visited = Vec::new();
        self.resolve_inner(rule, year, &mut visited)
    }

    /// Resolve a rule (registered or not) to its date in `year`.
    ///
    /// Relative rules still look up their base in this registry.
    pub fn resolve_rule(&self, rule: &HolidayRule, year: i32) -> Result<DateTime> {
        let mut visited = Vec::new();
        self.resolve_inner(rule, year, &mut visited)
    }

    fn resolve_inner(
        &self,
        rule: &HolidayRule,
        year: i32,
        visited: &mut Vec<String>,
    ) -> Result<DateTime> {
        if visited.iter().any(|seen| seen == &rule.name) {
            return Err(Error::RuleCycle(rule.name.clone()));
        }
        visited.push(rule.name.clone());

        match &rule.kind {
            RuleKind::Fixed { month, day } => {
                Ok(observed(year, i32::from(*month), i32::from(*day)))
            }
            RuleKind::NthWeekday {
                month,
                weekday,
                nth,
            } => {
                let first = calendar::weekday_of(year, *month, 1);
                let delta = (i32::from(weekday.index()) - i32::from(first.index())).rem_euclid(7);
                let day = 1 + delta + 7 * (i32::from(*nth) - 1);
                Ok(DateTime::from_ymd(year, *month, day as i8))
            }
            RuleKind::LastWeekday { month, weekday } => {
                let last = calendar::days_in_month(year, *month);
                let w = calendar::weekday_of(year, *month, last);
                let delta = (i32::from(w.index()) - i32::from(weekday.index())).rem_euclid(7);
                Ok(DateTime::from_ymd(year, *month, last - delta as i8))
            }
            RuleKind::Relative { base, offset_days } => {
                let base_rule = self
                    .lookup(base)
                    .ok_or_else(|| Error::UnknownRule(base.clone()))?;
                let base_dt = self.resolve_inner(base_rule, year, visited)?;
                let (y, m, d) = roll_day(
                    base_dt.year,
                    i32::from(base_dt.month),
                    i32::from(base_dt.day) + offset_days,
                );
                Ok(DateTime::from_ymd(y, m, d))
            }
        }
    }

    /// Check a date against every registered rule.
    ///
    /// Resolves each rule for `date.year` in registration order and
    /// returns the first whose month and day match. `None` when nothing
    /// matches, or when the date's civil-date precision bits are not all
    /// set. Rules that fail to resolve are skipped.
    pub fn is_holiday(&self, date: &DateTime) -> Option<&str> {
        if !date.has(crate::date::precision::CIVIL_DATE) {
            return None;
        }
        for rule in &self.rules {
            if let Ok(resolved) = self.resolve_rule(rule, date.year) {
                if resolved.month == date.month && resolved.day == date.day {
                    return Some(&rule.name);
                }
            }
        }
        None
    }

    /// Resolve every rule for a year, in registration order.
    ///
    /// Rules that fail to resolve (broken or cyclic relative chains) are
    /// skipped.
    pub fn list(&self, year: i32) -> Vec<DateTime> {
        self.rules
            .iter()
            .filter_map(|rule| self.resolve_rule(rule, year).ok())
            .collect()
    }
}

/// Weekend-observed placement of a fixed-date holiday: Saturday shifts one
/// day back, Sunday one day forward, then the day is renormalized across
/// month and year boundaries.
fn observed(year: i32, month: i32, day: i32) -> DateTime {
    let w = calendar::weekday_of(year, month as i8, day as i8);
    let shifted = match w {
        Weekday::Saturday => day - 1,
        Weekday::Sunday => day + 1,
        _ => day,
    };
    let (y, m, d) = roll_day(year, month, shifted);
    DateTime::from_ymd(y, m, d)
}

/// Normalize a day offset into [1, days_in_month], stepping months (and
/// years) as needed.
fn roll_day(mut year: i32, mut month: i32, mut day: i32) -> (i32, i8, i8) {
    while day > i32::from(calendar::days_in_month(year, month as i8)) {
        day -= i32::from(calendar::days_in_month(year, month as i8));
        month += 1;
        if month > 12 {
            month = 1;
            year += 1;
        }
    }
    while day < 1 {
        month -= 1;
        if month < 1 {
            month = 12;
            year -= 1;
        }
        day += i32::from(calendar::days_in_month(year, month as i8));
    }
    (year, month as i8, day as i8)
}

//! Deadline classification: days-until-deadline per entity, stale exclusion,
//! and urgency tiers for the deadline tracker.

use crate::types::{Opportunity, Scholarship};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Entities whose deadline passed more than this many days ago are dropped.
pub const STALE_WINDOW_DAYS: i64 = 30;

/// Urgency tier boundaries are exact: day 6 is still critical, day 7 is
/// upcoming; day 29 is still upcoming, day 30 is safe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Passed,
    Critical,
    Upcoming,
    Safe,
}

impl Urgency {
    pub fn for_days(days_remaining: i64) -> Urgency {
        if days_remaining < 0 {
            Urgency::Passed
        } else if days_remaining <= 6 {
            Urgency::Critical
        } else if days_remaining <= 29 {
            Urgency::Upcoming
        } else {
            Urgency::Safe
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Passed => "passed",
            Urgency::Critical => "critical",
            Urgency::Upcoming => "upcoming",
            Urgency::Safe => "safe",
        }
    }
}

/// One entity on the deadline timeline.
#[derive(Debug, Clone)]
pub struct DeadlineEntry<'a, T> {
    pub entity: &'a T,
    pub deadline: NaiveDate,
    pub days_remaining: i64,
    pub urgency: Urgency,
}

impl<T> DeadlineEntry<'_, T> {
    /// Countdown text: day 0 is the literal "today", everything else shows
    /// the integer count.
    pub fn countdown_label(&self) -> String {
        match self.days_remaining {
            0 => "today".to_string(),
            d if d < 0 => format!("{} day(s) ago", -d),
            d => format!("{} day(s)", d),
        }
    }
}

/// Classify a collection against a reference date.
///
/// Entities with a missing or unparseable deadline are excluded entirely
/// (they stay visible through filtering and scoring, which never look at
/// deadline validity). Entities more than [`STALE_WINDOW_DAYS`] past are
/// excluded. Survivors are sorted ascending by days remaining, soonest
/// first; ties keep original collection order.
pub fn classify<'a, T>(
    items: &'a [T],
    deadline_of: impl Fn(&T) -> &str,
    as_of: NaiveDate,
) -> Vec<DeadlineEntry<'a, T>> {
    let mut timeline = Vec::new();
    for item in items {
        let Some(deadline) = parse_deadline(deadline_of(item)) else {
            continue;
        };
        let days_remaining = (deadline - as_of).num_days();
        if days_remaining < -STALE_WINDOW_DAYS {
            continue;
        }
        timeline.push(DeadlineEntry {
            entity: item,
            deadline,
            days_remaining,
            urgency: Urgency::for_days(days_remaining),
        });
    }
    timeline.sort_by_key(|entry| entry.days_remaining);
    timeline
}

pub fn classify_scholarships(
    items: &[Scholarship],
    as_of: NaiveDate,
) -> Vec<DeadlineEntry<'_, Scholarship>> {
    classify(items, |s| s.deadline.as_str(), as_of)
}

pub fn classify_opportunities(
    items: &[Opportunity],
    as_of: NaiveDate,
) -> Vec<DeadlineEntry<'_, Opportunity>> {
    classify(items, |o| o.deadline.as_str(), as_of)
}

/// Deadline strings that can never resolve to a date.
const VAGUE_DEADLINES: &[&str] = &["varies", "rolling", "ongoing", "tbd", "check website", "n/a"];

/// Parse a deadline string in the formats the datasets actually carry.
/// Returns `None` for vague, malformed, or wildly implausible dates.
pub fn parse_deadline(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    let lower = s.to_lowercase();
    if VAGUE_DEADLINES.iter().any(|v| lower.contains(v)) {
        return None;
    }

    const FORMATS: &[&str] = &["%Y-%m-%d", "%B %d, %Y", "%B %d %Y", "%d %B %Y", "%d/%m/%Y"];
    for fmt in FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, *fmt) {
            if plausible_year(date) {
                return Some(date);
            }
        }
    }

    // "October 2026" style: anchor to mid-month.
    if let Ok(date) = NaiveDate::parse_from_str(&format!("15 {}", s), "%d %B %Y") {
        if plausible_year(date) {
            return Some(date);
        }
    }

    // Embedded ISO date inside a longer string, e.g. "by 2026-03-01 latest".
    if let Ok(re) = regex::Regex::new(r"(\d{4})-(\d{1,2})-(\d{1,2})") {
        if let Some(caps) = re.captures(s) {
            let year: i32 = caps[1].parse().ok()?;
            let month: u32 = caps[2].parse().ok()?;
            let day: u32 = caps[3].parse().ok()?;
            if (2000..=2100).contains(&year) {
                if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                    return Some(date);
                }
            }
        }
    }

    None
}

fn plausible_year(date: NaiveDate) -> bool {
    (2000..=2100).contains(&date.year())
}

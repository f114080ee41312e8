//! Weighted multi-criteria matching of an entity against a user profile.
//!
//! Each criterion independently awards its full weight on an exact match,
//! half on a partial match (country only), and zero otherwise. A criterion
//! whose profile input is blank awards its full weight: unspecified means
//! "don't discriminate", not "fail". The GPA term is a non-gating bonus that
//! can only help, never disqualify.

use crate::filter::{contains_ci, eq_ci, set_has_ci};
use crate::types::{Opportunity, RankingTier, Scholarship, Tuition, University, UserProfile};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Ranked output is truncated to this many entries unless the caller says
/// otherwise.
pub const DEFAULT_TOP_N: usize = 20;

/// Shared weight table. Each entity type totals only the criteria it scores,
/// so the final percentage is always relative to what could have been earned.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(default)]
pub struct Weights {
    pub level: u32,
    pub field: u32,
    pub country: u32,
    pub tier: u32,
    pub tuition: u32,
    pub gpa: u32,
}

impl Default for Weights {
    fn default() -> Self {
        Weights {
            level: 25,
            field: 25,
            country: 30,
            tier: 15,
            tuition: 10,
            gpa: 20,
        }
    }
}

/// An entity paired with its computed match score.
#[derive(Debug, Clone)]
pub struct Ranked<'a, T> {
    pub entity: &'a T,
    pub score: u8,
}

/// Score a scholarship against a profile: level + field + country + gpa.
pub fn score_scholarship(s: &Scholarship, profile: &UserProfile, weights: &Weights) -> u8 {
    let total = weights.level + weights.field + weights.country + weights.gpa;
    let mut awarded = 0.0;
    awarded += exact_criterion(weights.level, &profile.level, set_has_ci(&s.level, &profile.level));
    awarded += field_criterion(weights.field, &profile.field, &s.field);
    awarded += country_criterion(weights.country, &profile.country, &s.country);
    awarded += gpa_bonus(weights.gpa, profile.clamped_gpa());
    to_percent(awarded, total)
}

/// Score a university: field + country + ranking tier + tuition + gpa.
/// Tier and tuition are entity-side bonuses independent of the profile.
pub fn score_university(u: &University, profile: &UserProfile, weights: &Weights) -> u8 {
    let total = weights.field + weights.country + weights.tier + weights.tuition + weights.gpa;
    let mut awarded = 0.0;
    awarded += field_criterion(weights.field, &profile.field, &u.fields);
    awarded += country_criterion(weights.country, &profile.country, &u.country);
    awarded += tier_bonus(weights.tier, u.ranking_tier);
    awarded += tuition_bonus(weights.tuition, u.tuition);
    awarded += gpa_bonus(weights.gpa, profile.clamped_gpa());
    to_percent(awarded, total)
}

/// Score an opportunity: field + country + gpa. Field is scalar, matched by
/// case-insensitive equality.
pub fn score_opportunity(o: &Opportunity, profile: &UserProfile, weights: &Weights) -> u8 {
    let total = weights.field + weights.country + weights.gpa;
    let mut awarded = 0.0;
    let wanted = profile.field.trim();
    if wanted.is_empty() || eq_ci(wanted, "any") {
        awarded += weights.field as f64;
    } else if eq_ci(&o.field, wanted) {
        awarded += weights.field as f64;
    }
    awarded += country_criterion(weights.country, &profile.country, &o.country);
    awarded += gpa_bonus(weights.gpa, profile.clamped_gpa());
    to_percent(awarded, total)
}

pub fn rank_scholarships<'a>(
    items: &'a [Scholarship],
    profile: &UserProfile,
    weights: &Weights,
    top_n: usize,
) -> Vec<Ranked<'a, Scholarship>> {
    rank_by(items, top_n, |s| score_scholarship(s, profile, weights))
}

pub fn rank_universities<'a>(
    items: &'a [University],
    profile: &UserProfile,
    weights: &Weights,
    top_n: usize,
) -> Vec<Ranked<'a, University>> {
    rank_by(items, top_n, |u| score_university(u, profile, weights))
}

pub fn rank_opportunities<'a>(
    items: &'a [Opportunity],
    profile: &UserProfile,
    weights: &Weights,
    top_n: usize,
) -> Vec<Ranked<'a, Opportunity>> {
    rank_by(items, top_n, |o| score_opportunity(o, profile, weights))
}

/// Score every entity, sort descending, keep the top N. The sort is stable:
/// entities with equal scores keep their original collection order.
fn rank_by<T>(items: &[T], top_n: usize, score: impl Fn(&T) -> u8) -> Vec<Ranked<'_, T>> {
    let mut ranked: Vec<Ranked<'_, T>> = items
        .iter()
        .map(|entity| Ranked {
            score: score(entity),
            entity,
        })
        .collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked.truncate(top_n);
    ranked
}

/// Deterministic stand-in for the advisor's competition estimate: a close
/// deadline and a crowded matching pool read as tougher competition.
pub fn competitiveness(days_remaining: i64, pool_size: usize) -> &'static str {
    let mut pressure = 0;
    if (0..=6).contains(&days_remaining) {
        pressure += 2;
    } else if (7..=29).contains(&days_remaining) {
        pressure += 1;
    }
    if pool_size >= 20 {
        pressure += 2;
    } else if pool_size >= 5 {
        pressure += 1;
    }
    match pressure {
        0 | 1 => "low",
        2 | 3 => "moderate",
        _ => "high",
    }
}

fn exact_criterion(weight: u32, wanted: &str, matched: bool) -> f64 {
    let w = weight as f64;
    if wanted.trim().is_empty() {
        w
    } else if matched {
        w
    } else {
        0.0
    }
}

/// Set-valued field criterion with the "any" wildcard on both sides.
fn field_criterion(weight: u32, wanted: &str, actual: &BTreeSet<String>) -> f64 {
    let w = weight as f64;
    let wanted = wanted.trim();
    if wanted.is_empty() || eq_ci(wanted, "any") {
        w
    } else if set_has_ci(actual, wanted) || set_has_ci(actual, "any") {
        w
    } else {
        0.0
    }
}

/// Country criterion: exact equality earns the full weight, a substring
/// overlap in either direction earns half.
fn country_criterion(weight: u32, wanted: &str, actual: &str) -> f64 {
    let w = weight as f64;
    let wanted = wanted.trim();
    if wanted.is_empty() {
        w
    } else if eq_ci(actual, wanted) {
        w
    } else if !actual.trim().is_empty()
        && (contains_ci(actual, wanted) || contains_ci(wanted, actual))
    {
        w / 2.0
    } else {
        0.0
    }
}

fn tier_bonus(weight: u32, tier: RankingTier) -> f64 {
    let w = weight as f64;
    match tier {
        RankingTier::Top10 | RankingTier::Top50 => w,
        RankingTier::Top100 | RankingTier::Top200 => w / 2.0,
        RankingTier::Other => 0.0,
    }
}

fn tuition_bonus(weight: u32, tuition: Option<Tuition>) -> f64 {
    let w = weight as f64;
    match tuition {
        Some(Tuition::Free) | Some(Tuition::Low) => w,
        Some(Tuition::Medium) => w / 2.0,
        Some(Tuition::High) | None => 0.0,
    }
}

/// GPA tiers: >= 3.5 full weight, >= 3.0 three quarters, >= 2.5 half, below
/// that a quarter floor. Never zero, never a disqualifier.
fn gpa_bonus(weight: u32, gpa: f64) -> f64 {
    let w = weight as f64;
    if gpa >= 3.5 {
        w
    } else if gpa >= 3.0 {
        w * 0.75
    } else if gpa >= 2.5 {
        w * 0.5
    } else {
        w * 0.25
    }
}

fn to_percent(awarded: f64, total: u32) -> u8 {
    if total == 0 {
        return 0;
    }
    (100.0 * awarded / total as f64).round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scholarship(name: &str, country: &str, fields: &[&str]) -> Scholarship {
        serde_json::from_value(serde_json::json!({
            "name": name,
            "country": country,
            "level": ["masters"],
            "field": fields,
        }))
        .unwrap()
    }

    #[test]
    fn test_country_full_beats_partial_and_zero() {
        let profile = UserProfile::new(3.6, "Ghana", "", "");
        let w = Weights::default();
        let a = scholarship("A", "Ghana", &["Engineering"]);
        let b = scholarship("B", "Nigeria", &["Engineering"]);
        assert!(score_scholarship(&a, &profile, &w) > score_scholarship(&b, &profile, &w));
    }

    #[test]
    fn test_partial_country_credit() {
        let w = Weights::default();
        let profile = UserProfile::new(0.0, "Korea", "", "");
        let exact = scholarship("A", "Korea", &[]);
        let partial = scholarship("B", "South Korea", &[]);
        let miss = scholarship("C", "France", &[]);
        let s_exact = score_scholarship(&exact, &profile, &w);
        let s_partial = score_scholarship(&partial, &profile, &w);
        let s_miss = score_scholarship(&miss, &profile, &w);
        assert!(s_exact > s_partial);
        assert!(s_partial > s_miss);
    }

    #[test]
    fn test_blank_profile_scores_floor_not_zero() {
        let profile = UserProfile::default();
        let w = Weights::default();
        let s = scholarship("A", "Ghana", &["ai"]);
        let score = score_scholarship(&s, &profile, &w);
        // All criteria unspecified award full weight; GPA contributes its
        // quarter floor: (25 + 25 + 30 + 5) / 100.
        assert_eq!(score, 85);
    }

    #[test]
    fn test_score_bounded() {
        let w = Weights::default();
        let profiles = [
            UserProfile::default(),
            UserProfile::new(4.0, "Ghana", "ai", "masters"),
            UserProfile::new(-3.0, "Nowhere", "nothing", "none"),
        ];
        let s = scholarship("A", "Ghana", &["ai"]);
        for p in &profiles {
            let score = score_scholarship(&s, p, &w);
            assert!(score <= 100);
        }
        let perfect = UserProfile::new(3.9, "Ghana", "ai", "masters");
        assert_eq!(score_scholarship(&s, &perfect, &w), 100);
    }

    #[test]
    fn test_gpa_tiers() {
        let w = Weights {
            level: 0,
            field: 0,
            country: 0,
            tier: 0,
            tuition: 0,
            gpa: 100,
        };
        let s = scholarship("A", "", &[]);
        let score_at = |gpa: f64| {
            let p = UserProfile::new(gpa, "x", "x", "x");
            score_scholarship(&s, &p, &w)
        };
        assert_eq!(score_at(3.5), 100);
        assert_eq!(score_at(3.0), 75);
        assert_eq!(score_at(2.5), 50);
        assert_eq!(score_at(0.0), 25);
    }

    #[test]
    fn test_missing_entity_fields_score_zero_not_error() {
        let bare: Scholarship = serde_json::from_str(r#"{"name": "Bare"}"#).unwrap();
        let profile = UserProfile::new(2.0, "Ghana", "ai", "masters");
        let score = score_scholarship(&bare, &profile, &Weights::default());
        // Only the GPA floor lands: 20 * 0.25 / 100.
        assert_eq!(score, 5);
    }

    #[test]
    fn test_stable_ranking_preserves_order_on_ties() {
        let items: Vec<Scholarship> = (0..6)
            .map(|i| scholarship(&format!("S{i}"), "Ghana", &["ai"]))
            .collect();
        let profile = UserProfile::new(3.6, "Ghana", "ai", "masters");
        let ranked = rank_scholarships(&items, &profile, &Weights::default(), DEFAULT_TOP_N);
        let names: Vec<&str> = ranked.iter().map(|r| r.entity.name.as_str()).collect();
        assert_eq!(names, vec!["S0", "S1", "S2", "S3", "S4", "S5"]);
    }

    #[test]
    fn test_rank_truncates_to_top_n() {
        let items: Vec<Scholarship> = (0..30)
            .map(|i| scholarship(&format!("S{i}"), "Ghana", &[]))
            .collect();
        let ranked = rank_scholarships(&items, &UserProfile::default(), &Weights::default(), 20);
        assert_eq!(ranked.len(), 20);
    }

    #[test]
    fn test_university_entity_bonuses() {
        let w = Weights::default();
        let profile = UserProfile::default();
        let top: University = serde_json::from_str(
            r#"{"name": "A", "ranking_tier": "top10", "tuition": "free"}"#,
        )
        .unwrap();
        let mid: University = serde_json::from_str(
            r#"{"name": "B", "ranking_tier": "top200", "tuition": "medium"}"#,
        )
        .unwrap();
        let low: University =
            serde_json::from_str(r#"{"name": "C", "ranking_tier": "other", "tuition": "high"}"#)
                .unwrap();
        let s_top = score_university(&top, &profile, &w);
        let s_mid = score_university(&mid, &profile, &w);
        let s_low = score_university(&low, &profile, &w);
        assert!(s_top > s_mid);
        assert!(s_mid > s_low);
    }

    #[test]
    fn test_opportunity_field_equality() {
        let w = Weights::default();
        let opp: Opportunity = serde_json::from_str(
            r#"{"name": "O", "type": "research", "country": "Germany", "field": "Physics"}"#,
        )
        .unwrap();
        let hit = UserProfile::new(0.0, "", "physics", "");
        let miss = UserProfile::new(0.0, "", "chemistry", "");
        assert!(score_opportunity(&opp, &hit, &w) > score_opportunity(&opp, &miss, &w));
    }

    #[test]
    fn test_competitiveness_deterministic() {
        assert_eq!(competitiveness(400, 1), "low");
        assert_eq!(competitiveness(3, 2), "moderate");
        assert_eq!(competitiveness(3, 25), "high");
        assert_eq!(competitiveness(15, 10), "moderate");
        // Same inputs, same answer.
        assert_eq!(competitiveness(3, 25), competitiveness(3, 25));
    }
}

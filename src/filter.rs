//! Predicate-based subsequence selection: free-text substring match plus
//! categorical facet constraints. Filtering is pure: it never mutates or
//! reorders the source collection and holds no cursor state.

use crate::region::country_in_region;
use crate::types::{Opportunity, OpportunityType, RankingTier, Scholarship, Tuition, University};
use std::collections::BTreeSet;

/// Facet selections for the scholarship list. `None` (or an empty string)
/// means "don't care", never "exclude".
#[derive(Debug, Clone, Default)]
pub struct ScholarshipFilter {
    pub query: String,
    pub country: Option<String>,
    pub region: Option<String>,
    pub level: Option<String>,
    pub field: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UniversityFilter {
    pub query: String,
    pub country: Option<String>,
    pub region: Option<String>,
    pub field: Option<String>,
    pub ranking_tier: Option<RankingTier>,
    pub tuition: Option<Tuition>,
}

#[derive(Debug, Clone, Default)]
pub struct OpportunityFilter {
    pub query: String,
    pub country: Option<String>,
    pub region: Option<String>,
    pub field: Option<String>,
    pub kind: Option<OpportunityType>,
}

pub fn filter_scholarships<'a>(
    items: &'a [Scholarship],
    filter: &ScholarshipFilter,
) -> Vec<&'a Scholarship> {
    items
        .iter()
        .filter(|s| {
            let text = format!(
                "{} {} {} {} {}",
                s.name, s.university, s.country, s.funding, s.description
            );
            query_matches(&filter.query, &text)
                && scalar_matches(filter.country.as_deref(), &s.country)
                && region_matches(filter.region.as_deref(), &s.country)
                && set_matches(filter.level.as_deref(), &s.level)
                && field_set_matches(filter.field.as_deref(), &s.field)
        })
        .collect()
}

pub fn filter_universities<'a>(
    items: &'a [University],
    filter: &UniversityFilter,
) -> Vec<&'a University> {
    items
        .iter()
        .filter(|u| {
            let text = format!("{} {} {}", u.name, u.country, u.notes);
            query_matches(&filter.query, &text)
                && scalar_matches(filter.country.as_deref(), &u.country)
                && region_matches(filter.region.as_deref(), &u.country)
                && field_set_matches(filter.field.as_deref(), &u.fields)
                && filter.ranking_tier.map_or(true, |t| u.ranking_tier == t)
                && filter.tuition.map_or(true, |t| u.tuition == Some(t))
        })
        .collect()
}

pub fn filter_opportunities<'a>(
    items: &'a [Opportunity],
    filter: &OpportunityFilter,
) -> Vec<&'a Opportunity> {
    items
        .iter()
        .filter(|o| {
            let text = format!(
                "{} {} {} {} {} {}",
                o.name, o.organization, o.country, o.field, o.description, o.funding
            );
            query_matches(&filter.query, &text)
                && scalar_matches(filter.country.as_deref(), &o.country)
                && region_matches(filter.region.as_deref(), &o.country)
                && scalar_matches(filter.field.as_deref(), &o.field)
                && filter.kind.map_or(true, |k| o.kind == Some(k))
        })
        .collect()
}

/// Case-insensitive substring containment.
pub(crate) fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Case-insensitive equality. Folds with the same Unicode lowercasing as
/// [`contains_ci`] so "Zürich" equals "ZÜRICH" under both predicates.
pub(crate) fn eq_ci(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

/// Case-insensitive set membership.
pub(crate) fn set_has_ci(set: &BTreeSet<String>, wanted: &str) -> bool {
    set.iter().any(|v| eq_ci(v, wanted))
}

fn query_matches(query: &str, text: &str) -> bool {
    query.trim().is_empty() || contains_ci(text, query.trim())
}

fn scalar_matches(selected: Option<&str>, actual: &str) -> bool {
    match selected {
        None => true,
        Some(s) if s.trim().is_empty() => true,
        Some(s) => eq_ci(actual, s),
    }
}

fn set_matches(selected: Option<&str>, actual: &BTreeSet<String>) -> bool {
    match selected {
        None => true,
        Some(s) if s.trim().is_empty() => true,
        Some(s) => set_has_ci(actual, s),
    }
}

/// Field facet with "any" wildcard on both sides: a selection of "any"
/// matches everything, and an entity tagged "any" matches every selection.
fn field_set_matches(selected: Option<&str>, actual: &BTreeSet<String>) -> bool {
    match selected {
        None => true,
        Some(s) if s.trim().is_empty() || eq_ci(s, "any") => true,
        Some(s) => set_has_ci(actual, s) || set_has_ci(actual, "any"),
    }
}

/// Region facet: "All" (or none) matches everything; otherwise the entity's
/// country must belong to the region. "Multiple" countries match every region.
fn region_matches(selected: Option<&str>, country: &str) -> bool {
    match selected {
        None => true,
        Some(r) if r.trim().is_empty() || eq_ci(r, "all") => true,
        Some(r) => country_in_region(country, r),
    }
}

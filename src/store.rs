//! The in-memory data store: read-only typed collections plus the facet
//! catalogs derived from them. Built once, up front, and handed to the
//! engine's operations, so there is no implicit global state.

use crate::facet::facet_values;
use crate::storage;
use crate::types::{Opportunity, Scholarship, University};
use anyhow::Result;

/// Facet option lists, computed once per collection load. Derived views only;
/// recompute happens solely by rebuilding the store.
#[derive(Debug, Clone, Default)]
pub struct FacetCatalog {
    pub scholarship_countries: Vec<String>,
    pub scholarship_levels: Vec<String>,
    pub scholarship_fields: Vec<String>,
    pub university_countries: Vec<String>,
    pub university_fields: Vec<String>,
    pub opportunity_countries: Vec<String>,
    pub opportunity_fields: Vec<String>,
    pub opportunity_types: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct DataStore {
    scholarships: Vec<Scholarship>,
    universities: Vec<University>,
    opportunities: Vec<Opportunity>,
    facets: FacetCatalog,
}

impl DataStore {
    /// Build a store from already-materialized collections.
    pub fn new(
        scholarships: Vec<Scholarship>,
        universities: Vec<University>,
        opportunities: Vec<Opportunity>,
    ) -> Self {
        let facets = FacetCatalog {
            scholarship_countries: facet_values(&scholarships, |s| vec![s.country.clone()]),
            scholarship_levels: facet_values(&scholarships, |s| s.level.iter().cloned().collect()),
            scholarship_fields: facet_values(&scholarships, |s| s.field.iter().cloned().collect()),
            university_countries: facet_values(&universities, |u| vec![u.country.clone()]),
            university_fields: facet_values(&universities, |u| u.fields.iter().cloned().collect()),
            opportunity_countries: facet_values(&opportunities, |o| vec![o.country.clone()]),
            opportunity_fields: facet_values(&opportunities, |o| vec![o.field.clone()]),
            opportunity_types: facet_values(&opportunities, |o| {
                o.kind.map(|k| k.as_str().to_string()).into_iter().collect()
            }),
        };

        DataStore {
            scholarships,
            universities,
            opportunities,
            facets,
        }
    }

    /// One-shot load of every collection under `root`. The readiness gate:
    /// nothing else in the engine runs until this returns.
    pub fn load(root: &str) -> Result<Self> {
        let scholarships = storage::load_scholarships(root)?;
        let universities = storage::load_universities(root)?;
        let opportunities = storage::load_opportunities(root)?;
        Ok(DataStore::new(scholarships, universities, opportunities))
    }

    pub fn scholarships(&self) -> &[Scholarship] {
        &self.scholarships
    }

    pub fn universities(&self) -> &[University] {
        &self.universities
    }

    pub fn opportunities(&self) -> &[Opportunity] {
        &self.opportunities
    }

    /// The memoized facet option lists.
    pub fn facets(&self) -> &FacetCatalog {
        &self.facets
    }

    pub fn is_empty(&self) -> bool {
        self.scholarships.is_empty() && self.universities.is_empty() && self.opportunities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> DataStore {
        let scholarships: Vec<Scholarship> = serde_json::from_str(
            r#"[
                {"name": "A", "country": "Ghana", "level": ["masters"], "field": "ai"},
                {"name": "B", "country": "UK", "level": ["phd", "masters"], "field": ["cs"]}
            ]"#,
        )
        .unwrap();
        let opportunities: Vec<Opportunity> = serde_json::from_str(
            r#"[
                {"name": "O1", "type": "internship", "organization": "X", "country": "USA", "field": "cs"},
                {"name": "O2", "type": "research", "organization": "Y", "country": "UK", "field": "ai"}
            ]"#,
        )
        .unwrap();
        DataStore::new(scholarships, vec![], opportunities)
    }

    #[test]
    fn test_facets_computed_at_construction() {
        let store = store();
        assert_eq!(store.facets().scholarship_countries, vec!["Ghana", "UK"]);
        assert_eq!(store.facets().scholarship_levels, vec!["masters", "phd"]);
        assert_eq!(store.facets().scholarship_fields, vec!["ai", "cs"]);
        assert_eq!(
            store.facets().opportunity_types,
            vec!["internship", "research"]
        );
        assert!(store.facets().university_fields.is_empty());
    }

    #[test]
    fn test_untyped_opportunity_yields_no_type_facet() {
        let opportunities: Vec<Opportunity> = serde_json::from_str(
            r#"[
                {"name": "O1", "type": "hackathon", "organization": "X"},
                {"name": "O2", "type": "research", "organization": "Y"}
            ]"#,
        )
        .unwrap();
        let store = DataStore::new(vec![], vec![], opportunities);
        assert_eq!(store.opportunities().len(), 2);
        assert_eq!(store.facets().opportunity_types, vec!["research"]);
    }

    #[test]
    fn test_collections_read_only_and_ordered() {
        let store = store();
        assert_eq!(store.scholarships()[0].name, "A");
        assert_eq!(store.scholarships()[1].name, "B");
        assert!(!store.is_empty());
    }

    #[test]
    fn test_empty_store() {
        let store = DataStore::new(vec![], vec![], vec![]);
        assert!(store.is_empty());
        assert!(store.facets().scholarship_countries.is_empty());
    }
}

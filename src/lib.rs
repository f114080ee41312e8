//! ScholarFinder Engine
//!
//! Faceted search, weighted profile matching, and deadline urgency over
//! in-memory study-abroad reference collections (scholarships, universities,
//! opportunities). The UI layer is an external caller: it loads the data,
//! invokes these operations, and renders whatever comes back.

pub mod deadline;
pub mod facet;
pub mod filter;
pub mod page;
pub mod region;
pub mod report;
pub mod score;
pub mod storage;
pub mod store;
pub mod types;

pub use types::*;

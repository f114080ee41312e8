use anyhow::Result;
use scholarfinder::filter::{filter_scholarships, ScholarshipFilter};
use scholarfinder::page::PaginationCursor;
use scholarfinder::report::generate_digest;
use scholarfinder::score::DEFAULT_TOP_N;
use scholarfinder::storage::load_profile;
use scholarfinder::store::DataStore;

fn main() -> Result<()> {
    let root = std::env::var("ROOT").unwrap_or_else(|_| ".".to_string());

    let store = DataStore::load(&root)?;
    println!(
        "Loaded {} scholarships, {} universities, {} opportunities",
        store.scholarships().len(),
        store.universities().len(),
        store.opportunities().len()
    );
    println!(
        "Facets: {} countries, {} levels, {} fields",
        store.facets().scholarship_countries.len(),
        store.facets().scholarship_levels.len(),
        store.facets().scholarship_fields.len()
    );

    // Optional free-text query: first page of matching scholarships.
    let query = std::env::args().nth(1).unwrap_or_default();
    if !query.is_empty() {
        let filter = ScholarshipFilter {
            query: query.clone(),
            ..Default::default()
        };
        let hits = filter_scholarships(store.scholarships(), &filter);
        let cursor = PaginationCursor::default();
        println!("\nResults for \"{}\":", query);
        for s in cursor.visible(&hits) {
            println!("- {} ({}) - {}", s.name, s.country, s.deadline);
        }
        println!("Showing {} of {}", cursor.visible(&hits).len(), hits.len());
    }

    let profile_file = load_profile(&root)?;
    let as_of = chrono::Utc::now().date_naive();
    let digest = generate_digest(
        &store,
        &profile_file.profile,
        &profile_file.weights,
        as_of,
        DEFAULT_TOP_N,
    );
    println!("\n{}", digest);

    Ok(())
}

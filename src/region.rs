//! Static region -> countries table backing the region facet.
//!
//! Covers every country appearing in the scholarship and university datasets.
//! An entity whose country is "Multiple" (or a qualified form like
//! "Multiple (Africa)") is treated as belonging to every region.

pub const REGION_MAP: &[(&str, &[&str])] = &[
    (
        "Africa",
        &[
            "Egypt", "Ethiopia", "Ghana", "Kenya", "Nigeria", "Rwanda", "South Africa",
            "Tanzania", "Uganda",
        ],
    ),
    (
        "Europe",
        &[
            "Austria", "Czech Republic", "Denmark", "Finland", "France", "Germany", "Hungary",
            "Ireland", "Italy", "Netherlands", "Norway", "Poland", "Portugal", "Romania",
            "Russia", "Spain", "Sweden", "Switzerland", "Turkey", "UK",
        ],
    ),
    ("Middle East", &["Israel", "Qatar", "Saudi Arabia", "UAE"]),
    (
        "Asia",
        &[
            "Brunei", "China", "Hong Kong", "India", "Japan", "Singapore", "South Korea",
            "Taiwan",
        ],
    ),
    ("North America", &["Canada", "Mexico", "USA"]),
    ("Oceania", &["Australia", "New Zealand"]),
    ("South America", &["Brazil", "Chile"]),
];

/// Region names in table order, for populating the region dropdown.
pub fn region_names() -> Vec<&'static str> {
    REGION_MAP.iter().map(|(name, _)| *name).collect()
}

/// Countries belonging to a region (case-insensitive region lookup).
pub fn region_countries(region: &str) -> Option<&'static [&'static str]> {
    REGION_MAP
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(region))
        .map(|(_, countries)| *countries)
}

/// Whether a country belongs to a region. "Multiple" countries match every
/// region; an unknown region matches nothing.
pub fn country_in_region(country: &str, region: &str) -> bool {
    if country.trim().to_lowercase().starts_with("multiple") {
        return true;
    }
    match region_countries(region) {
        Some(countries) => countries.iter().any(|c| c.eq_ignore_ascii_case(country)),
        None => false,
    }
}

/// Region a country belongs to, if it appears in the table.
pub fn region_of(country: &str) -> Option<&'static str> {
    REGION_MAP
        .iter()
        .find(|(_, countries)| countries.iter().any(|c| c.eq_ignore_ascii_case(country)))
        .map(|(name, _)| *name)
}

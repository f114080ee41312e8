//! Markdown digest rendering for the CLI: top matches plus the deadline
//! timeline. The engine modules stay presentation-free; this is the one
//! caller-side formatter shipped with the binary.

use crate::deadline::{classify_scholarships, parse_deadline};
use crate::filter::{filter_scholarships, ScholarshipFilter};
use crate::score::{
    competitiveness, rank_scholarships, rank_universities, Weights,
};
use crate::store::DataStore;
use crate::types::UserProfile;
use chrono::NaiveDate;

pub fn generate_digest(
    store: &DataStore,
    profile: &UserProfile,
    weights: &Weights,
    as_of: NaiveDate,
    top_n: usize,
) -> String {
    let mut report = String::from("# ScholarFinder Digest\n\n");
    report.push_str(&format!("Generated: {}\n\n", as_of.format("%Y-%m-%d")));

    // Scarcity of the field-matching pool feeds the competition estimate.
    let pool = if profile.field.trim().is_empty() {
        store.scholarships().len()
    } else {
        let field_only = ScholarshipFilter {
            field: Some(profile.field.clone()),
            ..Default::default()
        };
        filter_scholarships(store.scholarships(), &field_only).len()
    };

    report.push_str("## Top Scholarship Matches\n\n");
    let ranked = rank_scholarships(store.scholarships(), profile, weights, top_n);
    if ranked.is_empty() {
        report.push_str("*No scholarships loaded*\n\n");
    } else {
        report.push_str("| # | Name | Country | Funding | Deadline | Score | Competition |\n");
        report.push_str("|---|------|---------|---------|----------|-------|-------------|\n");
        for (i, r) in ranked.iter().enumerate() {
            let days = parse_deadline(&r.entity.deadline)
                .map(|d| (d - as_of).num_days())
                .unwrap_or(i64::MAX);
            report.push_str(&format!(
                "| {} | {} | {} | {} | {} | {}% | {} |\n",
                i + 1,
                truncate_str(&r.entity.name, 40),
                r.entity.country,
                truncate_str(&r.entity.funding, 20),
                r.entity.deadline,
                r.score,
                competitiveness(days, pool),
            ));
        }
        report.push('\n');
    }

    report.push_str("## Top Universities\n\n");
    let unis = rank_universities(store.universities(), profile, weights, 5);
    if unis.is_empty() {
        report.push_str("*No universities loaded*\n\n");
    } else {
        for r in &unis {
            let tuition = r
                .entity
                .tuition
                .map(|t| t.as_str())
                .unwrap_or("unknown");
            report.push_str(&format!(
                "- **{}** ({}): {} | tuition: {} | {}%\n",
                r.entity.name,
                r.entity.country,
                r.entity.ranking_tier.as_str(),
                tuition,
                r.score,
            ));
        }
        report.push('\n');
    }

    report.push_str("## Deadline Timeline\n\n");
    let timeline = classify_scholarships(store.scholarships(), as_of);
    if timeline.is_empty() {
        report.push_str("*No dated deadlines on record*\n");
    } else {
        report.push_str("| Name | Deadline | Remaining | Urgency |\n");
        report.push_str("|------|----------|-----------|--------|\n");
        for entry in &timeline {
            report.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                truncate_str(&entry.entity.name, 40),
                entry.deadline.format("%Y-%m-%d"),
                entry.countdown_label(),
                entry.urgency.as_str(),
            ));
        }
    }

    report
}

/// Truncate for table display (Unicode-safe).
fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let truncated: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", truncated)
    } else {
        s.to_string()
    }
}

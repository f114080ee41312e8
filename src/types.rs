use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;

/// Accepts either a scalar string or an array of strings in the source JSON
/// and always lands as a set. Every set-shaped attribute goes through this
/// once at load time, so no consumer ever branches on shape.
fn string_or_seq<'de, D>(de: D) -> Result<BTreeSet<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(de)? {
        OneOrMany::One(s) => BTreeSet::from([s]),
        OneOrMany::Many(v) => v.into_iter().collect(),
    })
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Scholarship {
    pub name: String,
    #[serde(default)]
    pub university: String,
    #[serde(default)]
    pub country: String,
    #[serde(default, deserialize_with = "string_or_seq")]
    pub level: BTreeSet<String>,
    #[serde(default, deserialize_with = "string_or_seq")]
    pub field: BTreeSet<String>,
    #[serde(default)]
    pub funding: String,
    #[serde(default)]
    pub deadline: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub link: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct University {
    pub name: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub ranking_tier: RankingTier,
    #[serde(default, deserialize_with = "lenient_tuition")]
    pub tuition: Option<Tuition>,
    #[serde(default, deserialize_with = "string_or_seq")]
    pub fields: BTreeSet<String>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub website: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Opportunity {
    pub name: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub country: String,
    #[serde(default, rename = "type", deserialize_with = "lenient_kind")]
    pub kind: Option<OpportunityType>,
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub eligibility: Option<String>,
    #[serde(default)]
    pub funding: String,
    #[serde(default)]
    pub deadline: String,
    #[serde(default)]
    pub link: String,
}

/// Ranking band for a university. Unknown spellings in the data degrade to
/// `Other` rather than failing the load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RankingTier {
    Top10,
    Top50,
    Top100,
    Top200,
    #[default]
    Other,
}

impl<'de> Deserialize<'de> for RankingTier {
    fn deserialize<D>(de: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(de)?;
        Ok(RankingTier::parse(&raw))
    }
}

impl RankingTier {
    pub fn parse(s: &str) -> RankingTier {
        match s.trim().to_lowercase().as_str() {
            "top10" => RankingTier::Top10,
            "top50" => RankingTier::Top50,
            "top100" => RankingTier::Top100,
            "top200" => RankingTier::Top200,
            _ => RankingTier::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RankingTier::Top10 => "top10",
            RankingTier::Top50 => "top50",
            RankingTier::Top100 => "top100",
            RankingTier::Top200 => "top200",
            RankingTier::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tuition {
    Free,
    Low,
    Medium,
    High,
}

impl Tuition {
    pub fn parse(s: &str) -> Option<Tuition> {
        match s.trim().to_lowercase().as_str() {
            "free" => Some(Tuition::Free),
            "low" => Some(Tuition::Low),
            "medium" => Some(Tuition::Medium),
            "high" => Some(Tuition::High),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tuition::Free => "free",
            Tuition::Low => "low",
            Tuition::Medium => "medium",
            Tuition::High => "high",
        }
    }
}

/// Unknown tuition bands become `None` instead of a load failure; the scorer
/// treats a missing band as a non-match.
fn lenient_tuition<'de, D>(de: D) -> Result<Option<Tuition>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(de)?;
    Ok(raw.as_deref().and_then(Tuition::parse))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OpportunityType {
    Internship,
    Research,
    Competition,
    Fellowship,
    SummerSchool,
    Exchange,
}

impl OpportunityType {
    pub fn parse(s: &str) -> Option<OpportunityType> {
        match s.trim().to_lowercase().as_str() {
            "internship" => Some(OpportunityType::Internship),
            "research" => Some(OpportunityType::Research),
            "competition" => Some(OpportunityType::Competition),
            "fellowship" => Some(OpportunityType::Fellowship),
            "summer_school" => Some(OpportunityType::SummerSchool),
            "exchange" => Some(OpportunityType::Exchange),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OpportunityType::Internship => "internship",
            OpportunityType::Research => "research",
            OpportunityType::Competition => "competition",
            OpportunityType::Fellowship => "fellowship",
            OpportunityType::SummerSchool => "summer_school",
            OpportunityType::Exchange => "exchange",
        }
    }
}

/// Unknown or missing opportunity types become `None` instead of sinking the
/// whole collection load; a `None` kind is a non-match for the kind facet.
fn lenient_kind<'de, D>(de: D) -> Result<Option<OpportunityType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(de)?;
    Ok(raw.as_deref().and_then(OpportunityType::parse))
}

/// Ephemeral user profile for the matcher. Empty strings mean "unspecified";
/// an unspecified criterion never counts against an entity.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UserProfile {
    #[serde(default)]
    pub gpa: f64,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub level: String,
}

impl UserProfile {
    pub fn new(gpa: f64, country: &str, field: &str, level: &str) -> Self {
        UserProfile {
            gpa: gpa.clamp(0.0, 4.0),
            country: country.to_string(),
            field: field.to_string(),
            level: level.to_string(),
        }
    }

    /// GPA on the legal [0, 4] scale regardless of what the caller supplied.
    pub fn clamped_gpa(&self) -> f64 {
        self.gpa.clamp(0.0, 4.0)
    }
}

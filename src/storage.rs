//! Dataset and profile loading. Collections arrive as JSON arrays under
//! `data/`, the user profile and scoring weights as YAML. A missing file is
//! an empty collection; a malformed one is a hard error for the caller.

use crate::score::Weights;
use crate::types::{Opportunity, Scholarship, University, UserProfile};
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub fn load_scholarships(root: &str) -> Result<Vec<Scholarship>> {
    load_collection(root, "scholarships.json")
}

pub fn load_universities(root: &str) -> Result<Vec<University>> {
    load_collection(root, "universities.json")
}

pub fn load_opportunities(root: &str) -> Result<Vec<Opportunity>> {
    load_collection(root, "opportunities.json")
}

fn load_collection<T: DeserializeOwned>(root: &str, name: &str) -> Result<Vec<T>> {
    let path = PathBuf::from(root).join("data").join(name);

    if !path.exists() {
        return Ok(vec![]);
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read collection from {:?}", path))?;

    let records: Vec<T> = serde_json::from_str(&content)
        .with_context(|| format!("Collection {:?} is not an array of records", path))?;

    Ok(records)
}

/// Profile file shape: `profile:` block plus optional `weights:` overrides.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ProfileFile {
    #[serde(default)]
    pub profile: UserProfile,
    #[serde(default)]
    pub weights: Weights,
}

pub fn load_profile(root: &str) -> Result<ProfileFile> {
    let path = PathBuf::from(root).join("profile.yml");

    if !path.exists() {
        return Ok(ProfileFile::default());
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read profile from {:?}", path))?;

    let mut file: ProfileFile =
        serde_yaml::from_str(&content).with_context(|| "Failed to parse profile YAML")?;

    file.profile.gpa = file.profile.gpa.clamp(0.0, 4.0);
    Ok(file)
}

use crate::lead::FundingStage;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main scoring configuration.
///
/// Defines how lead scores are calculated. The rubric — keyword marker sets,
/// funding tier tables, per-rule point values, and the score cap — lives
/// here rather than in module constants, so it can be tuned without touching
/// engine logic. Any field omitted from a config file keeps its default.
///
/// Example YAML:
/// ```yaml
/// seniority_markers: ["director", "head", "vp", "chief"]
/// relevance_markers: ["toxicology", "safety", "hepatic", "3d", "preclinical", "liver"]
/// high_growth_stages: ["Series A", "Series B"]
/// established_stages: ["Series C", "IPO"]
/// weights:
///   high_value_role: 30
///   recent_paper: 40
/// score_cap: 100
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct ScoringConfig {
    /// Lowercase tokens marking a senior title ("director", "vp", ...)
    pub seniority_markers: Vec<String>,

    /// Lowercase tokens marking a domain-relevant title ("toxicology", ...).
    /// Relevance gates the role category: seniority alone scores nothing.
    pub relevance_markers: Vec<String>,

    /// Funding stages treated as high-growth (full Company Intent points)
    pub high_growth_stages: Vec<FundingStage>,

    /// Funding stages treated as established (reduced Company Intent points)
    pub established_stages: Vec<FundingStage>,

    /// Point value contributed by each rule tier
    pub weights: RuleWeights,

    /// Upper bound on the final score. The rule maxima may sum past the cap;
    /// the cap, not the sum, is authoritative.
    pub score_cap: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            seniority_markers: vec![
                "director".to_string(),
                "head".to_string(),
                "vp".to_string(),
                "chief".to_string(),
            ],
            relevance_markers: vec![
                "toxicology".to_string(),
                "safety".to_string(),
                "hepatic".to_string(),
                "3d".to_string(),
                "preclinical".to_string(),
                "liver".to_string(),
            ],
            high_growth_stages: vec![FundingStage::SeriesA, FundingStage::SeriesB],
            established_stages: vec![FundingStage::SeriesC, FundingStage::Ipo],
            weights: RuleWeights::default(),
            score_cap: 100,
        }
    }
}

/// Point values for each rule tier.
///
/// The default category maxima sum to 115 against the 100-point cap: a lead
/// matching every top tier saturates the cap.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct RuleWeights {
    /// Senior and relevant title ("High Value Role")
    pub high_value_role: u32,
    /// Relevant but not senior title ("Relevant Role")
    pub relevant_role: u32,
    /// Funding stage in the high-growth table ("High Growth Funding")
    pub high_growth_funding: u32,
    /// Funding stage in the established table ("Established Funding")
    pub established_funding: u32,
    /// Company already uses comparable tech ("Uses Similar Tech")
    pub uses_tech: u32,
    /// Company open to NAMs ("Open to NAMs")
    pub open_to_nams: u32,
    /// Company located in a biotech hub ("In Biotech Hub")
    pub hub: u32,
    /// Qualifying recent publication ("Recent IDILI/3D Paper")
    pub recent_paper: u32,
}

impl Default for RuleWeights {
    fn default() -> Self {
        Self {
            high_value_role: 30,
            relevant_role: 15,
            high_growth_funding: 20,
            established_funding: 10,
            uses_tech: 15,
            open_to_nams: 10,
            hub: 10,
            recent_paper: 40,
        }
    }
}

impl ScoringConfig {
    /// Parse a scoring configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_saphyr::from_str(yaml).context("Failed to parse scoring config: invalid YAML")
    }

    /// Load a scoring configuration from a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML cannot be
    /// parsed.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scoring config at {}", path.display()))?;
        serde_saphyr::from_str(&content).with_context(|| {
            format!(
                "Failed to parse scoring config: invalid YAML in {}",
                path.display()
            )
        })
    }
}

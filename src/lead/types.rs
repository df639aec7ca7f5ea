use crate::errors::ScoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity and contact facts about an individual prospect.
///
/// `id` must be unique within a batch; uniqueness is the producer's
/// responsibility, not checked here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub name: String,
    pub title: String,   // Free text, e.g. "Director of Toxicology"
    pub company: String, // Employer name
    pub location_person: String,
    pub location_company: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Investment round labels recognized by the rubric.
///
/// Serialized as the human-readable labels ("Series A", "IPO", ...) used by
/// upstream producers. An unknown or absent stage is `Option::None` on
/// [`CompanyMetadata`], never a variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FundingStage {
    Seed,
    #[serde(rename = "Series A")]
    SeriesA,
    #[serde(rename = "Series B")]
    SeriesB,
    #[serde(rename = "Series C")]
    SeriesC,
    #[serde(rename = "IPO")]
    Ipo,
}

impl FundingStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            FundingStage::Seed => "Seed",
            FundingStage::SeriesA => "Series A",
            FundingStage::SeriesB => "Series B",
            FundingStage::SeriesC => "Series C",
            FundingStage::Ipo => "IPO",
        }
    }
}

impl fmt::Display for FundingStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sales-relevant facts about the prospect's employer.
///
/// All flags default to false and the funding stage to unknown, so a
/// producer with partial coverage can still emit a scoreable record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyMetadata {
    pub name: String, // Should match Person.company
    #[serde(default)]
    pub funding_stage: Option<FundingStage>,
    /// Already uses comparable in-vitro/3D tech
    #[serde(default)]
    pub uses_tech: bool,
    /// Open to New Approach Methodologies
    #[serde(default)]
    pub open_to_nams: bool,
    /// Located in a recognized biotech hub
    #[serde(default)]
    pub is_hub: bool,
}

/// Research-activity signal for the individual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonMetadata {
    /// Qualifying publication within the lookback window
    #[serde(default)]
    pub has_recent_paper: bool,
    /// By convention present only when `has_recent_paper` is true; not enforced
    #[serde(default)]
    pub paper_title: Option<String>,
    #[serde(default)]
    pub years_experience: u32,
}

/// The unit passed to and returned from the scoring engine: one person, the
/// employer's metadata, the research signal, and the engine-assigned outputs.
///
/// Producers create leads with `score = 0` and empty `rank_reasons`; the
/// engine returns a new record with both populated. Lifetime and storage are
/// the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedLead {
    pub person: Person,
    pub company_meta: CompanyMetadata,
    pub person_meta: PersonMetadata,
    #[serde(default)]
    pub score: u32,
    #[serde(default)]
    pub rank_reasons: Vec<String>,
}

impl EnrichedLead {
    /// Return a short reference in the format "name @ company"
    pub fn short_ref(&self) -> String {
        format!("{} @ {}", self.person.name, self.person.company)
    }

    /// Check the required identity fields. A lead failing this is rejected
    /// before any rule is evaluated; a lead passing it may still score zero.
    pub fn validate(&self) -> Result<(), ScoreError> {
        if self.person.title.trim().is_empty() {
            return Err(ScoreError::InvalidInput(format!(
                "missing title for lead '{}'",
                self.person.id
            )));
        }
        if self.person.company.trim().is_empty() {
            return Err(ScoreError::InvalidInput(format!(
                "missing company for lead '{}'",
                self.person.id
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_person() -> Person {
        Person {
            id: "lead-1".to_string(),
            name: "Dr. Sarah Chen".to_string(),
            title: "Director of Safety Assessment".to_string(),
            company: "Hepatix Bio".to_string(),
            location_person: "Cambridge, MA".to_string(),
            location_company: "Cambridge, MA".to_string(),
            email: Some("s.chen@hepatix.bio".to_string()),
            phone: None,
            linkedin_url: None,
            avatar: None,
        }
    }

    fn sample_lead() -> EnrichedLead {
        EnrichedLead {
            person: sample_person(),
            company_meta: CompanyMetadata {
                name: "Hepatix Bio".to_string(),
                funding_stage: Some(FundingStage::SeriesB),
                uses_tech: true,
                open_to_nams: false,
                is_hub: true,
            },
            person_meta: PersonMetadata {
                has_recent_paper: true,
                paper_title: Some("Predictive DILI Models".to_string()),
                years_experience: 15,
            },
            score: 0,
            rank_reasons: vec![],
        }
    }

    #[test]
    fn test_validate_accepts_complete_lead() {
        assert!(sample_lead().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_title() {
        let mut lead = sample_lead();
        lead.person.title = "   ".to_string();
        let err = lead.validate().unwrap_err();
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn test_validate_rejects_empty_company() {
        let mut lead = sample_lead();
        lead.person.company = String::new();
        let err = lead.validate().unwrap_err();
        assert!(err.to_string().contains("company"));
    }

    #[test]
    fn test_short_ref_format() {
        assert_eq!(sample_lead().short_ref(), "Dr. Sarah Chen @ Hepatix Bio");
    }

    #[test]
    fn test_funding_stage_labels() {
        assert_eq!(
            serde_json::to_string(&FundingStage::SeriesA).unwrap(),
            "\"Series A\""
        );
        assert_eq!(
            serde_json::from_str::<FundingStage>("\"IPO\"").unwrap(),
            FundingStage::Ipo
        );
        assert_eq!(FundingStage::SeriesC.to_string(), "Series C");
    }

    #[test]
    fn test_lead_deserializes_without_engine_fields() {
        // Producers omit score/rank_reasons; both must default.
        let json = r#"{
            "person": {
                "id": "p-1",
                "name": "Alex Moreau",
                "title": "Toxicologist",
                "company": "NanoCure",
                "location_person": "Austin, TX",
                "location_company": "Austin, TX"
            },
            "company_meta": { "name": "NanoCure", "funding_stage": "Series A" },
            "person_meta": { "years_experience": 4 }
        }"#;
        let lead: EnrichedLead = serde_json::from_str(json).unwrap();
        assert_eq!(lead.score, 0);
        assert!(lead.rank_reasons.is_empty());
        assert_eq!(lead.company_meta.funding_stage, Some(FundingStage::SeriesA));
        assert!(!lead.company_meta.uses_tech);
        assert!(!lead.person_meta.has_recent_paper);
        assert_eq!(lead.person.email, None);
    }
}

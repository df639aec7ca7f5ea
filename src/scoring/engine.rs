use super::config::ScoringConfig;
use crate::errors::ScoreError;
use crate::lead::EnrichedLead;

#[derive(Debug, Clone, PartialEq)]
pub struct RuleContribution {
    pub label: String, // e.g. "High Value Role", "In Biotech Hub"
    pub points: u32,   // Uncapped contribution of this rule
}

/// Ordered record of which rules fired, before the cap is applied.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScoreBreakdown {
    pub contributions: Vec<RuleContribution>,
}

impl ScoreBreakdown {
    /// Sum of all contributions, ignoring the cap. May exceed the reported
    /// score for a lead that saturates the rubric.
    pub fn raw_sum(&self) -> u32 {
        self.contributions.iter().map(|c| c.points).sum()
    }

    /// Render the audit trail, one "<label> (+<points>)" string per fired
    /// rule, in category order.
    pub fn reasons(&self) -> Vec<String> {
        self.contributions
            .iter()
            .map(|c| format!("{} (+{})", c.label, c.points))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    pub score: u32, // Clamped to config.score_cap
    pub breakdown: ScoreBreakdown,
}

/// Score one lead against the rubric.
///
/// Pure and total: identical input yields identical output, no I/O, and no
/// failure path. A lookup that matches nothing (empty title, unknown funding
/// stage, false flags) contributes zero points and emits no reason — that is
/// a degraded match, not an error. Categories are evaluated in a fixed order
/// so the breakdown has a stable, reproducible sequence.
pub fn calculate_score(lead: &EnrichedLead, config: &ScoringConfig) -> ScoreResult {
    let weights = &config.weights;
    let mut contributions = Vec::new();

    // 1. Role Fit. Relevance gates the category: a senior title with no
    // domain marker scores nothing.
    let title_lower = lead.person.title.to_lowercase();
    let is_senior = config
        .seniority_markers
        .iter()
        .any(|m| title_lower.contains(m.as_str()));
    let is_relevant = config
        .relevance_markers
        .iter()
        .any(|m| title_lower.contains(m.as_str()));

    if is_senior && is_relevant {
        fire(&mut contributions, "High Value Role", weights.high_value_role);
    } else if is_relevant {
        fire(&mut contributions, "Relevant Role", weights.relevant_role);
    }

    // 2. Company Intent
    if let Some(stage) = lead.company_meta.funding_stage {
        if config.high_growth_stages.contains(&stage) {
            fire(
                &mut contributions,
                "High Growth Funding",
                weights.high_growth_funding,
            );
        } else if config.established_stages.contains(&stage) {
            fire(
                &mut contributions,
                "Established Funding",
                weights.established_funding,
            );
        }
    }

    // 3. Technographic Fit. Mutually exclusive tiers; uses_tech wins.
    if lead.company_meta.uses_tech {
        fire(&mut contributions, "Uses Similar Tech", weights.uses_tech);
    } else if lead.company_meta.open_to_nams {
        fire(&mut contributions, "Open to NAMs", weights.open_to_nams);
    }

    // 4. Location Hub
    if lead.company_meta.is_hub {
        fire(&mut contributions, "In Biotech Hub", weights.hub);
    }

    // 5. Scientific Intent, the single largest weight in the rubric
    if lead.person_meta.has_recent_paper {
        fire(
            &mut contributions,
            "Recent IDILI/3D Paper",
            weights.recent_paper,
        );
    }

    let breakdown = ScoreBreakdown { contributions };
    let raw = breakdown.raw_sum();
    let score = raw.min(config.score_cap);

    tracing::debug!(
        "Scored {}: {} raw, {} capped, {} rules fired",
        lead.short_ref(),
        raw,
        score,
        breakdown.contributions.len()
    );

    ScoreResult { score, breakdown }
}

fn fire(contributions: &mut Vec<RuleContribution>, label: &str, points: u32) {
    tracing::debug!("Rule fired: {} (+{})", label, points);
    contributions.push(RuleContribution {
        label: label.to_string(),
        points,
    });
}

/// Validate a lead, score it, and return a new record with `score` and
/// `rank_reasons` populated. The input is not mutated.
pub fn score_lead(lead: &EnrichedLead, config: &ScoringConfig) -> Result<EnrichedLead, ScoreError> {
    lead.validate()?;

    let result = calculate_score(lead, config);
    let mut scored = lead.clone();
    scored.score = result.score;
    scored.rank_reasons = result.breakdown.reasons();
    Ok(scored)
}

use crate::errors::ScoreError;
use crate::lead::EnrichedLead;
use crate::scoring::{score_lead, ScoringConfig};

/// Reorder scored leads by score descending.
///
/// The sort is stable: leads with equal scores keep their relative input
/// order. Total for the empty and singleton batch; no scored field is
/// altered. Assumes every lead has already been scored.
pub fn rank_leads(mut leads: Vec<EnrichedLead>) -> Vec<EnrichedLead> {
    // Vec::sort_by is stable, which carries the tie-break contract
    leads.sort_by(|a, b| b.score.cmp(&a.score));
    leads
}

/// Score every lead, then rank the batch.
///
/// A lead failing identity validation is skipped with a warning; one bad
/// record never aborts the rest of the batch. Ranking runs once over the
/// complete scored set in input order, so ties resolve to input order even
/// when a caller scored leads concurrently upstream.
pub fn score_and_rank(leads: &[EnrichedLead], config: &ScoringConfig) -> Vec<EnrichedLead> {
    let scored: Vec<EnrichedLead> = leads
        .iter()
        .filter_map(|lead| match score_lead(lead, config) {
            Ok(scored) => Some(scored),
            Err(e) => {
                tracing::warn!("Skipping lead {}: {}", lead.short_ref(), e);
                None
            }
        })
        .collect();

    rank_leads(scored)
}

/// Fail-fast variant of [`score_and_rank`]: the first invalid lead aborts
/// the whole batch.
pub fn score_and_rank_strict(
    leads: &[EnrichedLead],
    config: &ScoringConfig,
) -> Result<Vec<EnrichedLead>, ScoreError> {
    let mut scored = Vec::with_capacity(leads.len());
    for lead in leads {
        scored.push(score_lead(lead, config)?);
    }
    Ok(rank_leads(scored))
}

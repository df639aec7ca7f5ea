//! Lead scoring and ranking engine.
//!
//! Assigns a priority score in `[0, score_cap]` to sales prospects from
//! attributes of the person, their employer, and detected research-activity
//! signals, together with a human-readable trail of which rules fired. A
//! batch of scored leads is ranked by score descending with input order
//! preserved on ties.
//!
//! Scoring is pure and deterministic: no I/O, no shared state, no failure
//! path beyond rejecting a lead with missing identity fields. The rubric
//! (keyword markers, funding tiers, weights, cap) is injected per call as a
//! [`ScoringConfig`], never read from process-wide state.
//!
//! # Modules
//!
//! - `lead`: data model (`Person`, `CompanyMetadata`, `PersonMetadata`,
//!   `EnrichedLead`).
//! - `scoring`: rubric configuration, the scoring engine, and config
//!   validation.
//! - `rank`: stable ranking and the batch score-then-rank pipeline.
//! - `errors`: error taxonomy.

pub mod errors;
pub mod lead;
pub mod rank;
pub mod scoring;

pub use errors::ScoreError;
pub use lead::{CompanyMetadata, EnrichedLead, FundingStage, Person, PersonMetadata};
pub use rank::{rank_leads, score_and_rank, score_and_rank_strict};
pub use scoring::{
    calculate_score, score_lead, validate_scoring, RuleWeights, ScoreBreakdown, ScoreResult,
    ScoringConfig,
};

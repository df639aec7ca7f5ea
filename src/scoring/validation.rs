use super::config::ScoringConfig;

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if config.score_cap == 0 {
        errors.push("scoring.score_cap: must be positive".to_string());
    }

    // The engine lowercases titles, never marker tokens, so a token with
    // uppercase letters can never match.
    let marker_sets = [
        ("seniority_markers", &config.seniority_markers),
        ("relevance_markers", &config.relevance_markers),
    ];
    for (name, markers) in marker_sets {
        if markers.is_empty() {
            errors.push(format!("scoring.{}: must not be empty", name));
        }
        for (i, marker) in markers.iter().enumerate() {
            if marker.trim().is_empty() {
                errors.push(format!("scoring.{}[{}]: empty token", name, i));
            } else if *marker != marker.to_lowercase() {
                errors.push(format!(
                    "scoring.{}[{}]: token '{}' must be lowercase",
                    name, i, marker
                ));
            }
        }
    }

    // A stage in both tables would silently take the high-growth tier
    for stage in &config.high_growth_stages {
        if config.established_stages.contains(stage) {
            errors.push(format!(
                "scoring.high_growth_stages: stage '{}' also listed in established_stages",
                stage
            ));
        }
    }

    let weights = &config.weights;
    if weights.relevant_role > weights.high_value_role {
        errors.push(format!(
            "scoring.weights.relevant_role: {} exceeds high_value_role ({})",
            weights.relevant_role, weights.high_value_role
        ));
    }
    if weights.open_to_nams > weights.uses_tech {
        errors.push(format!(
            "scoring.weights.open_to_nams: {} exceeds uses_tech ({})",
            weights.open_to_nams, weights.uses_tech
        ));
    }
    if weights.established_funding > weights.high_growth_funding {
        errors.push(format!(
            "scoring.weights.established_funding: {} exceeds high_growth_funding ({})",
            weights.established_funding, weights.high_growth_funding
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

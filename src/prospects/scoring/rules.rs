use super::super::domain::{Trait, TraitState};

/// Raw (unrounded) score for one category of traits.
///
/// The per-trait impact divides by the total category size, not the confirmed
/// count: unevaluated traits deliberately dilute the influence of the answers
/// already in, so the score firms up as evaluations complete.
pub(crate) fn category_score(traits: &[&Trait], loss_aversion: f64) -> f64 {
    if traits.is_empty() {
        // No constraints in this category.
        return 100.0;
    }

    let confirmed = traits.iter().filter(|t| t.state.is_confirmed()).count();
    if confirmed == 0 {
        // Traits exist but nothing is answered yet.
        return 50.0;
    }

    let impact = 50.0 / traits.len() as f64;
    let mut score = 50.0;
    for t in traits {
        match t.state {
            TraitState::Yes => score += impact,
            TraitState::No => score -= impact * loss_aversion,
            TraitState::Unknown => {}
        }
    }

    score.clamp(0.0, 100.0)
}

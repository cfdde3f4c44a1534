//! Compatibility scoring under a loss-aversion model.
//!
//! A category with no traits scores 100 (no constraints); a category with
//! traits but no confirmed answers scores 50 (no evidence). Confirmed answers
//! move the score from the neutral 50 midpoint, with "no" responses weighted
//! by the strictness-selected loss-aversion coefficient.

mod config;
pub(crate) mod rules;

pub use config::Strictness;

use super::domain::{AttributeCategory, Trait, TraitState};
use serde::{Deserialize, Serialize};

/// Summary scores for one prospect. All score fields are integers in [0,100].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityScore {
    pub overall: u8,
    pub dealbreakers_score: u8,
    pub desired_score: u8,
    pub unknown_count: usize,
    pub confirmed_yes_count: usize,
    pub confirmed_no_count: usize,
    /// Attribute names of dealbreaker traits currently answered "no",
    /// in input order.
    pub dealbreakers_with_no: Vec<String>,
}

/// Per-category statistics backing the score detail modal. Figures match the
/// corresponding fields of [`calculate_compatibility`] exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub category: AttributeCategory,
    pub total: usize,
    pub confirmed: usize,
    pub yes_count: usize,
    pub no_count: usize,
    pub score: u8,
}

/// Score a prospect's trait evaluations, blending the two category scores
/// 60/40 in favor of dealbreakers. Rounding happens after weighting for
/// `overall` and independently for the stored per-category values.
pub fn calculate_compatibility(traits: &[Trait], strictness: Strictness) -> CompatibilityScore {
    let loss_aversion = strictness.loss_aversion();
    let (dealbreakers, desired): (Vec<&Trait>, Vec<&Trait>) = traits
        .iter()
        .partition(|t| t.category == AttributeCategory::Dealbreaker);

    let dealbreakers_raw = rules::category_score(&dealbreakers, loss_aversion);
    let desired_raw = rules::category_score(&desired, loss_aversion);

    let overall = (dealbreakers_raw * AttributeCategory::Dealbreaker.weight()
        + desired_raw * AttributeCategory::Desired.weight())
    .round() as u8;

    let mut unknown_count = 0;
    let mut confirmed_yes_count = 0;
    let mut confirmed_no_count = 0;
    for t in traits {
        match t.state {
            TraitState::Unknown => unknown_count += 1,
            TraitState::Yes => confirmed_yes_count += 1,
            TraitState::No => confirmed_no_count += 1,
        }
    }

    let dealbreakers_with_no = dealbreakers
        .iter()
        .filter(|t| t.state == TraitState::No)
        .map(|t| t.attribute_name.clone())
        .collect();

    CompatibilityScore {
        overall,
        dealbreakers_score: dealbreakers_raw.round() as u8,
        desired_score: desired_raw.round() as u8,
        unknown_count,
        confirmed_yes_count,
        confirmed_no_count,
        dealbreakers_with_no,
    }
}

/// Per-category statistics for display. Always returns both categories,
/// dealbreakers first, even when a category holds no traits.
pub fn score_breakdown(traits: &[Trait], strictness: Strictness) -> Vec<ScoreBreakdown> {
    let loss_aversion = strictness.loss_aversion();
    AttributeCategory::ordered()
        .into_iter()
        .map(|category| {
            let members: Vec<&Trait> =
                traits.iter().filter(|t| t.category == category).collect();
            let yes_count = members.iter().filter(|t| t.state == TraitState::Yes).count();
            let no_count = members.iter().filter(|t| t.state == TraitState::No).count();

            ScoreBreakdown {
                category,
                total: members.len(),
                confirmed: yes_count + no_count,
                yes_count,
                no_count,
                score: rules::category_score(&members, loss_aversion).round() as u8,
            }
        })
        .collect()
}

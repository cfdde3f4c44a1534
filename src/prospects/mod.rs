//! Prospect tracking core: trait model, compatibility scoring, archive
//! retention arithmetic, and in-app prompt generation.
//!
//! Every function here is pure and synchronous. Callers own persistence,
//! caching, and the dismissed-prompt key set; this module only transforms
//! fully materialized snapshots into plain result values.

pub mod domain;
pub mod prompts;
pub mod retention;
pub mod scoring;

#[cfg(test)]
mod tests;

pub use domain::{
    first_name, AttributeCategory, DateEntry, Prospect, ProspectStatus, ProspectSummary, Trait,
    TraitState,
};
pub use prompts::{tip_count, InAppPrompt, MascotState, PromptConfig, PromptEngine, PromptType};
pub use retention::{
    expiry_date, is_approaching_expiry, is_expiring_soon, months_until_expiry, retention_status,
    RetentionStatus, RETENTION_MONTHS,
};
pub use scoring::{
    calculate_compatibility, score_breakdown, CompatibilityScore, ScoreBreakdown, Strictness,
};

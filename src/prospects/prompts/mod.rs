//! Rule engine emitting prioritized in-app nudges.
//!
//! Every rule independently decides whether to fire; fired prompts whose
//! dismissal key appears in the caller-supplied set are suppressed entirely,
//! and the survivors are stably sorted ascending by priority (1 = most
//! urgent). The engine never stores dismissal state — the caller persists new
//! dismissals in its own key-value store.

mod config;
pub(crate) mod rules;
pub(crate) mod tips;

pub use config::PromptConfig;

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use serde::Serialize;

use super::domain::{Prospect, ProspectSummary};

/// Which rule produced a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptType {
    DateReminder,
    DealbreakerCheck,
    Milestone,
    GeneralTip,
}

/// Pose the mascot takes while presenting the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MascotState {
    Cheering,
    Thinking,
    Waving,
    Reading,
}

/// A suggested nudge ready for rendering. `message_key` / `message_params`
/// feed the localization layer; `dismissal_key` is the stable string the
/// caller records when the user swipes the prompt away.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InAppPrompt {
    pub id: String,
    pub prompt_type: PromptType,
    pub priority: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prospect_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prospect_name: Option<String>,
    pub mascot_state: MascotState,
    pub message_key: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_params: Option<BTreeMap<String, serde_json::Value>>,
    pub dismissal_key: String,
}

/// Number of onboarding tips in the rotation pool.
pub const fn tip_count() -> usize {
    tips::TIPS.len()
}

/// Stateless evaluator applying the prompt rules to prospect snapshots.
pub struct PromptEngine {
    config: PromptConfig,
}

impl PromptEngine {
    pub fn new(config: PromptConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(PromptConfig::default())
    }

    /// All applicable prompts for a fully loaded prospect, most urgent first.
    pub fn prospect_prompts(
        &self,
        prospect: &Prospect,
        dismissed: &HashSet<String>,
        today: NaiveDate,
    ) -> Vec<InAppPrompt> {
        let mut prompts: Vec<InAppPrompt> = [
            rules::dealbreaker_check(prospect, &self.config),
            rules::date_reminder(
                &prospect.id,
                &prospect.name,
                prospect.status,
                prospect.last_date(),
                today,
                &self.config,
            ),
            rules::relationship_milestone(prospect),
            rules::all_dealbreakers_milestone(prospect),
        ]
        .into_iter()
        .flatten()
        .filter(|prompt| !dismissed.contains(&prompt.dismissal_key))
        .collect();

        prompts.sort_by_key(|prompt| prompt.priority);
        prompts
    }

    /// Home-screen aggregate over lightweight summaries. Only the
    /// date-reminder and general-tip rules apply here; the other rules need
    /// full trait and date detail.
    pub fn home_prompts(
        &self,
        summaries: &[ProspectSummary],
        joined_at: NaiveDate,
        dismissed: &HashSet<String>,
        today: NaiveDate,
    ) -> Vec<InAppPrompt> {
        let mut prompts: Vec<InAppPrompt> = summaries
            .iter()
            .filter_map(|summary| {
                rules::date_reminder(
                    &summary.id,
                    &summary.name,
                    summary.status,
                    summary.cached_last_date_at,
                    today,
                    &self.config,
                )
            })
            .filter(|prompt| !dismissed.contains(&prompt.dismissal_key))
            .collect();

        let days_since_joined = (today - joined_at).num_days();
        if (0..=self.config.general_tip_window_days).contains(&days_since_joined) {
            if let Some(tip) = rules::general_tip(days_since_joined, dismissed) {
                prompts.push(tip);
            }
        }

        prompts.sort_by_key(|prompt| prompt.priority);
        prompts
    }

    /// Onboarding tip for the given day, rotating through the fixed pool.
    pub fn general_tip(
        &self,
        days_since_joined: i64,
        dismissed: &HashSet<String>,
    ) -> Option<InAppPrompt> {
        rules::general_tip(days_since_joined, dismissed)
    }
}

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use serde_json::json;

use super::super::domain::{
    first_name, AttributeCategory, Prospect, ProspectStatus, TraitState,
};
use super::config::PromptConfig;
use super::tips;
use super::{InAppPrompt, MascotState, PromptType};

/// Nudge to pin down unanswered dealbreakers once enough dates are logged.
pub(crate) fn dealbreaker_check(
    prospect: &Prospect,
    config: &PromptConfig,
) -> Option<InAppPrompt> {
    if prospect.dates.len() < config.dealbreaker_check_min_dates {
        return None;
    }

    let unknown = prospect
        .traits
        .iter()
        .filter(|t| t.category == AttributeCategory::Dealbreaker && t.state == TraitState::Unknown)
        .count();
    if unknown < config.dealbreaker_check_min_unknown {
        return None;
    }

    let dismissal_key = format!("dealbreaker_check_{}", prospect.id);
    let mut params = BTreeMap::new();
    params.insert("count".to_string(), json!(unknown));
    params.insert("name".to_string(), json!(prospect.first_name()));

    Some(InAppPrompt {
        id: dismissal_key.clone(),
        prompt_type: PromptType::DealbreakerCheck,
        priority: 1,
        prospect_id: Some(prospect.id.clone()),
        prospect_name: Some(prospect.name.clone()),
        mascot_state: MascotState::Thinking,
        message_key: "prompt.dealbreaker_check",
        message_params: Some(params),
        dismissal_key,
    })
}

/// Reminder when an active prospect has gone too long without a logged date.
/// Shared by both entry points: the per-prospect path passes the max over
/// `DateEntry.date`, the home aggregate passes `cached_last_date_at`.
pub(crate) fn date_reminder(
    prospect_id: &str,
    prospect_name: &str,
    status: ProspectStatus,
    last_date_at: Option<NaiveDate>,
    today: NaiveDate,
    config: &PromptConfig,
) -> Option<InAppPrompt> {
    if !status.is_active() {
        return None;
    }

    let last_date = last_date_at?;
    let days = (today - last_date).num_days();
    if days < config.date_reminder_after_days {
        return None;
    }

    let dismissal_key = format!("date_reminder_{prospect_id}");
    let mut params = BTreeMap::new();
    params.insert("days".to_string(), json!(days));
    params.insert("name".to_string(), json!(first_name(prospect_name)));

    Some(InAppPrompt {
        id: dismissal_key.clone(),
        prompt_type: PromptType::DateReminder,
        priority: 2,
        prospect_id: Some(prospect_id.to_string()),
        prospect_name: Some(prospect_name.to_string()),
        mascot_state: MascotState::Waving,
        message_key: "prompt.date_reminder",
        message_params: Some(params),
        dismissal_key,
    })
}

pub(crate) fn relationship_milestone(prospect: &Prospect) -> Option<InAppPrompt> {
    if prospect.status != ProspectStatus::Relationship {
        return None;
    }

    let dismissal_key = format!("milestone_relationship_{}", prospect.id);
    let mut params = BTreeMap::new();
    params.insert("name".to_string(), json!(prospect.first_name()));

    Some(InAppPrompt {
        id: dismissal_key.clone(),
        prompt_type: PromptType::Milestone,
        priority: 3,
        prospect_id: Some(prospect.id.clone()),
        prospect_name: Some(prospect.name.clone()),
        mascot_state: MascotState::Cheering,
        message_key: "prompt.milestone_relationship",
        message_params: Some(params),
        dismissal_key,
    })
}

/// Fires once every dealbreaker trait has an answer (a mix of yes and no is
/// fine), provided at least one dealbreaker exists.
pub(crate) fn all_dealbreakers_milestone(prospect: &Prospect) -> Option<InAppPrompt> {
    let mut dealbreakers = prospect
        .traits
        .iter()
        .filter(|t| t.category == AttributeCategory::Dealbreaker)
        .peekable();
    dealbreakers.peek()?;
    if dealbreakers.any(|t| t.state == TraitState::Unknown) {
        return None;
    }

    let dismissal_key = format!("milestone_allDealbreakers_{}", prospect.id);
    let mut params = BTreeMap::new();
    params.insert("name".to_string(), json!(prospect.first_name()));

    Some(InAppPrompt {
        id: dismissal_key.clone(),
        prompt_type: PromptType::Milestone,
        priority: 3,
        prospect_id: Some(prospect.id.clone()),
        prospect_name: Some(prospect.name.clone()),
        mascot_state: MascotState::Cheering,
        message_key: "prompt.milestone_all_dealbreakers",
        message_params: Some(params),
        dismissal_key,
    })
}

/// Rotating onboarding tip; the index wraps at the pool size so day 0 and
/// day `tip_count` surface the same tip.
pub(crate) fn general_tip(
    days_since_joined: i64,
    dismissed: &HashSet<String>,
) -> Option<InAppPrompt> {
    let index = days_since_joined.rem_euclid(tips::TIPS.len() as i64) as usize;
    let dismissal_key = format!("general_tip_{index}");
    if dismissed.contains(&dismissal_key) {
        return None;
    }

    Some(InAppPrompt {
        id: dismissal_key.clone(),
        prompt_type: PromptType::GeneralTip,
        priority: 4,
        prospect_id: None,
        prospect_name: None,
        mascot_state: MascotState::Reading,
        message_key: tips::TIPS[index],
        message_params: None,
        dismissal_key,
    })
}

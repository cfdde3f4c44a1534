//! Integration specifications for prompt generation across both entry
//! points: the home-screen aggregate over lightweight summaries and the
//! per-prospect evaluator over fully loaded records.

use std::collections::HashSet;

use chrono::NaiveDate;
use matchbook::prospects::{
    tip_count, AttributeCategory, DateEntry, Prospect, ProspectStatus, ProspectSummary,
    PromptEngine, PromptType, Trait, TraitState,
};
use serde_json::json;

fn day(year: i32, month: u32, dom: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, dom).expect("valid date")
}

fn trait_in(category: AttributeCategory, state: TraitState) -> Trait {
    Trait {
        id: "trait-1".to_string(),
        attribute_id: "attr-1".to_string(),
        attribute_name: "non-smoker".to_string(),
        category,
        state,
        updated_at: day(2026, 2, 1),
        confirmed_at: None,
    }
}

fn date_on(date: NaiveDate) -> DateEntry {
    DateEntry {
        id: format!("date-{date}"),
        date,
        location: Some("coffee shop".to_string()),
        notes: None,
        rating: Some(5),
        created_at: date,
    }
}

fn prospect(id: &str, name: &str, status: ProspectStatus) -> Prospect {
    Prospect {
        id: id.to_string(),
        name: name.to_string(),
        status,
        traits: Vec::new(),
        dates: Vec::new(),
        created_at: day(2026, 1, 1),
        archived_at: None,
    }
}

fn summary(id: &str, status: ProspectStatus, last_date: Option<NaiveDate>) -> ProspectSummary {
    ProspectSummary {
        id: id.to_string(),
        name: format!("Prospect {id}"),
        status,
        cached_last_date_at: last_date,
    }
}

#[test]
fn dealbreaker_check_fires_at_four_dates_and_three_unknowns() {
    let engine = PromptEngine::with_defaults();
    let today = day(2026, 4, 1);

    let mut avery = prospect("p-1", "Avery Jones", ProspectStatus::Dating);
    avery.dates = (1..=4).map(|dom| date_on(day(2026, 3, dom + 20))).collect();
    avery.traits = vec![
        trait_in(AttributeCategory::Dealbreaker, TraitState::Unknown),
        trait_in(AttributeCategory::Dealbreaker, TraitState::Unknown),
        trait_in(AttributeCategory::Dealbreaker, TraitState::Unknown),
        trait_in(AttributeCategory::Desired, TraitState::Unknown),
    ];

    let prompts = engine.prospect_prompts(&avery, &HashSet::new(), today);
    let check = prompts
        .iter()
        .find(|p| p.prompt_type == PromptType::DealbreakerCheck)
        .expect("dealbreaker check emitted");
    assert_eq!(check.dismissal_key, "dealbreaker_check_p-1");
    assert_eq!(
        check.message_params.as_ref().and_then(|p| p.get("count")),
        Some(&json!(3))
    );

    // Two unknown dealbreakers is below the threshold.
    avery.traits[0].state = TraitState::No;
    let prompts = engine.prospect_prompts(&avery, &HashSet::new(), today);
    assert!(prompts
        .iter()
        .all(|p| p.prompt_type != PromptType::DealbreakerCheck));
}

#[test]
fn home_reminder_uses_the_cached_last_date() {
    let engine = PromptEngine::with_defaults();
    let today = day(2026, 3, 14);
    let joined_at = day(2025, 6, 1);

    let summaries = vec![
        summary("p-1", ProspectStatus::Dating, Some(day(2026, 3, 1))),
        summary("p-2", ProspectStatus::Dating, Some(day(2026, 3, 3))),
        summary("p-3", ProspectStatus::Archived, Some(day(2026, 1, 1))),
    ];

    let prompts = engine.home_prompts(&summaries, joined_at, &HashSet::new(), today);

    // Thirteen days fires, eleven does not, archived never does; the tip
    // window closed long ago.
    assert_eq!(prompts.len(), 1);
    assert_eq!(prompts[0].prompt_type, PromptType::DateReminder);
    assert_eq!(prompts[0].dismissal_key, "date_reminder_p-1");
    assert_eq!(
        prompts[0].message_params.as_ref().and_then(|p| p.get("days")),
        Some(&json!(13))
    );
}

#[test]
fn milestones_cover_status_and_dealbreaker_coverage() {
    let engine = PromptEngine::with_defaults();
    let today = day(2026, 3, 1);

    let mut riley = prospect("p-9", "Riley Smith", ProspectStatus::Relationship);
    riley.traits = vec![
        trait_in(AttributeCategory::Dealbreaker, TraitState::Yes),
        trait_in(AttributeCategory::Dealbreaker, TraitState::No),
    ];

    let prompts = engine.prospect_prompts(&riley, &HashSet::new(), today);
    let keys: Vec<&str> = prompts.iter().map(|p| p.dismissal_key.as_str()).collect();
    assert_eq!(
        keys,
        vec!["milestone_relationship_p-9", "milestone_allDealbreakers_p-9"]
    );
    assert!(prompts.iter().all(|p| p.priority == 3));
}

#[test]
fn dismissed_prompts_never_reappear_for_any_rule() {
    let engine = PromptEngine::with_defaults();
    let today = day(2026, 3, 14);

    let mut riley = prospect("p-9", "Riley", ProspectStatus::Relationship);
    riley.dates = vec![date_on(day(2026, 2, 1))];
    riley.traits = vec![trait_in(AttributeCategory::Dealbreaker, TraitState::Yes)];

    let all: HashSet<String> = engine
        .prospect_prompts(&riley, &HashSet::new(), today)
        .into_iter()
        .map(|p| p.dismissal_key)
        .collect();
    assert!(!all.is_empty());

    let after_dismissal = engine.prospect_prompts(&riley, &all, today);
    assert!(after_dismissal.is_empty());
}

#[test]
fn tip_rotation_wraps_and_respects_dismissal() {
    let engine = PromptEngine::with_defaults();

    let first = engine
        .general_tip(0, &HashSet::new())
        .expect("tip on day zero");
    let wrapped = engine
        .general_tip(tip_count() as i64, &HashSet::new())
        .expect("tip after a full cycle");
    assert_eq!(first.message_key, wrapped.message_key);

    let dismissed: HashSet<String> = [first.dismissal_key.clone()].into_iter().collect();
    assert!(engine.general_tip(0, &dismissed).is_none());
}

#[test]
fn urgent_rules_sort_ahead_of_milestones_and_tips() {
    let engine = PromptEngine::with_defaults();
    let today = day(2026, 3, 20);

    let mut avery = prospect("p-1", "Avery", ProspectStatus::Relationship);
    avery.dates = (1..=4).map(|dom| date_on(day(2026, 3, dom))).collect();
    avery.traits = vec![
        trait_in(AttributeCategory::Dealbreaker, TraitState::Unknown),
        trait_in(AttributeCategory::Dealbreaker, TraitState::Unknown),
        trait_in(AttributeCategory::Dealbreaker, TraitState::Unknown),
    ];

    let prompts = engine.prospect_prompts(&avery, &HashSet::new(), today);
    let types: Vec<PromptType> = prompts.iter().map(|p| p.prompt_type).collect();
    assert_eq!(
        types,
        vec![
            PromptType::DealbreakerCheck,
            PromptType::DateReminder,
            PromptType::Milestone
        ]
    );
}

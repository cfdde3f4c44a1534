use chrono::NaiveDate;

use crate::prospects::domain::{
    AttributeCategory, DateEntry, Prospect, ProspectStatus, Trait, TraitState,
};

pub(super) fn day(year: i32, month: u32, dom: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, dom).expect("valid date")
}

pub(super) fn trait_named(name: &str, category: AttributeCategory, state: TraitState) -> Trait {
    Trait {
        id: format!("trait-{name}"),
        attribute_id: format!("attr-{name}"),
        attribute_name: name.to_string(),
        category,
        state,
        updated_at: day(2026, 1, 10),
        confirmed_at: None,
    }
}

pub(super) fn trait_with(category: AttributeCategory, state: TraitState) -> Trait {
    trait_named("unnamed", category, state)
}

pub(super) fn date_on(date: NaiveDate) -> DateEntry {
    DateEntry {
        id: format!("date-{date}"),
        date,
        location: None,
        notes: None,
        rating: Some(4),
        created_at: date,
    }
}

pub(super) fn prospect(name: &str, status: ProspectStatus) -> Prospect {
    Prospect {
        id: format!("prospect-{}", name.to_ascii_lowercase().replace(' ', "-")),
        name: name.to_string(),
        status,
        traits: Vec::new(),
        dates: Vec::new(),
        created_at: day(2026, 1, 1),
        archived_at: None,
    }
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Weighting bucket an attribute belongs to. Dealbreakers dominate the
/// overall score; desired traits are nice-to-haves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeCategory {
    Dealbreaker,
    Desired,
}

impl AttributeCategory {
    pub const fn ordered() -> [Self; 2] {
        [Self::Dealbreaker, Self::Desired]
    }

    /// Share of the overall compatibility score carried by this category.
    pub const fn weight(self) -> f64 {
        match self {
            Self::Dealbreaker => 0.6,
            Self::Desired => 0.4,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Dealbreaker => "Dealbreakers",
            Self::Desired => "Desired Traits",
        }
    }
}

/// Current evaluation of a trait. `Unknown` is neutral: excluded from score
/// math but counted in statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitState {
    Unknown,
    Yes,
    No,
}

impl TraitState {
    pub const fn is_confirmed(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

/// One evaluated attribute on a prospect. `attribute_name` is a denormalized
/// display copy of the parent attribute, kept as a plain field so the core
/// never reaches back into the attribute store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trait {
    pub id: String,
    pub attribute_id: String,
    pub attribute_name: String,
    pub category: AttributeCategory,
    pub state: TraitState,
    pub updated_at: NaiveDate,
    /// Set by the storage layer when the trait flipped to `Yes` during a
    /// dated encounter. Scoring ignores it; [`Prospect::traits_confirmed_on`]
    /// reads it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmed_at: Option<NaiveDate>,
}

/// A logged date with a prospect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateEntry {
    pub id: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// 1–5 star rating entered after the date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    pub created_at: NaiveDate,
}

/// Relationship stage tracked by the UI; read-only input for the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProspectStatus {
    Talking,
    Dating,
    Relationship,
    Archived,
}

impl ProspectStatus {
    /// Archived prospects never receive reminders.
    pub const fn is_active(self) -> bool {
        !matches!(self, Self::Archived)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Talking => "Talking",
            Self::Dating => "Dating",
            Self::Relationship => "Relationship",
            Self::Archived => "Archived",
        }
    }
}

/// Fully loaded prospect snapshot as handed over by the storage layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prospect {
    pub id: String,
    pub name: String,
    pub status: ProspectStatus,
    #[serde(default)]
    pub traits: Vec<Trait>,
    #[serde(default)]
    pub dates: Vec<DateEntry>,
    pub created_at: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived_at: Option<NaiveDate>,
}

impl Prospect {
    pub fn first_name(&self) -> &str {
        first_name(&self.name)
    }

    /// Most recent logged date, compared by the date of the encounter rather
    /// than when the entry was created.
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.dates.iter().map(|entry| entry.date).max()
    }

    /// Traits whose `Yes` evaluation was confirmed on the given date.
    pub fn traits_confirmed_on(&self, date: NaiveDate) -> Vec<&Trait> {
        self.traits
            .iter()
            .filter(|t| t.confirmed_at == Some(date))
            .collect()
    }

    /// Lightweight list-view shape for the home-screen prompt aggregate.
    pub fn summary(&self) -> ProspectSummary {
        ProspectSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            status: self.status,
            cached_last_date_at: self.last_date(),
        }
    }
}

/// Pre-aggregated prospect row as stored on list documents, carrying just
/// enough for the home-screen date-reminder rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProspectSummary {
    pub id: String,
    pub name: String,
    pub status: ProspectStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cached_last_date_at: Option<NaiveDate>,
}

/// Substring before the first whitespace, used when addressing the user about
/// a prospect.
pub fn first_name(name: &str) -> &str {
    name.split_whitespace().next().unwrap_or(name)
}

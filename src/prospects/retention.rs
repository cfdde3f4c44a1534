//! Calendar arithmetic for archived-prospect retention.
//!
//! Archived records are kept for twelve calendar months. The UI badges the
//! final month as critical and the one-to-two month window before it as a
//! warning; the two predicates here are mutually exclusive by construction.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Archived records are retained for this many calendar months.
pub const RETENTION_MONTHS: u32 = 12;

/// Date the archived record expires. Calendar-month arithmetic, with
/// end-of-month dates clamped (Jan 31 + 1 month = Feb 28/29).
pub fn expiry_date(archived_at: NaiveDate) -> NaiveDate {
    archived_at + Months::new(RETENTION_MONTHS)
}

/// Whole months remaining until expiry, floored. Returns 0 once expired.
pub fn months_until_expiry(archived_at: NaiveDate, today: NaiveDate) -> u32 {
    let expiry = expiry_date(archived_at);
    if today >= expiry {
        return 0;
    }

    let mut months = 0;
    while today + Months::new(months + 1) <= expiry {
        months += 1;
    }
    months
}

/// True inside the final month before expiry (and past it).
pub fn is_expiring_soon(archived_at: NaiveDate, today: NaiveDate) -> bool {
    months_until_expiry(archived_at, today) < 1
}

/// True in the one-to-two month warning zone before the final month.
pub fn is_approaching_expiry(archived_at: NaiveDate, today: NaiveDate) -> bool {
    matches!(months_until_expiry(archived_at, today), 1..=2)
}

/// Badge level derived from the remaining retention window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetentionStatus {
    Active,
    Approaching,
    Expiring,
}

impl RetentionStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Archived",
            Self::Approaching => "Expiring in a Few Months",
            Self::Expiring => "Expiring Soon",
        }
    }
}

pub fn retention_status(archived_at: NaiveDate, today: NaiveDate) -> RetentionStatus {
    match months_until_expiry(archived_at, today) {
        0 => RetentionStatus::Expiring,
        1..=2 => RetentionStatus::Approaching,
        _ => RetentionStatus::Active,
    }
}

use serde::{Deserialize, Serialize};

/// Thresholds driving the prompt rules. Defaults mirror the shipped app
/// behavior; callers only override them in tests or experiments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptConfig {
    /// Days since the last logged date before a reminder fires.
    pub date_reminder_after_days: i64,
    /// Dates that must be logged before nudging about unanswered dealbreakers.
    pub dealbreaker_check_min_dates: usize,
    /// Unanswered dealbreaker traits needed for the nudge to fire.
    pub dealbreaker_check_min_unknown: usize,
    /// Days after signup during which onboarding tips rotate on the home screen.
    pub general_tip_window_days: i64,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            date_reminder_after_days: 12,
            dealbreaker_check_min_dates: 4,
            dealbreaker_check_min_unknown: 3,
            general_tip_window_days: 30,
        }
    }
}

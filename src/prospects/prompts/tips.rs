/// Fixed pool of onboarding tip message keys, cycled daily during the first
/// month after signup. Order is part of the dismissal-key contract
/// (`general_tip_{index}`), so only append.
pub(crate) const TIPS: [&str; 6] = [
    "tip.log_dates_promptly",
    "tip.review_dealbreakers",
    "tip.rate_your_dates",
    "tip.update_trait_answers",
    "tip.add_notes_while_fresh",
    "tip.archive_stale_prospects",
];

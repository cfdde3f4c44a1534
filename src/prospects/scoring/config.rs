use serde::{Deserialize, Serialize};

/// User-selected preset controlling how heavily a "no" answer weighs against
/// an equivalent "yes".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strictness {
    Gentle,
    #[default]
    Normal,
    Strict,
}

impl Strictness {
    /// Multiplier applied to the penalty of a "no" relative to the reward of
    /// a "yes".
    pub const fn loss_aversion(self) -> f64 {
        match self {
            Self::Gentle => 1.5,
            Self::Normal => 2.0,
            Self::Strict => 2.5,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Gentle => "Gentle",
            Self::Normal => "Normal",
            Self::Strict => "Strict",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "gentle" => Some(Self::Gentle),
            "normal" => Some(Self::Normal),
            "strict" => Some(Self::Strict),
            _ => None,
        }
    }
}

//! Interview stages — the fixed, ordered sequence every session walks through.

use serde::{Deserialize, Serialize};

/// One phase of the interview, in progression order. The sequence is fixed:
/// a session only ever moves forward, and `Closing` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Introduction,
    Technical,
    Experience,
    Behavioral,
    Closing,
}

impl Stage {
    /// All stages in interview order.
    pub const ALL: [Stage; 5] = [
        Stage::Introduction,
        Stage::Technical,
        Stage::Experience,
        Stage::Behavioral,
        Stage::Closing,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Introduction => "introduction",
            Stage::Technical => "technical",
            Stage::Experience => "experience",
            Stage::Behavioral => "behavioral",
            Stage::Closing => "closing",
        }
    }

    /// The stage that follows this one. `Closing` returns itself.
    pub fn next(self) -> Stage {
        match self {
            Stage::Introduction => Stage::Technical,
            Stage::Technical => Stage::Experience,
            Stage::Experience => Stage::Behavioral,
            Stage::Behavioral => Stage::Closing,
            Stage::Closing => Stage::Closing,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Stage::Closing)
    }

    /// Weight of this stage's average in the session-level overall score.
    /// Sums to 1.0 across the five stages.
    pub fn summary_weight(self) -> f64 {
        match self {
            Stage::Introduction => 0.15,
            Stage::Technical => 0.35,
            Stage::Experience => 0.25,
            Stage::Behavioral => 0.20,
            Stage::Closing => 0.05,
        }
    }

    /// Whether question prompts for this stage are grounded in the resume.
    pub fn uses_resume(self) -> bool {
        matches!(self, Stage::Technical | Stage::Experience)
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

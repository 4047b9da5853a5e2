//! Learner archetypes with their behavior parameters.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which archetype a simulated learner follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArchetypeKind {
    Dedicated,
    Casual,
    Inconsistent,
    Perfectionist,
}

impl fmt::Display for ArchetypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArchetypeKind::Dedicated => write!(f, "dedicated"),
            ArchetypeKind::Casual => write!(f, "casual"),
            ArchetypeKind::Inconsistent => write!(f, "inconsistent"),
            ArchetypeKind::Perfectionist => write!(f, "perfectionist"),
        }
    }
}

impl FromStr for ArchetypeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dedicated" => Ok(ArchetypeKind::Dedicated),
            "casual" => Ok(ArchetypeKind::Casual),
            "inconsistent" => Ok(ArchetypeKind::Inconsistent),
            "perfectionist" => Ok(ArchetypeKind::Perfectionist),
            other => Err(format!("unknown archetype: {other}")),
        }
    }
}

/// How a learner's self-confidence develops across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceTrend {
    /// Grows with sustained success.
    Increasing,
    /// Follows recent success rate.
    Stable,
    /// Fluctuates regardless of performance.
    Variable,
    /// Conservative growth, quick to dip.
    Slow,
}

/// How long a learner's daily session runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionLength {
    /// Always the full daily quota.
    Full,
    /// A random slice of the quota.
    Variable,
    /// Usually stops after two or three phrases.
    Short,
    /// Sometimes practices beyond the quota.
    Extended,
}

/// Behavior parameters for one learner archetype.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Archetype {
    pub kind: ArchetypeKind,
    pub name: &'static str,
    /// Probability of showing up on any given day.
    pub session_frequency: f64,
    /// Baseline answer accuracy before difficulty adjustments.
    pub accuracy_rate: f64,
    pub confidence_trend: ConfidenceTrend,
    /// Probability of skipping any single exercise.
    pub skip_probability: f64,
    pub session_length: SessionLength,
}

/// Always completes the daily session at high accuracy.
pub const DEDICATED: Archetype = Archetype {
    kind: ArchetypeKind::Dedicated,
    name: "Dedicated Learner",
    session_frequency: 1.0,
    accuracy_rate: 0.85,
    confidence_trend: ConfidenceTrend::Increasing,
    skip_probability: 0.05,
    session_length: SessionLength::Full,
};

/// Misses roughly a third of days, sometimes stops early.
pub const CASUAL: Archetype = Archetype {
    kind: ArchetypeKind::Casual,
    name: "Casual Learner",
    session_frequency: 0.7,
    accuracy_rate: 0.70,
    confidence_trend: ConfidenceTrend::Stable,
    skip_probability: 0.15,
    session_length: SessionLength::Variable,
};

/// Learns only half the days and often skips hard exercises.
pub const INCONSISTENT: Archetype = Archetype {
    kind: ArchetypeKind::Inconsistent,
    name: "Inconsistent Learner",
    session_frequency: 0.5,
    accuracy_rate: 0.60,
    confidence_trend: ConfidenceTrend::Variable,
    skip_probability: 0.25,
    session_length: SessionLength::Short,
};

/// Very consistent, very accurate, occasionally does extra practice.
pub const PERFECTIONIST: Archetype = Archetype {
    kind: ArchetypeKind::Perfectionist,
    name: "Perfectionist",
    session_frequency: 0.9,
    accuracy_rate: 0.95,
    confidence_trend: ConfidenceTrend::Slow,
    skip_probability: 0.02,
    session_length: SessionLength::Extended,
};

impl Archetype {
    /// All archetypes in presentation order.
    pub fn all() -> [&'static Archetype; 4] {
        [&DEDICATED, &CASUAL, &INCONSISTENT, &PERFECTIONIST]
    }

    /// Look up an archetype by kind.
    pub fn get(kind: ArchetypeKind) -> &'static Archetype {
        match kind {
            ArchetypeKind::Dedicated => &DEDICATED,
            ArchetypeKind::Casual => &CASUAL,
            ArchetypeKind::Inconsistent => &INCONSISTENT,
            ArchetypeKind::Perfectionist => &PERFECTIONIST,
        }
    }
}

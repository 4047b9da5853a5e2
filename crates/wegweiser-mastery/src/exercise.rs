//! Exercise types, ordered easiest to hardest.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The seven exercise variants a phrase can be drilled with.
///
/// Declaration order is difficulty order: recognition (card flip) is the
/// easiest, the speed drill the hardest. [`ExerciseType::difficulty`] exposes
/// that ordering as a 0.0..1.0 factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseType {
    Recognition,
    Audio,
    Production,
    Spelling,
    Contextual,
    Pronunciation,
    Speed,
}

/// All exercise types in difficulty order.
pub const ALL_EXERCISE_TYPES: [ExerciseType; 7] = [
    ExerciseType::Recognition,
    ExerciseType::Audio,
    ExerciseType::Production,
    ExerciseType::Spelling,
    ExerciseType::Contextual,
    ExerciseType::Pronunciation,
    ExerciseType::Speed,
];

impl ExerciseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseType::Recognition => "recognition",
            ExerciseType::Audio => "audio",
            ExerciseType::Production => "production",
            ExerciseType::Spelling => "spelling",
            ExerciseType::Contextual => "contextual",
            ExerciseType::Pronunciation => "pronunciation",
            ExerciseType::Speed => "speed",
        }
    }

    /// Relative difficulty in 0.0..1.0, by position in the ordering.
    pub fn difficulty(&self) -> f64 {
        let index = ALL_EXERCISE_TYPES
            .iter()
            .position(|t| t == self)
            .unwrap_or(0);
        index as f64 / ALL_EXERCISE_TYPES.len() as f64
    }
}

impl fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExerciseType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "recognition" => Ok(ExerciseType::Recognition),
            "audio" => Ok(ExerciseType::Audio),
            "production" => Ok(ExerciseType::Production),
            "spelling" => Ok(ExerciseType::Spelling),
            "contextual" => Ok(ExerciseType::Contextual),
            "pronunciation" => Ok(ExerciseType::Pronunciation),
            "speed" => Ok(ExerciseType::Speed),
            other => Err(format!("unknown exercise type: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_parse() {
        for exercise in ALL_EXERCISE_TYPES {
            assert_eq!(exercise.as_str().parse::<ExerciseType>(), Ok(exercise));
        }
        assert!("typing".parse::<ExerciseType>().is_err());
    }

    #[test]
    fn difficulty_is_monotonic() {
        let difficulties: Vec<f64> = ALL_EXERCISE_TYPES.iter().map(|t| t.difficulty()).collect();
        for pair in difficulties.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert_eq!(ExerciseType::Recognition.difficulty(), 0.0);
        assert!(ExerciseType::Speed.difficulty() < 1.0);
    }
}

//! wegweiser-mastery — Phrase exposure tracking and mastery classification.
//!
//! A [`tracker::MasteryTracker`] consumes a stream of exercise attempts and
//! maintains per-phrase exposure counts, success rates, confidence averages,
//! and a monotonically improving mastery classification.

pub mod exercise;
pub mod tracker;

pub use exercise::{ExerciseType, ALL_EXERCISE_TYPES};
pub use tracker::{
    Day, DayStats, FinalStats, MasteryLevel, MasteryThresholds, MasteryTracker, PhraseId,
    PhraseState,
};

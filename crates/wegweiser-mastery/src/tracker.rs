//! Per-phrase exposure bookkeeping and mastery classification.
//!
//! The tracker owns all of its state and is driven by a single caller; it is
//! not synchronized. `day` values must be positive and non-decreasing across
//! calls for one tracker — this is an invariant of the driving simulation,
//! not a validated input boundary.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::exercise::{ExerciseType, ALL_EXERCISE_TYPES};

/// Identifier of a phrase in the learning material.
pub type PhraseId = u32;

/// Day index within a run, starting at 1.
pub type Day = u32;

/// Classification of how well a phrase is known.
///
/// Levels only ever improve: once a phrase is mastered it stays mastered for
/// the lifetime of the tracker, whatever later exposures look like.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MasteryLevel {
    #[default]
    New,
    Familiar,
    Learning,
    Mastered,
}

impl MasteryLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            MasteryLevel::New => "new",
            MasteryLevel::Familiar => "familiar",
            MasteryLevel::Learning => "learning",
            MasteryLevel::Mastered => "mastered",
        }
    }
}

impl std::fmt::Display for MasteryLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The thresholds a phrase must clear to count as mastered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MasteryThresholds {
    /// Minimum number of exposures.
    pub min_exposures: u32,
    /// Minimum rolling success rate, 0.0..=1.0.
    pub min_success_rate: f64,
    /// Minimum rolling confidence average, 0..=100.
    pub min_confidence: f64,
}

impl Default for MasteryThresholds {
    fn default() -> Self {
        MasteryThresholds {
            min_exposures: 5,
            min_success_rate: 0.7,
            min_confidence: 65.0,
        }
    }
}

impl MasteryThresholds {
    /// The relaxed preset shipped after simulation showed the defaults were
    /// too punishing for casual learners.
    pub fn relaxed() -> Self {
        MasteryThresholds {
            min_exposures: 4,
            min_success_rate: 0.6,
            min_confidence: 55.0,
        }
    }
}

/// Running state for one phrase.
///
/// Success rate and confidence are kept as exact counts (`successes`,
/// `confidence_total`) and derived on demand, so repeated updates cannot
/// drift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhraseState {
    pub exposures: u32,
    pub successes: u32,
    /// Successes since the last failure.
    pub consecutive_successes: u32,
    /// Mastery-transition events; 0 or 1 in practice.
    pub masteries: u32,
    pub first_seen: Day,
    pub last_seen: Day,
    /// Day of the mastery transition, if it happened.
    pub mastered_on: Option<Day>,
    confidence_total: f64,
    pub exercise_types: BTreeSet<ExerciseType>,
    pub level: MasteryLevel,
}

impl PhraseState {
    fn new(day: Day) -> Self {
        PhraseState {
            exposures: 0,
            successes: 0,
            consecutive_successes: 0,
            masteries: 0,
            first_seen: day,
            last_seen: day,
            mastered_on: None,
            confidence_total: 0.0,
            exercise_types: BTreeSet::new(),
            level: MasteryLevel::New,
        }
    }

    /// Fraction of successful exposures, 0.0 before the first exposure.
    pub fn success_rate(&self) -> f64 {
        if self.exposures == 0 {
            0.0
        } else {
            f64::from(self.successes) / f64::from(self.exposures)
        }
    }

    /// Rolling confidence mean, 0.0 before the first exposure.
    pub fn avg_confidence(&self) -> f64 {
        if self.exposures == 0 {
            0.0
        } else {
            self.confidence_total / f64::from(self.exposures)
        }
    }
}

/// Per-day snapshot of tracker activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayStats {
    pub day: Day,
    /// Phrases touched on this day.
    pub phrases_exposed: usize,
    /// Phrases seen for the first time on this day.
    pub new_phrases: usize,
    /// Phrases whose mastery transition happened on this day.
    pub mastered_today: usize,
    pub total_mastered: usize,
    pub total_unique: usize,
}

/// End-of-run aggregate over all tracked phrases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalStats {
    pub total_unique_phrases: usize,
    pub total_exposures: u64,
    pub mastered_phrases: usize,
    pub learning_phrases: usize,
    pub familiar_phrases: usize,
    pub new_phrases: usize,
    /// Mean exposures per unique phrase; 0.0 for an empty tracker.
    pub avg_exposures_per_phrase: f64,
    /// mastered / unique; 0.0 for an empty tracker.
    pub mastery_rate: f64,
    /// Distinct phrases touched per exercise type.
    pub exercise_type_coverage: BTreeMap<ExerciseType, usize>,
}

/// Tracks exposures and mastery across a run.
#[derive(Debug, Clone, Default)]
pub struct MasteryTracker {
    thresholds: MasteryThresholds,
    phrases: BTreeMap<PhraseId, PhraseState>,
    mastered: BTreeSet<PhraseId>,
    total_exposures: u64,
}

impl MasteryTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_thresholds(thresholds: MasteryThresholds) -> Self {
        MasteryTracker {
            thresholds,
            ..Default::default()
        }
    }

    /// Record one exercise attempt.
    ///
    /// `confidence` is clamped into 0..=100. `day` must be positive and
    /// non-decreasing across the calls made to one tracker.
    pub fn record_exposure(
        &mut self,
        phrase_id: PhraseId,
        exercise: ExerciseType,
        success: bool,
        confidence: f64,
        day: Day,
    ) {
        let confidence = confidence.clamp(0.0, 100.0);

        let phrase = self
            .phrases
            .entry(phrase_id)
            .or_insert_with(|| PhraseState::new(day));

        phrase.exposures += 1;
        phrase.last_seen = day;
        phrase.exercise_types.insert(exercise);
        phrase.confidence_total += confidence;
        if success {
            phrase.successes += 1;
            phrase.consecutive_successes += 1;
        } else {
            phrase.consecutive_successes = 0;
        }

        // The classification only fires for not-yet-mastered phrases;
        // mastery is a one-way ratchet.
        if !self.mastered.contains(&phrase_id) {
            if phrase.exposures >= self.thresholds.min_exposures
                && phrase.success_rate() >= self.thresholds.min_success_rate
                && phrase.avg_confidence() >= self.thresholds.min_confidence
            {
                phrase.level = MasteryLevel::Mastered;
                phrase.masteries += 1;
                phrase.mastered_on = Some(day);
                self.mastered.insert(phrase_id);
                tracing::debug!(phrase_id, day, "phrase mastered");
            } else if phrase.exposures >= 3 && phrase.success_rate() >= 0.5 {
                phrase.level = MasteryLevel::Learning;
            } else if phrase.exposures >= 2 {
                phrase.level = MasteryLevel::Familiar;
            }
        }

        self.total_exposures += 1;
    }

    /// State of one phrase, if it has been seen.
    pub fn phrase(&self, phrase_id: PhraseId) -> Option<&PhraseState> {
        self.phrases.get(&phrase_id)
    }

    /// Whether the phrase has ever reached mastery.
    pub fn is_mastered(&self, phrase_id: PhraseId) -> bool {
        self.mastered.contains(&phrase_id)
    }

    pub fn unique_phrases(&self) -> usize {
        self.phrases.len()
    }

    pub fn total_exposures(&self) -> u64 {
        self.total_exposures
    }

    /// Snapshot of activity on one day.
    pub fn day_stats(&self, day: Day) -> DayStats {
        let touched: Vec<&PhraseState> = self
            .phrases
            .values()
            .filter(|p| p.last_seen == day)
            .collect();
        DayStats {
            day,
            phrases_exposed: touched.len(),
            new_phrases: touched.iter().filter(|p| p.first_seen == day).count(),
            mastered_today: self
                .phrases
                .values()
                .filter(|p| p.mastered_on == Some(day))
                .count(),
            total_mastered: self.mastered.len(),
            total_unique: self.phrases.len(),
        }
    }

    /// End-of-run aggregate.
    pub fn final_stats(&self) -> FinalStats {
        let count_level = |level: MasteryLevel| {
            self.phrases.values().filter(|p| p.level == level).count()
        };

        let unique = self.phrases.len();
        let mut coverage = BTreeMap::new();
        for exercise in ALL_EXERCISE_TYPES {
            let touched = self
                .phrases
                .values()
                .filter(|p| p.exercise_types.contains(&exercise))
                .count();
            coverage.insert(exercise, touched);
        }

        FinalStats {
            total_unique_phrases: unique,
            total_exposures: self.total_exposures,
            mastered_phrases: count_level(MasteryLevel::Mastered),
            learning_phrases: count_level(MasteryLevel::Learning),
            familiar_phrases: count_level(MasteryLevel::Familiar),
            new_phrases: count_level(MasteryLevel::New),
            avg_exposures_per_phrase: if unique == 0 {
                0.0
            } else {
                self.total_exposures as f64 / unique as f64
            },
            mastery_rate: if unique == 0 {
                0.0
            } else {
                self.mastered.len() as f64 / unique as f64
            },
            exercise_type_coverage: coverage,
        }
    }
}

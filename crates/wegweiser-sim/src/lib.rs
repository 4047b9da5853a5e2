//! wegweiser-sim — Synthetic learner simulation.
//!
//! Projects 30-day learning outcomes for different learner archetypes by
//! driving the mastery tracker with a randomized but seedable behavior
//! model.

pub mod archetype;
pub mod config;
pub mod phrases;
pub mod runner;
pub mod simulator;

pub use archetype::{Archetype, ArchetypeKind, CASUAL, DEDICATED, INCONSISTENT, PERFECTIONIST};
pub use config::{load_sim_config, SimConfig};
pub use phrases::{Phrase, PhraseSet};
pub use runner::{run_simulation, SimulationOutcome};
pub use simulator::{DayOutcome, ExerciseResult, Rating, UserSimulator};

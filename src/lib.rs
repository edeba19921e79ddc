//! liftwise - Personal strength training coach
//!
//! Pure recommendation engine over a workout log: next-set suggestions from
//! the last set's effort, and next-session split and exercise picks from the
//! last week of training.

pub mod config;
pub mod engine;
pub mod exercises;
pub mod history;

pub use config::EngineConfig;
pub use engine::{
    estimate_1rm_with_rpe, next_set_recommendations, Coach, MuscleVolumeStatus,
    SetRecommendation, SmartRecommendation,
};
pub use exercises::{Catalog, CatalogExercise};
pub use history::{CompletedExercise, CompletedSet, CompletedWorkout};

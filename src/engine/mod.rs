//! Recommendation engine - training load analysis and suggestions
//!
//! Features:
//! - 1RM estimation with RPE-adjusted reps
//! - Next-set suggestions from the last set's effort
//! - Weekly per-muscle volume and recovery tracking
//! - Split scoring and exercise selection for the next session
//!
//! Everything here is a pure function of (config, catalog, history, now).

pub mod exercise_selector;
pub mod recovery;
pub mod set_recommender;
pub mod split_scorer;
pub mod strength;
pub mod volume;

pub use exercise_selector::ExerciseSelector;
pub use recovery::{RecoveryClock, RecoveryStatus};
pub use set_recommender::{next_set_recommendations, SetRecommendation};
pub use split_scorer::{SplitScore, SplitScorer};
pub use strength::{estimate_1rm, StrengthEstimator};
pub use volume::{VolumeStatus, VolumeTracker};

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::config::EngineConfig;
use crate::exercises::{Catalog, CatalogExercise};
use crate::history::CompletedWorkout;

/// Weekly status row for one muscle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MuscleVolumeStatus {
    pub muscle: String,
    pub current_sets: f64,
    pub target_min: f64,
    pub target_max: f64,
    pub status: VolumeStatus,
    pub recovery_status: RecoveryStatus,
    pub last_performed: Option<DateTime<Utc>>,
}

/// Suggested next session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SmartRecommendation {
    pub split: String,
    pub split_name: String,
    pub reason: String,
    pub categories: Vec<String>,
    pub exercises: Vec<CatalogExercise>,
    pub score: i32,
}

/// Session-level coach over one history snapshot and a fixed `now`
pub struct Coach<'a> {
    config: &'a EngineConfig,
    workouts: &'a [CompletedWorkout],
    volume: VolumeTracker<'a>,
    recovery: RecoveryClock<'a>,
    selector: ExerciseSelector<'a>,
}

impl<'a> Coach<'a> {
    pub fn new(
        config: &'a EngineConfig,
        catalog: &'a Catalog,
        workouts: &'a [CompletedWorkout],
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            config,
            workouts,
            volume: VolumeTracker::from_workouts(config, catalog, workouts, now),
            recovery: RecoveryClock::from_workouts(config, catalog, workouts, now),
            selector: ExerciseSelector::new(config, catalog, workouts),
        }
    }

    /// Muscles in the target table plus any muscle with training on record
    fn known_muscles(&self) -> Vec<&str> {
        let mut muscles: BTreeSet<&str> = self.config.volume_targets.keys().map(String::as_str).collect();
        muscles.extend(self.volume.trained_muscles());
        muscles.extend(self.recovery.trained_muscles());
        muscles.into_iter().collect()
    }

    /// Weekly status for every known muscle, sorted by name
    pub fn muscle_volume_status(&self) -> Vec<MuscleVolumeStatus> {
        self.known_muscles()
            .into_iter()
            .map(|muscle| {
                let target = self.volume.target(muscle);
                MuscleVolumeStatus {
                    muscle: muscle.to_string(),
                    current_sets: self.volume.volume(muscle),
                    target_min: target.min,
                    target_max: target.max,
                    status: self.volume.status(muscle),
                    recovery_status: self.recovery.status(muscle),
                    last_performed: self.recovery.last_trained(muscle),
                }
            })
            .collect()
    }

    /// Pick the best split and its exercises; `None` only without any split candidates
    pub fn smart_recommendation(&self) -> Option<SmartRecommendation> {
        let scorer = SplitScorer::new(&self.volume, &self.recovery);
        let winner = scorer.best(&self.config.splits)?;
        let reason = scorer.explain(&winner, &self.known_muscles());

        info!("Recommending {} split (score {})", winner.split.id, winner.score);

        Some(SmartRecommendation {
            split: winner.split.id.clone(),
            split_name: winner.split.name.clone(),
            reason,
            categories: winner.split.categories.clone(),
            exercises: self.selector.select(winner.split).into_iter().cloned().collect(),
            score: winner.score,
        })
    }

    /// Strength estimator sharing this coach's RPE table
    pub fn estimator(&self) -> StrengthEstimator<'a> {
        StrengthEstimator::new(self.config)
    }

    /// Best e1RM on record for an exercise
    pub fn best_estimated_1rm(&self, exercise_id: &str) -> Option<f64> {
        self.estimator().best_estimated_1rm(self.workouts, exercise_id)
    }

    /// Plain text weekly report
    pub fn format_volume_report(&self) -> String {
        let rows = self.muscle_volume_status();
        let mut lines = vec![format!("Weekly volume ({} muscles)", rows.len())];

        for row in rows {
            let ratio = if row.target_max > 0.0 { row.current_sets / row.target_max } else { 0.0 };
            let bar = match ratio {
                r if r >= 0.75 => "[++++]",
                r if r >= 0.50 => "[+++.]",
                r if r >= 0.25 => "[++..]",
                r if r > 0.0 => "[+...]",
                _ => "[....]",
            };
            let last = row
                .last_performed
                .map(|t| t.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "-".to_string());
            lines.push(format!(
                "{} {:12} {:>5.1} / {}-{} sets | {:8} | {:10} | last {}",
                bar,
                row.muscle,
                row.current_sets,
                row.target_min,
                row.target_max,
                row.status.label(),
                row.recovery_status.label(),
                last
            ));
        }

        lines.join("\n")
    }
}

/// Estimated 1RM with the default RPE table
pub fn estimate_1rm_with_rpe(weight: f64, reps: u32, rpe: Option<u8>) -> f64 {
    let config = EngineConfig::default();
    StrengthEstimator::new(&config).estimate_1rm_with_rpe(weight, reps, rpe)
}

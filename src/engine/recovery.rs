//! Per-muscle recovery clock

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::config::EngineConfig;
use crate::exercises::Catalog;
use crate::history::{newest_first, CompletedWorkout};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecoveryStatus {
    /// Never trained
    Fresh,
    Recovered,
    Recovering,
}

impl RecoveryStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RecoveryStatus::Fresh => "fresh",
            RecoveryStatus::Recovered => "recovered",
            RecoveryStatus::Recovering => "recovering",
        }
    }
}

/// Last time each muscle was trained, judged against `now`
#[derive(Debug, Clone)]
pub struct RecoveryClock<'a> {
    config: &'a EngineConfig,
    last_trained: BTreeMap<String, DateTime<Utc>>,
    now: DateTime<Utc>,
}

impl<'a> RecoveryClock<'a> {
    pub fn from_workouts(
        config: &'a EngineConfig,
        catalog: &Catalog,
        workouts: &[CompletedWorkout],
        now: DateTime<Utc>,
    ) -> Self {
        let mut last_trained: BTreeMap<String, DateTime<Utc>> = BTreeMap::new();

        // Newest first: the first workout seen for a muscle is its latest
        for workout in newest_first(workouts) {
            for completed in &workout.exercises {
                let Some(exercise) = catalog.lookup_exercise(&completed.exercise_id) else {
                    debug!("Skipping unknown exercise {} in recovery", completed.exercise_id);
                    continue;
                };
                for muscle in exercise.trained_muscles() {
                    last_trained
                        .entry(muscle.to_string())
                        .or_insert(workout.finished_at);
                }
            }
        }

        Self {
            config,
            last_trained,
            now,
        }
    }

    pub fn last_trained(&self, muscle: &str) -> Option<DateTime<Utc>> {
        self.last_trained.get(muscle).copied()
    }

    pub fn hours_since(&self, muscle: &str) -> Option<f64> {
        self.last_trained(muscle)
            .map(|t| (self.now - t).num_seconds() as f64 / 3600.0)
    }

    /// Whole days since last trained, floored
    pub fn days_since(&self, muscle: &str) -> Option<i64> {
        self.last_trained(muscle).map(|t| (self.now - t).num_days())
    }

    pub fn status(&self, muscle: &str) -> RecoveryStatus {
        match self.hours_since(muscle) {
            None => RecoveryStatus::Fresh,
            Some(hours) if hours >= self.config.recovery_hours_for(muscle) => RecoveryStatus::Recovered,
            Some(_) => RecoveryStatus::Recovering,
        }
    }

    /// Muscles with any training on record
    pub fn trained_muscles(&self) -> impl Iterator<Item = &str> {
        self.last_trained.keys().map(String::as_str)
    }
}

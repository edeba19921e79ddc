//! Weekly per-muscle training volume, counting indirect stimulus from compound lifts

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tracing::debug;

use crate::config::{EngineConfig, VolumeTarget};
use crate::exercises::Catalog;
use crate::history::CompletedWorkout;

/// Trailing window that counts towards weekly volume
pub const VOLUME_WINDOW_DAYS: i64 = 7;

/// Share of a set credited to each secondary muscle of a multi-muscle exercise
const SECONDARY_SHARE: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VolumeStatus {
    Low,
    Optimal,
    High,
}

impl VolumeStatus {
    pub fn classify(volume: f64, target: VolumeTarget) -> Self {
        if volume < target.min {
            VolumeStatus::Low
        } else if volume > target.max {
            VolumeStatus::High
        } else {
            VolumeStatus::Optimal
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VolumeStatus::Low => "low",
            VolumeStatus::Optimal => "optimal",
            VolumeStatus::High => "high",
        }
    }
}

/// Set-equivalent volume per muscle over the last week
#[derive(Debug, Clone)]
pub struct VolumeTracker<'a> {
    config: &'a EngineConfig,
    volumes: BTreeMap<String, f64>,
}

impl<'a> VolumeTracker<'a> {
    pub fn from_workouts(
        config: &'a EngineConfig,
        catalog: &Catalog,
        workouts: &[CompletedWorkout],
        now: DateTime<Utc>,
    ) -> Self {
        let window_start = now - Duration::days(VOLUME_WINDOW_DAYS);
        let mut volumes: BTreeMap<String, f64> = BTreeMap::new();

        for workout in workouts
            .iter()
            .filter(|w| w.finished_at >= window_start && w.finished_at <= now)
        {
            for completed in &workout.exercises {
                let exercise = match catalog.lookup_exercise(&completed.exercise_id) {
                    Some(ex) => ex,
                    None => {
                        debug!("Skipping unknown exercise {} in volume", completed.exercise_id);
                        continue;
                    }
                };

                let set_count = completed.sets.len() as f64;
                let muscles = exercise.trained_muscles();
                let is_compound = muscles.len() > 1;

                for (i, muscle) in muscles.iter().enumerate() {
                    let share = if i == 0 || !is_compound { 1.0 } else { SECONDARY_SHARE };
                    *volumes.entry(muscle.to_string()).or_insert(0.0) += set_count * share;
                }
            }
        }

        Self { config, volumes }
    }

    pub fn volume(&self, muscle: &str) -> f64 {
        self.volumes.get(muscle).copied().unwrap_or(0.0)
    }

    pub fn target(&self, muscle: &str) -> VolumeTarget {
        self.config.volume_target(muscle)
    }

    pub fn status(&self, muscle: &str) -> VolumeStatus {
        VolumeStatus::classify(self.volume(muscle), self.target(muscle))
    }

    /// Muscles with any volume this week
    pub fn trained_muscles(&self) -> impl Iterator<Item = &str> {
        self.volumes.keys().map(String::as_str)
    }
}

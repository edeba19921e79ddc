//! Workout history snapshot - completed workouts supplied by the log

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

/// One logged set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedSet {
    pub weight: Option<f64>,
    pub reps: Option<u32>,
    /// Perceived effort, 1-10
    pub rpe: Option<u8>,
    pub completed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedExercise {
    pub exercise_id: String,
    #[serde(default)]
    pub sets: Vec<CompletedSet>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedWorkout {
    #[serde(default)]
    pub exercises: Vec<CompletedExercise>,
    pub finished_at: DateTime<Utc>,
}

/// Workouts ordered newest first, without cloning the snapshot
pub fn newest_first(workouts: &[CompletedWorkout]) -> Vec<&CompletedWorkout> {
    let mut ordered: Vec<_> = workouts.iter().collect();
    ordered.sort_by(|a, b| b.finished_at.cmp(&a.finished_at));
    ordered
}

/// Load a history snapshot from a JSON array of workouts
pub fn load_history(path: &Path) -> Result<Vec<CompletedWorkout>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading history {}", path.display()))?;
    let workouts: Vec<CompletedWorkout> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing history {}", path.display()))?;
    info!("Loaded {} workouts from {}", workouts.len(), path.display());
    Ok(workouts)
}

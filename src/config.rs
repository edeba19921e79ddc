//! Engine configuration - the table-driven constants behind every recommendation
//!
//! All tables have built-in defaults; a JSON file can override any subset of them.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Reserve assumed when the rating is missing or not in the table
pub const DEFAULT_RESERVE: u32 = 4;

/// Weekly set-equivalent target for one muscle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumeTarget {
    pub min: f64,
    pub max: f64,
}

/// A named group of muscles and catalog categories trained in one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitDefinition {
    pub id: String,
    pub name: String,
    pub muscles: Vec<String>,
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// RPE -> reps in reserve
    pub rpe_reserve: BTreeMap<u8, u32>,
    pub volume_targets: BTreeMap<String, VolumeTarget>,
    pub default_volume_target: VolumeTarget,
    /// Hours a muscle needs before it is trained again
    pub recovery_hours: BTreeMap<String, f64>,
    pub default_recovery_hours: f64,
    /// Catalog ids treated as compound movements
    pub compound_exercises: Vec<String>,
    /// Candidate splits, in evaluation order
    pub splits: Vec<SplitDefinition>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rpe_reserve: default_rpe_reserve(),
            volume_targets: default_volume_targets(),
            default_volume_target: VolumeTarget { min: 10.0, max: 20.0 },
            recovery_hours: default_recovery_hours(),
            default_recovery_hours: 48.0,
            compound_exercises: COMPOUND_EXERCISES.iter().map(|s| s.to_string()).collect(),
            splits: default_splits(),
        }
    }
}

impl EngineConfig {
    /// Load overrides from a JSON file; missing fields keep their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: EngineConfig = serde_json::from_str(&raw)
            .with_context(|| format!("parsing config {}", path.display()))?;
        info!("Loaded engine config from {}", path.display());
        Ok(config)
    }

    pub fn reserve_for(&self, rpe: Option<u8>) -> u32 {
        rpe.and_then(|r| self.rpe_reserve.get(&r).copied())
            .unwrap_or(DEFAULT_RESERVE)
    }

    pub fn volume_target(&self, muscle: &str) -> VolumeTarget {
        self.volume_targets
            .get(muscle)
            .copied()
            .unwrap_or(self.default_volume_target)
    }

    pub fn recovery_hours_for(&self, muscle: &str) -> f64 {
        self.recovery_hours
            .get(muscle)
            .copied()
            .unwrap_or(self.default_recovery_hours)
    }

    pub fn is_compound(&self, exercise_id: &str) -> bool {
        self.compound_exercises.iter().any(|id| id == exercise_id)
    }
}

const COMPOUND_EXERCISES: &[&str] = &[
    "bench_press",
    "incline_bench_press",
    "overhead_press",
    "dip",
    "deadlift",
    "barbell_row",
    "pull_up",
    "chin_up",
    "lat_pulldown",
    "squat",
    "front_squat",
    "romanian_deadlift",
    "leg_press",
    "lunge",
    "hip_thrust",
];

fn default_rpe_reserve() -> BTreeMap<u8, u32> {
    [(10, 0), (9, 1), (8, 2), (7, 3), (6, 4), (5, 5)].into_iter().collect()
}

fn default_volume_targets() -> BTreeMap<String, VolumeTarget> {
    [
        ("chest", 10.0, 20.0),
        ("back", 10.0, 20.0),
        ("shoulders", 8.0, 16.0),
        ("biceps", 6.0, 14.0),
        ("triceps", 6.0, 14.0),
        ("quads", 8.0, 18.0),
        ("hamstrings", 6.0, 14.0),
        ("glutes", 6.0, 14.0),
        ("calves", 6.0, 12.0),
        ("core", 6.0, 12.0),
    ]
    .into_iter()
    .map(|(muscle, min, max)| (muscle.to_string(), VolumeTarget { min, max }))
    .collect()
}

fn default_recovery_hours() -> BTreeMap<String, f64> {
    [
        ("chest", 48.0),
        ("back", 48.0),
        ("shoulders", 48.0),
        ("biceps", 36.0),
        ("triceps", 36.0),
        ("quads", 72.0),
        ("hamstrings", 72.0),
        ("glutes", 72.0),
        ("calves", 24.0),
        ("core", 24.0),
    ]
    .into_iter()
    .map(|(muscle, hours)| (muscle.to_string(), hours))
    .collect()
}

fn split(id: &str, name: &str, muscles: &[&str], categories: &[&str]) -> SplitDefinition {
    SplitDefinition {
        id: id.to_string(),
        name: name.to_string(),
        muscles: muscles.iter().map(|m| m.to_string()).collect(),
        categories: categories.iter().map(|c| c.to_string()).collect(),
    }
}

fn default_splits() -> Vec<SplitDefinition> {
    vec![
        split("push", "Push", &["chest", "shoulders", "triceps"], &["chest", "shoulders", "arms"]),
        split("pull", "Pull", &["back", "biceps"], &["back", "arms"]),
        split("legs", "Legs", &["quads", "hamstrings", "glutes", "calves"], &["legs"]),
        split(
            "upper",
            "Upper Body",
            &["chest", "back", "shoulders", "biceps", "triceps"],
            &["chest", "back", "shoulders", "arms"],
        ),
        split(
            "lower",
            "Lower Body",
            &["quads", "hamstrings", "glutes", "calves", "core"],
            &["legs", "core"],
        ),
    ]
}

//! Exercise catalog - exercise definitions with muscle group tags

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

/// A single catalog entry
///
/// `muscle_groups[0]` is the primary muscle, the rest receive indirect stimulus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogExercise {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub muscle_groups: Vec<String>,
}

impl CatalogExercise {
    /// Muscles this exercise trains, falling back to its category when untagged
    pub fn trained_muscles(&self) -> Vec<&str> {
        if self.muscle_groups.is_empty() {
            vec![self.category.as_str()]
        } else {
            self.muscle_groups.iter().map(String::as_str).collect()
        }
    }

    pub fn has_muscle(&self, muscle: &str) -> bool {
        self.muscle_groups.iter().any(|m| m == muscle)
    }

    /// Case-insensitive check whether the name mentions any of the keywords
    pub fn name_mentions(&self, keywords: &[&str]) -> bool {
        let name = self.name.to_lowercase();
        keywords.iter().any(|k| name.contains(k))
    }
}

/// Read-only exercise catalog snapshot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    exercises: Vec<CatalogExercise>,
}

impl Catalog {
    pub fn new(exercises: Vec<CatalogExercise>) -> Self {
        Self { exercises }
    }

    pub fn lookup_exercise(&self, id: &str) -> Option<&CatalogExercise> {
        self.exercises.iter().find(|e| e.id == id)
    }

    pub fn exercises(&self) -> &[CatalogExercise] {
        &self.exercises
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}

/// Static seed for the built-in catalog
struct ExerciseSeed {
    id: &'static str,
    name: &'static str,
    category: &'static str,
    muscle_groups: &'static [&'static str],
}

/// Built-in gym exercises, used when no catalog file is given
const BUILTIN_EXERCISES: &[ExerciseSeed] = &[
    // Chest
    ExerciseSeed { id: "bench_press", name: "Bench Press", category: "chest", muscle_groups: &["chest", "triceps", "shoulders"] },
    ExerciseSeed { id: "incline_bench_press", name: "Incline Bench Press", category: "chest", muscle_groups: &["chest", "shoulders", "triceps"] },
    ExerciseSeed { id: "dumbbell_fly", name: "Dumbbell Fly", category: "chest", muscle_groups: &["chest"] },
    ExerciseSeed { id: "cable_crossover", name: "Cable Crossover", category: "chest", muscle_groups: &["chest"] },
    // Back
    ExerciseSeed { id: "deadlift", name: "Deadlift", category: "back", muscle_groups: &["back", "hamstrings", "glutes"] },
    ExerciseSeed { id: "barbell_row", name: "Barbell Row", category: "back", muscle_groups: &["back", "biceps"] },
    ExerciseSeed { id: "pull_up", name: "Pull-up", category: "back", muscle_groups: &["back", "biceps"] },
    ExerciseSeed { id: "lat_pulldown", name: "Lat Pulldown", category: "back", muscle_groups: &["back", "biceps"] },
    ExerciseSeed { id: "straight_arm_pulldown", name: "Straight-arm Pulldown", category: "back", muscle_groups: &["back"] },
    // Shoulders
    ExerciseSeed { id: "overhead_press", name: "Overhead Press", category: "shoulders", muscle_groups: &["shoulders", "triceps"] },
    ExerciseSeed { id: "lateral_raise", name: "Lateral Raise", category: "shoulders", muscle_groups: &["shoulders"] },
    ExerciseSeed { id: "face_pull", name: "Face Pull", category: "shoulders", muscle_groups: &["shoulders", "back"] },
    // Arms
    ExerciseSeed { id: "dip", name: "Dip", category: "arms", muscle_groups: &["triceps", "chest", "shoulders"] },
    ExerciseSeed { id: "triceps_pushdown", name: "Triceps Pushdown", category: "arms", muscle_groups: &["triceps"] },
    ExerciseSeed { id: "skull_crusher", name: "Skull Crusher", category: "arms", muscle_groups: &["triceps"] },
    ExerciseSeed { id: "barbell_curl", name: "Barbell Curl", category: "arms", muscle_groups: &["biceps"] },
    ExerciseSeed { id: "hammer_curl", name: "Hammer Curl", category: "arms", muscle_groups: &["biceps", "forearms"] },
    // Legs
    ExerciseSeed { id: "squat", name: "Back Squat", category: "legs", muscle_groups: &["quads", "glutes", "hamstrings"] },
    ExerciseSeed { id: "romanian_deadlift", name: "Romanian Deadlift", category: "legs", muscle_groups: &["hamstrings", "glutes", "back"] },
    ExerciseSeed { id: "leg_press", name: "Leg Press", category: "legs", muscle_groups: &["quads", "glutes"] },
    ExerciseSeed { id: "lunge", name: "Walking Lunge", category: "legs", muscle_groups: &["quads", "glutes"] },
    ExerciseSeed { id: "leg_extension", name: "Leg Extension", category: "legs", muscle_groups: &["quads"] },
    ExerciseSeed { id: "leg_curl", name: "Leg Curl", category: "legs", muscle_groups: &["hamstrings"] },
    ExerciseSeed { id: "calf_raise", name: "Standing Calf Raise", category: "legs", muscle_groups: &["calves"] },
    // Core
    ExerciseSeed { id: "plank", name: "Plank", category: "core", muscle_groups: &["core"] },
    ExerciseSeed { id: "hanging_leg_raise", name: "Hanging Leg Raise", category: "core", muscle_groups: &["core"] },
];

pub fn builtin_catalog() -> Catalog {
    let exercises = BUILTIN_EXERCISES
        .iter()
        .map(|seed| CatalogExercise {
            id: seed.id.to_string(),
            name: seed.name.to_string(),
            category: seed.category.to_string(),
            muscle_groups: seed.muscle_groups.iter().map(|m| m.to_string()).collect(),
        })
        .collect();
    Catalog::new(exercises)
}

/// Load a catalog from a JSON array of exercises
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading catalog {}", path.display()))?;
    let catalog: Catalog = serde_json::from_str(&raw)
        .with_context(|| format!("parsing catalog {}", path.display()))?;
    info!("Loaded {} catalog exercises from {}", catalog.len(), path.display());
    Ok(catalog)
}

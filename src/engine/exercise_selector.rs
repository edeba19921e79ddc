//! Exercise selection for the chosen split

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::config::{EngineConfig, SplitDefinition};
use crate::exercises::{Catalog, CatalogExercise};
use crate::history::CompletedWorkout;

const MAX_COMPOUND: usize = 3;
const MAX_ISOLATION: usize = 2;
const MAX_EXERCISES: usize = 5;

const ARMS_CATEGORY: &str = "arms";
const TRICEPS_KEYWORDS: &[&str] = &["tricep", "dip", "pushdown"];
const BICEPS_KEYWORDS: &[&str] = &["bicep", "curl"];

pub struct ExerciseSelector<'a> {
    config: &'a EngineConfig,
    catalog: &'a Catalog,
    last_performed: HashMap<&'a str, DateTime<Utc>>,
}

impl<'a> ExerciseSelector<'a> {
    pub fn new(config: &'a EngineConfig, catalog: &'a Catalog, workouts: &'a [CompletedWorkout]) -> Self {
        let mut last_performed: HashMap<&'a str, DateTime<Utc>> = HashMap::new();
        for workout in workouts {
            for completed in &workout.exercises {
                let entry = last_performed
                    .entry(completed.exercise_id.as_str())
                    .or_insert(workout.finished_at);
                if *entry < workout.finished_at {
                    *entry = workout.finished_at;
                }
            }
        }

        Self {
            config,
            catalog,
            last_performed,
        }
    }

    pub fn last_performed(&self, exercise_id: &str) -> Option<DateTime<Utc>> {
        self.last_performed.get(exercise_id).copied()
    }

    /// Arms work only counts for push/pull when it matches that split's movement
    fn fits_split(split: &SplitDefinition, exercise: &CatalogExercise) -> bool {
        if !split.categories.iter().any(|c| *c == exercise.category) {
            return false;
        }
        if exercise.category != ARMS_CATEGORY {
            return true;
        }
        match split.id.as_str() {
            "push" => exercise.has_muscle("triceps") || exercise.name_mentions(TRICEPS_KEYWORDS),
            "pull" => exercise.has_muscle("biceps") || exercise.name_mentions(BICEPS_KEYWORDS),
            _ => true,
        }
    }

    /// Up to 3 compound then 2 isolation exercises, least recently done first
    pub fn select(&self, split: &SplitDefinition) -> Vec<&'a CatalogExercise> {
        let (mut compound, mut isolation): (Vec<_>, Vec<_>) = self
            .catalog
            .exercises()
            .iter()
            .filter(|e| Self::fits_split(split, e))
            .partition(|e| self.config.is_compound(&e.id));

        // None sorts before Some, so never-done exercises come first
        compound.sort_by_key(|e| self.last_performed(&e.id));
        isolation.sort_by_key(|e| self.last_performed(&e.id));

        compound
            .into_iter()
            .take(MAX_COMPOUND)
            .chain(isolation.into_iter().take(MAX_ISOLATION))
            .take(MAX_EXERCISES)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exercises::builtin_catalog;
    use crate::history::{CompletedExercise, CompletedSet};
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap()
    }

    fn workout_days_ago(days_ago: i64, ids: &[&str]) -> CompletedWorkout {
        let finished_at = now() - Duration::days(days_ago);
        CompletedWorkout {
            exercises: ids
                .iter()
                .map(|id| CompletedExercise {
                    exercise_id: id.to_string(),
                    sets: vec![CompletedSet {
                        weight: Some(40.0),
                        reps: Some(10),
                        rpe: Some(7),
                        completed_at: finished_at,
                    }],
                })
                .collect(),
            finished_at,
        }
    }

    fn split_named<'c>(config: &'c EngineConfig, id: &str) -> &'c SplitDefinition {
        config.splits.iter().find(|s| s.id == id).unwrap()
    }

    fn ids(selected: &[&CatalogExercise]) -> Vec<String> {
        selected.iter().map(|e| e.id.clone()).collect()
    }

    #[test]
    fn test_push_with_no_history_follows_catalog_order() {
        let config = EngineConfig::default();
        let catalog = builtin_catalog();
        let selector = ExerciseSelector::new(&config, &catalog, &[]);
        let selected = selector.select(split_named(&config, "push"));
        assert_eq!(
            ids(&selected),
            vec!["bench_press", "incline_bench_press", "overhead_press", "dumbbell_fly", "cable_crossover"]
        );
    }

    #[test]
    fn test_push_keeps_only_triceps_arms() {
        let config = EngineConfig::default();
        let catalog = builtin_catalog();
        let push = split_named(&config, "push");
        let curl = catalog.lookup_exercise("barbell_curl").unwrap();
        let pushdown = catalog.lookup_exercise("triceps_pushdown").unwrap();
        assert!(!ExerciseSelector::fits_split(push, curl));
        assert!(ExerciseSelector::fits_split(push, pushdown));
    }

    #[test]
    fn test_pull_keeps_only_biceps_arms() {
        let config = EngineConfig::default();
        let catalog = builtin_catalog();
        let pull = split_named(&config, "pull");
        assert!(ExerciseSelector::fits_split(pull, catalog.lookup_exercise("hammer_curl").unwrap()));
        assert!(!ExerciseSelector::fits_split(pull, catalog.lookup_exercise("skull_crusher").unwrap()));
        assert!(!ExerciseSelector::fits_split(pull, catalog.lookup_exercise("squat").unwrap()));
    }

    #[test]
    fn test_arms_name_match_without_tag() {
        let config = EngineConfig::default();
        let pull = split_named(&config, "pull");
        let untagged = CatalogExercise {
            id: "spider_curl".to_string(),
            name: "Spider Curl".to_string(),
            category: "arms".to_string(),
            muscle_groups: vec![],
        };
        assert!(ExerciseSelector::fits_split(pull, &untagged));
    }

    #[test]
    fn test_recently_done_sorted_last() {
        let config = EngineConfig::default();
        let catalog = builtin_catalog();
        let workouts = vec![
            workout_days_ago(1, &["bench_press", "dumbbell_fly"]),
            workout_days_ago(4, &["incline_bench_press"]),
        ];
        let selector = ExerciseSelector::new(&config, &catalog, &workouts);
        let selected = selector.select(split_named(&config, "push"));
        // compound: overhead_press, dip never done; incline (4d) before bench (1d)
        assert_eq!(
            ids(&selected),
            vec!["overhead_press", "dip", "incline_bench_press", "cable_crossover", "lateral_raise"]
        );
    }

    #[test]
    fn test_last_performed_uses_latest_workout() {
        let config = EngineConfig::default();
        let catalog = builtin_catalog();
        let workouts = vec![workout_days_ago(1, &["squat"]), workout_days_ago(9, &["squat"])];
        let selector = ExerciseSelector::new(&config, &catalog, &workouts);
        assert_eq!(selector.last_performed("squat"), Some(now() - Duration::days(1)));
        assert!(selector.last_performed("deadlift").is_none());
    }

    #[test]
    fn test_legs_selection_is_capped() {
        let config = EngineConfig::default();
        let catalog = builtin_catalog();
        let selector = ExerciseSelector::new(&config, &catalog, &[]);
        let selected = selector.select(split_named(&config, "legs"));
        assert_eq!(
            ids(&selected),
            vec!["squat", "romanian_deadlift", "leg_press", "leg_extension", "leg_curl"]
        );
    }

    #[test]
    fn test_unknown_categories_select_nothing() {
        let config = EngineConfig::default();
        let catalog = builtin_catalog();
        let selector = ExerciseSelector::new(&config, &catalog, &[]);
        let split = SplitDefinition {
            id: "cardio".to_string(),
            name: "Cardio".to_string(),
            muscles: vec![],
            categories: vec!["cardio".to_string()],
        };
        assert!(selector.select(&split).is_empty());
    }
}

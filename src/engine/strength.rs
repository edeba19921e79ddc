//! One-rep-max estimation from logged sets

use crate::config::EngineConfig;
use crate::history::CompletedWorkout;

/// Smallest plate increment, every recommended weight is a multiple of it
pub const WEIGHT_STEP: f64 = 2.5;

/// Round to the nearest plate increment, never below one increment
pub fn round_to_step(weight: f64) -> f64 {
    ((weight / WEIGHT_STEP).round() * WEIGHT_STEP).max(WEIGHT_STEP)
}

/// Epley estimate. A single is taken as a true max.
pub fn estimate_1rm(weight: f64, reps: u32) -> f64 {
    if reps == 1 {
        return weight;
    }
    weight * (1.0 + reps as f64 / 30.0)
}

/// Estimates 1RM with RPE-adjusted effective reps
#[derive(Debug, Clone)]
pub struct StrengthEstimator<'a> {
    config: &'a EngineConfig,
}

impl<'a> StrengthEstimator<'a> {
    pub fn new(config: &'a EngineConfig) -> Self {
        Self { config }
    }

    pub fn reserve(&self, rpe: Option<u8>) -> u32 {
        self.config.reserve_for(rpe)
    }

    pub fn estimate_1rm_with_rpe(&self, weight: f64, reps: u32, rpe: Option<u8>) -> f64 {
        estimate_1rm(weight, reps.saturating_add(self.reserve(rpe)))
    }

    /// Working weight for `target_reps` at `target_rpe` (default 8)
    ///
    /// Uses the inverted Brzycki coefficients. If the denominator is not
    /// positive the 1RM itself is kept.
    pub fn weight_for_reps(&self, one_rm: f64, target_reps: u32, target_rpe: Option<u8>) -> f64 {
        let effective_reps = target_reps.saturating_add(self.reserve(target_rpe.or(Some(8))));
        let denominator = 1.0278 - 0.0278 * effective_reps as f64;
        if denominator <= 0.0 {
            return round_to_step(one_rm);
        }
        let percentage = 1.0 / denominator;
        round_to_step(one_rm * percentage)
    }

    /// Best estimated 1RM across every logged set of an exercise
    ///
    /// Sets missing weight or reps do not count.
    pub fn best_estimated_1rm(&self, workouts: &[CompletedWorkout], exercise_id: &str) -> Option<f64> {
        workouts
            .iter()
            .flat_map(|w| w.exercises.iter())
            .filter(|e| e.exercise_id == exercise_id)
            .flat_map(|e| e.sets.iter())
            .filter_map(|s| match (s.weight, s.reps) {
                (Some(weight), Some(reps)) if reps > 0 => {
                    Some(self.estimate_1rm_with_rpe(weight, reps, s.rpe))
                }
                _ => None,
            })
            .fold(None, |best: Option<f64>, e1rm| match best {
                Some(b) if b >= e1rm => Some(b),
                _ => Some(e1rm),
            })
    }
}

//! Next-set suggestions keyed by how hard the previous set felt

use serde::Serialize;

use super::strength::{round_to_step, WEIGHT_STEP};

const MAX_OPTIONS: usize = 3;

/// One suggested next set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetRecommendation {
    pub weight: f64,
    pub reps: u32,
    pub reason: String,
}

impl SetRecommendation {
    fn new(weight: f64, reps: u32, reason: &str) -> Self {
        Self {
            weight,
            reps,
            reason: reason.to_string(),
        }
    }
}

/// Suggest up to three options for the next set; the first one is the default
pub fn next_set_recommendations(weight: f64, reps: u32, rpe: u8) -> Vec<SetRecommendation> {
    let mut options = Vec::with_capacity(MAX_OPTIONS);

    match rpe {
        // Reps left in the tank: add load or reps
        0..=7 => {
            options.push(SetRecommendation::new(weight + WEIGHT_STEP, reps, "+2.5kg"));
            if weight >= 20.0 {
                options.push(SetRecommendation::new(weight + 2.0 * WEIGHT_STEP, reps, "+5kg"));
            }
            options.push(SetRecommendation::new(weight, reps.saturating_add(2), "+2 reps"));
        }
        8 => {
            options.push(SetRecommendation::new(weight, reps, "Maintain"));
            if reps > 3 {
                options.push(SetRecommendation::new(weight, reps - 1, "Rep decrease"));
            }
            if reps > 5 {
                options.push(SetRecommendation::new(
                    weight + WEIGHT_STEP,
                    reps - 2,
                    "Weight up, reps down",
                ));
            }
        }
        // At or near failure: back off
        _ => {
            options.push(SetRecommendation::new(round_to_step(weight * 0.95), reps, "-5%"));
            options.push(SetRecommendation::new(round_to_step(weight * 0.90), reps, "-10%"));
            if reps > 3 {
                options.push(SetRecommendation::new(weight, reps.saturating_sub(2).max(1), "-2 reps"));
            }
        }
    }

    options.truncate(MAX_OPTIONS);
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_step_multiple(weight: f64) -> bool {
        let steps = weight / WEIGHT_STEP;
        (steps - steps.round()).abs() < 1e-9
    }

    #[test]
    fn test_easy_set_heavy_enough_for_five_kg() {
        let recs = next_set_recommendations(50.0, 10, 6);
        assert_eq!(recs.len(), 3);
        assert_eq!((recs[0].weight, recs[0].reps), (52.5, 10));
        assert_eq!(recs[0].reason, "+2.5kg");
        assert_eq!((recs[1].weight, recs[1].reps), (55.0, 10));
        assert_eq!(recs[1].reason, "+5kg");
        assert_eq!((recs[2].weight, recs[2].reps), (50.0, 12));
        assert_eq!(recs[2].reason, "+2 reps");
    }

    #[test]
    fn test_easy_set_light_weight_skips_five_kg() {
        let recs = next_set_recommendations(15.0, 12, 7);
        assert_eq!(recs.len(), 2);
        assert_eq!((recs[0].weight, recs[0].reps), (17.5, 12));
        assert_eq!((recs[1].weight, recs[1].reps), (15.0, 14));
    }

    #[test]
    fn test_five_kg_threshold_is_inclusive() {
        let recs = next_set_recommendations(20.0, 8, 5);
        assert_eq!(recs.len(), 3);
        assert_eq!(recs[1].weight, 25.0);
    }

    #[test]
    fn test_on_target_set() {
        let recs = next_set_recommendations(60.0, 8, 8);
        assert_eq!(recs.len(), 3);
        assert_eq!((recs[0].weight, recs[0].reps), (60.0, 8));
        assert_eq!(recs[0].reason, "Maintain");
        assert_eq!((recs[1].weight, recs[1].reps), (60.0, 7));
        assert_eq!((recs[2].weight, recs[2].reps), (62.5, 6));
    }

    #[test]
    fn test_on_target_three_reps_only_maintains() {
        let recs = next_set_recommendations(100.0, 3, 8);
        assert_eq!(recs.len(), 1);
        assert_eq!((recs[0].weight, recs[0].reps), (100.0, 3));
    }

    #[test]
    fn test_on_target_four_and_five_reps() {
        assert_eq!(next_set_recommendations(100.0, 4, 8).len(), 2);
        assert_eq!(next_set_recommendations(100.0, 5, 8).len(), 2);
        assert_eq!(next_set_recommendations(100.0, 6, 8).len(), 3);
    }

    #[test]
    fn test_hard_set_backs_off() {
        let recs = next_set_recommendations(80.0, 5, 9);
        assert_eq!(recs.len(), 3);
        // 76 -> 75, 72 -> 72.5
        assert_eq!((recs[0].weight, recs[0].reps), (75.0, 5));
        assert_eq!(recs[0].reason, "-5%");
        assert_eq!((recs[1].weight, recs[1].reps), (72.5, 5));
        assert_eq!(recs[1].reason, "-10%");
        assert_eq!((recs[2].weight, recs[2].reps), (80.0, 3));
        assert_eq!(recs[2].reason, "-2 reps");
    }

    #[test]
    fn test_failure_low_reps_no_rep_drop() {
        let recs = next_set_recommendations(100.0, 3, 10);
        assert_eq!(recs.len(), 2);
    }

    #[test]
    fn test_back_off_floors_at_one_step() {
        let recs = next_set_recommendations(1.0, 5, 10);
        assert_eq!(recs[0].weight, 2.5);
        assert_eq!(recs[1].weight, 2.5);
    }

    #[test]
    fn test_degenerate_inputs_do_not_panic() {
        assert_eq!(next_set_recommendations(0.0, 0, 6).len(), 2);
        assert_eq!(next_set_recommendations(-20.0, 0, 8).len(), 1);
        assert_eq!(next_set_recommendations(-20.0, 0, 10).len(), 2);
    }

    #[test]
    fn test_huge_rep_counts_do_not_overflow() {
        let easy = next_set_recommendations(50.0, u32::MAX, 6);
        assert_eq!(easy.len(), 3);
        assert_eq!(easy[2].reps, u32::MAX);

        assert_eq!(next_set_recommendations(50.0, u32::MAX, 8).len(), 3);
        let hard = next_set_recommendations(50.0, u32::MAX, 10);
        assert_eq!(hard[2].reps, u32::MAX - 2);
    }

    #[test]
    fn test_weights_are_step_multiples() {
        for weight in [2.5, 10.0, 22.5, 47.5, 80.0, 142.5, 200.0] {
            for reps in 1..=15 {
                for rpe in 1..=10 {
                    for rec in next_set_recommendations(weight, reps, rpe) {
                        assert!(is_step_multiple(rec.weight), "{} from {}x{}@{}", rec.weight, weight, reps, rpe);
                        assert!(rec.weight >= WEIGHT_STEP);
                    }
                }
            }
        }
    }
}

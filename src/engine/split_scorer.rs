//! Split scoring - pick the session type that fits recovery and weekly volume best

use tracing::debug;

use crate::config::SplitDefinition;

use super::recovery::{RecoveryClock, RecoveryStatus};
use super::volume::{VolumeStatus, VolumeTracker};

const FRESH_BONUS: i32 = 30;
const RECOVERED_BONUS: i32 = 20;
const RECOVERING_PENALTY: i32 = -30;
const LOW_VOLUME_BONUS: i32 = 25;
const HIGH_VOLUME_PENALTY: i32 = -15;
const STALE_BONUS: i32 = 15;
/// Days without training after which a muscle counts as stale
const STALE_AFTER_DAYS: i64 = 5;
const MAX_REASONS: usize = 2;

/// Score of one candidate split with the reasons collected while scoring it
#[derive(Debug, Clone)]
pub struct SplitScore<'s> {
    pub split: &'s SplitDefinition,
    pub score: i32,
    pub reasons: Vec<String>,
}

pub struct SplitScorer<'t> {
    volume: &'t VolumeTracker<'t>,
    recovery: &'t RecoveryClock<'t>,
}

impl<'t> SplitScorer<'t> {
    pub fn new(volume: &'t VolumeTracker<'t>, recovery: &'t RecoveryClock<'t>) -> Self {
        Self { volume, recovery }
    }

    pub fn score<'s>(&self, split: &'s SplitDefinition) -> SplitScore<'s> {
        let mut score = 0;
        let mut reasons = Vec::new();

        for muscle in &split.muscles {
            score += match self.recovery.status(muscle) {
                RecoveryStatus::Fresh => FRESH_BONUS,
                RecoveryStatus::Recovered => RECOVERED_BONUS,
                RecoveryStatus::Recovering => RECOVERING_PENALTY,
            };

            match self.volume.status(muscle) {
                VolumeStatus::Low => {
                    score += LOW_VOLUME_BONUS;
                    reasons.push(format!("{} volume low", muscle));
                }
                VolumeStatus::High => score += HIGH_VOLUME_PENALTY,
                VolumeStatus::Optimal => {}
            }

            if let Some(days) = self.recovery.days_since(muscle) {
                if days > STALE_AFTER_DAYS {
                    score += STALE_BONUS;
                    reasons.push(format!("{}: {} days since trained", muscle, days));
                }
            }
        }

        debug!("Split {} scored {}", split.id, score);
        SplitScore { split, score, reasons }
    }

    /// Highest scoring split; on a tie the earlier candidate is kept
    pub fn best<'s>(&self, splits: &'s [SplitDefinition]) -> Option<SplitScore<'s>> {
        let mut best: Option<SplitScore<'s>> = None;
        for split in splits {
            let candidate = self.score(split);
            match &best {
                Some(current) if candidate.score <= current.score => {}
                _ => best = Some(candidate),
            }
        }
        best
    }

    /// Up to two reasons from scoring, else the least trained low-volume muscle
    pub fn explain(&self, winner: &SplitScore, all_muscles: &[&str]) -> String {
        if !winner.reasons.is_empty() {
            return winner
                .reasons
                .iter()
                .take(MAX_REASONS)
                .cloned()
                .collect::<Vec<_>>()
                .join(", ");
        }

        let mut lowest: Option<(&str, f64)> = None;
        for &muscle in all_muscles {
            if self.volume.status(muscle) != VolumeStatus::Low {
                continue;
            }
            let volume = self.volume.volume(muscle);
            match lowest {
                Some((_, v)) if v <= volume => {}
                _ => lowest = Some((muscle, volume)),
            }
        }

        match lowest {
            Some((muscle, _)) => format!("{} low volume", muscle),
            None => "balanced training".to_string(),
        }
    }
}

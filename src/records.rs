//! Best-score / best-time session records
//!
//! Two named scalars that survive gameplay restarts within one process but
//! start fresh on every process launch. They are only ever raised, never
//! lowered, by a completed session.

use serde::{Deserialize, Serialize};

use crate::persistence::RecordStore;

/// Record store key for the best score
pub const BEST_SCORE_KEY: &str = "bestScore";
/// Record store key for the longest survival time
pub const BEST_TIME_KEY: &str = "bestTime";

/// The two persisted best-record scalars
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestRecords {
    /// Highest score any session has reached
    pub best_score: u32,
    /// Longest survival, in whole seconds
    pub best_time: u32,
}

impl BestRecords {
    /// Start-of-process constructor: removes both stored records first, the
    /// "always start fresh" policy. Records then accumulate only across
    /// restarts within this process lifetime.
    pub fn fresh(store: &mut dyn RecordStore) -> Self {
        store.remove(BEST_SCORE_KEY);
        store.remove(BEST_TIME_KEY);
        Self::default()
    }

    /// Load whatever the store currently holds, defaulting missing or
    /// unreadable records to zero.
    pub fn load(store: &dyn RecordStore) -> Self {
        Self {
            best_score: store.get(BEST_SCORE_KEY).unwrap_or(0.0) as u32,
            best_time: store.get(BEST_TIME_KEY).unwrap_or(0.0) as u32,
        }
    }

    /// Offer a finished session's score and survival time. Each record is
    /// raised independently if exceeded; neither ever decreases. Returns
    /// whether anything improved.
    pub fn submit(&mut self, score: u32, elapsed_secs: u32) -> bool {
        let mut improved = false;
        if score > self.best_score {
            self.best_score = score;
            improved = true;
        }
        if elapsed_secs > self.best_time {
            self.best_time = elapsed_secs;
            improved = true;
        }
        improved
    }

    /// Persist both records through the store port
    pub fn save(&self, store: &mut dyn RecordStore) {
        store.set(BEST_SCORE_KEY, self.best_score as f64);
        store.set(BEST_TIME_KEY, self.best_time as f64);
    }
}

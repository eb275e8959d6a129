use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ShareOutcome {
    #[default]
    Idle,
    Success,
    Error,
}

#[derive(Debug, Default)]
struct StatusCell {
    outcome: ShareOutcome,
    epoch: u64,
}

/// Shared share-button state. Cloning yields another handle to the same cell.
#[derive(Debug, Clone, Default)]
pub struct ShareStatus {
    cell: Arc<Mutex<StatusCell>>,
}

impl ShareStatus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> ShareOutcome {
        self.lock().outcome
    }

    pub fn set(&self, outcome: ShareOutcome) {
        self.set_tracked(outcome);
    }

    pub fn reset(&self) {
        self.set(ShareOutcome::Idle);
    }

    /// Sets `outcome` now and back to `Idle` after `delay`, unless something
    /// else was set in between. Must be called inside a tokio runtime.
    pub fn set_with_revert(&self, outcome: ShareOutcome, delay: Duration) {
        let epoch = self.set_tracked(outcome);
        let status = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut cell = status.lock();
            if cell.epoch == epoch {
                cell.outcome = ShareOutcome::Idle;
                cell.epoch += 1;
            }
        });
    }

    fn set_tracked(&self, outcome: ShareOutcome) -> u64 {
        let mut cell = self.lock();
        cell.outcome = outcome;
        cell.epoch += 1;
        cell.epoch
    }

    fn lock(&self) -> MutexGuard<'_, StatusCell> {
        self.cell.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

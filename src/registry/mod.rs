use std::collections::BTreeSet;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::errors::{ConfigurationError, Result};

/// Ranked process ids and their liveness. The process set is fixed for the run;
/// the dead-set is seeded from configuration and may only grow (crash injection).
#[derive(Clone, Debug)]
pub struct ProcessRegistry {
    process_ids: Arc<Vec<u64>>,
    dead_ids: Arc<RwLock<BTreeSet<u64>>>,
}

impl ProcessRegistry {
    /// Expects validated input: ascending unique ids and a dead-set within them.
    pub(crate) fn new(process_ids: Vec<u64>, dead_ids: BTreeSet<u64>) -> ProcessRegistry {
        ProcessRegistry {
            process_ids: Arc::new(process_ids),
            dead_ids: Arc::new(RwLock::new(dead_ids)),
        }
    }

    pub fn is_dead(&self, process_id: u64) -> bool {
        self.dead_ids.read().contains(&process_id)
    }

    pub fn is_member(&self, process_id: u64) -> bool {
        self.process_ids.binary_search(&process_id).is_ok()
    }

    /// Live processes ranked strictly above `process_id`, ascending.
    pub fn higher_live_peers(&self, process_id: u64) -> Vec<u64> {
        let dead_ids = self.dead_ids.read();

        self.process_ids
            .iter()
            .filter(|&&id| id > process_id && !dead_ids.contains(&id))
            .cloned()
            .collect()
    }

    pub fn all_processes(&self) -> Vec<u64> {
        self.process_ids.as_ref().clone()
    }

    pub fn live_processes(&self) -> Vec<u64> {
        let dead_ids = self.dead_ids.read();

        self.process_ids
            .iter()
            .filter(|id| !dead_ids.contains(*id))
            .cloned()
            .collect()
    }

    pub fn highest_live_process(&self) -> Option<u64> {
        self.live_processes().last().cloned()
    }

    /// Marks a member process as crashed. Returns false if it was already dead.
    pub fn mark_dead(&self, process_id: u64) -> Result<bool> {
        if !self.is_member(process_id) {
            return Err(ConfigurationError::UnknownProcess(process_id));
        }

        let newly_dead = self.dead_ids.write().insert(process_id);
        if newly_dead {
            warn!("Process {} marked dead", process_id);
        }

        Ok(newly_dead)
    }
}

use std::collections::BTreeSet;

use crate::errors::{ConfigurationError, Result};
use crate::registry::ProcessRegistry;

/// Upper bound on the number of simulated processes.
pub const MAX_PROCESSES: usize = 10;

/// Process set supplied by the caller before any election starts.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProcessSetConfiguration {
    pub process_ids: Vec<u64>,
    pub initiator_id: u64,
    pub dead_ids: BTreeSet<u64>,
}

impl ProcessSetConfiguration {
    pub fn new(process_ids: Vec<u64>, initiator_id: u64, dead_ids: Vec<u64>) -> ProcessSetConfiguration {
        ProcessSetConfiguration {
            process_ids,
            initiator_id,
            dead_ids: dead_ids.into_iter().collect(),
        }
    }

    /// Checks the configuration and builds the registry the core runs against.
    pub fn validate(&self) -> Result<ProcessRegistry> {
        if self.process_ids.is_empty() {
            return Err(ConfigurationError::EmptyProcessSet);
        }

        if self.process_ids.len() > MAX_PROCESSES {
            return Err(ConfigurationError::TooManyProcesses(
                self.process_ids.len(),
                MAX_PROCESSES,
            ));
        }

        for pair in self.process_ids.windows(2) {
            if pair[0] >= pair[1] {
                return Err(ConfigurationError::ProcessIdsNotAscending {
                    previous: pair[0],
                    next: pair[1],
                });
            }
        }

        let registry = ProcessRegistry::new(self.process_ids.clone(), self.dead_ids.clone());

        if !registry.is_member(self.initiator_id) {
            return Err(ConfigurationError::InitiatorNotFound(self.initiator_id));
        }

        if let Some(unknown) = self.dead_ids.iter().find(|id| !registry.is_member(**id)) {
            return Err(ConfigurationError::UnknownDeadProcess(*unknown));
        }

        Ok(registry)
    }
}

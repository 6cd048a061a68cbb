use core::fmt;
use std::fmt::Display;

use crate::coordinator::CoordinatorState;
use crate::registry::ProcessRegistry;

/// Terminal outcome of an election.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ElectionOutcome {
    Elected(u64),
    /// No live process declared itself: every candidate was dead or the initiator was.
    Unresolved,
}

impl From<Option<u64>> for ElectionOutcome {
    fn from(coordinator_id: Option<u64>) -> Self {
        match coordinator_id {
            Some(id) => ElectionOutcome::Elected(id),
            None => ElectionOutcome::Unresolved,
        }
    }
}

impl ElectionOutcome {
    pub fn coordinator_id(&self) -> Option<u64> {
        match *self {
            ElectionOutcome::Elected(id) => Some(id),
            ElectionOutcome::Unresolved => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Acknowledgment {
    pub process_id: u64,
    pub coordinator_id: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ElectionResult {
    pub outcome: ElectionOutcome,
    pub acknowledgments: Vec<Acknowledgment>,
}

impl ElectionResult {
    /// Snapshot of the coordinator and the live processes that acknowledge it.
    pub fn collect(registry: &ProcessRegistry, coordinator: &CoordinatorState) -> ElectionResult {
        let outcome = ElectionOutcome::from(coordinator.read());

        let acknowledgments = match outcome {
            ElectionOutcome::Elected(coordinator_id) => registry
                .live_processes()
                .into_iter()
                .filter(|&id| id != coordinator_id)
                .map(|process_id| Acknowledgment {
                    process_id,
                    coordinator_id,
                })
                .collect(),
            ElectionOutcome::Unresolved => Vec::new(),
        };

        ElectionResult {
            outcome,
            acknowledgments,
        }
    }
}

impl Display for ElectionResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.outcome {
            ElectionOutcome::Elected(coordinator_id) => {
                writeln!(
                    f,
                    "Election completed. Process {} is elected as the new coordinator.",
                    coordinator_id
                )?;
                writeln!(f)?;
                writeln!(f, "Coordinator announcement:")?;
                for ack in &self.acknowledgments {
                    writeln!(
                        f,
                        "Process {} acknowledges Process {} as the coordinator.",
                        ack.process_id, ack.coordinator_id
                    )?;
                }
                Ok(())
            }
            ElectionOutcome::Unresolved => {
                writeln!(f, "Election unresolved. No live process could become the coordinator.")
            }
        }
    }
}

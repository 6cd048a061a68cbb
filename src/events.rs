use core::fmt;
use std::fmt::Display;

use crossbeam_channel::Sender;

/// Protocol events. Each one is logged and, when a receiver is attached, delivered to it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ElectionEvent {
    ElectionTriggered { initiator_id: u64, epoch: u64 },
    ElectionSent { from: u64, to: u64 },
    OkResponded { from: u64, to: u64 },
    CoordinatorDeclared { process_id: u64, accepted: bool },
    HeartbeatCheck { process_id: u64, coordinator_id: Option<u64> },
    CoordinatorDeathDetected { process_id: u64, coordinator_id: u64 },
}

impl Display for ElectionEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ElectionEvent::ElectionTriggered { initiator_id, epoch } => write!(
                f,
                "Process {}: election triggered (epoch {})",
                initiator_id, epoch
            ),
            ElectionEvent::ElectionSent { from, to } => {
                write!(f, "Process {}: sends ELECTION to Process {}", from, to)
            }
            ElectionEvent::OkResponded { from, to } => {
                write!(f, "Process {}: responds OK to Process {}", from, to)
            }
            ElectionEvent::CoordinatorDeclared { process_id, accepted: true } => {
                write!(f, "Process {}: declares itself coordinator", process_id)
            }
            ElectionEvent::CoordinatorDeclared { process_id, accepted: false } => write!(
                f,
                "Process {}: coordinator declaration superseded by a higher process",
                process_id
            ),
            ElectionEvent::HeartbeatCheck { process_id, coordinator_id: Some(coordinator_id) } => write!(
                f,
                "Process {}: heartbeat check of coordinator Process {}",
                process_id, coordinator_id
            ),
            ElectionEvent::HeartbeatCheck { process_id, coordinator_id: None } => write!(
                f,
                "Process {}: heartbeat check, coordinator unknown",
                process_id
            ),
            ElectionEvent::CoordinatorDeathDetected { process_id, coordinator_id } => write!(
                f,
                "Process {}: coordinator Process {} is dead",
                process_id, coordinator_id
            ),
        }
    }
}

/// Logs election events and forwards them to an optional observer channel.
#[derive(Clone, Debug, Default)]
pub struct EventReporter {
    events_tx: Option<Sender<ElectionEvent>>,
}

impl EventReporter {
    pub fn new(events_tx: Sender<ElectionEvent>) -> EventReporter {
        EventReporter {
            events_tx: Some(events_tx),
        }
    }

    /// Log-only reporter.
    pub fn silent() -> EventReporter {
        EventReporter::default()
    }

    pub fn report(&self, event: ElectionEvent) {
        match event {
            ElectionEvent::CoordinatorDeathDetected { .. } => warn!("{}", event),
            ElectionEvent::HeartbeatCheck { .. } => debug!("{}", event),
            _ => info!("{}", event),
        }

        if let Some(ref events_tx) = self.events_tx {
            if events_tx.send(event).is_err() {
                trace!("Election event receiver is gone: {}", event);
            }
        }
    }
}

use std::sync::Arc;
use std::time::Duration;

use crate::configuration::ProcessSetConfiguration;
use crate::coordinator::CoordinatorState;
use crate::election::{start_election, DelayScheduler};
use crate::errors::Result;
use crate::events::EventReporter;
use crate::heartbeat::{HeartbeatMonitor, HeartbeatSettings};
use crate::registry::ProcessRegistry;
use crate::result::{ElectionOutcome, ElectionResult};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct SessionSettings {
    /// How long the heartbeat monitor watches the elected coordinator (and the
    /// longest wait for a recovery to be triggered).
    pub observation_window: Duration,
    /// Crash the elected coordinator once it is settled and let the heartbeat recover.
    pub simulate_coordinator_failure: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        SessionSettings {
            observation_window: Duration::from_secs(2),
            simulate_coordinator_failure: false,
        }
    }
}

/// Runs the whole simulation for one configuration: election from the initiator,
/// heartbeat supervision of the winner and, optionally, a crash and re-election.
pub fn run_session<S: DelayScheduler>(
    config: &ProcessSetConfiguration,
    scheduler: Arc<S>,
    settings: SessionSettings,
    reporter: EventReporter,
) -> Result<ElectionResult> {
    let registry = config.validate()?;
    let coordinator = CoordinatorState::new();

    info!("Election initiated by Process {}", config.initiator_id);
    let election = start_election(
        &registry,
        &coordinator,
        scheduler.clone(),
        config.initiator_id,
        reporter.clone(),
    )?;

    let outcome = election.wait_settled();
    info!("Election settled after {} campaign branches", election.spawned_branches());

    let crashed_coordinator = match outcome {
        ElectionOutcome::Elected(coordinator_id) if settings.simulate_coordinator_failure => {
            Some(coordinator_id)
        }
        _ => None,
    };

    let supervisor_id = match supervising_process(&registry, config.initiator_id, crashed_coordinator) {
        Some(process_id) => process_id,
        None => {
            info!("No live process left to run the heartbeat monitor");
            return Ok(ElectionResult::collect(&registry, &coordinator));
        }
    };

    let heartbeat_settings = HeartbeatSettings::new(supervisor_id);
    let monitor = HeartbeatMonitor::start(&registry, &coordinator, scheduler, heartbeat_settings, reporter)?;

    if let Some(coordinator_id) = crashed_coordinator {
        registry.mark_dead(coordinator_id)?;
    }

    match monitor.wait_recovery(settings.observation_window) {
        Some(recovery) => {
            let recovered = recovery.election.wait_settled();
            info!(
                "Recovery after Process {} died settled with {:?}",
                recovery.dead_coordinator, recovered
            );
        }
        None if crashed_coordinator.is_some() => {
            warn!("No recovery triggered within {:?}", settings.observation_window)
        }
        None => {}
    }

    monitor.stop();
    monitor.join();

    Ok(ElectionResult::collect(&registry, &coordinator))
}

// Process that sends heartbeats and starts the recovery: the initiator while it
// stays alive, otherwise the lowest live process that is not about to crash.
fn supervising_process(
    registry: &ProcessRegistry,
    initiator_id: u64,
    crashed_coordinator: Option<u64>,
) -> Option<u64> {
    let survives = |id: u64| !registry.is_dead(id) && crashed_coordinator != Some(id);

    if survives(initiator_id) {
        return Some(initiator_id);
    }

    registry.live_processes().into_iter().find(|&id| survives(id))
}

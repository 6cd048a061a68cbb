use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};

use crate::common::{self, Worker};
use crate::coordinator::CoordinatorState;
use crate::election::{start_election, DelayScheduler, Election};
use crate::errors::{ConfigurationError, Result};
use crate::events::{ElectionEvent, EventReporter};
use crate::registry::ProcessRegistry;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct HeartbeatSettings {
    /// Process that sends the heartbeat checks.
    pub monitor_id: u64,
    /// Process that starts the re-election once the coordinator is found dead.
    pub recovery_initiator: u64,
}

impl HeartbeatSettings {
    pub fn new(process_id: u64) -> HeartbeatSettings {
        HeartbeatSettings {
            monitor_id: process_id,
            recovery_initiator: process_id,
        }
    }
}

/// Re-election triggered by a detected coordinator death.
#[derive(Clone, Debug)]
pub struct Recovery {
    pub dead_coordinator: u64,
    pub election: Election,
}

/// Running heartbeat monitor. It stops by itself after triggering one recovery.
#[derive(Debug)]
pub struct MonitorHandle {
    worker: Worker,
    recovery_rx: Receiver<Recovery>,
}

impl MonitorHandle {
    pub fn stop(&self) {
        self.worker.terminate();
    }

    pub fn join(self) {
        self.worker.join();
    }

    /// Delivers at most one recovery, then disconnects once the monitor stopped.
    pub fn recovery_rx(&self) -> &Receiver<Recovery> {
        &self.recovery_rx
    }

    pub fn wait_recovery(&self, timeout: Duration) -> Option<Recovery> {
        match self.recovery_rx.recv_timeout(timeout) {
            Ok(recovery) => Some(recovery),
            Err(RecvTimeoutError::Timeout) => None,
            Err(RecvTimeoutError::Disconnected) => {
                trace!("Heartbeat monitor stopped without recovery");
                None
            }
        }
    }
}

#[derive(Debug)]
pub struct HeartbeatMonitor;

impl HeartbeatMonitor {
    pub fn start<S: DelayScheduler>(
        registry: &ProcessRegistry,
        coordinator: &CoordinatorState,
        scheduler: Arc<S>,
        settings: HeartbeatSettings,
        reporter: EventReporter,
    ) -> Result<MonitorHandle> {
        if !registry.is_member(settings.monitor_id) {
            return Err(ConfigurationError::UnknownProcess(settings.monitor_id));
        }
        if !registry.is_member(settings.recovery_initiator) {
            return Err(ConfigurationError::InitiatorNotFound(settings.recovery_initiator));
        }

        let (recovery_tx, recovery_rx): (Sender<Recovery>, Receiver<Recovery>) =
            crossbeam_channel::bounded(1);

        let worker = common::run_worker(
            watch_coordinator,
            HeartbeatParams {
                registry: registry.clone(),
                coordinator: coordinator.clone(),
                scheduler,
                settings,
                reporter,
                recovery_tx,
            },
        );

        Ok(MonitorHandle {
            worker,
            recovery_rx,
        })
    }
}

struct HeartbeatParams<S: DelayScheduler> {
    registry: ProcessRegistry,
    coordinator: CoordinatorState,
    scheduler: Arc<S>,
    settings: HeartbeatSettings,
    reporter: EventReporter,
    recovery_tx: Sender<Recovery>,
}

enum CheckResult {
    Alive,
    Unknown,
    RecoveryTriggered,
}

fn watch_coordinator<S: DelayScheduler>(params: HeartbeatParams<S>, terminate_worker_rx: Receiver<()>) {
    let monitor_id = params.settings.monitor_id;
    info!("Process {}: heartbeat monitor started", monitor_id);

    loop {
        if !pause(&terminate_worker_rx, params.scheduler.heartbeat_delay()) {
            break;
        }

        match check_coordinator(&params) {
            CheckResult::RecoveryTriggered => break,
            CheckResult::Unknown => continue,
            CheckResult::Alive => {
                if !pause(&terminate_worker_rx, params.scheduler.check_interval()) {
                    break;
                }
            }
        }
    }

    info!("Process {}: heartbeat monitor stopped", monitor_id);
}

// False when termination was requested.
fn pause(terminate_worker_rx: &Receiver<()>, delay: Duration) -> bool {
    let timeout = crossbeam_channel::after(delay);
    select!(
        recv(terminate_worker_rx) -> res => {
            if res.is_err() {
                warn!("Heartbeat monitor handle dropped without stop");
            }
            false
        },
        recv(timeout) -> _ => true,
    )
}

fn check_coordinator<S: DelayScheduler>(params: &HeartbeatParams<S>) -> CheckResult {
    let monitor_id = params.settings.monitor_id;
    let coordinator_id = params.coordinator.read();
    let coordinator_dead = coordinator_id.map_or(false, |id| params.registry.is_dead(id));

    params.reporter.report(ElectionEvent::HeartbeatCheck {
        process_id: monitor_id,
        coordinator_id,
    });

    let coordinator_id = match coordinator_id {
        Some(id) => id,
        None => {
            if params.coordinator.has_been_set() {
                debug!("Process {}: coordinator cleared by a re-election, waiting", monitor_id);
            } else {
                trace!("Process {}: no coordinator elected yet, recovery suppressed", monitor_id);
            }
            return CheckResult::Unknown;
        }
    };

    if !coordinator_dead {
        return CheckResult::Alive;
    }

    params.reporter.report(ElectionEvent::CoordinatorDeathDetected {
        process_id: monitor_id,
        coordinator_id,
    });

    let election_result = start_election(
        &params.registry,
        &params.coordinator,
        params.scheduler.clone(),
        params.settings.recovery_initiator,
        params.reporter.clone(),
    );

    match election_result {
        Ok(election) => {
            let recovery = Recovery {
                dead_coordinator: coordinator_id,
                election,
            };
            if params.recovery_tx.send(recovery).is_err() {
                trace!("Recovery receiver is gone");
            }
        }
        Err(err) => error!("Recovery election failed to start: {}", err),
    }

    CheckResult::RecoveryTriggered
}

use std::sync::Arc;

use crossbeam_channel::Receiver;

use bully::{
    start_election, CoordinatorState, DelayScheduler, Election, ElectionEvent, ElectionOutcome,
    ElectionResult, EventReporter, HeartbeatMonitor, HeartbeatSettings, MonitorHandle,
    ProcessRegistry, ProcessSetConfiguration,
};

/// Validated process set with its coordinator cell and an event journal.
pub struct CaseCluster<S: DelayScheduler> {
    pub registry: ProcessRegistry,
    pub coordinator: CoordinatorState,
    pub initiator_id: u64,
    scheduler: Arc<S>,
    reporter: EventReporter,
    events_rx: Receiver<ElectionEvent>,
}

pub fn start_cluster<S: DelayScheduler>(
    process_ids: Vec<u64>,
    initiator_id: u64,
    dead_ids: Vec<u64>,
    scheduler: S,
) -> CaseCluster<S> {
    let registry = ProcessSetConfiguration::new(process_ids, initiator_id, dead_ids)
        .validate()
        .expect("valid configuration");
    let (events_tx, events_rx) = crossbeam_channel::unbounded();

    CaseCluster {
        registry,
        coordinator: CoordinatorState::new(),
        initiator_id,
        scheduler: Arc::new(scheduler),
        reporter: EventReporter::new(events_tx),
        events_rx,
    }
}

impl<S: DelayScheduler> CaseCluster<S> {
    pub fn start_election(&self) -> Election {
        start_election(
            &self.registry,
            &self.coordinator,
            self.scheduler.clone(),
            self.initiator_id,
            self.reporter.clone(),
        )
        .expect("election started")
    }

    pub fn elect(&self) -> ElectionOutcome {
        let outcome = self.start_election().wait_settled();
        info!("--Election outcome: {:?}", outcome);

        outcome
    }

    pub fn start_monitor(&self) -> MonitorHandle {
        HeartbeatMonitor::start(
            &self.registry,
            &self.coordinator,
            self.scheduler.clone(),
            HeartbeatSettings::new(self.initiator_id),
            self.reporter.clone(),
        )
        .expect("monitor started")
    }

    pub fn result(&self) -> ElectionResult {
        ElectionResult::collect(&self.registry, &self.coordinator)
    }

    /// Events reported since the previous call.
    pub fn drain_events(&self) -> Vec<ElectionEvent> {
        self.events_rx.try_iter().collect()
    }
}

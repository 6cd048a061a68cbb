use std::sync::Arc;
use std::time::Duration;

mod campaign;
mod group;

pub use group::CampaignGroup;

use crate::coordinator::CoordinatorState;
use crate::errors::{ConfigurationError, Result};
use crate::events::{ElectionEvent, EventReporter};
use crate::registry::ProcessRegistry;
use crate::result::ElectionOutcome;
use campaign::{launch_campaign, CampaignParams};

/// Source of the simulated delays. Randomized in a real run, fixed or zero in tests.
pub trait DelayScheduler: Send + Sync + 'static {
    /// Before a campaign branch starts probing.
    fn startup_delay(&self) -> Duration;
    /// Between an ELECTION message and the OK response.
    fn response_delay(&self) -> Duration;
    /// Jitter before each heartbeat check.
    fn heartbeat_delay(&self) -> Duration;
    /// Pause after a check that found the coordinator alive.
    fn check_interval(&self) -> Duration;
}

/// Handle to a running election: all branches spawned from the initiator.
#[derive(Clone, Debug)]
pub struct Election {
    initiator_id: u64,
    epoch: u64,
    group: CampaignGroup,
    coordinator: CoordinatorState,
}

impl Election {
    pub fn initiator_id(&self) -> u64 {
        self.initiator_id
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn is_settled(&self) -> bool {
        self.group.is_settled()
    }

    pub fn spawned_branches(&self) -> usize {
        self.group.spawned_branches()
    }

    /// Coordinator declared in this election's epoch. May be transient while
    /// branches are still running; `Unresolved` once a later election started.
    pub fn outcome(&self) -> ElectionOutcome {
        ElectionOutcome::from(self.coordinator.read_in(self.epoch))
    }

    /// Waits for every branch and returns the final coordinator.
    pub fn wait_settled(&self) -> ElectionOutcome {
        self.group.wait_settled();

        self.outcome()
    }

    pub fn wait_settled_timeout(&self, timeout: Duration) -> Option<ElectionOutcome> {
        if self.group.wait_settled_timeout(timeout) {
            Some(self.outcome())
        } else {
            None
        }
    }
}

/// Opens a new coordinator epoch and starts a Bully campaign from `initiator_id`.
/// A dead initiator opens the epoch but spawns nothing, leaving the election unresolved.
pub fn start_election<S: DelayScheduler>(
    registry: &ProcessRegistry,
    coordinator: &CoordinatorState,
    scheduler: Arc<S>,
    initiator_id: u64,
    reporter: EventReporter,
) -> Result<Election> {
    if !registry.is_member(initiator_id) {
        return Err(ConfigurationError::InitiatorNotFound(initiator_id));
    }

    let epoch = coordinator.begin_epoch();
    let group = CampaignGroup::new();

    if registry.is_dead(initiator_id) {
        warn!(
            "Process {} is dead and cannot initiate an election",
            initiator_id
        );
    } else {
        reporter.report(ElectionEvent::ElectionTriggered {
            initiator_id,
            epoch,
        });

        launch_campaign(
            CampaignParams {
                registry: registry.clone(),
                coordinator: coordinator.clone(),
                scheduler,
                reporter,
                group: group.clone(),
                epoch,
            },
            initiator_id,
        );
    }

    Ok(Election {
        initiator_id,
        epoch,
        group,
        coordinator: coordinator.clone(),
    })
}

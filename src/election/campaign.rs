use std::sync::Arc;

use super::group::CampaignGroup;
use super::DelayScheduler;
use crate::common::simulate_delay;
use crate::coordinator::CoordinatorState;
use crate::events::{ElectionEvent, EventReporter};
use crate::registry::ProcessRegistry;

/// Everything a campaign branch needs. Shared by all branches of one election.
pub(crate) struct CampaignParams<S: DelayScheduler> {
    pub registry: ProcessRegistry,
    pub coordinator: CoordinatorState,
    pub scheduler: Arc<S>,
    pub reporter: EventReporter,
    pub group: CampaignGroup,
    pub epoch: u64,
}

impl<S: DelayScheduler> Clone for CampaignParams<S> {
    fn clone(&self) -> Self {
        CampaignParams {
            registry: self.registry.clone(),
            coordinator: self.coordinator.clone(),
            scheduler: self.scheduler.clone(),
            reporter: self.reporter.clone(),
            group: self.group.clone(),
            epoch: self.epoch,
        }
    }
}

pub(crate) fn launch_campaign<S: DelayScheduler>(params: CampaignParams<S>, process_id: u64) {
    let group = params.group.clone();
    group.spawn(move || run_campaign(params, process_id));
}

/// One Bully round for `process_id`: send ELECTION to every higher live peer, hand the
/// election over to each responder, or declare itself coordinator when none answers.
fn run_campaign<S: DelayScheduler>(params: CampaignParams<S>, process_id: u64) {
    simulate_delay(params.scheduler.startup_delay());

    if params.registry.is_dead(process_id) {
        info!("Process {} crashed before campaigning", process_id);
        return;
    }

    let mut higher_responded = false;
    for peer_id in params.registry.higher_live_peers(process_id) {
        params.reporter.report(ElectionEvent::ElectionSent {
            from: process_id,
            to: peer_id,
        });

        simulate_delay(params.scheduler.response_delay());

        if params.registry.is_dead(peer_id) {
            info!(
                "Process {} did not respond to Process {}",
                peer_id, process_id
            );
            continue;
        }

        params.reporter.report(ElectionEvent::OkResponded {
            from: peer_id,
            to: process_id,
        });
        higher_responded = true;

        launch_campaign(params.clone(), peer_id);
    }

    if !higher_responded {
        let accepted = params.coordinator.try_advance_in(params.epoch, process_id);

        params.reporter.report(ElectionEvent::CoordinatorDeclared {
            process_id,
            accepted,
        });
    }

    trace!("Process {} campaign finished", process_id);
}

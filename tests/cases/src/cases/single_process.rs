use bully::{ElectionEvent, ElectionOutcome};

use crate::steps;

pub fn run() {
    let cluster = steps::cluster::start_cluster(vec![7], 7, Vec::new(), steps::immediate_scheduler());

    let election = cluster.start_election();
    assert_eq!(ElectionOutcome::Elected(7), election.wait_settled());
    assert_eq!(1, election.spawned_branches());

    let events = cluster.drain_events();
    assert!(events.contains(&ElectionEvent::CoordinatorDeclared {
        process_id: 7,
        accepted: true
    }));
    assert!(cluster.result().acknowledgments.is_empty());
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_single_process() {
        crate::cases::single_process::run()
    }
}

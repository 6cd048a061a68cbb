use bully::{ElectionEvent, ElectionOutcome};

use crate::steps;

pub fn run() {
    let cluster = steps::cluster::start_cluster(vec![1, 2, 3, 4, 5], 1, Vec::new(), steps::fast_randomized_scheduler());
    assert_eq!(ElectionOutcome::Elected(5), cluster.elect());
    cluster.drain_events();

    let monitor = cluster.start_monitor();
    cluster.registry.mark_dead(5).expect("member process");

    let recovery = monitor
        .wait_recovery(steps::recovery_timeout())
        .expect("recovery triggered");
    assert_eq!(5, recovery.dead_coordinator);
    assert_eq!(ElectionOutcome::Elected(4), recovery.election.wait_settled());

    // The monitor stops after its single recovery.
    assert!(monitor.wait_recovery(steps::recovery_timeout()).is_none());
    monitor.join();

    let events = cluster.drain_events();
    let detections = events
        .iter()
        .filter(|e| {
            **e == ElectionEvent::CoordinatorDeathDetected {
                process_id: 1,
                coordinator_id: 5,
            }
        })
        .count();
    assert_eq!(1, detections);

    let acknowledging: Vec<u64> = cluster
        .result()
        .acknowledgments
        .iter()
        .map(|ack| ack.process_id)
        .collect();
    assert_eq!(vec![1, 2, 3], acknowledging);
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_heartbeat_recovery() {
        crate::cases::heartbeat_recovery::run()
    }
}

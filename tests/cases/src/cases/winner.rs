use bully::{ElectionEvent, ElectionOutcome};

use crate::steps;

pub fn run() {
    let cluster = steps::cluster::start_cluster(vec![1, 2, 3, 4, 5], 1, vec![5], steps::immediate_scheduler());

    assert_eq!(ElectionOutcome::Elected(4), cluster.elect());

    let events = cluster.drain_events();
    assert!(events.contains(&ElectionEvent::ElectionSent { from: 1, to: 4 }));
    assert!(events.contains(&ElectionEvent::OkResponded { from: 4, to: 1 }));
    assert!(!events.iter().any(|e| match e {
        ElectionEvent::ElectionSent { to, .. } => *to == 5,
        _ => false,
    }));

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
    fn test_winner() {
        crate::cases::winner::run()
    }
}

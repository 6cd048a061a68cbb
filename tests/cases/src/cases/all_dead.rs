use bully::ElectionOutcome;

use crate::steps;

pub fn run() {
    let cluster = steps::cluster::start_cluster(vec![1, 2, 3], 1, vec![1, 2, 3], steps::immediate_scheduler());

    let election = cluster.start_election();
    assert_eq!(ElectionOutcome::Unresolved, election.wait_settled());
    assert_eq!(0, election.spawned_branches());
    assert_eq!(None, cluster.coordinator.read());

    let result = cluster.result();
    assert_eq!(ElectionOutcome::Unresolved, result.outcome);
    assert!(result.acknowledgments.is_empty());
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_all_dead() {
        crate::cases::all_dead::run()
    }
}

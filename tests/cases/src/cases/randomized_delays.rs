use bully::ElectionOutcome;

use crate::steps;

/// Jittered interleavings never change the winner.
pub fn run() {
    for _ in 0..5 {
        let cluster = steps::cluster::start_cluster(
            vec![3, 8, 12, 20, 31],
            3,
            vec![31],
            steps::fast_randomized_scheduler(),
        );

        let election = cluster.start_election();
        assert_eq!(ElectionOutcome::Elected(20), election.wait_settled());
        assert_eq!(8, election.spawned_branches());
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_randomized_delays() {
        crate::cases::randomized_delays::run()
    }
}

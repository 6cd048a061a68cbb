use rayon::prelude::*;

use bully::ElectionOutcome;

use crate::steps;

const PROCESS_IDS: [u64; 6] = [2, 3, 5, 7, 11, 13];

/// Every dead-set and every initiator of a six process set: the winner is the
/// highest live process, or unresolved when the initiator is dead.
pub fn run() {
    let dead_masks: Vec<u32> = (0..(1u32 << PROCESS_IDS.len())).collect();

    let failures: Vec<String> = dead_masks
        .into_par_iter()
        .flat_map(|mask| {
            PROCESS_IDS
                .iter()
                .filter_map(|&initiator_id| check_configuration(mask, initiator_id))
                .collect::<Vec<String>>()
        })
        .collect();

    for failure in &failures {
        error!("{}", failure);
    }
    assert!(failures.is_empty(), "{} configurations failed", failures.len());
}

fn check_configuration(dead_mask: u32, initiator_id: u64) -> Option<String> {
    let dead_ids: Vec<u64> = PROCESS_IDS
        .iter()
        .enumerate()
        .filter(|(i, _)| dead_mask & (1 << *i) != 0)
        .map(|(_, id)| *id)
        .collect();

    let expected = if dead_ids.contains(&initiator_id) {
        ElectionOutcome::Unresolved
    } else {
        let highest_live = PROCESS_IDS.iter().rev().find(|id| !dead_ids.contains(*id));
        ElectionOutcome::from(highest_live.cloned())
    };

    let cluster = steps::cluster::start_cluster(
        PROCESS_IDS.to_vec(),
        initiator_id,
        dead_ids.clone(),
        steps::immediate_scheduler(),
    );
    let outcome = cluster.elect();

    if outcome != expected {
        return Some(format!(
            "dead {:?}, initiator {}: expected {:?}, got {:?}",
            dead_ids, initiator_id, expected, outcome
        ));
    }

    None
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_dead_set_sweep() {
        crate::cases::dead_set_sweep::run()
    }
}

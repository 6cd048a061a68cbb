use bully_modules::{DelayRange, FixedDelayScheduler, RandomizedDelayScheduler};
use std::time::Duration;

pub mod cluster;

pub fn recovery_timeout() -> Duration {
    Duration::from_secs(5)
}

pub fn immediate_scheduler() -> FixedDelayScheduler {
    FixedDelayScheduler::immediate()
}

/// Same shape as the default jitter, scaled down to keep cases fast.
pub fn fast_randomized_scheduler() -> RandomizedDelayScheduler {
    RandomizedDelayScheduler {
        startup: DelayRange::new(1, 5),
        response: DelayRange::new(1, 4),
        heartbeat: DelayRange::new(1, 6),
        check_interval: Duration::from_millis(10),
    }
}

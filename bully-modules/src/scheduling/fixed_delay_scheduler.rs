use bully::DelayScheduler;
use std::time::Duration;

/// Deterministic delays: the same campaign delay for startup and responses,
/// the same heartbeat period for heartbeat checks and check pauses.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct FixedDelayScheduler {
    campaign_delay_ms: u64,
    heartbeat_delay_ms: u64,
}

impl FixedDelayScheduler {
    pub fn new(campaign_delay_ms: u64, heartbeat_delay_ms: u64) -> FixedDelayScheduler {
        FixedDelayScheduler {
            campaign_delay_ms,
            heartbeat_delay_ms,
        }
    }

    /// No campaign delays, 1 ms heartbeat period.
    pub fn immediate() -> FixedDelayScheduler {
        FixedDelayScheduler::new(0, 1)
    }
}

impl DelayScheduler for FixedDelayScheduler {
    fn startup_delay(&self) -> Duration {
        Duration::from_millis(self.campaign_delay_ms)
    }

    fn response_delay(&self) -> Duration {
        Duration::from_millis(self.campaign_delay_ms)
    }

    fn heartbeat_delay(&self) -> Duration {
        Duration::from_millis(self.heartbeat_delay_ms)
    }

    fn check_interval(&self) -> Duration {
        Duration::from_millis(self.heartbeat_delay_ms)
    }
}

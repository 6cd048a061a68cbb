use bully::DelayScheduler;
use rand::Rng;
use std::time::Duration;

/// Half-open millisecond range `[start_ms, stop_ms)`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct DelayRange {
    start_ms: u64,
    stop_ms: u64,
}

impl DelayRange {
    pub fn new(start_ms: u64, stop_ms: u64) -> DelayRange {
        if start_ms >= stop_ms {
            panic!(
                "Invalid params: start_ms : {}, stop_ms : {}",
                start_ms, stop_ms
            )
        }
        DelayRange { start_ms, stop_ms }
    }

    fn sample(&self) -> Duration {
        let mut rng = rand::thread_rng();

        Duration::from_millis(rng.gen_range(self.start_ms..self.stop_ms))
    }
}

/// Jittered delays of the simulated network.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct RandomizedDelayScheduler {
    pub startup: DelayRange,
    pub response: DelayRange,
    pub heartbeat: DelayRange,
    pub check_interval: Duration,
}

impl Default for RandomizedDelayScheduler {
    fn default() -> Self {
        RandomizedDelayScheduler {
            startup: DelayRange::new(100, 500),
            response: DelayRange::new(100, 400),
            heartbeat: DelayRange::new(100, 600),
            check_interval: Duration::from_millis(1000),
        }
    }
}

impl DelayScheduler for RandomizedDelayScheduler {
    fn startup_delay(&self) -> Duration {
        self.startup.sample()
    }

    fn response_delay(&self) -> Duration {
        self.response.sample()
    }

    fn heartbeat_delay(&self) -> Duration {
        let delay = self.heartbeat.sample();
        trace!("Next heartbeat in {:?}", delay);

        delay
    }

    fn check_interval(&self) -> Duration {
        self.check_interval
    }
}

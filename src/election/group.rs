use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};

use crate::common;

/// Tracks every campaign branch spawned for one election, including
/// transitively spawned ones, and signals when all of them have finished.
#[derive(Clone, Debug, Default)]
pub struct CampaignGroup {
    inner: Arc<CampaignGroupInternal>,
}

#[derive(Debug, Default)]
struct CampaignGroupInternal {
    counters: Mutex<BranchCounters>,
    settled: Condvar,
}

#[derive(Clone, Copy, Debug, Default)]
struct BranchCounters {
    running: usize,
    spawned: usize,
}

// Registered before the thread starts and released when the branch returns or panics.
struct BranchGuard {
    group: CampaignGroup,
}

impl Drop for BranchGuard {
    fn drop(&mut self) {
        let mut counters = self.group.inner.counters.lock();
        counters.running -= 1;
        if counters.running == 0 {
            self.group.inner.settled.notify_all();
        }
    }
}

impl CampaignGroup {
    pub fn new() -> CampaignGroup {
        CampaignGroup::default()
    }

    pub(crate) fn spawn<F>(&self, branch: F)
    where
        F: FnOnce() + Send + 'static,
    {
        {
            let mut counters = self.inner.counters.lock();
            counters.running += 1;
            counters.spawned += 1;
        }

        let guard = BranchGuard {
            group: self.clone(),
        };

        common::run_worker_thread(
            move |guard: BranchGuard| {
                branch();
                drop(guard);
            },
            guard,
        );
    }

    pub fn running_branches(&self) -> usize {
        self.inner.counters.lock().running
    }

    pub fn spawned_branches(&self) -> usize {
        self.inner.counters.lock().spawned
    }

    pub fn is_settled(&self) -> bool {
        self.running_branches() == 0
    }

    /// Blocks until no branch of this group is running.
    pub fn wait_settled(&self) {
        let mut counters = self.inner.counters.lock();
        while counters.running > 0 {
            self.inner.settled.wait(&mut counters);
        }
    }

    /// Returns false if branches are still running after `timeout`.
    pub fn wait_settled_timeout(&self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;

        let mut counters = self.inner.counters.lock();
        while counters.running > 0 {
            if self
                .inner
                .settled
                .wait_until(&mut counters, deadline)
                .timed_out()
            {
                return counters.running == 0;
            }
        }

        true
    }
}

use std::sync::Arc;

use parking_lot::Mutex;

/// Shared coordinator cell. Within an epoch the value only ever increases.
/// A new epoch (re-election) clears it; declarations from older epochs are dropped.
#[derive(Clone, Debug, Default)]
pub struct CoordinatorState {
    inner: Arc<Mutex<CoordinatorStateInternal>>,
}

#[derive(Clone, Copy, Debug, Default)]
struct CoordinatorStateInternal {
    coordinator_id: Option<u64>,
    epoch: u64,
    has_been_set: bool,
}

impl CoordinatorStateInternal {
    fn try_advance(&mut self, candidate: u64) -> bool {
        let advanced = match self.coordinator_id {
            None => true,
            Some(current) => candidate > current,
        };

        if advanced {
            self.coordinator_id = Some(candidate);
            self.has_been_set = true;
        }

        advanced
    }
}

impl CoordinatorState {
    pub fn new() -> CoordinatorState {
        CoordinatorState::default()
    }

    /// Sets the coordinator to `candidate` if unset or lower. Returns whether it took effect.
    pub fn try_advance(&self, candidate: u64) -> bool {
        self.inner.lock().try_advance(candidate)
    }

    /// Same as `try_advance`, ignored when `epoch` is no longer current.
    pub fn try_advance_in(&self, epoch: u64, candidate: u64) -> bool {
        let mut state = self.inner.lock();
        if state.epoch != epoch {
            trace!(
                "Stale declaration of Process {} dropped (epoch {} < {})",
                candidate,
                epoch,
                state.epoch
            );
            return false;
        }

        state.try_advance(candidate)
    }

    pub fn read(&self) -> Option<u64> {
        self.inner.lock().coordinator_id
    }

    /// Value of `epoch`, or None once a later epoch has started.
    pub fn read_in(&self, epoch: u64) -> Option<u64> {
        let state = self.inner.lock();
        if state.epoch != epoch {
            return None;
        }

        state.coordinator_id
    }

    pub fn epoch(&self) -> u64 {
        self.inner.lock().epoch
    }

    /// True once any coordinator was elected, even if the value was cleared since.
    pub fn has_been_set(&self) -> bool {
        self.inner.lock().has_been_set
    }

    /// Clears the coordinator and returns the new epoch.
    pub fn begin_epoch(&self) -> u64 {
        let mut state = self.inner.lock();
        state.epoch += 1;
        state.coordinator_id = None;

        state.epoch
    }
}

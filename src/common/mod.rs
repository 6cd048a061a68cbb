use std::thread;
use std::thread::JoinHandle;
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};

pub fn run_worker_thread<T: Send + 'static, F: FnOnce(T) + Send + 'static>(
    worker: F,
    params: T,
) -> JoinHandle<()> {
    thread::spawn(move || worker(params))
}

/// Long-running thread with a termination channel.
#[derive(Debug)]
pub struct Worker {
    pub join_handle: JoinHandle<()>,
    pub terminate_worker_tx: Sender<()>,
}

pub fn run_worker<T: Send + 'static, F: Fn(T, Receiver<()>) + Send + 'static>(
    worker: F,
    params: T,
) -> Worker {
    let (terminate_worker_tx, terminate_worker_rx): (Sender<()>, Receiver<()>) =
        crossbeam_channel::unbounded();

    let join_handle = thread::spawn(move || worker(params, terminate_worker_rx));

    Worker {
        join_handle,
        terminate_worker_tx,
    }
}

impl Worker {
    /// Sends the termination signal. A worker that already exited is not an error.
    pub fn terminate(&self) {
        if self.terminate_worker_tx.send(()).is_err() {
            trace!("Worker already stopped");
        }
    }

    pub fn join(self) {
        if self.join_handle.join().is_err() {
            error!("Worker panicked")
        }
    }
}

/// Simulated network or processing delay. Zero means no suspension.
pub fn simulate_delay(delay: Duration) {
    if delay > Duration::from_millis(0) {
        thread::sleep(delay);
    }
}

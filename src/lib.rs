#![warn(missing_debug_implementations, unsafe_code)]

#[macro_use]
extern crate log;
#[macro_use]
extern crate crossbeam_channel;

mod common;
mod configuration;
mod coordinator;
mod election;
mod errors;
mod events;
mod heartbeat;
mod registry;
mod result;
mod session;

pub use configuration::{ProcessSetConfiguration, MAX_PROCESSES};
pub use coordinator::CoordinatorState;
pub use election::{start_election, CampaignGroup, DelayScheduler, Election};
pub use errors::ConfigurationError;
pub use events::{ElectionEvent, EventReporter};
pub use heartbeat::{HeartbeatMonitor, HeartbeatSettings, MonitorHandle, Recovery};
pub use registry::ProcessRegistry;
pub use result::{Acknowledgment, ElectionOutcome, ElectionResult};
pub use session::{run_session, SessionSettings};

extern crate bully;
#[macro_use]
extern crate log;

mod scheduling;

pub use scheduling::fixed_delay_scheduler::FixedDelayScheduler;
pub use scheduling::randomized_delay_scheduler::{DelayRange, RandomizedDelayScheduler};

//! # Bully election test cases
//!
//! This subproject runs end-to-end election scenarios against the threaded core.

#[macro_use]
extern crate log;
pub mod cases;
mod steps;

pub use self::cases::winner;

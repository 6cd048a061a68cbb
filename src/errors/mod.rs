use std::error::Error;

use derive_more::Display;

/// Rejected process set configuration. Raised before any campaign is spawned.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum ConfigurationError {
    #[display(fmt = "Process set is empty")]
    EmptyProcessSet,
    #[display(fmt = "Process set too large: {} processes (max {})", _0, _1)]
    TooManyProcesses(usize, usize),
    #[display(
        fmt = "Process ids must be strictly ascending: {} is followed by {}",
        previous,
        next
    )]
    ProcessIdsNotAscending { previous: u64, next: u64 },
    #[display(fmt = "Initiator process {} is not in the process set", _0)]
    InitiatorNotFound(u64),
    #[display(fmt = "Dead process {} is not in the process set", _0)]
    UnknownDeadProcess(u64),
    #[display(fmt = "Process {} is not in the process set", _0)]
    UnknownProcess(u64),
}

impl Error for ConfigurationError {}

pub(crate) type Result<T> = std::result::Result<T, ConfigurationError>;

pub mod core;
pub mod scheduler;
pub mod sim;

pub use crate::core::{ProcessRecord, ProcessTable, Result, SchedEvent, SimError};
pub use scheduler::{Policy, Scheduler};
pub use sim::{Outcome, Report, Sim};

pub mod fcfs;
pub mod round_robin;

use std::{fmt, num::NonZeroU64};

use crate::core::{Observer, ProcessTable, SchedEvent, Ticks};
pub use fcfs::FcfsScheduler;
pub use round_robin::RoundRobinScheduler;

pub trait Scheduler {
    // Returns the makespan; leaves every record complete
    fn run(
        &mut self,
        table: &mut ProcessTable,
        events: &mut Vec<SchedEvent>,
        observer: &mut Observer,
    ) -> Ticks;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    Fcfs,
    RoundRobin { quantum: NonZeroU64 },
}

impl Policy {
    pub fn scheduler(self) -> Box<dyn Scheduler> {
        match self {
            Self::Fcfs => Box::new(FcfsScheduler),
            Self::RoundRobin { quantum } => Box::new(RoundRobinScheduler::new(quantum)),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fcfs => write!(f, "FCFS"),
            Self::RoundRobin { quantum } => write!(f, "RR({quantum})"),
        }
    }
}

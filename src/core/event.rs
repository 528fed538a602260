use crate::core::{Pid, Ticks};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedEvent {
    Dispatched {
        pid: Pid,
        at: Ticks,
        run_time: Ticks,
    },
    // Emitted at the clock value when the last tick of `pid` finished
    Completed {
        pid: Pid,
        at: Ticks,
    },
}

impl SchedEvent {
    pub fn at(&self) -> Ticks {
        match *self {
            Self::Dispatched { at, .. } | Self::Completed { at, .. } => at,
        }
    }
}

pub mod error;
pub mod event;
pub mod input;
pub mod observer;
pub mod state;

pub use error::{Result, SimError};
pub use event::SchedEvent;
pub use observer::Observer;
pub use state::{Pid, ProcessRecord, ProcessTable, Ticks};

pub mod driver;
pub mod report;
pub mod workload;

pub use driver::{Outcome, Sim};
pub use report::Report;
pub use workload::random_bursts;

use std::fmt;

use average::{Estimate, Mean};

use super::driver::Outcome;

pub struct Report<'a> {
    outcome: &'a Outcome,
}

impl<'a> Report<'a> {
    pub fn new(outcome: &'a Outcome) -> Self {
        Self { outcome }
    }

    pub fn average_wait(&self) -> f64 {
        self.outcome
            .table
            .records()
            .iter()
            .map(|r| r.wait as f64)
            .collect::<Mean>()
            .estimate()
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PID\tBurst\tBurst Left\tWait")?;
        for r in self.outcome.table.records() {
            writeln!(f, "{}\t{}\t{}\t\t{}", r.id, r.burst, r.burst_remaining, r.wait)?;
        }
        writeln!(f, "Total time: {}", self.outcome.total_time)?;
        write!(f, "Average wait time: {:.2}", self.average_wait())
    }
}

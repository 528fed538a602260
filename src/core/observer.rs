use log::trace;

use super::state::{ProcessTable, Ticks};

#[derive(Debug)]
pub struct Observer {
    step: u64,
    initial_work: Ticks,
}

impl Observer {
    pub fn new(table: &ProcessTable) -> Self {
        Self {
            step: 0,
            initial_work: table.remaining_work(),
        }
    }

    pub fn observe(&mut self, table: &ProcessTable, clock: Ticks) {
        self.step += 1;
        trace!(
            "step={} clock={} remaining={}",
            self.step,
            clock,
            table.remaining_work()
        );

        debug_assert_eq!(
            clock + table.remaining_work(),
            self.initial_work,
            "CPU time was lost or double counted at step {}",
            self.step
        );

        for record in table.records() {
            debug_assert!(
                record.burst_remaining <= record.burst,
                "P{} remaining burst grew past its original burst",
                record.id
            );
            debug_assert!(
                record.wait <= clock,
                "P{} waited {} ticks but only {clock} ticks elapsed",
                record.id,
                record.wait
            );
        }
    }

    pub fn steps(&self) -> u64 {
        self.step
    }
}

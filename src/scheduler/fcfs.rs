use log::debug;

use super::Scheduler;
use crate::core::{Observer, ProcessTable, SchedEvent, Ticks};

pub struct FcfsScheduler;

impl Scheduler for FcfsScheduler {
    fn run(
        &mut self,
        table: &mut ProcessTable,
        events: &mut Vec<SchedEvent>,
        observer: &mut Observer,
    ) -> Ticks {
        let mut clock: Ticks = 0;

        for pid in 0..table.len() {
            let record = table.record_mut(pid);
            // Zero-burst processes never run and keep a wait of 0
            if record.is_complete() {
                continue;
            }

            let run_time = record.burst_remaining;
            record.wait = clock;
            record.burst_remaining = 0;

            debug!("t={clock} run P{pid} for {run_time}");
            events.push(SchedEvent::Dispatched {
                pid,
                at: clock,
                run_time,
            });
            clock += run_time;
            events.push(SchedEvent::Completed { pid, at: clock });

            observer.observe(table, clock);
        }

        clock
    }
}

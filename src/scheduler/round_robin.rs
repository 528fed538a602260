use std::num::NonZeroU64;

use log::debug;

use super::Scheduler;
use crate::core::{Observer, Pid, ProcessTable, SchedEvent, Ticks};

#[derive(Debug)]
pub struct RoundRobinScheduler {
    quantum: NonZeroU64,
    // Last process to run; None until the first dispatch
    current: Option<Pid>,
}

impl RoundRobinScheduler {
    pub fn new(quantum: NonZeroU64) -> Self {
        Self {
            quantum,
            current: None,
        }
    }

    // One full circular scan starting after the last process to run
    pub fn select_next(&self, table: &ProcessTable) -> Option<Pid> {
        let len = table.len();
        let start = self.current.map_or(0, |pid| pid + 1);

        (0..len)
            .map(|offset| (start + offset) % len)
            .find(|&pid| !table.record(pid).is_complete())
    }

    pub fn step(
        &mut self,
        table: &mut ProcessTable,
        clock: Ticks,
        events: &mut Vec<SchedEvent>,
    ) -> Option<Ticks> {
        let pid = self.select_next(table)?;

        // Clamp before advancing: other processes are charged the full amount
        let run_time = table.record(pid).burst_remaining.min(self.quantum.get());
        debug!("t={clock} run P{pid} for {run_time}");
        events.push(SchedEvent::Dispatched {
            pid,
            at: clock,
            run_time,
        });

        table.advance(pid, run_time);
        self.current = Some(pid);

        if table.record(pid).is_complete() {
            events.push(SchedEvent::Completed {
                pid,
                at: clock + run_time,
            });
        }

        Some(run_time)
    }
}

impl Scheduler for RoundRobinScheduler {
    fn run(
        &mut self,
        table: &mut ProcessTable,
        events: &mut Vec<SchedEvent>,
        observer: &mut Observer,
    ) -> Ticks {
        let mut clock: Ticks = 0;

        while let Some(run_time) = self.step(table, clock, events) {
            clock += run_time;
            observer.observe(table, clock);
        }

        clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quantum(q: u64) -> NonZeroU64 {
        NonZeroU64::new(q).unwrap()
    }

    fn run(bursts: &[Ticks], q: u64) -> (ProcessTable, Ticks, Vec<SchedEvent>) {
        let mut table = ProcessTable::new(bursts).unwrap();
        let mut observer = Observer::new(&table);
        let mut events = Vec::new();
        let total = RoundRobinScheduler::new(quantum(q)).run(&mut table, &mut events, &mut observer);
        (table, total, events)
    }

    fn dispatches(events: &[SchedEvent]) -> Vec<(Pid, Ticks)> {
        events
            .iter()
            .filter_map(|e| match *e {
                SchedEvent::Dispatched { pid, run_time, .. } => Some((pid, run_time)),
                SchedEvent::Completed { .. } => None,
            })
            .collect()
    }

    #[test]
    fn first_scan_starts_at_position_zero() {
        let table = ProcessTable::new(&[5, 8, 2]).unwrap();
        let rr = RoundRobinScheduler::new(quantum(4));
        assert_eq!(rr.select_next(&table), Some(0));
    }

    #[test]
    fn select_next_skips_completed_and_wraps() {
        let table = ProcessTable::new(&[3, 0, 0]).unwrap();
        let mut rr = RoundRobinScheduler::new(quantum(1));
        rr.current = Some(0);
        assert_eq!(rr.select_next(&table), Some(0));
        rr.current = Some(2);
        assert_eq!(rr.select_next(&table), Some(0));
    }

    #[test]
    fn select_next_signals_termination() {
        let table = ProcessTable::new(&[0, 0]).unwrap();
        assert_eq!(RoundRobinScheduler::new(quantum(2)).select_next(&table), None);
    }

    #[test]
    fn golden_trace() {
        let (table, total, events) = run(&[5, 8, 2], 4);
        assert_eq!(total, 15);
        assert_eq!(
            dispatches(&events),
            vec![(0, 4), (1, 4), (2, 2), (0, 1), (1, 4)]
        );
        let waits: Vec<_> = table.records().iter().map(|r| r.wait).collect();
        assert_eq!(waits, vec![6, 7, 8]);
        assert!(events.contains(&SchedEvent::Completed { pid: 2, at: 10 }));
        assert!(events.contains(&SchedEvent::Completed { pid: 0, at: 11 }));
        assert!(events.contains(&SchedEvent::Completed { pid: 1, at: 15 }));
    }

    #[test]
    fn single_process_reselects_itself() {
        let (table, total, events) = run(&[7], 3);
        assert_eq!(total, 7);
        assert_eq!(table.record(0).wait, 0);
        assert_eq!(dispatches(&events), vec![(0, 3), (0, 3), (0, 1)]);
    }

    #[test]
    fn all_zero_bursts() {
        let (table, total, events) = run(&[0, 0, 0], 4);
        assert_eq!(total, 0);
        assert_eq!(table.total_wait(), 0);
        assert!(events.is_empty());
    }

    #[test]
    fn large_quantum_matches_fcfs_order() {
        let (table, total, events) = run(&[5, 8, 2], 8);
        assert_eq!(total, 15);
        assert_eq!(dispatches(&events), vec![(0, 5), (1, 8), (2, 2)]);
        let waits: Vec<_> = table.records().iter().map(|r| r.wait).collect();
        assert_eq!(waits, vec![0, 5, 13]);
    }
}

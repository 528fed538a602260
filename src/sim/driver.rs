use log::info;

use crate::{
    core::{Observer, ProcessTable, Result, SchedEvent, Ticks},
    scheduler::Policy,
};

// Single use: build a new Sim per policy
#[derive(Debug)]
pub struct Sim {
    table: ProcessTable,
    policy: Policy,
}

#[derive(Debug, Clone)]
pub struct Outcome {
    pub policy: Policy,
    pub table: ProcessTable,
    pub total_time: Ticks,
    pub events: Vec<SchedEvent>,
    pub steps: u64,
}

impl Sim {
    pub fn new(bursts: &[Ticks], policy: Policy) -> Result<Self> {
        Ok(Self {
            table: ProcessTable::new(bursts)?,
            policy,
        })
    }

    pub fn table(&self) -> &ProcessTable {
        &self.table
    }

    pub fn run(mut self) -> Outcome {
        let mut scheduler = self.policy.scheduler();
        let mut observer = Observer::new(&self.table);
        let mut events = Vec::new();

        let total_time = scheduler.run(&mut self.table, &mut events, &mut observer);
        debug_assert!(self.table.all_complete(), "run returned with work left");

        info!(
            "{} finished {} processes in {} ticks ({} steps)",
            self.policy,
            self.table.len(),
            total_time,
            observer.steps()
        );

        Outcome {
            policy: self.policy,
            table: self.table,
            total_time,
            events,
            steps: observer.steps(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU64;

    use super::*;
    use crate::core::SimError;

    #[test]
    fn rejects_overflowing_workload() {
        let err = Sim::new(&[u64::MAX, 1], Policy::Fcfs).unwrap_err();
        assert!(matches!(err, SimError::InvalidInput(_)));
    }

    #[test]
    fn rejects_empty_workload() {
        assert!(Sim::new(&[], Policy::Fcfs).is_err());
    }

    #[test]
    fn fresh_sim_per_policy() {
        let bursts = [5, 8, 2];
        let fcfs = Sim::new(&bursts, Policy::Fcfs).unwrap().run();
        let rr = Sim::new(
            &bursts,
            Policy::RoundRobin {
                quantum: NonZeroU64::new(4).unwrap(),
            },
        )
        .unwrap()
        .run();

        assert_eq!(fcfs.total_time, 15);
        assert_eq!(rr.total_time, 15);
        assert_eq!(fcfs.steps, 3);
        assert_eq!(rr.steps, 5);
        assert_eq!(rr.table.total_wait(), 21);
    }
}

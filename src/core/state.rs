use super::error::{Result, SimError};

// Index into ProcessTable::records
pub type Pid = usize;
pub type Ticks = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRecord {
    pub id: Pid,
    pub burst: Ticks,
    pub burst_remaining: Ticks,
    pub wait: Ticks,
}

impl ProcessRecord {
    pub fn is_complete(&self) -> bool {
        self.burst_remaining == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessTable {
    records: Vec<ProcessRecord>,
}

impl ProcessTable {
    pub fn new(bursts: &[Ticks]) -> Result<Self> {
        if bursts.is_empty() {
            return Err(SimError::InvalidInput(
                "at least one burst time is required".to_owned(),
            ));
        }

        // The clock must be able to hold the whole makespan
        bursts
            .iter()
            .try_fold(0 as Ticks, |acc, &burst| acc.checked_add(burst))
            .ok_or_else(|| SimError::InvalidInput("total burst time overflows".to_owned()))?;

        let mut records = Vec::new();
        records
            .try_reserve_exact(bursts.len())
            .map_err(|_| SimError::AllocationFailure {
                requested: bursts.len(),
            })?;

        for (id, &burst) in bursts.iter().enumerate() {
            debug_assert_eq!(records.len(), id, "Pid must match Vec index");
            records.push(ProcessRecord {
                id,
                burst,
                burst_remaining: burst,
                wait: 0,
            });
        }

        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[ProcessRecord] {
        &self.records
    }

    pub fn record(&self, pid: Pid) -> &ProcessRecord {
        &self.records[pid]
    }

    pub(crate) fn record_mut(&mut self, pid: Pid) -> &mut ProcessRecord {
        &mut self.records[pid]
    }

    pub fn all_complete(&self) -> bool {
        self.records.iter().all(ProcessRecord::is_complete)
    }

    pub fn remaining_work(&self) -> Ticks {
        self.records.iter().map(|r| r.burst_remaining).sum()
    }

    pub fn total_wait(&self) -> Ticks {
        self.records
            .iter()
            .fold(0, |acc: Ticks, r| acc.saturating_add(r.wait))
    }

    // Callers clamp `amount` to the remaining burst; others are charged all of it
    pub fn advance(&mut self, pid: Pid, amount: Ticks) {
        if self.records[pid].is_complete() {
            return;
        }

        let running = &mut self.records[pid];
        running.burst_remaining = running.burst_remaining.saturating_sub(amount);

        for (pos, record) in self.records.iter_mut().enumerate() {
            if pos != pid && !record.is_complete() {
                record.wait = record.wait.saturating_add(amount);
            }
        }
    }
}

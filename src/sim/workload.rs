use rand::prelude::*;

use crate::core::Ticks;

pub fn random_bursts(count: usize, max_burst: Ticks, seed: u64) -> Vec<Ticks> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| rng.random_range(0..=max_burst)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_workload() {
        assert_eq!(random_bursts(20, 9, 7), random_bursts(20, 9, 7));
    }

    #[test]
    fn bursts_stay_in_range() {
        let bursts = random_bursts(200, 5, 1);
        assert_eq!(bursts.len(), 200);
        assert!(bursts.iter().all(|&b| b <= 5));
    }
}

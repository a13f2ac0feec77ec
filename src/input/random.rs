//! Seeded pseudo-random deployment stream
//!
//! The same seed and parameters always produce the same stream. The clock
//! ticks forward with probability `1 / arrival_rate` before each record, so
//! `arrival_rate` is the mean number of deployments per timestamp.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::battle::deployment::RawDeployment;
use crate::core::config::GeneratorConfig;
use crate::core::error::Result;
use crate::core::types::{Side, Timestamp};
use crate::input::header::RandomParams;

pub struct RandomDeployments {
    rng: ChaCha8Rng,
    remaining: u32,
    timestamp: Timestamp,
    arrival_rate: u32,
    num_generals: u32,
    num_planets: u32,
    bounds: GeneratorConfig,
}

impl RandomDeployments {
    pub fn new(params: RandomParams, num_generals: u32, num_planets: u32, bounds: GeneratorConfig) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(params.seed),
            remaining: params.num_deployments,
            timestamp: 0,
            arrival_rate: params.arrival_rate.max(1),
            num_generals,
            num_planets,
            bounds,
        }
    }

    fn generate(&mut self) -> RawDeployment {
        if self.rng.gen_ratio(1, self.arrival_rate) {
            self.timestamp += 1;
        }
        let side = if self.rng.gen_bool(0.5) { Side::Jedi } else { Side::Sith };
        RawDeployment {
            timestamp: self.timestamp,
            side,
            general: self.rng.gen_range(0..self.num_generals.max(1)) as i64,
            planet: self.rng.gen_range(0..self.num_planets.max(1)) as i64,
            force: self.rng.gen_range(1..=self.bounds.max_force.max(1)) as i64,
            troops: self.rng.gen_range(1..=self.bounds.max_troops.max(1)) as i64,
        }
    }
}

impl Iterator for RandomDeployments {
    type Item = Result<RawDeployment>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(Ok(self.generate()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(seed: u64, count: u32) -> Vec<RawDeployment> {
        let params = RandomParams { seed, num_deployments: count, arrival_rate: 3 };
        RandomDeployments::new(params, 4, 2, GeneratorConfig::default())
            .map(|r| r.unwrap())
            .collect()
    }

    #[test]
    fn test_same_seed_same_stream() {
        assert_eq!(stream(42, 200), stream(42, 200));
        assert_ne!(stream(42, 200), stream(43, 200));
    }

    #[test]
    fn test_exact_count() {
        assert_eq!(stream(1, 0).len(), 0);
        assert_eq!(stream(1, 57).len(), 57);
    }

    #[test]
    fn test_records_in_range_and_ordered() {
        let records = stream(7, 500);
        let bounds = GeneratorConfig::default();
        for pair in records.windows(2) {
            assert!(pair[0].timestamp <= pair[1].timestamp);
        }
        for r in &records {
            assert!((0..4).contains(&r.general));
            assert!((0..2).contains(&r.planet));
            assert!(r.force >= 1 && r.force <= bounds.max_force as i64);
            assert!(r.troops >= 1 && r.troops <= bounds.max_troops as i64);
        }
        assert!(records.iter().any(|r| r.side == Side::Jedi));
        assert!(records.iter().any(|r| r.side == Side::Sith));
    }
}

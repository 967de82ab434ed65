//! Seeds for the decorative characters.
//!
//! A seed is an 8-digit number drawn fresh for every card on every render, so
//! the same contributor usually gets a different character each time. Tests
//! and the `--seed` flag swap in [`FixedSeeds`] to make output reproducible.

use std::collections::hash_map::RandomState;
use std::fmt;
use std::hash::{BuildHasher, Hasher};

pub const SEED_MIN: u32 = 10_000_000;
pub const SEED_MAX: u32 = 99_999_999;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seed(u32);

impl Seed {
    /// Returns `None` unless `value` has exactly eight digits.
    pub fn new(value: u32) -> Option<Self> {
        (SEED_MIN..=SEED_MAX).contains(&value).then_some(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub trait SeedSource {
    fn next_seed(&mut self) -> Seed;
}

/// Non-cryptographic randomness from the std hasher's per-instance keys.
#[derive(Debug, Default)]
pub struct RandomSeeds;

impl SeedSource for RandomSeeds {
    fn next_seed(&mut self) -> Seed {
        let raw = RandomState::new().build_hasher().finish();
        let span = u64::from(SEED_MAX - SEED_MIN + 1);
        Seed(SEED_MIN + (raw % span) as u32)
    }
}

/// Hands out the given seeds in order, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct FixedSeeds {
    seeds: Vec<Seed>,
    next: usize,
}

impl FixedSeeds {
    pub fn new(seeds: Vec<Seed>) -> Self {
        assert!(!seeds.is_empty(), "FixedSeeds needs at least one seed");
        Self { seeds, next: 0 }
    }

    pub fn constant(seed: Seed) -> Self {
        Self::new(vec![seed])
    }
}

impl SeedSource for FixedSeeds {
    fn next_seed(&mut self) -> Seed {
        let seed = self.seeds[self.next % self.seeds.len()];
        self.next = self.next.wrapping_add(1);
        seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_seeds_stay_in_range() {
        let mut seeds = RandomSeeds;
        for _ in 0..10_000 {
            let s = seeds.next_seed().get();
            assert!((SEED_MIN..=SEED_MAX).contains(&s), "{s} out of range");
            assert_eq!(s.to_string().len(), 8);
        }
    }

    #[test]
    fn seed_rejects_wrong_width() {
        assert!(Seed::new(9_999_999).is_none());
        assert!(Seed::new(100_000_000).is_none());
        assert_eq!(Seed::new(SEED_MIN).map(Seed::get), Some(SEED_MIN));
        assert_eq!(Seed::new(SEED_MAX).map(Seed::get), Some(SEED_MAX));
    }

    #[test]
    fn fixed_seeds_cycle() {
        let a = Seed::new(11_111_111).unwrap();
        let b = Seed::new(22_222_222).unwrap();
        let mut seeds = FixedSeeds::new(vec![a, b]);
        assert_eq!(seeds.next_seed(), a);
        assert_eq!(seeds.next_seed(), b);
        assert_eq!(seeds.next_seed(), a);
    }
}

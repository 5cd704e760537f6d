use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wordsearch_core::RandomSource;

/// `rand`-backed random source; seeded when the player asks for a fixed puzzle
pub struct RandSource(StdRng);

impl RandSource {
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(StdRng::seed_from_u64(seed)),
            None => Self(StdRng::from_entropy()),
        }
    }
}

impl RandomSource for RandSource {
    fn next_in_range(&mut self, min: usize, max: usize) -> usize {
        self.0.gen_range(min..=max)
    }
}

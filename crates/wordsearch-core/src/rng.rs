//! Random number sources for puzzle generation

/// A source of uniform random integers.
///
/// The generator only ever asks for values in an inclusive range, so any
/// implementation (seeded, scripted, or backed by an external RNG) can be
/// swapped in to make puzzles reproducible.
pub trait RandomSource {
    /// Uniform integer in `[min, max]` (inclusive)
    fn next_in_range(&mut self, min: usize, max: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_in_range(&mut self, min: usize, max: usize) -> usize {
        (**self).next_in_range(min, max)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_in_range(&mut self, min: usize, max: usize) -> usize {
        (**self).next_in_range(min, max)
    }
}

/// Simple PRNG that works in the browser as well as natively
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u64,
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new()
    }
}

impl SimpleRng {
    /// Seed from the platform entropy source
    pub fn new() -> Self {
        // getrandom uses crypto.getRandomValues on wasm32
        let mut seed_bytes = [0u8; 8];
        if getrandom::getrandom(&mut seed_bytes).is_err() {
            static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);
            let counter = COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            seed_bytes = counter.to_le_bytes();
        }
        Self::with_seed(u64::from_le_bytes(seed_bytes))
    }

    /// Create a generator with a fixed seed for reproducible puzzles
    pub fn with_seed(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(1),
        }
    }

    fn next_u64(&mut self) -> u64 {
        // PCG-like step
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let xorshifted = (((self.state >> 18) ^ self.state) >> 27) as u32;
        let rot = (self.state >> 59) as u32;
        xorshifted.rotate_right(rot) as u64
    }
}

impl RandomSource for SimpleRng {
    fn next_in_range(&mut self, min: usize, max: usize) -> usize {
        debug_assert!(min <= max, "empty range {}..={}", min, max);
        let span = max.saturating_sub(min) as u64 + 1;
        min + (self.next_u64() % span) as usize
    }
}

/// Replays a fixed list of values, clamped into each requested range
#[cfg(test)]
pub(crate) struct ScriptedRng {
    values: Vec<usize>,
    next: usize,
}

#[cfg(test)]
impl ScriptedRng {
    pub(crate) fn new(values: Vec<usize>) -> Self {
        Self { values, next: 0 }
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRng {
    fn next_in_range(&mut self, min: usize, max: usize) -> usize {
        let value = if self.values.is_empty() {
            min
        } else {
            self.values[self.next % self.values.len()]
        };
        self.next += 1;
        value.clamp(min, max)
    }
}

//! Seeded random sources for maze carving
//!
//! The generator never reaches for a global RNG. It asks a [`ChoiceSource`]
//! for an index, so tests and replays can pin the exact maze with a seed.
//!
//! [`SimpleLCG`] is a Park-Miller "MINSTD" generator:
//! - Multiplier (a): 48271
//! - Modulus (m): 2^31 - 1 = 2147483647
//!
//! Reference: https://en.wikipedia.org/wiki/Lehmer_random_number_generator

/// Something that can pick a uniformly random index
pub trait ChoiceSource {
    /// Pick an index in `0..len`. `len` is never zero.
    fn choice_index(&mut self, len: usize) -> usize;
}

impl<T: ChoiceSource + ?Sized> ChoiceSource for &mut T {
    fn choice_index(&mut self, len: usize) -> usize {
        (**self).choice_index(len)
    }
}

const MODULUS: u64 = 2147483647; // 2^31 - 1
const MULTIPLIER: u64 = 48271;

/// Park-Miller Linear Congruential Generator
///
/// Same seed always produces the same sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimpleLCG {
    state: u32,
}

impl SimpleLCG {
    /// Create a new LCG with the given seed
    ///
    /// The state must be non-zero and below the modulus, so the seed is
    /// reduced mod 2^31 - 1 and a zero result is replaced with 1.
    pub fn new(seed: u32) -> Self {
        let state = (u64::from(seed) % MODULUS) as u32;
        Self {
            state: if state == 0 { 1 } else { state },
        }
    }

    fn advance(&mut self) -> u32 {
        // u64 keeps the multiplication from overflowing
        self.state = ((u64::from(self.state) * MULTIPLIER) % MODULUS) as u32;
        self.state
    }
}

impl ChoiceSource for SimpleLCG {
    fn choice_index(&mut self, len: usize) -> usize {
        let scaled = (u64::from(self.advance()) * len as u64) / MODULUS;
        scaled as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = SimpleLCG::new(12345);
        let mut rng2 = SimpleLCG::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.choice_index(1000), rng2.choice_index(1000));
        }
    }

    #[test]
    fn test_known_sequence() {
        // 1 * 48271, then 48271 * 48271 mod (2^31 - 1)
        let mut rng = SimpleLCG::new(1);
        assert_eq!(rng.advance(), 48271);
        assert_eq!(rng.advance(), 182605794);
    }

    #[test]
    fn test_seed_zero_and_modulus_are_not_degenerate() {
        assert_eq!(SimpleLCG::new(0), SimpleLCG::new(1));
        // 2^31 - 1 reduces to zero, which would lock the generator at zero
        let mut rng = SimpleLCG::new(2147483647);
        assert_ne!(rng.advance(), 0);
    }

    #[test]
    fn test_choice_index_range() {
        let mut rng = SimpleLCG::new(54321);

        for len in 1..10 {
            for _ in 0..200 {
                assert!(rng.choice_index(len) < len);
            }
        }
    }

    #[test]
    fn test_choice_index_hits_every_slot() {
        let mut rng = SimpleLCG::new(2918957128);
        let mut seen = [false; 4];
        for _ in 0..200 {
            seen[rng.choice_index(4)] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_mut_ref_is_a_source() {
        fn pick(mut source: impl ChoiceSource) -> usize {
            source.choice_index(3)
        }

        let mut rng = SimpleLCG::new(7);
        let mut copy = rng.clone();
        assert_eq!(pick(&mut rng), copy.choice_index(3));
    }
}

//! Seeded pseudo-random number generator
//!
//! Deterministic PRNG behind the opponent's draws. The embedding host
//! supplies the seed (the browser frontend passes `crypto.getRandomValues`
//! bytes), so a session's opponent sequence is replayable from its seed.
//! Uses a simple but effective xorshift algorithm.

/// Session random number generator
///
/// Deterministic: same seed = same sequence
#[derive(Clone, Debug)]
pub struct SessionRng {
    state: u64,
}

impl SessionRng {
    /// Create a new RNG from a 32-byte session seed
    pub fn new(seed: &[u8; 32]) -> Self {
        // Fold seed bytes into the initial state
        let mut state = 0u64;
        for (i, chunk) in seed.chunks(8).enumerate() {
            let mut bytes = [0u8; 8];
            bytes[..chunk.len()].copy_from_slice(chunk);
            state ^= u64::from_le_bytes(bytes).rotate_left(i as u32 * 16);
        }

        // xorshift has a fixed point at zero; an all-zero seed must not land there
        if state == 0 {
            state = 0x9e3779b97f4a7c15;
        }

        // Warm up the generator
        let mut rng = Self { state };
        for _ in 0..8 {
            rng.next_u64();
        }

        rng
    }

    /// Generate next u64
    pub fn next_u64(&mut self) -> u64 {
        // xorshift64*
        self.state ^= self.state >> 12;
        self.state ^= self.state << 25;
        self.state ^= self.state >> 27;
        self.state.wrapping_mul(0x2545f4914f6cdd1d)
    }

    /// Generate a value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        ((self.next_u64() >> 32) as u32) % max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let seed = [42u8; 32];
        let mut r1 = SessionRng::new(&seed);
        let mut r2 = SessionRng::new(&seed);

        for _ in 0..100 {
            assert_eq!(r1.next_u64(), r2.next_u64());
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = SessionRng::new(&[1u8; 32]);
        let mut rng2 = SessionRng::new(&[2u8; 32]);

        let vals1: Vec<_> = (0..10).map(|_| rng1.next_u64()).collect();
        let vals2: Vec<_> = (0..10).map(|_| rng2.next_u64()).collect();

        assert_ne!(vals1, vals2);
    }

    #[test]
    fn test_zero_seed_still_generates() {
        let mut rng = SessionRng::new(&[0u8; 32]);

        let vals: Vec<_> = (0..10).map(|_| rng.next_u64()).collect();
        assert!(vals.iter().any(|v| *v != 0), "all-zero seed must not produce a stuck stream");
        assert_ne!(vals[0], vals[1]);
    }

    #[test]
    fn test_next_range() {
        let mut rng = SessionRng::new(&[42u8; 32]);

        for max in [1, 3, 10, 1000].iter() {
            for _ in 0..100 {
                let val = rng.next_range(*max);
                assert!(val < *max, "next_range({}) returned {}", max, val);
            }
        }

        // Edge case: max = 0
        assert_eq!(rng.next_range(0), 0);
    }

    #[test]
    fn test_range_covers_all_values() {
        let mut rng = SessionRng::new(&[7u8; 32]);
        let mut counts = [0u32; 3];

        for _ in 0..3000 {
            counts[rng.next_range(3) as usize] += 1;
        }

        for (i, count) in counts.iter().enumerate() {
            assert!(*count > 800, "value {} drawn only {} times in 3000", i, count);
        }
    }
}

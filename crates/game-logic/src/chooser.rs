//! Opponent move selection

use crate::moves::Move;
use crate::random::SessionRng;

/// Source of opponent moves.
///
/// Each call is an independent draw; implementations keep no memory of what
/// they handed out before. Tests substitute scripted implementations.
pub trait Chooser {
    fn choose(&mut self) -> Move;
}

/// Uniform draw over the move catalog
#[derive(Clone, Debug)]
pub struct RandomChooser {
    rng: SessionRng,
}

impl RandomChooser {
    /// Create a chooser from a 32-byte session seed
    pub fn new(seed: &[u8; 32]) -> Self {
        Self { rng: SessionRng::new(seed) }
    }
}

impl Chooser for RandomChooser {
    fn choose(&mut self) -> Move {
        let idx = self.rng.next_range(Move::ALL.len() as u32);
        Move::ALL[idx as usize]
    }
}

use rand::Rng;

use crate::constants::game;

/// Source of the two random draws made while spawning pipes.
pub trait Dice {
    /// Share of the board height, in tenths, taken by the top pipe of a new pair.
    fn pipe_height_tenths(&mut self) -> i32;

    /// Share of the board width, in tenths, the leading pipe has to fall below before the next pair spawns.
    fn pipe_spacing_tenths(&mut self) -> i32;
}

impl<R: Rng> Dice for R {
    fn pipe_height_tenths(&mut self) -> i32 {
        self.gen_range(game::PIPE_HEIGHT_TENTHS)
    }

    fn pipe_spacing_tenths(&mut self) -> i32 {
        self.gen_range(game::PIPE_SPACING_TENTHS)
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn test_rng_draws_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            assert!(game::PIPE_HEIGHT_TENTHS.contains(&rng.pipe_height_tenths()));
            assert!(game::PIPE_SPACING_TENTHS.contains(&rng.pipe_spacing_tenths()));
        }
    }

    #[test]
    fn test_rng_hits_every_value() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut heights = [false; 8];
        let mut spacings = [false; 9];
        for _ in 0..1000 {
            heights[rng.pipe_height_tenths() as usize] = true;
            spacings[rng.pipe_spacing_tenths() as usize] = true;
        }
        assert!(heights[1..=7].iter().all(|hit| *hit));
        assert!(spacings[6..=8].iter().all(|hit| *hit));
    }
}

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded randomness for one play session. Logging the seed is enough to
/// reproduce every coin flip of that session.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }

    pub fn random_bool(&mut self) -> bool {
        self.rng.random()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SessionRng::new(42);
        let mut b = SessionRng::new(42);
        for _ in 0..32 {
            assert_eq!(a.random_bool(), b.random_bool());
        }
        assert_eq!(a.seed(), 42);
    }

    #[test]
    fn test_coin_produces_both_sides() {
        let mut rng = SessionRng::new(7);
        let flips: Vec<bool> = (0..64).map(|_| rng.random_bool()).collect();
        assert!(flips.contains(&true));
        assert!(flips.contains(&false));
    }
}

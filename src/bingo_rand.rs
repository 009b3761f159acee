use rand::{rngs::StdRng, seq::index, RngCore, SeedableRng};

/// RandMode controls how labels are drawn.
/// May be predictable for testing or truly random for gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RandMode {
    Predictable,
    RandomUniform,
}

pub struct BingoRand {
    rng: Box<dyn RngCore>,
    rand_mode: RandMode,
}

impl BingoRand {
    pub fn new(rm: RandMode) -> BingoRand {
        BingoRand {
            rng: Box::new(rand::thread_rng()),
            rand_mode: rm,
        }
    }

    pub fn new_uniform() -> BingoRand {
        BingoRand::new(RandMode::RandomUniform)
    }

    pub fn new_predictable(seed: u64) -> BingoRand {
        BingoRand {
            rng: Box::new(StdRng::seed_from_u64(seed)),
            rand_mode: RandMode::Predictable,
        }
    }

    /// Seeded generator when a seed is given, thread-local entropy otherwise
    pub fn from_seed(seed: Option<u64>) -> BingoRand {
        match seed {
            Some(seed) => BingoRand::new_predictable(seed),
            None => BingoRand::new_uniform(),
        }
    }

    pub fn mode(&self) -> RandMode {
        self.rand_mode
    }

    /// Pick `amount` distinct indices out of `0..length`, uniformly, in random order.
    ///
    /// Callers must ensure `amount <= length`.
    pub fn sample_indices(&mut self, length: usize, amount: usize) -> Vec<usize> {
        index::sample(&mut self.rng, length, amount).into_vec()
    }
}

use rand::Rng;

const MULTIPLIER_A: i64 = 1103515245;
const INCREMENT_C: i64 = 12345;
const DEFAULT_SEED: u32 = 3819201;

/// A source of random numbers for the random mover.
pub trait RandomGenerator {
    /// Returns the next raw number of the sequence.
    fn next(&mut self) -> i32;

    /// Returns a number in `from..to`. `to` must be greater than `from`.
    fn next_range(&mut self, from: i32, to: i32) -> i32;

    /// Picks one element uniformly, or `None` for an empty slice.
    fn choose<'a, K>(&mut self, items: &'a [K]) -> Option<&'a K> {
        if items.is_empty() {
            return None;
        }
        items.get(self.next_range(0, items.len() as i32) as usize)
    }
}

/// Draws from the thread-local generator of `rand`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardRandomGenerator;

impl RandomGenerator for StandardRandomGenerator {
    fn next(&mut self) -> i32 {
        rand::random()
    }

    fn next_range(&mut self, from: i32, to: i32) -> i32 {
        rand::rng().random_range(from..to)
    }
}

/// A seeded linear congruential generator, for reproducible games.
#[derive(Debug, Clone)]
pub struct CustomNumberGenerator {
    seed: i64,
}

impl Default for CustomNumberGenerator {
    fn default() -> Self {
        CustomNumberGenerator::new(DEFAULT_SEED)
    }
}

impl RandomGenerator for CustomNumberGenerator {
    fn next(&mut self) -> i32 {
        self.seed = (self.seed * MULTIPLIER_A + INCREMENT_C) % (i32::MAX as i64);
        self.seed as i32
    }

    fn next_range(&mut self, from: i32, to: i32) -> i32 {
        (self.next() % (to - from)).abs() + from
    }
}

impl CustomNumberGenerator {
    /// Creates a generator that always produces the same sequence for the same `seed`.
    pub const fn new(seed: u32) -> Self {
        Self {
            seed: seed as i64 % i32::MAX as i64,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::random::{CustomNumberGenerator, RandomGenerator, StandardRandomGenerator};

    #[test]
    fn outputs_same_numbers() {
        let mut crg = CustomNumberGenerator::new(42);
        assert_eq!(crg.next_range(0, 10), 8);
        assert_eq!(crg.next_range(0, 10), 4);
        assert_eq!(crg.next_range(0, 10), 1);
        assert_eq!(crg.next_range(0, 10), 2);
        assert_eq!(crg.next_range(0, 10), 4);
    }

    #[test]
    fn same_seed_same_choices() {
        let moves = [1, 3, 5, 7, 8];
        let mut first = CustomNumberGenerator::new(7);
        let mut second = CustomNumberGenerator::new(7);
        for _ in 0..20 {
            assert_eq!(first.choose(&moves), second.choose(&moves));
        }
    }

    #[test]
    fn choose_stays_in_slice() {
        let moves = [2, 4, 6];
        let mut crg = CustomNumberGenerator::default();
        let mut srg = StandardRandomGenerator;
        for _ in 0..100 {
            assert!(moves.contains(crg.choose(&moves).unwrap()));
            assert!(moves.contains(srg.choose(&moves).unwrap()));
        }
    }

    #[test]
    fn standard_generator_stays_in_range() {
        let mut srg = StandardRandomGenerator;
        srg.next();
        for _ in 0..100 {
            assert!((3..7).contains(&srg.next_range(3, 7)));
        }
    }

    #[test]
    fn choose_from_empty_is_none() {
        let empty: [usize; 0] = [];
        assert_eq!(CustomNumberGenerator::default().choose(&empty), None);
    }
}

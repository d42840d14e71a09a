use rand::{Rng, RngCore};

/// Deterministic random source for one generation session.
///
/// Uses the `fract(sin(seed++) * 10000)` recurrence so that a seed replays the
/// same sequence the browser client produces. Not suitable for anything
/// security related. Identical seed plus identical call sequence gives
/// identical output.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    seed: i64,
}

impl SeededRandom {
    pub fn new(seed: i64) -> Self {
        Self { seed }
    }

    /// Seed from the thread-local entropy source.
    pub fn from_entropy() -> Self {
        Self::new(i64::from(rand::rng().random::<u32>()))
    }

    /// Current position in the sequence. Advances by one per `next` call.
    pub fn seed(&self) -> i64 {
        self.seed
    }

    pub fn set_seed(&mut self, seed: i64) {
        self.seed = seed;
    }

    /// Float in `[0, 1)`.
    pub fn next(&mut self) -> f64 {
        let x = (self.seed as f64).sin() * 10000.0;
        self.seed = self.seed.wrapping_add(1);
        // Rounding can land exactly on 1.0 for tiny negative x.
        (x - x.floor()).min(1.0 - f64::EPSILON)
    }

    /// Integer in `[min, max]`, both inclusive. Callers must ensure `min <= max`.
    pub fn next_int(&mut self, min: i64, max: i64) -> i64 {
        debug_assert!(min <= max, "next_int called with min {min} > max {max}");
        let span = (max - min + 1) as f64;
        (self.next() * span).floor() as i64 + min
    }

    /// `true` with probability `p`.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next() < p
    }

    /// Uniform pick from a non-empty slice.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        debug_assert!(!items.is_empty(), "choose called on an empty slice");
        let idx = self.next_int(0, items.len() as i64 - 1) as usize;
        &items[idx]
    }

    /// Fisher-Yates shuffle into a new vector. `items` is left untouched.
    pub fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut out = items.to_vec();
        for i in (1..out.len()).rev() {
            let j = self.next_int(0, i as i64) as usize;
            out.swap(i, j);
        }
        out
    }
}

impl RngCore for SeededRandom {
    fn next_u32(&mut self) -> u32 {
        (self.next() * 4_294_967_296.0) as u32
    }

    fn next_u64(&mut self) -> u64 {
        (u64::from(self.next_u32()) << 32) | u64::from(self.next_u32())
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SeededRandom::new(42);
        let mut b = SeededRandom::new(42);
        let va: Vec<f64> = (0..20).map(|_| a.next()).collect();
        let vb: Vec<f64> = (0..20).map(|_| b.next()).collect();
        assert_eq!(va, vb);
    }

    #[test]
    fn different_seed_different_sequence() {
        let mut a = SeededRandom::new(1);
        let mut b = SeededRandom::new(2);
        assert_ne!(a.next(), b.next());
    }

    #[test]
    fn next_advances_seed() {
        let mut rng = SeededRandom::new(10);
        rng.next();
        rng.next();
        assert_eq!(rng.seed(), 12);
    }

    #[test]
    fn set_seed_replays() {
        let mut rng = SeededRandom::new(7);
        let first: Vec<f64> = (0..5).map(|_| rng.next()).collect();
        rng.set_seed(7);
        let again: Vec<f64> = (0..5).map(|_| rng.next()).collect();
        assert_eq!(first, again);
    }

    #[test]
    fn next_in_unit_interval() {
        let mut rng = SeededRandom::new(-500);
        for _ in 0..10_000 {
            let v = rng.next();
            assert!((0.0..1.0).contains(&v), "{v} outside [0, 1)");
        }
    }

    #[test]
    fn next_int_inclusive_bounds() {
        let mut rng = SeededRandom::new(3);
        let mut seen_min = false;
        let mut seen_max = false;
        for _ in 0..5_000 {
            let v = rng.next_int(1, 4);
            assert!((1..=4).contains(&v));
            seen_min |= v == 1;
            seen_max |= v == 4;
        }
        assert!(seen_min && seen_max);
    }

    #[test]
    fn next_int_single_value_range() {
        let mut rng = SeededRandom::new(99);
        for _ in 0..100 {
            assert_eq!(rng.next_int(5, 5), 5);
        }
    }

    #[test]
    fn choose_returns_member() {
        let mut rng = SeededRandom::new(11);
        let items = ["a", "b", "c"];
        for _ in 0..100 {
            assert!(items.contains(rng.choose(&items)));
        }
    }

    #[test]
    fn shuffle_leaves_input_untouched() {
        let mut rng = SeededRandom::new(5);
        let input = vec![1, 2, 3, 4, 5, 6, 7, 8];
        let before = input.clone();
        let shuffled = rng.shuffle(&input);
        assert_eq!(input, before);

        let mut sorted = shuffled.clone();
        sorted.sort();
        assert_eq!(sorted, before, "shuffle must be a permutation");
    }

    #[test]
    fn shuffle_empty_and_single() {
        let mut rng = SeededRandom::new(5);
        assert!(rng.shuffle::<u8>(&[]).is_empty());
        assert_eq!(rng.shuffle(&[9]), vec![9]);
    }

    #[test]
    fn works_as_rand_rng() {
        let mut a = SeededRandom::new(42);
        let mut b = SeededRandom::new(42);
        let va: Vec<u32> = (0..10).map(|_| a.random_range(0..100)).collect();
        let vb: Vec<u32> = (0..10).map(|_| b.random_range(0..100)).collect();
        assert_eq!(va, vb);

        let mut buf = [0u8; 7];
        a.fill_bytes(&mut buf);
    }
}

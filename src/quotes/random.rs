//! Random index sources for quote selection.

use rand::Rng;
use std::collections::VecDeque;

/// Supplies the index used to pick a quote from a non-empty subset.
pub trait RandomSource {
    /// Returns an index in `0..len`. Callers never pass `len == 0`.
    fn next_index(&mut self, len: usize) -> usize;
}

/// Uniform draws from the thread-local generator. Not reproducible.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_index(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Replays a fixed list of draws, each reduced modulo the subset length.
///
/// Once the script runs out every draw is `0`.
#[derive(Debug, Default, Clone)]
pub struct ScriptedRandom {
    draws: VecDeque<usize>,
}

impl ScriptedRandom {
    pub fn new(draws: impl IntoIterator<Item = usize>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn next_index(&mut self, len: usize) -> usize {
        self.draws.pop_front().unwrap_or(0) % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_random_in_range() {
        let mut random = ThreadRandom;
        for len in 1..20 {
            assert!(random.next_index(len) < len);
        }
        assert_eq!(random.next_index(1), 0);
    }

    #[test]
    fn test_scripted_random_replays_and_wraps() {
        let mut random = ScriptedRandom::new([2, 5, 1]);
        assert_eq!(random.next_index(3), 2);
        assert_eq!(random.next_index(3), 2);
        assert_eq!(random.next_index(3), 1);
        assert_eq!(random.next_index(3), 0);
    }
}

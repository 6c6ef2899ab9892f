//! Pairing generation for matches and generations
//!
//! Two schemes:
//! - round-robin: every distinct unordered pair exactly once, deterministic
//! - random perfect pairing: the pool is split into disjoint random pairs

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::random::RandomSource;

/// Number of distinct unordered pairs among `n` participants
pub fn pair_count(n: usize) -> usize {
    if n < 2 {
        return 0;
    }
    n * (n - 1) / 2
}

/// Every distinct pair of `items`, in order: item `i` meets each `j > i`.
pub fn round_robin<T>(items: &[T]) -> impl Iterator<Item = (&T, &T)> + '_ {
    items
        .iter()
        .enumerate()
        .flat_map(move |(i, a)| items[i + 1..].iter().map(move |b| (a, b)))
}

/// Index form of [`round_robin`]
///
/// # Returns
/// Vector of (index_a, index_b) pairs, where index_a < index_b
pub fn round_robin_indices(n: usize) -> Vec<(usize, usize)> {
    (0..n).flat_map(|i| (i + 1..n).map(move |j| (i, j))).collect()
}

/// One generation's disjoint pairs
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomPairing {
    pub pairs: Vec<(usize, usize)>,
    /// Left over when the pool size is odd
    pub unpaired: Option<usize>,
}

/// Randomly pair the indices `0..count`.
///
/// Repeatedly takes the last remaining index and matches it with a
/// uniformly chosen one among the rest, until fewer than two remain.
/// The chosen slot is refilled from the end of the pool.
pub fn random_pairing(count: usize, rng: &mut dyn RandomSource) -> Result<RandomPairing> {
    let mut pool: Vec<usize> = (0..count).collect();
    let mut pairs = Vec::with_capacity(count / 2);
    let mut unpaired = None;

    while let Some(item) = pool.pop() {
        if pool.is_empty() {
            unpaired = Some(item);
            break;
        }
        let pick = rng.uniform_int(0, pool.len() as i64 - 1)? as usize;
        let opponent = pool.swap_remove(pick);
        pairs.push((item, opponent));
    }

    Ok(RandomPairing { pairs, unpaired })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ArenaError;
    use crate::random::{ScriptedRng, SeededRng};
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_pair_count() {
        assert_eq!(pair_count(0), 0);
        assert_eq!(pair_count(1), 0);
        assert_eq!(pair_count(2), 1);
        assert_eq!(pair_count(5), 10);
        assert_eq!(pair_count(20), 190);
    }

    #[test]
    fn test_round_robin_small_sizes() {
        for n in [0usize, 1, 2, 5] {
            let pairings = round_robin_indices(n);
            assert_eq!(pairings.len(), n * n.saturating_sub(1) / 2, "n={}", n);

            let unique: HashSet<_> = pairings.iter().copied().collect();
            assert_eq!(unique.len(), pairings.len(), "duplicate pair at n={}", n);
            for (a, b) in &pairings {
                assert!(a < b, "Pairing not ordered: {} >= {}", a, b);
                assert!(*b < n);
            }
        }
    }

    #[test]
    fn test_round_robin_order() {
        assert_eq!(
            round_robin_indices(4),
            vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]
        );

        let names = ["a", "b", "c"];
        let pairs: Vec<_> = round_robin(&names).map(|(a, b)| format!("{}{}", a, b)).collect();
        assert_eq!(pairs, vec!["ab", "ac", "bc"]);
    }

    #[test]
    fn test_random_pairing_scripted() {
        // pool [0,1,2,3]: 3 meets index 0 -> 0, leaving [2,1]; 1 meets index 0 -> 2
        let mut rng = ScriptedRng::new([0, 0]);
        let pairing = random_pairing(4, &mut rng).unwrap();
        assert_eq!(pairing.pairs, vec![(3, 0), (1, 2)]);
        assert_eq!(rng.remaining(), 0);
        assert_eq!(pairing.unpaired, None);
    }

    #[test]
    fn test_random_pairing_degenerate() {
        let mut rng = SeededRng::new(1);
        let empty = random_pairing(0, &mut rng).unwrap();
        assert!(empty.pairs.is_empty());
        assert_eq!(empty.unpaired, None);

        let single = random_pairing(1, &mut rng).unwrap();
        assert!(single.pairs.is_empty());
        assert_eq!(single.unpaired, Some(0));
    }

    #[test]
    fn test_random_pairing_propagates_rng_failure() {
        let mut rng = ScriptedRng::default();
        assert_eq!(random_pairing(3, &mut rng), Err(ArenaError::Exhausted));
    }

    #[test]
    fn test_random_pairing_determinism() {
        let p1 = random_pairing(31, &mut SeededRng::new(9)).unwrap();
        let p2 = random_pairing(31, &mut SeededRng::new(9)).unwrap();
        assert_eq!(p1, p2);
    }

    proptest! {
        #[test]
        fn prop_round_robin_is_exhaustive(n in 0usize..40) {
            let pairings = round_robin_indices(n);
            prop_assert_eq!(pairings.len(), pair_count(n));
            let unique: HashSet<_> = pairings.iter().copied().collect();
            prop_assert_eq!(unique.len(), pairings.len());
            prop_assert!(pairings.iter().all(|(a, b)| a < b));
        }

        #[test]
        fn prop_random_pairing_is_perfect(n in 0usize..60, seed in any::<u64>()) {
            let pairing = random_pairing(n, &mut SeededRng::new(seed)).unwrap();
            prop_assert_eq!(pairing.pairs.len(), n / 2);
            prop_assert_eq!(pairing.unpaired.is_some(), n % 2 == 1);

            let mut seen = HashSet::new();
            for (a, b) in &pairing.pairs {
                prop_assert!(a != b);
                prop_assert!(seen.insert(*a));
                prop_assert!(seen.insert(*b));
            }
            if let Some(left) = pairing.unpaired {
                prop_assert!(seen.insert(left));
            }
            prop_assert_eq!(seen.len(), n);
        }
    }
}

use rand::Rng;

/// Returns a new, uniformly random permutation of `items`. The input is
/// never mutated; the caller keeps its original order.
///
/// Fisher-Yates over a cloned buffer: walk `i` from the last position
/// down to 1, draw `j` in `[0, i]`, swap. Every one of the n!
/// permutations is equally likely and the walk is O(n).
pub fn shuffled<T: Clone, R: Rng>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.gen_range(0..=i);
        out.swap(i, j);
    }
    out
}

/// `shuffled` with the process-wide RNG, for callers that do not need
/// an injected source.
pub fn shuffled_default<T: Clone>(items: &[T]) -> Vec<T> {
    shuffled(items, &mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_shuffled_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        let input: Vec<u32> = (0..50).collect();
        let out = shuffled(&input, &mut rng);

        assert_eq!(out.len(), input.len());
        let mut sorted = out.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, input);
        // Input untouched.
        assert_eq!(input, (0..50).collect::<Vec<u32>>());
    }

    #[test]
    fn test_shuffled_empty_input() {
        let mut rng = StdRng::seed_from_u64(0);
        let input: Vec<u32> = Vec::new();
        assert!(shuffled(&input, &mut rng).is_empty());
    }

    #[test]
    fn test_shuffled_single_element() {
        let mut rng = StdRng::seed_from_u64(0);
        let out = shuffled(&["only"], &mut rng);
        assert_eq!(out, vec!["only"]);
    }

    #[test]
    fn test_shuffled_uniformity_smoke() {
        // 4 elements, 40k trials: each element should land in each
        // position about 10k times. Loose tolerance, this is a smoke
        // test rather than a distribution proof.
        let mut rng = StdRng::seed_from_u64(7);
        let input = [0usize, 1, 2, 3];
        let trials = 40_000;
        let mut counts = [[0usize; 4]; 4];

        for _ in 0..trials {
            let out = shuffled(&input, &mut rng);
            for (pos, &elem) in out.iter().enumerate() {
                counts[elem][pos] += 1;
            }
        }

        let expected = trials / 4;
        for row in &counts {
            for &count in row {
                assert!(
                    count > expected * 9 / 10 && count < expected * 11 / 10,
                    "position count {} too far from expected {}",
                    count,
                    expected
                );
            }
        }
    }

    #[test]
    fn test_shuffled_default_preserves_elements() {
        let input: Vec<u32> = (0..10).collect();
        let mut out = shuffled_default(&input);
        out.sort_unstable();
        assert_eq!(out, input);
    }
}

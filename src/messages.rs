use rand::Rng;

/// Status line strings. Index 0 is shown while typing calmly, the rest are warnings.
pub const DEFAULT_WARNINGS: [&str; 6] = [
    "😇 I hope you're not in a rush to write something 😇",
    "I told you, didn't I?",
    "Might be going a bit too fast",
    "You can relax a bit, you know?",
    "Why are you in such a hurry? 😊",
    "There's plenty of time in life. Don't rush.",
];

/// Pick a warning uniformly from `1..count`. Index 0 is reserved for the calm string.
///
/// With fewer than two strings there is nothing to pick from and 1 is returned;
/// callers look the index up with `get` and fall back to the calm string.
pub fn pick_warning_index<R: Rng + ?Sized>(rng: &mut R, count: usize) -> usize {
    if count < 2 {
        return 1;
    }
    rng.gen_range(1..count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    #[test]
    fn never_picks_the_calm_string() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let idx = pick_warning_index(&mut rng, DEFAULT_WARNINGS.len());
            assert_ne!(idx, 0);
            assert!(idx < DEFAULT_WARNINGS.len());
        }
    }

    #[test]
    fn reaches_every_warning() {
        let mut rng = StdRng::seed_from_u64(42);
        let seen: HashSet<usize> = (0..2_000)
            .map(|_| pick_warning_index(&mut rng, DEFAULT_WARNINGS.len()))
            .collect();
        let expected: HashSet<usize> = (1..DEFAULT_WARNINGS.len()).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn two_strings_always_pick_one() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            assert_eq!(pick_warning_index(&mut rng, 2), 1);
        }
    }

    #[test]
    fn degenerate_counts() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(pick_warning_index(&mut rng, 0), 1);
        assert_eq!(pick_warning_index(&mut rng, 1), 1);
    }
}

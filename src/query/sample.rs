//! Random draws for the prize widgets.
//!
//! Winners are always drawn before any animation starts; the reels are
//! purely presentational.

use rand::Rng;

/// Why a draw request cannot be satisfied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DrawError {
    /// The option list is empty.
    #[error("add at least one option")]
    NoOptions,
    /// Unique draws were requested but the pool is too small.
    #[error("need {need} unique options, only {have} available")]
    NotEnough {
        /// Options available.
        have: usize,
        /// Winners requested.
        need: usize,
    },
}

/// Validate a draw request before sampling.
///
/// # Errors
///
/// Returns [`DrawError::NoOptions`] for an empty pool, and
/// [`DrawError::NotEnough`] when `count` distinct winners are requested
/// from a smaller pool.
pub fn validate_draw(option_count: usize, count: usize, unique: bool) -> Result<(), DrawError> {
    if option_count == 0 || count == 0 {
        return Err(DrawError::NoOptions);
    }
    if unique && option_count < count {
        return Err(DrawError::NotEnough {
            have: option_count,
            need: count,
        });
    }
    Ok(())
}

/// Select `count` values from `items` uniformly at random.
///
/// Without replacement each draw removes the chosen element from the
/// working pool, so the result holds distinct elements and is shorter
/// than `count` when the pool runs dry; callers are expected to
/// [`validate_draw`] first rather than rely on truncation. With
/// replacement every draw is independent and repeats are possible.
pub fn sample<T: Clone, R: Rng + ?Sized>(
    rng: &mut R,
    items: &[T],
    count: usize,
    with_replacement: bool,
) -> Vec<T> {
    if items.is_empty() {
        return Vec::new();
    }
    if with_replacement {
        return (0..count)
            .map(|_| items[rng.gen_range(0..items.len())].clone())
            .collect();
    }
    let mut pool: Vec<T> = items.to_vec();
    let mut chosen = Vec::with_capacity(count.min(pool.len()));
    while chosen.len() < count && !pool.is_empty() {
        let index = rng.gen_range(0..pool.len());
        chosen.push(pool.swap_remove(index));
    }
    chosen
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn items() -> Vec<String> {
        ["A", "B", "C", "D"].iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_without_replacement_distinct_and_from_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        let picked = sample(&mut rng, &items(), 3, false);
        assert_eq!(picked.len(), 3);
        for (i, a) in picked.iter().enumerate() {
            assert!(items().contains(a));
            for b in &picked[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_without_replacement_truncates_when_overdrawn() {
        let mut rng = StdRng::seed_from_u64(7);
        let picked = sample(&mut rng, &items(), 10, false);
        assert_eq!(picked.len(), 4);
    }

    #[test]
    fn test_with_replacement_always_count() {
        let mut rng = StdRng::seed_from_u64(7);
        let picked = sample(&mut rng, &items(), 12, true);
        assert_eq!(picked.len(), 12);
        assert!(picked.iter().all(|p| items().contains(p)));
    }

    #[test]
    fn test_empty_pool_yields_nothing() {
        let mut rng = StdRng::seed_from_u64(7);
        let picked = sample::<String, _>(&mut rng, &[], 3, true);
        assert!(picked.is_empty());
    }

    #[test]
    fn test_validate_draw() {
        assert_eq!(validate_draw(0, 2, false), Err(DrawError::NoOptions));
        assert_eq!(validate_draw(4, 0, false), Err(DrawError::NoOptions));
        assert_eq!(
            validate_draw(2, 3, true),
            Err(DrawError::NotEnough { have: 2, need: 3 })
        );
        assert_eq!(validate_draw(2, 3, false), Ok(()));
        assert_eq!(validate_draw(4, 2, true), Ok(()));
    }

    #[test]
    fn test_same_seed_same_draw() {
        let a = sample(&mut StdRng::seed_from_u64(99), &items(), 2, false);
        let b = sample(&mut StdRng::seed_from_u64(99), &items(), 2, false);
        assert_eq!(a, b);
    }
}

//! Conditional parallel iteration for the decomposer.
//!
//! Uses rayon when the `parallel` feature is enabled, the config asks for it,
//! and the collection is large enough to amortize thread overhead.

use crate::config::OverlapConfig;

/// Folds over items with a reduce step, conditionally using parallel
/// iteration.
///
/// The reduce function must be associative and commutative for the parallel
/// and sequential paths to agree.
#[allow(unused_variables)]
pub fn maybe_parallel_fold<T, U, F, R>(
    items: &[T],
    config: &OverlapConfig,
    identity: U,
    fold: F,
    reduce: R,
) -> U
where
    T: Sync,
    U: Send + Sync + Clone,
    F: Fn(U, &T) -> U + Sync + Send,
    R: Fn(U, U) -> U + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        if config.should_parallelize(items.len()) {
            return items
                .par_iter()
                .fold(|| identity.clone(), &fold)
                .reduce(|| identity.clone(), reduce);
        }
    }

    items.iter().fold(identity, fold)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_fold() {
        let config = OverlapConfig::sequential();
        let items: Vec<f64> = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let sum = maybe_parallel_fold(&items, &config, 0.0, |acc, x| acc + x, |a, b| a + b);
        assert!((sum - 15.0).abs() < 1e-12);
    }

    #[test]
    fn test_fold_matches_parallel_gate() {
        let config = OverlapConfig::default().with_threshold(4);
        let items: Vec<i64> = (1..=100).collect();
        let sum = maybe_parallel_fold(&items, &config, 0i64, |acc, x| acc + x, |a, b| a + b);
        assert_eq!(sum, 5050);
    }
}

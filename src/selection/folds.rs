//! K-fold document partitioning
//!
//! Documents are shuffled with a seeded RNG and split into F disjoint
//! folds whose sizes differ by at most one.

use rand::prelude::*;

use super::SelectionError;

/// One train/test split of document indices
#[derive(Debug, Clone)]
pub struct FoldSplit {
    pub train_indices: Vec<usize>,
    pub test_indices: Vec<usize>,
}

/// Partition `n_docs` document indices into `n_folds` disjoint folds.
///
/// Every document lands in exactly one test fold; the remainder documents
/// are spread over the leading folds so sizes differ by at most 1.
pub fn k_fold(n_docs: usize, n_folds: usize, seed: u64) -> Result<Vec<FoldSplit>, SelectionError> {
    if n_folds < 2 || n_folds > n_docs {
        return Err(SelectionError::InvalidFoldCount { n_folds, n_docs });
    }

    let mut indices: Vec<usize> = (0..n_docs).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let base = n_docs / n_folds;
    let remainder = n_docs % n_folds;

    let mut splits = Vec::with_capacity(n_folds);
    let mut start = 0;
    for fold in 0..n_folds {
        let size = base + usize::from(fold < remainder);
        let end = start + size;

        let test_indices: Vec<usize> = indices[start..end].to_vec();
        let train_indices: Vec<usize> = indices[..start]
            .iter()
            .chain(indices[end..].iter())
            .copied()
            .collect();

        splits.push(FoldSplit {
            train_indices,
            test_indices,
        });
        start = end;
    }

    Ok(splits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_form_a_true_partition() {
        let splits = k_fold(10, 3, 42).unwrap();
        assert_eq!(splits.len(), 3);

        let mut seen: Vec<usize> = splits
            .iter()
            .flat_map(|s| s.test_indices.iter().copied())
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..10).collect::<Vec<_>>());

        // 10 docs over 3 folds: sizes 4, 3, 3.
        let sizes: Vec<usize> = splits.iter().map(|s| s.test_indices.len()).collect();
        let max = *sizes.iter().max().unwrap();
        let min = *sizes.iter().min().unwrap();
        assert!(max - min <= 1);
    }

    #[test]
    fn train_and_test_are_disjoint_and_exhaustive() {
        let splits = k_fold(9, 4, 7).unwrap();
        for split in &splits {
            assert_eq!(split.train_indices.len() + split.test_indices.len(), 9);
            for idx in &split.test_indices {
                assert!(!split.train_indices.contains(idx));
            }
        }
    }

    #[test]
    fn rejects_out_of_bounds_fold_counts() {
        assert!(matches!(
            k_fold(10, 1, 42),
            Err(SelectionError::InvalidFoldCount {
                n_folds: 1,
                n_docs: 10
            })
        ));
        assert!(matches!(
            k_fold(10, 11, 42),
            Err(SelectionError::InvalidFoldCount { .. })
        ));
    }

    #[test]
    fn same_seed_gives_same_partition() {
        let a = k_fold(20, 5, 3).unwrap();
        let b = k_fold(20, 5, 3).unwrap();
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.test_indices, y.test_indices);
        }
    }
}

//! Rayon-based parallel smoothing of multiple independent filter runs.
//!
//! The backward recursion itself is sequential in time; parallelism here is
//! across runs only. All runs share one transition matrix and process noise.

use nalgebra::DMatrix;
use rayon::prelude::*;

use crate::error::Result;
use crate::smoother::smooth;
use crate::types::{FilterRun, SmoothedEstimates};

/// Smooth multiple forward-filter runs in parallel.
///
/// Each run is smoothed independently with the shared `transition` and
/// `process_cov`. Failures are isolated per run: one run with bad shapes or
/// a singular prediction yields its own `Err` without affecting the others.
pub fn batch_smooth(
    runs: &[FilterRun],
    transition: &DMatrix<f64>,
    process_cov: &DMatrix<f64>,
) -> Vec<Result<SmoothedEstimates>> {
    runs.par_iter()
        .map(|run| smooth(&run.means, &run.covariances, transition, process_cov))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SmootherError;
    use nalgebra::DVector;

    fn scalar_run(means: &[f64], covs: &[f64]) -> FilterRun {
        FilterRun::new(
            means.iter().map(|&v| DVector::from_vec(vec![v])).collect(),
            covs.iter()
                .map(|&v| DMatrix::from_vec(1, 1, vec![v]))
                .collect(),
        )
    }

    #[test]
    fn test_batch_matches_sequential() {
        let f = DMatrix::from_vec(1, 1, vec![1.0]);
        let q = DMatrix::from_vec(1, 1, vec![0.5]);
        let runs = vec![
            scalar_run(&[0.0, 1.0, 2.0], &[1.0, 0.9, 0.8]),
            scalar_run(&[5.0, 4.0], &[2.0, 1.5]),
            scalar_run(&[1.0], &[1.0]),
        ];

        let batch = batch_smooth(&runs, &f, &q);
        assert_eq!(batch.len(), 3);

        for (run, result) in runs.iter().zip(&batch) {
            let single = smooth(&run.means, &run.covariances, &f, &q).unwrap();
            let parallel = result.as_ref().unwrap();
            assert_eq!(parallel.len(), single.len());
            for k in 0..single.len() {
                assert_eq!(parallel.means[k], single.means[k]);
                assert_eq!(parallel.covariances[k], single.covariances[k]);
                assert_eq!(parallel.gains[k], single.gains[k]);
            }
        }
    }

    #[test]
    fn test_failed_run_does_not_poison_others() {
        let f = DMatrix::from_vec(1, 1, vec![1.0]);
        let q = DMatrix::from_vec(1, 1, vec![0.5]);
        let bad = FilterRun::new(
            vec![DVector::from_vec(vec![0.0]); 2],
            vec![DMatrix::from_vec(1, 1, vec![1.0]); 3],
        );
        let runs = vec![
            scalar_run(&[0.0, 1.0], &[1.0, 1.0]),
            bad,
            scalar_run(&[2.0, 3.0], &[1.0, 1.0]),
        ];

        let batch = batch_smooth(&runs, &f, &q);

        assert!(batch[0].is_ok());
        assert!(matches!(
            batch[1].as_ref().unwrap_err(),
            SmootherError::ShapeMismatch(_)
        ));
        assert!(batch[2].is_ok());
    }
}

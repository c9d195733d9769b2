use nalgebra::{DMatrix, DVector};

/// One forward Kalman filter pass, bundled for batch smoothing.
///
/// `means[k]` is the filtered state estimate at step `k`, `covariances[k]`
/// its covariance. Both sequences must have the same length and a consistent
/// state dimension; this is checked by `smooth`, not here.
#[derive(Debug, Clone)]
pub struct FilterRun {
    /// Filtered state means, time-ordered.
    pub means: Vec<DVector<f64>>,
    /// Filtered state covariances, time-ordered.
    pub covariances: Vec<DMatrix<f64>>,
}

impl FilterRun {
    pub fn new(means: Vec<DVector<f64>>, covariances: Vec<DMatrix<f64>>) -> Self {
        Self { means, covariances }
    }

    /// Number of time steps in this run.
    pub fn len(&self) -> usize {
        self.means.len()
    }

    pub fn is_empty(&self) -> bool {
        self.means.is_empty()
    }
}

/// Output of the RTS backward pass.
///
/// All three sequences have the same length as the filtered input. The gain
/// at the final step is never used by the recursion and stays zero.
#[derive(Debug, Clone)]
pub struct SmoothedEstimates {
    /// Smoothed state means.
    pub means: Vec<DVector<f64>>,
    /// Smoothed state covariances.
    pub covariances: Vec<DMatrix<f64>>,
    /// Smoother gains D_k; gains[n-1] is the zero matrix.
    pub gains: Vec<DMatrix<f64>>,
}

impl SmoothedEstimates {
    /// Number of smoothed time steps.
    pub fn len(&self) -> usize {
        self.means.len()
    }

    pub fn is_empty(&self) -> bool {
        self.means.is_empty()
    }

    /// State dimension d.
    pub fn state_dim(&self) -> usize {
        self.means.first().map_or(0, |m| m.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_run_len() {
        let run = FilterRun::new(
            vec![DVector::from_element(2, 0.0); 5],
            vec![DMatrix::identity(2, 2); 5],
        );
        assert_eq!(run.len(), 5);
        assert!(!run.is_empty());
    }

    #[test]
    fn test_smoothed_state_dim() {
        let out = SmoothedEstimates {
            means: vec![DVector::from_element(3, 1.0); 2],
            covariances: vec![DMatrix::identity(3, 3); 2],
            gains: vec![DMatrix::zeros(3, 3); 2],
        };
        assert_eq!(out.len(), 2);
        assert_eq!(out.state_dim(), 3);
    }
}

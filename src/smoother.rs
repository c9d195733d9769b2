use nalgebra::{DMatrix, DVector};

use crate::error::{Result, SmootherError};
use crate::types::SmoothedEstimates;

/// Run the Rauch-Tung-Striebel backward smoother over forward filter output.
///
/// Inputs are the filtered means and covariances produced by a Kalman filter
/// (time-ordered), plus the transition matrix `F` and process noise `Q` the
/// filter used, held fixed over the whole interval.
///
/// Backward recursion, for k = n-2 down to 0:
///   - P_pred = F * P_k * F' + Q
///   - D_k such that D_k * P_pred = P_k * F'   (LU solve, no explicit inverse)
///   - m_k <- m_k + D_k * (m_{k+1} - F * m_k)
///   - P_k <- P_k + D_k * (P_{k+1} - P_pred) * D_k'
///
/// where m_{k+1}, P_{k+1} are the already-smoothed values from the previous
/// iteration. The last step has no future information: its smoothed values
/// equal the filtered ones and its gain stays zero.
///
/// Inputs are copied once up front; the caller's sequences are never mutated
/// and the returned sequences never alias them.
///
/// # Errors
///
/// - `ShapeMismatch` if the sequences are empty, their lengths differ, or any
///   dimension is inconsistent with the state dimension `d`. Reported before
///   any computation.
/// - `SingularPrediction` if the predicted covariance at some step is
///   singular (or the solve yields non-finite values), naming that step. No
///   partial output is returned.
pub fn smooth(
    means: &[DVector<f64>],
    covariances: &[DMatrix<f64>],
    transition: &DMatrix<f64>,
    process_cov: &DMatrix<f64>,
) -> Result<SmoothedEstimates> {
    validate_shapes(means, covariances, transition, process_cov)?;

    let n = means.len();
    let d = means[0].len();

    // One working copy up front, mutated across iterations.
    let mut m: Vec<DVector<f64>> = means.to_vec();
    let mut p: Vec<DMatrix<f64>> = covariances.to_vec();
    let mut gains: Vec<DMatrix<f64>> = vec![DMatrix::zeros(d, d); n];

    let transition_t = transition.transpose();

    for k in (0..n - 1).rev() {
        // P_pred = F * P_k * F' + Q
        let p_pred = transition * &p[k] * &transition_t + process_cov;

        // Solve P_pred' * X = F * P_k' for X = D_k', then transpose.
        // Defining identity: D_k * P_pred = P_k * F'.
        let rhs = transition * p[k].transpose();
        let gain = match p_pred.transpose().lu().solve(&rhs) {
            Some(x) => x.transpose(),
            None => return Err(SmootherError::SingularPrediction { step: k }),
        };
        if gain.iter().any(|v| !v.is_finite()) {
            return Err(SmootherError::SingularPrediction { step: k });
        }

        // m_k <- m_k + D_k * (m_{k+1} - F * m_k); m_{k+1} is already smoothed
        let innovation = &m[k + 1] - transition * &m[k];
        m[k] += &gain * innovation;

        // P_k <- P_k + D_k * (P_{k+1} - P_pred) * D_k'
        let cov_diff = &p[k + 1] - p_pred;
        let corrected = &p[k] + &gain * cov_diff * gain.transpose();
        p[k] = corrected;

        gains[k] = gain;
    }

    Ok(SmoothedEstimates {
        means: m,
        covariances: p,
        gains,
    })
}

/// Check all dimensions before touching any data.
fn validate_shapes(
    means: &[DVector<f64>],
    covariances: &[DMatrix<f64>],
    transition: &DMatrix<f64>,
    process_cov: &DMatrix<f64>,
) -> Result<()> {
    if means.is_empty() {
        return Err(SmootherError::ShapeMismatch(
            "at least one filtered estimate is required".into(),
        ));
    }
    if means.len() != covariances.len() {
        return Err(SmootherError::ShapeMismatch(format!(
            "{} means vs {} covariances",
            means.len(),
            covariances.len()
        )));
    }

    let d = means[0].len();

    for (k, mean) in means.iter().enumerate() {
        if mean.len() != d {
            return Err(SmootherError::ShapeMismatch(format!(
                "mean at step {} has dimension {}, expected {}",
                k,
                mean.len(),
                d
            )));
        }
    }
    for (k, cov) in covariances.iter().enumerate() {
        if cov.nrows() != d || cov.ncols() != d {
            return Err(SmootherError::ShapeMismatch(format!(
                "covariance at step {} is {}x{}, expected {}x{}",
                k,
                cov.nrows(),
                cov.ncols(),
                d,
                d
            )));
        }
    }
    if transition.nrows() != d || transition.ncols() != d {
        return Err(SmootherError::ShapeMismatch(format!(
            "transition matrix is {}x{}, expected {}x{}",
            transition.nrows(),
            transition.ncols(),
            d,
            d
        )));
    }
    if process_cov.nrows() != d || process_cov.ncols() != d {
        return Err(SmootherError::ShapeMismatch(format!(
            "process noise covariance is {}x{}, expected {}x{}",
            process_cov.nrows(),
            process_cov.ncols(),
            d,
            d
        )));
    }

    Ok(())
}

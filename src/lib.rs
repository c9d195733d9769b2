//! Rauch-Tung-Striebel fixed-interval smoother over Kalman filter output.
//!
//! A forward Kalman filter estimates each state using only measurements up to
//! the current step. The RTS smoother runs a single backward pass over the
//! filtered means and covariances, pulling each estimate toward the
//! already-smoothed next step, so every estimate ends up conditioned on the
//! whole measurement sequence. The filter itself is an external collaborator:
//! this crate consumes its output (`means`, `covariances`) plus the fixed
//! transition matrix `F` and process noise `Q` as opaque inputs.
//!
//! # Example
//!
//! ```
//! use nalgebra::{DMatrix, DVector};
//! use rts_rs::smooth;
//!
//! // Scalar random-walk filter output (d = 1, n = 3).
//! let means: Vec<DVector<f64>> = [0.0, 1.0, 2.0]
//!     .iter()
//!     .map(|&v| DVector::from_vec(vec![v]))
//!     .collect();
//! let covs = vec![DMatrix::from_vec(1, 1, vec![1.0]); 3];
//! let f = DMatrix::from_vec(1, 1, vec![1.0]);
//! let q = DMatrix::from_vec(1, 1, vec![1.0]);
//!
//! let out = smooth(&means, &covs, &f, &q).unwrap();
//!
//! assert_eq!(out.len(), 3);
//! // The last step has no future information and stays unchanged.
//! assert_eq!(out.means[2], means[2]);
//! // Interior uncertainty shrinks.
//! assert!(out.covariances[0][(0, 0)] < covs[0][(0, 0)]);
//! ```

pub mod batch;
pub mod error;
pub mod smoother;
pub mod types;

pub use batch::batch_smooth;
pub use error::{Result, SmootherError};
pub use smoother::smooth;
pub use types::{FilterRun, SmoothedEstimates};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SmootherError {
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    #[error("predicted covariance is singular at step {step}: cannot compute smoother gain")]
    SingularPrediction { step: usize },
}

pub type Result<T> = std::result::Result<T, SmootherError>;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoverError>;

/// Everything that can abort a run.
#[derive(Error, Debug)]
pub enum CoverError {
    /// Bad command line or configuration input
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Graph failed the pre-solve consistency check
    #[error("Malformed graph: {0}")]
    MalformedGraph(String),

    /// Backend did not return an optimal solution
    #[error("Solver {solver} failed with status {status}")]
    SolverFailure { solver: String, status: String },

    /// The returned cover leaves an edge uncovered
    #[error("Verification failed: edge ({a}, {b}) is not covered")]
    VerificationFailure { a: usize, b: usize },
}

impl CoverError {
    /// Process exit code for this error kind.
    pub fn exit_code(&self) -> u8 {
        match self {
            CoverError::InvalidArgument(_) => 2,
            CoverError::MalformedGraph(_) => 3,
            CoverError::SolverFailure { .. } => 4,
            CoverError::VerificationFailure { .. } => 5,
        }
    }
}

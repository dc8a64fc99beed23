use std::fmt;

use crate::domain::solver::Solver;
use crate::domain::solvers::GlpkSolver;

#[cfg(feature = "highs-solver")]
use crate::domain::solvers::HighsSolver;

/// Available solver backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SolverType {
    #[default]
    Glpk,
    #[cfg(feature = "highs-solver")]
    Highs,
}

impl SolverType {
    /// Parse solver type from string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "glpk" => Some(SolverType::Glpk),
            #[cfg(feature = "highs-solver")]
            "highs" => Some(SolverType::Highs),
            _ => None,
        }
    }

    /// Names accepted by [`SolverType::parse`] in this build
    #[cfg(not(feature = "highs-solver"))]
    pub fn available() -> &'static [&'static str] {
        &["glpk"]
    }

    /// Names accepted by [`SolverType::parse`] in this build
    #[cfg(feature = "highs-solver")]
    pub fn available() -> &'static [&'static str] {
        &["glpk", "highs"]
    }
}

impl fmt::Display for SolverType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverType::Glpk => f.write_str("glpk"),
            #[cfg(feature = "highs-solver")]
            SolverType::Highs => f.write_str("highs"),
        }
    }
}

/// Create a solver instance based on the specified type
pub fn create_solver(solver_type: SolverType) -> Box<dyn Solver> {
    match solver_type {
        SolverType::Glpk => Box::new(GlpkSolver::new()),
        #[cfg(feature = "highs-solver")]
        SolverType::Highs => Box::new(HighsSolver::new()),
    }
}

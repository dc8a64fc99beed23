pub mod glpk_solver;

#[cfg(feature = "highs-solver")]
pub mod highs_solver;

pub use glpk_solver::GlpkSolver;

#[cfg(feature = "highs-solver")]
pub use highs_solver::HighsSolver;

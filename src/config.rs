use std::env;

use crate::domain::solver_factory::SolverType;
use crate::report::ReportFormat;

pub const SEED_VAR: &str = "VC_SEED";
pub const SOLVER_VAR: &str = "VC_SOLVER";
pub const FORMAT_VAR: &str = "VC_FORMAT";

/// Run settings taken from the environment (and `.env`), before CLI overrides.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    /// `None` seeds the generator from entropy.
    pub seed: Option<u64>,
    pub solver: SolverType,
    pub format: ReportFormat,
}

impl Config {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup. Values that do not parse are
    /// logged and replaced by their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let seed = lookup(SEED_VAR).and_then(|s| match s.trim().parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(_) => {
                log::warn!("ignoring {}={:?}: not an unsigned integer", SEED_VAR, s);
                None
            }
        });

        let solver = lookup(SOLVER_VAR)
            .and_then(|s| {
                let parsed = SolverType::parse(&s);
                if parsed.is_none() {
                    log::warn!(
                        "ignoring {}={:?}: expected one of {:?}",
                        SOLVER_VAR,
                        s,
                        SolverType::available()
                    );
                }
                parsed
            })
            .unwrap_or_default();

        let format = lookup(FORMAT_VAR)
            .and_then(|s| {
                let parsed = ReportFormat::parse(&s);
                if parsed.is_none() {
                    log::warn!("ignoring {}={:?}: expected text or json", FORMAT_VAR, s);
                }
                parsed
            })
            .unwrap_or_default();

        Config { seed, solver, format }
    }
}

use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;

use vertex_cover_ilp::config::Config;
use vertex_cover_ilp::pipeline::{run, RunOptions};
use vertex_cover_ilp::report::ReportFormat;
use vertex_cover_ilp::{CoverError, SolverType};

const DEFAULT_DENSITY: f64 = 0.5;
const DEFAULT_NODES: usize = 20;

/// Solve minimum-weight vertex cover on a random graph as an integer program.
#[derive(Debug, Parser)]
#[command(name = "vertex-cover-ilp", version)]
struct Cli {
    /// Probability that any pair of nodes is joined by an edge.
    #[arg(default_value_t = DEFAULT_DENSITY, value_parser = parse_probability)]
    p: f64,

    /// Number of nodes.
    #[arg(default_value_t = DEFAULT_NODES)]
    n: usize,

    /// Random seed (overrides VC_SEED; drawn from entropy when neither is set).
    #[arg(long)]
    seed: Option<u64>,

    /// Solver backend (overrides VC_SOLVER).
    #[arg(long, value_parser = parse_solver)]
    solver: Option<SolverType>,

    /// Report format, `text` or `json` (overrides VC_FORMAT).
    #[arg(long, value_parser = parse_format)]
    format: Option<ReportFormat>,
}

fn parse_probability(s: &str) -> Result<f64, String> {
    let p: f64 = s.parse().map_err(|_| format!("`{}` is not a number", s))?;
    if (0.0..=1.0).contains(&p) {
        Ok(p)
    } else {
        Err(format!("{} is not within [0, 1]", p))
    }
}

fn parse_solver(s: &str) -> Result<SolverType, String> {
    SolverType::parse(s).ok_or_else(|| {
        format!(
            "unknown solver `{}`, expected one of {:?}",
            s,
            SolverType::available()
        )
    })
}

fn parse_format(s: &str) -> Result<ReportFormat, String> {
    ReportFormat::parse(s).ok_or_else(|| format!("unknown format `{}`, expected text or json", s))
}

/// Prints `err` to `out` independently of the logger and picks the exit code.
fn report_failure<W: Write>(err: &CoverError, out: &mut W) -> ExitCode {
    let _ = writeln!(out, "error: {}", err);
    ExitCode::from(err.exit_code())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    let seed = cli.seed.or(config.seed).unwrap_or_else(rand::random);
    let options = RunOptions {
        p: cli.p,
        n: cli.n,
        seed,
        solver: cli.solver.unwrap_or(config.solver),
    };
    let format = cli.format.unwrap_or(config.format);
    log::debug!("running with {:?}, format {:?}", options, format);

    let report = match run(&options) {
        Ok(report) => report,
        Err(err) => {
            log::error!("{}", err);
            return report_failure(&err, &mut io::stderr());
        }
    };

    let rendered = match report.render(format) {
        Ok(rendered) => rendered,
        Err(err) => {
            log::error!("failed to render report: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = io::stdout().lock();
    if let Err(err) = writeln!(stdout, "{}", rendered.trim_end()) {
        log::error!("failed to write report: {}", err);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_failure_given_verification_failure_should_write_message() {
        let err = CoverError::VerificationFailure { a: 2, b: 5 };
        let mut out = Vec::new();
        let _ = report_failure(&err, &mut out);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "error: Verification failed: edge (2, 5) is not covered\n"
        );
    }

    #[test]
    fn test_report_failure_given_solver_failure_should_name_status() {
        let err = CoverError::SolverFailure {
            solver: "GLPK".into(),
            status: "infeasible".into(),
        };
        let mut out = Vec::new();
        let _ = report_failure(&err, &mut out);
        let message = String::from_utf8(out).unwrap();
        assert!(message.contains("Solver GLPK failed with status infeasible"));
    }

    #[test]
    fn test_parse_probability_given_bounds_should_accept_closed_interval() {
        assert_eq!(parse_probability("0"), Ok(0.0));
        assert_eq!(parse_probability("1"), Ok(1.0));
        assert!(parse_probability("1.01").is_err());
        assert!(parse_probability("nan").is_err());
    }
}

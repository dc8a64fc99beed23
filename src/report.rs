use serde::Serialize;
use std::fmt::Write as _;
use std::time::Duration;

use crate::models::{Cover, Graph};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl ReportFormat {
    /// Parse a report format from string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Some(ReportFormat::Text),
            "json" => Some(ReportFormat::Json),
            _ => None,
        }
    }
}

/// Everything a finished run reports.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub solver: String,
    pub seed: u64,
    pub node_count: usize,
    pub edge_count: usize,
    /// Generation plus formulation, in seconds
    pub compile_secs: f64,
    pub solve_secs: f64,
    pub cover: Cover,
    pub graph: Graph,
}

impl Report {
    pub fn new(
        solver: &str,
        seed: u64,
        graph: Graph,
        cover: Cover,
        compile_time: Duration,
        solve_time: Duration,
    ) -> Self {
        Report {
            solver: solver.to_string(),
            seed,
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
            compile_secs: compile_time.as_secs_f64(),
            solve_secs: solve_time.as_secs_f64(),
            cover,
            graph,
        }
    }

    pub fn render(&self, format: ReportFormat) -> Result<String, serde_json::Error> {
        match format {
            ReportFormat::Text => Ok(self.to_text()),
            ReportFormat::Json => serde_json::to_string_pretty(self),
        }
    }

    pub fn to_text(&self) -> String {
        let nodes: Vec<String> = self.cover.nodes.iter().map(|n| n.to_string()).collect();

        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = writeln!(out, "Minimum-weight vertex cover ({})", self.solver);
        let _ = writeln!(out, "  seed:             {}", self.seed);
        let _ = writeln!(out, "  nodes:            {}", self.node_count);
        let _ = writeln!(out, "  edges:            {}", self.edge_count);
        let _ = writeln!(out, "  compilation time: {:.3} s", self.compile_secs);
        let _ = writeln!(out, "  solve time:       {:.3} s", self.solve_secs);
        let _ = writeln!(out, "  cover weight:     {:.3}", self.cover.weight);
        let _ = writeln!(out, "  cover size:       {}", self.cover.len());
        let _ = writeln!(out, "  cover nodes:      [{}]", nodes.join(", "));
        out
    }
}

//! Harness runner: drive a search workspace and assemble a sealed report.
//!
//! # Pipeline
//!
//! ```text
//! resolve policy → to_workspace_input() → SearchWorkspace::new()
//!   → [next_solution() → verify_solution()] × N → seal report
//! ```
//!
//! The runner stops after `max_solutions` solutions or at the first
//! invocation that halts without one.

use revwalk_kernel::proof::replay::verify_solution;
use revwalk_search::error::WorkspaceError;
use revwalk_search::outcome::{HaltReasonV1, SearchOutcomeV1};
use revwalk_search::workspace::SearchWorkspace;
use thiserror::Error;
use tracing::{info, warn};

use crate::problem::{PolicySpecV1, ProblemError, ProblemV1};
use crate::report::{
    ReportError, RunReportV1, SolutionReportV1, REPORT_SCHEMA_VERSION,
};

/// Caller-supplied settings that take precedence over the problem file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOverrides {
    pub policy: PolicySpecV1,
    /// Stop after this many solutions. Values below 1 count as 1.
    pub max_solutions: usize,
}

impl Default for RunOverrides {
    fn default() -> Self {
        Self {
            policy: PolicySpecV1::default(),
            max_solutions: 1,
        }
    }
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Problem(#[from] ProblemError),
    #[error("cannot build search workspace: {0}")]
    Workspace(#[from] WorkspaceError),
    #[error(transparent)]
    Report(#[from] ReportError),
}

/// Run `problem` and return a sealed report.
///
/// A run that finds no solution is still a successful run; the report's
/// `halt_reason` says why the search stopped.
///
/// # Errors
///
/// Returns [`RunError`] if the problem cannot be converted, the workspace
/// rejects it, or the report cannot be digested.
pub fn run_problem(problem: &ProblemV1, overrides: &RunOverrides) -> Result<RunReportV1, RunError> {
    let policy = problem
        .policy
        .unwrap_or_default()
        .overlay(overrides.policy)
        .resolve();
    let problem_digest = problem.digest()?;
    let input = problem.to_workspace_input()?;
    let mut workspace = SearchWorkspace::new(&input, policy)?;
    info!(
        problem = %problem_digest,
        nodes = workspace.graph().len(),
        limit = policy.iteration_limit,
        capacity = policy.arena_capacity,
        "run started"
    );

    let max_solutions = overrides.max_solutions.max(1);
    let mut solutions = Vec::new();
    let halt = loop {
        match workspace.next_solution() {
            SearchOutcomeV1::Solved(solution) => {
                let verdict =
                    verify_solution(workspace.graph(), &solution.node_ids, &solution.values);
                if !verdict.is_match() {
                    warn!(
                        ordinal = solutions.len() + 1,
                        verdict = verdict.label(),
                        "solution does not replay to all-zero"
                    );
                }
                solutions.push(SolutionReportV1::new(
                    solutions.len() + 1,
                    &solution,
                    workspace.iterations(),
                    &verdict,
                )?);
                if solutions.len() >= max_solutions {
                    break HaltReasonV1::GoalReached;
                }
            }
            SearchOutcomeV1::NoSolution { halt } => break halt,
        }
    };

    info!(
        solutions = solutions.len(),
        halt = %halt,
        iterations = workspace.iterations(),
        "run finished"
    );

    let report = RunReportV1 {
        schema_version: REPORT_SCHEMA_VERSION.to_string(),
        problem_digest: problem_digest.to_string(),
        policy: workspace.policy().into(),
        solutions,
        halt_reason: halt.label().to_string(),
        iterations: workspace.iterations(),
        cursors: workspace.cursors().into(),
        report_digest: String::new(),
    };
    Ok(report.seal()?)
}

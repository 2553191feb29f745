//! Run reports: the auditable record of one harness run.
//!
//! A report binds to its problem through `problem_digest` and to its own
//! content through `report_digest`, computed over the canonical JSON of
//! every other field.

use revwalk_kernel::proof::canon::{canonical_json_bytes, CanonError};
use revwalk_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};
use revwalk_kernel::proof::replay::ReplayVerdict;
use revwalk_search::arena::ArenaCursors;
use revwalk_search::outcome::SolutionV1;
use revwalk_search::policy::SearchPolicyV1;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const REPORT_SCHEMA_VERSION: &str = "revwalk.report.v1";

const DIGEST_FIELD: &str = "report_digest";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("report serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error(transparent)]
    Canon(#[from] CanonError),
    #[error("report digest mismatch: recorded {recorded}, computed {computed}")]
    DigestMismatch { recorded: String, computed: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyReportV1 {
    pub iteration_limit: u64,
    pub arena_capacity: usize,
    pub max_degree: usize,
}

impl From<&SearchPolicyV1> for PolicyReportV1 {
    fn from(policy: &SearchPolicyV1) -> Self {
        Self {
            iteration_limit: policy.iteration_limit,
            arena_capacity: policy.arena_capacity,
            max_degree: policy.max_degree,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorReportV1 {
    pub pop: usize,
    pub push: usize,
    pub capacity: usize,
    pub headroom: usize,
}

impl From<ArenaCursors> for CursorReportV1 {
    fn from(c: ArenaCursors) -> Self {
        Self {
            pop: c.pop,
            push: c.push,
            capacity: c.capacity,
            headroom: c.headroom,
        }
    }
}

/// Forward replay of one solution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayReportV1 {
    /// `"match"`, `"divergence"`, or `"invalid"`.
    pub verdict: String,
    pub printed: Vec<String>,
    pub final_values: Vec<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl From<&ReplayVerdict> for ReplayReportV1 {
    fn from(verdict: &ReplayVerdict) -> Self {
        let (output, detail) = match verdict {
            ReplayVerdict::Match { output } => (Some(output), None),
            ReplayVerdict::Divergence {
                slot,
                value,
                output,
            } => (
                Some(output),
                Some(format!("slot {slot} ends at {value}, expected 0")),
            ),
            ReplayVerdict::Invalid(e) => (None, Some(e.to_string())),
        };
        Self {
            verdict: verdict.label().to_string(),
            printed: output
                .map(|o| o.printed.iter().map(ToString::to_string).collect())
                .unwrap_or_default(),
            final_values: output.map(|o| o.final_values.clone()).unwrap_or_default(),
            detail,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionReportV1 {
    /// 1-based position among the run's solutions.
    pub ordinal: usize,
    pub path_length: usize,
    pub values: Vec<i64>,
    pub node_ids: Vec<usize>,
    /// `[path_length, values..., node_ids...]`.
    pub flat_record: Vec<i64>,
    /// Lifetime iteration count when this solution was found.
    pub found_at_iteration: u64,
    pub solution_digest: String,
    pub replay: ReplayReportV1,
}

impl SolutionReportV1 {
    /// # Errors
    ///
    /// Returns [`ReportError`] if the solution digest cannot be computed.
    pub fn new(
        ordinal: usize,
        solution: &SolutionV1,
        found_at_iteration: u64,
        verdict: &ReplayVerdict,
    ) -> Result<Self, ReportError> {
        Ok(Self {
            ordinal,
            path_length: solution.path_length,
            values: solution.values.clone(),
            node_ids: solution.node_ids.clone(),
            flat_record: solution.to_flat_record(),
            found_at_iteration,
            solution_digest: solution_digest(solution)?.to_string(),
            replay: verdict.into(),
        })
    }
}

/// Digest of a solution's values and path.
///
/// # Errors
///
/// Returns [`ReportError`] if canonicalization fails.
pub fn solution_digest(solution: &SolutionV1) -> Result<ContentHash, ReportError> {
    let value = serde_json::json!({
        "node_ids": solution.node_ids,
        "values": solution.values,
    });
    Ok(canonical_hash(
        HashDomain::Solution,
        &canonical_json_bytes(&value)?,
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReportV1 {
    pub schema_version: String,
    pub problem_digest: String,
    pub policy: PolicyReportV1,
    pub solutions: Vec<SolutionReportV1>,
    /// Halt reason of the final invocation.
    pub halt_reason: String,
    pub iterations: u64,
    pub cursors: CursorReportV1,
    pub report_digest: String,
}

impl RunReportV1 {
    /// Digest over every field except `report_digest` itself.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] if serialization or canonicalization fails.
    pub fn compute_digest(&self) -> Result<ContentHash, ReportError> {
        let mut value = serde_json::to_value(self)?;
        if let serde_json::Value::Object(map) = &mut value {
            map.remove(DIGEST_FIELD);
        }
        Ok(canonical_hash(
            HashDomain::Report,
            &canonical_json_bytes(&value)?,
        ))
    }

    /// Fill in `report_digest`.
    ///
    /// # Errors
    ///
    /// Same as [`RunReportV1::compute_digest`].
    pub fn seal(mut self) -> Result<Self, ReportError> {
        self.report_digest = self.compute_digest()?.to_string();
        Ok(self)
    }

    /// Check the recorded digest against the content.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::DigestMismatch`] if they differ.
    pub fn verify_digest(&self) -> Result<(), ReportError> {
        let computed = self.compute_digest()?;
        if computed.as_str() != self.report_digest {
            return Err(ReportError::DigestMismatch {
                recorded: self.report_digest.clone(),
                computed: computed.to_string(),
            });
        }
        Ok(())
    }

    /// Canonical JSON bytes of the sealed report.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] if serialization or canonicalization fails.
    pub fn to_canonical_bytes(&self) -> Result<Vec<u8>, ReportError> {
        Ok(canonical_json_bytes(&serde_json::to_value(self)?)?)
    }

    #[must_use]
    pub fn found_solution(&self) -> bool {
        !self.solutions.is_empty()
    }
}

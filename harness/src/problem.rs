//! Problem files: the JSON description of one puzzle instance.
//!
//! ```json
//! {
//!   "num_fixed": 1,
//!   "num_free": 0,
//!   "target": [-3],
//!   "bounds": [[-10, 10]],
//!   "nodes": [
//!     {"kind": "end"},
//!     {"kind": "add", "lhs": 0, "rhs": {"constant": 3}},
//!     {"kind": "start"}
//!   ],
//!   "edges": [[0, 1], [1, 2]],
//!   "policy": {"iteration_limit": 1000}
//! }
//! ```
//!
//! Node ids are positions in `nodes`. `lhs` and `rhs` default to slot 0
//! and constant 0, which suits kinds that ignore them.

use std::path::{Path, PathBuf};

use revwalk_kernel::graph::build::{AdjacencyV1, GraphSpecV1};
use revwalk_kernel::graph::node::{NodeKind, RhsOperand};
use revwalk_kernel::proof::canon::{canonical_json_bytes, CanonError};
use revwalk_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};
use revwalk_kernel::values::ValueLayout;
use revwalk_search::policy::SearchPolicyV1;
use revwalk_search::workspace::WorkspaceInputV1;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure to load or interpret a problem file.
#[derive(Debug, Error)]
pub enum ProblemError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed problem JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("node {node} has unknown kind {name:?}")]
    UnknownKind { node: usize, name: String },
    #[error("problem is not canonicalizable: {0}")]
    Canon(#[from] CanonError),
}

/// Right-hand operand as written in a problem file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperandSpecV1 {
    Constant(i64),
    Slot(usize),
}

impl Default for OperandSpecV1 {
    fn default() -> Self {
        Self::Constant(0)
    }
}

impl From<OperandSpecV1> for RhsOperand {
    fn from(spec: OperandSpecV1) -> Self {
        match spec {
            OperandSpecV1::Constant(c) => Self::Constant(c),
            OperandSpecV1::Slot(i) => Self::Slot(i),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NodeSpecV1 {
    /// Lowercase kind name, e.g. `"cond_increment"`.
    pub kind: String,
    #[serde(default)]
    pub lhs: usize,
    #[serde(default)]
    pub rhs: OperandSpecV1,
}

/// Policy fields a problem file may pin. Absent fields take defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicySpecV1 {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iteration_limit: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arena_capacity: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_degree: Option<usize>,
}

impl PolicySpecV1 {
    /// Fields set in `other` win over fields set in `self`.
    #[must_use]
    pub fn overlay(self, other: Self) -> Self {
        Self {
            iteration_limit: other.iteration_limit.or(self.iteration_limit),
            arena_capacity: other.arena_capacity.or(self.arena_capacity),
            max_degree: other.max_degree.or(self.max_degree),
        }
    }

    /// Resolve against [`SearchPolicyV1::default`].
    #[must_use]
    pub fn resolve(self) -> SearchPolicyV1 {
        let defaults = SearchPolicyV1::default();
        SearchPolicyV1 {
            iteration_limit: self.iteration_limit.unwrap_or(defaults.iteration_limit),
            arena_capacity: self.arena_capacity.unwrap_or(defaults.arena_capacity),
            max_degree: self.max_degree.unwrap_or(defaults.max_degree),
        }
    }
}

/// A puzzle instance as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProblemV1 {
    pub num_fixed: usize,
    pub num_free: usize,
    pub target: Vec<i64>,
    /// Inclusive `[lower, upper]` per slot.
    pub bounds: Vec<[i64; 2]>,
    pub nodes: Vec<NodeSpecV1>,
    /// Undirected edges between node ids.
    pub edges: Vec<[usize; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy: Option<PolicySpecV1>,
}

impl ProblemV1 {
    /// Parse a problem from JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ProblemError::Parse`] for malformed JSON or unknown fields.
    pub fn from_json_bytes(bytes: &[u8]) -> Result<Self, ProblemError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    #[must_use]
    pub fn layout(&self) -> ValueLayout {
        ValueLayout::new(self.num_fixed, self.num_free)
    }

    /// Translate into search-workspace input.
    ///
    /// Structural checks (degrees, terminals, lengths) are left to
    /// workspace construction; only kind names are resolved here.
    ///
    /// # Errors
    ///
    /// Returns [`ProblemError::UnknownKind`] for an unrecognized kind name.
    pub fn to_workspace_input(&self) -> Result<WorkspaceInputV1, ProblemError> {
        let kinds = self
            .nodes
            .iter()
            .enumerate()
            .map(|(node, spec)| {
                NodeKind::from_name(&spec.kind).ok_or_else(|| ProblemError::UnknownKind {
                    node,
                    name: spec.kind.clone(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(WorkspaceInputV1 {
            graph: GraphSpecV1 {
                node_count: self.nodes.len(),
                kinds,
                lhs: self.nodes.iter().map(|n| n.lhs).collect(),
                rhs: self.nodes.iter().map(|n| n.rhs.into()).collect(),
                adjacency: AdjacencyV1::Edges(self.edges.iter().map(|&[a, b]| (a, b)).collect()),
            },
            layout: self.layout(),
            target: self.target.clone(),
            bounds: self.bounds.iter().map(|&[lo, hi]| (lo, hi)).collect(),
        })
    }

    /// The file's own policy section, resolved against defaults.
    #[must_use]
    pub fn policy(&self) -> SearchPolicyV1 {
        self.policy.unwrap_or_default().resolve()
    }

    /// Domain-separated digest of the problem's canonical JSON form.
    ///
    /// Formatting and key order in the source file do not affect it.
    ///
    /// # Errors
    ///
    /// Returns [`ProblemError`] if serialization or canonicalization fails.
    pub fn digest(&self) -> Result<ContentHash, ProblemError> {
        let value = serde_json::to_value(self)?;
        let bytes = canonical_json_bytes(&value)?;
        Ok(canonical_hash(HashDomain::Problem, &bytes))
    }
}

/// Read and parse a problem file.
///
/// # Errors
///
/// Returns [`ProblemError::Io`] if the file cannot be read, or
/// [`ProblemError::Parse`] if it is not a valid problem.
pub fn load_problem(path: &Path) -> Result<ProblemV1, ProblemError> {
    let bytes = std::fs::read(path).map_err(|source| ProblemError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    ProblemV1::from_json_bytes(&bytes)
}

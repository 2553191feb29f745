//! `NodeGraphV1`: the validated, immutable puzzle graph.
//!
//! Construction is the only place graph input is checked. Once built, the
//! graph is read-only: the search engine indexes into it without further
//! validation.

use thiserror::Error;

use super::node::{NodeIndex, NodeKind, NodeV1, RhsOperand};

/// Fatal graph construction failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A node has more neighbors than the configured maximum degree.
    #[error("node {node} has degree {degree}, maximum is {max_degree}")]
    DegreeOverflow {
        node: NodeIndex,
        degree: usize,
        max_degree: usize,
    },
    /// No node of kind `End` exists, so there is nothing to seed the walk.
    #[error("graph has no end node")]
    MissingTerminal,
    /// No node of kind `Start` exists, so no walk can ever reach a goal.
    #[error("graph has no start node")]
    MissingInitial,
    /// More than one `End` node.
    #[error("graph has two end nodes ({first} and {second})")]
    DuplicateTerminal { first: NodeIndex, second: NodeIndex },
    /// More than one `Start` node.
    #[error("graph has two start nodes ({first} and {second})")]
    DuplicateInitial { first: NodeIndex, second: NodeIndex },
    /// A per-node input array disagrees with the declared node count.
    #[error("{what} has length {actual}, expected {expected}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
    /// An adjacency entry names a node that does not exist.
    #[error("node {node} lists neighbor {neighbor}, but the graph has {node_count} nodes")]
    NeighborOutOfRange {
        node: NodeIndex,
        neighbor: NodeIndex,
        node_count: usize,
    },
    /// An operand slot lies outside the value vector.
    #[error("node {node} {operand} slot {index} is outside a {num_values}-slot value vector")]
    OperandOutOfRange {
        node: NodeIndex,
        operand: &'static str,
        index: usize,
        num_values: usize,
    },
    /// A raw kind tag is not one of the known node kinds.
    #[error("node {node} has unknown kind tag {tag}")]
    UnknownKindTag { node: NodeIndex, tag: u8 },
    /// A raw operand slot reference is negative.
    #[error("node {node} has negative {operand} slot reference {raw}")]
    NegativeOperand {
        node: NodeIndex,
        operand: &'static str,
        raw: i64,
    },
}

/// Adjacency relation over node indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdjacencyV1 {
    /// Undirected edges; each pair links both endpoints.
    Edges(Vec<(NodeIndex, NodeIndex)>),
    /// Row `i` marks the neighbors of node `i`, in column order.
    Matrix(Vec<Vec<bool>>),
}

/// Caller-supplied graph description, one entry per node in parallel arrays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphSpecV1 {
    pub node_count: usize,
    pub kinds: Vec<NodeKind>,
    pub lhs: Vec<usize>,
    pub rhs: Vec<RhsOperand>,
    pub adjacency: AdjacencyV1,
}

impl GraphSpecV1 {
    /// Build a spec from the legacy flat-array encoding: kind tags, signed
    /// `lhs` slots, `(rhs_is_constant, rhs)` pairs, and a row-major
    /// `node_count * node_count` adjacency matrix of 0/1 bytes.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::LengthMismatch`] on any short/long array,
    /// [`GraphError::UnknownKindTag`] on an unrecognized tag, and
    /// [`GraphError::NegativeOperand`] on a negative slot reference.
    pub fn from_raw_arrays(
        node_count: usize,
        kind_tags: &[u8],
        lhs: &[i64],
        rhs_is_constant: &[u8],
        rhs: &[i64],
        adjacency_matrix: &[u8],
    ) -> Result<Self, GraphError> {
        check_len("kind tags", node_count, kind_tags.len())?;
        check_len("lhs", node_count, lhs.len())?;
        check_len("rhs_is_constant", node_count, rhs_is_constant.len())?;
        check_len("rhs", node_count, rhs.len())?;
        check_matrix_len(node_count, adjacency_matrix.len())?;

        let mut kinds = Vec::with_capacity(node_count);
        let mut lhs_slots = Vec::with_capacity(node_count);
        let mut rhs_operands = Vec::with_capacity(node_count);
        for node in 0..node_count {
            let kind = NodeKind::from_tag(kind_tags[node]).ok_or(GraphError::UnknownKindTag {
                node,
                tag: kind_tags[node],
            })?;
            let lhs_slot = usize::try_from(lhs[node]).map_err(|_| GraphError::NegativeOperand {
                node,
                operand: "lhs",
                raw: lhs[node],
            })?;
            let rhs_operand = RhsOperand::from_raw(rhs_is_constant[node] != 0, rhs[node]).ok_or(
                GraphError::NegativeOperand {
                    node,
                    operand: "rhs",
                    raw: rhs[node],
                },
            )?;
            kinds.push(kind);
            lhs_slots.push(lhs_slot);
            rhs_operands.push(rhs_operand);
        }

        let matrix = adjacency_matrix
            .chunks(node_count.max(1))
            .take(node_count)
            .map(|row| row.iter().map(|&b| b != 0).collect())
            .collect();

        Ok(Self {
            node_count,
            kinds,
            lhs: lhs_slots,
            rhs: rhs_operands,
            adjacency: AdjacencyV1::Matrix(matrix),
        })
    }
}

fn check_len(what: &'static str, expected: usize, actual: usize) -> Result<(), GraphError> {
    if expected == actual {
        Ok(())
    } else {
        Err(GraphError::LengthMismatch {
            what,
            expected,
            actual,
        })
    }
}

/// A `node_count` square matrix too large to address can never match.
fn check_matrix_len(node_count: usize, actual: usize) -> Result<(), GraphError> {
    let expected = node_count.checked_mul(node_count).ok_or(GraphError::LengthMismatch {
        what: "adjacency matrix",
        expected: usize::MAX,
        actual,
    })?;
    check_len("adjacency matrix", expected, actual)
}

/// The immutable puzzle graph with its unique start and end nodes located.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeGraphV1 {
    nodes: Vec<NodeV1>,
    initial: NodeIndex,
    terminal: NodeIndex,
}

impl NodeGraphV1 {
    /// Validate `spec` and build the graph.
    ///
    /// Checks run in this order: array lengths, adjacency (range, then
    /// degree), end node, start node.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError`] on any malformed input; see the variant docs.
    pub fn build(spec: &GraphSpecV1, max_degree: usize) -> Result<Self, GraphError> {
        let n = spec.node_count;
        check_len("kinds", n, spec.kinds.len())?;
        check_len("lhs", n, spec.lhs.len())?;
        check_len("rhs", n, spec.rhs.len())?;

        let mut neighbors: Vec<Vec<NodeIndex>> = vec![Vec::new(); n];
        match &spec.adjacency {
            AdjacencyV1::Edges(edges) => {
                for &(a, b) in edges {
                    if a >= n || b >= n {
                        let (node, neighbor) = if a >= n { (b, a) } else { (a, b) };
                        return Err(GraphError::NeighborOutOfRange {
                            node,
                            neighbor,
                            node_count: n,
                        });
                    }
                    neighbors[a].push(b);
                    if a != b {
                        neighbors[b].push(a);
                    }
                }
            }
            AdjacencyV1::Matrix(rows) => {
                check_len("adjacency rows", n, rows.len())?;
                for (node, row) in rows.iter().enumerate() {
                    check_len("adjacency row", n, row.len())?;
                    neighbors[node].extend(
                        row.iter()
                            .enumerate()
                            .filter_map(|(j, &linked)| linked.then_some(j)),
                    );
                }
            }
        }

        if let Some((node, list)) = neighbors
            .iter()
            .enumerate()
            .find(|(_, list)| list.len() > max_degree)
        {
            return Err(GraphError::DegreeOverflow {
                node,
                degree: list.len(),
                max_degree,
            });
        }

        let terminal = find_unique(&spec.kinds, NodeKind::End)?.ok_or(GraphError::MissingTerminal)?;
        let initial = find_unique(&spec.kinds, NodeKind::Start)?.ok_or(GraphError::MissingInitial)?;

        let nodes = neighbors
            .into_iter()
            .enumerate()
            .map(|(index, neighbors)| NodeV1 {
                index,
                kind: spec.kinds[index],
                lhs: spec.lhs[index],
                rhs: spec.rhs[index],
                neighbors,
            })
            .collect();

        Ok(Self {
            nodes,
            initial,
            terminal,
        })
    }

    /// Check every operand slot the graph reads or writes fits in a
    /// `num_values`-slot vector.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::OperandOutOfRange`] for the first offending node.
    pub fn check_operands(&self, num_values: usize) -> Result<(), GraphError> {
        for node in &self.nodes {
            if node.kind.reads_lhs() && node.lhs >= num_values {
                return Err(GraphError::OperandOutOfRange {
                    node: node.index,
                    operand: "lhs",
                    index: node.lhs,
                    num_values,
                });
            }
            if let (true, RhsOperand::Slot(index)) = (node.kind.is_arithmetic(), node.rhs) {
                if index >= num_values {
                    return Err(GraphError::OperandOutOfRange {
                        node: node.index,
                        operand: "rhs",
                        index,
                        num_values,
                    });
                }
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn node(&self, index: NodeIndex) -> &NodeV1 {
        &self.nodes[index]
    }

    #[must_use]
    pub fn nodes(&self) -> &[NodeV1] {
        &self.nodes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The unique `End` node: the seed of every reverse walk.
    #[must_use]
    pub fn terminal(&self) -> NodeIndex {
        self.terminal
    }

    /// The unique `Start` node: where goal tests happen.
    #[must_use]
    pub fn initial(&self) -> NodeIndex {
        self.initial
    }
}

fn find_unique(kinds: &[NodeKind], wanted: NodeKind) -> Result<Option<NodeIndex>, GraphError> {
    let mut found = None;
    for (index, &kind) in kinds.iter().enumerate() {
        if kind != wanted {
            continue;
        }
        if let Some(first) = found {
            return Err(match wanted {
                NodeKind::End => GraphError::DuplicateTerminal {
                    first,
                    second: index,
                },
                _ => GraphError::DuplicateInitial {
                    first,
                    second: index,
                },
            });
        }
        found = Some(index);
    }
    Ok(found)
}

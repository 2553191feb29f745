//! Node records: operation kind, operands, and adjacency.

/// Index of a node in [`super::build::NodeGraphV1`]. Also its public identifier.
pub type NodeIndex = usize;

/// The closed set of node operations.
///
/// Tags follow the legacy raw-array encoding (`Start = 1` .. `NoOp = 9`);
/// see [`NodeKind::from_tag`] and [`NodeKind::tag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum NodeKind {
    /// Entry point of forward execution; the goal of the reverse walk.
    Start = 1,
    /// Exit point of forward execution; the seed of the reverse walk.
    End = 2,
    /// `values[lhs] += rhs`.
    Add = 3,
    /// Emits `values[lhs]` as an integer.
    PrintInteger = 4,
    /// Emits `values[lhs]` as a unicode scalar.
    PrintUnicode = 5,
    /// `values[lhs] -= rhs`.
    Subtract = 6,
    /// `values[lhs] += 1` when `rhs > 0`.
    CondIncrement = 7,
    /// `values[lhs] -= 1` when `rhs > 0`.
    CondDecrement = 8,
    /// Pass-through cell.
    NoOp = 9,
}

impl NodeKind {
    /// All kinds in tag order.
    pub const ALL: [NodeKind; 9] = [
        Self::Start,
        Self::End,
        Self::Add,
        Self::PrintInteger,
        Self::PrintUnicode,
        Self::Subtract,
        Self::CondIncrement,
        Self::CondDecrement,
        Self::NoOp,
    ];

    /// Convert from the raw tag. Returns `None` for unrecognized values.
    #[must_use]
    pub const fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            1 => Some(Self::Start),
            2 => Some(Self::End),
            3 => Some(Self::Add),
            4 => Some(Self::PrintInteger),
            5 => Some(Self::PrintUnicode),
            6 => Some(Self::Subtract),
            7 => Some(Self::CondIncrement),
            8 => Some(Self::CondDecrement),
            9 => Some(Self::NoOp),
            _ => None,
        }
    }

    #[must_use]
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Whether this kind reads `rhs` and writes `values[lhs]`.
    #[must_use]
    pub const fn is_arithmetic(self) -> bool {
        matches!(
            self,
            Self::Add | Self::Subtract | Self::CondIncrement | Self::CondDecrement
        )
    }

    /// Whether this kind reads `values[lhs]` (arithmetic or print).
    #[must_use]
    pub const fn reads_lhs(self) -> bool {
        self.is_arithmetic() || matches!(self, Self::PrintInteger | Self::PrintUnicode)
    }

    /// Stable lowercase name used in problem files and reports.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
            Self::Add => "add",
            Self::PrintInteger => "print_integer",
            Self::PrintUnicode => "print_unicode",
            Self::Subtract => "subtract",
            Self::CondIncrement => "cond_increment",
            Self::CondDecrement => "cond_decrement",
            Self::NoOp => "no_op",
        }
    }

    /// Inverse of [`NodeKind::name`].
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Right-hand operand: a literal or a slot of the value vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RhsOperand {
    Constant(i64),
    Slot(usize),
}

impl RhsOperand {
    /// Resolve against a value vector. Slot indices are validated at
    /// workspace construction.
    #[must_use]
    pub fn resolve(self, values: &[i64]) -> i64 {
        match self {
            Self::Constant(c) => c,
            Self::Slot(i) => values[i],
        }
    }

    /// Build from the legacy `(rhs_is_constant, rhs)` pair.
    ///
    /// Returns `None` when a slot reference is negative.
    #[must_use]
    pub fn from_raw(is_constant: bool, raw: i64) -> Option<Self> {
        if is_constant {
            Some(Self::Constant(raw))
        } else {
            usize::try_from(raw).ok().map(Self::Slot)
        }
    }
}

/// An immutable node of the puzzle graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeV1 {
    pub index: NodeIndex,
    pub kind: NodeKind,
    /// Slot written by arithmetic kinds and read by print kinds.
    pub lhs: usize,
    pub rhs: RhsOperand,
    /// Neighbor indices in adjacency order. Length never exceeds the
    /// maximum degree the graph was built with.
    pub neighbors: Vec<NodeIndex>,
}

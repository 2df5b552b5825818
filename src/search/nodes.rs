//! Node-count bookkeeping for search.
//!
//! Counts travel back up the recursion alongside the value; there is no
//! shared counter.

use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign},
};

use serde::Serialize;

/// Number of positions visited by a search
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
)]
#[serde(transparent)]
pub struct NodeCount(u64);

impl NodeCount {
    /// A single visited node
    pub const ONE: NodeCount = NodeCount(1);

    pub const fn new(count: u64) -> Self {
        NodeCount(count)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl Add for NodeCount {
    type Output = NodeCount;

    fn add(self, rhs: NodeCount) -> NodeCount {
        NodeCount(self.0 + rhs.0)
    }
}

impl AddAssign for NodeCount {
    fn add_assign(&mut self, rhs: NodeCount) {
        self.0 += rhs.0;
    }
}

impl Sum for NodeCount {
    fn sum<I: Iterator<Item = NodeCount>>(iter: I) -> Self {
        iter.fold(NodeCount::default(), Add::add)
    }
}

impl From<NodeCount> for u64 {
    fn from(count: NodeCount) -> u64 {
        count.0
    }
}

impl fmt::Display for NodeCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Minimax value of a subtree and the nodes visited to establish it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub value: i32,
    pub nodes: NodeCount,
}

impl Evaluation {
    /// A terminal position: its utility, one node visited.
    pub fn leaf(value: i32) -> Self {
        Evaluation {
            value,
            nodes: NodeCount::ONE,
        }
    }
}

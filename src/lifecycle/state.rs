//! Lifecycle states and their hierarchy.

use crate::core::State;
use crate::state_enum;
use std::fmt;

state_enum! {
    /// Leaf states of the lifecycle controller.
    pub enum LifecycleState {
        Stopped,
        Starting,
        Started,
        Stopping,
        Dead,
    }
    transient: [Starting, Stopping, Dead]
}

/// A handler in the state hierarchy: the implicit root or one leaf.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Node {
    Root,
    Leaf(LifecycleState),
}

impl Node {
    /// Where unmatched events fall through to.
    pub fn parent(self) -> Option<Node> {
        match self {
            Self::Root => None,
            Self::Leaf(_) => Some(Self::Root),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => f.write_str("Root"),
            Self::Leaf(state) => f.write_str(state.name()),
        }
    }
}

//! Cascade construction errors.

use core::fmt;

use crate::StyleNodeId;

/// Why a node could not be added to a [`crate::StyleTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CascadeError {
    /// The requested parent does not belong to this tree.
    UnknownNode(StyleNodeId),
    /// Inserting would nest deeper than the tree's configured limit.
    DepthExceeded { limit: usize },
    /// Every node id is already in use.
    CapacityExhausted,
}

impl fmt::Display for CascadeError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownNode(id) => write!(formatter, "style node {} is not in this tree", id.0),
            Self::DepthExceeded { limit } => {
                write!(formatter, "style nesting exceeds the limit of {limit} levels")
            }
            Self::CapacityExhausted => formatter.write_str("style tree has no node ids left"),
        }
    }
}

impl core::error::Error for CascadeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        assert!(
            CascadeError::UnknownNode(StyleNodeId(7))
                .to_string()
                .contains('7')
        );
        assert!(
            CascadeError::DepthExceeded { limit: 3 }
                .to_string()
                .contains("limit of 3")
        );
        assert!(
            CascadeError::CapacityExhausted
                .to_string()
                .contains("no node ids")
        );
    }
}

use crate::data::dataset::{Number, WholeNumber};

/// Decision tree node
///
/// Internal nodes send a sample to `left` when `sample[feature_index] <= threshold`
/// and to `right` otherwise. Leaves hold the predicted class.
#[derive(Clone, Debug, PartialEq)]
pub enum TreeNode<XT: Number, YT: WholeNumber> {
    Internal {
        feature_index: usize,
        threshold: XT,
        left: Box<TreeNode<XT, YT>>,
        right: Box<TreeNode<XT, YT>>,
    },
    Leaf {
        value: YT,
    },
}

impl<XT: Number, YT: WholeNumber> TreeNode<XT, YT> {
    pub fn leaf(value: YT) -> Self {
        Self::Leaf { value }
    }

    pub fn internal(feature_index: usize, threshold: XT, left: Self, right: Self) -> Self {
        Self::Internal {
            feature_index,
            threshold,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }

    /// Number of edges on the longest path from this node down to a leaf.
    pub fn depth(&self) -> usize {
        match self {
            Self::Leaf { .. } => 0,
            Self::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Leaf { .. } => 1,
            Self::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }
}

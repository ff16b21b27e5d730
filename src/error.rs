use thiserror::Error;

/// Errors surfaced by dataset validation, tree training and prediction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The dataset has no samples.
    #[error("The dataset is empty.")]
    EmptyDataset,
    /// The feature matrix has no columns.
    #[error("The feature matrix has no features.")]
    NoFeatures,
    /// Number of feature rows and labels differ.
    #[error("Features have {samples} rows but there are {labels} labels.")]
    LengthMismatch { samples: usize, labels: usize },
    /// `predict` was called on a tree that was never fitted.
    #[error("Tree wasn't built yet.")]
    NotFitted,
    /// Query rows don't have the number of features the tree was trained on.
    #[error("Expected {expected} features per row, found {found}.")]
    FeatureCountMismatch { expected: usize, found: usize },
    /// A hyperparameter is outside its allowed range.
    #[error("{0}")]
    InvalidParameter(String),
}

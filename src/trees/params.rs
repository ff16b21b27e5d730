use crate::error::TreeError;

#[derive(Clone, Debug)]
pub struct TreeClassifierParams {
    min_samples_split: usize,
    max_depth: usize,
    n_features_to_consider: Option<usize>,
}

impl Default for TreeClassifierParams {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeClassifierParams {
    pub fn new() -> Self {
        Self {
            min_samples_split: 2,
            max_depth: 100,
            n_features_to_consider: None,
        }
    }

    pub fn set_min_samples_split(&mut self, min_samples_split: usize) -> Result<(), TreeError> {
        if min_samples_split < 2 {
            return Err(TreeError::InvalidParameter(
                "The minimum number of samples to split must be greater than 1.".into(),
            ));
        }
        self.min_samples_split = min_samples_split;
        Ok(())
    }

    /// A depth of 0 turns the whole tree into a single leaf.
    ///
    /// Training recurses once per level, so very large depths (tens of thousands) on
    /// chain-shaped data can exhaust the thread's stack.
    pub fn set_max_depth(&mut self, max_depth: usize) {
        self.max_depth = max_depth;
    }

    /// `None` considers every feature at each split.
    pub fn set_n_features_to_consider(
        &mut self,
        n_features_to_consider: Option<usize>,
    ) -> Result<(), TreeError> {
        if n_features_to_consider.is_some_and(|n| n < 1) {
            return Err(TreeError::InvalidParameter(
                "The number of features to consider must be greater than 0.".into(),
            ));
        }
        self.n_features_to_consider = n_features_to_consider;
        Ok(())
    }

    pub fn min_samples_split(&self) -> usize {
        self.min_samples_split
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn n_features_to_consider(&self) -> Option<usize> {
        self.n_features_to_consider
    }

    /// Number of features sampled per split for a matrix with `n_features` columns.
    pub fn resolve_n_features(&self, n_features: usize) -> usize {
        self.n_features_to_consider
            .map_or(n_features, |n| n.min(n_features))
    }
}

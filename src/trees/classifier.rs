//! Decision Tree Classifier
use super::impurity::{class_counts, entropy_from_counts, most_common_label, num_classes, split_gain};
use super::{node::TreeNode, params::TreeClassifierParams};
use crate::{
    data::dataset::{Dataset, Number, WholeNumber},
    error::TreeError,
    metrics::confusion::ClassificationMetrics,
};
use nalgebra::{DMatrix, DVector};
use rand::{rngs::StdRng, seq::index, Rng, SeedableRng};
use std::{cmp::Ordering, collections::HashMap};
use tracing::{debug, trace};

struct SplitData<XT: Number> {
    feature_index: usize,
    threshold: XT,
    left: Vec<usize>,
    right: Vec<usize>,
}

/// Decision Tree Classifier
///
/// Grows a binary tree top-down, choosing at every node the feature/threshold
/// pair with the highest information gain among a random subset of features.
#[derive(Clone, Debug)]
pub struct DecisionTreeClassifier<XT: Number, YT: WholeNumber> {
    root: Option<Box<TreeNode<XT, YT>>>,
    tree_params: TreeClassifierParams,
    n_features: usize,
}

impl<XT: Number, YT: WholeNumber> Default for DecisionTreeClassifier<XT, YT> {
    fn default() -> Self {
        Self::new()
    }
}

impl<XT: Number, YT: WholeNumber> ClassificationMetrics<YT> for DecisionTreeClassifier<XT, YT> {}

impl<XT: Number, YT: WholeNumber> DecisionTreeClassifier<XT, YT> {
    /// Creates a new instance of the decision tree classifier with default parameters.
    pub fn new() -> Self {
        Self {
            root: None,
            tree_params: TreeClassifierParams::new(),
            n_features: 0,
        }
    }

    /// Creates a new instance of the decision tree classifier with custom parameters.
    ///
    /// # Arguments
    ///
    /// * `min_samples_split` - The minimum number of samples required to split an internal node. Defaults to 2.
    /// * `max_depth` - The maximum depth of the tree. Defaults to 100.
    /// * `n_features_to_consider` - How many features are sampled at each split. `None` uses all of them.
    ///
    /// # Errors
    ///
    /// This method will return an error if the minimum number of samples to split is less than 2
    /// or if the number of features to consider is 0.
    pub fn with_params(
        min_samples_split: Option<usize>,
        max_depth: Option<usize>,
        n_features_to_consider: Option<usize>,
    ) -> Result<Self, TreeError> {
        let mut tree = Self::new();

        tree.set_min_samples_split(min_samples_split.unwrap_or(2))?;
        tree.set_max_depth(max_depth.unwrap_or(100));
        tree.set_n_features_to_consider(n_features_to_consider)?;
        Ok(tree)
    }

    pub fn set_min_samples_split(&mut self, min_samples_split: usize) -> Result<(), TreeError> {
        self.tree_params.set_min_samples_split(min_samples_split)
    }

    /// Sets the maximum depth of the tree.
    ///
    /// Training recurses once per level; depths in the tens of thousands on chain-shaped
    /// data may need a larger thread stack.
    pub fn set_max_depth(&mut self, max_depth: usize) {
        self.tree_params.set_max_depth(max_depth)
    }

    pub fn set_n_features_to_consider(
        &mut self,
        n_features_to_consider: Option<usize>,
    ) -> Result<(), TreeError> {
        self.tree_params
            .set_n_features_to_consider(n_features_to_consider)
    }

    pub fn min_samples_split(&self) -> usize {
        self.tree_params.min_samples_split()
    }

    pub fn max_depth(&self) -> usize {
        self.tree_params.max_depth()
    }

    pub fn n_features_to_consider(&self) -> Option<usize> {
        self.tree_params.n_features_to_consider()
    }

    pub fn root(&self) -> Option<&TreeNode<XT, YT>> {
        self.root.as_deref()
    }

    pub fn is_fitted(&self) -> bool {
        self.root.is_some()
    }

    /// Number of features seen during `fit`, or `None` before the tree is built.
    pub fn n_features(&self) -> Option<usize> {
        self.root.as_ref().map(|_| self.n_features)
    }

    pub fn depth(&self) -> Option<usize> {
        self.root().map(TreeNode::depth)
    }

    pub fn leaf_count(&self) -> Option<usize> {
        self.root().map(TreeNode::leaf_count)
    }

    /// Builds the decision tree from a dataset.
    ///
    /// Feature subsets are drawn from a `StdRng` seeded with `seed`, or from OS entropy when `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the dataset is empty, has no features, or has a different
    /// number of labels than rows. The previously built tree, if any, is kept in that case.
    pub fn fit(&mut self, dataset: &Dataset<XT, YT>, seed: Option<u64>) -> Result<(), TreeError> {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.fit_with_rng(dataset, &mut rng)
    }

    /// Builds the decision tree from a dataset, drawing feature subsets from `rng`.
    ///
    /// # Errors
    ///
    /// See [`DecisionTreeClassifier::fit`].
    pub fn fit_with_rng<R: Rng + ?Sized>(
        &mut self,
        dataset: &Dataset<XT, YT>,
        rng: &mut R,
    ) -> Result<(), TreeError> {
        dataset.validate()?;
        let (x, y) = dataset.into_parts();
        let (num_samples, num_features) = x.shape();

        let grower = Grower {
            x,
            y,
            params: &self.tree_params,
            features_per_split: self.tree_params.resolve_n_features(num_features),
        };
        debug!(
            samples = num_samples,
            features = num_features,
            features_per_split = grower.features_per_split,
            "building decision tree"
        );

        let indices = (0..num_samples).collect::<Vec<_>>();
        let root = grower.grow(&indices, 0, rng)?;
        debug!(
            depth = root.depth(),
            leaves = root.leaf_count(),
            "finished building the tree"
        );

        self.root = Some(Box::new(root));
        self.n_features = num_features;
        Ok(())
    }

    /// Predicts the labels for new data.
    ///
    /// # Errors
    ///
    /// Returns an error if the tree wasn't built yet, or if `features` doesn't have
    /// the number of columns the tree was trained on.
    pub fn predict(&self, features: &DMatrix<XT>) -> Result<DVector<YT>, TreeError> {
        let root = self.root.as_deref().ok_or(TreeError::NotFitted)?;
        if features.ncols() != self.n_features {
            return Err(TreeError::FeatureCountMismatch {
                expected: self.n_features,
                found: features.ncols(),
            });
        }

        let predictions: Vec<_> = (0..features.nrows())
            .map(|row| Self::make_prediction(features, row, root))
            .collect();
        Ok(DVector::from_vec(predictions))
    }

    fn make_prediction(features: &DMatrix<XT>, row: usize, root: &TreeNode<XT, YT>) -> YT {
        let mut node = root;
        loop {
            match node {
                TreeNode::Leaf { value } => return *value,
                TreeNode::Internal {
                    feature_index,
                    threshold,
                    left,
                    right,
                } => {
                    node = if features[(row, *feature_index)] <= *threshold {
                        left.as_ref()
                    } else {
                        right.as_ref()
                    };
                }
            }
        }
    }
}

/// Training state shared by every recursive call of a single `fit`.
struct Grower<'a, XT: Number, YT: WholeNumber> {
    x: &'a DMatrix<XT>,
    y: &'a DVector<YT>,
    params: &'a TreeClassifierParams,
    features_per_split: usize,
}

impl<XT: Number, YT: WholeNumber> Grower<'_, XT, YT> {
    fn grow<R: Rng + ?Sized>(
        &self,
        indices: &[usize],
        depth: usize,
        rng: &mut R,
    ) -> Result<TreeNode<XT, YT>, TreeError> {
        let labels = self.labels(indices);

        if depth >= self.params.max_depth()
            || num_classes(&labels) == 1
            || indices.len() < self.params.min_samples_split()
        {
            return Self::leaf(&labels);
        }

        let mut features = index::sample(rng, self.x.ncols(), self.features_per_split).into_vec();
        features.sort_unstable();

        match self.best_split(indices, &labels, &features) {
            Some(split) => {
                let left = self.grow(&split.left, depth + 1, rng)?;
                let right = self.grow(&split.right, depth + 1, rng)?;
                Ok(TreeNode::internal(
                    split.feature_index,
                    split.threshold,
                    left,
                    right,
                ))
            }
            None => {
                trace!(
                    samples = indices.len(),
                    depth,
                    "no split separates the samples, forcing a leaf"
                );
                Self::leaf(&labels)
            }
        }
    }

    fn leaf(labels: &[YT]) -> Result<TreeNode<XT, YT>, TreeError> {
        most_common_label(labels)
            .map(TreeNode::leaf)
            .ok_or(TreeError::EmptyDataset)
    }

    /// Searches the sampled features for the split with the highest information gain.
    ///
    /// Features are scanned in ascending order and thresholds in ascending order; the
    /// first candidate wins ties. Splits that leave one side empty are never chosen.
    ///
    /// Each feature column is sorted once and swept left to right, moving every run of
    /// equal values to the left histogram, so each threshold costs only the labels it moves.
    fn best_split(
        &self,
        indices: &[usize],
        labels: &[YT],
        features: &[usize],
    ) -> Option<SplitData<XT>> {
        let parent_counts = class_counts(labels);
        let parent_entropy = entropy_from_counts(&parent_counts);
        let mut best: Option<(usize, XT)> = None;
        let mut best_information_gain = -1.0;

        for &feature_index in features {
            let mut column: Vec<(XT, YT)> = indices
                .iter()
                .zip(labels)
                .map(|(&row, &label)| (self.x[(row, feature_index)], label))
                .collect();
            column.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

            let mut left_counts = HashMap::new();
            let mut right_counts = parent_counts.clone();
            let mut position = 0;
            while position < column.len() {
                let threshold = column[position].0;
                let run_end = position
                    + column[position..]
                        .iter()
                        .take_while(|(value, _)| *value == threshold)
                        .count()
                        .max(1);
                for &(_, label) in &column[position..run_end] {
                    *left_counts.entry(label).or_insert(0) += 1;
                    if let Some(count) = right_counts.get_mut(&label) {
                        *count -= 1;
                    }
                }
                position = run_end;
                if position == column.len() {
                    break;
                }

                let current_information_gain =
                    split_gain(parent_entropy, &left_counts, &right_counts);
                if current_information_gain > best_information_gain {
                    best_information_gain = current_information_gain;
                    best = Some((feature_index, threshold));
                }
            }
        }

        best.map(|(feature_index, threshold)| {
            let (left, right) = self.partition(indices, feature_index, threshold);
            SplitData {
                feature_index,
                threshold,
                left,
                right,
            }
        })
    }

    fn partition(
        &self,
        indices: &[usize],
        feature_index: usize,
        threshold: XT,
    ) -> (Vec<usize>, Vec<usize>) {
        indices
            .iter()
            .copied()
            .partition(|&row| self.x[(row, feature_index)] <= threshold)
    }

    fn labels(&self, indices: &[usize]) -> Vec<YT> {
        indices.iter().map(|&row| self.y[row]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trees::impurity::information_gain;
    use rayon::prelude::*;
    use std::collections::HashSet;

    fn dataset(rows: usize, cols: usize, x: &[f64], y: Vec<u32>) -> Dataset<f64, u32> {
        Dataset::new(DMatrix::from_row_slice(rows, cols, x), DVector::from_vec(y))
    }

    fn noisy_dataset(seed: u64) -> Dataset<f64, u32> {
        let mut rng = StdRng::seed_from_u64(seed);
        let num_samples = 60;
        let mut x = Vec::with_capacity(num_samples * 3);
        let mut y = Vec::with_capacity(num_samples);
        for _ in 0..num_samples {
            let row: [f64; 3] = [rng.gen(), rng.gen(), rng.gen()];
            let mut label = if row[0] + row[1] > 1.0 { 1 } else { 0 };
            if row[2] > 0.8 {
                label = 2;
            }
            if rng.gen_bool(0.1) {
                label = rng.gen_range(0..3);
            }
            x.extend_from_slice(&row);
            y.push(label);
        }
        dataset(num_samples, 3, &x, y)
    }

    /// Exhaustive split search: partitions the whole set for every feature and threshold.
    fn exhaustive_split(data: &Dataset<f64, u32>) -> Option<(usize, f64)> {
        let labels = data.y.as_slice();
        let mut best = None;
        let mut best_gain = -1.0;
        for feature_index in 0..data.ncols() {
            let mut thresholds: Vec<f64> = data.x.column(feature_index).iter().copied().collect();
            thresholds.sort_by(|a, b| a.partial_cmp(b).unwrap());
            thresholds.dedup();
            for threshold in thresholds {
                let (left, right): (Vec<_>, Vec<_>) = (0..data.nrows())
                    .partition(|&row| data.x[(row, feature_index)] <= threshold);
                if left.is_empty() || right.is_empty() {
                    continue;
                }
                let left: Vec<u32> = left.iter().map(|&row| data.y[row]).collect();
                let right: Vec<u32> = right.iter().map(|&row| data.y[row]).collect();
                let gain = information_gain(labels, &left, &right);
                if gain > best_gain {
                    best_gain = gain;
                    best = Some((feature_index, threshold));
                }
            }
        }
        best
    }

    fn root_split(tree: &DecisionTreeClassifier<f64, u32>) -> Option<(usize, f64)> {
        match tree.root()? {
            TreeNode::Internal {
                feature_index,
                threshold,
                ..
            } => Some((*feature_index, *threshold)),
            TreeNode::Leaf { .. } => None,
        }
    }

    fn training_accuracy(tree: &DecisionTreeClassifier<f64, u32>, data: &Dataset<f64, u32>) -> f64 {
        let predictions = tree.predict(&data.x).unwrap();
        tree.accuracy(&data.y, &predictions).unwrap()
    }

    #[test]
    fn test_splits_between_two_classes() {
        let data = dataset(4, 1, &[0.0, 1.0, 2.0, 3.0], vec![0, 0, 1, 1]);
        let mut tree = DecisionTreeClassifier::with_params(Some(2), Some(10), None).unwrap();
        tree.fit(&data, Some(0)).unwrap();

        let expected = TreeNode::internal(0, 1.0, TreeNode::leaf(0), TreeNode::leaf(1));
        assert_eq!(tree.root(), Some(&expected));
        assert_eq!(
            tree.predict(&data.x).unwrap(),
            DVector::from_vec(vec![0, 0, 1, 1])
        );
    }

    #[test]
    fn test_single_class_gives_single_leaf() {
        let data = dataset(4, 2, &[0.0, 5.0, 1.0, 4.0, 2.0, 3.0, 3.0, 2.0], vec![1, 1, 1, 1]);
        let mut tree = DecisionTreeClassifier::new();
        tree.fit(&data, Some(3)).unwrap();

        assert_eq!(tree.root(), Some(&TreeNode::leaf(1)));
        let query = DMatrix::from_row_slice(4, 2, &[9.0, 9.0, -1.0, 0.0, 0.5, 0.5, 100.0, -3.0]);
        assert_eq!(
            tree.predict(&query).unwrap(),
            DVector::from_vec(vec![1, 1, 1, 1])
        );
    }

    #[test]
    fn test_zero_max_depth_gives_leaf() {
        let data = dataset(5, 1, &[0.0, 1.0, 2.0, 3.0, 4.0], vec![0, 1, 1, 0, 1]);
        let mut tree = DecisionTreeClassifier::with_params(None, Some(0), None).unwrap();
        tree.fit(&data, Some(1)).unwrap();

        assert_eq!(tree.root(), Some(&TreeNode::leaf(1)));
        assert_eq!(tree.depth(), Some(0));
    }

    #[test]
    fn test_min_samples_split_stops_growth() {
        let data = dataset(4, 1, &[0.0, 1.0, 2.0, 3.0], vec![0, 0, 1, 1]);
        let mut tree = DecisionTreeClassifier::with_params(Some(5), None, None).unwrap();
        tree.fit(&data, Some(1)).unwrap();

        assert_eq!(tree.root(), Some(&TreeNode::leaf(0)));
    }

    #[test]
    fn test_zero_gain_split_still_separates_xor() {
        let data = dataset(4, 2, &[0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 1.0], vec![0, 1, 1, 0]);
        let mut tree = DecisionTreeClassifier::new();
        tree.fit(&data, Some(11)).unwrap();

        assert_eq!(tree.predict(&data.x).unwrap(), data.y);
        assert_eq!(tree.depth(), Some(2));
        assert_eq!(tree.leaf_count(), Some(4));
    }

    #[test]
    fn test_inseparable_rows_force_a_leaf() {
        let data = dataset(3, 2, &[1.0, 2.0, 1.0, 2.0, 1.0, 2.0], vec![0, 1, 1]);
        let mut tree = DecisionTreeClassifier::new();
        tree.fit(&data, Some(5)).unwrap();

        assert_eq!(tree.root(), Some(&TreeNode::leaf(1)));
    }

    #[test]
    fn test_pure_leaves_reproduce_training_labels() {
        let data = dataset(
            6,
            2,
            &[1.0, 7.0, 2.0, 3.0, 3.0, 8.0, 4.0, 1.0, 5.0, 6.0, 6.0, 2.0],
            vec![2, 0, 2, 0, 1, 1],
        );
        let mut tree = DecisionTreeClassifier::new();
        tree.fit(&data, Some(9)).unwrap();

        assert_eq!(tree.predict(&data.x).unwrap(), data.y);
    }

    #[test]
    fn test_sparse_labels() {
        let data = dataset(4, 1, &[0.0, 1.0, 2.0, 3.0], vec![10, 10, 500_000, 500_000]);
        let mut tree = DecisionTreeClassifier::new();
        tree.fit(&data, Some(0)).unwrap();

        assert_eq!(tree.predict(&data.x).unwrap(), data.y);
    }

    #[test]
    fn test_max_depth_never_lowers_training_accuracy() {
        let data = noisy_dataset(17);
        let mut previous = 0.0;
        for max_depth in 0..8 {
            let mut tree = DecisionTreeClassifier::with_params(None, Some(max_depth), None).unwrap();
            tree.fit(&data, Some(2)).unwrap();
            let accuracy = training_accuracy(&tree, &data);
            assert!(accuracy >= previous, "depth {max_depth}: {accuracy} < {previous}");
            assert!(tree.depth().unwrap() <= max_depth);
            previous = accuracy;
        }
    }

    #[test]
    fn test_fit_then_predict_on_training_data() {
        let data = noisy_dataset(3);
        let mut tree = DecisionTreeClassifier::with_params(Some(4), Some(6), Some(2)).unwrap();
        tree.fit(&data, None).unwrap();

        let predictions = tree.predict(&data.x).unwrap();
        assert_eq!(predictions.len(), data.nrows());
    }

    #[test]
    fn test_seeded_fits_are_reproducible() {
        let data = noisy_dataset(23);
        let mut first = DecisionTreeClassifier::with_params(None, None, Some(1)).unwrap();
        let mut second = first.clone();

        first.fit(&data, Some(99)).unwrap();
        second
            .fit_with_rng(&data, &mut StdRng::seed_from_u64(99))
            .unwrap();
        assert_eq!(first.root(), second.root());
    }

    #[test]
    fn test_refit_replaces_tree() {
        let mut tree = DecisionTreeClassifier::new();
        tree.fit(&dataset(2, 1, &[0.0, 1.0], vec![4, 4]), Some(0))
            .unwrap();
        assert_eq!(tree.root(), Some(&TreeNode::leaf(4)));

        tree.fit(&dataset(2, 2, &[0.0, 0.0, 1.0, 1.0], vec![0, 1]), Some(0))
            .unwrap();
        assert_eq!(tree.n_features(), Some(2));
        assert!(!tree.root().unwrap().is_leaf());
    }

    #[test]
    fn test_fit_rejects_invalid_dataset_and_keeps_tree() {
        let mut tree = DecisionTreeClassifier::new();
        tree.fit(&dataset(2, 1, &[0.0, 1.0], vec![0, 1]), Some(0))
            .unwrap();
        let before = tree.root().cloned();

        let mismatched = dataset(3, 1, &[0.0, 1.0, 2.0], vec![0, 1]);
        assert_eq!(
            tree.fit(&mismatched, Some(0)),
            Err(TreeError::LengthMismatch {
                samples: 3,
                labels: 2
            })
        );
        let empty = Dataset::new(DMatrix::<f64>::zeros(0, 1), DVector::<u32>::zeros(0));
        assert_eq!(tree.fit(&empty, Some(0)), Err(TreeError::EmptyDataset));
        assert_eq!(tree.root().cloned(), before);
    }

    #[test]
    fn test_predict_before_fit() {
        let tree: DecisionTreeClassifier<f64, u32> = DecisionTreeClassifier::new();
        assert!(!tree.is_fitted());
        assert_eq!(tree.n_features(), None);
        assert_eq!(
            tree.predict(&DMatrix::zeros(1, 1)),
            Err(TreeError::NotFitted)
        );
    }

    #[test]
    fn test_predict_with_wrong_feature_count() {
        let data = dataset(4, 2, &[0.0, 1.0, 1.0, 0.0, 2.0, 1.0, 3.0, 0.0], vec![0, 0, 1, 1]);
        let mut tree = DecisionTreeClassifier::new();
        tree.fit(&data, Some(0)).unwrap();

        assert_eq!(
            tree.predict(&DMatrix::zeros(2, 1)),
            Err(TreeError::FeatureCountMismatch {
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_with_params_validation() {
        assert!(DecisionTreeClassifier::<f64, u32>::with_params(Some(1), None, None).is_err());
        assert!(DecisionTreeClassifier::<f64, u32>::with_params(None, None, Some(0)).is_err());

        let tree = DecisionTreeClassifier::<f64, u32>::with_params(None, None, Some(3)).unwrap();
        assert_eq!(tree.min_samples_split(), 2);
        assert_eq!(tree.max_depth(), 100);
        assert_eq!(tree.n_features_to_consider(), Some(3));
    }

    #[test]
    fn test_concurrent_predict() {
        let data = noisy_dataset(5);
        let mut tree = DecisionTreeClassifier::new();
        tree.fit(&data, Some(8)).unwrap();
        let expected = tree.predict(&data.x).unwrap();

        let results: Vec<_> = (0..8)
            .into_par_iter()
            .map(|_| tree.predict(&data.x).unwrap())
            .collect();
        assert!(results.iter().all(|predictions| *predictions == expected));
    }

    #[test]
    fn test_sorted_sweep_picks_exhaustive_best_split() {
        for seed in 0..12 {
            let data = noisy_dataset(seed);
            let mut tree = DecisionTreeClassifier::with_params(None, Some(1), None).unwrap();
            tree.fit(&data, Some(seed)).unwrap();
            assert_eq!(root_split(&tree), exhaustive_split(&data), "seed {seed}");
        }
    }

    #[test]
    fn test_sorted_sweep_handles_repeated_values() {
        let data = dataset(
            8,
            2,
            &[
                1.0, 0.0, 1.0, 0.0, 2.0, 1.0, 2.0, 1.0, 2.0, 0.0, 3.0, 1.0, 3.0, 0.0, 3.0, 1.0,
            ],
            vec![0, 0, 1, 0, 1, 1, 1, 1],
        );
        let mut tree = DecisionTreeClassifier::with_params(None, Some(1), None).unwrap();
        tree.fit(&data, Some(0)).unwrap();
        assert_eq!(root_split(&tree), exhaustive_split(&data));
    }

    #[test]
    fn test_long_alternating_chain() {
        let num_samples = 3000;
        let x: Vec<f64> = (0..num_samples).map(|i| i as f64).collect();
        let y: Vec<u32> = (0..num_samples).map(|i| (i % 2) as u32).collect();
        let data = dataset(num_samples, 1, &x, y);

        let mut tree = DecisionTreeClassifier::new();
        tree.fit(&data, Some(0)).unwrap();
        assert!(tree.depth().unwrap() <= 100);
        assert_eq!(tree.predict(&data.x).unwrap().len(), num_samples);
    }

    #[test]
    fn test_single_sampled_feature_can_force_a_leaf() {
        // column 0 is constant, column 1 separates the classes
        let data = dataset(4, 2, &[5.0, 0.0, 5.0, 1.0, 5.0, 2.0, 5.0, 3.0], vec![0, 0, 1, 1]);
        let split = TreeNode::internal(1, 1.0, TreeNode::leaf(0), TreeNode::leaf(1));

        let mut forced_leaves = 0;
        let mut splits = 0;
        for seed in 0..64 {
            let mut tree = DecisionTreeClassifier::with_params(None, None, Some(1)).unwrap();
            tree.fit(&data, Some(seed)).unwrap();
            match tree.root().unwrap() {
                TreeNode::Leaf { value } => {
                    assert_eq!(*value, 0);
                    forced_leaves += 1;
                }
                root => {
                    assert_eq!(*root, split);
                    splits += 1;
                }
            }
        }
        assert!(forced_leaves > 0);
        assert!(splits > 0);
    }

    #[test]
    fn test_single_sampled_feature_varies_with_seed() {
        let data = dataset(4, 2, &[0.0, 3.0, 1.0, 2.0, 2.0, 1.0, 3.0, 0.0], vec![0, 0, 1, 1]);
        let mut root_features = HashSet::new();
        for seed in 0..64 {
            let mut tree = DecisionTreeClassifier::with_params(None, None, Some(1)).unwrap();
            tree.fit(&data, Some(seed)).unwrap();
            let (feature_index, _) = root_split(&tree).unwrap();
            root_features.insert(feature_index);
        }
        assert_eq!(root_features, HashSet::from([0, 1]));
    }

    #[test]
    fn test_oversized_feature_count_uses_every_feature() {
        let data = noisy_dataset(31);
        for seed in 0..4 {
            let mut capped = DecisionTreeClassifier::with_params(None, None, Some(10)).unwrap();
            let mut all = DecisionTreeClassifier::new();
            capped.fit(&data, Some(seed)).unwrap();
            all.fit(&data, Some(seed)).unwrap();
            assert_eq!(capped.root(), all.root());
        }
    }
}

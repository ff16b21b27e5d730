//! # entropy-tree
//!
//! `entropy-tree` provides a binary decision tree classifier grown greedily by
//! information gain (Shannon entropy), with random feature subsampling at every split.
//!
//! ## Example Usage
//!
//! ```rust
//! use entropy_tree::data::dataset::Dataset;
//! use entropy_tree::trees::classifier::DecisionTreeClassifier;
//! use nalgebra::{DMatrix, DVector};
//!
//! let x = DMatrix::from_row_slice(4, 1, &[0.0, 1.0, 2.0, 3.0]);
//! let y = DVector::from_vec(vec![0u32, 0, 1, 1]);
//!
//! let dataset = Dataset::new(x, y);
//!
//! let mut model = DecisionTreeClassifier::with_params(Some(2), Some(10), None).unwrap();
//!
//! model.fit(&dataset, Some(42)).unwrap();
//!
//! let test_x = DMatrix::from_row_slice(2, 1, &[0.5, 2.5]);
//!
//! let predictions = model.predict(&test_x).unwrap();
//! assert_eq!(predictions, DVector::from_vec(vec![0, 1]));
//! ```

/// Dataset and data manipulation utilities
pub mod data;
/// Error type shared by the crate
pub mod error;
/// Functions for evaluating model performance
pub mod metrics;
/// Decision trees
pub mod trees;

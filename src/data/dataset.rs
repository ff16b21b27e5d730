use nalgebra::{DMatrix, DVector};
use num_traits::{FromPrimitive, Num, ToPrimitive};
use rand::seq::SliceRandom;
use rand::{rngs::StdRng, SeedableRng};
use std::cmp::PartialOrd;
use std::fmt::{Debug, Display};
use std::hash::Hash;

use crate::error::TreeError;

pub trait DataValue:
    Debug + Clone + Copy + Num + FromPrimitive + ToPrimitive + Send + Sync + Display + 'static
{
}

impl<T> DataValue for T where
    T: Debug + Clone + Copy + Num + FromPrimitive + ToPrimitive + Send + Sync + Display + 'static
{
}

/// Values that can be ordered and compared against a split threshold.
pub trait Number: DataValue + PartialOrd {}
impl<T> Number for T where T: DataValue + PartialOrd {}

/// Discrete values usable as class labels.
pub trait WholeNumber: Number + Eq + Hash {}
impl<T> WholeNumber for T where T: Number + Eq + Hash {}

/// A feature matrix paired with its label vector.
///
/// Rows of `x` are samples and columns are features; `y[i]` is the label of row `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset<XT: Number, YT: WholeNumber> {
    pub x: DMatrix<XT>,
    pub y: DVector<YT>,
}

impl<XT: Number, YT: WholeNumber> Dataset<XT, YT> {
    pub fn new(x: DMatrix<XT>, y: DVector<YT>) -> Self {
        Self { x, y }
    }

    pub fn into_parts(&self) -> (&DMatrix<XT>, &DVector<YT>) {
        (&self.x, &self.y)
    }

    pub fn is_not_empty(&self) -> bool {
        !(self.x.is_empty() || self.y.is_empty())
    }

    pub fn nrows(&self) -> usize {
        self.x.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.x.ncols()
    }

    /// Checks that the dataset can be trained on.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no samples, no features, or if the number of
    /// labels differs from the number of feature rows.
    pub fn validate(&self) -> Result<(), TreeError> {
        if self.x.nrows() != self.y.len() {
            return Err(TreeError::LengthMismatch {
                samples: self.x.nrows(),
                labels: self.y.len(),
            });
        }
        if self.x.ncols() == 0 {
            return Err(TreeError::NoFeatures);
        }
        if !self.is_not_empty() {
            return Err(TreeError::EmptyDataset);
        }
        Ok(())
    }

    /// Builds a new dataset from the given rows, in the given order.
    pub fn subset(&self, indices: &[usize]) -> Self {
        Self::new(self.x.select_rows(indices), self.y.select_rows(indices))
    }

    /// Shuffles the rows and splits them into a train and a test dataset.
    ///
    /// # Arguments
    ///
    /// * `train_size` - Fraction of rows that go to the train dataset, in `[0.0, 1.0]`.
    /// * `seed` - Seed for the shuffle; `None` draws one from the OS.
    ///
    /// # Errors
    ///
    /// Returns an error if `train_size` is outside `[0.0, 1.0]`.
    pub fn train_test_split(
        &self,
        train_size: f64,
        seed: Option<u64>,
    ) -> Result<(Self, Self), TreeError> {
        if !(0.0..=1.0).contains(&train_size) {
            return Err(TreeError::InvalidParameter(
                "Train size should be between 0.0 and 1.0".into(),
            ));
        }
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut indices = (0..self.x.nrows()).collect::<Vec<_>>();
        indices.shuffle(&mut rng);
        let train_size = (self.x.nrows() as f64 * train_size).floor() as usize;

        Ok((
            self.subset(&indices[..train_size]),
            self.subset(&indices[train_size..]),
        ))
    }
}

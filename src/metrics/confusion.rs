use std::{cmp::Ordering, collections::HashMap};

use nalgebra::{DMatrix, DVector};

use crate::{data::dataset::WholeNumber, error::TreeError};

type ConfusionMatrix = DMatrix<usize>;

pub trait ClassificationMetrics<T: WholeNumber> {
    /// Computes the confusion matrix based on the true labels and predicted labels.
    ///
    /// Rows are true classes and columns are predicted classes, both sorted ascending
    /// over every class seen in either vector.
    ///
    /// # Errors
    ///
    /// Returns an error if the vectors have different lengths.
    fn confusion_matrix(
        &self,
        y_true: &DVector<T>,
        y_pred: &DVector<T>,
    ) -> Result<ConfusionMatrix, TreeError> {
        if y_true.len() != y_pred.len() {
            return Err(TreeError::LengthMismatch {
                samples: y_true.len(),
                labels: y_pred.len(),
            });
        }

        let mut classes: Vec<T> = y_true.iter().chain(y_pred.iter()).copied().collect();
        classes.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        classes.dedup();
        let positions: HashMap<T, usize> = classes
            .iter()
            .enumerate()
            .map(|(position, class)| (*class, position))
            .collect();

        let mut matrix = DMatrix::zeros(classes.len(), classes.len());
        for (y_t, y_p) in y_true.iter().zip(y_pred.iter()) {
            matrix[(positions[y_t], positions[y_p])] += 1;
        }

        Ok(matrix)
    }

    /// Fraction of predictions that match the true labels.
    ///
    /// # Errors
    ///
    /// Returns an error if the vectors have different lengths or are empty.
    fn accuracy(&self, y_true: &DVector<T>, y_pred: &DVector<T>) -> Result<f64, TreeError> {
        if y_true.is_empty() {
            return Err(TreeError::EmptyDataset);
        }
        let matrix = self.confusion_matrix(y_true, y_pred)?;
        let correct: usize = matrix.diagonal().iter().sum();

        Ok(correct as f64 / y_true.len() as f64)
    }
}

use csv::ReaderBuilder;
use entropy_tree::data::dataset::Dataset;
use entropy_tree::metrics::confusion::ClassificationMetrics;
use entropy_tree::trees::classifier::DecisionTreeClassifier;
use nalgebra::{DMatrix, DVector};
use std::collections::HashMap;
use std::env;
use std::error::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: train-tree <file.csv> [--no-header] [--max-depth N] [--features N] [--seed N]";

struct Options {
    path: String,
    header: bool,
    max_depth: Option<usize>,
    n_features_to_consider: Option<usize>,
    seed: Option<u64>,
}

fn parse_options() -> Result<Options, Box<dyn Error>> {
    let mut args = env::args().skip(1);
    let mut options = Options {
        path: String::new(),
        header: true,
        max_depth: None,
        n_features_to_consider: None,
        seed: None,
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--no-header" => options.header = false,
            "--max-depth" => options.max_depth = Some(args.next().ok_or(USAGE)?.parse()?),
            "--features" => {
                options.n_features_to_consider = Some(args.next().ok_or(USAGE)?.parse()?)
            }
            "--seed" => options.seed = Some(args.next().ok_or(USAGE)?.parse()?),
            _ if options.path.is_empty() => options.path = arg,
            _ => return Err(USAGE.into()),
        }
    }
    if options.path.is_empty() {
        return Err(USAGE.into());
    }
    Ok(options)
}

/// Reads a CSV whose last column is the class; classes are numbered in order of first appearance.
fn read_file_classification(
    file_path: &str,
    header: bool,
) -> Result<(Dataset<f64, u32>, Vec<String>), Box<dyn Error>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(header)
        .from_path(file_path)?;
    let mut features = Vec::new();
    let mut labels = Vec::new();
    let mut label_map = HashMap::new();
    let mut label_names = Vec::new();
    let mut dimension = None;

    for result in reader.records() {
        let record = result?;
        let (label, values) = record
            .iter()
            .collect::<Vec<_>>()
            .split_last()
            .map(|(label, values)| (label.to_string(), values.to_vec()))
            .ok_or("Empty record")?;

        let expected = *dimension.get_or_insert(values.len());
        if values.len() != expected {
            return Err(format!(
                "Record {} has {} features, expected {}",
                labels.len() + 1,
                values.len(),
                expected
            )
            .into());
        }
        for value in values {
            features.push(value.trim().parse::<f64>()?);
        }

        let label_id = *label_map.entry(label.clone()).or_insert_with(|| {
            label_names.push(label);
            label_names.len() as u32 - 1
        });
        labels.push(label_id);
    }

    let num_samples = labels.len();
    let feature_matrix = DMatrix::from_row_slice(num_samples, dimension.unwrap_or(0), &features);
    Ok((
        Dataset::new(feature_matrix, DVector::from_vec(labels)),
        label_names,
    ))
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let options = parse_options()?;
    let (dataset, label_names) = read_file_classification(&options.path, options.header)?;
    info!(
        samples = dataset.nrows(),
        features = dataset.ncols(),
        classes = label_names.len(),
        "loaded dataset"
    );

    let (train_dataset, test_dataset) = dataset.train_test_split(0.8, options.seed)?;

    let mut classifier = DecisionTreeClassifier::with_params(
        None,
        options.max_depth,
        options.n_features_to_consider,
    )?;
    classifier.fit(&train_dataset, options.seed)?;
    info!(
        depth = ?classifier.depth(),
        leaves = ?classifier.leaf_count(),
        "trained decision tree"
    );

    let predictions = classifier.predict(&test_dataset.x)?;
    let accuracy = classifier.accuracy(&test_dataset.y, &predictions)?;
    println!("Accuracy: {:.2}%", accuracy * 100.0);
    Ok(())
}

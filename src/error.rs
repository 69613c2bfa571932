use thiserror::Error;

/// Errors raised while building a [`Problem`](crate::Problem).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProblemError {
    #[error("problem has no rows or no features")]
    Empty,
    #[error("{rows} rows but {labels} labels")]
    LabelCountMismatch { rows: usize, labels: usize },
    #[error("label {label} of row {row} is neither +1 nor -1")]
    InvalidLabel { row: usize, label: f64 },
    #[error("feature index {index} of row {row} is outside 1..={n_features}")]
    FeatureIndexOutOfRange {
        row: usize,
        index: usize,
        n_features: usize,
    },
    #[error("row {row} is not strictly ascending at position {position}")]
    UnsortedRow { row: usize, position: usize },
    #[error("feature {index} of row {row} has a non-finite value")]
    NonFiniteValue { row: usize, index: usize },
}

/// Errors raised while assembling a [`Model`](crate::Model).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("model has no weights")]
    EmptyWeights,
    #[error("model needs at least two labels, got {0}")]
    TooFewLabels(usize),
    #[error("model uses a bias feature but has no weight left for it")]
    MissingBiasWeight,
}

use std::fmt;

use crate::error::ModelError;
use crate::function::LossKind;
use crate::problem::Feature;

/// Which objective produced a model's weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SolverType {
    /// L2-regularized squared-hinge SVM.
    L2rL2lossSvc,
    /// L2-regularized logistic regression.
    L2rLr,
}

impl From<LossKind> for SolverType {
    fn from(loss: LossKind) -> Self {
        match loss {
            LossKind::SquaredHinge => Self::L2rL2lossSvc,
            LossKind::Logistic => Self::L2rLr,
        }
    }
}

impl fmt::Display for SolverType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::L2rL2lossSvc => f.write_str("L2R_L2LOSS_SVC"),
            Self::L2rLr => f.write_str("L2R_LR"),
        }
    }
}

/// Weights of a trained linear classifier.
///
/// With a bias feature (`bias >= 0`) the last weight belongs to it.
#[derive(Clone, Debug, PartialEq)]
pub struct Model {
    pub(crate) ws: Vec<f64>,
    pub(crate) bias: f64,
    pub(crate) labels: Vec<i32>,
    pub(crate) solver_type: SolverType,
}

impl Model {
    /// `labels[0]` is the class on the positive side of the decision value.
    pub fn new(
        ws: Vec<f64>,
        bias: f64,
        labels: Vec<i32>,
        solver_type: SolverType,
    ) -> Result<Self, ModelError> {
        if ws.is_empty() {
            return Err(ModelError::EmptyWeights);
        }
        if labels.len() < 2 {
            return Err(ModelError::TooFewLabels(labels.len()));
        }
        if bias >= 0.0 && ws.len() < 2 {
            return Err(ModelError::MissingBiasWeight);
        }
        Ok(Self {
            ws,
            bias,
            labels,
            solver_type,
        })
    }

    pub fn weights(&self) -> &[f64] {
        &self.ws
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn labels(&self) -> &[i32] {
        &self.labels
    }

    pub fn solver_type(&self) -> SolverType {
        self.solver_type
    }

    /// Number of real features, the bias feature excluded.
    pub fn n_features(&self) -> usize {
        if self.bias >= 0.0 {
            self.ws.len() - 1
        } else {
            self.ws.len()
        }
    }

    /// Weight of the 1-based feature `index`.
    pub fn get_weight(&self, index: usize) -> Option<f64> {
        if index == 0 || index > self.n_features() {
            return None;
        }
        self.ws.get(index - 1).cloned()
    }

    pub fn bias_weight(&self) -> Option<f64> {
        if self.bias >= 0.0 {
            self.ws.last().cloned()
        } else {
            None
        }
    }

    /// `wᵀx`, plus the bias term. Features unknown to the model are skipped.
    pub fn decision_value(&self, x: &[Feature]) -> f64 {
        let n = self.n_features();
        let mut score: f64 = x
            .iter()
            .filter(|feat| feat.index >= 1 && feat.index <= n)
            .map(|feat| self.ws[feat.index - 1] * feat.value)
            .sum();
        if let Some(b) = self.bias_weight() {
            score += b * self.bias;
        }
        score
    }

    pub fn predict(&self, x: &[Feature]) -> i32 {
        if self.decision_value(x) > 0.0 {
            self.labels[0]
        } else {
            self.labels[1]
        }
    }
}

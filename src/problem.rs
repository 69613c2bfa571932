use crate::error::ProblemError;

/// A nonzero entry of a sparse row. `index` is 1-based.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Feature {
    pub(crate) index: usize,
    pub(crate) value: f64,
}

impl Feature {
    pub const fn new(index: usize, value: f64) -> Self {
        Self { index, value }
    }

    pub const fn index(&self) -> usize {
        self.index
    }

    pub const fn value(&self) -> f64 {
        self.value
    }
}

/// Read-only training set: `l` sparse rows over `n` features and their `±1` labels.
///
/// When built with `bias >= 0`, every row carries an extra feature at index `n`
/// with value `bias`, and `n` counts it.
#[derive(Clone, Debug)]
pub struct Problem {
    pub(crate) n: usize,
    pub(crate) xs: Vec<Vec<Feature>>,
    pub(crate) ys: Vec<f64>,
    pub(crate) bias: f64,
}

impl Problem {
    /// Builds a problem from rows whose indices lie in `1..=n_features`.
    ///
    /// Rows must be strictly ascending by index and labels must be `+1` or `-1`;
    /// the objective functions rely on both without checking again.
    pub fn new(
        mut xs: Vec<Vec<Feature>>,
        ys: Vec<f64>,
        n_features: usize,
        bias: f64,
    ) -> Result<Self, ProblemError> {
        let n = if bias >= 0.0 { n_features + 1 } else { n_features };
        if xs.is_empty() || n == 0 {
            return Err(ProblemError::Empty);
        }
        if xs.len() != ys.len() {
            return Err(ProblemError::LabelCountMismatch {
                rows: xs.len(),
                labels: ys.len(),
            });
        }
        for (row, (x, &y)) in xs.iter().zip(&ys).enumerate() {
            if y != 1.0 && y != -1.0 {
                return Err(ProblemError::InvalidLabel { row, label: y });
            }
            Self::validate_row(row, x, n_features)?;
        }

        if bias >= 0.0 {
            if bias == 0.0 {
                log::warn!("bias feature of value 0 adds a weight the loss cannot move");
            }
            for x in &mut xs {
                x.push(Feature::new(n, bias));
            }
        }

        let prob = Self { n, xs, ys, bias };
        log::debug!(
            "problem: {} rows, {} features, {} nonzeros, bias {}",
            prob.l(),
            prob.n,
            prob.nnz(),
            prob.bias
        );
        Ok(prob)
    }

    fn validate_row(row: usize, x: &[Feature], n_features: usize) -> Result<(), ProblemError> {
        let mut prev = 0;
        for (position, feat) in x.iter().enumerate() {
            if feat.index == 0 || feat.index > n_features {
                return Err(ProblemError::FeatureIndexOutOfRange {
                    row,
                    index: feat.index,
                    n_features,
                });
            }
            if feat.index <= prev {
                return Err(ProblemError::UnsortedRow { row, position });
            }
            if !feat.value.is_finite() {
                return Err(ProblemError::NonFiniteValue {
                    row,
                    index: feat.index,
                });
            }
            prev = feat.index;
        }
        Ok(())
    }

    /// Number of rows.
    pub fn l(&self) -> usize {
        self.xs.len()
    }

    /// Number of features, bias feature included.
    pub fn n(&self) -> usize {
        self.n
    }

    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    pub fn rows(&self) -> &[Vec<Feature>] {
        &self.xs
    }

    pub fn row(&self, i: usize) -> &[Feature] {
        &self.xs[i]
    }

    /// Bias feature value, negative when no bias feature was appended.
    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// Total number of stored nonzeros.
    pub fn nnz(&self) -> usize {
        self.xs.iter().map(Vec::len).sum()
    }

    /// `xv = X v`.
    pub fn xv(&self, v: &[f64], xv: &mut [f64]) {
        for (out, x) in xv.iter_mut().zip(&self.xs) {
            *out = dot(x, v);
        }
    }

    /// `xv[k] = (X v)[rows[k]]`, visiting only the listed rows.
    pub fn sub_xv(&self, rows: &[usize], v: &[f64], xv: &mut [f64]) {
        for (out, &i) in xv.iter_mut().zip(rows) {
            *out = dot(&self.xs[i], v);
        }
    }

    /// `xtv = Xᵀ v`.
    pub fn xtv(&self, v: &[f64], xtv: &mut [f64]) {
        xtv.fill(0.0);
        for (x, &vi) in self.xs.iter().zip(v) {
            scatter(x, vi, xtv);
        }
    }

    /// `xtv = X_Iᵀ v` where `I = rows` and `v[k]` belongs to row `rows[k]`.
    pub fn sub_xtv(&self, rows: &[usize], v: &[f64], xtv: &mut [f64]) {
        xtv.fill(0.0);
        for (&i, &vk) in rows.iter().zip(v) {
            scatter(&self.xs[i], vk, xtv);
        }
    }
}

#[inline]
fn dot(x: &[Feature], v: &[f64]) -> f64 {
    x.iter().map(|feat| feat.value * v[feat.index - 1]).sum()
}

#[inline]
fn scatter(x: &[Feature], scale: f64, out: &mut [f64]) {
    for feat in x {
        out[feat.index - 1] += scale * feat.value;
    }
}

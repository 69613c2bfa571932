use std::fmt;

use crate::l2r_l2loss_svc_fun::L2rL2lossSvcFun;
use crate::l2r_lr_fun::L2rLrFun;
use crate::problem::Problem;

/// Evaluation contract consumed by a trust-region Newton driver.
///
/// Calls must follow `fun(w)`, `grad(w)` with the same `w`, then any number of
/// `hv(s)`. `grad` reuses margins cached by `fun`, and `hv` reuses the curvature
/// state cached by `grad`. All slices must have length
/// [`number_of_variables`](Self::number_of_variables).
pub trait TronFunction {
    fn number_of_variables(&self) -> usize;

    /// Objective value at `w`.
    fn fun(&mut self, w: &[f64]) -> f64;

    /// Writes the gradient at `w` into `g`.
    fn grad(&mut self, w: &[f64], g: &mut [f64]);

    /// Writes the Hessian-vector product `H s` into `hs`, with `H` taken at the
    /// `w` of the last `grad` call.
    fn hv(&mut self, s: &[f64], hs: &mut [f64]);
}

/// Loss paired with the L2 regularizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LossKind {
    /// `max(0, 1 - y wᵀx)²`
    SquaredHinge,
    /// `log(1 + exp(-y wᵀx))`
    Logistic,
}

impl fmt::Display for LossKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SquaredHinge => f.write_str("squared hinge"),
            Self::Logistic => f.write_str("logistic"),
        }
    }
}

/// One of the two objectives, chosen when it is built.
pub enum Objective<'a> {
    SquaredHinge(L2rL2lossSvcFun<'a>),
    Logistic(L2rLrFun<'a>),
}

impl<'a> Objective<'a> {
    /// `cost_p` weighs rows labelled `+1`, `cost_n` rows labelled `-1`.
    pub fn new(prob: &'a Problem, cost_p: f64, cost_n: f64, loss: LossKind) -> Self {
        log::debug!(
            "objective: {} loss, cost_p {}, cost_n {}, {} variables",
            loss,
            cost_p,
            cost_n,
            prob.n()
        );
        match loss {
            LossKind::SquaredHinge => Self::SquaredHinge(L2rL2lossSvcFun::new(prob, cost_p, cost_n)),
            LossKind::Logistic => Self::Logistic(L2rLrFun::new(prob, cost_p, cost_n)),
        }
    }

    pub fn loss(&self) -> LossKind {
        match self {
            Self::SquaredHinge(_) => LossKind::SquaredHinge,
            Self::Logistic(_) => LossKind::Logistic,
        }
    }
}

impl TronFunction for Objective<'_> {
    fn number_of_variables(&self) -> usize {
        match self {
            Self::SquaredHinge(f) => f.number_of_variables(),
            Self::Logistic(f) => f.number_of_variables(),
        }
    }

    fn fun(&mut self, w: &[f64]) -> f64 {
        let f = match self {
            Self::SquaredHinge(f) => f.fun(w),
            Self::Logistic(f) => f.fun(w),
        };
        log::trace!("{} objective: f = {}", self.loss(), f);
        f
    }

    fn grad(&mut self, w: &[f64], g: &mut [f64]) {
        match self {
            Self::SquaredHinge(f) => f.grad(w, g),
            Self::Logistic(f) => f.grad(w, g),
        }
    }

    fn hv(&mut self, s: &[f64], hs: &mut [f64]) {
        match self {
            Self::SquaredHinge(f) => f.hv(s, hs),
            Self::Logistic(f) => f.hv(s, hs),
        }
    }
}

/// Costs per row: `cost_p` for `+1` labels, `cost_n` otherwise.
pub(crate) fn row_costs(prob: &Problem, cost_p: f64, cost_n: f64) -> Vec<f64> {
    prob.ys
        .iter()
        .map(|&y| if y == 1.0 { cost_p } else { cost_n })
        .collect()
}

#[inline]
pub(crate) fn half_squared_norm(w: &[f64]) -> f64 {
    0.5 * w.iter().map(|wi| wi * wi).sum::<f64>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::Feature;

    fn prob() -> Problem {
        Problem::new(
            vec![vec![Feature::new(1, 1.0)], vec![Feature::new(2, 1.0)]],
            vec![1.0, -1.0],
            2,
            -1.0,
        )
        .unwrap()
    }

    #[test]
    fn test_objective_selects_loss() {
        let prob = prob();
        let hinge = Objective::new(&prob, 1.0, 1.0, LossKind::SquaredHinge);
        assert_eq!(hinge.loss(), LossKind::SquaredHinge);
        assert!(matches!(hinge, Objective::SquaredHinge(_)));

        let lr = Objective::new(&prob, 1.0, 1.0, LossKind::Logistic);
        assert_eq!(lr.loss(), LossKind::Logistic);
        assert_eq!(lr.number_of_variables(), 2);
    }

    #[test]
    fn test_row_costs() {
        let prob = prob();
        assert_eq!(row_costs(&prob, 2.0, 0.5), vec![2.0, 0.5]);
    }

    #[test]
    fn test_dispatch_matches_inner_function() {
        let prob = prob();
        let mut obj = Objective::new(&prob, 1.0, 1.0, LossKind::Logistic);
        let mut inner = L2rLrFun::new(&prob, 1.0, 1.0);
        let w = [0.3, -0.7];
        assert_eq!(obj.fun(&w), inner.fun(&w));

        let mut g_obj = [0.0; 2];
        let mut g_inner = [0.0; 2];
        obj.grad(&w, &mut g_obj);
        inner.grad(&w, &mut g_inner);
        assert_eq!(g_obj, g_inner);
    }
}

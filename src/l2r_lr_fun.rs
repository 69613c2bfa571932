use crate::function::{half_squared_norm, row_costs, TronFunction};
use crate::problem::Problem;

/// L2-regularized logistic regression objective:
///
/// `f(w) = ½ wᵀw + Σᵢ Cᵢ log(1 + exp(-yᵢ wᵀxᵢ))`
pub struct L2rLrFun<'a> {
    prob: &'a Problem,
    c: Vec<f64>,
    // `X w` after `fun`, per-row gradient weights after `grad`.
    z: Vec<f64>,
    // σ(yᵢ wᵀxᵢ) (1 - σ(yᵢ wᵀxᵢ)) from the last `grad`.
    d: Vec<f64>,
    wa: Vec<f64>,
}

impl<'a> L2rLrFun<'a> {
    pub fn new(prob: &'a Problem, cost_p: f64, cost_n: f64) -> Self {
        let l = prob.l();
        Self {
            prob,
            c: row_costs(prob, cost_p, cost_n),
            z: vec![0.0; l],
            d: vec![0.0; l],
            wa: vec![0.0; l],
        }
    }
}

/// `log(1 + exp(-t))` without overflowing for large `|t|`.
#[inline]
fn log1p_exp_neg(t: f64) -> f64 {
    if t >= 0.0 {
        (-t).exp().ln_1p()
    } else {
        -t + t.exp().ln_1p()
    }
}

impl TronFunction for L2rLrFun<'_> {
    fn number_of_variables(&self) -> usize {
        self.prob.n()
    }

    fn fun(&mut self, w: &[f64]) -> f64 {
        self.prob.xv(w, &mut self.z);

        let loss: f64 = self
            .z
            .iter()
            .zip(&self.prob.ys)
            .zip(&self.c)
            .map(|((&zi, &yi), &ci)| ci * log1p_exp_neg(yi * zi))
            .sum();
        loss + half_squared_norm(w)
    }

    fn grad(&mut self, w: &[f64], g: &mut [f64]) {
        for (((zi, di), &yi), &ci) in self
            .z
            .iter_mut()
            .zip(&mut self.d)
            .zip(&self.prob.ys)
            .zip(&self.c)
        {
            let p = 1.0 / (1.0 + (-yi * *zi).exp());
            *di = p * (1.0 - p);
            *zi = ci * (p - 1.0) * yi;
        }

        self.prob.xtv(&self.z, g);
        for (gi, &wi) in g.iter_mut().zip(w) {
            *gi += wi;
        }
    }

    fn hv(&mut self, s: &[f64], hs: &mut [f64]) {
        self.prob.xv(s, &mut self.wa);
        for ((wi, &ci), &di) in self.wa.iter_mut().zip(&self.c).zip(&self.d) {
            *wi *= ci * di;
        }

        self.prob.xtv(&self.wa, hs);
        for (hi, &si) in hs.iter_mut().zip(s) {
            *hi += si;
        }
    }
}

use crate::function::{half_squared_norm, row_costs, TronFunction};
use crate::problem::Problem;

/// L2-regularized squared-hinge objective of a linear SVM:
///
/// `f(w) = ½ wᵀw + Σᵢ Cᵢ max(0, 1 - yᵢ wᵀxᵢ)²`
///
/// Only rows inside the margin (the active set) contribute to the gradient and
/// the Hessian, so `grad` and `hv` touch those rows alone.
pub struct L2rL2lossSvcFun<'a> {
    prob: &'a Problem,
    c: Vec<f64>,
    // Margins after `fun`, active-set residuals after `grad`.
    z: Vec<f64>,
    active: Vec<usize>,
    wa: Vec<f64>,
}

impl<'a> L2rL2lossSvcFun<'a> {
    pub fn new(prob: &'a Problem, cost_p: f64, cost_n: f64) -> Self {
        let l = prob.l();
        Self {
            prob,
            c: row_costs(prob, cost_p, cost_n),
            z: vec![0.0; l],
            active: Vec::with_capacity(l),
            wa: vec![0.0; l],
        }
    }

    /// Rows found inside the margin by the last `grad` call.
    pub fn active_set(&self) -> &[usize] {
        &self.active
    }
}

impl TronFunction for L2rL2lossSvcFun<'_> {
    fn number_of_variables(&self) -> usize {
        self.prob.n()
    }

    fn fun(&mut self, w: &[f64]) -> f64 {
        self.prob.xv(w, &mut self.z);

        let mut loss = 0.0;
        for ((zi, &yi), &ci) in self.z.iter_mut().zip(&self.prob.ys).zip(&self.c) {
            *zi *= yi;
            let d = 1.0 - *zi;
            if d > 0.0 {
                loss += ci * d * d;
            }
        }
        loss + half_squared_norm(w)
    }

    fn grad(&mut self, w: &[f64], g: &mut [f64]) {
        let ys = &self.prob.ys;

        // Compacts residuals of the active rows into the front of `z`; the
        // write position never passes the read position.
        self.active.clear();
        for i in 0..ys.len() {
            if self.z[i] < 1.0 {
                let k = self.active.len();
                self.z[k] = self.c[i] * ys[i] * (self.z[i] - 1.0);
                self.active.push(i);
            }
        }
        log::trace!("squared hinge: {} of {} rows active", self.active.len(), ys.len());

        let size = self.active.len();
        self.prob.sub_xtv(&self.active, &self.z[..size], g);
        for (gi, &wi) in g.iter_mut().zip(w) {
            *gi = wi + 2.0 * *gi;
        }
    }

    fn hv(&mut self, s: &[f64], hs: &mut [f64]) {
        let wa = &mut self.wa[..self.active.len()];
        self.prob.sub_xv(&self.active, s, wa);
        for (wk, &i) in wa.iter_mut().zip(&self.active) {
            *wk *= self.c[i];
        }

        self.prob.sub_xtv(&self.active, wa, hs);
        for (hi, &si) in hs.iter_mut().zip(s) {
            *hi = si + 2.0 * *hi;
        }
    }
}

//! Objective functions for training L2-regularized linear classifiers with a
//! trust-region Newton method.
//!
//! [`Objective`] supplies the function value, gradient and Hessian-vector
//! products of either the squared-hinge SVM loss or the logistic loss over a
//! sparse [`Problem`]. The optimizer loop itself is left to the caller, which
//! drives the objective through [`TronFunction`] and finally builds a [`Model`].

mod error;
mod function;
mod l2r_l2loss_svc_fun;
mod l2r_lr_fun;
mod model;
mod problem;

pub use crate::error::{ModelError, ProblemError};
pub use crate::function::{LossKind, Objective, TronFunction};
pub use crate::l2r_l2loss_svc_fun::L2rL2lossSvcFun;
pub use crate::l2r_lr_fun::L2rLrFun;
pub use crate::model::{Model, SolverType};
pub use crate::problem::{Feature, Problem};

//! Solvers that minimize a scalar function.
//!
//! # Solvers
//!
//! - [`quadratic_fit`]: parabolic interpolation over a three-point bracket,
//!   recording the full iteration trace
//! - [`rmsprop`]: gradient descent with a per-coordinate adaptive step, using
//!   central-difference gradients

pub mod quadratic_fit;
pub mod rmsprop;

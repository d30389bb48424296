//! Solvers that find roots of a scalar function.
//!
//! # Solvers
//!
//! - [`secant`]: derivative-free root finding from two starting guesses, with
//!   [`secant::stationary_point`] to locate extrema as roots of the derivative

pub mod secant;

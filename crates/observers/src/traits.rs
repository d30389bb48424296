//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasResidual`]: events that carry a residual value
//! - [`HasObjective`]: events that carry an objective value
//! - [`HasFiniteState`]: events that can report numeric breakdown
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use stencil_core::Observer;
//! use stencil_observers::traits::{CanStopEarly, HasResidual};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//!     min_iters: usize,
//!     iter: usize,
//! }
//!
//! impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         self.iter += 1;
//!         if self.iter >= self.min_iters && event.residual().abs() < self.tolerance {
//!             return Some(A::stop_early());
//!         }
//!         None
//!     }
//! }
//! ```

use stencil_solvers::{
    equation::secant,
    optimization::{quadratic_fit, rmsprop},
};

/// An event that carries a residual value.
pub trait HasResidual {
    /// Returns the residual for this event.
    fn residual(&self) -> f64;
}

/// An event that carries an objective value.
pub trait HasObjective {
    /// Returns the objective for this event.
    ///
    /// Returns `f64::NAN` when the solver skipped the evaluation.
    fn objective(&self) -> f64;
}

/// An event whose numeric state may have broken down.
pub trait HasFiniteState {
    /// Returns `true` if every value the event reports is finite.
    fn is_finite(&self) -> bool;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- secant::Event ---

impl HasResidual for secant::Event {
    fn residual(&self) -> f64 {
        self.residual
    }
}

impl HasFiniteState for secant::Event {
    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.residual.is_finite()
    }
}

// --- quadratic_fit::Event ---

impl HasObjective for quadratic_fit::Event<'_> {
    fn objective(&self) -> f64 {
        self.value
    }
}

impl HasFiniteState for quadratic_fit::Event<'_> {
    fn is_finite(&self) -> bool {
        quadratic_fit::Event::is_finite(self)
    }
}

// --- rmsprop::Event ---

impl HasObjective for rmsprop::Event<'_> {
    fn objective(&self) -> f64 {
        self.objective
    }
}

impl HasFiniteState for rmsprop::Event<'_> {
    fn is_finite(&self) -> bool {
        self.objective.is_finite()
            && self.grad_norm.is_finite()
            && self.x.iter().all(|v| v.is_finite())
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for secant::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for quadratic_fit::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for rmsprop::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

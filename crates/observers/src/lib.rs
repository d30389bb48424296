//! Reusable observers for the Stencil solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the iterative solvers in `stencil-solvers`.
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for cross-solver observers
//!   ([`HasResidual`], [`HasObjective`], [`HasFiniteState`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`NonFiniteGuard`]: stops a solver once its state turns non-finite
//! - [`EventLogger`]: forwards every event to [`tracing`]
//!
//! [`Observer`]: stencil_core::Observer
//! [`HasResidual`]: traits::HasResidual
//! [`HasObjective`]: traits::HasObjective
//! [`HasFiniteState`]: traits::HasFiniteState
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod guard;
mod log;

pub use guard::NonFiniteGuard;
pub use log::EventLogger;

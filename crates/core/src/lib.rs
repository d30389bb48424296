//! Core traits and types for Stencil.
//!
//! This crate defines the shared abstractions that the numeric engines and
//! observers build on:
//!
//! - [`Evaluator`]: the capability interface of an expression backend
//!   (parse, evaluate, differentiate symbolically)
//! - [`Expression`]: a parsed scalar function bound to its evaluator
//! - [`Bindings`]: variable name to value assignments used for evaluation
//! - [`Observer`]: receives solver events and optionally returns control actions
//!
//! # Features
//!
//! - `exmex` (default): enables [`ExmexEvaluator`], an [`Evaluator`] backed by
//!   the [`exmex`](https://docs.rs/exmex) crate.

mod evaluator;
mod expression;
mod observer;

#[cfg(feature = "exmex")]
mod exmex_evaluator;

pub use evaluator::{Bindings, Evaluator};
pub use expression::Expression;
pub use observer::Observer;

#[cfg(feature = "exmex")]
pub use exmex_evaluator::{ExmexError, ExmexEvaluator};

//! # mathtools
//!
//! A small collection of math helper functions.
//!
//! This crate provides arithmetic primitives, a seeded random-number
//! helper whose seed is derived from its own inputs, and the example
//! application that chains them. It doubles as a documentation
//! exercise: every public item carries runnable examples.
//!
//! ## Modules
//!
//! - [`arith`] — Arithmetic primitives (`add`, `mul`)
//! - [`random`] — Seed derivation and seeded uniform sampling
//! - [`demo`] — The example application behind the `mathtools` binary
//!
//! ## Design Philosophy
//!
//! - **Determinism first**: all randomness flows through a seed derived
//!   from caller inputs; identical inputs yield identical samples
//! - **IEEE transparency**: the arithmetic primitives add no validation
//!   of their own; NaN and infinity propagate unmodified
//! - **Property-based testing**: the public contracts are verified via
//!   proptest

pub mod arith;
pub mod demo;
pub mod random;

//! The promotion engine.
//!
//! Pipeline: [`detect`] finds anonymous record literals, [`signature`]
//! derives and registers structural signatures (innermost shapes first),
//! the registry deduplicates them into named generated types, [`order`]
//! arranges declarations so dependencies come first, and [`Promotion`]
//! performs the batch rewrite.

pub mod detect;

pub(crate) mod signature;

mod order;
mod registry;
mod rewrite;

#[cfg(test)]
mod order_tests;
#[cfg(test)]
mod rewrite_tests;

pub use registry::{GeneratedType, NameRegistry, Signature};
pub use rewrite::Promotion;
pub use signature::extract;

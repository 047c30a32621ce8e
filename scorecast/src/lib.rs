//! Numeric building blocks for goal-scoring models: factorials, the Poisson mass function,
//! probability slice utilities, a dense square matrix and decimal-odds market framing.

pub mod factorial;
pub mod linear;
pub mod market;
pub mod poisson;
pub mod probs;

#[doc = include_str!("../../README.md")]
#[cfg(doc)]
fn readme() {}

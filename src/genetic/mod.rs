//! Genetic search over fixed-length move sequences.
//!
//! A [`Chromosome`] is an immutable genome; walking it on a grid with
//! [`Chromosome::evaluate`] yields a separate [`Evaluation`], so scores can
//! never go stale when genes change.

mod chromosome;
mod config;
mod gene;
mod solver;

pub use chromosome::{Chromosome, Evaluation};
pub use config::{EvaluationParams, GeneticConfig};
pub use gene::Gene;
pub use solver::GeneticSolver;

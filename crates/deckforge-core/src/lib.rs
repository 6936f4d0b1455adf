pub mod catalog;
pub mod config;
pub mod corpus;
pub mod error;
pub mod fitness;
pub mod model;
pub mod ranker;
pub mod rules;
pub mod stats;
pub mod util;

pub use crate::error::{DeckForgeError, DfResult};
pub use crate::fitness::{FitnessDetails, FitnessEvaluator};

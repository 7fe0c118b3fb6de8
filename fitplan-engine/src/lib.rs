pub mod classifier;
pub mod dataset;
pub mod error;
pub mod plans;
pub mod recommender;
pub mod suggestions;

pub use error::EngineError;

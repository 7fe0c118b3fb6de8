pub mod bmi;
pub mod metrics;
pub mod plan;
pub mod profile;
pub mod recommendation;
#[cfg(feature = "serde")]
pub mod report;

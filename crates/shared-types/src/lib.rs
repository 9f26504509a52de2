pub mod risk;
pub mod types;

pub use risk::RiskTier;
pub use types::{AnalyzeResponse, AnonymizeResponse, Entity, Severity};

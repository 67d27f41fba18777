pub mod assessment;
pub mod config;
pub mod distance;
pub mod engine;
pub mod input;
pub mod recommend;
pub mod rules;
pub mod samples;
pub mod scorer;
pub mod source;
pub mod trace;

pub use assessment::{FlightInfo, RiskAssessment};
pub use config::RiskConfig;
pub use distance::estimate_distance;
pub use engine::{assess, RiskEngine};
pub use input::{FlightConditions, FlightRiskInput};
pub use scorer::RiskLevel;
pub use source::{BaseRiskSource, FixedBase, SeededSource, ThreadRngSource};
pub use trace::RiskTrace;

use serde::{Deserialize, Serialize};

/// Uniform range the base risk is drawn from, `[min, max)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseRange {
    pub min: f64,
    pub max: f64,
}

impl Default for BaseRange {
    fn default() -> Self {
        Self { min: 0.2, max: 0.8 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleSettings {
    pub wind_speed_above: f64,
    pub wind_adjustment: f64,
    pub precipitation_above: f64,
    pub precipitation_adjustment: f64,
    pub visibility_below: f64,
    pub visibility_adjustment: f64,
    pub temperature_below: f64,
    pub temperature_above: f64,
    pub temperature_adjustment: f64,
}

impl Default for RuleSettings {
    fn default() -> Self {
        Self {
            wind_speed_above: 25.0,
            wind_adjustment: 0.10,
            precipitation_above: 0.5,
            precipitation_adjustment: 0.15,
            visibility_below: 5.0,
            visibility_adjustment: 0.10,
            temperature_below: 32.0,
            temperature_above: 95.0,
            temperature_adjustment: 0.05,
        }
    }
}

/// Score cut-offs. Both comparisons are strict, so a score equal to a
/// threshold lands in the lower level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thresholds {
    pub high_above: u32,
    pub medium_above: u32,
    pub max_probability: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            high_above: 66,
            medium_above: 33,
            max_probability: 0.95,
        }
    }
}

/// Conditions that append advisories regardless of level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisoryTriggers {
    pub precipitation_above: f64,
    pub wind_speed_above: f64,
}

impl Default for AdvisoryTriggers {
    fn default() -> Self {
        Self {
            precipitation_above: 0.3,
            wind_speed_above: 20.0,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RiskConfig {
    pub base: BaseRange,
    pub rules: RuleSettings,
    pub thresholds: Thresholds,
    pub advisories: AdvisoryTriggers,
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::{RiskConfig, Thresholds};
use crate::input::FlightConditions;
use crate::rules::weather_rules;
use crate::source::BaseRiskSource;
use crate::trace::{RiskTrace, RuleResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(format!("unknown risk level: {value}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskScore {
    pub probability: f64,
    pub risk_score: u32,
    pub level: RiskLevel,
}

pub fn classify(risk_score: u32, thresholds: &Thresholds) -> RiskLevel {
    if risk_score > thresholds.high_above {
        RiskLevel::High
    } else if risk_score > thresholds.medium_above {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Score a flight: random base, plus every weather rule that fires, capped at
/// `max_probability`.
pub fn score(
    config: &RiskConfig,
    flight: &FlightConditions,
    source: &mut dyn BaseRiskSource,
) -> (RiskScore, RiskTrace) {
    let base = source.draw(&config.base);

    let results: Vec<RuleResult> = weather_rules(&config.rules)
        .iter()
        .map(|r| r.evaluate(flight))
        .collect();
    let adjustment: f64 = results.iter().map(|r| r.adjustment).sum();

    let probability = (base + adjustment)
        .min(config.thresholds.max_probability)
        .max(0.0);
    let risk_score = (probability * 100.0).round() as u32;
    let level = classify(risk_score, &config.thresholds);

    let trace = RiskTrace {
        rules: results,
        base,
        adjustment,
        probability,
        risk_score,
        classification: level.as_str().to_string(),
    };

    (
        RiskScore {
            probability,
            risk_score,
            level,
        },
        trace,
    )
}

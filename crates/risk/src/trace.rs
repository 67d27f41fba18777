use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleResult {
    pub rule: String,
    pub fired: bool,
    pub adjustment: f64,
    pub detail: String,
}

/// How a single score was put together, for logging and tests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskTrace {
    pub rules: Vec<RuleResult>,
    pub base: f64,
    pub adjustment: f64,
    pub probability: f64,
    pub risk_score: u32,
    pub classification: String,
}

impl RiskTrace {
    pub fn fired_rules(&self) -> Vec<&str> {
        self.rules
            .iter()
            .filter(|r| r.fired)
            .map(|r| r.rule.as_str())
            .collect()
    }
}

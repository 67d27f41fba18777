use crate::input::FlightConditions;
use crate::trace::RuleResult;

use super::{result, Rule};

/// Fires outside the `[below, above]` band, at either extreme.
pub struct TemperatureRule {
    pub below: f64,
    pub above: f64,
    pub adjustment: f64,
}

impl Rule for TemperatureRule {
    fn name(&self) -> &'static str {
        "extreme_temperature"
    }

    fn evaluate(&self, flight: &FlightConditions) -> RuleResult {
        let t = flight.temperature;
        result(
            self,
            t < self.below || t > self.above,
            self.adjustment,
            format!("temperature={t} band=[{}, {}]", self.below, self.above),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::FlightRiskInput;

    fn rule() -> TemperatureRule {
        TemperatureRule {
            below: 32.0,
            above: 95.0,
            adjustment: 0.05,
        }
    }

    fn at(temperature: f64) -> FlightConditions {
        FlightRiskInput {
            temperature: Some(temperature),
            ..Default::default()
        }
        .normalize()
    }

    #[test]
    fn fires_when_freezing() {
        let r = rule().evaluate(&at(20.0));
        assert!(r.fired);
        assert_eq!(r.adjustment, 0.05);
    }

    #[test]
    fn fires_when_hot() {
        assert!(rule().evaluate(&at(100.0)).fired);
    }

    #[test]
    fn band_edges_do_not_fire() {
        assert!(!rule().evaluate(&at(32.0)).fired);
        assert!(!rule().evaluate(&at(95.0)).fired);
        assert_eq!(rule().evaluate(&at(95.0)).adjustment, 0.0);
    }
}

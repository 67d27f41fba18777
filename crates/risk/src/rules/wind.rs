use crate::input::FlightConditions;
use crate::trace::RuleResult;

use super::{result, Rule};

pub struct WindRule {
    pub above: f64,
    pub adjustment: f64,
}

impl Rule for WindRule {
    fn name(&self) -> &'static str {
        "high_wind"
    }

    fn evaluate(&self, flight: &FlightConditions) -> RuleResult {
        result(
            self,
            flight.wind_speed > self.above,
            self.adjustment,
            format!("wind_speed={} limit={}", flight.wind_speed, self.above),
        )
    }
}

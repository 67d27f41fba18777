use crate::input::FlightConditions;
use crate::trace::RuleResult;

use super::{result, Rule};

pub struct PrecipitationRule {
    pub above: f64,
    pub adjustment: f64,
}

impl Rule for PrecipitationRule {
    fn name(&self) -> &'static str {
        "heavy_precipitation"
    }

    fn evaluate(&self, flight: &FlightConditions) -> RuleResult {
        result(
            self,
            flight.precipitation > self.above,
            self.adjustment,
            format!("precipitation={} limit={}", flight.precipitation, self.above),
        )
    }
}

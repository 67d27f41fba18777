use crate::input::FlightConditions;
use crate::trace::RuleResult;

use super::{result, Rule};

pub struct VisibilityRule {
    pub below: f64,
    pub adjustment: f64,
}

impl Rule for VisibilityRule {
    fn name(&self) -> &'static str {
        "low_visibility"
    }

    fn evaluate(&self, flight: &FlightConditions) -> RuleResult {
        result(
            self,
            flight.visibility < self.below,
            self.adjustment,
            format!("visibility={} floor={}", flight.visibility, self.below),
        )
    }
}

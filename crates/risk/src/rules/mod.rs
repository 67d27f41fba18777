pub mod precipitation;
pub mod temperature;
pub mod visibility;
pub mod wind;

use crate::config::RuleSettings;
use crate::input::FlightConditions;
use crate::trace::RuleResult;

use self::precipitation::PrecipitationRule;
use self::temperature::TemperatureRule;
use self::visibility::VisibilityRule;
use self::wind::WindRule;

/// A weather condition that may add to the base delay risk.
pub trait Rule {
    fn name(&self) -> &'static str;
    fn evaluate(&self, flight: &FlightConditions) -> RuleResult;
}

/// Build the adjustment rules. Each one is independent of the others.
pub fn weather_rules(settings: &RuleSettings) -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(WindRule {
            above: settings.wind_speed_above,
            adjustment: settings.wind_adjustment,
        }),
        Box::new(PrecipitationRule {
            above: settings.precipitation_above,
            adjustment: settings.precipitation_adjustment,
        }),
        Box::new(VisibilityRule {
            below: settings.visibility_below,
            adjustment: settings.visibility_adjustment,
        }),
        Box::new(TemperatureRule {
            below: settings.temperature_below,
            above: settings.temperature_above,
            adjustment: settings.temperature_adjustment,
        }),
    ]
}

pub(crate) fn result(rule: &dyn Rule, fired: bool, adjustment: f64, detail: String) -> RuleResult {
    RuleResult {
        rule: rule.name().to_string(),
        fired,
        adjustment: if fired { adjustment } else { 0.0 },
        detail,
    }
}

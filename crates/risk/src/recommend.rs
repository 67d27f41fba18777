//! Advisory text shown next to a delay risk.
//!
//! Consumers render the list positionally: level advice first, in the order
//! below, then condition advice (precipitation before wind).

use crate::config::AdvisoryTriggers;
use crate::input::FlightConditions;
use crate::scorer::RiskLevel;

pub const HIGH_RISK_ADVICE: &[&str] = &[
    "Consider rebooking to an earlier flight",
    "Allow extra time for connections",
    "Check weather conditions regularly",
    "Consider travel insurance",
];

pub const MEDIUM_RISK_ADVICE: &[&str] = &[
    "Monitor flight status closely",
    "Allow some buffer time for connections",
    "Check weather forecast",
];

pub const LOW_RISK_ADVICE: &[&str] = &[
    "Flight likely to depart on time",
    "Standard arrival planning recommended",
];

pub const PRECIPITATION_ADVICE: &str = "Weather-related delays possible";
pub const WIND_ADVICE: &str = "High winds may cause delays";

pub fn level_advice(level: RiskLevel) -> &'static [&'static str] {
    match level {
        RiskLevel::High => HIGH_RISK_ADVICE,
        RiskLevel::Medium => MEDIUM_RISK_ADVICE,
        RiskLevel::Low => LOW_RISK_ADVICE,
    }
}

pub fn recommend(
    level: RiskLevel,
    flight: &FlightConditions,
    triggers: &AdvisoryTriggers,
) -> Vec<String> {
    let mut advice: Vec<String> = level_advice(level).iter().map(|s| s.to_string()).collect();

    if flight.precipitation > triggers.precipitation_above {
        advice.push(PRECIPITATION_ADVICE.to_string());
    }
    if flight.wind_speed > triggers.wind_speed_above {
        advice.push(WIND_ADVICE.to_string());
    }

    advice
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::FlightRiskInput;

    fn flight(precipitation: f64, wind_speed: f64) -> FlightConditions {
        FlightRiskInput {
            precipitation: Some(precipitation),
            wind_speed: Some(wind_speed),
            ..Default::default()
        }
        .normalize()
    }

    #[test]
    fn high_level_starts_with_the_four_high_items() {
        let advice = recommend(RiskLevel::High, &flight(0.9, 40.0), &AdvisoryTriggers::default());
        assert_eq!(&advice[..4], HIGH_RISK_ADVICE);
    }

    #[test]
    fn low_level_has_only_level_items_in_calm_weather() {
        let advice = recommend(RiskLevel::Low, &flight(0.0, 5.0), &AdvisoryTriggers::default());
        assert_eq!(advice, LOW_RISK_ADVICE);
    }

    #[test]
    fn precipitation_advice_is_appended_once_after_level_items() {
        let advice = recommend(RiskLevel::Medium, &flight(0.4, 5.0), &AdvisoryTriggers::default());
        assert_eq!(advice.len(), MEDIUM_RISK_ADVICE.len() + 1);
        assert_eq!(advice.last().map(String::as_str), Some(PRECIPITATION_ADVICE));
        assert_eq!(
            advice.iter().filter(|a| a.as_str() == PRECIPITATION_ADVICE).count(),
            1
        );
    }

    #[test]
    fn precipitation_comes_before_wind() {
        let advice = recommend(RiskLevel::Low, &flight(0.31, 21.0), &AdvisoryTriggers::default());
        assert_eq!(
            &advice[2..],
            &[PRECIPITATION_ADVICE.to_string(), WIND_ADVICE.to_string()]
        );
    }

    #[test]
    fn triggers_are_strict() {
        let advice = recommend(RiskLevel::Low, &flight(0.3, 20.0), &AdvisoryTriggers::default());
        assert_eq!(advice.len(), 2);
    }
}

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::distance::estimate_distance;

pub const DEFAULT_AIRLINE: &str = "AA";
pub const DEFAULT_TEMPERATURE: f64 = 70.0;
pub const DEFAULT_WIND_SPEED: f64 = 10.0;
pub const DEFAULT_VISIBILITY: f64 = 10.0;
pub const DEFAULT_PRECIPITATION: f64 = 0.0;
pub const DEFAULT_CONGESTION: f64 = 0.5;

/// Flight and weather attributes as callers send them.
///
/// Every field is optional and loosely typed: numbers may arrive as JSON
/// strings, and anything unreadable is treated as absent. Defaults are applied
/// once, by [`FlightRiskInput::normalize`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightRiskInput {
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub airline: Option<String>,
    #[serde(
        default,
        alias = "origin_airport",
        alias = "origin_code",
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub origin_code: Option<String>,
    #[serde(
        default,
        alias = "dest_airport",
        alias = "dest_code",
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub dest_code: Option<String>,
    #[serde(
        default,
        alias = "departure_time",
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub departure_time: Option<String>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(
        default,
        alias = "wind_speed",
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub wind_speed: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub visibility: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub precipitation: Option<f64>,
    #[serde(
        default,
        alias = "origin_congestion",
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub origin_congestion: Option<f64>,
    #[serde(
        default,
        alias = "dest_congestion",
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub dest_congestion: Option<f64>,
}

/// Fully defaulted inputs consumed by the scorer and the assembler.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightConditions {
    pub airline: String,
    pub origin_code: String,
    pub dest_code: String,
    pub departure_time: String,
    pub distance: f64,
    pub temperature: f64,
    pub wind_speed: f64,
    pub visibility: f64,
    pub precipitation: f64,
    pub origin_congestion: f64,
    pub dest_congestion: f64,
}

impl FlightRiskInput {
    pub fn normalize(&self) -> FlightConditions {
        self.normalize_at(Utc::now())
    }

    /// Apply defaults, using `now` when no departure time was supplied.
    pub fn normalize_at(&self, now: DateTime<Utc>) -> FlightConditions {
        let origin_code = self.origin_code.clone().unwrap_or_default();
        let dest_code = self.dest_code.clone().unwrap_or_default();
        let distance = self
            .distance
            .unwrap_or_else(|| estimate_distance(&origin_code, &dest_code));

        FlightConditions {
            airline: self
                .airline
                .clone()
                .unwrap_or_else(|| DEFAULT_AIRLINE.to_string()),
            departure_time: self
                .departure_time
                .clone()
                .unwrap_or_else(|| now.to_rfc3339_opts(SecondsFormat::Millis, true)),
            distance,
            temperature: self.temperature.unwrap_or(DEFAULT_TEMPERATURE),
            wind_speed: self.wind_speed.unwrap_or(DEFAULT_WIND_SPEED),
            visibility: self.visibility.unwrap_or(DEFAULT_VISIBILITY),
            precipitation: self.precipitation.unwrap_or(DEFAULT_PRECIPITATION),
            origin_congestion: self.origin_congestion.unwrap_or(DEFAULT_CONGESTION),
            dest_congestion: self.dest_congestion.unwrap_or(DEFAULT_CONGESTION),
            origin_code,
            dest_code,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Number(f64),
    Text(String),
    Other(serde::de::IgnoredAny),
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Loose::deserialize(deserializer)? {
        Loose::Number(n) => Some(n),
        Loose::Text(s) => s.trim().parse::<f64>().ok(),
        Loose::Other(_) => None,
    };
    Ok(value.filter(|n| n.is_finite()))
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Loose::deserialize(deserializer)? {
        Loose::Text(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Loose::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn parse(json: &str) -> FlightRiskInput {
        serde_json::from_str(json).expect("input should deserialize")
    }

    #[test]
    fn empty_object_gets_every_default() {
        let now = Utc.with_ymd_and_hms(2024, 7, 15, 8, 0, 0).unwrap();
        let flight = parse("{}").normalize_at(now);

        assert_eq!(flight.airline, "AA");
        assert_eq!(flight.origin_code, "");
        assert_eq!(flight.departure_time, "2024-07-15T08:00:00.000Z");
        assert_eq!(flight.distance, 1000.0);
        assert_eq!(flight.temperature, 70.0);
        assert_eq!(flight.wind_speed, 10.0);
        assert_eq!(flight.visibility, 10.0);
        assert_eq!(flight.precipitation, 0.0);
        assert_eq!(flight.origin_congestion, 0.5);
        assert_eq!(flight.dest_congestion, 0.5);
    }

    #[test]
    fn missing_distance_uses_route_table() {
        let flight = parse(r#"{"originCode":"JFK","destCode":"LAX"}"#).normalize();
        assert_eq!(flight.distance, 2500.0);
    }

    #[test]
    fn explicit_distance_wins_over_table() {
        let flight = parse(r#"{"originCode":"JFK","destCode":"LAX","distance":10}"#).normalize();
        assert_eq!(flight.distance, 10.0);
    }

    #[test]
    fn snake_case_names_are_accepted() {
        let input = parse(
            r#"{"origin_airport":"ATL","dest_airport":"ORD","departure_time":"2024-01-01T10:00:00Z",
                "wind_speed":30,"origin_congestion":0.8,"dest_congestion":0.1}"#,
        );
        assert_eq!(input.origin_code.as_deref(), Some("ATL"));
        assert_eq!(input.dest_code.as_deref(), Some("ORD"));
        assert_eq!(input.wind_speed, Some(30.0));
        assert_eq!(input.origin_congestion, Some(0.8));
        assert_eq!(input.dest_congestion, Some(0.1));
    }

    #[test]
    fn numeric_strings_are_read_and_garbage_is_defaulted() {
        let flight = parse(r#"{"temperature":"85.5","windSpeed":"fast","visibility":null,"precipitation":[1]}"#)
            .normalize();
        assert_eq!(flight.temperature, 85.5);
        assert_eq!(flight.wind_speed, DEFAULT_WIND_SPEED);
        assert_eq!(flight.visibility, DEFAULT_VISIBILITY);
        assert_eq!(flight.precipitation, DEFAULT_PRECIPITATION);
    }

    #[test]
    fn zero_is_a_value_not_a_missing_field() {
        let flight = parse(r#"{"temperature":0,"visibility":0}"#).normalize();
        assert_eq!(flight.temperature, 0.0);
        assert_eq!(flight.visibility, 0.0);
    }

    #[test]
    fn blank_airline_falls_back() {
        let flight = parse(r#"{"airline":"   "}"#).normalize();
        assert_eq!(flight.airline, DEFAULT_AIRLINE);
    }

    #[test]
    fn out_of_range_values_pass_through() {
        let flight = parse(r#"{"precipitation":7,"windSpeed":-3,"originCongestion":42}"#).normalize();
        assert_eq!(flight.precipitation, 7.0);
        assert_eq!(flight.wind_speed, -3.0);
        assert_eq!(flight.origin_congestion, 42.0);
    }
}

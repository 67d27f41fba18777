use chrono::{DateTime, Duration, NaiveTime, Utc};

use crate::input::FlightRiskInput;

struct SampleFlight {
    airline: &'static str,
    origin: &'static str,
    dest: &'static str,
    distance: f64,
    temperature: f64,
    wind_speed: f64,
    visibility: f64,
    precipitation: f64,
    origin_congestion: f64,
    dest_congestion: f64,
}

const SAMPLES: &[SampleFlight] = &[
    SampleFlight {
        airline: "AA",
        origin: "JFK",
        dest: "LAX",
        distance: 2500.0,
        temperature: 75.0,
        wind_speed: 10.0,
        visibility: 10.0,
        precipitation: 0.0,
        origin_congestion: 0.7,
        dest_congestion: 0.6,
    },
    SampleFlight {
        airline: "DL",
        origin: "ATL",
        dest: "ORD",
        distance: 600.0,
        temperature: 80.0,
        wind_speed: 15.0,
        visibility: 8.0,
        precipitation: 0.1,
        origin_congestion: 0.8,
        dest_congestion: 0.5,
    },
    SampleFlight {
        airline: "UA",
        origin: "SFO",
        dest: "DEN",
        distance: 950.0,
        temperature: 65.0,
        wind_speed: 20.0,
        visibility: 12.0,
        precipitation: 0.0,
        origin_congestion: 0.6,
        dest_congestion: 0.4,
    },
];

/// Demo flights for the prediction form, departing tomorrow at 08:00.
pub fn sample_flights(now: DateTime<Utc>) -> Vec<FlightRiskInput> {
    let departure = (now + Duration::days(1))
        .date_naive()
        .and_time(NaiveTime::from_hms_opt(8, 0, 0).unwrap_or_default())
        .format("%Y-%m-%dT%H:%M")
        .to_string();

    SAMPLES
        .iter()
        .map(|s| FlightRiskInput {
            airline: Some(s.airline.to_string()),
            origin_code: Some(s.origin.to_string()),
            dest_code: Some(s.dest.to_string()),
            departure_time: Some(departure.clone()),
            distance: Some(s.distance),
            temperature: Some(s.temperature),
            wind_speed: Some(s.wind_speed),
            visibility: Some(s.visibility),
            precipitation: Some(s.precipitation),
            origin_congestion: Some(s.origin_congestion),
            dest_congestion: Some(s.dest_congestion),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn three_samples_depart_tomorrow_morning() {
        let now = Utc.with_ymd_and_hms(2024, 2, 28, 22, 15, 0).unwrap();
        let flights = sample_flights(now);

        assert_eq!(flights.len(), 3);
        for flight in &flights {
            assert_eq!(flight.departure_time.as_deref(), Some("2024-02-29T08:00"));
        }
        assert_eq!(flights[0].origin_code.as_deref(), Some("JFK"));
        assert_eq!(flights[1].airline.as_deref(), Some("DL"));
        assert_eq!(flights[2].wind_speed, Some(20.0));
    }

    #[test]
    fn samples_serialize_in_request_shape() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let json = serde_json::to_value(&sample_flights(now)[1]).unwrap();
        assert_eq!(json["originCode"], "ATL");
        assert_eq!(json["destCode"], "ORD");
        assert_eq!(json["windSpeed"], 15.0);
        assert_eq!(json["destCongestion"], 0.5);
    }
}

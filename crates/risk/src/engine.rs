use std::sync::Mutex;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::assessment::{FlightInfo, RiskAssessment};
use crate::config::RiskConfig;
use crate::input::{FlightConditions, FlightRiskInput};
use crate::recommend::recommend;
use crate::scorer::score;
use crate::source::{BaseRiskSource, FixedBase, SeededSource, ThreadRngSource};
use crate::trace::RiskTrace;

/// Shown for weekday and month when the departure time cannot be read.
pub const UNKNOWN_CALENDAR: &str = "Unknown";

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

pub fn route_label(origin: &str, dest: &str) -> String {
    format!("{origin} \u{2192} {dest}")
}

/// Parse a departure timestamp into the wall-clock time it names.
///
/// Offsets are honoured as written (`08:00+05:00` stays 08:00), so the weekday
/// matches what the traveller sees on the ticket.
pub fn parse_departure(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// English long-form weekday and month names, e.g. `("Monday", "July")`.
pub fn calendar_names(departure_time: &str) -> (String, String) {
    match parse_departure(departure_time) {
        Some(dt) => (dt.format("%A").to_string(), dt.format("%B").to_string()),
        None => (UNKNOWN_CALENDAR.to_string(), UNKNOWN_CALENDAR.to_string()),
    }
}

fn flight_info(flight: &FlightConditions) -> FlightInfo {
    let (day_of_week, month) = calendar_names(&flight.departure_time);
    FlightInfo {
        airline: flight.airline.clone(),
        route: route_label(&flight.origin_code, &flight.dest_code),
        departure_time: flight.departure_time.clone(),
        day_of_week,
        month,
    }
}

pub fn assess_with_trace(
    config: &RiskConfig,
    input: &FlightRiskInput,
    source: &mut dyn BaseRiskSource,
) -> (RiskAssessment, RiskTrace) {
    let flight = input.normalize();
    let (result, trace) = score(config, &flight, source);

    tracing::debug!(
        route = %route_label(&flight.origin_code, &flight.dest_code),
        base = trace.base,
        adjustment = trace.adjustment,
        fired = ?trace.fired_rules(),
        risk_score = trace.risk_score,
        level = %trace.classification,
        "delay risk scored"
    );

    let assessment = RiskAssessment {
        delay_probability: result.probability,
        risk_score: result.risk_score,
        risk_level: result.level,
        flight_info: flight_info(&flight),
        recommendations: recommend(result.level, &flight, &config.advisories),
    };

    (assessment, trace)
}

/// Normalize, score, advise and package a single flight.
pub fn assess(
    config: &RiskConfig,
    input: &FlightRiskInput,
    source: &mut dyn BaseRiskSource,
) -> RiskAssessment {
    assess_with_trace(config, input, source).0
}

/// Scoring entry point shared across request handlers.
pub struct RiskEngine {
    config: RiskConfig,
    source: Mutex<Box<dyn BaseRiskSource>>,
    seed: Option<u64>,
}

impl RiskEngine {
    pub fn new(config: RiskConfig, source: Box<dyn BaseRiskSource>) -> Self {
        Self {
            config,
            source: Mutex::new(source),
            seed: None,
        }
    }

    /// Seeded when `seed` is set, otherwise backed by the thread-local generator.
    pub fn from_seed(config: RiskConfig, seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self {
                seed: Some(seed),
                ..Self::new(config, Box::new(SeededSource::new(seed)))
            },
            None => Self::new(config, Box::new(ThreadRngSource)),
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn config(&self) -> &RiskConfig {
        &self.config
    }

    pub fn assess(&self, input: &FlightRiskInput) -> RiskAssessment {
        // the lock covers the draw only
        let base = {
            let mut source = self
                .source
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            source.draw(&self.config.base)
        };
        assess(&self.config, input, &mut FixedBase(base))
    }
}

impl Default for RiskEngine {
    fn default() -> Self {
        Self::from_seed(RiskConfig::default(), None)
    }
}

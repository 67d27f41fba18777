use chrono::NaiveDate;
use falcon_common::error::{FalconError, FalconResult};
use uuid::Uuid;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Trimmed value of a required text field; blank counts as missing.
pub fn required_text(value: Option<String>, field: &str) -> FalconResult<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| FalconError::required(field))
}

/// Blank optional text is stored as absent.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn required_date(value: Option<String>, field: &str) -> FalconResult<NaiveDate> {
    let raw = required_text(value, field)?;
    parse_date(&raw, field)
}

pub fn parse_date(raw: &str, field: &str) -> FalconResult<NaiveDate> {
    // accept a full timestamp and keep its date part
    let date_part = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, DATE_FORMAT).map_err(|_| {
        FalconError::Validation(format!("{field} must be a date (YYYY-MM-DD): {raw}"))
    })
}

pub fn required_uuid(value: Option<String>, field: &str) -> FalconResult<Uuid> {
    let raw = required_text(value, field)?;
    Uuid::parse_str(&raw)
        .map_err(|_| FalconError::Validation(format!("{field} must be a UUID: {raw}")))
}

pub fn positive_seats(value: i32) -> FalconResult<i32> {
    if value <= 0 {
        return Err(FalconError::Validation(
            "seats must be greater than 0".to_string(),
        ));
    }
    Ok(value)
}

pub fn positive_amount(value: f64) -> FalconResult<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(FalconError::Validation(
            "amount must be greater than 0".to_string(),
        ));
    }
    Ok(value)
}

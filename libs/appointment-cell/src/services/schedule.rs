use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, Utc};

use crate::models::AppointmentError;

/// Start and end instants of a booked slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppointmentWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl AppointmentWindow {
    pub fn start_iso(&self) -> String {
        self.start.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    pub fn end_iso(&self) -> String {
        self.end.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// Combines a form date (`YYYY-MM-DD`) and time (`HH:MM[:SS]`) into a UTC instant.
pub fn parse_slot(date: &str, time: &str) -> Result<NaiveDateTime, AppointmentError> {
    let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|_| AppointmentError::InvalidSchedule(format!("Invalid date '{}'", date.trim())))?;

    let time = time.trim();
    let time = NaiveTime::parse_from_str(time, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M:%S"))
        .map_err(|_| AppointmentError::InvalidSchedule(format!("Invalid time '{}'", time)))?;

    Ok(date.and_time(time))
}

pub fn build_window(
    date: &str,
    time: &str,
    duration_minutes: i64,
) -> Result<AppointmentWindow, AppointmentError> {
    let start = parse_slot(date, time)?.and_utc();
    let end = start
        .checked_add_signed(Duration::minutes(duration_minutes))
        .ok_or_else(|| AppointmentError::InvalidSchedule("Appointment end is out of range".to_string()))?;

    Ok(AppointmentWindow { start, end })
}

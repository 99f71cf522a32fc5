use std::env;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

pub const DEFAULT_API_BASE: &str = "https://crud-clinic.onrender.com/api";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_APPOINTMENT_MINUTES: i64 = 30;

/// Shape of the appointment body the clinic API accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentPayloadStyle {
    /// `{patientId, doctorId, startAt, endAt, notes}`
    #[default]
    Instant,
    /// `{patient, doctor, date, time, notes}`
    Legacy,
}

impl FromStr for AppointmentPayloadStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "instant" => Ok(Self::Instant),
            "legacy" => Ok(Self::Legacy),
            other => Err(format!("unknown appointment payload style '{}'", other)),
        }
    }
}

impl fmt::Display for AppointmentPayloadStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Instant => write!(f, "instant"),
            Self::Legacy => write!(f, "legacy"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
    pub bind_addr: String,
    pub appointment_payload: AppointmentPayloadStyle,
    pub appointment_duration_minutes: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE.to_string(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            appointment_payload: AppointmentPayloadStyle::default(),
            appointment_duration_minutes: DEFAULT_APPOINTMENT_MINUTES,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from a variable lookup. Blank values count as missing;
    /// every missing or unparsable value logs a warning and takes its default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let value = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|raw| !raw.is_empty())
        };

        Self {
            api_base_url: value("CLINIC_API_BASE")
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| {
                    warn!("CLINIC_API_BASE not set, using {}", DEFAULT_API_BASE);
                    DEFAULT_API_BASE.to_string()
                }),
            bind_addr: value("ADMIN_BIND_ADDR").unwrap_or_else(|| {
                warn!("ADMIN_BIND_ADDR not set, using {}", DEFAULT_BIND_ADDR);
                DEFAULT_BIND_ADDR.to_string()
            }),
            appointment_payload: match value("APPOINTMENT_PAYLOAD") {
                Some(raw) => raw.parse().unwrap_or_else(|e| {
                    warn!("{}, using default", e);
                    AppointmentPayloadStyle::default()
                }),
                None => {
                    warn!("APPOINTMENT_PAYLOAD not set, using {}", AppointmentPayloadStyle::default());
                    AppointmentPayloadStyle::default()
                }
            },
            appointment_duration_minutes: match value("APPOINTMENT_DURATION_MINUTES") {
                Some(raw) => match raw.parse::<i64>() {
                    Ok(minutes) if minutes > 0 => minutes,
                    _ => {
                        warn!("APPOINTMENT_DURATION_MINUTES '{}' is not a positive integer, using default", raw);
                        DEFAULT_APPOINTMENT_MINUTES
                    }
                },
                None => {
                    warn!("APPOINTMENT_DURATION_MINUTES not set, using {}", DEFAULT_APPOINTMENT_MINUTES);
                    DEFAULT_APPOINTMENT_MINUTES
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn payload_style_parses_case_insensitively() {
        assert_eq!("Legacy".parse::<AppointmentPayloadStyle>(), Ok(AppointmentPayloadStyle::Legacy));
        assert_eq!(" instant ".parse::<AppointmentPayloadStyle>(), Ok(AppointmentPayloadStyle::Instant));
        assert!("iso".parse::<AppointmentPayloadStyle>().is_err());
    }

    #[test]
    fn default_config_targets_public_api() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE);
        assert_eq!(config.appointment_duration_minutes, 30);
        assert_eq!(config.appointment_payload, AppointmentPayloadStyle::Instant);
    }

    fn lookup<'a>(vars: &'a HashMap<&'a str, &'a str>) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| vars.get(key).map(|value| value.to_string())
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let vars = HashMap::from([
            ("CLINIC_API_BASE", ""),
            ("ADMIN_BIND_ADDR", "   "),
            ("APPOINTMENT_PAYLOAD", ""),
        ]);
        let config = AppConfig::from_lookup(lookup(&vars));

        assert_eq!(config.api_base_url, DEFAULT_API_BASE);
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(config.appointment_payload, AppointmentPayloadStyle::Instant);
        assert_eq!(config.appointment_duration_minutes, DEFAULT_APPOINTMENT_MINUTES);
    }

    #[test]
    fn slash_only_base_url_is_treated_as_missing() {
        let vars = HashMap::from([("CLINIC_API_BASE", "/")]);
        assert_eq!(AppConfig::from_lookup(lookup(&vars)).api_base_url, DEFAULT_API_BASE);
    }

    #[test]
    fn set_values_are_used() {
        let vars = HashMap::from([
            ("CLINIC_API_BASE", "http://localhost:5000/api/"),
            ("ADMIN_BIND_ADDR", "127.0.0.1:8080"),
            ("APPOINTMENT_PAYLOAD", "legacy"),
            ("APPOINTMENT_DURATION_MINUTES", "45"),
        ]);
        let config = AppConfig::from_lookup(lookup(&vars));

        assert_eq!(config.api_base_url, "http://localhost:5000/api");
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
        assert_eq!(config.appointment_payload, AppointmentPayloadStyle::Legacy);
        assert_eq!(config.appointment_duration_minutes, 45);
    }

    #[test]
    fn unparsable_values_fall_back_to_defaults() {
        let vars = HashMap::from([
            ("APPOINTMENT_PAYLOAD", "iso"),
            ("APPOINTMENT_DURATION_MINUTES", "-5"),
        ]);
        let config = AppConfig::from_lookup(lookup(&vars));

        assert_eq!(config.appointment_payload, AppointmentPayloadStyle::Instant);
        assert_eq!(config.appointment_duration_minutes, DEFAULT_APPOINTMENT_MINUTES);
    }
}

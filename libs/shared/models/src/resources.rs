use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The three collections exposed by the clinic API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Patient,
    Doctor,
    Appointment,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [
        ResourceKind::Patient,
        ResourceKind::Doctor,
        ResourceKind::Appointment,
    ];

    /// Plural form used for API paths, wrapped list keys and tab ids.
    pub fn plural(&self) -> &'static str {
        match self {
            ResourceKind::Patient => "patients",
            ResourceKind::Doctor => "doctors",
            ResourceKind::Appointment => "appointments",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::Patient => "patient",
            ResourceKind::Doctor => "doctor",
            ResourceKind::Appointment => "appointment",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ResourceKind::Patient => "Patients",
            ResourceKind::Doctor => "Doctors",
            ResourceKind::Appointment => "Appointments",
        }
    }

    pub fn collection_path(&self) -> String {
        format!("/{}", self.plural())
    }

    pub fn item_path(&self, id: &str) -> String {
        format!("/{}/{}", self.plural(), urlencoding::encode(id))
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ResourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "patient" | "patients" => Ok(ResourceKind::Patient),
            "doctor" | "doctors" => Ok(ResourceKind::Doctor),
            "appointment" | "appointments" => Ok(ResourceKind::Appointment),
            other => Err(format!("unknown resource '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub birth_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub specialty: String,
    pub phone: String,
}

/// An appointment's link to a patient or doctor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityRef {
    Missing,
    Id(String),
    /// Embedded object returned by servers that populate references.
    Populated { id: String, name: Option<String> },
}

impl EntityRef {
    pub fn id(&self) -> Option<&str> {
        match self {
            EntityRef::Missing => None,
            EntityRef::Id(id) => Some(id),
            EntityRef::Populated { id, .. } if !id.is_empty() => Some(id),
            EntityRef::Populated { .. } => None,
        }
    }

    pub fn embedded_name(&self) -> Option<&str> {
        match self {
            EntityRef::Populated { name: Some(name), .. } if !name.is_empty() => Some(name),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Schedule {
    Unscheduled,
    /// Legacy API: separate calendar date and time of day.
    Slot { date: String, time: String },
    /// Current API: ISO-8601 start and end instants.
    Interval { start_at: String, end_at: String },
}

impl Schedule {
    /// Human-readable form for the appointments table.
    pub fn display(&self) -> String {
        match self {
            Schedule::Unscheduled => String::new(),
            Schedule::Slot { date, time } => [date.as_str(), time.as_str()]
                .iter()
                .filter(|part| !part.is_empty())
                .copied()
                .collect::<Vec<_>>()
                .join(" "),
            Schedule::Interval { start_at, end_at } => {
                let start = DateTime::parse_from_rfc3339(start_at).map(|t| t.with_timezone(&Utc));
                let end = DateTime::parse_from_rfc3339(end_at).map(|t| t.with_timezone(&Utc));
                match (start, end) {
                    (Ok(start), Ok(end)) if start.date_naive() == end.date_naive() => format!(
                        "{} - {}",
                        start.format("%Y-%m-%d %H:%M"),
                        end.format("%H:%M")
                    ),
                    (Ok(start), Ok(end)) => format!(
                        "{} - {}",
                        start.format("%Y-%m-%d %H:%M"),
                        end.format("%Y-%m-%d %H:%M")
                    ),
                    (Ok(start), Err(_)) if end_at.is_empty() => {
                        start.format("%Y-%m-%d %H:%M").to_string()
                    }
                    _ => [start_at.as_str(), end_at.as_str()]
                        .iter()
                        .filter(|part| !part.is_empty())
                        .copied()
                        .collect::<Vec<_>>()
                        .join(" - "),
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub patient: EntityRef,
    pub doctor: EntityRef,
    pub schedule: Schedule,
    pub notes: String,
}

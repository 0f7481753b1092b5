// libs/appointment-cell/src/models.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use doctor_cell::DoctorId;
use patient_cell::PatientId;
use shared_models::error::ErrorKind;
use shared_models::form::optional_int;

pub type AppointmentId = u32;

/// Label shown when an appointment points at a record that no longer exists.
pub const UNKNOWN_LABEL: &str = "Unknown";

const DATE_FORMAT: &str = "%Y-%m-%d";

// ==============================================================================
// CORE APPOINTMENT MODELS
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: AppointmentId,
    pub patient_id: PatientId,
    pub doctor_id: DoctorId,
    pub date: NaiveDate,
}

/// Booking form values as entered. Missing fields decode to `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookAppointmentRequest {
    #[serde(default, deserialize_with = "optional_int")]
    pub patient_id: Option<i64>,
    #[serde(default, deserialize_with = "optional_int")]
    pub doctor_id: Option<i64>,
    #[serde(default)]
    pub date: Option<String>,
}

impl BookAppointmentRequest {
    pub fn new(patient_id: i64, doctor_id: i64, date: impl Into<String>) -> Self {
        Self {
            patient_id: Some(patient_id),
            doctor_id: Some(doctor_id),
            date: Some(date.into()),
        }
    }

    /// Checks field presence and shape only; whether the patient and doctor
    /// exist is decided by the book at booking time.
    pub fn validate(&self) -> Result<NewAppointment, AppointmentError> {
        let patient_id = positive_id(self.patient_id, "Patient ID")?;
        let doctor_id = positive_id(self.doctor_id, "Doctor ID")?;

        let raw_date = self.date.as_deref().map(str::trim).unwrap_or_default();
        if raw_date.is_empty() {
            return Err(AppointmentError::Validation("Appointment date is required".to_string()));
        }
        let date = NaiveDate::parse_from_str(raw_date, DATE_FORMAT).map_err(|_| {
            AppointmentError::Validation(format!(
                "Invalid appointment date '{}', expected YYYY-MM-DD",
                raw_date
            ))
        })?;

        Ok(NewAppointment {
            patient_id,
            doctor_id,
            date,
        })
    }
}

fn positive_id(value: Option<i64>, field: &str) -> Result<u32, AppointmentError> {
    match value {
        Some(id) if id > 0 => u32::try_from(id)
            .map_err(|_| AppointmentError::Validation(format!("{} {} is out of range", field, id))),
        _ => Err(AppointmentError::Validation(format!("{} is required", field))),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAppointment {
    pub patient_id: PatientId,
    pub doctor_id: DoctorId,
    pub date: NaiveDate,
}

impl NewAppointment {
    pub fn into_appointment(self, id: AppointmentId) -> Appointment {
        Appointment {
            id,
            patient_id: self.patient_id,
            doctor_id: self.doctor_id,
            date: self.date,
        }
    }
}

// ==============================================================================
// LISTING MODELS
// ==============================================================================

/// An appointment with patient and doctor names resolved at listing time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentSummary {
    pub id: AppointmentId,
    pub patient_id: PatientId,
    pub doctor_id: DoctorId,
    pub date: NaiveDate,
    pub patient_label: String,
    pub doctor_label: String,
}

impl AppointmentSummary {
    pub fn display_label(&self) -> String {
        format!("{} → {}", self.patient_label, self.doctor_label)
    }

    pub fn meta_label(&self) -> String {
        format!("ID:{} • {}", self.id, self.date.format(DATE_FORMAT))
    }

    pub fn has_orphaned_reference(&self) -> bool {
        self.patient_label == UNKNOWN_LABEL || self.doctor_label == UNKNOWN_LABEL
    }
}

// ==============================================================================
// ERROR TYPES
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppointmentError {
    #[error("{0}")]
    Validation(String),

    #[error("Invalid Patient ID: {0}")]
    UnknownPatient(PatientId),

    #[error("Invalid Doctor ID: {0}")]
    UnknownDoctor(DoctorId),

    #[error("Appointment not found: {0}")]
    NotFound(AppointmentId),

    #[error("Appointment id must be positive")]
    InvalidId,

    #[error("Duplicate appointment id {0} in seed data")]
    DuplicateId(AppointmentId),

    #[error("Appointment id space exhausted")]
    IdsExhausted,
}

impl AppointmentError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppointmentError::Validation(_)
            | AppointmentError::InvalidId
            | AppointmentError::DuplicateId(_) => ErrorKind::Validation,
            AppointmentError::UnknownPatient(_) | AppointmentError::UnknownDoctor(_) => {
                ErrorKind::Reference
            }
            AppointmentError::NotFound(_) => ErrorKind::NotFound,
            AppointmentError::IdsExhausted => ErrorKind::Capacity,
        }
    }
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use shared_models::error::ErrorKind;
use shared_models::form::optional_int;

pub type PatientId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: PatientId,
    pub name: String,
    pub age: u32,
    pub gender: Gender,
}

impl Patient {
    /// Left-hand row text, e.g. `John Doe (Age 35)`.
    pub fn display_label(&self) -> String {
        format!("{} (Age {})", self.name, self.age)
    }

    /// Right-hand row text, e.g. `ID:1 • Male`.
    pub fn meta_label(&self) -> String {
        format!("ID:{} • {}", self.id, self.gender)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
            Gender::Other => write!(f, "Other"),
        }
    }
}

impl FromStr for Gender {
    type Err = PatientError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            "" => Err(PatientError::Validation("Patient gender is required".to_string())),
            _ => Err(PatientError::Validation(format!(
                "Invalid gender '{}'. Must be one of: Male, Female, Other",
                value.trim()
            ))),
        }
    }
}

/// Raw registration form values. Every field is optional so that a missing
/// field is reported as a validation failure instead of a decode failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterPatientRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "optional_int")]
    pub age: Option<i64>,
    #[serde(default)]
    pub gender: Option<String>,
}

impl RegisterPatientRequest {
    pub fn new(name: impl Into<String>, age: i64, gender: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            age: Some(age),
            gender: Some(gender.into()),
        }
    }

    pub fn validate(&self) -> Result<NewPatient, PatientError> {
        let name = self.name.as_deref().map(str::trim).unwrap_or_default();
        if name.is_empty() {
            return Err(PatientError::Validation("Patient name is required".to_string()));
        }

        let age = match self.age {
            Some(age) if age > 0 => u32::try_from(age).map_err(|_| {
                PatientError::Validation(format!("Patient age {} is out of range", age))
            })?,
            _ => {
                return Err(PatientError::Validation(
                    "Patient age must be a positive number".to_string(),
                ))
            }
        };

        let gender = self.gender.as_deref().unwrap_or_default().parse::<Gender>()?;

        Ok(NewPatient {
            name: name.to_string(),
            age,
            gender,
        })
    }
}

/// Registration values that passed validation and only lack an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPatient {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
}

impl NewPatient {
    pub fn into_patient(self, id: PatientId) -> Patient {
        Patient {
            id,
            name: self.name,
            age: self.age,
            gender: self.gender,
        }
    }
}

/// Patients present when the front desk opens.
pub fn demo_patients() -> Vec<Patient> {
    vec![Patient {
        id: 1,
        name: "John Doe".to_string(),
        age: 35,
        gender: Gender::Male,
    }]
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatientError {
    #[error("{0}")]
    Validation(String),

    #[error("Patient not found: {0}")]
    NotFound(PatientId),

    #[error("Patient id must be positive")]
    InvalidId,

    #[error("Duplicate patient id {0} in seed data")]
    DuplicateId(PatientId),

    #[error("Patient id space exhausted")]
    IdsExhausted,
}

impl PatientError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PatientError::Validation(_)
            | PatientError::InvalidId
            | PatientError::DuplicateId(_) => ErrorKind::Validation,
            PatientError::NotFound(_) => ErrorKind::NotFound,
            PatientError::IdsExhausted => ErrorKind::Capacity,
        }
    }
}

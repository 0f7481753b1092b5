use serde::{Deserialize, Serialize};

pub type DoctorId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: DoctorId,
    pub name: String,
    pub specialty: String,
}

impl Doctor {
    pub fn new(id: DoctorId, name: impl Into<String>, specialty: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            specialty: specialty.into(),
        }
    }
}

/// The clinic's staff roster as loaded at startup.
pub fn default_doctors() -> Vec<Doctor> {
    vec![
        Doctor::new(1, "Dr. Rajesh Kumar", "Cardiology"),
        Doctor::new(2, "Dr. Neha Verma", "Neurology"),
        Doctor::new(3, "Dr. Aditya Nair", "Pediatrics"),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DoctorError {
    #[error("Doctor id must be positive")]
    InvalidId,

    #[error("Duplicate doctor id {0}")]
    DuplicateId(DoctorId),
}

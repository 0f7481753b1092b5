// libs/doctor-cell/src/services/directory.rs
use std::collections::HashSet;

use tracing::debug;

use crate::models::{default_doctors, Doctor, DoctorError, DoctorId};

/// Read-only doctor reference data, kept in seed order.
#[derive(Debug, Clone)]
pub struct DoctorDirectory {
    doctors: Vec<Doctor>,
}

impl DoctorDirectory {
    /// Builds the directory from seed data. Ids must be positive and unique.
    pub fn from_seed(doctors: Vec<Doctor>) -> Result<Self, DoctorError> {
        let mut seen = HashSet::with_capacity(doctors.len());
        for doctor in &doctors {
            if doctor.id == 0 {
                return Err(DoctorError::InvalidId);
            }
            if !seen.insert(doctor.id) {
                return Err(DoctorError::DuplicateId(doctor.id));
            }
        }

        debug!("Doctor directory seeded with {} doctors", doctors.len());
        Ok(Self { doctors })
    }

    pub fn list(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn find(&self, id: DoctorId) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.id == id)
    }

    pub fn contains(&self, id: DoctorId) -> bool {
        self.find(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.doctors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doctors.is_empty()
    }
}

impl Default for DoctorDirectory {
    fn default() -> Self {
        Self {
            doctors: default_doctors(),
        }
    }
}

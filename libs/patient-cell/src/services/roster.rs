// libs/patient-cell/src/services/roster.rs
use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::models::{Patient, PatientError, PatientId, RegisterPatientRequest};

/// Registered patients in insertion order plus the next id to hand out.
#[derive(Debug, Clone)]
pub struct PatientRoster {
    patients: Vec<Patient>,
    next_id: PatientId,
}

impl PatientRoster {
    pub fn new() -> Self {
        Self {
            patients: Vec::new(),
            next_id: 1,
        }
    }

    /// Seeds the roster. The counter starts one past the highest seeded id
    /// and is never recomputed afterwards, so the highest seeded id must be
    /// below `u32::MAX`.
    pub fn from_seed(patients: Vec<Patient>) -> Result<Self, PatientError> {
        let mut seen = HashSet::with_capacity(patients.len());
        for patient in &patients {
            if patient.id == 0 {
                return Err(PatientError::InvalidId);
            }
            if !seen.insert(patient.id) {
                return Err(PatientError::DuplicateId(patient.id));
            }
        }

        let next_id = match patients.iter().map(|p| p.id).max() {
            Some(max) => max.checked_add(1).ok_or(PatientError::IdsExhausted)?,
            None => 1,
        };
        debug!("Patient roster seeded with {} patients, next id {}", patients.len(), next_id);

        Ok(Self { patients, next_id })
    }

    pub fn register(&mut self, request: &RegisterPatientRequest) -> Result<Patient, PatientError> {
        let new_patient = request
            .validate()
            .inspect_err(|e| warn!("Rejected patient registration: {}", e))?;

        let following = self.next_id.checked_add(1).ok_or_else(|| {
            warn!("Patient id space exhausted at {}", self.next_id);
            PatientError::IdsExhausted
        })?;

        let patient = new_patient.into_patient(self.next_id);
        self.next_id = following;
        self.patients.push(patient.clone());

        info!("Patient added with ID {}", patient.id);
        Ok(patient)
    }

    pub fn list(&self) -> &[Patient] {
        &self.patients
    }

    pub fn find(&self, id: PatientId) -> Option<&Patient> {
        self.patients.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: PatientId) -> bool {
        self.find(id).is_some()
    }

    pub fn remove(&mut self, id: PatientId) -> Result<PatientId, PatientError> {
        let index = self
            .patients
            .iter()
            .position(|p| p.id == id)
            .ok_or(PatientError::NotFound(id))?;

        self.patients.remove(index);
        info!("Patient ID {} removed", id);
        Ok(id)
    }

    pub fn next_id(&self) -> PatientId {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.patients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }
}

impl Default for PatientRoster {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{demo_patients, Gender};

    #[test]
    fn test_counter_starts_after_highest_seeded_id() {
        let mut seed = demo_patients();
        seed.push(Patient {
            id: 8,
            name: "Asha Rao".to_string(),
            age: 52,
            gender: Gender::Female,
        });

        let roster = PatientRoster::from_seed(seed).unwrap();
        assert_eq!(roster.next_id(), 9);
    }

    #[test]
    fn test_empty_seed_starts_at_one() {
        let roster = PatientRoster::from_seed(Vec::new()).unwrap();
        assert_eq!(roster.next_id(), 1);
        assert!(roster.is_empty());
    }

    #[test]
    fn test_failed_registration_leaves_counter_untouched() {
        let mut roster = PatientRoster::new();
        let bad = RegisterPatientRequest::new("", 30, "Male");
        assert!(roster.register(&bad).is_err());
        assert_eq!(roster.next_id(), 1);
        assert_eq!(roster.len(), 0);
    }
}

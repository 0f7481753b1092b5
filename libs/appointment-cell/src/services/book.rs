// libs/appointment-cell/src/services/book.rs
use std::collections::HashSet;

use tracing::{debug, info, warn};

use doctor_cell::DoctorDirectory;
use patient_cell::PatientRoster;

use crate::models::{
    Appointment, AppointmentError, AppointmentId, AppointmentSummary, BookAppointmentRequest,
    UNKNOWN_LABEL,
};

/// Booked appointments in insertion order plus the next id to hand out.
///
/// Patient and doctor references are checked only when booking. Removing a
/// patient afterwards leaves its appointments in place; listings show such
/// orphaned references as [`UNKNOWN_LABEL`].
#[derive(Debug, Clone)]
pub struct AppointmentBook {
    appointments: Vec<Appointment>,
    next_id: AppointmentId,
}

impl AppointmentBook {
    pub fn new() -> Self {
        Self {
            appointments: Vec::new(),
            next_id: 1,
        }
    }

    pub fn from_seed(appointments: Vec<Appointment>) -> Result<Self, AppointmentError> {
        let mut seen = HashSet::with_capacity(appointments.len());
        for appointment in &appointments {
            if appointment.id == 0 {
                return Err(AppointmentError::InvalidId);
            }
            if !seen.insert(appointment.id) {
                return Err(AppointmentError::DuplicateId(appointment.id));
            }
        }

        let next_id = match appointments.iter().map(|a| a.id).max() {
            Some(max) => max.checked_add(1).ok_or(AppointmentError::IdsExhausted)?,
            None => 1,
        };
        debug!("Appointment book seeded with {} entries, next id {}", appointments.len(), next_id);

        Ok(Self {
            appointments,
            next_id,
        })
    }

    pub fn book(
        &mut self,
        request: &BookAppointmentRequest,
        patients: &PatientRoster,
        doctors: &DoctorDirectory,
    ) -> Result<Appointment, AppointmentError> {
        let new_appointment = request
            .validate()
            .inspect_err(|e| warn!("Rejected appointment request: {}", e))?;

        if !patients.contains(new_appointment.patient_id) {
            warn!("Booking references unknown patient {}", new_appointment.patient_id);
            return Err(AppointmentError::UnknownPatient(new_appointment.patient_id));
        }
        if !doctors.contains(new_appointment.doctor_id) {
            warn!("Booking references unknown doctor {}", new_appointment.doctor_id);
            return Err(AppointmentError::UnknownDoctor(new_appointment.doctor_id));
        }

        let following = self.next_id.checked_add(1).ok_or_else(|| {
            warn!("Appointment id space exhausted at {}", self.next_id);
            AppointmentError::IdsExhausted
        })?;

        let appointment = new_appointment.into_appointment(self.next_id);
        self.next_id = following;
        self.appointments.push(appointment.clone());

        info!(
            "Appointment booked with ID {} (patient {}, doctor {}, {})",
            appointment.id, appointment.patient_id, appointment.doctor_id, appointment.date
        );
        Ok(appointment)
    }

    pub fn list(&self) -> &[Appointment] {
        &self.appointments
    }

    /// Resolves names against the current roster and directory. Never fails.
    pub fn summaries(
        &self,
        patients: &PatientRoster,
        doctors: &DoctorDirectory,
    ) -> Vec<AppointmentSummary> {
        self.appointments
            .iter()
            .map(|a| AppointmentSummary {
                id: a.id,
                patient_id: a.patient_id,
                doctor_id: a.doctor_id,
                date: a.date,
                patient_label: patients
                    .find(a.patient_id)
                    .map_or_else(|| UNKNOWN_LABEL.to_string(), |p| p.name.clone()),
                doctor_label: doctors
                    .find(a.doctor_id)
                    .map_or_else(|| UNKNOWN_LABEL.to_string(), |d| d.name.clone()),
            })
            .collect()
    }

    pub fn find(&self, id: AppointmentId) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id == id)
    }

    pub fn remove(&mut self, id: AppointmentId) -> Result<AppointmentId, AppointmentError> {
        let index = self
            .appointments
            .iter()
            .position(|a| a.id == id)
            .ok_or(AppointmentError::NotFound(id))?;

        self.appointments.remove(index);
        info!("Appointment ID {} removed", id);
        Ok(id)
    }

    pub fn next_id(&self) -> AppointmentId {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }
}

impl Default for AppointmentBook {
    fn default() -> Self {
        Self::new()
    }
}

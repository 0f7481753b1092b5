// libs/registry-cell/src/registry.rs
use anyhow::Result;
use tracing::debug;

use appointment_cell::{
    Appointment, AppointmentBook, AppointmentError, AppointmentId, AppointmentSummary,
    BookAppointmentRequest,
};
use doctor_cell::{Doctor, DoctorDirectory, DoctorId};
use patient_cell::{demo_patients, Patient, PatientError, PatientId, PatientRoster, RegisterPatientRequest};
use shared_config::AppConfig;

/// The clinic's in-memory records. Plain owned state; callers that share it
/// across tasks provide their own synchronisation.
#[derive(Debug, Clone, Default)]
pub struct ClinicRegistry {
    doctors: DoctorDirectory,
    patients: PatientRoster,
    appointments: AppointmentBook,
}

impl ClinicRegistry {
    pub fn new(
        doctors: DoctorDirectory,
        patients: PatientRoster,
        appointments: AppointmentBook,
    ) -> Self {
        Self {
            doctors,
            patients,
            appointments,
        }
    }

    /// Default doctor roster, optionally with the demo patient, and no
    /// appointments.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let patients = if config.seed_demo_patient {
            PatientRoster::from_seed(demo_patients())?
        } else {
            PatientRoster::new()
        };

        let doctors = DoctorDirectory::default();
        debug!("Registry ready: {} doctors, {} patients", doctors.len(), patients.len());

        Ok(Self::new(doctors, patients, AppointmentBook::new()))
    }

    // ----- doctors -----

    pub fn list_doctors(&self) -> &[Doctor] {
        self.doctors.list()
    }

    pub fn find_doctor(&self, id: DoctorId) -> Option<&Doctor> {
        self.doctors.find(id)
    }

    // ----- patients -----

    pub fn add_patient(&mut self, request: &RegisterPatientRequest) -> Result<Patient, PatientError> {
        self.patients.register(request)
    }

    pub fn list_patients(&self) -> &[Patient] {
        self.patients.list()
    }

    pub fn find_patient(&self, id: PatientId) -> Option<&Patient> {
        self.patients.find(id)
    }

    /// Appointments that reference the patient are kept as they are.
    pub fn remove_patient(&mut self, id: PatientId) -> Result<PatientId, PatientError> {
        self.patients.remove(id)
    }

    // ----- appointments -----

    pub fn add_appointment(
        &mut self,
        request: &BookAppointmentRequest,
    ) -> Result<Appointment, AppointmentError> {
        self.appointments.book(request, &self.patients, &self.doctors)
    }

    pub fn list_appointments(&self) -> Vec<AppointmentSummary> {
        self.appointments.summaries(&self.patients, &self.doctors)
    }

    pub fn remove_appointment(&mut self, id: AppointmentId) -> Result<AppointmentId, AppointmentError> {
        self.appointments.remove(id)
    }
}

use serde::{Deserialize, Serialize};

use appointment_cell::AppointmentSummary;
use patient_cell::Patient;

/// A patient plus the row text the front page shows for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientRow {
    #[serde(flatten)]
    pub patient: Patient,
    pub label: String,
    pub meta: String,
}

impl From<&Patient> for PatientRow {
    fn from(patient: &Patient) -> Self {
        Self {
            label: patient.display_label(),
            meta: patient.meta_label(),
            patient: patient.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentRow {
    #[serde(flatten)]
    pub summary: AppointmentSummary,
    pub label: String,
    pub meta: String,
}

impl From<AppointmentSummary> for AppointmentRow {
    fn from(summary: AppointmentSummary) -> Self {
        Self {
            label: summary.display_label(),
            meta: summary.meta_label(),
            summary,
        }
    }
}

// =====================================================================================
// REGISTRY CELL - CLINIC FRONT DESK
// =====================================================================================
//
// Owns the in-memory doctor directory, patient roster and appointment book,
// and exposes them over HTTP for the front page.
//
// =====================================================================================

pub mod handlers;
pub mod models;
pub mod registry;
pub mod router;
pub mod state;

pub use models::{AppointmentRow, PatientRow};
pub use registry::ClinicRegistry;
pub use router::registry_routes;
pub use state::{ClinicState, SharedState};

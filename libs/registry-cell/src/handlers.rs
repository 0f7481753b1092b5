use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};
use serde_json::{json, Value};
use tracing::debug;

use appointment_cell::{AppointmentError, AppointmentId, BookAppointmentRequest};
use patient_cell::{PatientError, PatientId, RegisterPatientRequest};
use shared_models::error::AppError;

use crate::models::{AppointmentRow, PatientRow};
use crate::state::SharedState;

fn patient_error(e: PatientError) -> AppError {
    AppError::from_kind(e.kind(), e.to_string())
}

fn appointment_error(e: AppointmentError) -> AppError {
    AppError::from_kind(e.kind(), e.to_string())
}

fn body_error(rejection: JsonRejection) -> AppError {
    AppError::ValidationError(rejection.body_text())
}

fn path_error(rejection: PathRejection) -> AppError {
    AppError::ValidationError(rejection.body_text())
}

#[axum::debug_handler]
pub async fn list_doctors(State(state): State<SharedState>) -> Json<Value> {
    let registry = state.registry.read().await;
    let doctors = registry.list_doctors();

    Json(json!({
        "doctors": doctors,
        "total": doctors.len()
    }))
}

// ==============================================================================
// PATIENTS
// ==============================================================================

#[axum::debug_handler]
pub async fn list_patients(State(state): State<SharedState>) -> Json<Value> {
    let registry = state.registry.read().await;
    let patients: Vec<PatientRow> = registry.list_patients().iter().map(PatientRow::from).collect();

    Json(json!({
        "total": patients.len(),
        "patients": patients
    }))
}

#[axum::debug_handler]
pub async fn add_patient(
    State(state): State<SharedState>,
    payload: Result<Json<RegisterPatientRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(request) = payload.map_err(body_error)?;
    debug!("Registering patient: {:?}", request.name);

    let patient = state
        .registry
        .write()
        .await
        .add_patient(&request)
        .map_err(patient_error)?;

    Ok(Json(json!({
        "message": format!("Patient added — ID {}", patient.id),
        "patient": PatientRow::from(&patient)
    })))
}

#[axum::debug_handler]
pub async fn remove_patient(
    State(state): State<SharedState>,
    patient_id: Result<Path<PatientId>, PathRejection>,
) -> Result<Json<Value>, AppError> {
    let Path(patient_id) = patient_id.map_err(path_error)?;
    let id = state
        .registry
        .write()
        .await
        .remove_patient(patient_id)
        .map_err(patient_error)?;

    Ok(Json(json!({
        "message": format!("Patient ID {} removed", id),
        "id": id
    })))
}

// ==============================================================================
// APPOINTMENTS
// ==============================================================================

#[axum::debug_handler]
pub async fn list_appointments(State(state): State<SharedState>) -> Json<Value> {
    let registry = state.registry.read().await;
    let appointments: Vec<AppointmentRow> = registry
        .list_appointments()
        .into_iter()
        .map(AppointmentRow::from)
        .collect();

    Json(json!({
        "total": appointments.len(),
        "appointments": appointments
    }))
}

#[axum::debug_handler]
pub async fn add_appointment(
    State(state): State<SharedState>,
    payload: Result<Json<BookAppointmentRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(request) = payload.map_err(body_error)?;
    debug!(
        "Booking appointment: patient {:?}, doctor {:?}, date {:?}",
        request.patient_id, request.doctor_id, request.date
    );

    let appointment = state
        .registry
        .write()
        .await
        .add_appointment(&request)
        .map_err(appointment_error)?;

    Ok(Json(json!({
        "message": format!("Appointment booked — ID {}", appointment.id),
        "appointment": appointment
    })))
}

#[axum::debug_handler]
pub async fn remove_appointment(
    State(state): State<SharedState>,
    appointment_id: Result<Path<AppointmentId>, PathRejection>,
) -> Result<Json<Value>, AppError> {
    let Path(appointment_id) = appointment_id.map_err(path_error)?;
    let id = state
        .registry
        .write()
        .await
        .remove_appointment(appointment_id)
        .map_err(appointment_error)?;

    Ok(Json(json!({
        "message": format!("Appointment ID {} removed", id),
        "id": id
    })))
}

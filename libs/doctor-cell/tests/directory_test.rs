// libs/doctor-cell/tests/directory_test.rs
use assert_matches::assert_matches;

use doctor_cell::*;

#[test]
fn test_default_roster_contents() {
    let directory = DoctorDirectory::default();
    assert_eq!(directory.len(), 3);

    let cardiologist = directory.find(1).expect("doctor 1 should be seeded");
    assert_eq!(cardiologist.name, "Dr. Rajesh Kumar");
    assert_eq!(cardiologist.specialty, "Cardiology");

    assert_eq!(directory.find(3).map(|d| d.specialty.as_str()), Some("Pediatrics"));
}

#[test]
fn test_seed_rejects_duplicate_ids() {
    let result = DoctorDirectory::from_seed(vec![
        Doctor::new(7, "Dr. A", "Dermatology"),
        Doctor::new(7, "Dr. B", "Oncology"),
    ]);
    assert_matches!(result, Err(DoctorError::DuplicateId(7)));
}

#[test]
fn test_seed_rejects_zero_id() {
    let result = DoctorDirectory::from_seed(vec![Doctor::new(0, "Dr. Zero", "General")]);
    assert_matches!(result, Err(DoctorError::InvalidId));
}

#[test]
fn test_custom_seed_preserves_order() {
    let directory = DoctorDirectory::from_seed(vec![
        Doctor::new(9, "Dr. Last", "Orthopedics"),
        Doctor::new(2, "Dr. First", "Radiology"),
    ])
    .unwrap();

    let names: Vec<&str> = directory.list().iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Dr. Last", "Dr. First"]);
    assert!(!directory.is_empty());
}

#[test]
fn test_doctor_serializes_flat() {
    let json = serde_json::to_value(Doctor::new(2, "Dr. Neha Verma", "Neurology")).unwrap();
    assert_eq!(json, serde_json::json!({
        "id": 2,
        "name": "Dr. Neha Verma",
        "specialty": "Neurology"
    }));
}

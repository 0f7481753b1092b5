// libs/patient-cell/tests/roster_test.rs
use assert_matches::assert_matches;

use patient_cell::*;
use shared_models::error::ErrorKind;

fn seeded_roster() -> PatientRoster {
    PatientRoster::from_seed(demo_patients()).expect("demo seed should be valid")
}

#[test]
fn test_register_appends_with_fresh_id() {
    let mut roster = seeded_roster();
    let before = roster.len();

    let patient = roster
        .register(&RegisterPatientRequest::new("Priya Sharma", 28, "Female"))
        .unwrap();

    assert_eq!(patient.id, 2);
    assert_eq!(patient.name, "Priya Sharma");
    assert_eq!(patient.age, 28);
    assert_eq!(patient.gender, Gender::Female);

    assert_eq!(roster.len(), before + 1);
    assert_eq!(roster.list().last(), Some(&patient));
    assert_eq!(roster.list().iter().filter(|p| p.id == 2).count(), 1);
}

#[test]
fn test_register_trims_name() {
    let mut roster = PatientRoster::new();
    let patient = roster
        .register(&RegisterPatientRequest::new("  Ravi Menon  ", 61, "male"))
        .unwrap();
    assert_eq!(patient.name, "Ravi Menon");
    assert_eq!(patient.gender, Gender::Male);
}

#[test]
fn test_register_rejects_missing_fields() {
    let mut roster = seeded_roster();

    let blank_name = RegisterPatientRequest::new("   ", 40, "Male");
    assert_matches!(roster.register(&blank_name), Err(PatientError::Validation(_)));

    let missing_age = RegisterPatientRequest {
        name: Some("Anita".to_string()),
        age: None,
        gender: Some("Female".to_string()),
    };
    assert_matches!(roster.register(&missing_age), Err(PatientError::Validation(_)));

    let missing_gender = RegisterPatientRequest {
        gender: None,
        ..RegisterPatientRequest::new("Anita", 40, "")
    };
    assert_matches!(roster.register(&missing_gender), Err(PatientError::Validation(_)));

    assert_eq!(roster.len(), 1);
    assert_eq!(roster.next_id(), 2);
}

#[test]
fn test_register_rejects_non_positive_age() {
    let mut roster = PatientRoster::new();
    for age in [0, -3] {
        let result = roster.register(&RegisterPatientRequest::new("Kiran", age, "Other"));
        assert_matches!(result, Err(PatientError::Validation(msg)) if msg.contains("positive"));
    }
    let too_old = RegisterPatientRequest::new("Kiran", i64::from(u32::MAX) + 1, "Other");
    assert_matches!(roster.register(&too_old), Err(PatientError::Validation(_)));
}

#[test]
fn test_register_rejects_unknown_gender() {
    let mut roster = PatientRoster::new();
    let result = roster.register(&RegisterPatientRequest::new("Sam", 22, "robot"));
    assert_matches!(result, Err(PatientError::Validation(msg)) if msg.contains("robot"));
}

#[test]
fn test_remove_then_remove_again() {
    let mut roster = seeded_roster();

    assert_eq!(roster.remove(1), Ok(1));
    assert!(roster.find(1).is_none());
    assert!(roster.list().iter().all(|p| p.id != 1));

    let err = roster.remove(1).unwrap_err();
    assert_matches!(err, PatientError::NotFound(1));
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_ids_are_never_reused() {
    let mut roster = seeded_roster();
    let second = roster
        .register(&RegisterPatientRequest::new("Meera Iyer", 45, "Female"))
        .unwrap();
    assert_eq!(second.id, 2);

    roster.remove(2).unwrap();
    let third = roster
        .register(&RegisterPatientRequest::new("Arjun Das", 19, "Male"))
        .unwrap();
    assert_eq!(third.id, 3);
}

#[test]
fn test_remove_keeps_order_of_others() {
    let mut roster = seeded_roster();
    roster.register(&RegisterPatientRequest::new("B", 2, "Male")).unwrap();
    roster.register(&RegisterPatientRequest::new("C", 3, "Female")).unwrap();

    roster.remove(2).unwrap();
    let ids: Vec<PatientId> = roster.list().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn test_seed_rejects_duplicates() {
    let mut seed = demo_patients();
    seed.extend(demo_patients());
    assert_matches!(PatientRoster::from_seed(seed), Err(PatientError::DuplicateId(1)));
}

#[test]
fn test_row_labels() {
    let patient = &demo_patients()[0];
    assert_eq!(patient.display_label(), "John Doe (Age 35)");
    assert_eq!(patient.meta_label(), "ID:1 • Male");
}

#[test]
fn test_request_decodes_with_missing_fields() {
    let request: RegisterPatientRequest =
        serde_json::from_value(serde_json::json!({ "name": "Only Name" })).unwrap();
    assert_eq!(request.age, None);
    assert_matches!(request.validate(), Err(PatientError::Validation(_)));
}

fn patient_with_id(id: PatientId) -> Patient {
    Patient {
        id,
        name: "Edge Case".to_string(),
        age: 40,
        gender: Gender::Other,
    }
}

#[test]
fn test_seed_at_max_id_reports_exhaustion() {
    let err = PatientRoster::from_seed(vec![patient_with_id(u32::MAX)]).unwrap_err();
    assert_matches!(err, PatientError::IdsExhausted);
    assert_eq!(err.kind(), ErrorKind::Capacity);
}

#[test]
fn test_register_stops_before_counter_wraps() {
    let mut roster = PatientRoster::from_seed(vec![patient_with_id(u32::MAX - 1)]).unwrap();
    assert_eq!(roster.next_id(), u32::MAX);

    let result = roster.register(&RegisterPatientRequest::new("Late Arrival", 30, "Male"));
    assert_matches!(result, Err(PatientError::IdsExhausted));
    assert_eq!(roster.len(), 1);
    assert_eq!(roster.next_id(), u32::MAX);
}

#[test]
fn test_seed_rejects_zero_id() {
    let result = PatientRoster::from_seed(vec![patient_with_id(0)]);
    assert_matches!(result, Err(PatientError::InvalidId));
}

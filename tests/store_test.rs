//! Tests for the in-memory stores and the protocol number generator

use chrono::NaiveDate;

use dealership::model::{
    ContactBestTime, ContactDraft, ContactPreference, ContactStatus, ContactSubject,
    ContactUpdateRequest,
};
use dealership::seed::seed_cars;
use dealership::store::{CarStore, ContactStore, ProtocolCounter};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn draft(car_id: &str) -> ContactDraft {
    ContactDraft {
        car_id: car_id.to_string(),
        car_model: "Toyota Corolla XEi (2023)".to_string(),
        name: "Maria Silva".to_string(),
        email: "maria@example.com".to_string(),
        phone: "(11) 98765-4321".to_string(),
        preference: ContactPreference::WhatsApp,
        best_time: ContactBestTime::Any,
        subject: ContactSubject::TestDrive,
        message: "Gostaria de agendar um test drive.".to_string(),
        financing: false,
        terms_accepted: true,
        newsletter: false,
        ip_address: "0.0.0.0".to_string(),
    }
}

#[test]
fn test_protocol_same_day_sequence_has_no_gaps() {
    let mut counter = ProtocolCounter::new();
    let today = day(2026, 8, 5);

    assert_eq!(counter.next(today), "2026080500001");
    assert_eq!(counter.next(today), "2026080500002");
    assert_eq!(counter.next(today), "2026080500003");
}

#[test]
fn test_protocol_resets_on_day_change() {
    let mut counter = ProtocolCounter::new();

    assert_eq!(counter.next(day(2026, 8, 5)), "2026080500001");
    assert_eq!(counter.next(day(2026, 8, 5)), "2026080500002");

    // New calendar day starts over at 1
    assert_eq!(counter.next(day(2026, 8, 6)), "2026080600001");
}

#[test]
fn test_protocol_numbers_unique_within_a_day() {
    let mut counter = ProtocolCounter::new();
    let today = day(2026, 1, 31);

    let mut seen = std::collections::HashSet::new();
    for _ in 0..500 {
        assert!(seen.insert(counter.next(today)));
    }
}

#[test]
fn test_car_store_lookup() {
    let store = CarStore::with_records(seed_cars());

    assert_eq!(store.len(), 15);
    assert_eq!(store.get_by_id("car-001").unwrap().model, "Corolla XEi");
    assert!(store.get_by_id("car-999").is_none());

    // Snapshot preserves seed order
    let all = store.get_all();
    assert_eq!(all[0].id, "car-001");
    assert_eq!(all[14].id, "car-015");
}

#[test]
fn test_contact_store_add_assigns_system_fields() {
    let store = ContactStore::new();

    let contact = store.add(draft("car-001"));

    assert!(contact.id.starts_with("contact-"));
    assert!(contact.protocol.ends_with("00001"));
    assert_eq!(contact.status, ContactStatus::New);
    assert!(contact.consultant_id.is_none());
    assert_eq!(contact.date_created, contact.date_modified);

    let stored = store.get_by_id(&contact.id).unwrap();
    assert_eq!(stored.protocol, contact.protocol);
}

#[test]
fn test_contact_store_update_applies_partial_changes() {
    let store = ContactStore::new();
    let contact = store.add(draft("car-001"));

    let updated = store
        .update(
            &contact.id,
            &ContactUpdateRequest {
                status: Some(ContactStatus::InProgress),
                consultant_id: Some("consultant-07".to_string()),
                notes: None,
            },
        )
        .unwrap();

    assert_eq!(updated.status, ContactStatus::InProgress);
    assert_eq!(updated.consultant_id.as_deref(), Some("consultant-07"));
    // Untouched fields survive the update
    assert_eq!(updated.name, "Maria Silva");
    assert!(updated.notes.is_none());
    assert!(updated.date_modified >= updated.date_created);
}

#[test]
fn test_contact_store_update_unknown_id() {
    let store = ContactStore::new();

    let result = store.update(
        "nonexistent",
        &ContactUpdateRequest {
            status: Some(ContactStatus::Completed),
            consultant_id: None,
            notes: None,
        },
    );

    assert!(result.is_none());
}

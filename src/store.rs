//! In-memory stores and shared application state
//!
//! This module owns the two record collections (cars, contacts) and the
//! state handed to the Axum router. Stores are explicit instances built in
//! `main` (or per-test) and injected through the application state, so tests
//! can supply isolated fixtures instead of sharing module-level singletons.
//!
//! The car collection is populated once at startup and treated as read-only
//! by the catalog engine; contact creation is append-only under a freshly
//! generated identifier. The only state with a monotonic invariant is the
//! daily protocol counter, guarded by a single `Mutex`.

use std::sync::{Arc, Mutex, RwLock};

use chrono::{NaiveDate, Utc};
use rand::Rng;

use crate::model::{Car, Contact, ContactDraft, ContactStatus, ContactUpdateRequest};

/// Read-mostly collection of car records
///
/// Lookups are linear scans; the catalog is small and queried as a whole
/// by the engine anyway.
pub struct CarStore {
    records: RwLock<Vec<Car>>,
}

impl CarStore {
    /// Empty store, mainly for tests
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Store pre-populated with the given records (seed order is preserved)
    pub fn with_records(records: Vec<Car>) -> Self {
        CarStore {
            records: RwLock::new(records),
        }
    }

    /// Snapshot of every record, in insertion order
    pub fn get_all(&self) -> Vec<Car> {
        self.records.read().unwrap().clone()
    }

    /// Look up a single record by its identifier
    pub fn get_by_id(&self, id: &str) -> Option<Car> {
        self.records
            .read()
            .unwrap()
            .iter()
            .find(|car| car.id == id)
            .cloned()
    }

    /// Append a record; identifiers are assumed unique across the collection
    pub fn add(&self, car: Car) {
        self.records.write().unwrap().push(car);
    }

    pub fn len(&self) -> usize {
        self.records.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for CarStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Generates protocol numbers in format YYYYMMDD + 5-digit daily sequence
///
/// The sequence restarts at 1 whenever the calendar day changes and never
/// repeats within a day. Days are UTC. The day is passed in by the caller so
/// rollover can be exercised in tests without clock control.
#[derive(Debug)]
pub struct ProtocolCounter {
    last_day: Option<NaiveDate>,
    sequence: u32,
}

impl ProtocolCounter {
    pub fn new() -> Self {
        ProtocolCounter {
            last_day: None,
            sequence: 0,
        }
    }

    /// Next protocol number for the given day
    pub fn next(&mut self, day: NaiveDate) -> String {
        if self.last_day != Some(day) {
            self.sequence = 0;
            self.last_day = Some(day);
        }

        self.sequence += 1;
        format!("{}{:05}", day.format("%Y%m%d"), self.sequence)
    }
}

impl Default for ProtocolCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Append-only collection of contact/lead records
pub struct ContactStore {
    records: RwLock<Vec<Contact>>,
    protocol: Mutex<ProtocolCounter>,
}

impl ContactStore {
    pub fn new() -> Self {
        ContactStore {
            records: RwLock::new(Vec::new()),
            protocol: Mutex::new(ProtocolCounter::new()),
        }
    }

    /// Snapshot of every record, in insertion order
    pub fn get_all(&self) -> Vec<Contact> {
        self.records.read().unwrap().clone()
    }

    /// Look up a single record by its identifier
    pub fn get_by_id(&self, id: &str) -> Option<Contact> {
        self.records
            .read()
            .unwrap()
            .iter()
            .find(|contact| contact.id == id)
            .cloned()
    }

    /// Materialize a draft into a stored record
    ///
    /// Assigns the identifier and protocol number, stamps both timestamps,
    /// and starts the lifecycle at `Novo`.
    pub fn add(&self, draft: ContactDraft) -> Contact {
        let now = Utc::now();
        let protocol = self.protocol.lock().unwrap().next(now.date_naive());
        let id = format!(
            "contact-{}-{:03}",
            now.timestamp_millis(),
            rand::rng().random_range(0..1000)
        );

        let contact = Contact {
            id,
            protocol,
            car_id: draft.car_id,
            car_model: draft.car_model,
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            preference: draft.preference,
            best_time: draft.best_time,
            subject: draft.subject,
            message: draft.message,
            financing: draft.financing,
            terms_accepted: draft.terms_accepted,
            newsletter: draft.newsletter,
            ip_address: draft.ip_address,
            status: ContactStatus::New,
            consultant_id: None,
            notes: None,
            date_created: now,
            date_modified: now,
        };

        self.records.write().unwrap().push(contact.clone());
        contact
    }

    /// Apply a partial update (status/consultant/notes) and refresh the
    /// modification timestamp
    ///
    /// Returns `None` when the identifier does not resolve.
    pub fn update(&self, id: &str, changes: &ContactUpdateRequest) -> Option<Contact> {
        let mut records = self.records.write().unwrap();
        let contact = records.iter_mut().find(|contact| contact.id == id)?;

        if let Some(status) = changes.status {
            contact.status = status;
        }
        if let Some(consultant_id) = &changes.consultant_id {
            contact.consultant_id = Some(consultant_id.clone());
        }
        if let Some(notes) = &changes.notes {
            contact.notes = Some(notes.clone());
        }
        contact.date_modified = Utc::now();

        Some(contact.clone())
    }
}

impl Default for ContactStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Application state shared across all request handlers
///
/// Both stores are wrapped in `Arc` for cheap cloning into the Axum router.
#[derive(Clone)]
pub struct AppState {
    pub cars: Arc<CarStore>,
    pub contacts: Arc<ContactStore>,
}

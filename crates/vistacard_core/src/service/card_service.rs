//! Card use-case service.
//!
//! # Responsibility
//! - Provide create/update/save/load entry points for core callers.
//! - Enforce the required-field precondition before persistence.
//!
//! # Invariants
//! - `save_card` never reaches storage while required fields are
//!   missing; the error names exactly the missing fields.
//! - Not-found stays a first-class `None` outcome, never an error
//!   carrying partial data.

use crate::model::card::{CardField, CardRecord};
use crate::repo::card_store::{generate_identifier, CardStore};
use crate::repo::kv::{KeyValueStore, StorageError};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, CardServiceError>;

/// Service error for card use-cases.
#[derive(Debug)]
pub enum CardServiceError {
    /// Required fields are still empty; save was not attempted.
    MissingFields(Vec<CardField>),
    /// Persistence-layer failure; the record stays unsaved.
    Storage(StorageError),
}

impl Display for CardServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingFields(fields) => {
                let names: Vec<&str> = fields.iter().map(|field| field.name()).collect();
                write!(f, "missing required fields: {}", names.join(", "))
            }
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CardServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::MissingFields(_) => None,
            Self::Storage(err) => Some(err),
        }
    }
}

impl From<StorageError> for CardServiceError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Use-case service wrapper over identifier-addressed card storage.
pub struct CardService<S: KeyValueStore> {
    store: CardStore<S>,
}

impl<S: KeyValueStore> CardService<S> {
    /// Creates a service writing through the provided storage backend.
    pub fn new(storage: S) -> Self {
        Self {
            store: CardStore::new(storage),
        }
    }

    /// Creates an in-memory card with a fresh identifier and empty
    /// fields. Nothing is persisted until `save_card`.
    pub fn new_card(&self) -> CardRecord {
        let record = CardRecord::with_identifier(generate_identifier());
        info!(
            "event=card_create module=card_service status=ok card_id={}",
            record.identifier
        );
        record
    }

    /// Replaces one field's value on an in-memory record.
    pub fn update_field(&self, record: &mut CardRecord, field: CardField, value: impl Into<String>) {
        record.update(field, value);
    }

    /// Persists a record under its identifier's key.
    ///
    /// # Errors
    /// - `MissingFields` when name/title/email are not all filled in;
    ///   storage is not touched in that case.
    /// - `Storage` when the backend rejects the write; the in-memory
    ///   record is left unsaved.
    pub fn save_card(&self, record: &CardRecord) -> ServiceResult<()> {
        let missing = record.missing_required();
        if !missing.is_empty() {
            return Err(CardServiceError::MissingFields(missing));
        }

        self.store.save(record)?;
        Ok(())
    }

    /// Loads a card by identifier.
    ///
    /// `Ok(None)` is the not-found outcome (absent key or corrupt
    /// stored value); callers must render it as an explicit not-found
    /// state.
    pub fn load_card(&self, identifier: &str) -> ServiceResult<Option<CardRecord>> {
        Ok(self.store.load(identifier)?)
    }
}

//! Card persistence: identifier generation and id -> record mapping.
//!
//! # Responsibility
//! - Generate short, URL-safe, collision-resistant card identifiers.
//! - Serialize records to JSON text and map them under prefixed keys.
//!
//! # Invariants
//! - Storage key is a deterministic function of the identifier only:
//!   `"vistacard-card-" + identifier`.
//! - A stored value that fails to parse is reported as not-found,
//!   never surfaced as partial data.
//! - `save` overwrites any existing value under the same key.

use crate::model::card::{CardId, CardRecord};
use crate::repo::kv::{KeyValueStore, StorageError, StorageResult};
use log::{info, warn};
use rand::Rng;

/// Fixed key prefix guarding against collision with unrelated entries.
pub const CARD_KEY_PREFIX: &str = "vistacard-card-";

/// Identifier length in symbols.
pub const IDENTIFIER_LENGTH: usize = 8;

/// URL-safe alphabet with visually ambiguous symbols removed
/// (no `0`/`O`, no `1`/`l`/`I`).
pub const IDENTIFIER_ALPHABET: &[u8] =
    b"23456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Produces a fresh card identifier.
///
/// # Contract
/// - Two calls return different identifiers with overwhelming
///   probability (57^8 token space); no uniqueness probe against
///   existing storage is performed and callers need not retry.
pub fn generate_identifier() -> CardId {
    let mut rng = rand::thread_rng();
    (0..IDENTIFIER_LENGTH)
        .map(|_| IDENTIFIER_ALPHABET[rng.gen_range(0..IDENTIFIER_ALPHABET.len())] as char)
        .collect()
}

/// Derives the storage key for one card identifier.
pub fn storage_key(identifier: &str) -> String {
    format!("{CARD_KEY_PREFIX}{identifier}")
}

/// Identifier-addressed card persistence over an injected key-value
/// store.
pub struct CardStore<S: KeyValueStore> {
    storage: S,
}

impl<S: KeyValueStore> CardStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Serializes `record` and writes it under its identifier's key.
    ///
    /// # Errors
    /// - Propagates storage failures unchanged; on error nothing was
    ///   written and the in-memory record is simply not persisted.
    pub fn save(&self, record: &CardRecord) -> StorageResult<()> {
        let serialized = serde_json::to_string(record)
            .map_err(|err| StorageError::Unavailable(format!("serialize card: {err}")))?;
        self.storage
            .set(&storage_key(&record.identifier), &serialized)?;
        info!(
            "event=card_save module=card_store status=ok card_id={}",
            record.identifier
        );
        Ok(())
    }

    /// Loads the record stored under `identifier`.
    ///
    /// Returns `Ok(None)` both when the key is absent and when the
    /// stored text is not a valid record; a corrupt entry must never
    /// masquerade as card data.
    pub fn load(&self, identifier: &str) -> StorageResult<Option<CardRecord>> {
        let Some(serialized) = self.storage.get(&storage_key(identifier))? else {
            return Ok(None);
        };

        match serde_json::from_str::<CardRecord>(&serialized) {
            Ok(record) => Ok(Some(record)),
            Err(err) => {
                warn!(
                    "event=card_load module=card_store status=corrupt card_id={identifier} error={err}"
                );
                Ok(None)
            }
        }
    }

    /// Access to the underlying storage, for callers composing other
    /// reads/writes over the same backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::{generate_identifier, storage_key, IDENTIFIER_ALPHABET, IDENTIFIER_LENGTH};

    #[test]
    fn identifiers_use_configured_length_and_alphabet() {
        for _ in 0..100 {
            let id = generate_identifier();
            assert_eq!(id.len(), IDENTIFIER_LENGTH);
            assert!(id.bytes().all(|b| IDENTIFIER_ALPHABET.contains(&b)));
        }
    }

    #[test]
    fn storage_key_appends_identifier_to_fixed_prefix() {
        assert_eq!(storage_key("abc123"), "vistacard-card-abc123");
    }
}

//! Core domain logic for VistaCard, a digital business card generator.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod qr;
pub mod render;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::card::{CardField, CardId, CardRecord, ALL_FIELDS, REQUIRED_FIELDS};
pub use model::template::{TemplatePreset, ALL_PRESETS};
pub use qr::target::{
    qr_image_url, resolve_target, share_url, strip_phone_digits, QrCaption, QrTarget,
};
pub use render::render_card;
pub use repo::card_store::{
    generate_identifier, storage_key, CardStore, CARD_KEY_PREFIX, IDENTIFIER_ALPHABET,
    IDENTIFIER_LENGTH,
};
pub use repo::kv::{
    KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore, StorageError, StorageResult,
};
pub use service::card_service::{CardService, CardServiceError, ServiceResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

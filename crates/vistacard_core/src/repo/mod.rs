//! Storage layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the key-value storage contract the card store writes
//!   through.
//! - Isolate SQLite details from service/business orchestration.
//!
//! # Invariants
//! - The card store is the only writer of `vistacard-card-*` keys.
//! - Load paths surface corrupt persisted state as not-found instead
//!   of returning partial data.

pub mod card_store;
pub mod kv;

//! Domain model for digital business cards.
//!
//! # Responsibility
//! - Define the canonical card record and its closed field set.
//! - Define the named style presets consumed by the text renderer.
//!
//! # Invariants
//! - Every card is identified by a stable short `CardId`.
//! - Field updates go through the closed `CardField` enum; unknown
//!   field names are rejected at the boundary.

pub mod card;
pub mod template;

//! Card record model.
//!
//! # Responsibility
//! - Define the single persisted entity: one card, one flat record.
//! - Provide a total per-field update over a closed field set.
//!
//! # Invariants
//! - `identifier` is assigned at creation and never regenerated or
//!   mutated afterwards.
//! - `update` replaces exactly one named field and preserves all
//!   others; unknown field names never reach it (`CardField::parse`
//!   rejects them at the boundary).
//! - The serialized JSON shape uses camelCase names and `cardId` for
//!   the identifier, matching the historically stored format.

use serde::{Deserialize, Serialize};

/// Stable short identifier addressing one card record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type CardId = String;

/// The full set of a card's field values, plus its identifier.
///
/// Every field except `identifier` may be empty; emptiness is the
/// "absent" state (there are no `Option` fields by design, mirroring
/// the form-driven origin of this record).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRecord {
    /// Serialized as `cardId` to match the stored schema naming.
    #[serde(rename = "cardId")]
    pub identifier: CardId,
    pub full_name: String,
    pub title: String,
    pub bio: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub location_url: String,
    pub linkedin: String,
    pub instagram: String,
    pub facebook: String,
    pub twitter: String,
    pub threads: String,
    pub whatsapp: String,
    pub youtube: String,
}

/// Closed set of mutable card fields.
///
/// The identifier is deliberately not listed: it is immutable after
/// creation and must never be reachable from the update path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardField {
    FullName,
    Title,
    Bio,
    Email,
    Phone,
    Location,
    LocationUrl,
    Linkedin,
    Instagram,
    Facebook,
    Twitter,
    Threads,
    Whatsapp,
    Youtube,
}

/// All mutable fields in declaration order.
pub const ALL_FIELDS: &[CardField] = &[
    CardField::FullName,
    CardField::Title,
    CardField::Bio,
    CardField::Email,
    CardField::Phone,
    CardField::Location,
    CardField::LocationUrl,
    CardField::Linkedin,
    CardField::Instagram,
    CardField::Facebook,
    CardField::Twitter,
    CardField::Threads,
    CardField::Whatsapp,
    CardField::Youtube,
];

/// Fields that must be non-empty before a card may be saved.
pub const REQUIRED_FIELDS: &[CardField] = &[CardField::FullName, CardField::Title, CardField::Email];

impl CardField {
    /// Parses an external field name into the closed enum.
    ///
    /// Returns `None` for unknown names so callers reject them instead
    /// of silently merging arbitrary keys into the record.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "fullName" => Some(Self::FullName),
            "title" => Some(Self::Title),
            "bio" => Some(Self::Bio),
            "email" => Some(Self::Email),
            "phone" => Some(Self::Phone),
            "location" => Some(Self::Location),
            "locationUrl" => Some(Self::LocationUrl),
            "linkedin" => Some(Self::Linkedin),
            "instagram" => Some(Self::Instagram),
            "facebook" => Some(Self::Facebook),
            "twitter" => Some(Self::Twitter),
            "threads" => Some(Self::Threads),
            "whatsapp" => Some(Self::Whatsapp),
            "youtube" => Some(Self::Youtube),
            _ => None,
        }
    }

    /// Canonical external name, matching the serialized JSON keys.
    pub fn name(self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Title => "title",
            Self::Bio => "bio",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Location => "location",
            Self::LocationUrl => "locationUrl",
            Self::Linkedin => "linkedin",
            Self::Instagram => "instagram",
            Self::Facebook => "facebook",
            Self::Twitter => "twitter",
            Self::Threads => "threads",
            Self::Whatsapp => "whatsapp",
            Self::Youtube => "youtube",
        }
    }
}

impl CardRecord {
    /// Creates a record with the given identifier and all fields empty.
    ///
    /// # Invariants
    /// - The provided `identifier` must remain stable for this record's
    ///   lifetime; there is no API to change it afterwards.
    pub fn with_identifier(identifier: impl Into<CardId>) -> Self {
        Self {
            identifier: identifier.into(),
            ..Self::default()
        }
    }

    /// Replaces exactly one field's value, preserving all others.
    pub fn update(&mut self, field: CardField, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }

    /// Returns the current value of one field.
    pub fn get(&self, field: CardField) -> &str {
        match field {
            CardField::FullName => &self.full_name,
            CardField::Title => &self.title,
            CardField::Bio => &self.bio,
            CardField::Email => &self.email,
            CardField::Phone => &self.phone,
            CardField::Location => &self.location,
            CardField::LocationUrl => &self.location_url,
            CardField::Linkedin => &self.linkedin,
            CardField::Instagram => &self.instagram,
            CardField::Facebook => &self.facebook,
            CardField::Twitter => &self.twitter,
            CardField::Threads => &self.threads,
            CardField::Whatsapp => &self.whatsapp,
            CardField::Youtube => &self.youtube,
        }
    }

    /// Returns the required fields that are still empty.
    ///
    /// Order is stable so user-facing messages list fields
    /// deterministically.
    pub fn missing_required(&self) -> Vec<CardField> {
        REQUIRED_FIELDS
            .iter()
            .copied()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }

    /// Returns whether the record is complete enough to save.
    pub fn is_complete(&self) -> bool {
        self.missing_required().is_empty()
    }

    fn field_mut(&mut self, field: CardField) -> &mut String {
        match field {
            CardField::FullName => &mut self.full_name,
            CardField::Title => &mut self.title,
            CardField::Bio => &mut self.bio,
            CardField::Email => &mut self.email,
            CardField::Phone => &mut self.phone,
            CardField::Location => &mut self.location,
            CardField::LocationUrl => &mut self.location_url,
            CardField::Linkedin => &mut self.linkedin,
            CardField::Instagram => &mut self.instagram,
            CardField::Facebook => &mut self.facebook,
            CardField::Twitter => &mut self.twitter,
            CardField::Threads => &mut self.threads,
            CardField::Whatsapp => &mut self.whatsapp,
            CardField::Youtube => &mut self.youtube,
        }
    }
}

//! QR target resolution and image-request construction.
//!
//! # Responsibility
//! - Pick exactly one canonical URL a scanned code should open.
//! - Build the image-request URL for the external QR renderer.
//!
//! # See also
//! - `qr::target` for the priority rules.

pub mod target;

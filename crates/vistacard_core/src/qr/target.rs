//! QR target resolver.
//!
//! # Responsibility
//! - Deterministically choose the one URL a card's QR code encodes:
//!   personal web link, WhatsApp chat link, or the card's share page.
//! - Construct the external QR-image request URL for a chosen target.
//!
//! # Invariants
//! - Strict priority, first match wins; signals are never combined.
//! - Empty-string fields count as absent (falsy check).
//! - Phone normalization strips every non-digit including a leading
//!   `+`; the chat link always carries a plain digit string. The chat
//!   service's URL scheme requires exactly this shape.
//! - Image-request construction is pure; nothing here performs I/O.

use once_cell::sync::Lazy;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;

/// Chat-service prefix a stripped phone number is appended to.
pub const WHATSAPP_URL_PREFIX: &str = "https://wa.me/";

/// External QR renderer endpoint.
pub const QR_CHART_ENDPOINT: &str = "https://chart.googleapis.com/chart";

/// Fixed render configuration: size, foreground color,
/// error-correction level. Not computed, by contract.
pub const QR_IMAGE_SIZE: &str = "200x200";
pub const QR_IMAGE_COLOR: &str = "000000";
pub const QR_ERROR_CORRECTION: &str = "H|1";

static NON_DIGIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\D").expect("valid non-digit regex"));

// Keep unreserved characters (RFC 3986) readable; everything else in
// the QR data value gets percent-encoded.
const QUERY_VALUE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Caption the UI shows next to a QR code, naming what scanning does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QrCaption {
    VisitWebsite,
    ChatOnWhatsApp,
    ViewDigitalCard,
}

impl QrCaption {
    pub fn label(self) -> &'static str {
        match self {
            Self::VisitWebsite => "Scan to visit website",
            Self::ChatOnWhatsApp => "Scan to chat on WhatsApp",
            Self::ViewDigitalCard => "Scan to view digital card",
        }
    }
}

/// The single URL a QR code is built to encode, plus its caption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrTarget {
    pub url: String,
    pub caption: QrCaption,
}

/// Builds the canonical share URL for a card.
pub fn share_url(origin: &str, identifier: &str) -> String {
    format!("{origin}/card/{identifier}")
}

/// Strips every non-digit character from a phone number.
///
/// A leading `+` is dropped too; `"000"` stays `"000"` (no
/// minimum-length validation).
pub fn strip_phone_digits(phone: &str) -> String {
    NON_DIGIT_RE.replace_all(phone, "").into_owned()
}

/// Resolves the one target a card's QR code should encode.
///
/// Priority, first match wins:
/// 1. non-empty `web_link` -> that link, verbatim;
/// 2. non-empty `phone` -> WhatsApp chat link over stripped digits;
/// 3. non-empty `identifier` -> the card's canonical share URL;
/// 4. nothing usable -> `None` (no guessed/malformed URL).
pub fn resolve_target(
    origin: &str,
    identifier: Option<&str>,
    web_link: Option<&str>,
    phone: Option<&str>,
) -> Option<QrTarget> {
    if let Some(link) = non_empty(web_link) {
        return Some(QrTarget {
            url: link.to_string(),
            caption: QrCaption::VisitWebsite,
        });
    }

    if let Some(number) = non_empty(phone) {
        return Some(QrTarget {
            url: format!("{WHATSAPP_URL_PREFIX}{}", strip_phone_digits(number)),
            caption: QrCaption::ChatOnWhatsApp,
        });
    }

    if let Some(id) = non_empty(identifier) {
        return Some(QrTarget {
            url: share_url(origin, id),
            caption: QrCaption::ViewDigitalCard,
        });
    }

    None
}

/// Builds the QR renderer request URL for a chosen target.
///
/// Pure construction; fetching the image is the caller's concern.
pub fn qr_image_url(target: &str) -> String {
    let encoded = utf8_percent_encode(target, QUERY_VALUE_ENCODE_SET);
    format!(
        "{QR_CHART_ENDPOINT}?cht=qr&chs={QR_IMAGE_SIZE}&chl={encoded}&chco={QR_IMAGE_COLOR}&chld={QR_ERROR_CORRECTION}"
    )
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.is_empty())
}

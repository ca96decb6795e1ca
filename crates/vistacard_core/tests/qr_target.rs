use vistacard_core::{qr_image_url, resolve_target, share_url, QrCaption, QrTarget};

const ORIGIN: &str = "https://vistacard.local";

#[test]
fn web_link_wins_over_phone_and_identifier() {
    let target = resolve_target(
        ORIGIN,
        Some("abc123"),
        Some("https://x.example"),
        Some("+1 (555) 000-1111"),
    )
    .unwrap();

    assert_eq!(
        target,
        QrTarget {
            url: "https://x.example".to_string(),
            caption: QrCaption::VisitWebsite,
        }
    );
}

#[test]
fn phone_falls_back_to_whatsapp_link_with_stripped_digits() {
    let target = resolve_target(ORIGIN, Some("abc123"), Some(""), Some("+1 (555) 000-1111"))
        .unwrap();

    assert_eq!(target.url, "https://wa.me/15550001111");
    assert_eq!(target.caption, QrCaption::ChatOnWhatsApp);
}

#[test]
fn short_phone_digits_are_preserved_verbatim() {
    let target = resolve_target(ORIGIN, Some("abc123"), Some(""), Some("000")).unwrap();
    assert_eq!(target.url, "https://wa.me/000");
}

#[test]
fn no_hints_fall_back_to_canonical_share_url() {
    let target = resolve_target(ORIGIN, Some("abc123"), Some(""), Some("")).unwrap();

    assert_eq!(target.url, "https://vistacard.local/card/abc123");
    assert_eq!(target.caption, QrCaption::ViewDigitalCard);
}

#[test]
fn missing_hints_behave_like_empty_strings() {
    let from_missing = resolve_target(ORIGIN, Some("abc123"), None, None).unwrap();
    let from_empty = resolve_target(ORIGIN, Some("abc123"), Some(""), Some("")).unwrap();
    assert_eq!(from_missing, from_empty);
}

#[test]
fn nothing_usable_yields_no_target() {
    assert_eq!(resolve_target(ORIGIN, None, None, None), None);
    assert_eq!(resolve_target(ORIGIN, Some(""), Some(""), Some("")), None);
}

#[test]
fn web_link_resolves_even_without_identifier() {
    let target = resolve_target(ORIGIN, None, Some("https://x.example"), None).unwrap();
    assert_eq!(target.url, "https://x.example");
}

#[test]
fn share_url_is_origin_card_identifier() {
    assert_eq!(share_url(ORIGIN, "abc123"), "https://vistacard.local/card/abc123");
}

#[test]
fn qr_image_url_uses_fixed_render_configuration() {
    let url = qr_image_url("https://vistacard.local/card/abc123");

    assert!(url.starts_with("https://chart.googleapis.com/chart?cht=qr&chs=200x200&chl="));
    assert!(url.contains("https%3A%2F%2Fvistacard.local%2Fcard%2Fabc123"));
    assert!(url.ends_with("&chco=000000&chld=H|1"));
    // The raw target must not leak unencoded into the query string.
    assert!(!url.contains("chl=https://"));
}

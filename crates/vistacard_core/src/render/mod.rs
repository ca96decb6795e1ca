//! Parameterized plain-text card renderer.
//!
//! One renderer consumes every `TemplatePreset`; presets only vary
//! frame glyphs and header label, never layout logic.

use crate::model::card::CardRecord;
use crate::model::template::TemplatePreset;

const CARD_WIDTH: usize = 44;

struct Frame {
    corner: char,
    horizontal: char,
    vertical: char,
}

fn frame_for(preset: TemplatePreset) -> Frame {
    match preset {
        TemplatePreset::Basic => Frame {
            corner: '+',
            horizontal: '-',
            vertical: '|',
        },
        TemplatePreset::Modern => Frame {
            corner: '*',
            horizontal: '=',
            vertical: '|',
        },
        TemplatePreset::Minimal => Frame {
            corner: ' ',
            horizontal: ' ',
            vertical: ' ',
        },
        TemplatePreset::Blue | TemplatePreset::Dark => Frame {
            corner: '#',
            horizontal: '#',
            vertical: '#',
        },
    }
}

/// Renders one card as bordered plain text.
///
/// Empty fields are omitted; social URLs render one per line.
pub fn render_card(record: &CardRecord, preset: TemplatePreset) -> String {
    let frame = frame_for(preset);
    let mut lines: Vec<String> = Vec::new();

    lines.push(record.full_name.clone());
    lines.push(record.title.clone());

    if !record.bio.is_empty() {
        lines.push(String::new());
        lines.push(record.bio.clone());
    }

    lines.push(String::new());
    push_labeled(&mut lines, "email", &record.email);
    push_labeled(&mut lines, "phone", &record.phone);
    push_labeled(&mut lines, "location", &record.location);

    let socials = [
        ("linkedin", &record.linkedin),
        ("instagram", &record.instagram),
        ("facebook", &record.facebook),
        ("twitter", &record.twitter),
        ("threads", &record.threads),
        ("whatsapp", &record.whatsapp),
        ("youtube", &record.youtube),
    ];
    if socials.iter().any(|(_, url)| !url.is_empty()) {
        lines.push(String::new());
        for (label, url) in socials {
            push_labeled(&mut lines, label, url);
        }
    }

    let mut out = String::new();
    let border: String = std::iter::once(frame.corner)
        .chain(std::iter::repeat(frame.horizontal).take(CARD_WIDTH))
        .chain(std::iter::once(frame.corner))
        .collect();

    out.push_str(border.trim_end());
    out.push('\n');
    out.push_str(&body_line(&frame, &format!("[{}]", preset.label())));
    for line in &lines {
        out.push_str(&body_line(&frame, line));
    }
    out.push_str(border.trim_end());
    out.push('\n');
    out
}

fn push_labeled(lines: &mut Vec<String>, label: &str, value: &str) {
    if !value.is_empty() {
        lines.push(format!("{label}: {value}"));
    }
}

fn body_line(frame: &Frame, content: &str) -> String {
    let mut text = content.to_string();
    if text.chars().count() > CARD_WIDTH - 2 {
        text = text.chars().take(CARD_WIDTH - 5).collect();
        text.push_str("...");
    }
    format!("{} {text:<width$} {}\n", frame.vertical, frame.vertical, width = CARD_WIDTH - 2)
        .trim_end()
        .to_string()
        + "\n"
}

//! Named card style presets.
//!
//! One closed enum of presets consumed by a single parameterized
//! renderer, instead of one hand-written variant per style.

/// Visual preset for card rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TemplatePreset {
    Basic,
    Modern,
    Minimal,
    /// Historical default style.
    #[default]
    Blue,
    Dark,
}

impl TemplatePreset {
    /// Parses an external preset name; unknown names are rejected.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "basic" => Some(Self::Basic),
            "modern" => Some(Self::Modern),
            "minimal" => Some(Self::Minimal),
            "blue" => Some(Self::Blue),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Canonical external name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Modern => "modern",
            Self::Minimal => "minimal",
            Self::Blue => "blue",
            Self::Dark => "dark",
        }
    }

    /// Human-readable label shown by preset choosers.
    pub fn label(self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Modern => "Modern",
            Self::Minimal => "Minimal",
            Self::Blue => "Blue",
            Self::Dark => "Dark",
        }
    }
}

/// All known presets in display order.
pub const ALL_PRESETS: &[TemplatePreset] = &[
    TemplatePreset::Basic,
    TemplatePreset::Modern,
    TemplatePreset::Minimal,
    TemplatePreset::Blue,
    TemplatePreset::Dark,
];

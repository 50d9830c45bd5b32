use std::fmt;

use serde::{Deserialize, Serialize};

pub const MIN_FONT_SIZE: u32 = 5;
pub const MAX_FONT_SIZE: u32 = 72;
pub const DEFAULT_FONT_SIZE: u32 = 16;

const DEFAULT_PRESETS: &[u32] = &[
    5, 6, 7, 8, 9, 10, 11, 12, 14, 16, 18, 20, 22, 24, 26, 28, 36, 48, 72,
];

/// A font size in pixels. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct FontSize(u32);

impl FontSize {
    pub fn new(px: u32) -> Option<Self> {
        if px == 0 { None } else { Some(Self(px)) }
    }

    /// Parses the text of the toolbar input. Anything that is not a positive
    /// base-10 integer is rejected.
    pub fn parse(text: &str) -> Option<Self> {
        let px: i64 = text.trim().parse().ok()?;
        u32::try_from(px).ok().and_then(Self::new)
    }

    pub fn px(self) -> u32 {
        self.0
    }

    pub fn clamp(self, min: FontSize, max: FontSize) -> FontSize {
        FontSize(self.0.clamp(min.0, max.0))
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for FontSize {
    type Error = String;

    fn try_from(px: u32) -> Result<Self, Self::Error> {
        Self::new(px).ok_or_else(|| "font size must be positive".to_string())
    }
}

impl From<FontSize> for u32 {
    fn from(size: FontSize) -> u32 {
        size.0
    }
}

fn default_presets() -> Vec<FontSize> {
    DEFAULT_PRESETS.iter().map(|&px| FontSize(px)).collect()
}

fn default_min() -> FontSize {
    FontSize(MIN_FONT_SIZE)
}

fn default_max() -> FontSize {
    FontSize(MAX_FONT_SIZE)
}

fn default_size() -> FontSize {
    FontSize(DEFAULT_FONT_SIZE)
}

/// Plugin configuration. Fixed once the plugin is attached to an editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSizeOptions {
    /// Sizes offered in the dropdown, in display order.
    #[serde(default = "default_presets")]
    pub presets: Vec<FontSize>,
    #[serde(default = "default_min")]
    pub min: FontSize,
    #[serde(default = "default_max")]
    pub max: FontSize,
    /// Size the input shows when the selection carries no explicit size.
    #[serde(default = "default_size")]
    pub default_size: FontSize,
}

impl Default for FontSizeOptions {
    fn default() -> Self {
        Self {
            presets: default_presets(),
            min: default_min(),
            max: default_max(),
            default_size: default_size(),
        }
    }
}

impl FontSizeOptions {
    pub fn clamp(&self, size: FontSize) -> FontSize {
        size.clamp(self.min, self.max)
    }
}

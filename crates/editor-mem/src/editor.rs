use vellum_fontsize::{ActiveSurfaceKind, SurfaceContext};

use crate::markdown::MemMarkdown;
use crate::richtext::MemRichText;

/// Both surfaces plus the active-surface switch, which is enough host to
/// exercise the plugin end to end. The host, not the plugin, decides which
/// surface is active.
pub struct MemEditor {
    pub richtext: MemRichText,
    pub markdown: MemMarkdown,
    mode: ActiveSurfaceKind,
}

impl MemEditor {
    pub fn new(richtext: MemRichText, markdown: MemMarkdown) -> Self {
        Self {
            richtext,
            markdown,
            mode: ActiveSurfaceKind::RichText,
        }
    }

    pub fn mode(&self) -> ActiveSurfaceKind {
        self.mode
    }

    pub fn switch_mode(&mut self, mode: ActiveSurfaceKind) {
        self.mode = mode;
    }

    /// The active surface as the tagged variant commands dispatch on.
    pub fn surface(&mut self) -> SurfaceContext<'_> {
        match self.mode {
            ActiveSurfaceKind::RichText => SurfaceContext::RichText(&mut self.richtext),
            ActiveSurfaceKind::Markup => SurfaceContext::Markup(&mut self.markdown),
        }
    }
}

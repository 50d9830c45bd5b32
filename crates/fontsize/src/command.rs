use crate::host::{ActiveSurfaceKind, LineCol, MarkupSelection, MarkupSurface, RichTextSurface};
use crate::markup::{TagRewrite, apply_font_size_tag, detect_font_size_tag};
use crate::size::{FontSize, FontSizeOptions};

/// The active editing surface, dispatched as a tagged variant rather than by
/// mode name.
pub enum SurfaceContext<'a> {
    RichText(&'a mut dyn RichTextSurface),
    Markup(&'a mut dyn MarkupSurface),
}

impl SurfaceContext<'_> {
    pub fn kind(&self) -> ActiveSurfaceKind {
        match self {
            SurfaceContext::RichText(_) => ActiveSurfaceKind::RichText,
            SurfaceContext::Markup(_) => ActiveSurfaceKind::Markup,
        }
    }

    /// Explicit font size under the current selection, if any.
    pub fn active_font_size(&self) -> Option<FontSize> {
        match self {
            SurfaceContext::RichText(surface) => surface.active_font_size(),
            SurfaceContext::Markup(surface) => detect_font_size_tag(&surface.selected_text()),
        }
    }
}

/// Applies `size` to the current selection of the active surface.
///
/// On the rich-text surface a selection spanning table cells is styled cell by
/// cell and then collapsed, so no stale multi-cell highlight survives the
/// change. On the markup surface the selected fragment is rewritten and
/// reselected, with the selection end landing exactly past the inserted text.
pub fn change_font_size(surface: &mut SurfaceContext<'_>, size: FontSize) {
    match surface {
        SurfaceContext::RichText(surface) => {
            let cells = surface.table_selection_cells();
            if cells.len() > 1 {
                for cell in cells {
                    surface.apply_font_size_in_cell(cell, size);
                }
                surface.collapse_selection_to_start();
            } else {
                surface.apply_font_size(size);
            }
            surface.highlight_selection();
        }
        SurfaceContext::Markup(surface) => {
            let selection = surface.selection();
            let selected = surface.selected_text();
            let rewrite = apply_font_size_tag(&selected, size);
            surface.replace_selection(&rewrite.result);
            surface.set_selection(MarkupSelection {
                from: selection.from,
                to: fragment_end(selection.from, &rewrite),
            });
            surface.focus();
        }
    }
}

/// Applies `current` stepped by `delta` pixels, clamped to the configured
/// bounds. Returns the size that was applied.
pub fn step_font_size(
    surface: &mut SurfaceContext<'_>,
    current: FontSize,
    delta: i32,
    options: &FontSizeOptions,
) -> FontSize {
    let next = FontSize::new(current.px().saturating_add_signed(delta))
        .map(|size| options.clamp(size))
        .unwrap_or(current);
    change_font_size(surface, next);
    next
}

/// Position just past the last byte of the rewritten fragment inserted at
/// `from`. The replacement rarely matches the original selection's length, so
/// the end is recomputed from the inserted length rather than the old bounds.
fn fragment_end(from: LineCol, rewrite: &TagRewrite) -> LineCol {
    match rewrite.result.rfind('\n') {
        None => LineCol::new(from.line, from.col + rewrite.inserted_len),
        Some(last_newline) => {
            let lines_added = rewrite.result.bytes().filter(|&b| b == b'\n').count();
            LineCol::new(from.line + lines_added, rewrite.inserted_len - last_newline - 1)
        }
    }
}

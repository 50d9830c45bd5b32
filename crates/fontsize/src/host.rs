use serde::{Deserialize, Serialize};

use crate::size::FontSize;

/// Which editing surface the host currently shows. The host switches this
/// outside the plugin's control; exactly one surface is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActiveSurfaceKind {
    RichText,
    Markup,
}

/// Host-scoped handle to one selected table cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellId(pub usize);

/// A position on the markup surface. Columns are byte offsets within the line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineCol {
    pub line: usize,
    pub col: usize,
}

impl LineCol {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkupSelection {
    pub from: LineCol,
    pub to: LineCol,
}

impl MarkupSelection {
    pub fn collapsed(at: LineCol) -> Self {
        Self { from: at, to: at }
    }

    pub fn is_collapsed(&self) -> bool {
        self.from == self.to
    }
}

/// The rich-text ("WYSIWYG") surface, as the host exposes it to the plugin.
///
/// Selections stay opaque on this side; the plugin only asks the surface to
/// act on whatever is currently selected.
pub trait RichTextSurface {
    /// Apply `size` to the current selection. An empty selection styles a
    /// zero-width span at the caret.
    fn apply_font_size(&mut self, size: FontSize);

    /// Explicit font size under the selection focus, if any.
    fn active_font_size(&self) -> Option<FontSize>;

    /// Cells covered by a table selection. Empty unless the selection spans
    /// table cells.
    fn table_selection_cells(&self) -> Vec<CellId>;

    /// Apply `size` to the whole content of one table cell.
    fn apply_font_size_in_cell(&mut self, cell: CellId, size: FontSize);

    fn collapse_selection_to_start(&mut self);

    /// Mark the current selection with the transient highlight. Idempotent.
    fn highlight_selection(&mut self);

    /// Remove the transient highlight wherever it is. Idempotent.
    fn clear_highlight(&mut self);
}

/// The plain-text markup ("markdown") surface.
pub trait MarkupSurface {
    fn selection(&self) -> MarkupSelection;

    fn set_selection(&mut self, selection: MarkupSelection);

    fn selected_text(&self) -> String;

    /// Replace the current selection with `text`.
    fn replace_selection(&mut self, text: &str);

    fn focus(&mut self);
}

/// On-screen offsets of a toolbar control, as reported by the host toolbar.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlOrigin {
    pub left: f32,
    pub top: f32,
    pub height: f32,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PopupPosition {
    pub left: f32,
    pub top: f32,
}

/// Abstract handle to the numeric input control.
pub trait FontSizeInput {
    fn value(&self) -> String;

    fn set_value(&mut self, value: &str);

    fn origin(&self) -> ControlOrigin;
}

/// Abstract handle to the preset dropdown overlay.
pub trait DropdownPopup {
    fn show_at(&mut self, position: PopupPosition);

    fn hide(&mut self);

    fn is_visible(&self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolbarItemKind {
    Divider,
    Button,
    NumberInput,
}

/// Declarative description of one toolbar control. The plugin hands these to
/// the host toolbar instead of touching concrete UI-toolkit types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolbarItem {
    pub kind: ToolbarItemKind,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
}

impl ToolbarItem {
    pub fn divider() -> Self {
        Self {
            kind: ToolbarItemKind::Divider,
            name: "divider".to_string(),
            tooltip: None,
            width: None,
        }
    }

    pub fn button(name: impl Into<String>) -> Self {
        Self {
            kind: ToolbarItemKind::Button,
            name: name.into(),
            tooltip: None,
            width: None,
        }
    }

    pub fn number_input(name: impl Into<String>) -> Self {
        Self {
            kind: ToolbarItemKind::NumberInput,
            name: name.into(),
            tooltip: None,
            width: None,
        }
    }

    pub fn tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }
}

/// The host toolbar, reduced to what the plugin needs from it.
pub trait Toolbar {
    /// Insert `item` at `position`. Negative positions count from the end,
    /// `-1` meaning append, the way host toolbars number their slots.
    fn insert_item(&mut self, position: isize, item: ToolbarItem);

    fn item(&self, name: &str) -> Option<&ToolbarItem>;

    fn item_origin(&self, name: &str) -> Option<ControlOrigin>;
}

use ropey::{LineType, Rope};
use vellum_fontsize::{LineCol, MarkupSelection, MarkupSurface};

/// In-memory markup surface: a rope buffer with a line/column selection.
///
/// Edits rebuild the rope from a string; the buffers this surface backs are
/// selection-sized, so structural rope edits would buy nothing.
pub struct MemMarkdown {
    text: Rope,
    selection: MarkupSelection,
    focused: bool,
}

impl MemMarkdown {
    pub fn new(text: &str) -> Self {
        Self {
            text: Rope::from(text),
            selection: MarkupSelection::collapsed(LineCol::new(0, 0)),
            focused: false,
        }
    }

    pub fn text(&self) -> String {
        self.text.to_string()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Selection bounds as byte offsets, ordered.
    fn selection_offsets(&self) -> (usize, usize) {
        let a = self.point_to_offset(self.selection.from);
        let b = self.point_to_offset(self.selection.to);
        (a.min(b), a.max(b))
    }

    fn point_to_offset(&self, point: LineCol) -> usize {
        if point.line >= self.text.len_lines(LineType::LF) {
            return self.text.len();
        }
        let line_start = self.text.line_to_byte_idx(point.line, LineType::LF);
        self.clip_offset((line_start + point.col).min(self.text.len()))
    }

    fn offset_to_point(&self, offset: usize) -> LineCol {
        let offset = self.clip_offset(offset);
        let line = self.text.byte_to_line_idx(offset, LineType::LF);
        let line_start = self.text.line_to_byte_idx(line, LineType::LF);
        LineCol::new(line, offset - line_start)
    }

    fn clip_offset(&self, offset: usize) -> usize {
        if offset > self.text.len() {
            return self.text.len();
        }
        if self.text.is_char_boundary(offset) {
            return offset;
        }
        self.text.floor_char_boundary(offset)
    }
}

impl MarkupSurface for MemMarkdown {
    fn selection(&self) -> MarkupSelection {
        self.selection
    }

    fn set_selection(&mut self, selection: MarkupSelection) {
        self.selection = selection;
    }

    fn selected_text(&self) -> String {
        let (start, end) = self.selection_offsets();
        self.text.slice(start..end).to_string()
    }

    fn replace_selection(&mut self, new_text: &str) {
        let (start, end) = self.selection_offsets();
        let mut text = self.text.to_string();
        text.replace_range(start..end, new_text);
        self.text = Rope::from(text.as_str());
        // Collapse onto the end of the inserted text until the caller
        // repositions the selection.
        let caret = self.offset_to_point(start + new_text.len());
        self.selection = MarkupSelection::collapsed(caret);
    }

    fn focus(&mut self) {
        self.focused = true;
    }
}

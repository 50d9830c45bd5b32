use vellum_fontsize::{CellId, FontSize, RichTextSurface};

use crate::doc::{Block, Cell, Document, RichSelection, RunStyle, merge_runs, restyle_runs};

/// In-memory rich-text surface: a run-styled document, a selection, and an
/// optional multi-cell table selection.
pub struct MemRichText {
    doc: Document,
    selection: RichSelection,
    table_selection: Vec<CellId>,
}

impl MemRichText {
    pub fn new(doc: Document, selection: RichSelection) -> Self {
        Self {
            doc,
            selection,
            table_selection: Vec::new(),
        }
    }

    pub fn doc(&self) -> &Document {
        &self.doc
    }

    pub fn selection(&self) -> &RichSelection {
        &self.selection
    }

    pub fn set_selection(&mut self, selection: RichSelection) {
        self.selection = selection;
    }

    /// Enter multi-cell table selection mode, the way the host does when the
    /// user drags across cells. Cells are numbered row-major across every
    /// table in the document.
    pub fn select_table_cells(&mut self, cells: Vec<CellId>) {
        self.table_selection = cells;
    }

    fn cell_mut(&mut self, cell: CellId) -> Option<&mut Cell> {
        let mut first = 0usize;
        for block in &mut self.doc.blocks {
            if let Block::Table(table) = block {
                if cell.0 < first + table.cells.len() {
                    return table.cells.get_mut(cell.0 - first);
                }
                first += table.cells.len();
            }
        }
        None
    }

    fn restyle_selection(&mut self, apply: &dyn Fn(RunStyle) -> RunStyle) {
        let (start, end) = self.selection.ordered();
        for block_ix in start.block..=end.block {
            let Some(Block::Paragraph(paragraph)) = self.doc.blocks.get_mut(block_ix) else {
                continue;
            };
            let len = paragraph.text().len();
            let from = if block_ix == start.block {
                start.offset
            } else {
                0
            };
            let to = if block_ix == end.block { end.offset } else { len };
            paragraph.runs = merge_runs(restyle_runs(&paragraph.runs, from, to, apply));
        }
    }
}

impl RichTextSurface for MemRichText {
    fn apply_font_size(&mut self, size: FontSize) {
        self.restyle_selection(&|mut style| {
            style.font_size = Some(size);
            style
        });
    }

    fn active_font_size(&self) -> Option<FontSize> {
        let focus = self.selection.focus;
        let Some(Block::Paragraph(paragraph)) = self.doc.blocks.get(focus.block) else {
            return None;
        };
        let mut cursor = 0usize;
        for run in &paragraph.runs {
            let run_end = cursor + run.text.len();
            if focus.offset <= run_end {
                return run.style.font_size;
            }
            cursor = run_end;
        }
        paragraph.runs.last().and_then(|run| run.style.font_size)
    }

    fn table_selection_cells(&self) -> Vec<CellId> {
        self.table_selection.clone()
    }

    fn apply_font_size_in_cell(&mut self, cell: CellId, size: FontSize) {
        let Some(cell) = self.cell_mut(cell) else {
            return;
        };
        let len = cell.inline_text().len();
        cell.runs = merge_runs(restyle_runs(&cell.runs, 0, len, &|mut style| {
            style.font_size = Some(size);
            style
        }));
    }

    fn collapse_selection_to_start(&mut self) {
        let (start, _) = self.selection.ordered();
        self.selection = RichSelection::collapsed(start);
        self.table_selection.clear();
    }

    fn highlight_selection(&mut self) {
        self.restyle_selection(&|mut style| {
            style.highlighted = true;
            style
        });
    }

    fn clear_highlight(&mut self) {
        for block in &mut self.doc.blocks {
            match block {
                Block::Paragraph(paragraph) => {
                    let mut runs = std::mem::take(&mut paragraph.runs);
                    for run in &mut runs {
                        run.style.highlighted = false;
                    }
                    paragraph.runs = merge_runs(runs);
                }
                Block::Table(table) => {
                    for cell in &mut table.cells {
                        let mut runs = std::mem::take(&mut cell.runs);
                        for run in &mut runs {
                            run.style.highlighted = false;
                        }
                        cell.runs = merge_runs(runs);
                    }
                }
            }
        }
    }
}

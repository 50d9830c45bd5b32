use serde::{Deserialize, Serialize};
use vellum_fontsize::FontSize;

/// The rich-text document: a flat list of blocks holding styled runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Document {
    #[serde(default)]
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "block", rename_all = "snake_case")]
pub enum Block {
    Paragraph(ParagraphBlock),
    Table(TableBlock),
}

impl Block {
    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph(ParagraphBlock {
            runs: vec![Run {
                text: text.into(),
                style: RunStyle::default(),
            }],
        })
    }

    pub fn table(rows: usize, cols: usize) -> Self {
        Block::Table(TableBlock {
            cols,
            cells: vec![Cell::default(); rows * cols],
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ParagraphBlock {
    #[serde(default)]
    pub runs: Vec<Run>,
}

impl ParagraphBlock {
    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }
}

/// Cells are stored row-major.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableBlock {
    pub cols: usize,
    #[serde(default)]
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Cell {
    #[serde(default)]
    pub runs: Vec<Run>,
}

impl Cell {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            runs: vec![Run {
                text: text.into(),
                style: RunStyle::default(),
            }],
        }
    }

    pub fn inline_text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Run {
    pub text: String,
    #[serde(default)]
    pub style: RunStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RunStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<FontSize>,
    #[serde(default)]
    pub highlighted: bool,
}

/// A position inside the rich-text document: a block index plus a byte offset
/// into that block's inline text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub block: usize,
    pub offset: usize,
}

impl Point {
    pub fn new(block: usize, offset: usize) -> Self {
        Self { block, offset }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichSelection {
    pub anchor: Point,
    pub focus: Point,
}

impl RichSelection {
    pub fn collapsed(point: Point) -> Self {
        Self {
            anchor: point,
            focus: point,
        }
    }

    pub fn is_collapsed(&self) -> bool {
        self.anchor == self.focus
    }

    pub fn ordered(&self) -> (Point, Point) {
        let mut start = self.anchor;
        let mut end = self.focus;
        if (end.block, end.offset) < (start.block, start.offset) {
            std::mem::swap(&mut start, &mut end);
        }
        (start, end)
    }
}

/// Restyles the byte range `start..end` of the runs' inline text, splitting
/// runs at the range boundaries. A collapsed range styles a zero-width run at
/// the caret so the style has a carrier.
pub(crate) fn restyle_runs(
    runs: &[Run],
    start: usize,
    end: usize,
    apply: &dyn Fn(RunStyle) -> RunStyle,
) -> Vec<Run> {
    if start >= end {
        return restyle_at_caret(runs, start, apply);
    }

    let mut out: Vec<Run> = Vec::new();
    let mut cursor = 0usize;

    for run in runs {
        let run_start = cursor;
        let run_end = cursor + run.text.len();
        cursor = run_end;

        if end <= run_start || start >= run_end {
            out.push(run.clone());
            continue;
        }

        let sel_start = clamp_to_char_boundary(
            &run.text,
            start.saturating_sub(run_start).min(run.text.len()),
        );
        let sel_end = clamp_to_char_boundary(
            &run.text,
            end.saturating_sub(run_start).min(run.text.len()),
        );

        if sel_start == 0 && sel_end == run.text.len() {
            let mut next = run.clone();
            next.style = apply(next.style);
            out.push(next);
            continue;
        }

        let prefix = &run.text[..sel_start];
        let middle = &run.text[sel_start..sel_end];
        let suffix = &run.text[sel_end..];

        if !prefix.is_empty() {
            out.push(Run {
                text: prefix.to_string(),
                style: run.style.clone(),
            });
        }
        if !middle.is_empty() {
            out.push(Run {
                text: middle.to_string(),
                style: apply(run.style.clone()),
            });
        }
        if !suffix.is_empty() {
            out.push(Run {
                text: suffix.to_string(),
                style: run.style.clone(),
            });
        }
    }

    if out.is_empty() {
        out.push(Run {
            text: String::new(),
            style: apply(RunStyle::default()),
        });
    }

    out
}

fn restyle_at_caret(runs: &[Run], caret: usize, apply: &dyn Fn(RunStyle) -> RunStyle) -> Vec<Run> {
    // An existing zero-width run at the caret carries the style.
    let mut cursor = 0usize;
    let mut out: Vec<Run> = runs.to_vec();
    for run in out.iter_mut() {
        let run_start = cursor;
        cursor += run.text.len();
        if run.text.is_empty() && run_start == caret {
            run.style = apply(run.style.clone());
            return out;
        }
    }

    let mut out: Vec<Run> = Vec::new();
    let mut cursor = 0usize;
    let mut placed = false;

    for run in runs {
        let run_start = cursor;
        let run_end = cursor + run.text.len();
        cursor = run_end;

        if placed || caret < run_start || caret > run_end {
            out.push(run.clone());
            continue;
        }

        let at = clamp_to_char_boundary(&run.text, caret - run_start);
        let prefix = &run.text[..at];
        let suffix = &run.text[at..];

        if !prefix.is_empty() {
            out.push(Run {
                text: prefix.to_string(),
                style: run.style.clone(),
            });
        }
        out.push(Run {
            text: String::new(),
            style: apply(run.style.clone()),
        });
        if !suffix.is_empty() {
            out.push(Run {
                text: suffix.to_string(),
                style: run.style.clone(),
            });
        }
        placed = true;
    }

    if !placed {
        out.push(Run {
            text: String::new(),
            style: apply(RunStyle::default()),
        });
    }

    out
}

/// Merges adjacent runs with identical styles. Zero-width runs survive only
/// while their style differs from their neighbours'.
pub(crate) fn merge_runs(runs: Vec<Run>) -> Vec<Run> {
    let mut out: Vec<Run> = Vec::new();
    for run in runs {
        match out.last_mut() {
            Some(last) if last.style == run.style => last.text.push_str(&run.text),
            _ => out.push(run),
        }
    }
    if out.is_empty() {
        out.push(Run::default());
    }
    out
}

pub(crate) fn clamp_to_char_boundary(s: &str, mut ix: usize) -> usize {
    ix = ix.min(s.len());
    while ix > 0 && !s.is_char_boundary(ix) {
        ix -= 1;
    }
    ix
}

use serde::Serialize;
use tracing::debug;

use super::classify::LineKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CellType {
    Markdown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub cell_type: CellType,
    pub lines: Vec<String>,
}

impl Cell {
    /// True when the cell holds nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.lines.iter().all(|l| l.trim().is_empty())
    }
}

/// Splits a line stream into markdown cells, one per H1/H2 heading plus a
/// leading cell for any text before the first heading.
#[derive(Debug, Default)]
pub struct CellBuilder {
    cells: Vec<Cell>,
    buffer: Vec<String>,
}

impl CellBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: LineKind, line: &str) {
        if kind.is_heading() {
            self.seal();
        }
        self.buffer.push(line.to_string());
    }

    fn seal(&mut self) {
        let cell = Cell {
            cell_type: CellType::Markdown,
            lines: std::mem::take(&mut self.buffer),
        };
        if cell.is_blank() {
            if !cell.lines.is_empty() {
                debug!(lines = cell.lines.len(), "discarding blank cell");
            }
            return;
        }
        self.cells.push(cell);
    }

    pub fn finish(mut self) -> Vec<Cell> {
        self.seal();
        self.cells
    }
}

/// Split an already classified line sequence into cells.
pub fn build_cells<'a, I>(lines: I) -> Vec<Cell>
where
    I: IntoIterator<Item = (LineKind, &'a str)>,
{
    let mut builder = CellBuilder::new();
    for (kind, line) in lines {
        builder.push(kind, line);
    }
    builder.finish()
}

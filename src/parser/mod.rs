pub mod cells;
pub mod classify;
pub mod sections;

use cells::Cell;
use sections::Section;

/// Split text into lines, keeping each line's terminator.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split_inclusive('\n').collect()
}

/// Two-pass pipeline: text → classified lines → H1/H2 tree.
pub fn hierarchy(text: &str) -> Vec<Section> {
    sections::build_sections(classify::classify_lines(text))
}

/// Two-pass pipeline: text → classified lines → notebook cells.
pub fn notebook_cells(text: &str) -> Vec<Cell> {
    cells::build_cells(classify::classify_lines(text))
}

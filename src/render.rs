//! JSON renderings of the section tree and the notebook cell list.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::parser::cells::{Cell, CellType};
use crate::parser::sections::Section;

pub const NBFORMAT: u32 = 4;
pub const NBFORMAT_MINOR: u32 = 4;
pub const DEFAULT_PLATFORM: &str = "colab";

#[derive(Debug, Serialize)]
pub struct Notebook<'a> {
    pub cells: Vec<NotebookCell<'a>>,
    pub metadata: BTreeMap<String, PlatformMetadata>,
    pub nbformat: u32,
    pub nbformat_minor: u32,
}

#[derive(Debug, Serialize)]
pub struct NotebookCell<'a> {
    pub cell_type: CellType,
    pub metadata: BTreeMap<String, serde_json::Value>,
    pub source: &'a [String],
}

#[derive(Debug, Serialize)]
pub struct PlatformMetadata {
    pub name: String,
}

impl<'a> Notebook<'a> {
    /// Wrap cells in the nbformat 4.4 envelope. `name` is recorded under
    /// `metadata.<platform>.name`.
    pub fn new(cells: &'a [Cell], platform: &str, name: &str) -> Self {
        let cells = cells
            .iter()
            .map(|c| NotebookCell {
                cell_type: c.cell_type,
                metadata: BTreeMap::new(),
                source: &c.lines,
            })
            .collect();
        let mut metadata = BTreeMap::new();
        metadata.insert(
            platform.to_string(),
            PlatformMetadata {
                name: name.to_string(),
            },
        );
        Notebook {
            cells,
            metadata,
            nbformat: NBFORMAT,
            nbformat_minor: NBFORMAT_MINOR,
        }
    }
}

/// Pretty-print with a four-space indent and a trailing newline.
pub fn to_json_bytes<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<Vec<u8>> {
    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut ser)?;
    out.push(b'\n');
    Ok(out)
}

pub fn render_hierarchy(sections: &[Section]) -> serde_json::Result<Vec<u8>> {
    to_json_bytes(sections)
}

pub fn render_notebook(cells: &[Cell], platform: &str, name: &str) -> serde_json::Result<Vec<u8>> {
    to_json_bytes(&Notebook::new(cells, platform, name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser;
    use serde_json::{json, Value};

    #[test]
    fn hierarchy_layout() {
        let bytes = render_hierarchy(&parser::hierarchy("# Title\nHello\n## Sub\nWorld\n")).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let expected = r###"[
    {
        "header": "# Title",
        "content": "Hello",
        "subsections": [
            {
                "header": "## Sub",
                "content": "World"
            }
        ]
    }
]
"###;
        assert_eq!(text, expected);
    }

    #[test]
    fn empty_hierarchy() {
        assert_eq!(render_hierarchy(&[]).unwrap(), b"[]\n");
    }

    #[test]
    fn notebook_shape() {
        let cells = parser::notebook_cells("Intro line\n# A\nBody\n");
        let bytes = render_notebook(&cells, DEFAULT_PLATFORM, "out.ipynb").unwrap();
        let value: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            value,
            json!({
                "cells": [
                    {"cell_type": "markdown", "metadata": {}, "source": ["Intro line\n"]},
                    {"cell_type": "markdown", "metadata": {}, "source": ["# A\n", "Body\n"]}
                ],
                "metadata": {"colab": {"name": "out.ipynb"}},
                "nbformat": 4,
                "nbformat_minor": 4
            })
        );
    }

    #[test]
    fn notebook_field_order_and_indent() {
        let bytes = render_notebook(&[], "kaggle", "n.ipynb").unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let expected = r#"{
    "cells": [],
    "metadata": {
        "kaggle": {
            "name": "n.ipynb"
        }
    },
    "nbformat": 4,
    "nbformat_minor": 4
}
"#;
        assert_eq!(text, expected);
    }

    #[test]
    fn unicode_written_raw() {
        let bytes = render_hierarchy(&parser::hierarchy("# Café\nnaïve\n")).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("\"# Café\""));
        assert!(text.contains("\"naïve\""));
    }
}

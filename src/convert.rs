use std::path::PathBuf;

use tracing::info;

use crate::error::ConvertError;
use crate::format::OutputMode;
use crate::{output, parser, render, source};

pub struct ConvertOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub mode: OutputMode,
    /// Key under which the notebook name is stored in `metadata`.
    pub platform: String,
}

/// What a successful run produced.
#[derive(Debug)]
pub struct Conversion {
    pub mode: OutputMode,
    pub output: PathBuf,
    pub sections: usize,
    pub cells: usize,
}

impl Conversion {
    pub fn message(&self) -> String {
        match self.mode {
            OutputMode::Hierarchical => format!(
                "Success! Converted to hierarchical JSON: {}",
                self.output.display()
            ),
            OutputMode::Flat => format!("Success! Notebook generated: {}", self.output.display()),
        }
    }
}

/// Read, build, render, then write. Nothing touches the output path until
/// the rendered document is complete.
pub fn convert(opts: &ConvertOptions) -> Result<Conversion, ConvertError> {
    let text = source::read_document(&opts.input)?;

    let (bytes, sections, cells) = match opts.mode {
        OutputMode::Hierarchical => {
            let tree = parser::hierarchy(&text);
            let subsections: usize = tree.iter().map(|s| s.subsections.len()).sum();
            info!(sections = tree.len(), subsections, "built section tree");
            (render::render_hierarchy(&tree)?, tree.len(), 0)
        }
        OutputMode::Flat => {
            let cells = parser::notebook_cells(&text);
            info!(cells = cells.len(), "split into cells");
            let name = output::file_name(&opts.output);
            (render::render_notebook(&cells, &opts.platform, &name)?, 0, cells.len())
        }
    };

    output::write_atomic(&opts.output, &bytes)?;

    Ok(Conversion {
        mode: opts.mode,
        output: opts.output.clone(),
        sections,
        cells,
    })
}

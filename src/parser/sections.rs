use serde::Serialize;
use tracing::debug;

use super::classify::LineKind;

pub const UNCATEGORIZED_HEADER: &str = "# Uncategorized";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub header: String,
    pub content: String,
    pub subsections: Vec<Subsection>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subsection {
    pub header: String,
    pub content: String,
}

impl Section {
    fn new(header: &str) -> Self {
        Section {
            header: header.to_string(),
            content: String::new(),
            subsections: Vec::new(),
        }
    }
}

/// Which nodes are currently open. Indices point into the builder's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Context {
    NoContext,
    InH1 { section: usize },
    InH2 { section: usize, subsection: usize },
}

/// Single-pass H1/H2 tree builder.
///
/// Plain lines are appended verbatim to whichever node is open; a heading
/// seals the previous node simply by moving the context past it. Text seen
/// before the first heading has nowhere to go and is dropped.
#[derive(Debug)]
pub struct HierarchyBuilder {
    sections: Vec<Section>,
    context: Context,
    discarded: usize,
}

impl Default for HierarchyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl HierarchyBuilder {
    pub fn new() -> Self {
        HierarchyBuilder {
            sections: Vec::new(),
            context: Context::NoContext,
            discarded: 0,
        }
    }

    pub fn push(&mut self, kind: LineKind, line: &str) {
        match kind {
            LineKind::H1 => self.open_section(line),
            LineKind::H2 => self.open_subsection(line),
            LineKind::Plain => self.append(line),
        }
    }

    fn open_section(&mut self, line: &str) {
        self.sections.push(Section::new(line.trim()));
        self.context = Context::InH1 {
            section: self.sections.len() - 1,
        };
    }

    fn open_subsection(&mut self, line: &str) {
        let section = match self.context {
            Context::NoContext => {
                debug!("level-2 heading before any level-1 heading, opening {UNCATEGORIZED_HEADER:?}");
                self.sections.push(Section::new(UNCATEGORIZED_HEADER));
                self.sections.len() - 1
            }
            Context::InH1 { section } | Context::InH2 { section, .. } => section,
        };
        let subsections = &mut self.sections[section].subsections;
        subsections.push(Subsection {
            header: line.trim().to_string(),
            content: String::new(),
        });
        self.context = Context::InH2 {
            section,
            subsection: subsections.len() - 1,
        };
    }

    fn append(&mut self, line: &str) {
        match self.context {
            Context::NoContext => {
                if !line.trim().is_empty() {
                    self.discarded += 1;
                }
            }
            Context::InH1 { section } => self.sections[section].content.push_str(line),
            Context::InH2 {
                section,
                subsection,
            } => self.sections[section].subsections[subsection]
                .content
                .push_str(line),
        }
    }

    /// Trim every node's content and hand over the tree.
    pub fn finish(self) -> Vec<Section> {
        if self.discarded > 0 {
            debug!(
                lines = self.discarded,
                "dropped text that appeared before the first heading"
            );
        }
        let mut sections = self.sections;
        for section in &mut sections {
            trim_in_place(&mut section.content);
            for sub in &mut section.subsections {
                trim_in_place(&mut sub.content);
            }
        }
        sections
    }
}

fn trim_in_place(s: &mut String) {
    let trimmed = s.trim();
    if trimmed.len() != s.len() {
        *s = trimmed.to_string();
    }
}

/// Build the section tree for an already classified line sequence.
pub fn build_sections<'a, I>(lines: I) -> Vec<Section>
where
    I: IntoIterator<Item = (LineKind, &'a str)>,
{
    let mut builder = HierarchyBuilder::new();
    for (kind, line) in lines {
        builder.push(kind, line);
    }
    builder.finish()
}

use std::sync::LazyLock;

use regex::Regex;

use super::split_lines;

static H1_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#[^\S\r\n]+\S").unwrap());
static H2_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^##[^\S\r\n]+\S").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    H1,
    H2,
    Plain,
}

impl LineKind {
    pub fn heading_level(self) -> Option<u8> {
        match self {
            LineKind::H1 => Some(1),
            LineKind::H2 => Some(2),
            LineKind::Plain => None,
        }
    }

    pub fn is_heading(self) -> bool {
        self.heading_level().is_some()
    }
}

/// Classify one raw line. The `#` run must start the line and be exactly one
/// or two long, so indented lines and `###` headings fall through to Plain.
pub fn classify_line(line: &str) -> LineKind {
    if H1_RE.is_match(line) {
        LineKind::H1
    } else if H2_RE.is_match(line) {
        LineKind::H2
    } else {
        LineKind::Plain
    }
}

/// Pair every line of `text` (terminators kept) with its kind.
pub fn classify_lines(text: &str) -> Vec<(LineKind, &str)> {
    split_lines(text)
        .into_iter()
        .map(|line| (classify_line(line), line))
        .collect()
}

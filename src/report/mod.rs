use std::fmt;

use serde::Serialize;

mod assembler;
pub mod venues;

pub use assembler::assemble;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Header,
    Workouts,
    Diet,
    Advice,
    Venues,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSection {
    pub kind: SectionKind,
    pub title: Option<String>,
    pub lines: Vec<String>,
}

impl ReportSection {
    fn new(kind: SectionKind, title: Option<&str>, lines: Vec<String>) -> Self {
        Self {
            kind,
            title: title.map(str::to_string),
            lines,
        }
    }
}

/// Formatted plan built from a recommendation response. Sections keep
/// their assembly order; rendering separates them with a blank line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanReport {
    pub sections: Vec<ReportSection>,
}

impl PlanReport {
    pub fn section(&self, kind: SectionKind) -> Option<&ReportSection> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PlanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            if let Some(title) = &section.title {
                writeln!(f, "{title}")?;
            }
            for line in &section.lines {
                writeln!(f, "{line}")?;
            }
        }
        Ok(())
    }
}

//! Markdown rendering for analysis reports.

use crate::analysis::{AnalysisReport, Heading, ListEntry, TableData};
use crate::model::ListKind;
use std::fmt::Write;

/// Convert a report to a Markdown document.
pub fn to_markdown(report: &AnalysisReport) -> String {
    MarkdownRenderer::new().render(report)
}

/// Markdown report renderer.
///
/// Sections for stages that produced nothing are omitted.
#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    title: String,
    list_marker: char,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self {
            title: "Document Analysis".to_string(),
            list_marker: '-',
        }
    }
}

impl MarkdownRenderer {
    /// Create a renderer with the default title.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the top-level heading.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the bullet marker.
    pub fn with_list_marker(mut self, marker: char) -> Self {
        self.list_marker = marker;
        self
    }

    /// Render a report.
    pub fn render(&self, report: &AnalysisReport) -> String {
        let mut output = String::new();
        let _ = writeln!(output, "# {}\n", escape_markdown(&self.title));

        if report.statistics.word_count > 0 {
            self.render_statistics(&mut output, report);
        }
        if !report.language.is_empty() {
            let _ = writeln!(output, "## Language\n\n{}\n", report.language);
        }
        if !report.keywords.is_empty() {
            self.render_keywords(&mut output, report);
        }
        if !report.summary.is_empty() {
            let _ = writeln!(output, "## Summary\n\n{}\n", report.summary);
        }
        if !report.links.is_empty() {
            self.render_links(&mut output, report);
        }
        if report.structure.has_structure {
            self.render_outline(&mut output, report);
        }
        for (i, table) in report.tables.iter().enumerate() {
            let _ = writeln!(
                output,
                "## Table {} ({} x {})\n",
                i + 1,
                table.row_count,
                table.column_count
            );
            render_table(&mut output, table);
        }

        let mut output = output.trim_end().to_string();
        output.push('\n');
        output
    }

    fn render_statistics(&self, output: &mut String, report: &AnalysisReport) {
        let s = &report.statistics;
        output.push_str("## Statistics\n\n| Metric | Value |\n| --- | ---: |\n");
        let rows: [(&str, String); 9] = [
            ("Words", s.word_count.to_string()),
            ("Characters", s.character_count.to_string()),
            ("Characters (no spaces)", s.character_count_no_spaces.to_string()),
            ("Sentences", s.sentence_count.to_string()),
            ("Paragraphs", s.paragraph_count.to_string()),
            ("Lines", s.line_count.to_string()),
            ("Average word length", format!("{:.2}", s.average_word_length)),
            (
                "Average sentence length",
                format!("{:.2}", s.average_sentence_length),
            ),
            ("Reading time (min)", format!("{:.1}", s.reading_time)),
        ];
        for (name, value) in rows {
            let _ = writeln!(output, "| {} | {} |", name, value);
        }
        output.push('\n');
    }

    fn render_keywords(&self, output: &mut String, report: &AnalysisReport) {
        output.push_str("## Keywords\n\n| Term | Frequency | Score |\n| --- | ---: | ---: |\n");
        for k in &report.keywords {
            let _ = writeln!(
                output,
                "| {} | {} | {:.3} |",
                escape_markdown(&k.term),
                k.frequency,
                k.relevance_score
            );
        }
        output.push('\n');
    }

    fn render_links(&self, output: &mut String, report: &AnalysisReport) {
        output.push_str("## Links\n\n");
        for link in &report.links {
            let _ = writeln!(
                output,
                "{} <{}> ({}, {}x)",
                self.list_marker, link.url, link.domain, link.occurrences
            );
        }
        output.push('\n');
    }

    fn render_outline(&self, output: &mut String, report: &AnalysisReport) {
        output.push_str("## Outline\n\n");

        // Headings and list items interleaved in document order
        let mut headings = report.structure.headings.iter().peekable();
        let mut lists = report.structure.lists.iter().peekable();
        loop {
            let take_heading = match (headings.peek(), lists.peek()) {
                (Some(h), Some(l)) => h.position <= l.position,
                (Some(_), None) => true,
                (None, Some(_)) => false,
                (None, None) => break,
            };
            if take_heading {
                if let Some(h) = headings.next() {
                    self.render_heading(output, h);
                }
            } else if let Some(l) = lists.next() {
                self.render_list_entry(output, l);
            }
        }
        output.push('\n');
    }

    fn render_heading(&self, output: &mut String, heading: &Heading) {
        let indent = "  ".repeat(heading.level.saturating_sub(1) as usize);
        let _ = writeln!(
            output,
            "{}{} **{}** (H{})",
            indent,
            self.list_marker,
            escape_markdown(&heading.text),
            heading.level
        );
    }

    fn render_list_entry(&self, output: &mut String, entry: &ListEntry) {
        let indent = "  ".repeat(entry.depth as usize);
        let marker = match entry.kind {
            ListKind::Ordered => "1.".to_string(),
            ListKind::Unordered => self.list_marker.to_string(),
        };
        let _ = writeln!(output, "{}{} {}", indent, marker, escape_markdown(&entry.text));
    }
}

fn render_table(output: &mut String, table: &TableData) {
    if table.column_count == 0 {
        output.push_str("(empty)\n\n");
        return;
    }

    for (i, row) in table.rows.iter().enumerate() {
        output.push('|');
        for cell in row {
            let _ = write!(output, " {} |", escape_markdown(cell).replace('\n', " "));
        }
        output.push('\n');

        if i == 0 {
            output.push('|');
            output.push_str(&" --- |".repeat(table.column_count));
            output.push('\n');
        }
    }
    output.push('\n');
}

/// Escape characters that would be read as Markdown syntax inline.
fn escape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | '`' | '*' | '_' | '[' | ']' | '|' => {
                result.push('\\');
                result.push(c);
            }
            _ => result.push(c),
        }
    }
    result
}

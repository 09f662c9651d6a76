//! PDF report renderer
//!
//! Renders the categorized history report and the flat summary report
//! with builtin Helvetica fonts on A4 pages. Rendering happens in memory;
//! only the final write touches disk.

use std::path::PathBuf;

use application::error::ApplicationError;
use application::ports::ReportPort;
use async_trait::async_trait;
use chrono::Local;
use domain::{question_prompt, HistoryQuestionnaire, PatientProfile, QUESTIONNAIRE_CATEGORIES};
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};
use tokio::fs;
use tracing::{debug, instrument};

const HISTORY_FILE: &str = "patient_history.pdf";
const SUMMARY_FILE: &str = "patient_summary.pdf";

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 20.0;
const LINE_HEIGHT_MM: f32 = 7.0;

// Helvetica at 11pt fits roughly this many characters across an A4 body.
const WRAP_COLUMNS: usize = 90;

/// PDF renderer writing reports to an output directory
#[derive(Debug, Clone)]
pub struct PdfReportRenderer {
    output_dir: PathBuf,
}

/// Cursor-tracking writer that adds pages as text runs off the bottom
struct PageWriter {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    y: f32,
}

impl PageWriter {
    fn new(title: &str) -> Result<Self, ApplicationError> {
        let (doc, page, layer) =
            PdfDocument::new(title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| ApplicationError::Report(e.to_string()))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| ApplicationError::Report(e.to_string()))?;
        let layer = doc.get_page(page).get_layer(layer);

        Ok(Self {
            doc,
            layer,
            regular,
            bold,
            y: PAGE_HEIGHT_MM - MARGIN_MM,
        })
    }

    fn advance(&mut self, height: f32) {
        if self.y - height < MARGIN_MM {
            let (page, layer) =
                self.doc
                    .add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = PAGE_HEIGHT_MM - MARGIN_MM;
        }
        self.y -= height;
    }

    fn line(&mut self, text: &str, size: f32, bold: bool) {
        let font = if bold {
            self.bold.clone()
        } else {
            self.regular.clone()
        };
        for wrapped in wrap(text, WRAP_COLUMNS) {
            self.advance(LINE_HEIGHT_MM);
            self.layer
                .use_text(wrapped, size, Mm(MARGIN_MM), Mm(self.y), &font);
        }
    }

    fn gap(&mut self, height: f32) {
        self.advance(height);
    }

    fn into_bytes(self) -> Result<Vec<u8>, ApplicationError> {
        self.doc
            .save_to_bytes()
            .map_err(|e| ApplicationError::Report(e.to_string()))
    }
}

/// Greedy word wrap; a single overlong word gets its own line
fn wrap(text: &str, columns: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > columns {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

impl PdfReportRenderer {
    /// Create a renderer writing into the given directory
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    fn render_history(questionnaire: &HistoryQuestionnaire) -> Result<Vec<u8>, ApplicationError> {
        let mut writer = PageWriter::new("Patient Summary Report")?;

        writer.line("Patient Summary Report", 16.0, true);
        writer.gap(2.0);
        let generated = Local::now().format("Generated on: %B %d, %Y").to_string();
        writer.line(&generated, 10.0, false);
        writer.gap(6.0);

        for category in QUESTIONNAIRE_CATEGORIES {
            let answered: Vec<_> = questionnaire.answered_in_category(category).collect();
            if answered.is_empty() {
                continue;
            }

            writer.line(category.title, 14.0, true);
            writer.gap(2.0);

            for (field, answer) in answered {
                let question = question_prompt(field).unwrap_or(field);
                writer.line(question, 11.0, true);
                writer.line(answer, 11.0, false);
                writer.gap(2.0);
            }
            writer.gap(3.0);
        }

        writer.into_bytes()
    }

    fn render_summary(
        profile: &PatientProfile,
        entries: &[(String, String)],
    ) -> Result<Vec<u8>, ApplicationError> {
        let mut writer = PageWriter::new("Patient History Summary")?;

        writer.line("Patient History Summary", 14.0, true);
        writer.gap(2.0);
        writer.line(&format!("Patient: {}", profile.name), 12.0, false);
        writer.gap(4.0);

        for (key, value) in entries {
            writer.line(&format!("{key}: {value}"), 12.0, false);
        }

        writer.into_bytes()
    }

    async fn write(&self, filename: &str, bytes: Vec<u8>) -> Result<PathBuf, ApplicationError> {
        fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| ApplicationError::Report(e.to_string()))?;

        let path = self.output_dir.join(filename);
        fs::write(&path, bytes)
            .await
            .map_err(|e| ApplicationError::Report(e.to_string()))?;

        debug!(path = %path.display(), "Report written");
        Ok(path)
    }
}

#[async_trait]
impl ReportPort for PdfReportRenderer {
    #[instrument(skip(self, questionnaire), fields(answers = questionnaire.answered_count()))]
    async fn history_report(
        &self,
        questionnaire: &HistoryQuestionnaire,
    ) -> Result<PathBuf, ApplicationError> {
        let bytes = Self::render_history(questionnaire)?;
        self.write(HISTORY_FILE, bytes).await
    }

    #[instrument(skip(self, profile, entries), fields(entries = entries.len()))]
    async fn summary_report(
        &self,
        profile: &PatientProfile,
        entries: &[(String, String)],
    ) -> Result<PathBuf, ApplicationError> {
        let bytes = Self::render_summary(profile, entries)?;
        self.write(SUMMARY_FILE, bytes).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> PatientProfile {
        PatientProfile::new(
            "Jane Doe",
            chrono::NaiveDate::from_ymd_opt(1990, 4, 2).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn wrap_splits_long_lines_on_words() {
        let text = "one two three four five";
        let lines = wrap(text, 10);
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| l.len() <= 10));
    }

    #[test]
    fn wrap_keeps_short_text_on_one_line() {
        assert_eq!(wrap("short", 90), vec!["short".to_string()]);
    }

    #[test]
    fn wrap_handles_empty_text() {
        assert_eq!(wrap("", 90), vec![String::new()]);
    }

    #[test]
    fn history_render_produces_a_pdf() {
        let mut questionnaire = HistoryQuestionnaire::new();
        questionnaire.record_answer("tobacco_use", "No");

        let bytes = PdfReportRenderer::render_history(&questionnaire).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn summary_render_produces_a_pdf() {
        let entries = vec![("Name".to_string(), "Jane Doe".to_string())];
        let bytes = PdfReportRenderer::render_summary(&profile(), &entries).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn reports_land_in_the_output_directory() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = PdfReportRenderer::new(dir.path());

        let mut questionnaire = HistoryQuestionnaire::new();
        questionnaire.record_answer("alcohol_use", "Socially");

        let path = renderer.history_report(&questionnaire).await.unwrap();
        assert_eq!(path, dir.path().join("patient_history.pdf"));
        assert!(fs::metadata(&path).await.is_ok());

        let path = renderer
            .summary_report(&profile(), &[("Name".to_string(), "Jane Doe".to_string())])
            .await
            .unwrap();
        assert_eq!(path, dir.path().join("patient_summary.pdf"));
    }

    #[test]
    fn many_answers_span_multiple_pages_without_error() {
        let mut questionnaire = HistoryQuestionnaire::new();
        for category in QUESTIONNAIRE_CATEGORIES {
            for field in category.fields {
                questionnaire.record_answer(
                    *field,
                    "A fairly long answer that takes a couple of wrapped lines to render in \
                     the report body and pushes the cursor down the page.",
                );
            }
        }

        let bytes = PdfReportRenderer::render_history(&questionnaire).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}

//! Report generation - PDF rendering of patient records

mod pdf_reports;

pub use pdf_reports::PdfReportRenderer;

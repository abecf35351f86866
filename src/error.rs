//! Error types for oa-prep.
//!
//! A single `OaPrepError` enum covers the whole tool: library consumers get
//! detailed context, the CLI prints the `Display` form and exits non-zero.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the oa-prep library.
#[derive(Debug, Error)]
pub enum OaPrepError {
    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Reading the DOCX ZIP container failed.
    #[error("Failed to read DOCX archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// PDF loading or text extraction failed.
    #[error("Failed to extract PDF text: {0}")]
    Pdf(#[from] lopdf::Error),

    /// Notice/claims file has an extension we cannot extract text from.
    #[error("Unsupported file extension '{extension}': expected .txt, .docx or .pdf")]
    UnsupportedFormat { extension: String },

    /// DOCX archive is missing the main document part.
    #[error("DOCX archive has no word/document.xml part: {}", .path.display())]
    MissingDocumentXml { path: PathBuf },

    /// Role selection outside the valid sequence range.
    #[error("Invalid document number {value}: expected a value between 1 and {total}")]
    InvalidSelection { value: usize, total: usize },

    /// Role selection already assigned to another role.
    #[error("Document number {value} is already assigned to another role")]
    DuplicateSelection { value: usize },
}

/// Result type alias for oa-prep operations.
pub type Result<T> = std::result::Result<T, OaPrepError>;

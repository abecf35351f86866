//! Plain-text extraction for notice and claims files.
//!
//! Dispatches on the file extension and delegates the format-specific work:
//! DOCX is a ZIP container whose main part is WordprocessingML, PDF text is
//! pulled page by page via lopdf. Extraction either returns the full text or
//! fails; it never returns a partial result.

use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use roxmltree::Document;
use tracing::debug;

use crate::error::{OaPrepError, Result};
use crate::xml::tag_name;

/// Supported notice/claims file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeFormat {
    /// Plain UTF-8 text.
    Txt,
    /// Office Open XML word-processing document.
    Docx,
    /// Portable Document Format.
    Pdf,
}

impl NoticeFormat {
    /// Determine the format from a file path's extension (case-insensitive).
    ///
    /// # Errors
    /// `UnsupportedFormat` for any other extension, including none at all.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "txt" => Ok(Self::Txt),
            "docx" => Ok(Self::Docx),
            "pdf" => Ok(Self::Pdf),
            _ => Err(OaPrepError::UnsupportedFormat { extension }),
        }
    }
}

/// Extract plain text from a notice or claims file.
///
/// # Arguments
/// * `path` - Path to a `.txt`, `.docx`, or `.pdf` file
///
/// # Errors
/// `UnsupportedFormat` for other extensions; IO, ZIP, XML, or PDF errors when
/// the file cannot be read or decoded.
pub fn extract_text(path: &Path) -> Result<String> {
    let format = NoticeFormat::from_path(path)?;
    debug!(path = %path.display(), ?format, "extracting notice text");
    match format {
        NoticeFormat::Txt => extract_txt(path),
        NoticeFormat::Docx => extract_docx(path),
        NoticeFormat::Pdf => extract_pdf(path),
    }
}

/// Read a text file, dropping undecodable bytes.
///
/// Invalid UTF-8 sequences are ignored rather than replaced or reported, so
/// a notice saved with a stray legacy-encoded byte still loads.
fn extract_txt(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    Ok(bytes.utf8_chunks().map(|chunk| chunk.valid()).collect())
}

/// Extract text from a DOCX file.
///
/// Reads `word/document.xml` out of the ZIP container and collects the text
/// runs per paragraph: `w:t` contributes its text, `w:tab` a tab, `w:br` a
/// line break. Paragraphs are joined with newlines.
fn extract_docx(path: &Path) -> Result<String> {
    let file = File::open(path)?;
    let mut archive = zip::ZipArchive::new(file)?;

    let mut xml = String::new();
    match archive.by_name("word/document.xml") {
        Ok(mut part) => {
            part.read_to_string(&mut xml)?;
        }
        Err(zip::result::ZipError::FileNotFound) => {
            return Err(OaPrepError::MissingDocumentXml {
                path: path.to_path_buf(),
            });
        }
        Err(e) => return Err(e.into()),
    }

    let document = Document::parse(&xml)?;
    Ok(wordprocessing_text(&document))
}

/// Collect paragraph text from a parsed WordprocessingML document.
fn wordprocessing_text(document: &Document<'_>) -> String {
    let mut paragraphs: Vec<String> = Vec::new();

    for paragraph in document
        .descendants()
        .filter(|n| n.is_element() && tag_name(*n) == "p")
    {
        let mut text = String::new();
        for node in paragraph.descendants().filter(|n| n.is_element()) {
            match tag_name(node) {
                "t" => {
                    if let Some(run) = node.text() {
                        text.push_str(run);
                    }
                }
                "tab" => text.push('\t'),
                "br" => text.push('\n'),
                _ => {}
            }
        }
        paragraphs.push(text);
    }

    paragraphs.join("\n")
}

/// Extract text from a PDF file, page by page.
///
/// Pages are processed in page order; a page yielding no extractable text
/// contributes an empty string. Per-page texts are joined with newlines.
fn extract_pdf(path: &Path) -> Result<String> {
    let document = lopdf::Document::load(path)?;

    let pages: Vec<String> = document
        .get_pages()
        .keys()
        .map(|&page| document.extract_text(&[page]).unwrap_or_default())
        .collect();

    Ok(pages.join("\n"))
}

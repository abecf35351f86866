//! Summary composition: the single labeled file fed to the downstream reader.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::{
    CITATION_SECTION_PREFIX, SECTION_APPLICATION, SECTION_LATEST_CLAIMS, SECTION_NOTICE,
    SUMMARY_FILE_NAME, SUMMARY_HEADER,
};
use crate::error::Result;
use crate::types::{DocumentRecord, RoleAssignment};

/// Compose the summary document.
///
/// Emits the fixed instructional header, then the sections in fixed order:
/// primary application, rejection notice, amended claims (only when
/// provided), and citations in ascending citation index — independent of the
/// order roles were assigned.
///
/// # Arguments
/// * `documents` - The split document records, in sequence order
/// * `assignment` - Role assignment for the bundle
/// * `notice_text` - Extracted rejection-notice text
/// * `claims_text` - Extracted amended-claims text, if supplied
#[must_use]
pub fn compose_summary(
    documents: &[DocumentRecord],
    assignment: &RoleAssignment,
    notice_text: &str,
    claims_text: Option<&str>,
) -> String {
    let mut summary = String::new();
    summary.push_str(SUMMARY_HEADER);

    summary.push_str(SECTION_APPLICATION);
    summary.push('\n');
    summary.push_str(text_of(documents, assignment.primary));

    summary.push('\n');
    summary.push_str(SECTION_NOTICE);
    summary.push('\n');
    summary.push_str(notice_text);

    if let Some(claims) = claims_text {
        summary.push('\n');
        summary.push_str(SECTION_LATEST_CLAIMS);
        summary.push('\n');
        summary.push_str(claims);
    }

    for (position, &seq) in assignment.citations.iter().enumerate() {
        summary.push('\n');
        summary.push_str(CITATION_SECTION_PREFIX);
        summary.push_str(&(position + 1).to_string());
        summary.push('\n');
        summary.push_str(text_of(documents, seq));
    }

    summary
}

/// Text of the document with the given sequence number.
///
/// Sequence numbers are 1-based and contiguous, so this is an index lookup;
/// an out-of-range number (impossible for a validated assignment) yields an
/// empty section rather than a panic.
fn text_of(documents: &[DocumentRecord], seq: usize) -> &str {
    documents
        .get(seq.wrapping_sub(1))
        .map(|d| d.text.as_str())
        .unwrap_or_default()
}

/// Save the composed summary as `まとめ.txt` in the output directory.
///
/// Uses the atomic write pattern: write to a temp file, sync to disk, then
/// rename over any existing summary. Overwrites without confirmation.
///
/// # Returns
/// Path to the saved summary file
pub fn save_summary(content: &str, output_dir: &Path) -> Result<PathBuf> {
    let output_file = output_dir.join(SUMMARY_FILE_NAME);
    let temp_file = output_dir.join(format!(".{SUMMARY_FILE_NAME}.tmp"));

    {
        let mut file = File::create(&temp_file)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if output_file.exists() {
        fs::remove_file(&output_file)?;
    }

    fs::rename(&temp_file, &output_file)?;

    Ok(output_file)
}

//! Per-document file output.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::types::{DocumentRecord, RoleAssignment};

/// Write one text file per document into the output directory.
///
/// File names are role-dependent (`h_` for the primary, `d<k>_` for citation
/// k, bare sequence otherwise). Existing files are overwritten. Writing is
/// not transactional: files written before a later failure stay on disk.
///
/// # Arguments
/// * `documents` - The split document records
/// * `assignment` - Role assignment mapping sequence numbers to roles
/// * `output_dir` - Directory to write into (typically the bundle's)
///
/// # Returns
/// Paths of the written files, in document order
pub fn write_documents(
    documents: &[DocumentRecord],
    assignment: &RoleAssignment,
    output_dir: &Path,
) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::with_capacity(documents.len());

    for document in documents {
        let name = document.file_name(assignment.role_of(document.seq));
        let path = output_dir.join(name);
        fs::write(&path, &document.text)?;
        debug!(path = %path.display(), "wrote document file");
        paths.push(path);
    }

    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn record(seq: usize, identifier: &str, text: &str) -> DocumentRecord {
        DocumentRecord {
            seq,
            identifier: identifier.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_write_documents_role_dependent_names() {
        // Bundle [A, B, C]: B primary, C citation 1, A unassigned
        let documents = vec![
            record(1, "A", "text a"),
            record(2, "B", "text b"),
            record(3, "C", "text c"),
        ];
        let assignment = RoleAssignment::new(2, vec![3], 3).unwrap();
        let dir = tempdir().unwrap();

        let paths = write_documents(&documents, &assignment, dir.path()).unwrap();

        let names: Vec<String> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["1_A.txt", "h_2_B.txt", "d1_3_C.txt"]);

        assert_eq!(fs::read_to_string(&paths[1]).unwrap(), "text b");
    }

    #[test]
    fn test_write_documents_one_file_per_record() {
        let documents = vec![record(1, "A", "a"), record(2, "B", "b")];
        let assignment = RoleAssignment::new(1, vec![], 2).unwrap();
        let dir = tempdir().unwrap();

        let paths = write_documents(&documents, &assignment, dir.path()).unwrap();

        assert_eq!(paths.len(), 2);
        assert!(paths.iter().all(|p| p.exists()));
    }

    #[test]
    fn test_write_documents_duplicate_identifiers_do_not_collide() {
        // Same identifier twice: the sequence prefix keeps the names distinct
        let documents = vec![record(1, "JP:1", "first"), record(2, "JP:1", "second")];
        let assignment = RoleAssignment::new(1, vec![2], 2).unwrap();
        let dir = tempdir().unwrap();

        let paths = write_documents(&documents, &assignment, dir.path()).unwrap();

        assert_eq!(paths.len(), 2);
        assert_ne!(paths[0], paths[1]);
        assert_eq!(fs::read_to_string(&paths[0]).unwrap(), "first");
        assert_eq!(fs::read_to_string(&paths[1]).unwrap(), "second");
    }

    #[test]
    fn test_write_documents_missing_directory_fails() {
        let documents = vec![record(1, "A", "a")];
        let assignment = RoleAssignment::new(1, vec![], 1).unwrap();

        let result = write_documents(
            &documents,
            &assignment,
            Path::new("/nonexistent/output/dir"),
        );
        assert!(result.is_err());
    }
}

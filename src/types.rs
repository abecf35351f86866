//! Core data types: document records, roles, and role assignments.

use crate::config::sanitize_identifier;
use crate::error::{OaPrepError, Result};

/// Semantic role of a document within one prosecution bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// The primary application under prosecution (本願).
    Primary,

    /// A cited prior-art reference (引例), numbered from 1.
    Citation(usize),

    /// A document present in the bundle but not assigned a role.
    Unassigned,
}

/// One document extracted from the XML bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRecord {
    /// 1-based position of the document within the bundle.
    pub seq: usize,

    /// Publication/gazette number, assumed unique per bundle.
    pub identifier: String,

    /// Extracted plain text, already trimmed and truncated.
    pub text: String,
}

impl DocumentRecord {
    /// Output file name for this document under the given role.
    ///
    /// The sequence number is always part of the name, so two documents
    /// sharing an identifier can never overwrite each other.
    ///
    /// # Examples
    /// ```
    /// use oa_prep::types::{DocumentRecord, Role};
    ///
    /// let doc = DocumentRecord {
    ///     seq: 2,
    ///     identifier: "JP:2020-123456".to_string(),
    ///     text: String::new(),
    /// };
    /// assert_eq!(doc.file_name(Role::Primary), "h_2_JP_2020-123456.txt");
    /// assert_eq!(doc.file_name(Role::Citation(1)), "d1_2_JP_2020-123456.txt");
    /// assert_eq!(doc.file_name(Role::Unassigned), "2_JP_2020-123456.txt");
    /// ```
    #[must_use]
    pub fn file_name(&self, role: Role) -> String {
        let identifier = sanitize_identifier(&self.identifier);
        match role {
            Role::Primary => format!("h_{}_{}.txt", self.seq, identifier),
            Role::Citation(index) => format!("d{}_{}_{}.txt", index, self.seq, identifier),
            Role::Unassigned => format!("{}_{}.txt", self.seq, identifier),
        }
    }
}

/// Mapping from sequence numbers to roles.
///
/// Invariant: the primary and every citation are distinct sequence numbers
/// within `[1, total]`; citation order is the order they were assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleAssignment {
    /// Sequence number of the primary application.
    pub primary: usize,

    /// Sequence numbers of the cited references, in citation order
    /// (position 0 is citation 1).
    pub citations: Vec<usize>,
}

impl RoleAssignment {
    /// Build a validated assignment from explicit selections.
    ///
    /// Used by the non-interactive CLI path; the interactive workflow
    /// enforces the same rules through re-prompting instead.
    ///
    /// # Arguments
    /// * `primary` - Sequence number of the primary application
    /// * `citations` - Citation sequence numbers in citation order
    /// * `total` - Number of documents in the bundle
    ///
    /// # Errors
    /// `InvalidSelection` for numbers outside `[1, total]`,
    /// `DuplicateSelection` when a number is used more than once.
    pub fn new(primary: usize, citations: Vec<usize>, total: usize) -> Result<Self> {
        let check_range = |value: usize| {
            if (1..=total).contains(&value) {
                Ok(())
            } else {
                Err(OaPrepError::InvalidSelection { value, total })
            }
        };

        check_range(primary)?;
        let mut used = vec![primary];
        for &citation in &citations {
            check_range(citation)?;
            if used.contains(&citation) {
                return Err(OaPrepError::DuplicateSelection { value: citation });
            }
            used.push(citation);
        }

        Ok(Self { primary, citations })
    }

    /// Role of the document with the given sequence number.
    #[must_use]
    pub fn role_of(&self, seq: usize) -> Role {
        if seq == self.primary {
            Role::Primary
        } else if let Some(position) = self.citations.iter().position(|&c| c == seq) {
            Role::Citation(position + 1)
        } else {
            Role::Unassigned
        }
    }
}

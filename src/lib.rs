//! oa-prep - Prepare office-action response material from patent bundles.
//!
//! This crate splits a patent XML bundle (one file, many `doc` records) into
//! individual text files, assigns prosecution roles (primary application vs
//! cited references), extracts the rejection notice and optional amended
//! claims from TXT/DOCX/PDF files, and composes everything into one labeled
//! summary document for a downstream language model.
//!
//! # Example
//!
//! ```
//! use oa_prep::bundle::parse_bundle;
//! use oa_prep::roles::{assign_roles, ScriptedAnswers};
//!
//! let xml = r#"<result>
//!     <doc><str name="公開(公告)番号">JP:1</str><str name="要約">engine</str></doc>
//!     <doc><str name="公開(公告)番号">JP:2</str><str name="要約">vehicle</str></doc>
//! </result>"#;
//! let documents = parse_bundle(xml).unwrap();
//! assert_eq!(documents.len(), 2);
//!
//! // Scripted answers: primary is doc 1, doc 2 is citation 1
//! let mut answers = ScriptedAnswers::new([1, 2]);
//! let assignment = assign_roles(documents.len(), &mut answers).unwrap();
//! assert_eq!(assignment.primary, 1);
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Constants (character budgets, field names, section headings)
//! - [`types`]: Core data types (DocumentRecord, Role, RoleAssignment)
//! - [`error`]: Error types and Result alias
//! - [`xml`]: XML utilities over roxmltree
//! - [`bundle`]: Bundle splitting
//! - [`roles`]: Role assignment workflow over a swappable answer source
//! - [`extract`]: Notice/claims text extraction (TXT, DOCX, PDF)
//! - [`writer`]: Per-document file output
//! - [`summary`]: Summary composition and saving
//! - [`cli`]: Command-line interface

pub mod bundle;
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod roles;
pub mod summary;
pub mod types;
pub mod writer;
pub mod xml;

// Re-export commonly used items
pub use bundle::parse_bundle;
pub use error::{OaPrepError, Result};
pub use extract::extract_text;
pub use roles::{assign_roles, AnswerSource, ScriptedAnswers};
pub use types::{DocumentRecord, Role, RoleAssignment};

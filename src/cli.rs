//! Command-line interface for oa-prep.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};

use crate::bundle::parse_bundle;
use crate::error::{OaPrepError, Result};
use crate::extract::extract_text;
use crate::roles::{assign_roles, AnswerSource};
use crate::summary::{compose_summary, save_summary};
use crate::types::RoleAssignment;
use crate::writer::write_documents;

/// oa-prep - Split patent XML bundles and compose office-action summaries.
#[derive(Parser)]
#[command(name = "oa-prep")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split a bundle, assign roles, and compose the summary file.
    Prepare {
        /// XML bundle exported from the patent database
        bundle: PathBuf,

        /// Rejection notice file (txt, docx, or pdf)
        #[arg(short, long)]
        notice: PathBuf,

        /// Amended claims file (txt, docx, or pdf)
        #[arg(short, long)]
        claims: Option<PathBuf>,

        /// Sequence number of the primary application (skips the prompts)
        #[arg(long)]
        primary: Option<usize>,

        /// Sequence number of a cited reference, in citation order (repeatable)
        #[arg(long = "cite", value_name = "SEQ", requires = "primary")]
        citations: Vec<usize>,

        /// Output directory (default: the bundle file's directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Prepare {
            bundle,
            notice,
            claims,
            primary,
            citations,
            output,
        } => prepare_command(
            &bundle,
            &notice,
            claims.as_deref(),
            primary,
            &citations,
            output.as_deref(),
        ),
    }
}

/// Answer source backed by terminal prompts.
struct TerminalAnswers {
    theme: ColorfulTheme,
}

impl TerminalAnswers {
    fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl AnswerSource for TerminalAnswers {
    fn ask(&mut self, prompt: &str) -> Option<i64> {
        // A failed read (closed terminal, Ctrl-C) counts as cancellation
        Input::<i64>::with_theme(&self.theme)
            .with_prompt(prompt)
            .interact_text()
            .ok()
    }

    fn report(&mut self, message: &str) {
        eprintln!("{} {message}", style("Error:").red().bold());
    }
}

/// Execute the prepare command.
fn prepare_command(
    bundle: &Path,
    notice: &Path,
    claims: Option<&Path>,
    primary: Option<usize>,
    citations: &[usize],
    output: Option<&Path>,
) -> Result<()> {
    // Validate output directory (if specified) before doing any work
    if let Some(output_dir) = output {
        if !output_dir.exists() {
            return Err(OaPrepError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Output directory does not exist: {}", output_dir.display()),
            )));
        }
        if !output_dir.is_dir() {
            return Err(OaPrepError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Output path is not a directory: {}", output_dir.display()),
            )));
        }
    }
    let output_dir = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| bundle_directory(bundle));

    let xml = std::fs::read_to_string(bundle)?;
    let documents = parse_bundle(&xml)?;

    if documents.is_empty() {
        println!("No valid documents found in the bundle.");
        return Ok(());
    }

    println!("{}", style("Documents in bundle:").bold());
    for document in &documents {
        println!("  {}: {}", style(document.seq).cyan(), document.identifier);
    }
    println!();

    let assignment = match primary {
        Some(primary) => RoleAssignment::new(primary, citations.to_vec(), documents.len())?,
        None => match assign_roles(documents.len(), &mut TerminalAnswers::new()) {
            Some(assignment) => assignment,
            None => {
                println!("Cancelled.");
                return Ok(());
            }
        },
    };

    let paths = write_documents(&documents, &assignment, &output_dir)?;
    println!(
        "{} {} document files",
        style("Wrote").bold(),
        style(paths.len()).green()
    );

    // Create progress spinner
    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    pb.set_message("Extracting notice text...");
    let notice_text = match extract_text(notice) {
        Ok(text) => text,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    let claims_text = match claims {
        Some(path) => {
            pb.set_message("Extracting claims text...");
            match extract_text(path) {
                Ok(text) => Some(text),
                Err(e) => {
                    pb.finish_and_clear();
                    return Err(e);
                }
            }
        }
        None => None,
    };

    pb.set_message("Composing summary...");
    let content = compose_summary(&documents, &assignment, &notice_text, claims_text.as_deref());
    let summary_path = match save_summary(&content, &output_dir) {
        Ok(path) => path,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.finish_and_clear();

    println!();
    println!(
        "{} {}",
        style("Saved summary to:").green().bold(),
        summary_path.display()
    );

    Ok(())
}

/// Directory containing the bundle file.
///
/// A bare file name has an empty parent; fall back to the current directory.
fn bundle_directory(bundle: &Path) -> PathBuf {
    match bundle.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_prepare() {
        let cli = Cli::parse_from([
            "oa-prep",
            "prepare",
            "bundle.xml",
            "--notice",
            "notice.txt",
        ]);

        let Commands::Prepare {
            bundle,
            notice,
            claims,
            primary,
            citations,
            output,
        } = cli.command;
        assert_eq!(bundle, PathBuf::from("bundle.xml"));
        assert_eq!(notice, PathBuf::from("notice.txt"));
        assert!(claims.is_none());
        assert!(primary.is_none());
        assert!(citations.is_empty());
        assert!(output.is_none());
    }

    #[test]
    fn test_cli_parse_prepare_scripted_roles() {
        let cli = Cli::parse_from([
            "oa-prep",
            "prepare",
            "bundle.xml",
            "--notice",
            "notice.pdf",
            "--claims",
            "claims.docx",
            "--primary",
            "2",
            "--cite",
            "3",
            "--cite",
            "1",
        ]);

        let Commands::Prepare {
            primary, citations, ..
        } = cli.command;
        assert_eq!(primary, Some(2));
        assert_eq!(citations, vec![3, 1]);
    }

    #[test]
    fn test_cli_cite_requires_primary() {
        let result = Cli::try_parse_from([
            "oa-prep",
            "prepare",
            "bundle.xml",
            "--notice",
            "notice.txt",
            "--cite",
            "2",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_bundle_directory() {
        assert_eq!(
            bundle_directory(Path::new("/data/bundle.xml")),
            PathBuf::from("/data")
        );
        assert_eq!(bundle_directory(Path::new("bundle.xml")), PathBuf::from("."));
    }
}

//! Role assignment workflow.
//!
//! A pure sequential workflow over an [`AnswerSource`], so the same logic
//! drives interactive terminal prompts and scripted answers in tests. The
//! presentation layer supplies the source; no global prompt state exists.

use std::collections::VecDeque;

use crate::types::RoleAssignment;

/// Source of answers for the role-assignment prompts.
pub trait AnswerSource {
    /// Ask for one document number. `None` means the user cancelled.
    fn ask(&mut self, prompt: &str) -> Option<i64>;

    /// Report a recoverable validation failure before re-prompting.
    fn report(&mut self, _message: &str) {}
}

/// Answer source backed by a fixed queue, for tests and scripted runs.
///
/// Returns `None` (cancellation) once the queue is exhausted.
pub struct ScriptedAnswers {
    answers: VecDeque<i64>,
}

impl ScriptedAnswers {
    /// Create a scripted source from a sequence of answers.
    pub fn new(answers: impl IntoIterator<Item = i64>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
        }
    }
}

impl AnswerSource for ScriptedAnswers {
    fn ask(&mut self, _prompt: &str) -> Option<i64> {
        self.answers.pop_front()
    }
}

/// Assign roles to a bundle of `total` documents.
///
/// Prompts for the primary application first, re-prompting until the answer
/// is within `[1, total]`. Then collects citation numbers one per prompt, at
/// most `total - 1` of them; `0` ends collection early; out-of-range and
/// already-assigned answers are reported and re-prompted, never fatal.
///
/// # Returns
/// `Some(assignment)` on completion, `None` if the user cancelled. A
/// cancellation at any prompt abandons the whole workflow.
pub fn assign_roles(total: usize, source: &mut dyn AnswerSource) -> Option<RoleAssignment> {
    let range_message = format!("Enter a number between 1 and {total}.");

    let primary = loop {
        let answer = source.ask(&format!("Primary application (本願) number [1-{total}]"))?;
        if in_range(answer, total) {
            break answer as usize;
        }
        source.report(&range_message);
    };

    let mut citations: Vec<usize> = Vec::new();
    'collect: for index in 1..total {
        loop {
            let answer = source.ask(&format!(
                "Citation (引例) {index} number [1-{total}], 0 to finish"
            ))?;
            if answer == 0 {
                break 'collect;
            }
            if !in_range(answer, total) {
                source.report(&range_message);
                continue;
            }
            let seq = answer as usize;
            if seq == primary || citations.contains(&seq) {
                source.report("That number is already assigned.");
                continue;
            }
            citations.push(seq);
            break;
        }
    }

    Some(RoleAssignment { primary, citations })
}

fn in_range(answer: i64, total: usize) -> bool {
    answer >= 1 && answer <= total as i64
}

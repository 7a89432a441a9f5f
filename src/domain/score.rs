//! Evaluation scores for incubation applications.
//!
//! Scores are a reviewer-side artifact: they are kept in the local
//! [session](crate::session) keyed by application id and are never sent to
//! the backend, so they do not survive a change of machine.

use serde::{Deserialize, Serialize};

/// Maximum points for problem understanding.
pub const MAX_PROBLEM_UNDERSTANDING: u8 = 8;
/// Maximum points for solution fit.
pub const MAX_SOLUTION_FIT: u8 = 6;
/// Maximum points for technical soundness.
pub const MAX_TECHNICAL_SOUNDNESS: u8 = 6;
/// Maximum total score.
pub const MAX_TOTAL: u8 = MAX_PROBLEM_UNDERSTANDING + MAX_SOLUTION_FIT + MAX_TECHNICAL_SOUNDNESS;

/// A reviewer's evaluation of one application.
///
/// Missing fields deserialize to zero, matching how partially-filled
/// score sheets were read back historically.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationScore {
    #[serde(default)]
    pub problem_understanding: u8,
    #[serde(default)]
    pub solution_fit: u8,
    #[serde(default)]
    pub technical_soundness: u8,
}

impl EvaluationScore {
    /// Build a score, clamping each criterion to its maximum.
    #[must_use]
    pub fn new(problem_understanding: u8, solution_fit: u8, technical_soundness: u8) -> Self {
        Self {
            problem_understanding: problem_understanding.min(MAX_PROBLEM_UNDERSTANDING),
            solution_fit: solution_fit.min(MAX_SOLUTION_FIT),
            technical_soundness: technical_soundness.min(MAX_TECHNICAL_SOUNDNESS),
        }
    }

    /// Total points out of [`MAX_TOTAL`].
    #[must_use]
    pub fn total(&self) -> u8 {
        self.problem_understanding + self.solution_fit + self.technical_soundness
    }
}

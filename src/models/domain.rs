use serde::Serialize;
use crate::core::scoring::MAX_SIMILARITY;
use std::fmt;

/// A synthetic study partner returned to the requester
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub name: String,
    pub similarity: u8,
    #[serde(rename = "commonSubjects")]
    pub common_subjects: Vec<String>,
    #[serde(rename = "studyStyle")]
    pub study_style: String,
}

/// The fixed set of study styles a match can be attributed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StudyStyle {
    Quiet,
    Interactive,
    #[serde(rename = "Problem-solving")]
    ProblemSolving,
    Mixed,
}

impl StudyStyle {
    pub const ALL: [StudyStyle; 4] = [
        StudyStyle::Quiet,
        StudyStyle::Interactive,
        StudyStyle::ProblemSolving,
        StudyStyle::Mixed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StudyStyle::Quiet => "Quiet",
            StudyStyle::Interactive => "Interactive",
            StudyStyle::ProblemSolving => "Problem-solving",
            StudyStyle::Mixed => "Mixed",
        }
    }
}

impl fmt::Display for StudyStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Similarity adjustments applied on top of the random base score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimilarityBonuses {
    /// Added when the match shares the requester's declared style
    pub style_match: u8,
    /// Added when three or more subjects are in common
    pub many_subjects: u8,
    /// Added when exactly two subjects are in common
    pub some_subjects: u8,
    /// Upper bound of the final score
    pub cap: u8,
}

impl Default for SimilarityBonuses {
    fn default() -> Self {
        Self {
            style_match: 5,
            many_subjects: 10,
            some_subjects: 5,
            cap: MAX_SIMILARITY,
        }
    }
}

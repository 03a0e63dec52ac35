use std::fmt;
use std::str::FromStr;

/// Instruction template a document is processed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessingMode {
    Review,
    FactCheck,
    Summary,
    Proofread,
    Augment,
}

impl ProcessingMode {
    pub const ALL: [ProcessingMode; 5] = [
        ProcessingMode::Review,
        ProcessingMode::FactCheck,
        ProcessingMode::Summary,
        ProcessingMode::Proofread,
        ProcessingMode::Augment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessingMode::Review => "review",
            ProcessingMode::FactCheck => "factcheck",
            ProcessingMode::Summary => "summary",
            ProcessingMode::Proofread => "proofread",
            ProcessingMode::Augment => "augment",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ProcessingMode::Review => "Review the document and point out improvements",
            ProcessingMode::FactCheck => "Verify facts and correct inaccurate statements",
            ProcessingMode::Summary => "Summarize the document",
            ProcessingMode::Proofread => "Fix grammar, typos and awkward phrasing",
            ProcessingMode::Augment => "Add missing background information and examples",
        }
    }
}

impl FromStr for ProcessingMode {
    type Err = InvalidModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_lowercase();
        ProcessingMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == tag)
            .ok_or_else(|| InvalidModeError(s.to_string()))
    }
}

impl fmt::Display for ProcessingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid ai_mode: {0:?} (expected one of review, factcheck, summary, proofread, augment)")]
pub struct InvalidModeError(pub String);

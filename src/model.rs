use serde::{Deserialize, Serialize};

/// One quiz item as served by the question backend.
///
/// `answer` is the selected choice index (1-based, matching what the
/// backend accepts); absent means unanswered. A validation response
/// echoes the accepted value back and fills `correct` for feedback
/// display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answers: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct: Option<u32>,
}

/// The full question set for a session, replaced wholesale whenever the
/// backend returns a new authoritative copy.
///
/// `total` is the terminal-page boundary; it is trusted as delivered,
/// never recomputed from `questions`. `correct`/`wrong` are the grading
/// tallies a validation response carries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Quiz {
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default)]
    pub total: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wrong: Option<u32>,
}

/// One submitted answer. Unanswered questions never appear in a payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizAnswer {
    pub id: u32,
    pub answer: u32,
}

/// Sentinel shown whenever the current position points outside the
/// loaded question set.
pub static EMPTY_QUESTION: Question = Question {
    id: 0,
    question: String::new(),
    answers: Vec::new(),
    answer: None,
    correct: None,
};

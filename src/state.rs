use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};

use crate::model::{Question, Quiz, QuizAnswer, EMPTY_QUESTION};
use crate::prefs::DEFAULT_LANGUAGE;
use crate::service::QuestionService;

/// Transition hint for the presentation layer, set by the most recent
/// navigation call. Has no effect on the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Floor for the visible submission state, so a fast backend does not
/// flash the transition.
pub const SUBMIT_FLOOR: Duration = Duration::from_millis(500);

/// In-memory state of one quiz attempt: the loaded question set, the
/// current position, and the submission lifecycle flags.
///
/// One instance per page session, owned by the application root. All
/// operations take `&mut self`, so no two of them (including the
/// network-bound ones) can ever overlap.
pub struct QuizSession {
    service: Arc<dyn QuestionService>,
    language: String,
    quiz: Quiz,
    index: usize,
    direction: Direction,
    loading: bool,
    submitted: bool,
    colorless: bool,
}

impl QuizSession {
    /// Creates a session for the given locale without touching the
    /// network. The quiz starts empty until [`load`](Self::load) runs.
    pub fn new(service: Arc<dyn QuestionService>, locale: Option<&str>) -> Self {
        Self {
            service,
            language: effective_language(locale),
            quiz: Quiz::default(),
            index: 1,
            direction: Direction::Forward,
            loading: false,
            submitted: false,
            colorless: false,
        }
    }

    /// Creates a session and issues the initial quiz fetch.
    pub async fn start(service: Arc<dyn QuestionService>, locale: Option<&str>) -> Self {
        let mut session = Self::new(service, locale);
        session.load().await;
        session
    }

    /// Fetches the question set for the session language and replaces
    /// the quiz wholesale. On failure the currently displayed quiz
    /// stays as it is; the position is never reset here.
    pub async fn load(&mut self) {
        self.loading = true;
        debug!("loading questions for {}", self.language);
        match self.service.get_questions(&self.language).await {
            Ok(quiz) => self.quiz = quiz,
            Err(e) => warn!("loading questions failed: {e}"),
        }
        self.loading = false;
    }

    /// Advances to the next question; a no-op at the last one.
    pub fn next(&mut self) {
        if self.index < self.total() {
            self.index += 1;
            self.direction = Direction::Forward;
        }
    }

    /// Retreats to the previous question; a no-op at the first one.
    pub fn previous(&mut self) {
        if self.index > 1 {
            self.index -= 1;
            self.direction = Direction::Backward;
        }
    }

    /// Records a choice for the given question. Re-selecting the
    /// current value or naming an unknown question changes nothing.
    pub fn select_answer(&mut self, question_id: u32, answer: u32) {
        if let Some(question) = self
            .quiz
            .questions
            .iter_mut()
            .find(|q| q.id == question_id)
        {
            if question.answer != Some(answer) {
                question.answer = Some(answer);
            }
        }
    }

    /// Sends the accumulated answers for grading and applies the graded
    /// quiz. The submitting state is held for at least [`SUBMIT_FLOOR`]
    /// even when the backend answers faster; on failure the quiz stays
    /// unchanged and only `submitted` remains set.
    pub async fn submit(&mut self) {
        self.submitted = true;
        self.colorless = true;

        let answers = self.answer_payload();
        debug!("submitting {} answers for {}", answers.len(), self.language);

        // The timer cannot fail, so the joined outcome is the network
        // call's alone.
        let (result, ()) = tokio::join!(
            self.service.validate_answers(&self.language, &answers),
            tokio::time::sleep(SUBMIT_FLOOR),
        );

        match result {
            Ok(quiz) => self.quiz = quiz,
            Err(e) => warn!("validating answers failed: {e}"),
        }
        self.colorless = false;
    }

    /// Returns to the first question and fetches a fresh quiz. Entered
    /// answers survive if the reload fails, since a failed load keeps
    /// the old quiz.
    pub async fn reset(&mut self) {
        self.index = 1;
        self.submitted = false;
        self.load().await;
    }

    /// The question at the current position, or the empty sentinel when
    /// the position points outside the loaded set.
    pub fn question(&self) -> &Question {
        self.quiz
            .questions
            .get(self.index - 1)
            .unwrap_or(&EMPTY_QUESTION)
    }

    /// 1-based current position.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        self.quiz.total
    }

    /// Whether the first question is shown.
    pub fn start(&self) -> bool {
        self.index == 1
    }

    /// Whether the terminal question is shown.
    pub fn end(&self) -> bool {
        self.index == self.total()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn submitted(&self) -> bool {
        self.submitted
    }

    pub fn colorless(&self) -> bool {
        self.colorless
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    // Answered questions only; unanswered ones are left out entirely.
    fn answer_payload(&self) -> Vec<QuizAnswer> {
        self.quiz
            .questions
            .iter()
            .filter_map(|q| q.answer.map(|answer| QuizAnswer { id: q.id, answer }))
            .collect()
    }
}

// The session only distinguishes English locales; everything else falls
// back to the default language.
fn effective_language(locale: Option<&str>) -> String {
    match locale {
        Some(tag) if tag.starts_with("en") => "en".to_string(),
        _ => DEFAULT_LANGUAGE.to_string(),
    }
}

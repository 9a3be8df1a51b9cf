#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use quizcore::{Question, QuestionService, Quiz, QuizAnswer, ServiceError, ServiceResult};

/// A quiz with `n` three-choice questions, ids 1..=n, none answered.
pub fn sample_quiz(n: u32) -> Quiz {
    let questions: Vec<Question> = (1..=n)
        .map(|id| Question {
            id,
            question: format!("Question {id}"),
            answers: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            answer: None,
            correct: None,
        })
        .collect();
    Quiz {
        total: questions.len(),
        questions,
        correct: None,
        wrong: None,
    }
}

/// In-memory stand-in for the question backend. A `None` response slot
/// makes the corresponding call fail; `delay` simulates latency on
/// validation.
pub struct FakeService {
    quiz: Mutex<Option<Quiz>>,
    graded: Mutex<Option<Quiz>>,
    delay: Mutex<Option<Duration>>,
    submissions: Mutex<Vec<Vec<QuizAnswer>>>,
    fetches: AtomicUsize,
}

impl FakeService {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            quiz: Mutex::new(None),
            graded: Mutex::new(None),
            delay: Mutex::new(None),
            submissions: Mutex::new(Vec::new()),
            fetches: AtomicUsize::new(0),
        })
    }

    pub fn with_quiz(quiz: Quiz) -> Arc<Self> {
        let service = Self::new();
        service.set_quiz(Some(quiz));
        service
    }

    pub fn set_quiz(&self, quiz: Option<Quiz>) {
        *self.quiz.lock().unwrap() = quiz;
    }

    pub fn set_graded(&self, quiz: Option<Quiz>) {
        *self.graded.lock().unwrap() = quiz;
    }

    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().unwrap() = Some(delay);
    }

    /// Every payload `validate_answers` has received, in call order.
    pub fn submissions(&self) -> Vec<Vec<QuizAnswer>> {
        self.submissions.lock().unwrap().clone()
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl QuestionService for FakeService {
    async fn get_questions(&self, _language: &str) -> ServiceResult<Quiz> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.quiz
            .lock()
            .unwrap()
            .clone()
            .ok_or(ServiceError::EmptyResponse)
    }

    async fn validate_answers(
        &self,
        _language: &str,
        answers: &[QuizAnswer],
    ) -> ServiceResult<Quiz> {
        let delay = *self.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.submissions.lock().unwrap().push(answers.to_vec());
        self.graded
            .lock()
            .unwrap()
            .clone()
            .ok_or(ServiceError::EmptyResponse)
    }
}

use async_trait::async_trait;
use thiserror::Error;

use crate::model::{Quiz, QuizAnswer};

/// Failure reported by the question backend.
///
/// A transport error and a response with no body are distinguished here
/// but handled identically by the session: the result either carries a
/// quiz or an error, never both.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("empty response body")]
    EmptyResponse,
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Backend boundary for fetching a quiz and grading answers.
///
/// Both operations are safe to repeat; `validate_answers` must accept
/// an empty payload. Implementations report failure through the result,
/// never by panicking across the boundary.
#[async_trait]
pub trait QuestionService: Send + Sync {
    /// Fetch the full question set for a language code.
    async fn get_questions(&self, language: &str) -> ServiceResult<Quiz>;

    /// Submit answers for grading. The returned quiz is shaped like
    /// `get_questions`' result with `answer` and `correct` populated.
    async fn validate_answers(
        &self,
        language: &str,
        answers: &[QuizAnswer],
    ) -> ServiceResult<Quiz>;
}

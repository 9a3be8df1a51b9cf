pub mod env;
pub mod model;
pub mod prefs;
pub mod service;
pub mod state;

// Re-exports for convenience
pub use env::Environment;
pub use model::{Question, Quiz, QuizAnswer, EMPTY_QUESTION};
pub use prefs::{resolve_language, PreferenceStore, Preferences, DEFAULT_LANGUAGE, LANGUAGES};
pub use service::{QuestionService, ServiceError, ServiceResult};
pub use state::{Direction, QuizSession, SUBMIT_FLOOR};

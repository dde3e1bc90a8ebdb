//! Question selection and windowing. Everything here works on collections
//! already fetched from storage and never touches I/O.

pub mod pager;
pub mod pool;
pub mod quiz;

pub use pager::{paginate, QUESTIONS_PER_PAGE};
pub use pool::{resolve_pool, QuizCategory, ALL_CATEGORIES};
pub use quiz::next_question;

#[cfg(test)]
pub(crate) fn question(id: i64, category: i64) -> crate::models::Question {
    crate::models::Question {
        id,
        question: format!("Question {id}?"),
        answer: format!("Answer {id}"),
        category,
        difficulty: 1,
    }
}

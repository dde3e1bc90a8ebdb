use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::models::Question;

/// Category id meaning "play with every category".
pub const ALL_CATEGORIES: i64 = 0;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizCategory {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub id: i64,
}

/// Keeps the questions eligible for a quiz turn, preserving source order.
/// An unknown category id simply matches nothing.
pub fn resolve_pool(questions: Vec<Question>, category: QuizCategory) -> Vec<Question> {
    if category.id == ALL_CATEGORIES {
        return questions;
    }
    questions
        .into_iter()
        .filter(|q| q.category == category.id)
        .collect()
}

//! FAQ entity model.

use faqdesk_core::faq::FaqInput;
use faqdesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `faqs` table.
///
/// This is also the response body for every endpoint that returns a FAQ.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Faq {
    pub id: DbId,
    pub question: String,
    pub answer: String,
    pub display: bool,
    pub priority: i32,
    pub placement: String,
    pub user_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Faq {
    /// Overwrite the five mutable fields and reassign ownership to `user_id`.
    ///
    /// Leaves `id` and both timestamps untouched; callers stamp `updated_at`.
    pub fn apply(&mut self, input: &FaqInput, user_id: DbId) {
        self.question.clone_from(&input.question);
        self.answer.clone_from(&input.answer);
        self.display = input.display;
        self.priority = input.priority;
        self.placement.clone_from(&input.placement);
        self.user_id = user_id;
    }

    /// Whether this record carries exactly the given question/answer pair.
    pub fn has_content(&self, question: &str, answer: &str) -> bool {
        self.question == question && self.answer == answer
    }
}

//! FAQ payload shape.
//!
//! [`FaqInput`] is the body accepted by both create and update. All five
//! mutable fields are required and must carry the right JSON type; their
//! values are not otherwise constrained.

use serde::{Deserialize, Serialize};

/// The five mutable FAQ fields, as submitted by a client.
///
/// Unknown fields in the request body are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqInput {
    pub question: String,
    pub answer: String,
    pub display: bool,
    pub priority: i32,
    pub placement: String,
}

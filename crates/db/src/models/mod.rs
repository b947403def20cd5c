//! Domain model structs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row. Request payloads live in `faqdesk_core`.

pub mod faq;

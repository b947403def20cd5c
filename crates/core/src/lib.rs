//! Domain primitives shared by the FAQ service crates.
//!
//! Holds the id/timestamp aliases, the domain error type, role names, and
//! the field rules every FAQ payload must satisfy. No I/O lives here.

pub mod error;
pub mod faq;
pub mod roles;
pub mod types;

//! Injected persistence handle for FAQ handlers.
//!
//! Handlers never reach for a pool directly; they receive an
//! `Arc<dyn FaqStore>` through application state. [`PgFaqStore`] backs
//! production, [`MemoryFaqStore`] backs HTTP-level tests.

mod memory;
mod postgres;

use async_trait::async_trait;
use faqdesk_core::faq::FaqInput;
use faqdesk_core::types::DbId;

pub use memory::MemoryFaqStore;
pub use postgres::PgFaqStore;

use crate::models::faq::Faq;

/// Persistence failures surfaced to the API layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A create would add a second record with the same question/answer.
    #[error("duplicate FAQ content")]
    Duplicate,

    /// Any other database failure.
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// CRUD operations over FAQ records.
///
/// Implementations must keep `id` immutable, stamp both timestamps on
/// create, and keep `updated_at` monotonic on update.
#[async_trait]
pub trait FaqStore: Send + Sync + 'static {
    /// Fetch one record, or `None` if the id is unknown.
    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<Faq>>;

    /// Every record, ordered by id ascending.
    async fn list(&self) -> StoreResult<Vec<Faq>>;

    /// Whether a record with this exact question/answer pair exists.
    async fn exists_with_content(&self, question: &str, answer: &str) -> StoreResult<bool>;

    /// Insert a new record owned by `user_id`.
    ///
    /// Fails with [`StoreError::Duplicate`] if the question/answer pair is
    /// already stored; the check and insert are atomic.
    async fn create(&self, input: &FaqInput, user_id: DbId) -> StoreResult<Faq>;

    /// Overwrite the mutable fields of `id`, reassigning it to `user_id`.
    /// Content uniqueness is not enforced. Returns `None` if the id is unknown.
    async fn update(&self, id: DbId, input: &FaqInput, user_id: DbId)
        -> StoreResult<Option<Faq>>;

    /// Remove `id`. Returns `true` if a record was removed.
    async fn delete(&self, id: DbId) -> StoreResult<bool>;

    /// Confirm the backing storage is reachable.
    async fn health_check(&self) -> StoreResult<()>;
}

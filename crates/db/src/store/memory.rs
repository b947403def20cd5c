use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use faqdesk_core::faq::FaqInput;
use faqdesk_core::types::DbId;
use tokio::sync::RwLock;

use super::{FaqStore, StoreError, StoreResult};
use crate::models::faq::Faq;

#[derive(Debug, Default)]
struct Inner {
    next_id: DbId,
    rows: BTreeMap<DbId, Faq>,
}

/// In-process [`FaqStore`] for tests and local experiments.
///
/// Mirrors [`PgFaqStore`](super::PgFaqStore): ids come from a counter
/// starting at 1, `updated_at` never moves backwards, and `create` refuses a
/// question/answer pair that is already stored. The duplicate check and
/// insert happen under one write lock. `update` overwrites without looking
/// at other rows.
#[derive(Debug, Default)]
pub struct MemoryFaqStore {
    inner: RwLock<Inner>,
    unavailable: AtomicBool,
}

impl MemoryFaqStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail as if the database were unreachable.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn ensure_available(&self) -> StoreResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

fn content_taken(rows: &BTreeMap<DbId, Faq>, question: &str, answer: &str) -> bool {
    rows.values().any(|faq| faq.has_content(question, answer))
}

#[async_trait]
impl FaqStore for MemoryFaqStore {
    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<Faq>> {
        self.ensure_available()?;
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn list(&self) -> StoreResult<Vec<Faq>> {
        self.ensure_available()?;
        Ok(self.inner.read().await.rows.values().cloned().collect())
    }

    async fn exists_with_content(&self, question: &str, answer: &str) -> StoreResult<bool> {
        self.ensure_available()?;
        let inner = self.inner.read().await;
        Ok(content_taken(&inner.rows, question, answer))
    }

    async fn create(&self, input: &FaqInput, user_id: DbId) -> StoreResult<Faq> {
        self.ensure_available()?;
        let mut inner = self.inner.write().await;
        if content_taken(&inner.rows, &input.question, &input.answer) {
            return Err(StoreError::Duplicate);
        }

        inner.next_id += 1;
        let now = chrono::Utc::now();
        let faq = Faq {
            id: inner.next_id,
            question: input.question.clone(),
            answer: input.answer.clone(),
            display: input.display,
            priority: input.priority,
            placement: input.placement.clone(),
            user_id,
            created_at: now,
            updated_at: now,
        };
        inner.rows.insert(faq.id, faq.clone());
        Ok(faq)
    }

    async fn update(
        &self,
        id: DbId,
        input: &FaqInput,
        user_id: DbId,
    ) -> StoreResult<Option<Faq>> {
        self.ensure_available()?;
        let mut inner = self.inner.write().await;
        let Some(faq) = inner.rows.get_mut(&id) else {
            return Ok(None);
        };
        faq.apply(input, user_id);
        faq.updated_at = chrono::Utc::now().max(faq.updated_at);
        Ok(Some(faq.clone()))
    }

    async fn delete(&self, id: DbId) -> StoreResult<bool> {
        self.ensure_available()?;
        Ok(self.inner.write().await.rows.remove(&id).is_some())
    }

    async fn health_check(&self) -> StoreResult<()> {
        self.ensure_available()
    }
}

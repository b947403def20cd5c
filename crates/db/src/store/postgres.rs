use async_trait::async_trait;
use faqdesk_core::faq::FaqInput;
use faqdesk_core::types::DbId;

use super::{FaqStore, StoreError, StoreResult};
use crate::models::faq::Faq;
use crate::repositories::FaqRepo;
use crate::DbPool;

/// [`FaqStore`] backed by a Postgres connection pool.
#[derive(Debug, Clone)]
pub struct PgFaqStore {
    pool: DbPool,
}

impl PgFaqStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FaqStore for PgFaqStore {
    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<Faq>> {
        Ok(FaqRepo::find_by_id(&self.pool, id).await?)
    }

    async fn list(&self) -> StoreResult<Vec<Faq>> {
        Ok(FaqRepo::list(&self.pool).await?)
    }

    async fn exists_with_content(&self, question: &str, answer: &str) -> StoreResult<bool> {
        Ok(FaqRepo::exists_with_content(&self.pool, question, answer).await?)
    }

    async fn create(&self, input: &FaqInput, user_id: DbId) -> StoreResult<Faq> {
        match FaqRepo::insert_unique(&self.pool, input, user_id).await? {
            Some(faq) => Ok(faq),
            None => {
                tracing::debug!(user_id, "Duplicate FAQ content rejected on insert");
                Err(StoreError::Duplicate)
            }
        }
    }

    async fn update(
        &self,
        id: DbId,
        input: &FaqInput,
        user_id: DbId,
    ) -> StoreResult<Option<Faq>> {
        Ok(FaqRepo::update(&self.pool, id, input, user_id).await?)
    }

    async fn delete(&self, id: DbId) -> StoreResult<bool> {
        Ok(FaqRepo::delete(&self.pool, id).await?)
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(crate::health_check(&self.pool).await?)
    }
}

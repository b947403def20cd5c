//! Repository for the `faqs` table.

use faqdesk_core::faq::FaqInput;
use faqdesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::faq::Faq;

/// Column list for `faqs` queries.
const COLUMNS: &str = "\
    id, question, answer, display, priority, placement, \
    user_id, created_at, updated_at";

/// Provides CRUD operations for FAQ records.
pub struct FaqRepo;

impl FaqRepo {
    /// Find a FAQ by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Faq>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM faqs WHERE id = $1");
        sqlx::query_as::<_, Faq>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every FAQ, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Faq>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM faqs ORDER BY id");
        sqlx::query_as::<_, Faq>(&query).fetch_all(pool).await
    }

    /// Whether a FAQ with exactly this question/answer pair already exists.
    ///
    /// The md5 predicates let Postgres use `idx_faqs_content`; the plain
    /// comparisons rule out hash collisions.
    pub async fn exists_with_content(
        pool: &PgPool,
        question: &str,
        answer: &str,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS( \
                 SELECT 1 FROM faqs \
                 WHERE md5(question) = md5($1) AND md5(answer) = md5($2) \
                   AND question = $1 AND answer = $2 \
             )",
        )
        .bind(question)
        .bind(answer)
        .fetch_one(pool)
        .await
    }

    /// Insert a new FAQ owned by `user_id` unless its question/answer pair
    /// is already stored.
    ///
    /// Creates with the same content serialize on a transaction-scoped
    /// advisory lock keyed by that content, so two concurrent inserts cannot
    /// both pass the existence check. Returns `None` if the pair exists.
    pub async fn insert_unique(
        pool: &PgPool,
        input: &FaqInput,
        user_id: DbId,
    ) -> Result<Option<Faq>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("SELECT pg_advisory_xact_lock(hashtext($1), hashtext($2))")
            .bind(&input.question)
            .bind(&input.answer)
            .execute(&mut *tx)
            .await?;

        let query = format!(
            "INSERT INTO faqs (question, answer, display, priority, placement, user_id) \
             SELECT $1, $2, $3, $4, $5, $6 \
             WHERE NOT EXISTS ( \
                 SELECT 1 FROM faqs \
                 WHERE md5(question) = md5($1) AND md5(answer) = md5($2) \
                   AND question = $1 AND answer = $2 \
             ) \
             RETURNING {COLUMNS}"
        );
        let faq = sqlx::query_as::<_, Faq>(&query)
            .bind(&input.question)
            .bind(&input.answer)
            .bind(input.display)
            .bind(input.priority)
            .bind(&input.placement)
            .bind(user_id)
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(faq)
    }

    /// Overwrite all mutable fields of a FAQ and reassign it to `user_id`.
    ///
    /// Content uniqueness is not checked here. `updated_at` is stamped by
    /// the `trg_faqs_updated_at` trigger.
    /// Returns `None` if no row with `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &FaqInput,
        user_id: DbId,
    ) -> Result<Option<Faq>, sqlx::Error> {
        let query = format!(
            "UPDATE faqs SET \
                 question = $2, \
                 answer = $3, \
                 display = $4, \
                 priority = $5, \
                 placement = $6, \
                 user_id = $7 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Faq>(&query)
            .bind(id)
            .bind(&input.question)
            .bind(&input.answer)
            .bind(input.display)
            .bind(input.priority)
            .bind(&input.placement)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a FAQ by ID.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM faqs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

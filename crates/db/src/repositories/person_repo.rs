//! Repository for the `persons` table.

use cadastro_core::types::DbId;

use crate::models::person::{CreatePerson, Person, UpdatePerson};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, national_id, sex, email, phone";

/// Provides CRUD operations and national ID lookups for persons.
pub struct PersonRepo;

impl PersonRepo {
    /// Insert a new person, returning the created row.
    pub async fn create(pool: &DbPool, input: &CreatePerson) -> Result<Person, sqlx::Error> {
        let query = format!(
            "INSERT INTO persons (name, national_id, sex, email, phone) \
             VALUES (?1, ?2, ?3, ?4, ?5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Person>(&query)
            .bind(&input.name)
            .bind(&input.national_id)
            .bind(&input.sex)
            .bind(&input.email)
            .bind(&input.phone)
            .fetch_one(pool)
            .await
    }

    /// Find a person by internal ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Person>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM persons WHERE id = ?1");
        sqlx::query_as::<_, Person>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a person by national ID (digit-only form).
    pub async fn find_by_national_id(
        pool: &DbPool,
        national_id: &str,
    ) -> Result<Option<Person>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM persons WHERE national_id = ?1");
        sqlx::query_as::<_, Person>(&query)
            .bind(national_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn exists_by_national_id(
        pool: &DbPool,
        national_id: &str,
    ) -> Result<bool, sqlx::Error> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM persons WHERE national_id = ?1")
            .bind(national_id)
            .fetch_one(pool)
            .await?;
        Ok(count > 0)
    }

    pub async fn count(pool: &DbPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM persons")
            .fetch_one(pool)
            .await
    }

    /// List all persons ordered by ID.
    pub async fn list(pool: &DbPool) -> Result<Vec<Person>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM persons ORDER BY id");
        sqlx::query_as::<_, Person>(&query).fetch_all(pool).await
    }

    /// Update a person. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdatePerson,
    ) -> Result<Option<Person>, sqlx::Error> {
        let query = format!(
            "UPDATE persons SET \
                name = COALESCE(?2, name), \
                national_id = COALESCE(?3, national_id), \
                sex = COALESCE(?4, sex), \
                email = COALESCE(?5, email), \
                phone = COALESCE(?6, phone) \
             WHERE id = ?1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Person>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.national_id)
            .bind(&input.sex)
            .bind(&input.email)
            .bind(&input.phone)
            .fetch_optional(pool)
            .await
    }

    /// Delete a person. Returns `true` if a row was removed.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM persons WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

//! Character writes and reads.

use futures_util::stream::{Stream, StreamExt};
use sqlx::Row;

use super::db::CharacterStore;
use super::{DumpRow, StoreError};
use crate::record::CharacterRecord;

impl CharacterStore {
    /// Insert one record in its own transaction (begin, insert, commit).
    ///
    /// INSERT only: an existing id yields `StoreError::DuplicateId` and the
    /// transaction is rolled back.
    pub async fn insert(&self, record: &CharacterRecord) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;
        sqlx::query(
            r#"
            INSERT INTO characters (
                id, birth_year, eye_color, films, gender,
                hair_color, height, homeworld, mass, name,
                skin_color, species, starships, vehicles
            ) VALUES (?1, ?2, ?3, ?4, ?5,
                      ?6, ?7, ?8, ?9, ?10,
                      ?11, ?12, ?13, ?14)
            "#,
        )
        .bind(record.id)
        .bind(&record.birth_year)
        .bind(&record.eye_color)
        .bind(&record.films)
        .bind(&record.gender)
        .bind(&record.hair_color)
        .bind(&record.height)
        .bind(&record.homeworld)
        .bind(&record.mass)
        .bind(&record.name)
        .bind(&record.skin_color)
        .bind(&record.species)
        .bind(&record.starships)
        .bind(&record.vehicles)
        .execute(&mut *tx)
        .await
        .map_err(|e| StoreError::from_insert(e, record.id))?;
        tx.commit().await?;

        tracing::debug!(id = record.id, name = %record.name, "inserted character");
        Ok(())
    }

    /// Number of stored characters.
    pub async fn count(&self) -> Result<i64, StoreError> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM characters")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.get("n"))
    }

    /// Delete every row. Returns how many were removed.
    pub async fn clear(&self) -> Result<u64, StoreError> {
        let done = sqlx::query("DELETE FROM characters")
            .execute(&self.pool)
            .await?;
        Ok(done.rows_affected())
    }

    /// `SELECT * FROM characters` as a lazy, single-pass stream. Unordered.
    pub fn scan(&self) -> impl Stream<Item = Result<DumpRow, StoreError>> + '_ {
        sqlx::query("SELECT * FROM characters")
            .fetch(&self.pool)
            .map(|res| {
                res.map_err(StoreError::from)
                    .and_then(|row| DumpRow::try_from_row(&row))
            })
    }
}

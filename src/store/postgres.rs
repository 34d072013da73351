//! Postgres-backed document store
//!
//! Each collection is a table `(id UUID PRIMARY KEY, body JSONB NOT NULL)`
//! created by the embedded migrations.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::{postgres::PgPoolOptions, types::Json, FromRow, Pool, Postgres};
use uuid::Uuid;

use super::{Document, DocumentStore, Filter, Query, StoreError, StoreResult};
use crate::config::DatabaseConfig;

/// Tables created by `migrations/`
pub const COLLECTIONS: [&str; 4] = ["authors", "books", "genres", "bookinstances"];

#[derive(FromRow)]
struct DocumentRow {
    id: Uuid,
    body: Json<Value>,
}

impl From<DocumentRow> for Document {
    fn from(row: DocumentRow) -> Self {
        Document {
            id: row.id,
            body: row.body.0,
        }
    }
}

#[derive(Clone)]
pub struct PgDocumentStore {
    pool: Pool<Postgres>,
}

impl PgDocumentStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Create a connection pool for the configured database
    pub async fn connect(config: &DatabaseConfig) -> StoreResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect(&config.url)
            .await?;
        tracing::info!("Connected to database");
        Ok(Self::new(pool))
    }

    /// Create the collection tables if needed
    pub async fn migrate(&self) -> StoreResult<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        tracing::info!("Database migrations completed");
        Ok(())
    }
}

/// Table names cannot be bound, so only known collections are accepted
fn table(collection: &str) -> StoreResult<&'static str> {
    COLLECTIONS
        .iter()
        .find(|name| **name == collection)
        .copied()
        .ok_or_else(|| StoreError::UnknownCollection(collection.to_string()))
}

/// WHERE clause for a filter, starting at parameter `$1`
fn where_clause(filter: &Filter) -> &'static str {
    match filter {
        Filter::All => "",
        Filter::Eq(_, _) => " WHERE (body -> $1::text = $2 OR body -> $1::text @> $3)",
    }
}

fn bind_filter<'q, O>(
    builder: sqlx::query::QueryAs<'q, Postgres, O, sqlx::postgres::PgArguments>,
    filter: &'q Filter,
) -> sqlx::query::QueryAs<'q, Postgres, O, sqlx::postgres::PgArguments> {
    match filter {
        Filter::All => builder,
        Filter::Eq(field, value) => builder
            .bind(*field)
            .bind(Json(value.clone()))
            .bind(Json(Value::Array(vec![value.clone()]))),
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn insert(&self, collection: &str, body: Value) -> StoreResult<Document> {
        let sql = format!(
            "INSERT INTO {} (id, body) VALUES ($1, $2) RETURNING id, body",
            table(collection)?
        );
        let row = sqlx::query_as::<_, DocumentRow>(&sql)
            .bind(Uuid::new_v4())
            .bind(Json(body))
            .fetch_one(&self.pool)
            .await?;
        Ok(row.into())
    }

    async fn find_by_id(&self, collection: &str, id: Uuid) -> StoreResult<Option<Document>> {
        let sql = format!("SELECT id, body FROM {} WHERE id = $1", table(collection)?);
        let row = sqlx::query_as::<_, DocumentRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Document::from))
    }

    async fn find_by_ids(&self, collection: &str, ids: &[Uuid]) -> StoreResult<Vec<Document>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let sql = format!("SELECT id, body FROM {} WHERE id = ANY($1)", table(collection)?);
        let rows = sqlx::query_as::<_, DocumentRow>(&sql)
            .bind(ids.to_vec())
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Document::from).collect())
    }

    async fn find(&self, collection: &str, query: &Query) -> StoreResult<Vec<Document>> {
        let mut sql = format!(
            "SELECT id, body FROM {}{}",
            table(collection)?,
            where_clause(&query.filter)
        );
        if query.sort_by.is_some() {
            let position = match query.filter {
                Filter::All => 1,
                Filter::Eq(_, _) => 4,
            };
            sql.push_str(&format!(" ORDER BY body ->> ${}::text ASC NULLS LAST, id", position));
        }

        let mut builder = bind_filter(sqlx::query_as::<_, DocumentRow>(&sql), &query.filter);
        if let Some(field) = query.sort_by {
            builder = builder.bind(field);
        }

        let rows = builder.fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(Document::from).collect())
    }

    async fn count(&self, collection: &str, filter: &Filter) -> StoreResult<u64> {
        let sql = format!(
            "SELECT COUNT(*) FROM {}{}",
            table(collection)?,
            where_clause(filter)
        );
        let (count,): (i64,) = bind_filter(sqlx::query_as::<_, (i64,)>(&sql), filter)
            .fetch_one(&self.pool)
            .await?;
        Ok(count.max(0) as u64)
    }

    async fn replace(&self, collection: &str, id: Uuid, body: Value) -> StoreResult<Option<Document>> {
        let sql = format!(
            "UPDATE {} SET body = $2 WHERE id = $1 RETURNING id, body",
            table(collection)?
        );
        let row = sqlx::query_as::<_, DocumentRow>(&sql)
            .bind(id)
            .bind(Json(body))
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Document::from))
    }

    async fn delete(&self, collection: &str, id: Uuid) -> StoreResult<bool> {
        let sql = format!("DELETE FROM {} WHERE id = $1", table(collection)?);
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

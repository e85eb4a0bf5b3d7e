use async_trait::async_trait;
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use sqlx::types::Json;
use sqlx::{PgPool, Postgres, QueryBuilder};

use super::backend::StoreBackend;
use super::filter::Filter;
use super::schema::CollectionSchema;
use super::StoreError;
use crate::document::model::DocumentRow;
use crate::document::Document;

const COLUMNS: &str = "id, collection, content, created_at, updated_at";

/// PostgreSQL backend: every collection lives in the JSONB `documents`
/// table, filters are pushed down as JSONB predicates.
#[derive(Clone)]
pub struct PgBackend {
    pool: PgPool,
}

impl PgBackend {
    pub async fn connect(url: &str, max_connections: u32, min_connections: u32) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .connect(url)
            .await?;
        Ok(Self { pool })
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::migrate!("../../migrations").run(&self.pool).await?;
        Ok(())
    }
}

fn path_segments(path: &str) -> Vec<String> {
    path.split('.').map(str::to_string).collect()
}

fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &Filter) {
    match filter {
        Filter::All => {
            builder.push("TRUE");
        }
        Filter::Equals(path, value) => {
            builder
                .push("content #> ")
                .push_bind(path_segments(path))
                .push(" = ")
                .push_bind(Json(value.clone()));
        }
        Filter::In(path, values) => {
            builder
                .push("jsonb_build_array(content #> ")
                .push_bind(path_segments(path))
                .push(") <@ ")
                .push_bind(Json(Value::Array(values.clone())));
        }
        Filter::And(filters) if filters.is_empty() => {
            builder.push("TRUE");
        }
        Filter::And(filters) => {
            builder.push("(");
            for (idx, f) in filters.iter().enumerate() {
                if idx > 0 {
                    builder.push(" AND ");
                }
                push_filter(builder, f);
            }
            builder.push(")");
        }
    }
}

fn select_query<'a>(collection: &str, filter: &Filter) -> QueryBuilder<'a, Postgres> {
    let mut builder = QueryBuilder::new(format!("SELECT {COLUMNS} FROM documents WHERE collection = "));
    builder.push_bind(collection.to_string()).push(" AND ");
    push_filter(&mut builder, filter);
    builder.push(" ORDER BY created_at, id");
    builder
}

fn write_error(schema: &CollectionSchema, err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db) = &err {
        if db.is_unique_violation() {
            return StoreError::Conflict(format!(
                "{} violates a unique field ({})",
                schema.slug,
                schema.unique.join(", ")
            ));
        }
    }
    StoreError::Database(err)
}

#[async_trait]
impl StoreBackend for PgBackend {
    fn backend_tag(&self) -> &'static str {
        "postgres"
    }

    async fn load(&self, collection: &str, filter: &Filter) -> Result<Vec<Document>, StoreError> {
        let mut builder = select_query(collection, filter);
        let rows = builder
            .build_query_as::<DocumentRow>()
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Document::from).collect())
    }

    async fn load_by_ids(&self, collection: &str, ids: &[String]) -> Result<Vec<Document>, StoreError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let rows = sqlx::query_as::<_, DocumentRow>(&format!(
            "SELECT {COLUMNS} FROM documents WHERE collection = $1 AND id = ANY($2) ORDER BY created_at, id"
        ))
        .bind(collection)
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Document::from).collect())
    }

    async fn insert(&self, schema: &CollectionSchema, doc: Document) -> Result<Document, StoreError> {
        let row = sqlx::query_as::<_, DocumentRow>(&format!(
            "INSERT INTO documents ({COLUMNS}) VALUES ($1, $2, $3, $4, $5) RETURNING {COLUMNS}"
        ))
        .bind(&doc.id)
        .bind(&doc.collection)
        .bind(Json(doc.data_value()))
        .bind(doc.created_at)
        .bind(doc.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| write_error(schema, err))?;
        Ok(row.into())
    }

    async fn replace(&self, schema: &CollectionSchema, doc: Document) -> Result<Document, StoreError> {
        let row = sqlx::query_as::<_, DocumentRow>(&format!(
            "UPDATE documents SET content = $3, updated_at = now() \
             WHERE collection = $1 AND id = $2 RETURNING {COLUMNS}"
        ))
        .bind(schema.slug)
        .bind(&doc.id)
        .bind(Json(doc.data_value()))
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| write_error(schema, err))?;

        row.map(Document::from).ok_or_else(|| StoreError::NotFound {
            collection: schema.slug.to_string(),
            id: doc.id,
        })
    }

    async fn remove(&self, collection: &str, id: &str) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM documents WHERE collection = $1 AND id = $2")
            .bind(collection)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equals_filter_becomes_jsonb_path_predicate() {
        let builder = select_query("page-content", &Filter::equals("sectionId", "hero"));
        assert_eq!(
            builder.sql(),
            "SELECT id, collection, content, created_at, updated_at FROM documents \
             WHERE collection = $1 AND content #> $2 = $3 ORDER BY created_at, id"
        );
    }

    #[test]
    fn conjunctions_are_parenthesized() {
        let filter = Filter::in_list("sectionId", ["hero", "faq"])
            .and(Filter::equals("metadata.showSection", true));
        let builder = select_query("page-content", &filter);
        assert!(builder.sql().contains(
            "(jsonb_build_array(content #> $2) <@ $3 AND content #> $4 = $5)"
        ));
    }

    #[test]
    fn match_all_is_true() {
        let builder = select_query("media", &Filter::All);
        assert!(builder.sql().contains("collection = $1 AND TRUE ORDER BY"));
    }
}

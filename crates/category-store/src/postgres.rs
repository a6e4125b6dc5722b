use async_trait::async_trait;
use chrono::{DateTime, Utc};
use common::CategoryId;
use domain::Category;
use sqlx::{PgPool, Row, postgres::PgRow};

use crate::{
    CategorySearchQuery, Pagination, Result,
    gateway::CategoryGateway,
    query::Direction,
};

/// PostgreSQL-backed category gateway.
#[derive(Clone)]
pub struct PostgresCategoryGateway {
    pool: PgPool,
}

impl PostgresCategoryGateway {
    /// Creates a new PostgreSQL category gateway.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connects to the database at `url` and wraps the pool.
    pub async fn connect(url: &str) -> Result<Self> {
        let pool = sqlx::postgres::PgPoolOptions::new()
            .max_connections(5)
            .connect(url)
            .await?;
        Ok(Self::new(pool))
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Runs the database migrations.
    pub async fn run_migrations(&self) -> std::result::Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("../../migrations").run(&self.pool).await
    }

    fn row_to_category(row: PgRow) -> Result<Category> {
        Ok(Category::with(
            CategoryId::from(row.try_get::<String, _>("id")?),
            row.try_get("name")?,
            row.try_get("description")?,
            row.try_get("active")?,
            row.try_get::<DateTime<Utc>, _>("created_at")?,
            row.try_get::<DateTime<Utc>, _>("updated_at")?,
            row.try_get::<Option<DateTime<Utc>>, _>("deleted_at")?,
        ))
    }
}

/// Maps a free-form sort field to a known column, defaulting to `name`.
///
/// The whitelist keeps caller-supplied sort strings out of the ORDER BY
/// clause.
fn order_column(sort: &str) -> &'static str {
    match sort {
        "description" => "description",
        "createdAt" | "created_at" => "created_at",
        "updatedAt" | "updated_at" => "updated_at",
        _ => "name",
    }
}

#[async_trait]
impl CategoryGateway for PostgresCategoryGateway {
    async fn create(&self, category: Category) -> Result<Category> {
        sqlx::query(
            r#"
            INSERT INTO categories (id, name, description, active, created_at, updated_at, deleted_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(category.id().as_str())
        .bind(category.name())
        .bind(category.description())
        .bind(category.is_active())
        .bind(category.created_at())
        .bind(category.updated_at())
        .bind(category.deleted_at())
        .execute(&self.pool)
        .await?;

        Ok(category)
    }

    async fn update(&self, category: Category) -> Result<Category> {
        sqlx::query(
            r#"
            UPDATE categories
            SET name = $2, description = $3, active = $4, updated_at = $5, deleted_at = $6
            WHERE id = $1
            "#,
        )
        .bind(category.id().as_str())
        .bind(category.name())
        .bind(category.description())
        .bind(category.is_active())
        .bind(category.updated_at())
        .bind(category.deleted_at())
        .execute(&self.pool)
        .await?;

        Ok(category)
    }

    async fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>> {
        let row: Option<PgRow> = sqlx::query(
            r#"
            SELECT id, name, description, active, created_at, updated_at, deleted_at
            FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Self::row_to_category).transpose()
    }

    async fn delete_by_id(&self, id: &CategoryId) -> Result<()> {
        sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn find_all(&self, query: CategorySearchQuery) -> Result<Pagination<Category>> {
        let order_column = order_column(&query.sort);
        let order_direction = match query.direction {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        };
        let pattern = if query.terms.is_empty() {
            None
        } else {
            Some(format!("%{}%", query.terms))
        };

        let total: i64 = match &pattern {
            Some(pattern) => {
                sqlx::query_scalar(
                    "SELECT COUNT(*) FROM categories WHERE name ILIKE $1 OR description ILIKE $1",
                )
                .bind(pattern)
                .fetch_one(&self.pool)
                .await?
            }
            None => {
                sqlx::query_scalar("SELECT COUNT(*) FROM categories")
                    .fetch_one(&self.pool)
                    .await?
            }
        };

        let mut sql = String::from(
            "SELECT id, name, description, active, created_at, updated_at, deleted_at FROM categories",
        );
        if pattern.is_some() {
            sql.push_str(" WHERE name ILIKE $1 OR description ILIKE $1");
        }
        sql.push_str(&format!(" ORDER BY {order_column} {order_direction}"));
        if pattern.is_some() {
            sql.push_str(" LIMIT $2 OFFSET $3");
        } else {
            sql.push_str(" LIMIT $1 OFFSET $2");
        }

        let mut rows_query = sqlx::query(&sql);
        if let Some(pattern) = &pattern {
            rows_query = rows_query.bind(pattern);
        }
        let rows = rows_query
            .bind(query.per_page as i64)
            .bind((query.page * query.per_page) as i64)
            .fetch_all(&self.pool)
            .await?;

        let items = rows
            .into_iter()
            .map(Self::row_to_category)
            .collect::<Result<Vec<_>>>()?;

        Ok(Pagination::new(
            query.page,
            query.per_page,
            total as u64,
            items,
        ))
    }
}

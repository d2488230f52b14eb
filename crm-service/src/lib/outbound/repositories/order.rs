use std::str::FromStr;

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::domain::client::models::ClientId;
use crate::domain::order::errors::OrderError;
use crate::domain::order::models::NewOrder;
use crate::domain::order::models::Order;
use crate::domain::order::models::OrderId;
use crate::domain::order::models::OrderPriority;
use crate::domain::order::models::OrderStatus;
use crate::domain::order::models::OrderTitle;
use crate::domain::order::ports::OrderRepository;

/// PostgreSQL adapter for the order aggregate.
pub struct PostgresOrderRepository {
    pool: PgPool,
}

impl PostgresOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Raw orders row; shared with the client repository for embedding orders
/// into client listings.
#[derive(Debug, FromRow)]
pub(super) struct OrderRow {
    id: i64,
    client_id: i64,
    title: String,
    description: Option<String>,
    status: String,
    priority: String,
    total_amount: Option<f64>,
    order_date: DateTime<Utc>,
    due_date: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl OrderRow {
    pub(super) fn try_into_order(self) -> Result<Order, OrderError> {
        Ok(Order {
            id: OrderId(self.id),
            client_id: ClientId(self.client_id),
            title: OrderTitle::new(self.title)?,
            description: self.description,
            status: OrderStatus::from_str(&self.status)?,
            priority: OrderPriority::from_str(&self.priority)?,
            total_amount: self.total_amount,
            order_date: self.order_date,
            due_date: self.due_date,
            created_at: self.created_at,
        })
    }
}

fn map_fk_violation(e: sqlx::Error, client_id: ClientId) -> OrderError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            return OrderError::ClientNotFound(client_id.to_string());
        }
    }
    OrderError::DatabaseError(e.to_string())
}

#[async_trait]
impl OrderRepository for PostgresOrderRepository {
    async fn create(&self, order: NewOrder) -> Result<Order, OrderError> {
        let row = sqlx::query_as::<_, OrderRow>(
            r#"
            INSERT INTO orders (client_id, title, description, status, priority,
                                total_amount, order_date, due_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, client_id, title, description, status, priority,
                      total_amount, order_date, due_date, created_at
            "#,
        )
        .bind(order.client_id.value())
        .bind(order.title.as_str())
        .bind(&order.description)
        .bind(order.status.as_str())
        .bind(order.priority.as_str())
        .bind(order.total_amount)
        .bind(order.order_date)
        .bind(order.due_date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_fk_violation(e, order.client_id))?;

        row.try_into_order()
    }

    async fn list_all(&self) -> Result<Vec<Order>, OrderError> {
        let rows = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT id, client_id, title, description, status, priority,
                   total_amount, order_date, due_date, created_at
            FROM orders
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| OrderError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(OrderRow::try_into_order).collect()
    }

    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, OrderError> {
        let row = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT id, client_id, title, description, status, priority,
                   total_amount, order_date, due_date, created_at
            FROM orders
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| OrderError::DatabaseError(e.to_string()))?;

        row.map(OrderRow::try_into_order).transpose()
    }

    async fn update(&self, order: Order) -> Result<Order, OrderError> {
        let row = sqlx::query_as::<_, OrderRow>(
            r#"
            UPDATE orders
            SET client_id = $2, title = $3, description = $4, status = $5,
                priority = $6, total_amount = $7, order_date = $8, due_date = $9
            WHERE id = $1
            RETURNING id, client_id, title, description, status, priority,
                      total_amount, order_date, due_date, created_at
            "#,
        )
        .bind(order.id.value())
        .bind(order.client_id.value())
        .bind(order.title.as_str())
        .bind(&order.description)
        .bind(order.status.as_str())
        .bind(order.priority.as_str())
        .bind(order.total_amount)
        .bind(order.order_date)
        .bind(order.due_date)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_fk_violation(e, order.client_id))?
        .ok_or_else(|| OrderError::NotFound(order.id.to_string()))?;

        row.try_into_order()
    }

    async fn delete(&self, id: OrderId) -> Result<(), OrderError> {
        let result = sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(|e| OrderError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(OrderError::NotFound(id.to_string()));
        }

        Ok(())
    }

    async fn count_with_status(&self, status: OrderStatus) -> Result<i64, OrderError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM orders WHERE status = $1")
            .bind(status.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| OrderError::DatabaseError(e.to_string()))
    }

    async fn sum_amounts_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<f64, OrderError> {
        sqlx::query_scalar::<_, f64>(
            r#"
            SELECT COALESCE(SUM(total_amount), 0)
            FROM orders
            WHERE order_date >= $1 AND order_date < $2
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| OrderError::DatabaseError(e.to_string()))
    }

    async fn find_recent(&self, limit: i64) -> Result<Vec<Order>, OrderError> {
        let rows = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT id, client_id, title, description, status, priority,
                   total_amount, order_date, due_date, created_at
            FROM orders
            ORDER BY order_date DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| OrderError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(OrderRow::try_into_order).collect()
    }
}

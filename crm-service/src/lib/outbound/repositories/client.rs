use std::collections::HashMap;
use std::str::FromStr;

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;

use super::order::OrderRow;
use crate::domain::client::errors::ClientError;
use crate::domain::client::models::Client;
use crate::domain::client::models::ClientId;
use crate::domain::client::models::ClientName;
use crate::domain::client::models::ClientStatus;
use crate::domain::client::models::ClientWithOrders;
use crate::domain::client::models::NewClient;
use crate::domain::client::ports::ClientRepository;

/// PostgreSQL adapter for the client aggregate.
pub struct PostgresClientRepository {
    pool: PgPool,
}

impl PostgresClientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ClientRow {
    id: i64,
    name: String,
    email: Option<String>,
    phone: Option<String>,
    address: Option<String>,
    company: Option<String>,
    notes: Option<String>,
    status: String,
    created_at: DateTime<Utc>,
}

impl ClientRow {
    fn try_into_client(self) -> Result<Client, ClientError> {
        Ok(Client {
            id: ClientId(self.id),
            name: ClientName::new(self.name)?,
            email: self.email,
            phone: self.phone,
            address: self.address,
            company: self.company,
            notes: self.notes,
            status: ClientStatus::from_str(&self.status)?,
            created_at: self.created_at,
        })
    }
}

fn map_unique_violation(e: sqlx::Error, email: Option<&str>) -> ClientError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return ClientError::EmailAlreadyExists(email.unwrap_or_default().to_string());
        }
    }
    ClientError::DatabaseError(e.to_string())
}

#[async_trait]
impl ClientRepository for PostgresClientRepository {
    async fn create(&self, client: NewClient) -> Result<Client, ClientError> {
        let row = sqlx::query_as::<_, ClientRow>(
            r#"
            INSERT INTO clients (name, email, phone, address, company, notes, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, name, email, phone, address, company, notes, status, created_at
            "#,
        )
        .bind(client.name.as_str())
        .bind(&client.email)
        .bind(&client.phone)
        .bind(&client.address)
        .bind(&client.company)
        .bind(&client.notes)
        .bind(client.status.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, client.email.as_deref()))?;

        row.try_into_client()
    }

    async fn list_with_orders(&self) -> Result<Vec<ClientWithOrders>, ClientError> {
        let client_rows = sqlx::query_as::<_, ClientRow>(
            r#"
            SELECT id, name, email, phone, address, company, notes, status, created_at
            FROM clients
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ClientError::DatabaseError(e.to_string()))?;

        let order_rows = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT id, client_id, title, description, status, priority,
                   total_amount, order_date, due_date, created_at
            FROM orders
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ClientError::DatabaseError(e.to_string()))?;

        // Group orders by client in memory; one query per side instead of a
        // join row per order.
        let mut orders_by_client: HashMap<i64, Vec<_>> = HashMap::new();
        for row in order_rows {
            let order = row
                .try_into_order()
                .map_err(|e| ClientError::DatabaseError(e.to_string()))?;
            orders_by_client
                .entry(order.client_id.value())
                .or_default()
                .push(order);
        }

        client_rows
            .into_iter()
            .map(|row| {
                let client = row.try_into_client()?;
                let orders = orders_by_client
                    .remove(&client.id.value())
                    .unwrap_or_default();
                Ok(ClientWithOrders { client, orders })
            })
            .collect()
    }

    async fn find_by_id(&self, id: ClientId) -> Result<Option<Client>, ClientError> {
        let row = sqlx::query_as::<_, ClientRow>(
            r#"
            SELECT id, name, email, phone, address, company, notes, status, created_at
            FROM clients
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ClientError::DatabaseError(e.to_string()))?;

        row.map(ClientRow::try_into_client).transpose()
    }

    async fn update(&self, client: Client) -> Result<Client, ClientError> {
        let row = sqlx::query_as::<_, ClientRow>(
            r#"
            UPDATE clients
            SET name = $2, email = $3, phone = $4, address = $5,
                company = $6, notes = $7, status = $8
            WHERE id = $1
            RETURNING id, name, email, phone, address, company, notes, status, created_at
            "#,
        )
        .bind(client.id.value())
        .bind(client.name.as_str())
        .bind(&client.email)
        .bind(&client.phone)
        .bind(&client.address)
        .bind(&client.company)
        .bind(&client.notes)
        .bind(client.status.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, client.email.as_deref()))?
        .ok_or_else(|| ClientError::NotFound(client.id.to_string()))?;

        row.try_into_client()
    }

    async fn delete(&self, id: ClientId) -> Result<(), ClientError> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(|e| ClientError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ClientError::NotFound(id.to_string()));
        }

        Ok(())
    }

    async fn count(&self) -> Result<i64, ClientError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM clients")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| ClientError::DatabaseError(e.to_string()))
    }

    async fn find_recent(&self, limit: i64) -> Result<Vec<Client>, ClientError> {
        let rows = sqlx::query_as::<_, ClientRow>(
            r#"
            SELECT id, name, email, phone, address, company, notes, status, created_at
            FROM clients
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ClientError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(ClientRow::try_into_client).collect()
    }
}

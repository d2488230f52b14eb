use std::str::FromStr;

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::domain::catalog::errors::ServiceError;
use crate::domain::catalog::models::NewService;
use crate::domain::catalog::models::Service;
use crate::domain::catalog::models::ServiceId;
use crate::domain::catalog::models::ServiceName;
use crate::domain::catalog::models::ServiceType;
use crate::domain::catalog::ports::CatalogRepository;

/// PostgreSQL adapter for the catalog aggregate.
pub struct PostgresCatalogRepository {
    pool: PgPool,
}

impl PostgresCatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ServiceRow {
    id: i64,
    name: String,
    service_type: String,
    description: Option<String>,
    price: Option<f64>,
    duration: Option<String>,
    created_at: DateTime<Utc>,
}

impl ServiceRow {
    fn try_into_service(self) -> Result<Service, ServiceError> {
        Ok(Service {
            id: ServiceId(self.id),
            name: ServiceName::new(self.name)?,
            service_type: ServiceType::from_str(&self.service_type)?,
            description: self.description,
            price: self.price,
            duration: self.duration,
            created_at: self.created_at,
        })
    }
}

#[async_trait]
impl CatalogRepository for PostgresCatalogRepository {
    async fn create(&self, service: NewService) -> Result<Service, ServiceError> {
        let row = sqlx::query_as::<_, ServiceRow>(
            r#"
            INSERT INTO services (name, service_type, description, price, duration)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, service_type, description, price, duration, created_at
            "#,
        )
        .bind(service.name.as_str())
        .bind(service.service_type.as_str())
        .bind(&service.description)
        .bind(service.price)
        .bind(&service.duration)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| ServiceError::DatabaseError(e.to_string()))?;

        row.try_into_service()
    }

    async fn list_all(&self) -> Result<Vec<Service>, ServiceError> {
        let rows = sqlx::query_as::<_, ServiceRow>(
            r#"
            SELECT id, name, service_type, description, price, duration, created_at
            FROM services
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ServiceError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(ServiceRow::try_into_service).collect()
    }

    async fn find_by_id(&self, id: ServiceId) -> Result<Option<Service>, ServiceError> {
        let row = sqlx::query_as::<_, ServiceRow>(
            r#"
            SELECT id, name, service_type, description, price, duration, created_at
            FROM services
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ServiceError::DatabaseError(e.to_string()))?;

        row.map(ServiceRow::try_into_service).transpose()
    }

    async fn update(&self, service: Service) -> Result<Service, ServiceError> {
        let row = sqlx::query_as::<_, ServiceRow>(
            r#"
            UPDATE services
            SET name = $2, service_type = $3, description = $4, price = $5, duration = $6
            WHERE id = $1
            RETURNING id, name, service_type, description, price, duration, created_at
            "#,
        )
        .bind(service.id.value())
        .bind(service.name.as_str())
        .bind(service.service_type.as_str())
        .bind(&service.description)
        .bind(service.price)
        .bind(&service.duration)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ServiceError::DatabaseError(e.to_string()))?
        .ok_or_else(|| ServiceError::NotFound(service.id.to_string()))?;

        row.try_into_service()
    }

    async fn delete(&self, id: ServiceId) -> Result<(), ServiceError> {
        let result = sqlx::query("DELETE FROM services WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(|e| ServiceError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ServiceError::NotFound(id.to_string()));
        }

        Ok(())
    }

    async fn count(&self) -> Result<i64, ServiceError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM services")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| ServiceError::DatabaseError(e.to_string()))
    }
}

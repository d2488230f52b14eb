use std::str::FromStr;

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::domain::product::errors::ProductError;
use crate::domain::product::models::NewProduct;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductId;
use crate::domain::product::models::ProductName;
use crate::domain::product::models::ProductType;
use crate::domain::product::models::Stock;
use crate::domain::product::ports::ProductRepository;

/// PostgreSQL adapter for the product aggregate.
pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    product_type: String,
    description: Option<String>,
    price: Option<f64>,
    stock: i32,
    created_at: DateTime<Utc>,
}

impl ProductRow {
    fn try_into_product(self) -> Result<Product, ProductError> {
        Ok(Product {
            id: ProductId(self.id),
            name: ProductName::new(self.name)?,
            product_type: ProductType::from_str(&self.product_type)?,
            description: self.description,
            price: self.price,
            stock: Stock::new(self.stock)?,
            created_at: self.created_at,
        })
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn create(&self, product: NewProduct) -> Result<Product, ProductError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            INSERT INTO products (name, product_type, description, price, stock)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, product_type, description, price, stock, created_at
            "#,
        )
        .bind(product.name.as_str())
        .bind(product.product_type.as_str())
        .bind(&product.description)
        .bind(product.price)
        .bind(product.stock.value())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| ProductError::DatabaseError(e.to_string()))?;

        row.try_into_product()
    }

    async fn list_all(&self) -> Result<Vec<Product>, ProductError> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, product_type, description, price, stock, created_at
            FROM products
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ProductError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(ProductRow::try_into_product).collect()
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, ProductError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, product_type, description, price, stock, created_at
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ProductError::DatabaseError(e.to_string()))?;

        row.map(ProductRow::try_into_product).transpose()
    }

    async fn update(&self, product: Product) -> Result<Product, ProductError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            UPDATE products
            SET name = $2, product_type = $3, description = $4, price = $5, stock = $6
            WHERE id = $1
            RETURNING id, name, product_type, description, price, stock, created_at
            "#,
        )
        .bind(product.id.value())
        .bind(product.name.as_str())
        .bind(product.product_type.as_str())
        .bind(&product.description)
        .bind(product.price)
        .bind(product.stock.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ProductError::DatabaseError(e.to_string()))?
        .ok_or_else(|| ProductError::NotFound(product.id.to_string()))?;

        row.try_into_product()
    }

    async fn delete(&self, id: ProductId) -> Result<(), ProductError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(|e| ProductError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ProductError::NotFound(id.to_string()));
        }

        Ok(())
    }
}

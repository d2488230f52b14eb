use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::models::CreateProductCommand;
use crate::domain::product::models::NewProduct;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductId;
use crate::domain::product::models::UpdateProductCommand;

/// Primary port for product operations.
#[async_trait]
pub trait ProductServicePort: Send + Sync + 'static {
    /// Create a new product.
    ///
    /// # Arguments
    /// * `command` - Validated product creation command
    ///
    /// # Returns
    /// The created product with assigned ID
    ///
    /// # Errors
    /// * `ProductError::DatabaseError` - Persistence failure
    async fn create_product(&self, command: CreateProductCommand)
        -> Result<Product, ProductError>;

    /// List all products, newest first.
    ///
    /// # Errors
    /// * `ProductError::DatabaseError` - Persistence failure
    async fn list_products(&self) -> Result<Vec<Product>, ProductError>;

    /// Fetch a single product by ID.
    ///
    /// # Arguments
    /// * `id` - Product identifier
    ///
    /// # Errors
    /// * `ProductError::NotFound` - No product with this ID
    async fn get_product(&self, id: ProductId) -> Result<Product, ProductError>;

    /// Apply a partial update to an existing product.
    ///
    /// Fields left as `None` in the command keep their current value.
    ///
    /// # Arguments
    /// * `id` - Product identifier
    /// * `command` - Fields to change
    ///
    /// # Errors
    /// * `ProductError::NotFound` - No product with this ID
    async fn update_product(
        &self,
        id: ProductId,
        command: UpdateProductCommand,
    ) -> Result<Product, ProductError>;

    /// Delete a product by ID.
    ///
    /// # Arguments
    /// * `id` - Product identifier
    ///
    /// # Errors
    /// * `ProductError::NotFound` - No product with this ID
    async fn delete_product(&self, id: ProductId) -> Result<(), ProductError>;
}

/// Secondary port for product persistence.
#[async_trait]
pub trait ProductRepository: Send + Sync + 'static {
    /// Persist a new product.
    ///
    /// # Errors
    /// * `ProductError::DatabaseError` - Persistence failure
    async fn create(&self, product: NewProduct) -> Result<Product, ProductError>;

    /// Fetch all products, newest first.
    ///
    /// # Errors
    /// * `ProductError::DatabaseError` - Persistence failure
    async fn list_all(&self) -> Result<Vec<Product>, ProductError>;

    /// Look up a product by ID.
    ///
    /// # Returns
    /// The product, or None if absent
    ///
    /// # Errors
    /// * `ProductError::DatabaseError` - Persistence failure
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, ProductError>;

    /// Persist changes to an existing product.
    ///
    /// # Errors
    /// * `ProductError::NotFound` - No product with this ID
    async fn update(&self, product: Product) -> Result<Product, ProductError>;

    /// Delete a product by ID.
    ///
    /// # Errors
    /// * `ProductError::NotFound` - No product with this ID
    /// * `ProductError::DatabaseError` - Persistence failure
    async fn delete(&self, id: ProductId) -> Result<(), ProductError>;
}

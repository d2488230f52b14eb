use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::models::CreateProductCommand;
use crate::domain::product::models::NewProduct;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductId;
use crate::domain::product::models::UpdateProductCommand;
use crate::domain::product::ports::ProductRepository;
use crate::domain::product::ports::ProductServicePort;

/// Domain service implementation for product operations.
///
/// Concrete implementation of ProductServicePort with dependency injection.
pub struct ProductService<R>
where
    R: ProductRepository,
{
    repository: Arc<R>,
}

impl<R> ProductService<R>
where
    R: ProductRepository,
{
    /// Create a new product service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Product persistence implementation
    ///
    /// # Returns
    /// Configured product service instance
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ProductServicePort for ProductService<R>
where
    R: ProductRepository,
{
    async fn create_product(
        &self,
        command: CreateProductCommand,
    ) -> Result<Product, ProductError> {
        let product = NewProduct {
            name: command.name,
            product_type: command.product_type,
            description: command.description,
            price: command.price,
            stock: command.stock,
        };

        self.repository.create(product).await
    }

    async fn list_products(&self) -> Result<Vec<Product>, ProductError> {
        self.repository.list_all().await
    }

    async fn get_product(&self, id: ProductId) -> Result<Product, ProductError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    async fn update_product(
        &self,
        id: ProductId,
        command: UpdateProductCommand,
    ) -> Result<Product, ProductError> {
        let mut product = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))?;

        if let Some(name) = command.name {
            product.name = name;
        }
        if let Some(product_type) = command.product_type {
            product.product_type = product_type;
        }
        if let Some(description) = command.description {
            product.description = Some(description);
        }
        if let Some(price) = command.price {
            product.price = Some(price);
        }
        if let Some(stock) = command.stock {
            product.stock = stock;
        }

        self.repository.update(product).await
    }

    async fn delete_product(&self, id: ProductId) -> Result<(), ProductError> {
        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::product::models::ProductName;
    use crate::domain::product::models::ProductType;
    use crate::domain::product::models::Stock;

    mock! {
        pub TestProductRepository {}

        #[async_trait]
        impl ProductRepository for TestProductRepository {
            async fn create(&self, product: NewProduct) -> Result<Product, ProductError>;
            async fn list_all(&self) -> Result<Vec<Product>, ProductError>;
            async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, ProductError>;
            async fn update(&self, product: Product) -> Result<Product, ProductError>;
            async fn delete(&self, id: ProductId) -> Result<(), ProductError>;
        }
    }

    fn stored_product(id: i64, name: &str) -> Product {
        Product {
            id: ProductId(id),
            name: ProductName::new(name.to_string()).unwrap(),
            product_type: ProductType::Digital,
            description: None,
            price: Some(49.99),
            stock: Stock::new(10).unwrap(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_product() {
        let mut repository = MockTestProductRepository::new();

        repository
            .expect_create()
            .withf(|product| {
                product.name.as_str() == "License pack" && product.stock.value() == 5
            })
            .times(1)
            .returning(|product| {
                Ok(Product {
                    id: ProductId(1),
                    name: product.name,
                    product_type: product.product_type,
                    description: product.description,
                    price: product.price,
                    stock: product.stock,
                    created_at: Utc::now(),
                })
            });

        let service = ProductService::new(Arc::new(repository));

        let command = CreateProductCommand {
            name: ProductName::new("License pack".to_string()).unwrap(),
            product_type: ProductType::Digital,
            description: None,
            price: Some(49.99),
            stock: Stock::new(5).unwrap(),
        };

        let product = service.create_product(command).await.expect("Create failed");
        assert_eq!(product.id, ProductId(1));
    }

    #[tokio::test]
    async fn test_get_product_not_found() {
        let mut repository = MockTestProductRepository::new();
        repository
            .expect_find_by_id()
            .with(eq(ProductId(42)))
            .times(1)
            .returning(|_| Ok(None));

        let service = ProductService::new(Arc::new(repository));

        let result = service.get_product(ProductId(42)).await;
        assert!(matches!(result.unwrap_err(), ProductError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_product_applies_only_provided_fields() {
        let mut repository = MockTestProductRepository::new();
        let existing = stored_product(7, "License pack");

        repository
            .expect_find_by_id()
            .with(eq(ProductId(7)))
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));

        repository
            .expect_update()
            .withf(|product| {
                product.name.as_str() == "License pack"
                    && product.stock.value() == 0
                    && product.price == Some(49.99)
            })
            .times(1)
            .returning(|product| Ok(product));

        let service = ProductService::new(Arc::new(repository));

        let command = UpdateProductCommand {
            name: None,
            product_type: None,
            description: None,
            price: None,
            stock: Some(Stock::new(0).unwrap()),
        };

        let product = service
            .update_product(ProductId(7), command)
            .await
            .expect("Update failed");
        assert_eq!(product.stock.value(), 0);
    }

    #[tokio::test]
    async fn test_delete_product() {
        let mut repository = MockTestProductRepository::new();
        repository
            .expect_delete()
            .with(eq(ProductId(3)))
            .times(1)
            .returning(|_| Ok(()));

        let service = ProductService::new(Arc::new(repository));

        service
            .delete_product(ProductId(3))
            .await
            .expect("Delete failed");
    }

    #[test]
    fn test_stock_rejects_negative() {
        assert!(Stock::new(-1).is_err());
        assert!(Stock::new(0).is_ok());
    }
}

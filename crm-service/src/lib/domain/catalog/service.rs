use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::ServiceError;
use crate::domain::catalog::models::CreateServiceCommand;
use crate::domain::catalog::models::NewService;
use crate::domain::catalog::models::Service;
use crate::domain::catalog::models::ServiceId;
use crate::domain::catalog::models::UpdateServiceCommand;
use crate::domain::catalog::ports::CatalogRepository;
use crate::domain::catalog::ports::CatalogServicePort;

/// Domain service implementation for catalog operations.
///
/// Concrete implementation of CatalogServicePort with dependency injection.
pub struct CatalogService<R>
where
    R: CatalogRepository,
{
    repository: Arc<R>,
}

impl<R> CatalogService<R>
where
    R: CatalogRepository,
{
    /// Create a new catalog service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Catalog persistence implementation
    ///
    /// # Returns
    /// Configured catalog service instance
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CatalogServicePort for CatalogService<R>
where
    R: CatalogRepository,
{
    async fn create_service(
        &self,
        command: CreateServiceCommand,
    ) -> Result<Service, ServiceError> {
        let service = NewService {
            name: command.name,
            service_type: command.service_type,
            description: command.description,
            price: command.price,
            duration: command.duration,
        };

        self.repository.create(service).await
    }

    async fn list_services(&self) -> Result<Vec<Service>, ServiceError> {
        self.repository.list_all().await
    }

    async fn get_service(&self, id: ServiceId) -> Result<Service, ServiceError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(id.to_string()))
    }

    async fn update_service(
        &self,
        id: ServiceId,
        command: UpdateServiceCommand,
    ) -> Result<Service, ServiceError> {
        let mut service = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(id.to_string()))?;

        if let Some(name) = command.name {
            service.name = name;
        }
        if let Some(service_type) = command.service_type {
            service.service_type = service_type;
        }
        if let Some(description) = command.description {
            service.description = Some(description);
        }
        if let Some(price) = command.price {
            service.price = Some(price);
        }
        if let Some(duration) = command.duration {
            service.duration = Some(duration);
        }

        self.repository.update(service).await
    }

    async fn delete_service(&self, id: ServiceId) -> Result<(), ServiceError> {
        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::catalog::models::ServiceName;
    use crate::domain::catalog::models::ServiceType;

    mock! {
        pub TestCatalogRepository {}

        #[async_trait]
        impl CatalogRepository for TestCatalogRepository {
            async fn create(&self, service: NewService) -> Result<Service, ServiceError>;
            async fn list_all(&self) -> Result<Vec<Service>, ServiceError>;
            async fn find_by_id(&self, id: ServiceId) -> Result<Option<Service>, ServiceError>;
            async fn update(&self, service: Service) -> Result<Service, ServiceError>;
            async fn delete(&self, id: ServiceId) -> Result<(), ServiceError>;
            async fn count(&self) -> Result<i64, ServiceError>;
        }
    }

    fn stored_service(id: i64, name: &str) -> Service {
        Service {
            id: ServiceId(id),
            name: ServiceName::new(name.to_string()).unwrap(),
            service_type: ServiceType::Development,
            description: None,
            price: Some(900.0),
            duration: Some("2 weeks".to_string()),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_service() {
        let mut repository = MockTestCatalogRepository::new();

        repository
            .expect_create()
            .withf(|service| {
                service.name.as_str() == "Pentest"
                    && service.service_type == ServiceType::Security
            })
            .times(1)
            .returning(|service| {
                Ok(Service {
                    id: ServiceId(1),
                    name: service.name,
                    service_type: service.service_type,
                    description: service.description,
                    price: service.price,
                    duration: service.duration,
                    created_at: Utc::now(),
                })
            });

        let service = CatalogService::new(Arc::new(repository));

        let command = CreateServiceCommand {
            name: ServiceName::new("Pentest".to_string()).unwrap(),
            service_type: ServiceType::Security,
            description: None,
            price: Some(2500.0),
            duration: None,
        };

        let created = service.create_service(command).await.expect("Create failed");
        assert_eq!(created.id, ServiceId(1));
    }

    #[tokio::test]
    async fn test_get_service_not_found() {
        let mut repository = MockTestCatalogRepository::new();
        repository
            .expect_find_by_id()
            .with(eq(ServiceId(42)))
            .times(1)
            .returning(|_| Ok(None));

        let service = CatalogService::new(Arc::new(repository));

        let result = service.get_service(ServiceId(42)).await;
        assert!(matches!(result.unwrap_err(), ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_service_applies_only_provided_fields() {
        let mut repository = MockTestCatalogRepository::new();
        let existing = stored_service(7, "Branding");

        repository
            .expect_find_by_id()
            .with(eq(ServiceId(7)))
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));

        repository
            .expect_update()
            .withf(|service| {
                service.name.as_str() == "Branding"
                    && service.price == Some(1200.0)
                    && service.duration.as_deref() == Some("2 weeks")
            })
            .times(1)
            .returning(|service| Ok(service));

        let service = CatalogService::new(Arc::new(repository));

        let command = UpdateServiceCommand {
            name: None,
            service_type: None,
            description: None,
            price: Some(1200.0),
            duration: None,
        };

        let updated = service
            .update_service(ServiceId(7), command)
            .await
            .expect("Update failed");
        assert_eq!(updated.price, Some(1200.0));
    }

    #[tokio::test]
    async fn test_delete_service() {
        let mut repository = MockTestCatalogRepository::new();
        repository
            .expect_delete()
            .with(eq(ServiceId(3)))
            .times(1)
            .returning(|_| Ok(()));

        let service = CatalogService::new(Arc::new(repository));

        service
            .delete_service(ServiceId(3))
            .await
            .expect("Delete failed");
    }
}

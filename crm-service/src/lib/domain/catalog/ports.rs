use async_trait::async_trait;

use crate::domain::catalog::errors::ServiceError;
use crate::domain::catalog::models::CreateServiceCommand;
use crate::domain::catalog::models::NewService;
use crate::domain::catalog::models::Service;
use crate::domain::catalog::models::ServiceId;
use crate::domain::catalog::models::UpdateServiceCommand;

/// Primary port for catalog service operations.
#[async_trait]
pub trait CatalogServicePort: Send + Sync + 'static {
    /// Create a new catalog service.
    ///
    /// # Arguments
    /// * `command` - Validated service creation command
    ///
    /// # Returns
    /// The created service with assigned ID
    ///
    /// # Errors
    /// * `ServiceError::DatabaseError` - Persistence failure
    async fn create_service(&self, command: CreateServiceCommand)
        -> Result<Service, ServiceError>;

    /// List all catalog services, newest first.
    ///
    /// # Errors
    /// * `ServiceError::DatabaseError` - Persistence failure
    async fn list_services(&self) -> Result<Vec<Service>, ServiceError>;

    /// Fetch a single catalog service by ID.
    ///
    /// # Arguments
    /// * `id` - Service identifier
    ///
    /// # Errors
    /// * `ServiceError::NotFound` - No service with this ID
    async fn get_service(&self, id: ServiceId) -> Result<Service, ServiceError>;

    /// Apply a partial update to an existing catalog service.
    ///
    /// Fields left as `None` in the command keep their current value.
    ///
    /// # Arguments
    /// * `id` - Service identifier
    /// * `command` - Fields to change
    ///
    /// # Errors
    /// * `ServiceError::NotFound` - No service with this ID
    async fn update_service(
        &self,
        id: ServiceId,
        command: UpdateServiceCommand,
    ) -> Result<Service, ServiceError>;

    /// Delete a catalog service by ID.
    ///
    /// # Arguments
    /// * `id` - Service identifier
    ///
    /// # Errors
    /// * `ServiceError::NotFound` - No service with this ID
    async fn delete_service(&self, id: ServiceId) -> Result<(), ServiceError>;
}

/// Secondary port for catalog persistence.
#[async_trait]
pub trait CatalogRepository: Send + Sync + 'static {
    /// Persist a new catalog service.
    ///
    /// # Errors
    /// * `ServiceError::DatabaseError` - Persistence failure
    async fn create(&self, service: NewService) -> Result<Service, ServiceError>;

    /// Fetch all catalog services, newest first.
    ///
    /// # Errors
    /// * `ServiceError::DatabaseError` - Persistence failure
    async fn list_all(&self) -> Result<Vec<Service>, ServiceError>;

    /// Look up a catalog service by ID.
    ///
    /// # Returns
    /// The service, or None if absent
    ///
    /// # Errors
    /// * `ServiceError::DatabaseError` - Persistence failure
    async fn find_by_id(&self, id: ServiceId) -> Result<Option<Service>, ServiceError>;

    /// Persist changes to an existing catalog service.
    ///
    /// # Errors
    /// * `ServiceError::NotFound` - No service with this ID
    async fn update(&self, service: Service) -> Result<Service, ServiceError>;

    /// Delete a catalog service by ID.
    ///
    /// # Errors
    /// * `ServiceError::NotFound` - No service with this ID
    /// * `ServiceError::DatabaseError` - Persistence failure
    async fn delete(&self, id: ServiceId) -> Result<(), ServiceError>;

    /// Count all catalog services.
    ///
    /// # Errors
    /// * `ServiceError::DatabaseError` - Persistence failure
    async fn count(&self) -> Result<i64, ServiceError>;
}

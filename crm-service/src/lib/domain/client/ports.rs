use async_trait::async_trait;

use crate::domain::client::errors::ClientError;
use crate::domain::client::models::Client;
use crate::domain::client::models::ClientId;
use crate::domain::client::models::ClientWithOrders;
use crate::domain::client::models::CreateClientCommand;
use crate::domain::client::models::NewClient;
use crate::domain::client::models::UpdateClientCommand;

/// Primary port for client operations.
///
/// Interface for all client use cases, to be implemented by the domain service.
#[async_trait]
pub trait ClientServicePort: Send + Sync + 'static {
    /// Create a new client.
    ///
    /// # Arguments
    /// * `command` - Validated client creation command
    ///
    /// # Returns
    /// The created client with assigned ID
    ///
    /// # Errors
    /// * `ClientError::EmailAlreadyExists` - Email is already in use
    /// * `ClientError::DatabaseError` - Persistence failure
    async fn create_client(&self, command: CreateClientCommand) -> Result<Client, ClientError>;

    /// List all clients together with their orders.
    ///
    /// # Returns
    /// All clients, each paired with its full order history
    ///
    /// # Errors
    /// * `ClientError::DatabaseError` - Persistence failure
    async fn list_clients(&self) -> Result<Vec<ClientWithOrders>, ClientError>;

    /// Fetch a single client by ID.
    ///
    /// # Arguments
    /// * `id` - Client identifier
    ///
    /// # Returns
    /// The client if it exists
    ///
    /// # Errors
    /// * `ClientError::NotFound` - No client with this ID
    async fn get_client(&self, id: ClientId) -> Result<Client, ClientError>;

    /// Apply a partial update to an existing client.
    ///
    /// Fields left as `None` in the command keep their current value.
    ///
    /// # Arguments
    /// * `id` - Client identifier
    /// * `command` - Fields to change
    ///
    /// # Returns
    /// The updated client
    ///
    /// # Errors
    /// * `ClientError::NotFound` - No client with this ID
    /// * `ClientError::EmailAlreadyExists` - New email is already in use
    async fn update_client(
        &self,
        id: ClientId,
        command: UpdateClientCommand,
    ) -> Result<Client, ClientError>;

    /// Delete a client by ID.
    ///
    /// # Arguments
    /// * `id` - Client identifier
    ///
    /// # Errors
    /// * `ClientError::NotFound` - No client with this ID
    async fn delete_client(&self, id: ClientId) -> Result<(), ClientError>;
}

/// Secondary port for client persistence.
#[async_trait]
pub trait ClientRepository: Send + Sync + 'static {
    /// Persist a new client.
    ///
    /// # Arguments
    /// * `client` - Client data to store
    ///
    /// # Returns
    /// The stored client with assigned ID and timestamp
    ///
    /// # Errors
    /// * `ClientError::EmailAlreadyExists` - Email is already in use
    /// * `ClientError::DatabaseError` - Persistence failure
    async fn create(&self, client: NewClient) -> Result<Client, ClientError>;

    /// Fetch all clients, each with its orders.
    ///
    /// # Returns
    /// All stored clients paired with their orders
    ///
    /// # Errors
    /// * `ClientError::DatabaseError` - Persistence failure
    async fn list_with_orders(&self) -> Result<Vec<ClientWithOrders>, ClientError>;

    /// Look up a client by ID.
    ///
    /// # Arguments
    /// * `id` - Client identifier
    ///
    /// # Returns
    /// The client, or None if absent
    ///
    /// # Errors
    /// * `ClientError::DatabaseError` - Persistence failure
    async fn find_by_id(&self, id: ClientId) -> Result<Option<Client>, ClientError>;

    /// Persist changes to an existing client.
    ///
    /// # Arguments
    /// * `client` - Client with updated fields
    ///
    /// # Returns
    /// The stored client
    ///
    /// # Errors
    /// * `ClientError::NotFound` - No client with this ID
    /// * `ClientError::EmailAlreadyExists` - New email is already in use
    async fn update(&self, client: Client) -> Result<Client, ClientError>;

    /// Delete a client by ID.
    ///
    /// # Arguments
    /// * `id` - Client identifier
    ///
    /// # Errors
    /// * `ClientError::NotFound` - No client with this ID
    /// * `ClientError::DatabaseError` - Persistence failure
    async fn delete(&self, id: ClientId) -> Result<(), ClientError>;

    /// Count all stored clients.
    ///
    /// # Returns
    /// Total number of clients
    ///
    /// # Errors
    /// * `ClientError::DatabaseError` - Persistence failure
    async fn count(&self) -> Result<i64, ClientError>;

    /// Fetch the most recently created clients.
    ///
    /// # Arguments
    /// * `limit` - Maximum number of clients to return
    ///
    /// # Returns
    /// Clients ordered by creation time, newest first
    ///
    /// # Errors
    /// * `ClientError::DatabaseError` - Persistence failure
    async fn find_recent(&self, limit: i64) -> Result<Vec<Client>, ClientError>;
}

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::client::errors::ClientError;
use crate::domain::client::models::Client;
use crate::domain::client::models::ClientId;
use crate::domain::client::models::ClientWithOrders;
use crate::domain::client::models::CreateClientCommand;
use crate::domain::client::models::NewClient;
use crate::domain::client::models::UpdateClientCommand;
use crate::domain::client::ports::ClientRepository;
use crate::domain::client::ports::ClientServicePort;

/// Domain service implementation for client operations.
///
/// Concrete implementation of ClientServicePort with dependency injection.
pub struct ClientService<R>
where
    R: ClientRepository,
{
    repository: Arc<R>,
}

impl<R> ClientService<R>
where
    R: ClientRepository,
{
    /// Create a new client service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Client persistence implementation
    ///
    /// # Returns
    /// Configured client service instance
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ClientServicePort for ClientService<R>
where
    R: ClientRepository,
{
    async fn create_client(&self, command: CreateClientCommand) -> Result<Client, ClientError> {
        let client = NewClient {
            name: command.name,
            email: command.email,
            phone: command.phone,
            address: command.address,
            company: command.company,
            notes: command.notes,
            status: command.status,
        };

        self.repository.create(client).await
    }

    async fn list_clients(&self) -> Result<Vec<ClientWithOrders>, ClientError> {
        self.repository.list_with_orders().await
    }

    async fn get_client(&self, id: ClientId) -> Result<Client, ClientError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ClientError::NotFound(id.to_string()))
    }

    async fn update_client(
        &self,
        id: ClientId,
        command: UpdateClientCommand,
    ) -> Result<Client, ClientError> {
        let mut client = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ClientError::NotFound(id.to_string()))?;

        if let Some(name) = command.name {
            client.name = name;
        }
        if let Some(email) = command.email {
            client.email = Some(email);
        }
        if let Some(phone) = command.phone {
            client.phone = Some(phone);
        }
        if let Some(address) = command.address {
            client.address = Some(address);
        }
        if let Some(company) = command.company {
            client.company = Some(company);
        }
        if let Some(notes) = command.notes {
            client.notes = Some(notes);
        }
        if let Some(status) = command.status {
            client.status = status;
        }

        self.repository.update(client).await
    }

    async fn delete_client(&self, id: ClientId) -> Result<(), ClientError> {
        self.repository.delete(id).await
    }
}

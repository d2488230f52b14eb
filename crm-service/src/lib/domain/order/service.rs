use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::order::errors::OrderError;
use crate::domain::order::models::CreateOrderCommand;
use crate::domain::order::models::NewOrder;
use crate::domain::order::models::Order;
use crate::domain::order::models::OrderId;
use crate::domain::order::models::UpdateOrderCommand;
use crate::domain::order::ports::OrderRepository;
use crate::domain::order::ports::OrderServicePort;

/// Domain service implementation for order operations.
///
/// Concrete implementation of OrderServicePort with dependency injection.
pub struct OrderService<R>
where
    R: OrderRepository,
{
    repository: Arc<R>,
}

impl<R> OrderService<R>
where
    R: OrderRepository,
{
    /// Create a new order service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Order persistence implementation
    ///
    /// # Returns
    /// Configured order service instance
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> OrderServicePort for OrderService<R>
where
    R: OrderRepository,
{
    async fn create_order(&self, command: CreateOrderCommand) -> Result<Order, OrderError> {
        let order = NewOrder {
            client_id: command.client_id,
            title: command.title,
            description: command.description,
            status: command.status,
            priority: command.priority,
            total_amount: command.total_amount,
            // An omitted order date means "placed now".
            order_date: command.order_date.unwrap_or_else(Utc::now),
            due_date: command.due_date,
        };

        self.repository.create(order).await
    }

    async fn list_orders(&self) -> Result<Vec<Order>, OrderError> {
        self.repository.list_all().await
    }

    async fn get_order(&self, id: OrderId) -> Result<Order, OrderError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))
    }

    async fn update_order(
        &self,
        id: OrderId,
        command: UpdateOrderCommand,
    ) -> Result<Order, OrderError> {
        let mut order = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))?;

        if let Some(client_id) = command.client_id {
            order.client_id = client_id;
        }
        if let Some(title) = command.title {
            order.title = title;
        }
        if let Some(description) = command.description {
            order.description = Some(description);
        }
        if let Some(status) = command.status {
            order.status = status;
        }
        if let Some(priority) = command.priority {
            order.priority = priority;
        }
        if let Some(total_amount) = command.total_amount {
            order.total_amount = Some(total_amount);
        }
        if let Some(order_date) = command.order_date {
            order.order_date = order_date;
        }
        if let Some(due_date) = command.due_date {
            order.due_date = Some(due_date);
        }

        self.repository.update(order).await
    }

    async fn delete_order(&self, id: OrderId) -> Result<(), OrderError> {
        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::client::models::ClientId;
    use crate::domain::order::models::OrderPriority;
    use crate::domain::order::models::OrderStatus;
    use crate::domain::order::models::OrderTitle;

    mock! {
        pub TestOrderRepository {}

        #[async_trait]
        impl OrderRepository for TestOrderRepository {
            async fn create(&self, order: NewOrder) -> Result<Order, OrderError>;
            async fn list_all(&self) -> Result<Vec<Order>, OrderError>;
            async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, OrderError>;
            async fn update(&self, order: Order) -> Result<Order, OrderError>;
            async fn delete(&self, id: OrderId) -> Result<(), OrderError>;
            async fn count_with_status(&self, status: OrderStatus) -> Result<i64, OrderError>;
            async fn sum_amounts_between(
                &self,
                start: DateTime<Utc>,
                end: DateTime<Utc>,
            ) -> Result<f64, OrderError>;
            async fn find_recent(&self, limit: i64) -> Result<Vec<Order>, OrderError>;
        }
    }

    fn stored_order(id: i64) -> Order {
        Order {
            id: OrderId(id),
            client_id: ClientId(1),
            title: OrderTitle::new("Website redesign".to_string()).unwrap(),
            description: None,
            status: OrderStatus::Pending,
            priority: OrderPriority::Medium,
            total_amount: Some(1500.0),
            order_date: Utc::now(),
            due_date: None,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_order_defaults_order_date() {
        let mut repository = MockTestOrderRepository::new();

        repository
            .expect_create()
            .withf(|order| {
                order.title.as_str() == "Website redesign"
                    && order.status == OrderStatus::Pending
                    // The service stamps a date when the command has none.
                    && order.order_date <= Utc::now()
            })
            .times(1)
            .returning(|order| {
                Ok(Order {
                    id: OrderId(1),
                    client_id: order.client_id,
                    title: order.title,
                    description: order.description,
                    status: order.status,
                    priority: order.priority,
                    total_amount: order.total_amount,
                    order_date: order.order_date,
                    due_date: order.due_date,
                    created_at: Utc::now(),
                })
            });

        let service = OrderService::new(Arc::new(repository));

        let command = CreateOrderCommand {
            client_id: ClientId(1),
            title: OrderTitle::new("Website redesign".to_string()).unwrap(),
            description: None,
            status: OrderStatus::default(),
            priority: OrderPriority::default(),
            total_amount: None,
            order_date: None,
            due_date: None,
        };

        let order = service.create_order(command).await.expect("Create failed");
        assert_eq!(order.id, OrderId(1));
    }

    #[tokio::test]
    async fn test_create_order_unknown_client() {
        let mut repository = MockTestOrderRepository::new();
        repository
            .expect_create()
            .times(1)
            .returning(|order| Err(OrderError::ClientNotFound(order.client_id.to_string())));

        let service = OrderService::new(Arc::new(repository));

        let command = CreateOrderCommand {
            client_id: ClientId(999),
            title: OrderTitle::new("Website redesign".to_string()).unwrap(),
            description: None,
            status: OrderStatus::default(),
            priority: OrderPriority::default(),
            total_amount: None,
            order_date: None,
            due_date: None,
        };

        let result = service.create_order(command).await;
        assert!(matches!(result.unwrap_err(), OrderError::ClientNotFound(_)));
    }

    #[tokio::test]
    async fn test_get_order_not_found() {
        let mut repository = MockTestOrderRepository::new();
        repository
            .expect_find_by_id()
            .with(eq(OrderId(42)))
            .times(1)
            .returning(|_| Ok(None));

        let service = OrderService::new(Arc::new(repository));

        let result = service.get_order(OrderId(42)).await;
        assert!(matches!(result.unwrap_err(), OrderError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_order_applies_only_provided_fields() {
        let mut repository = MockTestOrderRepository::new();
        let existing = stored_order(7);

        repository
            .expect_find_by_id()
            .with(eq(OrderId(7)))
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));

        repository
            .expect_update()
            .withf(|order| {
                order.title.as_str() == "Website redesign"
                    && order.status == OrderStatus::Completed
                    && order.total_amount == Some(1500.0)
            })
            .times(1)
            .returning(|order| Ok(order));

        let service = OrderService::new(Arc::new(repository));

        let command = UpdateOrderCommand {
            client_id: None,
            title: None,
            description: None,
            status: Some(OrderStatus::Completed),
            priority: None,
            total_amount: None,
            order_date: None,
            due_date: None,
        };

        let order = service
            .update_order(OrderId(7), command)
            .await
            .expect("Update failed");
        assert_eq!(order.status, OrderStatus::Completed);
    }

    #[tokio::test]
    async fn test_delete_order() {
        let mut repository = MockTestOrderRepository::new();
        repository
            .expect_delete()
            .with(eq(OrderId(3)))
            .times(1)
            .returning(|_| Ok(()));

        let service = OrderService::new(Arc::new(repository));

        service.delete_order(OrderId(3)).await.expect("Delete failed");
    }
}

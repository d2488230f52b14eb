use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;

use crate::domain::order::errors::OrderError;
use crate::domain::order::models::CreateOrderCommand;
use crate::domain::order::models::NewOrder;
use crate::domain::order::models::Order;
use crate::domain::order::models::OrderId;
use crate::domain::order::models::OrderStatus;
use crate::domain::order::models::UpdateOrderCommand;

/// Primary port for order operations.
#[async_trait]
pub trait OrderServicePort: Send + Sync + 'static {
    /// Create a new order.
    ///
    /// # Arguments
    /// * `command` - Validated order creation command
    ///
    /// # Returns
    /// The created order with assigned ID
    ///
    /// # Errors
    /// * `OrderError::ClientNotFound` - Referenced client does not exist
    /// * `OrderError::DatabaseError` - Persistence failure
    async fn create_order(&self, command: CreateOrderCommand) -> Result<Order, OrderError>;

    /// List all orders, newest first.
    ///
    /// # Errors
    /// * `OrderError::DatabaseError` - Persistence failure
    async fn list_orders(&self) -> Result<Vec<Order>, OrderError>;

    /// Fetch a single order by ID.
    ///
    /// # Arguments
    /// * `id` - Order identifier
    ///
    /// # Errors
    /// * `OrderError::NotFound` - No order with this ID
    async fn get_order(&self, id: OrderId) -> Result<Order, OrderError>;

    /// Apply a partial update to an existing order.
    ///
    /// Fields left as `None` in the command keep their current value.
    ///
    /// # Arguments
    /// * `id` - Order identifier
    /// * `command` - Fields to change
    ///
    /// # Errors
    /// * `OrderError::NotFound` - No order with this ID
    /// * `OrderError::ClientNotFound` - New client reference does not exist
    async fn update_order(
        &self,
        id: OrderId,
        command: UpdateOrderCommand,
    ) -> Result<Order, OrderError>;

    /// Delete an order by ID.
    ///
    /// # Arguments
    /// * `id` - Order identifier
    ///
    /// # Errors
    /// * `OrderError::NotFound` - No order with this ID
    async fn delete_order(&self, id: OrderId) -> Result<(), OrderError>;
}

/// Secondary port for order persistence.
#[async_trait]
pub trait OrderRepository: Send + Sync + 'static {
    /// Persist a new order.
    ///
    /// # Errors
    /// * `OrderError::ClientNotFound` - Referenced client does not exist
    /// * `OrderError::DatabaseError` - Persistence failure
    async fn create(&self, order: NewOrder) -> Result<Order, OrderError>;

    /// Fetch all orders, newest first.
    ///
    /// # Errors
    /// * `OrderError::DatabaseError` - Persistence failure
    async fn list_all(&self) -> Result<Vec<Order>, OrderError>;

    /// Look up an order by ID.
    ///
    /// # Returns
    /// The order, or None if absent
    ///
    /// # Errors
    /// * `OrderError::DatabaseError` - Persistence failure
    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, OrderError>;

    /// Persist changes to an existing order.
    ///
    /// # Errors
    /// * `OrderError::NotFound` - No order with this ID
    /// * `OrderError::ClientNotFound` - New client reference does not exist
    async fn update(&self, order: Order) -> Result<Order, OrderError>;

    /// Delete an order by ID.
    ///
    /// # Errors
    /// * `OrderError::NotFound` - No order with this ID
    /// * `OrderError::DatabaseError` - Persistence failure
    async fn delete(&self, id: OrderId) -> Result<(), OrderError>;

    /// Count orders with a given status.
    ///
    /// # Arguments
    /// * `status` - Status to count
    ///
    /// # Errors
    /// * `OrderError::DatabaseError` - Persistence failure
    async fn count_with_status(&self, status: OrderStatus) -> Result<i64, OrderError>;

    /// Sum order amounts over a date range.
    ///
    /// Orders without an amount contribute nothing. The range is
    /// half-open: `start <= order_date < end`.
    ///
    /// # Arguments
    /// * `start` - Inclusive range start
    /// * `end` - Exclusive range end
    ///
    /// # Errors
    /// * `OrderError::DatabaseError` - Persistence failure
    async fn sum_amounts_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<f64, OrderError>;

    /// Fetch the most recently created orders.
    ///
    /// # Arguments
    /// * `limit` - Maximum number of orders to return
    ///
    /// # Returns
    /// Orders ordered by creation time, newest first
    ///
    /// # Errors
    /// * `OrderError::DatabaseError` - Persistence failure
    async fn find_recent(&self, limit: i64) -> Result<Vec<Order>, OrderError>;
}

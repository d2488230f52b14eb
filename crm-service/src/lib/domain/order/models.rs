use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::client::models::ClientId;
use crate::domain::order::errors::OrderIdError;
use crate::domain::order::errors::OrderPriorityError;
use crate::domain::order::errors::OrderStatusError;
use crate::domain::order::errors::OrderTitleError;

/// Order unique identifier value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrderId(pub i64);

impl OrderId {
    /// Parse an order ID from string.
    ///
    /// # Arguments
    /// * `s` - Numeric string to parse
    ///
    /// # Returns
    /// Parsed OrderId
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid integer
    pub fn from_string(s: &str) -> Result<Self, OrderIdError> {
        s.parse::<i64>()
            .map(OrderId)
            .map_err(|e| OrderIdError::InvalidFormat(e.to_string()))
    }

    /// Get the inner numeric value.
    ///
    /// # Returns
    /// The i64 value
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Order processing status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Get the status as its canonical string form.
    ///
    /// # Returns
    /// Status string
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::InProgress => "InProgress",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

impl FromStr for OrderStatus {
    type Err = OrderStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(OrderStatus::Pending),
            "InProgress" => Ok(OrderStatus::InProgress),
            "Completed" => Ok(OrderStatus::Completed),
            "Cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(OrderStatusError::InvalidValue(other.to_string())),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order urgency level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl OrderPriority {
    /// Get the priority as its canonical string form.
    ///
    /// # Returns
    /// Priority string
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderPriority::Low => "Low",
            OrderPriority::Medium => "Medium",
            OrderPriority::High => "High",
        }
    }
}

impl FromStr for OrderPriority {
    type Err = OrderPriorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(OrderPriority::Low),
            "Medium" => Ok(OrderPriority::Medium),
            "High" => Ok(OrderPriority::High),
            other => Err(OrderPriorityError::InvalidValue(other.to_string())),
        }
    }
}

impl fmt::Display for OrderPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order title value object with validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderTitle(String);

impl OrderTitle {
    const MAX_LENGTH: usize = 255;

    /// Create a new validated order title.
    ///
    /// # Arguments
    /// * `title` - Raw title string
    ///
    /// # Returns
    /// Validated OrderTitle value object
    ///
    /// # Errors
    /// * `Empty` - Title is empty or whitespace only
    /// * `TooLong` - Title exceeds 255 characters
    pub fn new(title: String) -> Result<Self, OrderTitleError> {
        if title.trim().is_empty() {
            Err(OrderTitleError::Empty)
        } else if title.len() > Self::MAX_LENGTH {
            Err(OrderTitleError::TooLong {
                max: Self::MAX_LENGTH,
                actual: title.len(),
            })
        } else {
            Ok(Self(title))
        }
    }

    /// Get title as string slice.
    ///
    /// # Returns
    /// Title string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Order aggregate root.
///
/// An order is a flat record pointing at its client; the frontend's
/// service/product selections are never persisted alongside it.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: OrderId,
    pub client_id: ClientId,
    pub title: OrderTitle,
    pub description: Option<String>,
    pub status: OrderStatus,
    pub priority: OrderPriority,
    pub total_amount: Option<f64>,
    pub order_date: DateTime<Utc>,
    pub due_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Order data prior to persistence.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub client_id: ClientId,
    pub title: OrderTitle,
    pub description: Option<String>,
    pub status: OrderStatus,
    pub priority: OrderPriority,
    pub total_amount: Option<f64>,
    pub order_date: DateTime<Utc>,
    pub due_date: Option<DateTime<Utc>>,
}

/// Command to create a new order with domain types
#[derive(Debug)]
pub struct CreateOrderCommand {
    pub client_id: ClientId,
    pub title: OrderTitle,
    pub description: Option<String>,
    pub status: OrderStatus,
    pub priority: OrderPriority,
    pub total_amount: Option<f64>,
    pub order_date: Option<DateTime<Utc>>,
    pub due_date: Option<DateTime<Utc>>,
}

/// Command to update an existing order with optional validated fields.
///
/// All fields are optional to support partial updates.
/// Only provided fields will be updated.
#[derive(Debug)]
pub struct UpdateOrderCommand {
    pub client_id: Option<ClientId>,
    pub title: Option<OrderTitle>,
    pub description: Option<String>,
    pub status: Option<OrderStatus>,
    pub priority: Option<OrderPriority>,
    pub total_amount: Option<f64>,
    pub order_date: Option<DateTime<Utc>>,
    pub due_date: Option<DateTime<Utc>>,
}

use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::client::errors::ClientIdError;
use crate::domain::client::errors::ClientNameError;
use crate::domain::client::errors::ClientStatusError;
use crate::domain::order::models::Order;

/// Client unique identifier value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClientId(pub i64);

impl ClientId {
    /// Parse a client ID from string.
    ///
    /// # Arguments
    /// * `s` - Numeric string to parse
    ///
    /// # Returns
    /// Parsed ClientId
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid integer
    pub fn from_string(s: &str) -> Result<Self, ClientIdError> {
        s.parse::<i64>()
            .map(ClientId)
            .map_err(|e| ClientIdError::InvalidFormat(e.to_string()))
    }

    /// Get the inner numeric value.
    ///
    /// # Returns
    /// The i64 value
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Client lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClientStatus {
    #[default]
    Active,
    Inactive,
}

impl ClientStatus {
    /// Get the status as its canonical string form.
    ///
    /// # Returns
    /// Status string ("Active" or "Inactive")
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientStatus::Active => "Active",
            ClientStatus::Inactive => "Inactive",
        }
    }
}

impl FromStr for ClientStatus {
    type Err = ClientStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(ClientStatus::Active),
            "Inactive" => Ok(ClientStatus::Inactive),
            other => Err(ClientStatusError::InvalidValue(other.to_string())),
        }
    }
}

impl fmt::Display for ClientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Client name value object with validation.
///
/// Ensures name is non-blank and within 255 character limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientName(String);

impl ClientName {
    const MAX_LENGTH: usize = 255;

    /// Create a new validated client name.
    ///
    /// # Arguments
    /// * `name` - Raw client name string
    ///
    /// # Returns
    /// Validated ClientName value object
    ///
    /// # Errors
    /// * `Empty` - Name is empty or whitespace only
    /// * `TooLong` - Name exceeds 255 characters
    pub fn new(name: String) -> Result<Self, ClientNameError> {
        if name.trim().is_empty() {
            Err(ClientNameError::Empty)
        } else if name.len() > Self::MAX_LENGTH {
            Err(ClientNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: name.len(),
            })
        } else {
            Ok(Self(name))
        }
    }

    /// Get name as string slice.
    ///
    /// # Returns
    /// Name string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Client aggregate root.
#[derive(Debug, Clone)]
pub struct Client {
    pub id: ClientId,
    pub name: ClientName,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub company: Option<String>,
    pub notes: Option<String>,
    pub status: ClientStatus,
    pub created_at: DateTime<Utc>,
}

/// Client data prior to persistence.
///
/// Identifier and creation timestamp are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewClient {
    pub name: ClientName,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub company: Option<String>,
    pub notes: Option<String>,
    pub status: ClientStatus,
}

/// Client together with all of its orders.
#[derive(Debug, Clone)]
pub struct ClientWithOrders {
    pub client: Client,
    pub orders: Vec<Order>,
}

/// Command to create a new client with domain types
#[derive(Debug)]
pub struct CreateClientCommand {
    pub name: ClientName,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub company: Option<String>,
    pub notes: Option<String>,
    pub status: ClientStatus,
}

/// Command to update an existing client with optional validated fields.
///
/// All fields are optional to support partial updates.
/// Only provided fields will be updated.
#[derive(Debug)]
pub struct UpdateClientCommand {
    pub name: Option<ClientName>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub company: Option<String>,
    pub notes: Option<String>,
    pub status: Option<ClientStatus>,
}

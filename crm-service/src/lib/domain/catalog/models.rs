use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::catalog::errors::ServiceIdError;
use crate::domain::catalog::errors::ServiceNameError;
use crate::domain::catalog::errors::ServiceTypeError;

/// Catalog service unique identifier value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ServiceId(pub i64);

impl ServiceId {
    /// Parse a service ID from string.
    ///
    /// # Arguments
    /// * `s` - Numeric string to parse
    ///
    /// # Returns
    /// Parsed ServiceId
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid integer
    pub fn from_string(s: &str) -> Result<Self, ServiceIdError> {
        s.parse::<i64>()
            .map(ServiceId)
            .map_err(|e| ServiceIdError::InvalidFormat(e.to_string()))
    }

    /// Get the inner numeric value.
    ///
    /// # Returns
    /// The i64 value
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Category of service offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceType {
    Development,
    Design,
    Marketing,
    Security,
}

impl ServiceType {
    /// Get the type as its canonical string form.
    ///
    /// # Returns
    /// Type string
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Development => "Development",
            ServiceType::Design => "Design",
            ServiceType::Marketing => "Marketing",
            ServiceType::Security => "Security",
        }
    }
}

impl FromStr for ServiceType {
    type Err = ServiceTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Development" => Ok(ServiceType::Development),
            "Design" => Ok(ServiceType::Design),
            "Marketing" => Ok(ServiceType::Marketing),
            "Security" => Ok(ServiceType::Security),
            other => Err(ServiceTypeError::InvalidValue(other.to_string())),
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Service name value object with validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceName(String);

impl ServiceName {
    const MAX_LENGTH: usize = 255;

    /// Create a new validated service name.
    ///
    /// # Arguments
    /// * `name` - Raw name string
    ///
    /// # Returns
    /// Validated ServiceName value object
    ///
    /// # Errors
    /// * `Empty` - Name is empty or whitespace only
    /// * `TooLong` - Name exceeds 255 characters
    pub fn new(name: String) -> Result<Self, ServiceNameError> {
        if name.trim().is_empty() {
            Err(ServiceNameError::Empty)
        } else if name.len() > Self::MAX_LENGTH {
            Err(ServiceNameError::TooLong {
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

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Catalog entry for a service the company offers.
#[derive(Debug, Clone)]
pub struct Service {
    pub id: ServiceId,
    pub name: ServiceName,
    pub service_type: ServiceType,
    pub description: Option<String>,
    pub price: Option<f64>,
    /// Free-form estimate, e.g. "2 weeks".
    pub duration: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Service data prior to persistence.
#[derive(Debug, Clone)]
pub struct NewService {
    pub name: ServiceName,
    pub service_type: ServiceType,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub duration: Option<String>,
}

/// Command to create a new catalog service with domain types
#[derive(Debug)]
pub struct CreateServiceCommand {
    pub name: ServiceName,
    pub service_type: ServiceType,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub duration: Option<String>,
}

/// Command to update an existing catalog service with optional fields.
///
/// All fields are optional to support partial updates.
/// Only provided fields will be updated.
#[derive(Debug)]
pub struct UpdateServiceCommand {
    pub name: Option<ServiceName>,
    pub service_type: Option<ServiceType>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub duration: Option<String>,
}

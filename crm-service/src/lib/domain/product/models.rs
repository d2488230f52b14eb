use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::product::errors::ProductIdError;
use crate::domain::product::errors::ProductNameError;
use crate::domain::product::errors::ProductTypeError;
use crate::domain::product::errors::StockError;

/// Product unique identifier value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProductId(pub i64);

impl ProductId {
    /// Parse a product ID from string.
    ///
    /// # Arguments
    /// * `s` - Numeric string to parse
    ///
    /// # Returns
    /// Parsed ProductId
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid integer
    pub fn from_string(s: &str) -> Result<Self, ProductIdError> {
        s.parse::<i64>()
            .map(ProductId)
            .map_err(|e| ProductIdError::InvalidFormat(e.to_string()))
    }

    /// Get the inner numeric value.
    ///
    /// # Returns
    /// The i64 value
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Kind of product sold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductType {
    Digital,
    Service,
    Hardware,
}

impl ProductType {
    /// Get the type as its canonical string form.
    ///
    /// # Returns
    /// Type string
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Digital => "Digital",
            ProductType::Service => "Service",
            ProductType::Hardware => "Hardware",
        }
    }
}

impl FromStr for ProductType {
    type Err = ProductTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Digital" => Ok(ProductType::Digital),
            "Service" => Ok(ProductType::Service),
            "Hardware" => Ok(ProductType::Hardware),
            other => Err(ProductTypeError::InvalidValue(other.to_string())),
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Product name value object with validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductName(String);

impl ProductName {
    const MAX_LENGTH: usize = 255;

    /// Create a new validated product name.
    ///
    /// # Arguments
    /// * `name` - Raw name string
    ///
    /// # Returns
    /// Validated ProductName value object
    ///
    /// # Errors
    /// * `Empty` - Name is empty or whitespace only
    /// * `TooLong` - Name exceeds 255 characters
    pub fn new(name: String) -> Result<Self, ProductNameError> {
        if name.trim().is_empty() {
            Err(ProductNameError::Empty)
        } else if name.len() > Self::MAX_LENGTH {
            Err(ProductNameError::TooLong {
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

impl fmt::Display for ProductName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Units in stock, never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stock(i32);

impl Stock {
    /// Create a validated stock count.
    ///
    /// # Arguments
    /// * `units` - Number of units in stock
    ///
    /// # Returns
    /// Validated Stock value object
    ///
    /// # Errors
    /// * `Negative` - Count is below zero
    pub fn new(units: i32) -> Result<Self, StockError> {
        if units < 0 {
            Err(StockError::Negative(units))
        } else {
            Ok(Self(units))
        }
    }

    /// Get the inner count.
    ///
    /// # Returns
    /// The i32 value
    pub fn value(&self) -> i32 {
        self.0
    }
}

/// Product aggregate root.
#[derive(Debug, Clone)]
pub struct Product {
    pub id: ProductId,
    pub name: ProductName,
    pub product_type: ProductType,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Stock,
    pub created_at: DateTime<Utc>,
}

/// Product data prior to persistence.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: ProductName,
    pub product_type: ProductType,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Stock,
}

/// Command to create a new product with domain types
#[derive(Debug)]
pub struct CreateProductCommand {
    pub name: ProductName,
    pub product_type: ProductType,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Stock,
}

/// Command to update an existing product with optional validated fields.
///
/// All fields are optional to support partial updates.
/// Only provided fields will be updated.
#[derive(Debug)]
pub struct UpdateProductCommand {
    pub name: Option<ProductName>,
    pub product_type: Option<ProductType>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<Stock>,
}

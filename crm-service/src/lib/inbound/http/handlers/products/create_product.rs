use std::str::FromStr;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use thiserror::Error;

use super::super::ApiError;
use super::super::ApiSuccess;
use super::ProductData;
use crate::domain::product::errors::ProductNameError;
use crate::domain::product::errors::ProductTypeError;
use crate::domain::product::errors::StockError;
use crate::domain::product::models::CreateProductCommand;
use crate::domain::product::models::ProductName;
use crate::domain::product::models::ProductType;
use crate::domain::product::models::Stock;
use crate::inbound::http::router::AppState;

pub async fn create_product(
    State(state): State<AppState>,
    Json(body): Json<CreateProductRequestBody>,
) -> Result<ApiSuccess<ProductData>, ApiError> {
    state
        .product_service
        .create_product(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref product| ApiSuccess::new(StatusCode::CREATED, product.into()))
}

/// HTTP request body for creating a product (raw JSON)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateProductRequestBody {
    name: String,
    #[serde(rename = "type")]
    product_type: String,
    description: Option<String>,
    price: Option<f64>,
    stock: i32,
}

#[derive(Debug, Clone, Error)]
enum ParseCreateProductRequestError {
    #[error("Invalid name: {0}")]
    Name(#[from] ProductNameError),

    #[error("Invalid type: {0}")]
    Type(#[from] ProductTypeError),

    #[error("Invalid stock: {0}")]
    Stock(#[from] StockError),
}

impl CreateProductRequestBody {
    fn try_into_command(self) -> Result<CreateProductCommand, ParseCreateProductRequestError> {
        let name = ProductName::new(self.name)?;
        let product_type = ProductType::from_str(&self.product_type)?;
        let stock = Stock::new(self.stock)?;

        Ok(CreateProductCommand {
            name,
            product_type,
            description: self.description,
            price: self.price,
            stock,
        })
    }
}

impl From<ParseCreateProductRequestError> for ApiError {
    fn from(err: ParseCreateProductRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

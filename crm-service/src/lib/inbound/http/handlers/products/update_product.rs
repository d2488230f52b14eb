use std::str::FromStr;

use axum::extract::Path;
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
use crate::domain::product::models::ProductId;
use crate::domain::product::models::ProductName;
use crate::domain::product::models::ProductType;
use crate::domain::product::models::Stock;
use crate::domain::product::models::UpdateProductCommand;
use crate::inbound::http::router::AppState;

pub async fn update_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
    Json(body): Json<UpdateProductRequestBody>,
) -> Result<ApiSuccess<ProductData>, ApiError> {
    let product_id =
        ProductId::from_string(&product_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .product_service
        .update_product(product_id, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref product| ApiSuccess::new(StatusCode::OK, product.into()))
}

/// HTTP request body for a partial product update (raw JSON).
///
/// Absent fields leave the stored value untouched.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UpdateProductRequestBody {
    name: Option<String>,
    #[serde(rename = "type")]
    product_type: Option<String>,
    description: Option<String>,
    price: Option<f64>,
    stock: Option<i32>,
}

#[derive(Debug, Clone, Error)]
enum ParseUpdateProductRequestError {
    #[error("Invalid name: {0}")]
    Name(#[from] ProductNameError),

    #[error("Invalid type: {0}")]
    Type(#[from] ProductTypeError),

    #[error("Invalid stock: {0}")]
    Stock(#[from] StockError),
}

impl UpdateProductRequestBody {
    fn try_into_command(self) -> Result<UpdateProductCommand, ParseUpdateProductRequestError> {
        let name = self.name.map(ProductName::new).transpose()?;
        let product_type = self
            .product_type
            .as_deref()
            .map(ProductType::from_str)
            .transpose()?;
        let stock = self.stock.map(Stock::new).transpose()?;

        Ok(UpdateProductCommand {
            name,
            product_type,
            description: self.description,
            price: self.price,
            stock,
        })
    }
}

impl From<ParseUpdateProductRequestError> for ApiError {
    fn from(err: ParseUpdateProductRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

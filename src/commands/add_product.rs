use crate::error::{CatalogError, Operation, Result};
use crate::events::ProductAddedEvent;
use crate::models::product::Product;
use crate::services::catalog_service::SharedCatalogService;
use crate::services::lock;
use chrono::{DateTime, Utc};
use mediator::{DefaultMediator, Mediator, Request, RequestHandler};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Input for creating a product.
///
/// Every field is optional at the boundary so that presence is decided here
/// rather than by the body parser.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddProductCommand {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub stock: Option<i64>,
}

impl AddProductCommand {
    /// Builds the new record, or fails with [`CatalogError::Validation`] if `name`,
    /// `price` or `category` is missing.
    ///
    /// An empty string or a zero price counts as missing.
    pub fn into_product(self, now: DateTime<Utc>) -> Result<Product> {
        let name = self.name.filter(|name| !name.is_empty());
        let price = self.price.filter(|price| *price != 0.0 && !price.is_nan());
        let category = self.category.filter(|category| !category.is_empty());

        match (name, price, category) {
            (Some(name), Some(price), Some(category)) => Ok(Product {
                id: Uuid::new_v4(),
                name,
                price,
                category,
                stock: self.stock.unwrap_or(0),
                created_at: now,
                updated_at: now,
            }),
            _ => Err(CatalogError::Validation),
        }
    }
}

impl Request<Result<Product>> for AddProductCommand {}

pub struct AddProductRequestHandler(pub SharedCatalogService, pub DefaultMediator);
impl RequestHandler<AddProductCommand, Result<Product>> for AddProductRequestHandler {
    fn handle(&mut self, command: AddProductCommand) -> Result<Product> {
        let product = lock(&self.0, Operation::Add)?.create(command)?;

        if let Err(err) = self.1.publish(ProductAddedEvent(product.clone())) {
            log::warn!("Could not publish the event: {}", err);
        }

        Ok(product)
    }
}

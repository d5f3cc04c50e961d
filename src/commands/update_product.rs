use crate::error::{Operation, Result};
use crate::events::ProductUpdatedEvent;
use crate::models::product::Product;
use crate::services::catalog_service::SharedCatalogService;
use crate::services::lock;
use chrono::{DateTime, Utc};
use mediator::{DefaultMediator, Mediator, Request, RequestHandler};
use serde::{Deserialize, Serialize};

/// Partial update for an existing product.
///
/// The `id` comes from the request path, never from the body. `category` is not
/// part of the patch; it can only be set at creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProductCommand {
    #[serde(skip)]
    pub id: String,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
}

impl UpdateProductCommand {
    /// Merges the patch into `product` and refreshes `updated_at`.
    ///
    /// `name` and `price` are only applied when non-empty and non-zero, while any
    /// `stock` that was sent is applied, including `0`.
    pub fn apply_to(self, product: &mut Product, now: DateTime<Utc>) {
        if let Some(name) = self.name.filter(|name| !name.is_empty()) {
            product.name = name;
        }

        if let Some(price) = self.price.filter(|price| *price != 0.0 && !price.is_nan()) {
            product.price = price;
        }

        if let Some(stock) = self.stock {
            product.stock = stock;
        }

        // Never move backwards, even if the wall clock does.
        product.updated_at = now.max(product.updated_at);
    }
}

impl Request<Result<Product>> for UpdateProductCommand {}

pub struct UpdateProductRequestHandler(pub SharedCatalogService, pub DefaultMediator);
impl RequestHandler<UpdateProductCommand, Result<Product>> for UpdateProductRequestHandler {
    fn handle(&mut self, command: UpdateProductCommand) -> Result<Product> {
        let product = lock(&self.0, Operation::Update)?.update(command)?;

        if let Err(err) = self.1.publish(ProductUpdatedEvent(product.clone())) {
            log::warn!("Could not publish the event: {}", err);
        }

        Ok(product)
    }
}

use crate::error::{Operation, Result};
use crate::events::ProductDeletedEvent;
use crate::models::product::Product;
use crate::services::catalog_service::SharedCatalogService;
use crate::services::lock;
use mediator::{DefaultMediator, Mediator, Request, RequestHandler};

pub struct DeleteProductCommand(pub String);
impl Request<Result<Product>> for DeleteProductCommand {}

pub struct DeleteProductRequestHandler(pub SharedCatalogService, pub DefaultMediator);
impl RequestHandler<DeleteProductCommand, Result<Product>> for DeleteProductRequestHandler {
    fn handle(&mut self, command: DeleteProductCommand) -> Result<Product> {
        let deleted = lock(&self.0, Operation::Delete)?.delete(&command.0)?;

        if let Err(err) = self.1.publish(ProductDeletedEvent(deleted.clone())) {
            log::warn!("Could not publish the event: {}", err);
        }

        Ok(deleted)
    }
}

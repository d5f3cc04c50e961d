use crate::error::{Operation, Result};
use crate::models::product::Product;
use crate::services::catalog_service::SharedCatalogService;
use crate::services::lock;
use mediator::{Request, RequestHandler};

pub struct GetProductRequest(pub String);
impl Request<Result<Product>> for GetProductRequest {}

pub struct GetProductRequestHandler(pub SharedCatalogService);
impl RequestHandler<GetProductRequest, Result<Product>> for GetProductRequestHandler {
    fn handle(&mut self, req: GetProductRequest) -> Result<Product> {
        lock(&self.0, Operation::Fetch)?.get(&req.0)
    }
}

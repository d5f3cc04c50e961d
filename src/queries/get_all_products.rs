use crate::error::{Operation, Result};
use crate::models::product::Product;
use crate::services::catalog_service::SharedCatalogService;
use crate::services::lock;
use mediator::{Request, RequestHandler};

pub struct GetAllProductsRequest;
impl Request<Result<Vec<Product>>> for GetAllProductsRequest {}

pub struct GetAllProductsRequestHandler(pub SharedCatalogService);
impl RequestHandler<GetAllProductsRequest, Result<Vec<Product>>> for GetAllProductsRequestHandler {
    fn handle(&mut self, _: GetAllProductsRequest) -> Result<Vec<Product>> {
        Ok(lock(&self.0, Operation::Fetch)?.get_all())
    }
}

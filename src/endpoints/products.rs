use crate::commands::{AddProductCommand, DeleteProductCommand, UpdateProductCommand};
use crate::error::{json_error_handler, CatalogError, Operation, Result};
use crate::queries::{GetAllProductsRequest, GetProductRequest};
use crate::services::{lock, SharedMediator};
use actix_web::web::{Data, Json};
use actix_web::{delete, get, post, put, web, HttpResponse};
use mediator::Mediator;

/// Registers the `/products` routes.
///
/// Paths are expected to end with a slash, see `NormalizePath` with `TrailingSlash::Always`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/products")
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .service(create)
            .service(update)
            .service(delete)
            .service(get)
            .service(get_all),
    );
}

#[post("/")]
pub async fn create(
    mediator: Data<SharedMediator>,
    body: Json<AddProductCommand>,
) -> Result<HttpResponse> {
    let mut mediator = lock(mediator.get_ref(), Operation::Add)?;
    let product = mediator
        .send(body.into_inner())
        .map_err(|_| CatalogError::Internal(Operation::Add))??;

    Ok(HttpResponse::Created()
        .insert_header(("Location", format!("/products/{}", product.id)))
        .json(product))
}

#[put("/{id}/")]
pub async fn update(
    path: web::Path<String>,
    mediator: Data<SharedMediator>,
    body: Json<UpdateProductCommand>,
) -> Result<HttpResponse> {
    let command = UpdateProductCommand {
        id: path.into_inner(),
        ..body.into_inner()
    };

    let mut mediator = lock(mediator.get_ref(), Operation::Update)?;
    let product = mediator
        .send(command)
        .map_err(|_| CatalogError::Internal(Operation::Update))??;

    Ok(HttpResponse::Ok().json(product))
}

#[delete("/{id}/")]
pub async fn delete(path: web::Path<String>, mediator: Data<SharedMediator>) -> Result<HttpResponse> {
    let mut mediator = lock(mediator.get_ref(), Operation::Delete)?;
    mediator
        .send(DeleteProductCommand(path.into_inner()))
        .map_err(|_| CatalogError::Internal(Operation::Delete))??;

    Ok(HttpResponse::NoContent().finish())
}

#[get("/{id}/")]
pub async fn get(path: web::Path<String>, mediator: Data<SharedMediator>) -> Result<HttpResponse> {
    let mut mediator = lock(mediator.get_ref(), Operation::Fetch)?;
    let product = mediator
        .send(GetProductRequest(path.into_inner()))
        .map_err(|_| CatalogError::Internal(Operation::Fetch))??;

    Ok(HttpResponse::Ok().json(product))
}

#[get("/")]
pub async fn get_all(mediator: Data<SharedMediator>) -> Result<HttpResponse> {
    let mut mediator = lock(mediator.get_ref(), Operation::Fetch)?;
    let products = mediator
        .send(GetAllProductsRequest)
        .map_err(|_| CatalogError::Internal(Operation::Fetch))??;

    Ok(HttpResponse::Ok().json(products))
}

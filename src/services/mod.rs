pub mod catalog_service;

use crate::commands::*;
use crate::error::{CatalogError, Operation, Result};
use crate::events::*;
use crate::queries::*;
use catalog_service::SharedCatalogService;
use mediator::DefaultMediator;
use std::sync::{Arc, Mutex, MutexGuard};

pub type SharedMediator = Arc<Mutex<DefaultMediator>>;

/// Builds the mediator with every catalog request handler and the event log subscribers.
pub fn create_mediator_service(catalog: &SharedCatalogService) -> SharedMediator {
    let catalog = catalog.clone();
    let mediator = DefaultMediator::builder()
        // Requests
        .add_handler(GetProductRequestHandler(catalog.clone()))
        .add_handler(GetAllProductsRequestHandler(catalog.clone()))
        .add_handler_deferred(|m| AddProductRequestHandler(catalog.clone(), m))
        .add_handler_deferred(|m| UpdateProductRequestHandler(catalog.clone(), m))
        .add_handler_deferred(|m| DeleteProductRequestHandler(catalog.clone(), m))
        // Events
        .subscribe_fn(|event: ProductAddedEvent| {
            log::info!("Added: {} - {}", event.0.name, event.0.id);
        })
        .subscribe_fn(|event: ProductUpdatedEvent| {
            log::info!("Updated: {} - {}", event.0.name, event.0.id);
        })
        .subscribe_fn(|event: ProductDeletedEvent| {
            log::info!("Deleted: {} - {}", event.0.name, event.0.id);
        })
        .build();

    Arc::new(Mutex::new(mediator))
}

/// Locks a shared service for `operation`.
///
/// A poisoned lock is reported as an internal failure of that operation.
pub fn lock<T>(shared: &Arc<Mutex<T>>, operation: Operation) -> Result<MutexGuard<'_, T>> {
    shared
        .lock()
        .map_err(|_| CatalogError::Internal(operation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::catalog_service::CatalogService;
    use mediator::Mediator;

    #[test]
    fn send_requests_test() {
        let catalog = CatalogService::shared();
        let mediator = create_mediator_service(&catalog);
        let mut mediator = mediator.lock().unwrap();

        let product = mediator
            .send(AddProductCommand {
                name: Some("Pen".to_owned()),
                price: Some(10.0),
                category: Some("Office".to_owned()),
                stock: None,
            })
            .unwrap()
            .unwrap();
        let id = product.id.to_string();

        let updated = mediator
            .send(UpdateProductCommand {
                id: id.clone(),
                stock: Some(4),
                ..Default::default()
            })
            .unwrap()
            .unwrap();
        assert_eq!(4, updated.stock);

        let fetched = mediator.send(GetProductRequest(id.clone())).unwrap().unwrap();
        assert_eq!("Pen", fetched.name);
        assert_eq!(4, fetched.stock);

        let all = mediator.send(GetAllProductsRequest).unwrap().unwrap();
        assert_eq!(1, all.len());

        assert!(mediator.send(DeleteProductCommand(id.clone())).unwrap().is_ok());
        assert_eq!(
            Err(CatalogError::NotFound),
            mediator.send(DeleteProductCommand(id)).unwrap()
        );
        assert!(catalog.lock().unwrap().is_empty());
    }

    #[test]
    fn poisoned_lock_test() {
        let catalog = CatalogService::shared();

        let poisoner = catalog.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.lock().unwrap();
            panic!("poison the catalog");
        })
        .join();

        assert_eq!(
            Some(CatalogError::Internal(Operation::Delete)),
            lock(&catalog, Operation::Delete).err()
        );

        let mediator = create_mediator_service(&catalog);
        let mut mediator = mediator.lock().unwrap();
        assert_eq!(
            Err(CatalogError::Internal(Operation::Delete)),
            mediator.send(DeleteProductCommand("missing-id".to_owned())).unwrap()
        );
    }
}

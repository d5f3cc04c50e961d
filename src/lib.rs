//! # catalog_api
//! An in-memory product catalog served over HTTP.
//!
//! Products are created, partially updated and deleted through `/products`.
//! Creation requires `name`, `price` and `category`; updates merge only the
//! fields that were sent.
//!
//! Every HTTP handler sends a command or query through a [`mediator::DefaultMediator`];
//! the request handlers own the catalog and publish an event for each change.
//!
//! ## Example
//! ```rust
//! use catalog_api::commands::{AddProductCommand, UpdateProductCommand};
//! use catalog_api::error::CatalogError;
//! use catalog_api::services::catalog_service::CatalogService;
//!
//! let mut catalog = CatalogService::new();
//!
//! let pen = catalog
//!     .create(AddProductCommand {
//!         name: Some("Pen".to_owned()),
//!         price: Some(10.0),
//!         category: Some("Office".to_owned()),
//!         stock: None,
//!     })
//!     .unwrap();
//! assert_eq!(0, pen.stock);
//!
//! let id = pen.id.to_string();
//! catalog
//!     .update(UpdateProductCommand { id: id.clone(), price: Some(15.0), ..Default::default() })
//!     .unwrap();
//! assert_eq!(15.0, catalog.get(&id).unwrap().price);
//!
//! assert!(catalog.delete(&id).is_ok());
//! assert_eq!(Err(CatalogError::NotFound), catalog.delete(&id));
//! ```

/// Module for the commands and their handlers.
pub mod commands;

/// Module for the server configuration.
pub mod config;

/// Module for the events published on catalog changes.
pub mod events;

/// Module for the HTTP handlers.
pub mod endpoints;

/// Module for the errors.
pub mod error;

/// Module for the catalog records.
pub mod models;

/// Module for the read requests.
pub mod queries;

/// Module for the catalog store and the mediator wiring.
pub mod services;

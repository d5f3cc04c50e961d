use crate::commands::{AddProductCommand, UpdateProductCommand};
use crate::error::{CatalogError, Result};
use crate::models::product::Product;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

pub type SharedCatalogService = Arc<Mutex<CatalogService>>;

/// The in-memory product collection.
///
/// Products are kept in insertion order. Every mutation is all-or-nothing: a failed
/// call leaves the collection untouched.
#[derive(Debug, Clone, Default)]
pub struct CatalogService {
    products: Vec<Product>,
}

impl CatalogService {
    pub fn new() -> CatalogService {
        CatalogService {
            products: Vec::new(),
        }
    }

    /// Wraps a new, empty catalog for sharing between request handlers.
    pub fn shared() -> SharedCatalogService {
        Arc::new(Mutex::new(CatalogService::new()))
    }

    pub fn create(&mut self, command: AddProductCommand) -> Result<Product> {
        let product = command.into_product(chrono::Utc::now())?;
        self.products.push(product.clone());
        Ok(product)
    }

    pub fn update(&mut self, command: UpdateProductCommand) -> Result<Product> {
        let index = self.position(&command.id).ok_or(CatalogError::NotFound)?;
        let product = &mut self.products[index];

        command.apply_to(product, chrono::Utc::now());
        Ok(product.clone())
    }

    /// Removes the product, keeping the order of the remaining ones.
    pub fn delete(&mut self, id: &str) -> Result<Product> {
        let index = self.position(id).ok_or(CatalogError::NotFound)?;
        Ok(self.products.remove(index))
    }

    pub fn get(&self, id: &str) -> Result<Product> {
        self.position(id)
            .map(|index| self.products[index].clone())
            .ok_or(CatalogError::NotFound)
    }

    pub fn get_all(&self) -> Vec<Product> {
        self.products.clone()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    // Ids that are not valid uuids can't belong to any product.
    fn position(&self, id: &str) -> Option<usize> {
        let id = Uuid::parse_str(id).ok()?;
        self.products.iter().position(|p| p.id == id)
    }
}

pub mod get_all_products;
pub mod get_product;

pub use get_all_products::*;
pub use get_product::*;

pub mod add_product;
pub mod delete_product;
pub mod update_product;

pub use add_product::*;
pub use delete_product::*;
pub use update_product::*;

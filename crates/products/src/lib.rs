//! Product catalog domain module.
//!
//! Pure business rules for products and categories. No IO, no storage.

pub mod category;
pub mod product;

pub use category::Category;
pub use product::{NewProduct, Product, ProductUpdate, StockStatus};

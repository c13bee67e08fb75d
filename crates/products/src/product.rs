use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use smartshelf_core::{CategoryId, DomainError, DomainResult, Entity, ProductId, Sku, VendorId};

/// Stock position relative to the reorder level.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::OutOfStock => "Out of Stock",
        }
    }
}

/// Catalog product.
///
/// Stock and reorder level are non-negative integers; SKU uniqueness within
/// the catalog is enforced by the backing store at insert time. Products are
/// mutated by stock transactions and edits, and hard-deleted only by admins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    sku: Sku,
    name: String,
    description: Option<String>,
    category_id: Option<CategoryId>,
    vendor_id: Option<VendorId>,
    price: f64,
    current_stock: i64,
    reorder_level: i64,
    image_url: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Fields for creating a product.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub sku: String,
    pub name: String,
    pub description: Option<String>,
    pub category_id: Option<CategoryId>,
    pub vendor_id: Option<VendorId>,
    pub price: f64,
    pub current_stock: i64,
    pub reorder_level: i64,
    pub image_url: Option<String>,
}

/// Editable fields; `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category_id: Option<CategoryId>,
    pub vendor_id: Option<VendorId>,
    pub price: Option<f64>,
    pub reorder_level: Option<i64>,
    pub image_url: Option<String>,
}

impl Product {
    pub fn create(id: ProductId, spec: NewProduct, at: DateTime<Utc>) -> DomainResult<Self> {
        let sku = Sku::new(&spec.sku)?;
        validate_name(&spec.name)?;
        validate_price(spec.price)?;
        validate_non_negative("current_stock", spec.current_stock)?;
        validate_non_negative("reorder_level", spec.reorder_level)?;

        Ok(Self {
            id,
            sku,
            name: spec.name.trim().to_string(),
            description: spec.description,
            category_id: spec.category_id,
            vendor_id: spec.vendor_id,
            price: spec.price,
            current_stock: spec.current_stock,
            reorder_level: spec.reorder_level,
            image_url: spec.image_url,
            created_at: at,
            updated_at: at,
        })
    }

    pub fn sku(&self) -> &Sku {
        &self.sku
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn category_id(&self) -> Option<CategoryId> {
        self.category_id
    }

    pub fn vendor_id(&self) -> Option<VendorId> {
        self.vendor_id
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn current_stock(&self) -> i64 {
        self.current_stock
    }

    pub fn reorder_level(&self) -> i64 {
        self.reorder_level
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Apply an edit; unspecified fields are left as-is.
    pub fn apply_update(&mut self, update: ProductUpdate, at: DateTime<Utc>) -> DomainResult<()> {
        if let Some(name) = update.name {
            validate_name(&name)?;
            self.name = name.trim().to_string();
        }
        if let Some(price) = update.price {
            validate_price(price)?;
            self.price = price;
        }
        if let Some(reorder_level) = update.reorder_level {
            validate_non_negative("reorder_level", reorder_level)?;
            self.reorder_level = reorder_level;
        }
        if update.description.is_some() {
            self.description = update.description;
        }
        if update.category_id.is_some() {
            self.category_id = update.category_id;
        }
        if update.vendor_id.is_some() {
            self.vendor_id = update.vendor_id;
        }
        if update.image_url.is_some() {
            self.image_url = update.image_url;
        }
        self.updated_at = at;
        Ok(())
    }

    /// Replace the stock level after a validated movement.
    pub fn set_stock(&mut self, new_stock: i64, at: DateTime<Utc>) -> DomainResult<()> {
        validate_non_negative("current_stock", new_stock)?;
        self.current_stock = new_stock;
        self.updated_at = at;
        Ok(())
    }

    pub fn stock_status(&self) -> StockStatus {
        if self.current_stock == 0 {
            StockStatus::OutOfStock
        } else if self.current_stock <= self.reorder_level {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    /// Above zero but at or below the reorder threshold.
    pub fn is_low_stock(&self) -> bool {
        self.stock_status() == StockStatus::LowStock
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

fn validate_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::validation("name cannot be empty"));
    }
    Ok(())
}

fn validate_price(price: f64) -> DomainResult<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(DomainError::validation("price must be a non-negative number"));
    }
    Ok(())
}

fn validate_non_negative(field: &str, value: i64) -> DomainResult<()> {
    if value < 0 {
        return Err(DomainError::validation(format!(
            "{field} must be non-negative"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> NewProduct {
        NewProduct {
            sku: "sku-001".to_string(),
            name: "Cardboard Box".to_string(),
            description: None,
            category_id: None,
            vendor_id: None,
            price: 2.5,
            current_stock: 40,
            reorder_level: 10,
            image_url: None,
        }
    }

    #[test]
    fn create_normalizes_sku_and_trims_name() {
        let product = Product::create(ProductId::new(), spec(), Utc::now()).unwrap();
        assert_eq!(product.sku().as_str(), "SKU-001");
        assert_eq!(product.name(), "Cardboard Box");
    }

    #[test]
    fn create_rejects_negative_stock_or_reorder_level() {
        let mut bad = spec();
        bad.current_stock = -1;
        assert!(Product::create(ProductId::new(), bad, Utc::now()).is_err());

        let mut bad = spec();
        bad.reorder_level = -5;
        assert!(Product::create(ProductId::new(), bad, Utc::now()).is_err());
    }

    #[test]
    fn create_rejects_nonsensical_price() {
        let mut bad = spec();
        bad.price = f64::NAN;
        assert!(Product::create(ProductId::new(), bad, Utc::now()).is_err());
    }

    #[test]
    fn stock_status_tiers() {
        let mut product = Product::create(ProductId::new(), spec(), Utc::now()).unwrap();
        assert_eq!(product.stock_status(), StockStatus::InStock);

        product.set_stock(10, Utc::now()).unwrap();
        assert_eq!(product.stock_status(), StockStatus::LowStock);
        assert!(product.is_low_stock());

        product.set_stock(0, Utc::now()).unwrap();
        assert_eq!(product.stock_status(), StockStatus::OutOfStock);
        assert!(!product.is_low_stock());
    }

    #[test]
    fn set_stock_rejects_negative_values() {
        let mut product = Product::create(ProductId::new(), spec(), Utc::now()).unwrap();
        let err = product.set_stock(-3, Utc::now()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(product.current_stock(), 40);
    }

    #[test]
    fn apply_update_only_touches_provided_fields() {
        let mut product = Product::create(ProductId::new(), spec(), Utc::now()).unwrap();
        let update = ProductUpdate {
            price: Some(3.0),
            ..ProductUpdate::default()
        };
        product.apply_update(update, Utc::now()).unwrap();
        assert_eq!(product.price(), 3.0);
        assert_eq!(product.name(), "Cardboard Box");
        assert_eq!(product.reorder_level(), 10);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: any accepted product has non-negative stock and
            /// reorder level, and its status matches the tier arithmetic.
            #[test]
            fn accepted_products_satisfy_stock_invariants(
                stock in 0i64..10_000,
                reorder in 0i64..10_000,
            ) {
                let mut s = spec();
                s.current_stock = stock;
                s.reorder_level = reorder;
                let product = Product::create(ProductId::new(), s, Utc::now()).unwrap();

                prop_assert!(product.current_stock() >= 0);
                prop_assert!(product.reorder_level() >= 0);

                let expected = if stock == 0 {
                    StockStatus::OutOfStock
                } else if stock <= reorder {
                    StockStatus::LowStock
                } else {
                    StockStatus::InStock
                };
                prop_assert_eq!(product.stock_status(), expected);
            }
        }
    }
}

//! Catalog management: products, categories, vendors, CSV import.

use chrono::Utc;

use smartshelf_auth::{Session, ensure_can_manage_catalog};
use smartshelf_audit::AuditAction;
use smartshelf_core::{CategoryId, DomainError, Entity, ProductId, VendorId};
use smartshelf_products::{Category, NewProduct, Product, ProductUpdate};
use smartshelf_reports::parse_csv;
use smartshelf_vendors::{NewVendor, Vendor};

use crate::error::{AppError, AppResult};
use crate::services::Services;

impl Services {
    pub fn create_product(&self, session: &Session, spec: NewProduct) -> AppResult<Product> {
        ensure_can_manage_catalog(session, false)?;
        let product = Product::create(ProductId::new(), spec, Utc::now())?;
        let product = self.store.insert_product(product)?;
        self.audit(
            session,
            AuditAction::Create,
            "Product",
            product.id(),
            format!("Created product {} ({})", product.name(), product.sku()),
        );
        Ok(product)
    }

    pub fn update_product(
        &self,
        session: &Session,
        id: ProductId,
        update: ProductUpdate,
    ) -> AppResult<Product> {
        ensure_can_manage_catalog(session, false)?;
        let product = self.store.update_product(id, update, Utc::now())?;
        self.audit(
            session,
            AuditAction::Update,
            "Product",
            id,
            format!("Updated product {}", product.name()),
        );
        Ok(product)
    }

    /// Admin only; hard delete.
    pub fn delete_product(&self, session: &Session, id: ProductId) -> AppResult<()> {
        ensure_can_manage_catalog(session, true)?;
        self.store.delete_product(id)?;
        self.audit(session, AuditAction::Delete, "Product", id, "Deleted product");
        Ok(())
    }

    pub fn create_category(&self, session: &Session, name: &str) -> AppResult<Category> {
        ensure_can_manage_catalog(session, false)?;
        let category = Category::create(CategoryId::new(), name, Utc::now())?;
        let category = self.store.insert_category(category)?;
        self.audit(
            session,
            AuditAction::Create,
            "Category",
            category.id(),
            format!("Created category {}", category.name()),
        );
        Ok(category)
    }

    pub fn create_vendor(&self, session: &Session, spec: NewVendor) -> AppResult<Vendor> {
        ensure_can_manage_catalog(session, false)?;
        let vendor = Vendor::create(VendorId::new(), spec, Utc::now())?;
        let vendor = self.store.insert_vendor(vendor)?;
        self.audit(
            session,
            AuditAction::Create,
            "Vendor",
            vendor.id(),
            format!("Registered vendor {}", vendor.name()),
        );
        Ok(vendor)
    }

    /// Bulk-create products from CSV text.
    ///
    /// Expected columns (by header, case-insensitive): `sku`, `name`,
    /// `price`, `current_stock`, `reorder_level`; `description` is optional.
    /// The import is all-or-nothing up to the first bad row.
    pub fn import_products_csv(&self, session: &Session, csv_text: &str) -> AppResult<Vec<Product>> {
        ensure_can_manage_catalog(session, false)?;

        let (headers, rows) = parse_csv(csv_text)
            .map_err(|e| AppError::Domain(DomainError::validation(e.to_string())))?;
        let col = |name: &str| -> AppResult<usize> {
            headers
                .iter()
                .position(|h| h.eq_ignore_ascii_case(name))
                .ok_or_else(|| DomainError::validation(format!("missing column {name}")).into())
        };
        let sku = col("sku")?;
        let name = col("name")?;
        let price = col("price")?;
        let stock = col("current_stock")?;
        let reorder = col("reorder_level")?;
        let description = headers.iter().position(|h| h.eq_ignore_ascii_case("description"));

        let mut created = Vec::with_capacity(rows.len());
        for (line, row) in rows.iter().enumerate() {
            let parse_int = |field: &str, value: &str| -> AppResult<i64> {
                value.trim().parse().map_err(|_| {
                    DomainError::validation(format!("row {}: bad {field} {value:?}", line + 2))
                        .into()
                })
            };
            let parsed_price: f64 = row[price].trim().parse().map_err(|_| {
                AppError::from(DomainError::validation(format!(
                    "row {}: bad price {:?}",
                    line + 2,
                    row[price]
                )))
            })?;

            created.push(self.create_product(
                session,
                NewProduct {
                    sku: row[sku].clone(),
                    name: row[name].clone(),
                    description: description.map(|i| row[i].clone()).filter(|d| !d.is_empty()),
                    category_id: None,
                    vendor_id: None,
                    price: parsed_price,
                    current_stock: parse_int("current_stock", &row[stock])?,
                    reorder_level: parse_int("reorder_level", &row[reorder])?,
                    image_url: None,
                },
            )?);
        }
        Ok(created)
    }
}

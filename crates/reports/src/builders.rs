//! Prebuilt report tables for the dashboard's export buttons.

use smartshelf_forecast::{NO_USAGE_SENTINEL, ProductForecast};
use smartshelf_store::{ProductRow, TransactionRow};
use smartshelf_vendors::Vendor;

use crate::table::ReportTable;

fn money(amount: f64) -> String {
    format!("{amount:.2}")
}

pub fn inventory_report(rows: &[ProductRow]) -> ReportTable {
    let mut table = ReportTable::new(
        "Inventory Report",
        vec![
            "SKU",
            "Name",
            "Category",
            "Vendor",
            "Price",
            "Stock",
            "Reorder Level",
            "Status",
        ],
    );
    for row in rows {
        let p = &row.product;
        table.push_row(vec![
            p.sku().as_str().to_string(),
            p.name().to_string(),
            row.category_name.clone().unwrap_or_default(),
            row.vendor_name.clone().unwrap_or_default(),
            money(p.price()),
            p.current_stock().to_string(),
            p.reorder_level().to_string(),
            p.stock_status().label().to_string(),
        ]);
    }
    table
}

pub fn transactions_report(rows: &[TransactionRow]) -> ReportTable {
    let mut table = ReportTable::new(
        "Transactions Report",
        vec![
            "Date", "Type", "Product", "SKU", "Quantity", "Handler", "Reference", "Notes",
        ],
    );
    for row in rows {
        let t = &row.transaction;
        table.push_row(vec![
            t.created_at().format("%Y-%m-%d").to_string(),
            t.kind().label().to_string(),
            row.product_name.clone().unwrap_or_default(),
            row.product_sku.clone().unwrap_or_default(),
            t.quantity().to_string(),
            t.handler_name().to_string(),
            t.reference().unwrap_or_default().to_string(),
            t.notes().unwrap_or_default().to_string(),
        ]);
    }
    table
}

pub fn vendors_report(vendors: &[Vendor]) -> ReportTable {
    let mut table = ReportTable::new(
        "Vendor Report",
        vec!["Name", "Email", "Phone", "Address", "Performance"],
    );
    for v in vendors {
        table.push_row(vec![
            v.name().to_string(),
            v.email().to_string(),
            v.phone().unwrap_or_default().to_string(),
            v.address().unwrap_or_default().to_string(),
            format!("{}%", v.performance()),
        ]);
    }
    table
}

pub fn forecast_report(forecasts: &[ProductForecast]) -> ReportTable {
    let mut table = ReportTable::new(
        "Demand Forecast Report",
        vec![
            "SKU",
            "Product",
            "Current Stock",
            "Avg Daily Usage",
            "Days Until Stockout",
            "Action",
            "Confidence",
        ],
    );
    for f in forecasts {
        // The sentinel means "no measured usage", which reads better as N/A.
        let days = if f.days_until_stockout == NO_USAGE_SENTINEL {
            "N/A".to_string()
        } else {
            f.days_until_stockout.to_string()
        };
        table.push_row(vec![
            f.sku.clone(),
            f.name.clone(),
            f.current_stock.to_string(),
            format!("{:.1}", f.avg_daily_usage),
            days,
            f.action.label().to_string(),
            format!("{}%", f.confidence),
        ]);
    }
    table
}

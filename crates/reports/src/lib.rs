//! `smartshelf-reports`
//!
//! **Responsibility:** turning dashboard data into downloadable artifacts.
//!
//! All exports go through one tabular model ([`ReportTable`]); the format
//! writers (CSV, spreadsheet text, PDF layout) know nothing about the domain.

pub mod builders;
pub mod csv_format;
pub mod error;
pub mod pdf;
pub mod spreadsheet;
pub mod table;

pub use builders::{forecast_report, inventory_report, transactions_report, vendors_report};
pub use csv_format::{parse_csv, write_csv};
pub use error::ReportError;
pub use pdf::{PdfLayout, PdfPage, PdfText, layout_pdf};
pub use spreadsheet::write_spreadsheet;
pub use table::ReportTable;

//! Report tables for the export buttons.
//!
//! The returned [`ReportTable`] feeds any of the format writers in
//! `smartshelf-reports` (`write_csv`, `write_spreadsheet`, `layout_pdf`).

use smartshelf_auth::{Session, ensure_can_manage_catalog};
use smartshelf_reports::{
    ReportTable, forecast_report, inventory_report, transactions_report, vendors_report,
};
use smartshelf_sync::RowSource;

use crate::error::AppResult;
use crate::services::Services;

impl Services {
    pub fn inventory_report(&self, session: &Session) -> AppResult<ReportTable> {
        let rows = self.store.products_view(session.scope()).fetch_all()?;
        Ok(inventory_report(&rows))
    }

    pub fn transactions_report(&self, session: &Session) -> AppResult<ReportTable> {
        let rows = self.store.transactions_view(session.scope()).fetch_all()?;
        Ok(transactions_report(&rows))
    }

    /// Vendor directory is internal data.
    pub fn vendors_report(&self, session: &Session) -> AppResult<ReportTable> {
        ensure_can_manage_catalog(session, false)?;
        let vendors = self.store.list_vendors()?;
        Ok(vendors_report(&vendors))
    }

    pub fn forecast_report(&self, session: &Session) -> AppResult<ReportTable> {
        let forecasts = self.demand_forecast(session)?;
        Ok(forecast_report(&forecasts))
    }
}

//! Alert panel operations.

use smartshelf_alerts::Alert;
use smartshelf_auth::Session;
use smartshelf_core::{AlertId, DomainError};
use smartshelf_sync::RowSource;

use crate::error::AppResult;
use crate::services::Services;

impl Services {
    /// Alerts visible to the caller, newest first, capped at 50.
    pub fn alerts(&self, session: &Session) -> AppResult<Vec<Alert>> {
        Ok(self.store.alerts_view(session.user_id).fetch_all()?)
    }

    pub fn mark_alert_read(&self, session: &Session, id: AlertId) -> AppResult<Alert> {
        self.ensure_alert_visible(session, id)?;
        Ok(self.store.mark_alert_read(id)?)
    }

    /// Dismissal deletes the alert; it will not reappear.
    pub fn dismiss_alert(&self, session: &Session, id: AlertId) -> AppResult<()> {
        self.ensure_alert_visible(session, id)?;
        Ok(self.store.delete_alert(id)?)
    }

    fn ensure_alert_visible(&self, session: &Session, id: AlertId) -> AppResult<()> {
        let alert = self.store.get_alert(id)?.ok_or(DomainError::NotFound)?;
        if !alert.visible_to(session.user_id) {
            return Err(DomainError::Unauthorized.into());
        }
        Ok(())
    }
}

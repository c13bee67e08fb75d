use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use smartshelf_core::{AuditLogId, Entity, UserId};

/// Action verb recorded in the audit trail.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditAction {
    Create,
    Update,
    Delete,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::Create => "CREATE",
            AuditAction::Update => "UPDATE",
            AuditAction::Delete => "DELETE",
        }
    }
}

impl core::fmt::Display for AuditAction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable record of who did what.
///
/// Never mutated or deleted through the application; the store only appends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditLog {
    id: AuditLogId,
    user_id: Option<UserId>,
    user_name: String,
    action: AuditAction,
    entity_type: String,
    entity_id: String,
    details: String,
    created_at: DateTime<Utc>,
}

impl AuditLog {
    pub fn record(
        id: AuditLogId,
        user_id: Option<UserId>,
        user_name: impl Into<String>,
        action: AuditAction,
        entity_type: impl Into<String>,
        entity_id: impl Into<String>,
        details: impl Into<String>,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            user_name: user_name.into(),
            action,
            entity_type: entity_type.into(),
            entity_id: entity_id.into(),
            details: details.into(),
            created_at: at,
        }
    }

    pub fn user_id(&self) -> Option<UserId> {
        self.user_id
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn action(&self) -> AuditAction {
        self.action
    }

    pub fn entity_type(&self) -> &str {
        &self.entity_type
    }

    pub fn entity_id(&self) -> &str {
        &self.entity_id
    }

    pub fn details(&self) -> &str {
        &self.details
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Entity for AuditLog {
    type Id = AuditLogId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

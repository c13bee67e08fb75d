use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use smartshelf_core::{CategoryId, DomainError, DomainResult, Entity};

/// Product category reference entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    name: String,
    created_at: DateTime<Utc>,
}

impl Category {
    pub fn create(id: CategoryId, name: impl AsRef<str>, at: DateTime<Utc>) -> DomainResult<Self> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(DomainError::validation("category name cannot be empty"));
        }
        Ok(Self {
            id,
            name: name.to_string(),
            created_at: at,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

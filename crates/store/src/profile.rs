use serde::{Deserialize, Serialize};

use smartshelf_auth::Role;
use smartshelf_core::{UserId, VendorId};

/// A registered user account.
///
/// Vendor-role profiles carry the vendor they act for; targeted alert fan-out
/// resolves recipients through this binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: UserId,
    pub full_name: String,
    pub email: String,
    pub role: Role,
    pub vendor_id: Option<VendorId>,
}

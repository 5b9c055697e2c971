//! Company profile value object.
//!
//! Attached to a user after onboarding, snapshotted onto transactions at
//! checkout, and carried inside the session token.

use serde::{Deserialize, Serialize};

/// Business details a member provides about their company.
///
/// All fields are free text; the portal does not validate tax numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanyProfile {
    pub company_name: String,
    pub company_address: String,
    #[serde(rename = "companyNPWP")]
    pub company_npwp: String,
    pub company_phone: String,
    pub company_email: String,
}

impl CompanyProfile {
    /// True when no field carries any content.
    pub fn is_blank(&self) -> bool {
        [
            &self.company_name,
            &self.company_address,
            &self.company_npwp,
            &self.company_phone,
            &self.company_email,
        ]
        .iter()
        .all(|f| f.trim().is_empty())
    }
}

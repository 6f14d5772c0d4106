//! Trading partners (customers and vendors).

use ledgerbook_shared::types::money::amount_text;
use serde::{Deserialize, Serialize};

/// Which side of the business a partner trades on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartnerRole {
    /// Buys from the business (sales invoices, receipts).
    Customer,
    /// Sells to the business (purchase invoices, payments).
    Vendor,
}

/// A partner record as returned by the backend.
///
/// Only `opening_balance` matters to the statement engine; the rest is
/// carried for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    /// Backend identifier.
    #[serde(rename = "_id", default)]
    pub id: String,
    /// First name.
    #[serde(default)]
    pub first_name: String,
    /// Last name.
    #[serde(default)]
    pub last_name: String,
    /// Postal address.
    #[serde(default)]
    pub address: String,
    /// Contact number.
    #[serde(default)]
    pub contact_no: String,
    /// Email address.
    #[serde(default)]
    pub email: Option<String>,
    /// Status as entered on the partner form ("Active", "Inactive").
    #[serde(default)]
    pub status: String,
    /// Customer or vendor.
    #[serde(rename = "type", default)]
    pub role: Option<PartnerRole>,
    /// Signed opening balance as wire text. Positive means the partner owes
    /// the business.
    #[serde(with = "amount_text")]
    pub opening_balance: String,
}

impl Partner {
    /// Returns "first last", trimmed.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Returns true if the partner can be picked on new documents.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status.eq_ignore_ascii_case("active")
    }
}

//! Invoice data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use super::numbering::DocumentKind;
use crate::partner::{Partner, PartnerRole};

/// Kind of invoice.
///
/// Values the engine does not know deserialize as [`InvoiceType::Other`]
/// so summaries can skip them instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceType {
    /// Sale to a customer.
    Sales,
    /// Purchase from a vendor.
    Purchase,
    /// Anything else.
    #[serde(other)]
    Other,
}

impl InvoiceType {
    /// Partner role an invoice of this type is raised against.
    #[must_use]
    pub const fn partner_role(self) -> Option<PartnerRole> {
        match self {
            Self::Sales => Some(PartnerRole::Customer),
            Self::Purchase => Some(PartnerRole::Vendor),
            Self::Other => None,
        }
    }

    /// Document kind used for numbering.
    #[must_use]
    pub const fn document_kind(self) -> Option<DocumentKind> {
        match self {
            Self::Sales => Some(DocumentKind::SalesInvoice),
            Self::Purchase => Some(DocumentKind::PurchaseInvoice),
            Self::Other => None,
        }
    }
}

/// A product that can be invoiced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Backend identifier.
    #[serde(rename = "_id", default)]
    pub id: String,
    /// Product name.
    pub name: String,
    /// Unit rate.
    pub rate: Decimal,
    /// Sales tax percentage.
    #[serde(default)]
    pub sales_tax: Decimal,
    /// Whether the product is exempt from sales tax.
    #[serde(default, deserialize_with = "yes_no")]
    pub tax_exempted: bool,
    /// Status ("Active", "Inactive").
    #[serde(default)]
    pub status: String,
}

impl Product {
    /// Returns true if the product can be put on new invoices.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status.eq_ignore_ascii_case("active")
    }

    /// Sales tax percentage that applies, zero when exempt.
    #[must_use]
    pub fn effective_tax_rate(&self) -> Decimal {
        if self.tax_exempted {
            Decimal::ZERO
        } else {
            self.sales_tax
        }
    }
}

/// Accepts `"Yes"`/`"No"` as entered on the product form, or a JSON bool.
fn yes_no<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(flag) => flag,
        Flag::Text(text) => text.trim().eq_ignore_ascii_case("yes"),
    })
}

/// One invoice line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItem {
    /// Product name at the time of invoicing.
    pub product_name: String,
    /// Quantity.
    pub quantity: Decimal,
    /// Unit rate.
    pub rate: Decimal,
    /// Quantity times rate.
    pub value_of_supplies: Decimal,
    /// Sales tax on the value of supplies.
    pub sales_tax: Decimal,
    /// Value of supplies plus sales tax.
    pub net_amount: Decimal,
}

/// An invoice as stored by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// Document number (`SI-0001`, `PI-0001`).
    #[serde(default)]
    pub invoice_no: String,
    /// Sales or purchase.
    #[serde(rename = "type")]
    pub invoice_type: InvoiceType,
    /// Customer or vendor the invoice is raised against.
    #[serde(default)]
    pub partner_id: String,
    /// Invoice date.
    pub invoice_date: NaiveDate,
    /// Payment due date.
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    /// Lines.
    #[serde(default)]
    pub invoice_items: Vec<InvoiceItem>,
    /// Sum of line net amounts.
    pub invoice_total: Decimal,
}

/// Invoice list element as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceWithPartner {
    /// The invoice.
    pub invoice: Invoice,
    /// The partner, when the backend joined it.
    #[serde(default)]
    pub partner: Option<Partner>,
}

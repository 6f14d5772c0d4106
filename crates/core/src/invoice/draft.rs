//! Invoice line valuation and drafting.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use super::error::InvoiceError;
use super::numbering::due_date;
use super::types::{Invoice, InvoiceItem, InvoiceType, Product};

impl InvoiceItem {
    /// Values `quantity` units of a product.
    ///
    /// `value_of_supplies = quantity * rate`,
    /// `sales_tax = value_of_supplies * tax% / 100` (zero when exempt),
    /// `net_amount = value_of_supplies + sales_tax`.
    pub fn for_product(product: &Product, quantity: Decimal) -> Result<Self, InvoiceError> {
        if quantity <= Decimal::ZERO {
            return Err(InvoiceError::InvalidQuantity(quantity));
        }
        if !product.is_active() {
            return Err(InvoiceError::ProductInactive(product.name.clone()));
        }

        let overflow = || InvoiceError::Overflow(product.name.clone());
        let value_of_supplies = quantity.checked_mul(product.rate).ok_or_else(overflow)?;
        let sales_tax = value_of_supplies
            .checked_mul(product.effective_tax_rate())
            .and_then(|tax| tax.checked_div(Decimal::ONE_HUNDRED))
            .ok_or_else(overflow)?;
        let net_amount = value_of_supplies
            .checked_add(sales_tax)
            .ok_or_else(overflow)?;

        Ok(Self {
            product_name: product.name.clone(),
            quantity,
            rate: product.rate,
            value_of_supplies,
            sales_tax,
            net_amount,
        })
    }
}

/// Sum of line net amounts.
///
/// # Errors
///
/// Returns [`InvoiceError::Overflow`] if the sum leaves the `Decimal` range.
pub fn invoice_total(items: &[InvoiceItem]) -> Result<Decimal, InvoiceError> {
    items.iter().try_fold(Decimal::ZERO, |total, item| {
        total
            .checked_add(item.net_amount)
            .ok_or_else(|| InvoiceError::Overflow(item.product_name.clone()))
    })
}

/// An invoice being filled in before it is submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceDraft {
    invoice_type: InvoiceType,
    partner_id: String,
    invoice_date: NaiveDate,
    due_date: NaiveDate,
    items: Vec<InvoiceItem>,
}

impl InvoiceDraft {
    /// Starts a draft dated `invoice_date`, due `payment_terms_days` later.
    pub fn new(
        invoice_type: InvoiceType,
        partner_id: impl Into<String>,
        invoice_date: NaiveDate,
        payment_terms_days: u32,
    ) -> Result<Self, InvoiceError> {
        if invoice_type == InvoiceType::Other {
            return Err(InvoiceError::UnsupportedType);
        }

        Ok(Self {
            invoice_type,
            partner_id: partner_id.into(),
            invoice_date,
            due_date: due_date(invoice_date, payment_terms_days)?,
            items: Vec::new(),
        })
    }

    /// Adds a line for `quantity` units of `product`.
    pub fn add_item(
        &mut self,
        product: &Product,
        quantity: Decimal,
    ) -> Result<&InvoiceItem, InvoiceError> {
        let item = InvoiceItem::for_product(product, quantity)?;
        let index = self.items.len();
        self.items.push(item);
        Ok(&self.items[index])
    }

    /// Removes the line at `index`, returning it if it existed.
    pub fn remove_item(&mut self, index: usize) -> Option<InvoiceItem> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// Lines added so far.
    #[must_use]
    pub fn items(&self) -> &[InvoiceItem] {
        &self.items
    }

    /// Invoice type.
    #[must_use]
    pub const fn invoice_type(&self) -> InvoiceType {
        self.invoice_type
    }

    /// Due date.
    #[must_use]
    pub const fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    /// Current total, recomputed from the lines.
    ///
    /// # Errors
    ///
    /// Returns [`InvoiceError::Overflow`] if the lines sum past the `Decimal`
    /// range.
    pub fn total(&self) -> Result<Decimal, InvoiceError> {
        invoice_total(&self.items)
    }

    /// Turns the draft into an invoice numbered `invoice_no`.
    pub fn finalize(self, invoice_no: impl Into<String>) -> Result<Invoice, InvoiceError> {
        if self.items.is_empty() {
            return Err(InvoiceError::NoItems);
        }

        let invoice_total = self.total()?;
        let invoice_no = invoice_no.into();
        debug!(
            invoice_no = %invoice_no,
            items = self.items.len(),
            total = %invoice_total,
            "Finalized invoice draft"
        );

        Ok(Invoice {
            invoice_no,
            invoice_type: self.invoice_type,
            partner_id: self.partner_id,
            invoice_date: self.invoice_date,
            due_date: Some(self.due_date),
            invoice_items: self.items,
            invoice_total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn product(name: &str, rate: Decimal, tax: Decimal) -> Product {
        Product {
            id: String::new(),
            name: name.to_string(),
            rate,
            sales_tax: tax,
            tax_exempted: false,
            status: "Active".to_string(),
        }
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_line_item_valuation() {
        let item = InvoiceItem::for_product(&product("Widget", dec!(10.00), dec!(17)), dec!(3))
            .unwrap();

        assert_eq!(item.value_of_supplies, dec!(30.00));
        assert_eq!(item.sales_tax, dec!(5.10));
        assert_eq!(item.net_amount, dec!(35.10));
    }

    #[test]
    fn test_tax_exempt_product_has_no_tax() {
        let mut exempt = product("Advice", dec!(200), dec!(16));
        exempt.tax_exempted = true;

        let item = InvoiceItem::for_product(&exempt, dec!(2)).unwrap();

        assert_eq!(item.sales_tax, Decimal::ZERO);
        assert_eq!(item.net_amount, dec!(400));
    }

    #[test]
    fn test_line_item_rejects_bad_input() {
        let widget = product("Widget", dec!(1), dec!(0));
        assert!(matches!(
            InvoiceItem::for_product(&widget, Decimal::ZERO),
            Err(InvoiceError::InvalidQuantity(_))
        ));

        let mut retired = widget;
        retired.status = "Inactive".to_string();
        assert!(matches!(
            InvoiceItem::for_product(&retired, dec!(1)),
            Err(InvoiceError::ProductInactive(_))
        ));
    }

    #[test]
    fn test_line_item_overflow_is_an_error() {
        let bulk = product("Bulk", Decimal::MAX, dec!(0));

        assert!(matches!(
            InvoiceItem::for_product(&bulk, dec!(2)),
            Err(InvoiceError::Overflow(name)) if name == "Bulk"
        ));

        let taxed = product("Taxed", Decimal::MAX, dec!(17));
        assert!(matches!(
            InvoiceItem::for_product(&taxed, dec!(1)),
            Err(InvoiceError::Overflow(_))
        ));
    }

    #[test]
    fn test_overflowing_total_blocks_finalize() {
        let mut draft =
            InvoiceDraft::new(InvoiceType::Sales, "p-9", date("2024-03-01"), 30).unwrap();
        let bulk = product("Bulk", Decimal::MAX, dec!(0));
        draft.add_item(&bulk, dec!(1)).unwrap();
        let added = draft.add_item(&bulk, dec!(1)).unwrap();
        assert_eq!(added.net_amount, Decimal::MAX);

        assert!(matches!(draft.total(), Err(InvoiceError::Overflow(_))));
        assert!(matches!(
            draft.finalize("SI-0001"),
            Err(InvoiceError::Overflow(_))
        ));
    }

    #[test]
    fn test_draft_add_remove_and_finalize() {
        let mut draft =
            InvoiceDraft::new(InvoiceType::Sales, "p-7", date("2024-03-01"), 30).unwrap();
        assert_eq!(draft.due_date(), date("2024-03-31"));

        draft
            .add_item(&product("Widget", dec!(10), dec!(17)), dec!(3))
            .unwrap();
        draft
            .add_item(&product("Gadget", dec!(5), dec!(0)), dec!(4))
            .unwrap();
        assert_eq!(draft.total().unwrap(), dec!(55.10));

        let removed = draft.remove_item(0).unwrap();
        assert_eq!(removed.product_name, "Widget");
        assert_eq!(draft.total().unwrap(), dec!(20));
        assert!(draft.remove_item(5).is_none());

        let invoice = draft.finalize("SI-0003").unwrap();
        assert_eq!(invoice.invoice_no, "SI-0003");
        assert_eq!(invoice.invoice_total, dec!(20));
        assert_eq!(invoice.invoice_items.len(), 1);
        assert_eq!(invoice.due_date, Some(date("2024-03-31")));
    }

    #[test]
    fn test_empty_draft_cannot_be_finalized() {
        let draft =
            InvoiceDraft::new(InvoiceType::Purchase, "v-1", date("2024-03-01"), 0).unwrap();
        assert!(matches!(draft.finalize("PI-0001"), Err(InvoiceError::NoItems)));
    }

    #[test]
    fn test_draft_rejects_unknown_type() {
        assert!(matches!(
            InvoiceDraft::new(InvoiceType::Other, "x", date("2024-03-01"), 0),
            Err(InvoiceError::UnsupportedType)
        ));
    }
}

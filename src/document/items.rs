use crate::core::registry::{
    INVOICE_ITEM_GROUP_SCHEMA, INVOICE_ITEM_SCHEMA, ITEM_DETAIL_INFO_SCHEMA, ITEM_ENTRY_SCHEMA,
    VAT_SCHEMA,
};
use crate::core::{Fields, Node, NodeKind, ValidationError, Value, validate};

use super::put;

const VAT_ORDER: &[&str] = &["SumBeforeVAT", "VATRate", "VATSum", "Currency", "SumAfterVAT"];
const ITEM_ENTRY_ORDER: &[&str] = &["Description", "ItemDetailInfo", "ItemSum", "VAT", "ItemTotal"];

node_entity!(
    /// Tax block of an item or of the invoice totals. Renders as `<VAT>`.
    Vat
);

node_entity!(
    /// Unit, quantity and price of an item.
    ItemDetailInfo
);

node_entity!(
    /// One invoice line.
    ItemEntry
);

node_entity!(
    /// Sequence of invoice lines, rendered as sibling `<ItemEntry>` elements.
    InvoiceItemGroup
);

node_entity!(
    /// Container of one or more [`InvoiceItemGroup`]s.
    InvoiceItem
);

/// Builder for [`Vat`].
///
/// Rate has at most 2 decimal places, sums at most 4.
#[derive(Debug, Clone)]
pub struct VatBuilder {
    fields: Fields,
}

impl VatBuilder {
    pub fn new(vat_rate: impl Into<Value>, vat_sum: impl Into<Value>) -> Self {
        let mut fields = Fields::new();
        put(&mut fields, "VATRate", vat_rate);
        put(&mut fields, "VATSum", vat_sum);
        Self { fields }
    }

    pub fn sum_before_vat(mut self, sum: impl Into<Value>) -> Self {
        put(&mut self.fields, "SumBeforeVAT", sum);
        self
    }

    pub fn sum_after_vat(mut self, sum: impl Into<Value>) -> Self {
        put(&mut self.fields, "SumAfterVAT", sum);
        self
    }

    pub fn currency(mut self, currency: impl Into<Value>) -> Self {
        put(&mut self.fields, "Currency", currency);
        self
    }

    /// `TAX` or `NOTTAX`, written as the `vatId` attribute.
    pub fn vat_id(mut self, vat_id: impl Into<Value>) -> Self {
        put(&mut self.fields, "vatId", vat_id);
        self
    }

    pub fn build(self) -> Result<Vat, ValidationError> {
        let mut data = validate(&VAT_SCHEMA, self.fields)?;
        Ok(Vat::from_node(
            Node::new(NodeKind::Vat)
                .attribute_from(&mut data, "vatId", "vatId")
                .elements_from(&mut data, VAT_ORDER),
        ))
    }
}

/// Builder for [`ItemDetailInfo`]. Every field is optional.
#[derive(Debug, Clone, Default)]
pub struct ItemDetailInfoBuilder {
    fields: Fields,
}

impl ItemDetailInfoBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn item_unit(mut self, unit: impl Into<Value>) -> Self {
        put(&mut self.fields, "ItemUnit", unit);
        self
    }

    pub fn item_amount(mut self, amount: impl Into<Value>) -> Self {
        put(&mut self.fields, "ItemAmount", amount);
        self
    }

    pub fn item_price(mut self, price: impl Into<Value>) -> Self {
        put(&mut self.fields, "ItemPrice", price);
        self
    }

    pub fn build(self) -> Result<ItemDetailInfo, ValidationError> {
        let mut data = validate(&ITEM_DETAIL_INFO_SCHEMA, self.fields)?;
        Ok(ItemDetailInfo::from_node(
            Node::new(NodeKind::ItemDetailInfo)
                .elements_from(&mut data, &["ItemUnit", "ItemAmount", "ItemPrice"]),
        ))
    }
}

/// Builder for [`ItemEntry`].
#[derive(Debug, Clone)]
pub struct ItemEntryBuilder {
    fields: Fields,
}

impl ItemEntryBuilder {
    pub fn new(description: impl Into<Value>) -> Self {
        let mut fields = Fields::new();
        put(&mut fields, "Description", description);
        Self { fields }
    }

    pub fn item_detail_info(mut self, info: impl Into<Value>) -> Self {
        put(&mut self.fields, "ItemDetailInfo", info);
        self
    }

    pub fn item_sum(mut self, sum: impl Into<Value>) -> Self {
        put(&mut self.fields, "ItemSum", sum);
        self
    }

    pub fn vat(mut self, vat: impl Into<Value>) -> Self {
        put(&mut self.fields, "VAT", vat);
        self
    }

    pub fn item_total(mut self, total: impl Into<Value>) -> Self {
        put(&mut self.fields, "ItemTotal", total);
        self
    }

    pub fn build(self) -> Result<ItemEntry, ValidationError> {
        let mut data = validate(&ITEM_ENTRY_SCHEMA, self.fields)?;
        Ok(ItemEntry::from_node(
            Node::new(NodeKind::ItemEntry).elements_from(&mut data, ITEM_ENTRY_ORDER),
        ))
    }
}

impl InvoiceItemGroup {
    /// `entries` must be a non-empty sequence of [`ItemEntry`] values.
    pub fn new(entries: impl Into<Value>) -> Result<Self, ValidationError> {
        let mut fields = Fields::new();
        put(&mut fields, "ItemEntry", entries);

        let mut data = validate(&INVOICE_ITEM_GROUP_SCHEMA, fields)?;
        Ok(Self::from_node(
            Node::new(NodeKind::InvoiceItemGroup).elements_from(&mut data, &["ItemEntry"]),
        ))
    }
}

impl InvoiceItem {
    /// `groups` must be a non-empty sequence of [`InvoiceItemGroup`] values.
    pub fn new(groups: impl Into<Value>) -> Result<Self, ValidationError> {
        let mut fields = Fields::new();
        put(&mut fields, "InvoiceItemGroup", groups);

        let mut data = validate(&INVOICE_ITEM_SCHEMA, fields)?;
        Ok(Self::from_node(
            Node::new(NodeKind::InvoiceItem).elements_from(&mut data, &["InvoiceItemGroup"]),
        ))
    }
}

use crate::core::registry::{
    INVOICE_INFORMATION_SCHEMA, INVOICE_SCHEMA, INVOICE_SUM_GROUP_SCHEMA, INVOICE_TYPE_SCHEMA,
    PAYMENT,
};
use crate::core::{Fields, Node, NodeKind, ValidationError, Value, validate};

use super::put;

const INFORMATION_ORDER: &[&str] = &[
    "Type",
    "DocumentName",
    "InvoiceNumber",
    "PaymentReferenceNumber",
    "InvoiceDate",
    "DueDate",
    "FineRatePerDay",
];
const SUM_GROUP_ORDER: &[&str] = &["InvoiceSum", "VAT", "TotalSum", "TotalToPay", "Currency"];
const PAYMENT_ORDER: &[&str] = &[
    "Currency",
    "PaymentDescription",
    "Payable",
    "PayDueDate",
    "PaymentTotalSum",
    "PayerName",
    "PaymentID",
    "PayToAccount",
    "PayToName",
];
const INVOICE_ATTRIBUTES: &[&str] = &["invoiceId", "regNumber", "sellerRegnumber", "serviceId"];
const INVOICE_ORDER: &[&str] = &[
    "InvoiceParties",
    "InvoiceInformation",
    "InvoiceSumGroup",
    "InvoiceItemGroup",
    "PaymentInfo",
];

node_entity!(
    /// Debit or credit marker. Renders as `<Type type="DEB">`.
    InvoiceType
);

node_entity!(
    /// Invoice number, type, document name and dates.
    InvoiceInformation
);

node_entity!(
    /// Invoice totals.
    InvoiceSumGroup
);

node_entity!(
    /// Payment order data for the payer's bank.
    PaymentInfo
);

node_entity!(
    /// One complete invoice: parties, information, items, sums and payment.
    Invoice
);

impl InvoiceType {
    /// `invoice_type` is `DEB` or `CRE`.
    pub fn new(invoice_type: impl Into<Value>) -> Result<Self, ValidationError> {
        InvoiceTypeBuilder::new(invoice_type).build()
    }
}

/// Builder for [`InvoiceType`].
#[derive(Debug, Clone)]
pub struct InvoiceTypeBuilder {
    fields: Fields,
}

impl InvoiceTypeBuilder {
    pub fn new(invoice_type: impl Into<Value>) -> Self {
        let mut fields = Fields::new();
        put(&mut fields, "Type", invoice_type);
        Self { fields }
    }

    /// Number of the invoice a credit invoice refers to.
    pub fn source_invoice(mut self, number: impl Into<Value>) -> Self {
        put(&mut self.fields, "SourceInvoice", number);
        self
    }

    pub fn build(self) -> Result<InvoiceType, ValidationError> {
        let mut data = validate(&INVOICE_TYPE_SCHEMA, self.fields)?;
        Ok(InvoiceType::from_node(
            Node::new(NodeKind::InvoiceType)
                .attribute_from(&mut data, "Type", "type")
                .elements_from(&mut data, &["SourceInvoice"]),
        ))
    }
}

/// Builder for [`InvoiceInformation`].
#[derive(Debug, Clone)]
pub struct InvoiceInformationBuilder {
    fields: Fields,
}

impl InvoiceInformationBuilder {
    pub fn new(
        invoice_type: impl Into<Value>,
        invoice_number: impl Into<Value>,
        invoice_date: impl Into<Value>,
        document_name: impl Into<Value>,
    ) -> Self {
        let mut fields = Fields::new();
        put(&mut fields, "Type", invoice_type);
        put(&mut fields, "InvoiceNumber", invoice_number);
        put(&mut fields, "InvoiceDate", invoice_date);
        put(&mut fields, "DocumentName", document_name);
        Self { fields }
    }

    pub fn due_date(mut self, date: impl Into<Value>) -> Self {
        put(&mut self.fields, "DueDate", date);
        self
    }

    /// Late payment interest, percent per day.
    pub fn fine_rate_per_day(mut self, rate: impl Into<Value>) -> Self {
        put(&mut self.fields, "FineRatePerDay", rate);
        self
    }

    pub fn payment_reference_number(mut self, reference: impl Into<Value>) -> Self {
        put(&mut self.fields, "PaymentReferenceNumber", reference);
        self
    }

    pub fn build(self) -> Result<InvoiceInformation, ValidationError> {
        let mut data = validate(&INVOICE_INFORMATION_SCHEMA, self.fields)?;
        Ok(InvoiceInformation::from_node(
            Node::new(NodeKind::InvoiceInformation).elements_from(&mut data, INFORMATION_ORDER),
        ))
    }
}

/// Builder for [`InvoiceSumGroup`].
#[derive(Debug, Clone)]
pub struct InvoiceSumGroupBuilder {
    fields: Fields,
}

impl InvoiceSumGroupBuilder {
    /// `total_sum` has at most 2 decimal places.
    pub fn new(total_sum: impl Into<Value>) -> Self {
        let mut fields = Fields::new();
        put(&mut fields, "TotalSum", total_sum);
        Self { fields }
    }

    pub fn invoice_sum(mut self, sum: impl Into<Value>) -> Self {
        put(&mut self.fields, "InvoiceSum", sum);
        self
    }

    pub fn vat(mut self, vat: impl Into<Value>) -> Self {
        put(&mut self.fields, "VAT", vat);
        self
    }

    pub fn total_to_pay(mut self, sum: impl Into<Value>) -> Self {
        put(&mut self.fields, "TotalToPay", sum);
        self
    }

    pub fn currency(mut self, currency: impl Into<Value>) -> Self {
        put(&mut self.fields, "Currency", currency);
        self
    }

    pub fn build(self) -> Result<InvoiceSumGroup, ValidationError> {
        let mut data = validate(&INVOICE_SUM_GROUP_SCHEMA, self.fields)?;
        Ok(InvoiceSumGroup::from_node(
            Node::new(NodeKind::InvoiceSumGroup).elements_from(&mut data, SUM_GROUP_ORDER),
        ))
    }
}

/// Builder for [`PaymentInfo`].
///
/// Almost every field is mandatory; unset ones are reported together by
/// [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct PaymentInfoBuilder {
    fields: Fields,
}

impl PaymentInfoBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn currency(mut self, currency: impl Into<Value>) -> Self {
        put(&mut self.fields, "Currency", currency);
        self
    }

    pub fn payment_description(mut self, description: impl Into<Value>) -> Self {
        put(&mut self.fields, "PaymentDescription", description);
        self
    }

    /// Rendered as `YES` or `NO`.
    pub fn payable(mut self, payable: impl Into<Value>) -> Self {
        put(&mut self.fields, "Payable", payable);
        self
    }

    pub fn pay_due_date(mut self, date: impl Into<Value>) -> Self {
        put(&mut self.fields, "PayDueDate", date);
        self
    }

    pub fn payment_total_sum(mut self, sum: impl Into<Value>) -> Self {
        put(&mut self.fields, "PaymentTotalSum", sum);
        self
    }

    pub fn payer_name(mut self, name: impl Into<Value>) -> Self {
        put(&mut self.fields, "PayerName", name);
        self
    }

    /// Invoice number the payment refers to.
    pub fn payment_id(mut self, id: impl Into<Value>) -> Self {
        put(&mut self.fields, "PaymentID", id);
        self
    }

    pub fn pay_to_account(mut self, account: impl Into<Value>) -> Self {
        put(&mut self.fields, "PayToAccount", account);
        self
    }

    pub fn pay_to_name(mut self, name: impl Into<Value>) -> Self {
        put(&mut self.fields, "PayToName", name);
        self
    }

    pub fn build(self) -> Result<PaymentInfo, ValidationError> {
        let mut data = validate(&PAYMENT, self.fields)?;
        Ok(PaymentInfo::from_node(
            Node::new(NodeKind::PaymentInfo).elements_from(&mut data, PAYMENT_ORDER),
        ))
    }
}

/// Builder for [`Invoice`].
///
/// The seller and buyer form the `InvoiceParties` pair; a missing or
/// mistyped party is reported against its index in that pair.
#[derive(Debug, Clone)]
pub struct InvoiceBuilder {
    fields: Fields,
    seller: Value,
    buyer: Value,
}

impl InvoiceBuilder {
    pub fn new(
        invoice_id: impl Into<Value>,
        reg_number: impl Into<Value>,
        seller_reg_number: impl Into<Value>,
    ) -> Self {
        let mut fields = Fields::new();
        put(&mut fields, "invoiceId", invoice_id);
        put(&mut fields, "regNumber", reg_number);
        put(&mut fields, "sellerRegnumber", seller_reg_number);
        Self {
            fields,
            seller: Value::Null,
            buyer: Value::Null,
        }
    }

    pub fn service_id(mut self, service_id: impl Into<Value>) -> Self {
        put(&mut self.fields, "serviceId", service_id);
        self
    }

    /// A [`SellerParty`](super::SellerParty).
    pub fn seller_party(mut self, seller: impl Into<Value>) -> Self {
        self.seller = seller.into();
        self
    }

    /// A [`BuyerParty`](super::BuyerParty).
    pub fn buyer_party(mut self, buyer: impl Into<Value>) -> Self {
        self.buyer = buyer.into();
        self
    }

    pub fn invoice_information(mut self, information: impl Into<Value>) -> Self {
        put(&mut self.fields, "InvoiceInformation", information);
        self
    }

    pub fn invoice_sum_group(mut self, sum_group: impl Into<Value>) -> Self {
        put(&mut self.fields, "InvoiceSumGroup", sum_group);
        self
    }

    /// Either an [`InvoiceItemGroup`](super::InvoiceItemGroup) or an
    /// [`InvoiceItem`](super::InvoiceItem).
    pub fn invoice_item_group(mut self, items: impl Into<Value>) -> Self {
        put(&mut self.fields, "InvoiceItemGroup", items);
        self
    }

    pub fn payment_info(mut self, payment: impl Into<Value>) -> Self {
        put(&mut self.fields, "PaymentInfo", payment);
        self
    }

    pub fn build(self) -> Result<Invoice, ValidationError> {
        let Self {
            mut fields,
            seller,
            buyer,
        } = self;

        fields.insert("InvoiceParties".to_string(), Value::List(vec![seller, buyer]));

        let mut data = validate(&INVOICE_SCHEMA, fields)?;
        let mut node = Node::new(NodeKind::Invoice);
        for name in INVOICE_ATTRIBUTES {
            node = node.attribute_from(&mut data, name, name);
        }
        Ok(Invoice::from_node(
            node.elements_from(&mut data, INVOICE_ORDER)
                .wrap("InvoiceParties"),
        ))
    }
}

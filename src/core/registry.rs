//! Field catalogue of the Estonian e-invoice 1.2 document.
//!
//! One [`Schema`] per entity. Every decimal field uses
//! [`DecimalPlaces::AtMost`]: amounts with too many fractional digits are
//! rejected, never rounded.

use once_cell::sync::Lazy;

use super::node::NodeKind;
use super::rules::{Coercion, DecimalPlaces, Pattern};
use super::schema::{FieldRule, NodeType, Schema};

pub const SHORT_TEXT: usize = 20;
pub const NORMAL_TEXT: usize = 100;
pub const LONG_TEXT: usize = 500;
pub const ACCOUNT_LENGTH: usize = 35;
pub const REG_LENGTH: usize = 15;
pub const BIC_LENGTH: usize = 11;
pub const POSTAL_CODE_LENGTH: usize = 10;

pub const INVOICE_TYPES: &[&str] = &["DEB", "CRE"];
pub const VAT_IDS: &[&str] = &["TAX", "NOTTAX"];

pub const LEGAL_ADDRESS: NodeType = NodeType::new("legal_address", &[NodeKind::LegalAddress]);
pub const MAIL_ADDRESS: NodeType = NodeType::new("mail_address", &[NodeKind::MailAddress]);
pub const CONTACT_DATA: NodeType = NodeType::new("contact_data", &[NodeKind::ContactData]);
pub const ACCOUNT_INFO: NodeType = NodeType::new("account_info", &[NodeKind::AccountInfo]);
pub const VAT: NodeType = NodeType::new("vat", &[NodeKind::Vat]);
pub const INVOICE_TYPE: NodeType = NodeType::new("invoice_type", &[NodeKind::InvoiceType]);
pub const ITEM_DETAIL_INFO: NodeType =
    NodeType::new("item_detail_info", &[NodeKind::ItemDetailInfo]);
pub const ITEM_ENTRY: NodeType = NodeType::new("item_entry", &[NodeKind::ItemEntry]);
pub const INVOICE_ITEM_GROUP: NodeType = NodeType::new(
    "invoice_item_group",
    &[NodeKind::InvoiceItemGroup, NodeKind::InvoiceItem],
);
pub const INVOICE_INFORMATION: NodeType =
    NodeType::new("invoice_information", &[NodeKind::InvoiceInformation]);
pub const INVOICE_SUM_GROUP: NodeType =
    NodeType::new("invoice_sum_group", &[NodeKind::InvoiceSumGroup]);
pub const PAYMENT_INFO: NodeType = NodeType::new("payment_info", &[NodeKind::PaymentInfo]);
pub const INVOICE_PARTY: NodeType = NodeType::new(
    "invoice_party",
    &[NodeKind::SellerParty, NodeKind::BuyerParty],
);

static ACCOUNT_PATTERN: Lazy<Pattern> =
    Lazy::new(|| Pattern::new("([0-9|A-Z])*").expect("account pattern compiles"));
static CURRENCY_PATTERN: Lazy<Pattern> =
    Lazy::new(|| Pattern::new("[A-Z][A-Z][A-Z]").expect("currency pattern compiles"));
static EMAIL_PATTERN: Lazy<Pattern> =
    Lazy::new(|| Pattern::new(".+@.+").expect("email pattern compiles"));

fn text(max: usize) -> FieldRule {
    FieldRule::string().max_length(max)
}

fn account() -> FieldRule {
    FieldRule::string()
        .max_length(ACCOUNT_LENGTH)
        .pattern(ACCOUNT_PATTERN.clone())
}

fn currency() -> FieldRule {
    FieldRule::string()
        .min_length(3)
        .max_length(3)
        .pattern(CURRENCY_PATTERN.clone())
}

fn amount(places: u32) -> FieldRule {
    FieldRule::decimal().decimal_places(DecimalPlaces::AtMost(places))
}

fn yes_no() -> FieldRule {
    FieldRule::boolean().coerce(Coercion::YesNo)
}

pub static HEADER: Lazy<Schema> = Lazy::new(|| {
    Schema::new("Header")
        .field("Test", yes_no())
        .field("Date", FieldRule::date().required())
        .field("FileID", text(SHORT_TEXT).required())
        .field("AppId", text(SHORT_TEXT))
        .field("Version", text(SHORT_TEXT).required())
        .field("SenderId", text(SHORT_TEXT))
        .field("ReceiverId", text(SHORT_TEXT))
        .field("ContractId", text(SHORT_TEXT))
        .field("PayeeAccountNumber", account())
});

pub static FOOTER: Lazy<Schema> = Lazy::new(|| {
    Schema::new("Footer")
        .field("TotalNumberInvoices", FieldRule::integer().required())
        .field("TotalAmount", amount(2).required())
});

pub static ACCOUNT: Lazy<Schema> = Lazy::new(|| {
    Schema::new("AccountInfo")
        .field("AccountNumber", account().required())
        .field("IBAN", account())
        .field("BIC", text(BIC_LENGTH))
        .field("BankName", text(NORMAL_TEXT))
});

pub static PAYMENT: Lazy<Schema> = Lazy::new(|| {
    Schema::new("PaymentInfo")
        .field("Currency", currency().required())
        .field("PaymentDescription", text(NORMAL_TEXT).required())
        .field("Payable", yes_no().required())
        .field("PayDueDate", FieldRule::date())
        .field("PaymentTotalSum", amount(2).required())
        .field("PayerName", text(NORMAL_TEXT).required())
        .field("PaymentID", text(NORMAL_TEXT).required())
        .field("PayToAccount", account().required())
        .field("PayToName", text(NORMAL_TEXT).required())
});

pub static ADDRESS: Lazy<Schema> = Lazy::new(|| {
    Schema::new("LegalAddress")
        .field("PostalAddress1", text(NORMAL_TEXT).required())
        .field("PostalAddress2", text(NORMAL_TEXT))
        .field("City", text(NORMAL_TEXT).required())
        .field("PostalCode", text(POSTAL_CODE_LENGTH))
        .field("Country", text(NORMAL_TEXT))
});

pub static MAIL_ADDRESS_SCHEMA: Lazy<Schema> = Lazy::new(|| ADDRESS.derive("MailAddress"));

pub static CONTACT: Lazy<Schema> = Lazy::new(|| {
    Schema::new("ContactData")
        .field("ContactName", text(NORMAL_TEXT))
        .field("ContactPersonCode", text(REG_LENGTH))
        .field("PhoneNumber", text(SHORT_TEXT))
        .field("FaxNumber", text(SHORT_TEXT))
        .field("URL", text(NORMAL_TEXT))
        .field("EmailAddress", text(NORMAL_TEXT).pattern(EMAIL_PATTERN.clone()))
        .field("LegalAddress", FieldRule::node(LEGAL_ADDRESS))
        .field("MailAddress", FieldRule::node(MAIL_ADDRESS))
});

pub static VAT_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new("VAT")
        .field("vatId", FieldRule::string().allowed(VAT_IDS))
        .field("SumBeforeVAT", amount(4))
        .field("VATRate", amount(2).required())
        .field("VATSum", amount(4).required())
        .field("Currency", currency())
        .field("SumAfterVAT", amount(4))
});

pub static SELLER_PARTY: Lazy<Schema> = Lazy::new(|| {
    Schema::new("SellerParty")
        .field("Name", text(NORMAL_TEXT).required())
        .field("RegNumber", text(REG_LENGTH).required())
        .field("VATRegNumber", text(REG_LENGTH))
        .field("ContactData", FieldRule::node(CONTACT_DATA))
        .field("AccountInfo", FieldRule::node(ACCOUNT_INFO))
});

/// Same fields as the seller; the registration number is optional.
pub static BUYER_PARTY: Lazy<Schema> = Lazy::new(|| {
    SELLER_PARTY
        .derive("BuyerParty")
        .override_field("RegNumber", FieldRule::optional)
});

pub static INVOICE_TYPE_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new("Type")
        .field("Type", FieldRule::string().required().allowed(INVOICE_TYPES))
        .field("SourceInvoice", text(NORMAL_TEXT))
});

pub static INVOICE_INFORMATION_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new("InvoiceInformation")
        .field("Type", FieldRule::node(INVOICE_TYPE).required())
        .field("DocumentName", text(NORMAL_TEXT).required())
        .field("InvoiceNumber", text(NORMAL_TEXT).required())
        .field("PaymentReferenceNumber", text(SHORT_TEXT))
        .field("InvoiceDate", FieldRule::date().required())
        .field("DueDate", FieldRule::date())
        .field("FineRatePerDay", amount(2))
});

pub static ITEM_DETAIL_INFO_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new("ItemDetailInfo")
        .field("ItemUnit", text(SHORT_TEXT))
        .field("ItemAmount", amount(4))
        .field("ItemPrice", amount(4))
});

pub static ITEM_ENTRY_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new("ItemEntry")
        .field("Description", text(LONG_TEXT).required())
        .field("ItemDetailInfo", FieldRule::node(ITEM_DETAIL_INFO))
        .field("ItemSum", amount(4))
        .field("VAT", FieldRule::node(VAT))
        .field("ItemTotal", amount(4))
});

pub static INVOICE_ITEM_GROUP_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new("InvoiceItemGroup")
        .field("ItemEntry", FieldRule::list_of(FieldRule::node(ITEM_ENTRY)).required())
});

pub static INVOICE_ITEM_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    const GROUP_ONLY: NodeType =
        NodeType::new("invoice_item_group", &[NodeKind::InvoiceItemGroup]);
    Schema::new("InvoiceItem")
        .field("InvoiceItemGroup", FieldRule::list_of(FieldRule::node(GROUP_ONLY)).required())
});

pub static INVOICE_SUM_GROUP_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new("InvoiceSumGroup")
        .field("InvoiceSum", amount(4))
        .field("VAT", FieldRule::node(VAT))
        .field("TotalSum", amount(2).required())
        .field("TotalToPay", amount(2))
        .field("Currency", currency())
});

pub static INVOICE_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new("Invoice")
        .field("invoiceId", text(NORMAL_TEXT).required())
        .field("serviceId", text(SHORT_TEXT))
        .field("regNumber", text(REG_LENGTH).required())
        .field("sellerRegnumber", text(REG_LENGTH).required())
        .field(
            "InvoiceParties",
            FieldRule::list_of(FieldRule::node(INVOICE_PARTY)).required(),
        )
        .field("InvoiceInformation", FieldRule::node(INVOICE_INFORMATION).required())
        .field("InvoiceSumGroup", FieldRule::node(INVOICE_SUM_GROUP).required())
        .field("InvoiceItemGroup", FieldRule::node(INVOICE_ITEM_GROUP).required())
        .field("PaymentInfo", FieldRule::node(PAYMENT_INFO).required())
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buyer_differs_from_seller_only_in_reg_number() {
        let seller: Vec<_> = SELLER_PARTY.fields().map(|(n, r)| (n, r.required)).collect();
        let buyer: Vec<_> = BUYER_PARTY.fields().map(|(n, r)| (n, r.required)).collect();
        assert_eq!(seller.len(), buyer.len());
        for (s, b) in seller.iter().zip(&buyer) {
            assert_eq!(s.0, b.0);
            if s.0 == "RegNumber" {
                assert!(s.1 && !b.1);
            } else {
                assert_eq!(s.1, b.1);
            }
        }
    }

    #[test]
    fn required_fields_of_the_catalogue() {
        fn req(s: &Schema) -> Vec<&'static str> {
            s.required_fields().collect()
        }
        assert_eq!(req(&HEADER), vec!["Date", "FileID", "Version"]);
        assert_eq!(req(&FOOTER), vec!["TotalNumberInvoices", "TotalAmount"]);
        assert_eq!(req(&ADDRESS), vec!["PostalAddress1", "City"]);
        assert!(req(&CONTACT).is_empty());
        assert!(req(&ITEM_DETAIL_INFO_SCHEMA).is_empty());
        assert_eq!(req(&VAT_SCHEMA), vec!["VATRate", "VATSum"]);
        assert_eq!(req(&BUYER_PARTY), vec!["Name"]);
        assert_eq!(
            req(&PAYMENT),
            vec![
                "Currency",
                "PaymentDescription",
                "Payable",
                "PaymentTotalSum",
                "PayerName",
                "PaymentID",
                "PayToAccount",
                "PayToName",
            ]
        );
        assert_eq!(req(&INVOICE_SCHEMA).len(), 8);
    }

    #[test]
    fn mail_address_shares_address_rules() {
        assert_eq!(MAIL_ADDRESS_SCHEMA.name(), "MailAddress");
        assert_eq!(
            MAIL_ADDRESS_SCHEMA.get("PostalCode").unwrap().max_length,
            Some(POSTAL_CODE_LENGTH)
        );
    }
}

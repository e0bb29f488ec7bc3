use crate::core::registry::{ACCOUNT, ADDRESS, BUYER_PARTY, CONTACT, MAIL_ADDRESS_SCHEMA, SELLER_PARTY};
use crate::core::{Fields, Node, NodeKind, Schema, ValidationError, Value, validate};

use super::{Entity, put};

const ADDRESS_ORDER: &[&str] = &["PostalAddress1", "PostalAddress2", "City", "PostalCode", "Country"];
const CONTACT_ORDER: &[&str] = &[
    "ContactName",
    "ContactPersonCode",
    "PhoneNumber",
    "FaxNumber",
    "URL",
    "EmailAddress",
    "LegalAddress",
    "MailAddress",
];
const PARTY_ORDER: &[&str] = &["Name", "RegNumber", "VATRegNumber", "ContactData", "AccountInfo"];

node_entity!(
    /// Bank account of a party.
    AccountInfo
);

node_entity!(
    /// Registered (legal) address of a party.
    LegalAddress
);

node_entity!(
    /// Postal address of a party, when it differs from the legal address.
    MailAddress
);

node_entity!(
    /// Contact person, phone, e-mail and addresses of a party.
    ContactData
);

node_entity!(
    /// Sender of the invoice. Registration number is mandatory.
    SellerParty
);

node_entity!(
    /// Receiver of the invoice. Registration number is optional.
    BuyerParty
);

/// A party of the invoice: exactly the seller or the buyer variant.
#[derive(Debug, Clone, PartialEq)]
pub enum InvoiceParty {
    Seller(SellerParty),
    Buyer(BuyerParty),
}

impl Entity for InvoiceParty {
    fn node(&self) -> &Node {
        match self {
            InvoiceParty::Seller(p) => p.node(),
            InvoiceParty::Buyer(p) => p.node(),
        }
    }
}

impl From<SellerParty> for InvoiceParty {
    fn from(party: SellerParty) -> Self {
        InvoiceParty::Seller(party)
    }
}

impl From<BuyerParty> for InvoiceParty {
    fn from(party: BuyerParty) -> Self {
        InvoiceParty::Buyer(party)
    }
}

impl From<InvoiceParty> for Value {
    fn from(party: InvoiceParty) -> Self {
        match party {
            InvoiceParty::Seller(p) => p.into(),
            InvoiceParty::Buyer(p) => p.into(),
        }
    }
}

/// Builder for [`AccountInfo`].
#[derive(Debug, Clone)]
pub struct AccountInfoBuilder {
    fields: Fields,
}

impl AccountInfoBuilder {
    /// `account_number` is the number in the local banking system.
    pub fn new(account_number: impl Into<Value>) -> Self {
        let mut fields = Fields::new();
        put(&mut fields, "AccountNumber", account_number);
        Self { fields }
    }

    pub fn iban(mut self, iban: impl Into<Value>) -> Self {
        put(&mut self.fields, "IBAN", iban);
        self
    }

    /// Bank identification (SWIFT) code.
    pub fn bic(mut self, bic: impl Into<Value>) -> Self {
        put(&mut self.fields, "BIC", bic);
        self
    }

    pub fn bank_name(mut self, bank_name: impl Into<Value>) -> Self {
        put(&mut self.fields, "BankName", bank_name);
        self
    }

    pub fn build(self) -> Result<AccountInfo, ValidationError> {
        let mut data = validate(&ACCOUNT, self.fields)?;
        Ok(AccountInfo::from_node(
            Node::new(NodeKind::AccountInfo)
                .elements_from(&mut data, &["AccountNumber", "IBAN", "BIC", "BankName"]),
        ))
    }
}

/// Builder for [`LegalAddress`] and [`MailAddress`]; both share one field set.
#[derive(Debug, Clone)]
pub struct AddressBuilder {
    fields: Fields,
}

impl AddressBuilder {
    /// `postal_address_1` is street, house and apartment; `city` is city or county.
    pub fn new(postal_address_1: impl Into<Value>, city: impl Into<Value>) -> Self {
        let mut fields = Fields::new();
        put(&mut fields, "PostalAddress1", postal_address_1);
        put(&mut fields, "City", city);
        Self { fields }
    }

    /// Village, postal office and similar.
    pub fn postal_address_2(mut self, line: impl Into<Value>) -> Self {
        put(&mut self.fields, "PostalAddress2", line);
        self
    }

    pub fn postal_code(mut self, code: impl Into<Value>) -> Self {
        put(&mut self.fields, "PostalCode", code);
        self
    }

    pub fn country(mut self, country: impl Into<Value>) -> Self {
        put(&mut self.fields, "Country", country);
        self
    }

    pub fn build_legal(self) -> Result<LegalAddress, ValidationError> {
        self.build_node(&ADDRESS, NodeKind::LegalAddress)
            .map(LegalAddress::from_node)
    }

    pub fn build_mail(self) -> Result<MailAddress, ValidationError> {
        self.build_node(&MAIL_ADDRESS_SCHEMA, NodeKind::MailAddress)
            .map(MailAddress::from_node)
    }

    fn build_node(self, schema: &Schema, kind: NodeKind) -> Result<Node, ValidationError> {
        let mut data = validate(schema, self.fields)?;
        Ok(Node::new(kind).elements_from(&mut data, ADDRESS_ORDER))
    }
}

/// Builder for [`ContactData`]. Every field is optional.
#[derive(Debug, Clone, Default)]
pub struct ContactDataBuilder {
    fields: Fields,
}

impl ContactDataBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contact_name(mut self, name: impl Into<Value>) -> Self {
        put(&mut self.fields, "ContactName", name);
        self
    }

    /// Personal ID code of the contact person.
    pub fn contact_person_code(mut self, code: impl Into<Value>) -> Self {
        put(&mut self.fields, "ContactPersonCode", code);
        self
    }

    pub fn phone_number(mut self, phone: impl Into<Value>) -> Self {
        put(&mut self.fields, "PhoneNumber", phone);
        self
    }

    pub fn fax_number(mut self, fax: impl Into<Value>) -> Self {
        put(&mut self.fields, "FaxNumber", fax);
        self
    }

    pub fn url(mut self, url: impl Into<Value>) -> Self {
        put(&mut self.fields, "URL", url);
        self
    }

    pub fn email_address(mut self, email: impl Into<Value>) -> Self {
        put(&mut self.fields, "EmailAddress", email);
        self
    }

    pub fn legal_address(mut self, address: impl Into<Value>) -> Self {
        put(&mut self.fields, "LegalAddress", address);
        self
    }

    pub fn mail_address(mut self, address: impl Into<Value>) -> Self {
        put(&mut self.fields, "MailAddress", address);
        self
    }

    pub fn build(self) -> Result<ContactData, ValidationError> {
        let mut data = validate(&CONTACT, self.fields)?;
        Ok(ContactData::from_node(
            Node::new(NodeKind::ContactData).elements_from(&mut data, CONTACT_ORDER),
        ))
    }
}

/// Builder for [`SellerParty`].
#[derive(Debug, Clone)]
pub struct SellerPartyBuilder {
    fields: Fields,
}

impl SellerPartyBuilder {
    pub fn new(name: impl Into<Value>, reg_number: impl Into<Value>) -> Self {
        let mut fields = Fields::new();
        put(&mut fields, "Name", name);
        put(&mut fields, "RegNumber", reg_number);
        Self { fields }
    }

    pub fn vat_reg_number(mut self, vat_reg_number: impl Into<Value>) -> Self {
        put(&mut self.fields, "VATRegNumber", vat_reg_number);
        self
    }

    pub fn contact_data(mut self, contact: impl Into<Value>) -> Self {
        put(&mut self.fields, "ContactData", contact);
        self
    }

    pub fn account_info(mut self, account: impl Into<Value>) -> Self {
        put(&mut self.fields, "AccountInfo", account);
        self
    }

    pub fn build(self) -> Result<SellerParty, ValidationError> {
        let mut data = validate(&SELLER_PARTY, self.fields)?;
        Ok(SellerParty::from_node(
            Node::new(NodeKind::SellerParty).elements_from(&mut data, PARTY_ORDER),
        ))
    }
}

/// Builder for [`BuyerParty`].
#[derive(Debug, Clone)]
pub struct BuyerPartyBuilder {
    fields: Fields,
}

impl BuyerPartyBuilder {
    pub fn new(name: impl Into<Value>) -> Self {
        let mut fields = Fields::new();
        put(&mut fields, "Name", name);
        Self { fields }
    }

    /// Personal ID or registration code of the buyer.
    pub fn reg_number(mut self, reg_number: impl Into<Value>) -> Self {
        put(&mut self.fields, "RegNumber", reg_number);
        self
    }

    pub fn vat_reg_number(mut self, vat_reg_number: impl Into<Value>) -> Self {
        put(&mut self.fields, "VATRegNumber", vat_reg_number);
        self
    }

    pub fn contact_data(mut self, contact: impl Into<Value>) -> Self {
        put(&mut self.fields, "ContactData", contact);
        self
    }

    pub fn account_info(mut self, account: impl Into<Value>) -> Self {
        put(&mut self.fields, "AccountInfo", account);
        self
    }

    pub fn build(self) -> Result<BuyerParty, ValidationError> {
        let mut data = validate(&BUYER_PARTY, self.fields)?;
        Ok(BuyerParty::from_node(
            Node::new(NodeKind::BuyerParty).elements_from(&mut data, PARTY_ORDER),
        ))
    }
}

use crate::core::registry::{FOOTER, HEADER};
use crate::core::{Fields, Node, NodeKind, ValidationError, Value, validate};

use super::put;

/// Version of the e-invoice standard written to `Header/Version` by default.
pub const E_INVOICE_VERSION: &str = "1.2";

const HEADER_ORDER: &[&str] = &[
    "Test",
    "Date",
    "FileID",
    "AppId",
    "Version",
    "SenderId",
    "ReceiverId",
    "ContractId",
    "PayeeAccountNumber",
];

node_entity!(
    /// File-level information: generation date, file identifier, standard version.
    Header
);

node_entity!(
    /// Number of invoices in the file and their total amount.
    Footer
);

impl Header {
    /// Header with the required fields and the default version.
    pub fn new(date: impl Into<Value>, file_id: impl Into<Value>) -> Result<Self, ValidationError> {
        HeaderBuilder::new(date, file_id).build()
    }
}

impl Footer {
    pub fn new(
        invoices_count: impl Into<Value>,
        total_amount: impl Into<Value>,
    ) -> Result<Self, ValidationError> {
        let mut fields = Fields::new();
        put(&mut fields, "TotalNumberInvoices", invoices_count);
        put(&mut fields, "TotalAmount", total_amount);

        let mut data = validate(&FOOTER, fields)?;
        Ok(Self::from_node(
            Node::new(NodeKind::Footer)
                .elements_from(&mut data, &["TotalNumberInvoices", "TotalAmount"]),
        ))
    }
}

/// Builder for [`Header`].
///
/// ```
/// use arve::document::HeaderBuilder;
///
/// let header = HeaderBuilder::new("2020-04-20", "123456")
///     .sender_id("ACME")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct HeaderBuilder {
    fields: Fields,
}

impl HeaderBuilder {
    /// `date` is a `YYYY-MM-DD` string or a `chrono::NaiveDate`.
    pub fn new(date: impl Into<Value>, file_id: impl Into<Value>) -> Self {
        let mut fields = Fields::new();
        put(&mut fields, "Date", date);
        put(&mut fields, "FileID", file_id);
        put(&mut fields, "Version", E_INVOICE_VERSION);
        Self { fields }
    }

    pub fn version(mut self, version: impl Into<Value>) -> Self {
        put(&mut self.fields, "Version", version);
        self
    }

    /// Mark the file as a test file (`YES`/`NO`).
    pub fn test(mut self, is_test: impl Into<Value>) -> Self {
        put(&mut self.fields, "Test", is_test);
        self
    }

    pub fn app_id(mut self, app_id: impl Into<Value>) -> Self {
        put(&mut self.fields, "AppId", app_id);
        self
    }

    pub fn sender_id(mut self, sender_id: impl Into<Value>) -> Self {
        put(&mut self.fields, "SenderId", sender_id);
        self
    }

    pub fn receiver_id(mut self, receiver_id: impl Into<Value>) -> Self {
        put(&mut self.fields, "ReceiverId", receiver_id);
        self
    }

    pub fn contract_id(mut self, contract_id: impl Into<Value>) -> Self {
        put(&mut self.fields, "ContractId", contract_id);
        self
    }

    pub fn payee_account_number(mut self, account: impl Into<Value>) -> Self {
        put(&mut self.fields, "PayeeAccountNumber", account);
        self
    }

    pub fn build(self) -> Result<Header, ValidationError> {
        let mut data = validate(&HEADER, self.fields)?;
        Ok(Header::from_node(
            Node::new(NodeKind::Header).elements_from(&mut data, HEADER_ORDER),
        ))
    }
}

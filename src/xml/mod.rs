//! XML serialization of e-invoice documents.
//!
//! [`XmlGenerator`] places the rendered Header, Invoice and Footer under
//! the `E_Invoice` root; [`XmlWriter`] turns an element tree into bytes.

mod generator;
mod writer;

pub use generator::XmlGenerator;
pub use writer::XmlWriter;

/// Root element of every generated document.
pub const ROOT_TAG: &str = "E_Invoice";

pub const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// XSD the document declares via `xsi:noNamespaceSchemaLocation`.
pub const SCHEMA_LOCATION: &str = "e-invoice_ver1.2.xsd";

/// Serialized form of a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// No whitespace between elements.
    #[default]
    Compact,
    /// Two-space indentation, one element per line.
    Pretty,
}

use tracing::debug;

use super::{OutputFormat, ROOT_TAG, SCHEMA_LOCATION, XSI_NAMESPACE, XmlWriter};
use crate::core::{ArveError, Element};
use crate::document::{Entity, Footer, Header, Invoice};

/// Assembles one e-invoice file: `E_Invoice` with Header, Invoice and
/// Footer, always in that order.
///
/// ```
/// # use arve::document::*;
/// # use arve::xml::XmlGenerator;
/// # fn run(invoice: Invoice) -> Result<(), arve::core::ArveError> {
/// let header = Header::new("2020-04-20", "123456")?;
/// let footer = Footer::new(1, rust_decimal::Decimal::new(120, 2))?;
/// let xml = XmlGenerator::new(header, footer, invoice).to_pretty_string()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct XmlGenerator {
    header: Header,
    footer: Footer,
    invoice: Invoice,
}

impl XmlGenerator {
    pub fn new(header: Header, footer: Footer, invoice: Invoice) -> Self {
        Self {
            header,
            footer,
            invoice,
        }
    }

    /// The document as an element tree.
    pub fn root(&self) -> Result<Element, ArveError> {
        let mut root = Element::new(ROOT_TAG)
            .with_attribute("xmlns:xsi", XSI_NAMESPACE)
            .with_attribute("xsi:noNamespaceSchemaLocation", SCHEMA_LOCATION);
        root.children.push(self.header.to_element()?);
        root.children.push(self.invoice.to_element()?);
        root.children.push(self.footer.to_element()?);
        Ok(root)
    }

    /// Compact UTF-8 encoded document.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ArveError> {
        let bytes = self.write(OutputFormat::Compact)?.into_bytes();
        debug!(format = "compact", bytes = bytes.len(), "generated e-invoice");
        Ok(bytes)
    }

    /// Document indented by two spaces.
    pub fn to_pretty_string(&self) -> Result<String, ArveError> {
        let xml = self.write(OutputFormat::Pretty)?.into_string()?;
        debug!(format = "pretty", bytes = xml.len(), "generated e-invoice");
        Ok(xml)
    }

    pub fn generate(&self, format: OutputFormat) -> Result<String, ArveError> {
        match format {
            OutputFormat::Compact => String::from_utf8(self.to_bytes()?)
                .map_err(|e| ArveError::Xml(format!("XML UTF-8 error: {e}"))),
            OutputFormat::Pretty => self.to_pretty_string(),
        }
    }

    fn write(&self, format: OutputFormat) -> Result<XmlWriter, ArveError> {
        let root = self.root()?;
        let mut writer = XmlWriter::new(format)?;
        writer.write_element(&root)?;
        Ok(writer)
    }
}

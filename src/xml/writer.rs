use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::io::Cursor;

use super::OutputFormat;
use crate::core::{ArveError, Element};

fn xml_io(e: std::io::Error) -> ArveError {
    ArveError::Xml(format!("XML write error: {e}"))
}

/// Serializes [`Element`] trees, starting with a UTF-8 XML declaration.
pub struct XmlWriter {
    writer: Writer<Cursor<Vec<u8>>>,
}

impl XmlWriter {
    pub fn new(format: OutputFormat) -> Result<Self, ArveError> {
        let mut writer = match format {
            OutputFormat::Compact => Writer::new(Cursor::new(Vec::new())),
            OutputFormat::Pretty => Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2),
        };
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(xml_io)?;
        Ok(Self { writer })
    }

    /// Write `element` and its subtree. Elements without text or children
    /// are written self-closing.
    pub fn write_element(&mut self, element: &Element) -> Result<&mut Self, ArveError> {
        let mut start = BytesStart::new(element.tag.as_str());
        for (name, value) in &element.attributes {
            start.push_attribute((name.as_str(), value.as_str()));
        }

        if element.text.is_none() && element.children.is_empty() {
            self.writer.write_event(Event::Empty(start)).map_err(xml_io)?;
            return Ok(self);
        }

        self.writer.write_event(Event::Start(start)).map_err(xml_io)?;
        if let Some(text) = &element.text {
            self.writer
                .write_event(Event::Text(BytesText::new(text)))
                .map_err(xml_io)?;
        }
        for child in &element.children {
            self.write_element(child)?;
        }
        self.writer
            .write_event(Event::End(BytesEnd::new(element.tag.as_str())))
            .map_err(xml_io)?;
        Ok(self)
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.writer.into_inner().into_inner()
    }

    pub fn into_string(self) -> Result<String, ArveError> {
        String::from_utf8(self.into_bytes())
            .map_err(|e| ArveError::Xml(format!("XML UTF-8 error: {e}")))
    }
}

//! Document nodes and their rendering into a generic element tree.
//!
//! A [`Node`] is what every validated entity stores: a tag, attributes,
//! an ordered map of child values, and optional attributes for scalar
//! children. [`Node::render`] walks it into an [`Element`] tree that the
//! XML writer serializes.

use indexmap::IndexMap;
use serde::Serialize;

use super::error::ArveError;
use super::value::{Fields, Value};

/// Deepest nesting the renderer will follow before giving up.
pub const MAX_RENDER_DEPTH: usize = 64;

/// Closed set of node kinds. Nested-field type checks match against these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Header,
    Footer,
    AccountInfo,
    PaymentInfo,
    LegalAddress,
    MailAddress,
    ContactData,
    Vat,
    SellerParty,
    BuyerParty,
    InvoiceType,
    InvoiceInformation,
    ItemDetailInfo,
    ItemEntry,
    InvoiceItemGroup,
    InvoiceItem,
    InvoiceSumGroup,
    Invoice,
}

impl NodeKind {
    /// Element name the kind renders as.
    pub fn tag(self) -> &'static str {
        match self {
            NodeKind::Header => "Header",
            NodeKind::Footer => "Footer",
            NodeKind::AccountInfo => "AccountInfo",
            NodeKind::PaymentInfo => "PaymentInfo",
            NodeKind::LegalAddress => "LegalAddress",
            NodeKind::MailAddress => "MailAddress",
            NodeKind::ContactData => "ContactData",
            NodeKind::Vat => "VAT",
            NodeKind::SellerParty => "SellerParty",
            NodeKind::BuyerParty => "BuyerParty",
            NodeKind::InvoiceType => "Type",
            NodeKind::InvoiceInformation => "InvoiceInformation",
            NodeKind::ItemDetailInfo => "ItemDetailInfo",
            NodeKind::ItemEntry => "ItemEntry",
            NodeKind::InvoiceItemGroup => "InvoiceItemGroup",
            NodeKind::InvoiceItem => "InvoiceItem",
            NodeKind::InvoiceSumGroup => "InvoiceSumGroup",
            NodeKind::Invoice => "Invoice",
        }
    }
}

/// A validated document node. Immutable once its entity is built.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    kind: NodeKind,
    attributes: IndexMap<String, String>,
    elements: IndexMap<String, Value>,
    element_attrs: IndexMap<String, IndexMap<String, String>>,
    wrapped: Vec<String>,
}

impl Node {
    pub(crate) fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            attributes: IndexMap::new(),
            elements: IndexMap::new(),
            element_attrs: IndexMap::new(),
            wrapped: Vec::new(),
        }
    }

    #[cfg(test)]
    pub(crate) fn attribute(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attributes.insert(name.to_string(), value.into());
        self
    }

    /// Set attribute `name` from a validated field, if present.
    pub(crate) fn attribute_from(mut self, data: &mut Fields, field: &str, name: &str) -> Self {
        if let Some(text) = data.shift_remove(field).and_then(|v| v.to_text()) {
            self.attributes.insert(name.to_string(), text);
        }
        self
    }

    #[cfg(test)]
    pub(crate) fn element(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.elements.insert(key.to_string(), value.into());
        self
    }

    /// Move validated fields into the element map in `order`. Fields missing
    /// from `data` are left out.
    pub(crate) fn elements_from(mut self, data: &mut Fields, order: &[&str]) -> Self {
        for key in order {
            if let Some(value) = data.shift_remove(*key) {
                self.elements.insert((*key).to_string(), value);
            }
        }
        self
    }

    #[cfg(test)]
    pub(crate) fn element_attr(mut self, key: &str, name: &str, value: impl Into<String>) -> Self {
        self.element_attrs
            .entry(key.to_string())
            .or_default()
            .insert(name.to_string(), value.into());
        self
    }

    /// Render the node sequence stored under `key` inside a `<key>` wrapper
    /// element instead of as bare siblings.
    ///
    /// This departs from the general rule that node sequences render bare.
    /// The 1.2 XSD requires a wrapper around the seller and buyer, so
    /// `Invoice` opts in for `InvoiceParties` and nothing else does.
    pub(crate) fn wrap(mut self, key: &str) -> Self {
        self.wrapped.push(key.to_string());
        self
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn tag(&self) -> &'static str {
        self.kind.tag()
    }

    pub fn attributes(&self) -> &IndexMap<String, String> {
        &self.attributes
    }

    pub fn elements(&self) -> &IndexMap<String, Value> {
        &self.elements
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.elements.get(key)
    }

    pub fn element_attrs(&self) -> &IndexMap<String, IndexMap<String, String>> {
        &self.element_attrs
    }

    /// Render this node and its descendants into a fresh element tree.
    ///
    /// Falsy values (see [`Value::is_falsy`]) are skipped. Numeric zero is
    /// deliberately not falsy: amounts the 1.2 XSD requires, such as
    /// `TotalToPay 0.00`, are kept.
    pub fn render(&self) -> Result<Element, ArveError> {
        self.render_at(0)
    }

    fn render_at(&self, depth: usize) -> Result<Element, ArveError> {
        if depth > MAX_RENDER_DEPTH {
            return Err(ArveError::Render(format!(
                "node <{}> is nested deeper than {MAX_RENDER_DEPTH} levels",
                self.tag()
            )));
        }

        let mut element = Element::new(self.tag());
        for (name, value) in &self.attributes {
            element.attributes.push((name.clone(), value.clone()));
        }

        for (key, value) in &self.elements {
            if value.is_falsy() {
                continue;
            }
            match value {
                Value::Node(child) => element.children.push(child.render_at(depth + 1)?),
                Value::List(items) => {
                    let mut rendered = Vec::with_capacity(items.len());
                    for item in items {
                        let Value::Node(child) = item else {
                            return Err(ArveError::Render(format!(
                                "<{}> element `{key}` holds a {} where a node is expected",
                                self.tag(),
                                item.kind_name()
                            )));
                        };
                        rendered.push(child.render_at(depth + 1)?);
                    }
                    if self.wrapped.iter().any(|w| w == key) {
                        let mut wrapper = Element::new(key);
                        wrapper.children = rendered;
                        element.children.push(wrapper);
                    } else {
                        element.children.extend(rendered);
                    }
                }
                scalar => {
                    let text = scalar.to_text().ok_or_else(|| {
                        ArveError::Render(format!(
                            "<{}> element `{key}` holds an unrenderable {}",
                            self.tag(),
                            scalar.kind_name()
                        ))
                    })?;
                    let mut child = Element::new(key);
                    if let Some(attrs) = self.element_attrs.get(key) {
                        for (name, value) in attrs {
                            child.attributes.push((name.clone(), value.clone()));
                        }
                    }
                    child.text = Some(text);
                    element.children.push(child);
                }
            }
        }

        Ok(element)
    }
}

/// Generic element tree produced by rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
    pub text: Option<String>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// First direct child with the given tag.
    pub fn child(&self, tag: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.tag == tag)
    }

    /// Text of the first direct child with the given tag.
    pub fn child_text(&self, tag: &str) -> Option<&str> {
        self.child(tag).and_then(|c| c.text.as_deref())
    }

    pub fn child_tags(&self) -> Vec<&str> {
        self.children.iter().map(|c| c.tag.as_str()).collect()
    }
}

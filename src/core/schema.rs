//! Declarative field constraints and schema composition.

use indexmap::IndexMap;

use super::node::NodeKind;
use super::rules::{Coercion, DecimalPlaces, Pattern};

/// A nested-node type accepted by a field: a name for error messages and the
/// closed set of node kinds that satisfy it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeType {
    pub name: &'static str,
    pub accepts: &'static [NodeKind],
}

impl NodeType {
    pub const fn new(name: &'static str, accepts: &'static [NodeKind]) -> Self {
        Self { name, accepts }
    }

    pub fn accepts(&self, kind: NodeKind) -> bool {
        self.accepts.contains(&kind)
    }
}

/// Primitive kind of a field.
#[derive(Debug, Clone)]
pub enum FieldKind {
    String,
    Integer,
    Decimal,
    Boolean,
    /// A `YYYY-MM-DD` string (or a `NaiveDate`, normalized to that form).
    Date,
    /// An already constructed node of one of the accepted kinds.
    Node(NodeType),
    /// A sequence whose elements are each checked against the boxed rule.
    List(Box<FieldRule>),
}

impl FieldKind {
    /// Name used in "must be of ... type" messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldKind::String | FieldKind::Date => "string",
            FieldKind::Integer => "integer",
            FieldKind::Decimal => "decimal",
            FieldKind::Boolean => "boolean",
            FieldKind::Node(t) => t.name,
            FieldKind::List(_) => "list",
        }
    }
}

/// Constraint bundle for a single field.
#[derive(Debug, Clone)]
pub struct FieldRule {
    pub kind: FieldKind,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<Pattern>,
    pub allowed: Option<&'static [&'static str]>,
    pub decimal_places: Option<DecimalPlaces>,
    pub coerce: Option<Coercion>,
}

impl FieldRule {
    pub fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            required: false,
            min_length: None,
            max_length: None,
            pattern: None,
            allowed: None,
            decimal_places: None,
            coerce: None,
        }
    }

    pub fn string() -> Self {
        Self::new(FieldKind::String)
    }

    pub fn integer() -> Self {
        Self::new(FieldKind::Integer)
    }

    pub fn decimal() -> Self {
        Self::new(FieldKind::Decimal)
    }

    pub fn boolean() -> Self {
        Self::new(FieldKind::Boolean)
    }

    pub fn date() -> Self {
        Self::new(FieldKind::Date)
    }

    pub fn node(node_type: NodeType) -> Self {
        Self::new(FieldKind::Node(node_type))
    }

    pub fn list_of(item: FieldRule) -> Self {
        Self::new(FieldKind::List(Box::new(item)))
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn min_length(mut self, n: usize) -> Self {
        self.min_length = Some(n);
        self
    }

    pub fn max_length(mut self, n: usize) -> Self {
        self.max_length = Some(n);
        self
    }

    pub fn pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = Some(pattern);
        self
    }

    pub fn allowed(mut self, values: &'static [&'static str]) -> Self {
        self.allowed = Some(values);
        self
    }

    pub fn decimal_places(mut self, places: DecimalPlaces) -> Self {
        self.decimal_places = Some(places);
        self
    }

    pub fn coerce(mut self, coercion: Coercion) -> Self {
        self.coerce = Some(coercion);
        self
    }
}

/// Named, ordered set of field rules for one entity.
#[derive(Debug, Clone)]
pub struct Schema {
    name: &'static str,
    fields: IndexMap<&'static str, FieldRule>,
}

impl Schema {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            fields: IndexMap::new(),
        }
    }

    pub fn field(mut self, name: &'static str, rule: FieldRule) -> Self {
        self.fields.insert(name, rule);
        self
    }

    /// Copy this schema under a new name, keeping every field rule.
    pub fn derive(&self, name: &'static str) -> Self {
        Self {
            name,
            fields: self.fields.clone(),
        }
    }

    /// Replace the rule of an existing field with `f(rule)`.
    ///
    /// Overriding a field the schema doesn't have leaves the schema
    /// unchanged; use [`Schema::field`] to add fields.
    pub fn override_field(
        mut self,
        name: &'static str,
        f: impl FnOnce(FieldRule) -> FieldRule,
    ) -> Self {
        if let Some(rule) = self.fields.get_mut(name) {
            let current = std::mem::replace(rule, FieldRule::string());
            *rule = f(current);
        }
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn get(&self, field: &str) -> Option<&FieldRule> {
        self.fields.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &FieldRule)> {
        self.fields.iter().map(|(k, v)| (*k, v))
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().filter(|(_, r)| r.required).map(|(k, _)| *k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn party() -> Schema {
        Schema::new("SellerParty")
            .field("Name", FieldRule::string().required().max_length(100))
            .field("RegNumber", FieldRule::string().required().max_length(15))
            .field("VATRegNumber", FieldRule::string().max_length(15))
    }

    #[test]
    fn derive_copies_and_overrides() {
        let seller = party();
        let buyer = seller.derive("BuyerParty").override_field("RegNumber", FieldRule::optional);

        assert_eq!(buyer.name(), "BuyerParty");
        assert!(seller.get("RegNumber").unwrap().required);
        assert!(!buyer.get("RegNumber").unwrap().required);
        assert_eq!(buyer.get("RegNumber").unwrap().max_length, Some(15));

        let order: Vec<_> = buyer.fields().map(|(name, _)| name).collect();
        assert_eq!(order, vec!["Name", "RegNumber", "VATRegNumber"]);
    }

    #[test]
    fn override_of_unknown_field_is_noop() {
        let schema = party().override_field("Missing", FieldRule::required);
        assert!(!schema.contains("Missing"));
        assert_eq!(schema.required_fields().collect::<Vec<_>>(), vec!["Name", "RegNumber"]);
    }

    #[test]
    fn type_names() {
        const VAT: NodeType = NodeType::new("vat", &[NodeKind::Vat]);
        assert_eq!(FieldRule::date().kind.type_name(), "string");
        assert_eq!(FieldRule::node(VAT).kind.type_name(), "vat");
        assert_eq!(FieldRule::list_of(FieldRule::node(VAT)).kind.type_name(), "list");
        assert!(VAT.accepts(NodeKind::Vat));
        assert!(!VAT.accepts(NodeKind::ItemEntry));
    }
}

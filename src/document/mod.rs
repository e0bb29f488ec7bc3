//! Validated e-invoice entities.
//!
//! Every entity is built through a builder: required values go to `new`,
//! optional ones to setters, and `build()` validates the collected fields
//! against the entity's schema in [`crate::core::registry`]. Setters accept
//! anything convertible into a [`Value`], so a wrong type is reported by
//! validation rather than hidden by a conversion.
//!
//! Built entities are immutable and cheap to clone; nested entities are
//! shared by reference.

use indexmap::IndexMap;

use crate::core::{ArveError, Element, Fields, Node, Value};

/// Common read access to the node behind a validated entity.
pub trait Entity {
    fn node(&self) -> &Node;

    fn tag(&self) -> &'static str {
        self.node().tag()
    }

    fn elements(&self) -> &IndexMap<String, Value> {
        self.node().elements()
    }

    fn attributes(&self) -> &IndexMap<String, String> {
        self.node().attributes()
    }

    /// Render the entity and its children into an element tree.
    fn to_element(&self) -> Result<Element, ArveError> {
        self.node().render()
    }
}

macro_rules! node_entity {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            node: std::sync::Arc<crate::core::Node>,
        }

        impl $name {
            pub(crate) fn from_node(node: crate::core::Node) -> Self {
                Self { node: std::sync::Arc::new(node) }
            }
        }

        impl crate::document::Entity for $name {
            fn node(&self) -> &crate::core::Node {
                &self.node
            }
        }

        impl From<$name> for crate::core::Value {
            fn from(entity: $name) -> Self {
                crate::core::Value::Node(entity.node)
            }
        }

        impl From<&$name> for crate::core::Value {
            fn from(entity: &$name) -> Self {
                crate::core::Value::Node(std::sync::Arc::clone(&entity.node))
            }
        }
    };
}

mod header;
mod invoice;
mod items;
mod parties;

pub use header::*;
pub use invoice::*;
pub use items::*;
pub use parties::*;

fn put(fields: &mut Fields, key: &str, value: impl Into<Value>) {
    fields.insert(key.to_string(), value.into());
}

//! Validation core: values, schemas, the validation engine and document nodes.
//!
//! Entities in [`crate::document`] are built on top of this module: each
//! collects its raw fields into [`Fields`], runs [`validate`] against its
//! [`registry`] schema and stores the result in a [`Node`].

mod error;
mod node;
pub mod registry;
pub mod rules;
mod schema;
mod validator;
mod value;

pub use error::*;
pub use node::*;
pub use rules::{Coercion, DecimalPlaces, Pattern};
pub use schema::*;
pub use validator::*;
pub use value::*;

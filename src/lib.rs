//! # arve
//!
//! Estonian e-invoice (e-arve, standard version 1.2) library: a validated
//! document model and its XML serialization.
//!
//! Every entity is checked against a declarative schema when it is built,
//! so a document that exists can always be rendered. All monetary values
//! use [`rust_decimal::Decimal`]; binary floating point is rejected.
//!
//! ## Quick Start
//!
//! ```rust
//! use arve::document::*;
//! use arve::xml::XmlGenerator;
//! use rust_decimal_macros::dec;
//!
//! let seller = SellerPartyBuilder::new("Seller OÜ", "12345678").build().unwrap();
//! let buyer = BuyerPartyBuilder::new("Buyer AS").build().unwrap();
//! let information = InvoiceInformationBuilder::new(
//!     InvoiceType::new("DEB").unwrap(),
//!     "100",
//!     "2020-04-20",
//!     "Invoice",
//! )
//! .build()
//! .unwrap();
//! let entry = ItemEntryBuilder::new("Consulting").build().unwrap();
//! let payment = PaymentInfoBuilder::new()
//!     .currency("EUR")
//!     .payment_description("Invoice 100")
//!     .payable(true)
//!     .payment_total_sum(dec!(1.20))
//!     .payer_name("Buyer AS")
//!     .payment_id("100")
//!     .pay_to_account("EE382200221020145685")
//!     .pay_to_name("Seller OÜ")
//!     .build()
//!     .unwrap();
//!
//! let invoice = InvoiceBuilder::new("100", "87654321", "12345678")
//!     .seller_party(seller)
//!     .buyer_party(buyer)
//!     .invoice_information(information)
//!     .invoice_sum_group(InvoiceSumGroupBuilder::new(dec!(1.20)).build().unwrap())
//!     .invoice_item_group(InvoiceItemGroup::new(vec![entry]).unwrap())
//!     .payment_info(payment)
//!     .build()
//!     .unwrap();
//!
//! let header = Header::new("2020-04-20", "123456").unwrap();
//! let footer = Footer::new(1, dec!(1.20)).unwrap();
//! let xml = XmlGenerator::new(header, footer, invoice).to_pretty_string().unwrap();
//! assert!(xml.contains("<E_Invoice"));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Schema registry, validation engine, document entities |
//! | `xml` (default) | quick-xml serializer and document generator |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "core")]
pub mod document;

#[cfg(feature = "xml")]
pub mod xml;

#[cfg(feature = "core")]
pub use crate::core::{ArveError, FieldError, ValidationError, Value};

#[cfg(feature = "core")]
pub use crate::document::*;

#[cfg(feature = "xml")]
pub use crate::xml::{OutputFormat, XmlGenerator};

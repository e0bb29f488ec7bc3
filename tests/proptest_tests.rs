//! Property-based tests for the validation rules.
//!
//! Run with: `cargo test --test proptest_tests`

use arve::core::{DecimalPlaces, FieldRule, Fields, Schema, Value, validate};
use arve::document::*;
use proptest::prelude::*;
use rust_decimal::Decimal;

fn arb_decimal(max_scale: u32) -> impl Strategy<Value = Decimal> {
    (-1_000_000_000i64..1_000_000_000i64, 0..=max_scale).prop_map(|(m, s)| Decimal::new(m, s))
}

proptest! {
    /// Two-place amounts pass with their scale intact; more places are rejected.
    #[test]
    fn footer_amount_scale_policy(amount in arb_decimal(8)) {
        match Footer::new(1, amount) {
            Ok(footer) => {
                prop_assert!(amount.scale() <= 2);
                prop_assert_eq!(
                    footer.elements()["TotalAmount"].to_text(),
                    Some(amount.to_string())
                );
            }
            Err(err) => {
                prop_assert!(amount.scale() > 2);
                prop_assert_eq!(
                    err.messages("TotalAmount"),
                    vec!["must not have more than 2 decimal places"]
                );
            }
        }
    }

    /// Four-place sums accept everything up to scale 4.
    #[test]
    fn vat_sum_accepts_up_to_four_places(sum in arb_decimal(4)) {
        let vat = VatBuilder::new(Decimal::new(2000, 2), sum).build();
        prop_assert!(vat.is_ok());
    }

    /// A rounding field always yields exactly the declared scale.
    #[test]
    fn round_to_yields_declared_scale(value in arb_decimal(10), places in 0u32..6) {
        let schema = Schema::new("Rounded")
            .field("Amount", FieldRule::decimal().decimal_places(DecimalPlaces::RoundTo(places)));
        let mut fields = Fields::new();
        fields.insert("Amount".to_string(), Value::from(value));

        let out = validate(&schema, fields).unwrap();
        let rounded = out["Amount"].as_decimal().unwrap();
        prop_assert_eq!(rounded.scale(), places);
        prop_assert!((rounded - value).abs() <= Decimal::new(5, places + 1));
    }

    /// Three upper-case letters are a currency code.
    #[test]
    fn currency_code_accepted(code in "[A-Z]{3}") {
        let sums = InvoiceSumGroupBuilder::new(Decimal::ONE).currency(code.as_str()).build();
        prop_assert!(sums.is_ok());
    }

    /// Any other length reports a length violation, plus the pattern one.
    #[test]
    fn currency_code_wrong_length(code in "[A-Z]{1,2}|[A-Z]{4,8}") {
        let err = InvoiceSumGroupBuilder::new(Decimal::ONE)
            .currency(code.as_str())
            .build()
            .unwrap_err();
        let messages = err.messages("Currency");
        let length = if code.len() < 3 { "min length is 3" } else { "max length is 3" };
        prop_assert_eq!(
            messages,
            vec![length, "value does not match regex '[A-Z][A-Z][A-Z]'"]
        );
    }

    /// Lower-case letters fail the pattern only.
    #[test]
    fn currency_code_lowercase(code in "[a-z]{3}") {
        let err = InvoiceSumGroupBuilder::new(Decimal::ONE)
            .currency(code.as_str())
            .build()
            .unwrap_err();
        prop_assert_eq!(
            err.messages("Currency"),
            vec!["value does not match regex '[A-Z][A-Z][A-Z]'"]
        );
    }

    /// Blank optional values behave exactly like omitted ones.
    #[test]
    fn blank_optionals_are_stripped(name in "[a-zA-Z ]{1,20}", blank_code in any::<bool>()) {
        let blank = if blank_code { Value::from("") } else { Value::Null };
        let with_blank = ContactDataBuilder::new()
            .contact_name(name.as_str())
            .contact_person_code(blank.clone())
            .url(blank)
            .build()
            .unwrap();
        let omitted = ContactDataBuilder::new().contact_name(name.as_str()).build().unwrap();
        prop_assert_eq!(with_blank, omitted);
    }
}

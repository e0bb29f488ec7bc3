use arve::ArveError;
use arve::document::*;
use arve::xml::XmlGenerator;
use rust_decimal_macros::dec;

fn main() -> Result<(), ArveError> {
    // ── 1. Parties ────────────────────────────────────────────────────
    let seller = SellerPartyBuilder::new("Test seller", "222222222")
        .vat_reg_number("EE123456789")
        .contact_data(
            ContactDataBuilder::new()
                .contact_name("Mari Maasikas")
                .email_address("mari@seller.ee")
                .legal_address(AddressBuilder::new("Tartu mnt 1", "Tallinn").build_legal()?)
                .build()?,
        )
        .account_info(
            AccountInfoBuilder::new("EE909900123456789012")
                .bic("HABAEE2X")
                .build()?,
        )
        .build()?;
    let buyer = BuyerPartyBuilder::new("Test buyer").reg_number("111111111").build()?;

    // ── 2. Invoice body ───────────────────────────────────────────────
    let vat = VatBuilder::new(dec!(20.00), dec!(0.2000))
        .sum_before_vat(dec!(1.0000))
        .sum_after_vat(dec!(1.2000))
        .build()?;
    let entry = ItemEntryBuilder::new("Consulting")
        .item_sum(dec!(1.0000))
        .vat(&vat)
        .item_total(dec!(1.2000))
        .build()?;

    let invoice = InvoiceBuilder::new("1234", "111111111", "222222222")
        .seller_party(seller)
        .buyer_party(buyer)
        .invoice_information(
            InvoiceInformationBuilder::new(
                InvoiceType::new("DEB")?,
                "Invoice 1234",
                "2020-04-20",
                "Invoice 1234 for Test Company",
            )
            .due_date("2020-05-04")
            .build()?,
        )
        .invoice_sum_group(
            InvoiceSumGroupBuilder::new(dec!(1.20))
                .invoice_sum(dec!(1.0000))
                .vat(&vat)
                .currency("EUR")
                .build()?,
        )
        .invoice_item_group(InvoiceItemGroup::new(vec![entry])?)
        .payment_info(
            PaymentInfoBuilder::new()
                .currency("EUR")
                .payment_description("Invoice number 1234")
                .payable(true)
                .payment_total_sum(dec!(1.20))
                .payer_name("Test buyer")
                .payment_id("1234")
                .pay_to_account("EE909900123456789012")
                .pay_to_name("Test seller")
                .build()?,
        )
        .build()?;

    // ── 3. Document ───────────────────────────────────────────────────
    let header = Header::new("2020-04-20", "123456")?;
    let footer = Footer::new(1, dec!(1.20))?;
    let xml = XmlGenerator::new(header, footer, invoice).to_pretty_string()?;
    println!("{xml}");

    // ── 4. A rejected amount ──────────────────────────────────────────
    println!("\n=== Validation Errors ===");
    match Footer::new(1, dec!(1.234)) {
        Ok(_) => println!("  unexpected success"),
        Err(e) => {
            for field in e.fields() {
                println!("  {field}: {}", e.messages(field).join(", "));
            }
            println!("  as JSON: {}", serde_json::to_string(&e).unwrap_or_default());
        }
    }

    Ok(())
}

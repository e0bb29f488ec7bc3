#![cfg(feature = "xml")]

use arve::core::Element;
use arve::document::*;
use arve::xml::{OutputFormat, ROOT_TAG, XmlGenerator, XmlWriter};
use quick_xml::Reader;
use quick_xml::events::Event;
use rust_decimal_macros::dec;

fn vat() -> Vat {
    VatBuilder::new(dec!(20.00), dec!(0.2000))
        .sum_before_vat(dec!(1.0000))
        .sum_after_vat(dec!(1.2000))
        .currency("EUR")
        .build()
        .unwrap()
}

fn seller() -> SellerParty {
    let address = AddressBuilder::new("Tartu mnt 1", "Tallinn")
        .postal_code("10115")
        .country("Estonia")
        .build_legal()
        .unwrap();
    let contact = ContactDataBuilder::new()
        .contact_name("Mari Maasikas")
        .email_address("mari@example.ee")
        .legal_address(address)
        .build()
        .unwrap();
    let account = AccountInfoBuilder::new("EE382200221020145685")
        .bic("HABAEE2X")
        .bank_name("Swedbank")
        .build()
        .unwrap();
    SellerPartyBuilder::new("Seller OÜ", "12345678")
        .vat_reg_number("EE123456789")
        .contact_data(contact)
        .account_info(account)
        .build()
        .unwrap()
}

fn invoice() -> Invoice {
    let buyer = BuyerPartyBuilder::new("Buyer AS").reg_number("87654321").build().unwrap();
    let information = InvoiceInformationBuilder::new(
        InvoiceType::new("DEB").unwrap(),
        "100",
        "2020-04-20",
        "Arve",
    )
    .due_date("2020-05-04")
    .build()
    .unwrap();
    let detail = ItemDetailInfoBuilder::new()
        .item_unit("h")
        .item_amount(dec!(1.0000))
        .item_price(dec!(1.0000))
        .build()
        .unwrap();
    let entry = ItemEntryBuilder::new("Consulting")
        .item_detail_info(detail)
        .item_sum(dec!(1.0000))
        .vat(vat())
        .item_total(dec!(1.2000))
        .build()
        .unwrap();
    let sums = InvoiceSumGroupBuilder::new(dec!(1.20))
        .invoice_sum(dec!(1.0000))
        .vat(vat())
        .total_to_pay(dec!(1.20))
        .currency("EUR")
        .build()
        .unwrap();
    let payment = PaymentInfoBuilder::new()
        .currency("EUR")
        .payment_description("Arve 100")
        .payable(true)
        .pay_due_date("2020-05-04")
        .payment_total_sum(dec!(1.20))
        .payer_name("Buyer AS")
        .payment_id("100")
        .pay_to_account("EE382200221020145685")
        .pay_to_name("Seller OÜ")
        .build()
        .unwrap();

    InvoiceBuilder::new("100", "87654321", "12345678")
        .seller_party(seller())
        .buyer_party(buyer)
        .invoice_information(information)
        .invoice_sum_group(sums)
        .invoice_item_group(InvoiceItemGroup::new(vec![entry]).unwrap())
        .payment_info(payment)
        .build()
        .unwrap()
}

fn generator() -> XmlGenerator {
    XmlGenerator::new(
        Header::new("2020-04-20", "123456").unwrap(),
        Footer::new(1, dec!(1.20)).unwrap(),
        invoice(),
    )
}

fn compact(element: &Element) -> String {
    let mut writer = XmlWriter::new(OutputFormat::Compact).unwrap();
    writer.write_element(element).unwrap();
    let xml = writer.into_string().unwrap();
    xml.trim_start_matches(r#"<?xml version="1.0" encoding="UTF-8"?>"#).to_string()
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

#[test]
fn header_with_required_fields_only() {
    let header = Header::new("2020-04-20", "123456").unwrap();
    assert_eq!(
        compact(&header.to_element().unwrap()),
        "<Header><Date>2020-04-20</Date><FileID>123456</FileID><Version>1.2</Version></Header>"
    );
}

#[test]
fn blank_optional_fields_leave_no_trace() {
    let account = AccountInfoBuilder::new("EE382200221020145685")
        .iban("")
        .bic(None::<&str>)
        .build()
        .unwrap();
    assert_eq!(account.elements().len(), 1);
    assert_eq!(
        compact(&account.to_element().unwrap()),
        "<AccountInfo><AccountNumber>EE382200221020145685</AccountNumber></AccountInfo>"
    );
}

#[test]
fn invoice_type_renders_as_attribute() {
    let invoice_type = InvoiceTypeBuilder::new("CRE").source_invoice("99").build().unwrap();
    assert_eq!(
        compact(&invoice_type.to_element().unwrap()),
        r#"<Type type="CRE"><SourceInvoice>99</SourceInvoice></Type>"#
    );
}

#[test]
fn vat_id_attribute() {
    let vat = VatBuilder::new(dec!(0.00), dec!(0.0000)).vat_id("NOTTAX").build().unwrap();
    assert_eq!(
        compact(&vat.to_element().unwrap()),
        r#"<VAT vatId="NOTTAX"><VATRate>0.00</VATRate><VATSum>0.0000</VATSum></VAT>"#
    );
}

#[test]
fn invoice_children_in_document_order() {
    let el = invoice().to_element().unwrap();
    assert_eq!(el.tag, "Invoice");
    assert_eq!(
        el.child_tags(),
        vec![
            "InvoiceParties",
            "InvoiceInformation",
            "InvoiceSumGroup",
            "InvoiceItemGroup",
            "PaymentInfo",
        ]
    );
    assert_eq!(el.attribute("invoiceId"), Some("100"));
    assert_eq!(el.attribute("regNumber"), Some("87654321"));
    assert_eq!(el.attribute("sellerRegnumber"), Some("12345678"));
    assert_eq!(el.attribute("serviceId"), None);

    let parties = el.child("InvoiceParties").unwrap();
    assert_eq!(parties.child_tags(), vec!["SellerParty", "BuyerParty"]);

    let payment = el.child("PaymentInfo").unwrap();
    assert_eq!(payment.child_text("Payable"), Some("YES"));
    assert_eq!(payment.child_text("PaymentTotalSum"), Some("1.20"));
}

#[test]
fn item_entries_render_as_siblings() {
    let entries = vec![
        ItemEntryBuilder::new("One").build().unwrap(),
        ItemEntryBuilder::new("Two").build().unwrap(),
    ];
    let group = InvoiceItemGroup::new(entries).unwrap();
    let item = InvoiceItem::new(vec![group]).unwrap();

    assert_eq!(
        compact(&item.to_element().unwrap()),
        "<InvoiceItem><InvoiceItemGroup>\
         <ItemEntry><Description>One</Description></ItemEntry>\
         <ItemEntry><Description>Two</Description></ItemEntry>\
         </InvoiceItemGroup></InvoiceItem>"
    );
}

#[test]
fn root_holds_header_invoice_footer() {
    let root = generator().root().unwrap();
    assert_eq!(root.tag, ROOT_TAG);
    assert_eq!(root.child_tags(), vec!["Header", "Invoice", "Footer"]);
    assert_eq!(
        root.attributes,
        vec![
            (
                "xmlns:xsi".to_string(),
                "http://www.w3.org/2001/XMLSchema-instance".to_string()
            ),
            (
                "xsi:noNamespaceSchemaLocation".to_string(),
                "e-invoice_ver1.2.xsd".to_string()
            ),
        ]
    );
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

#[test]
fn compact_and_pretty_carry_the_same_document() {
    let generator = generator();
    let bytes = generator.to_bytes().unwrap();
    let compact = String::from_utf8(bytes).unwrap();
    assert!(compact.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?><E_Invoice "#));
    assert!(!compact.contains('\n'));
    assert_eq!(generator.generate(OutputFormat::Compact).unwrap(), compact);

    let pretty = generator.generate(OutputFormat::Pretty).unwrap();
    let squashed: String = pretty
        .lines()
        .map(str::trim_start)
        .collect::<Vec<_>>()
        .join("");
    assert_eq!(squashed, compact);
}

/// Parse the generated document back and count the top-level elements.
#[test]
fn end_to_end_document_parses_back() {
    let xml = generator().to_pretty_string().unwrap();

    let mut reader = Reader::from_str(&xml);
    reader.config_mut().trim_text(true);

    let mut depth = 0usize;
    let mut top_level = Vec::new();
    let mut invoice_attrs = Vec::new();
    loop {
        match reader.read_event().unwrap() {
            Event::Start(e) => {
                let name = String::from_utf8(e.name().as_ref().to_vec()).unwrap();
                if depth == 0 {
                    assert_eq!(name, "E_Invoice");
                }
                if depth == 1 {
                    if name == "Invoice" {
                        for attr in e.attributes() {
                            let attr = attr.unwrap();
                            invoice_attrs
                                .push(String::from_utf8(attr.key.as_ref().to_vec()).unwrap());
                        }
                    }
                    top_level.push(name);
                }
                depth += 1;
            }
            Event::End(_) => depth -= 1,
            Event::Eof => break,
            _ => {}
        }
    }

    assert_eq!(depth, 0);
    assert_eq!(top_level, vec!["Header", "Invoice", "Footer"]);
    assert_eq!(invoice_attrs, vec!["invoiceId", "regNumber", "sellerRegnumber"]);
}

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

#[test]
fn pretty_document_snapshot() {
    let xml = generator().to_pretty_string().unwrap();
    insta::assert_snapshot!(xml, @r###"
    <?xml version="1.0" encoding="UTF-8"?>
    <E_Invoice xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:noNamespaceSchemaLocation="e-invoice_ver1.2.xsd">
      <Header>
        <Date>2020-04-20</Date>
        <FileID>123456</FileID>
        <Version>1.2</Version>
      </Header>
      <Invoice invoiceId="100" regNumber="87654321" sellerRegnumber="12345678">
        <InvoiceParties>
          <SellerParty>
            <Name>Seller OÜ</Name>
            <RegNumber>12345678</RegNumber>
            <VATRegNumber>EE123456789</VATRegNumber>
            <ContactData>
              <ContactName>Mari Maasikas</ContactName>
              <EmailAddress>mari@example.ee</EmailAddress>
              <LegalAddress>
                <PostalAddress1>Tartu mnt 1</PostalAddress1>
                <City>Tallinn</City>
                <PostalCode>10115</PostalCode>
                <Country>Estonia</Country>
              </LegalAddress>
            </ContactData>
            <AccountInfo>
              <AccountNumber>EE382200221020145685</AccountNumber>
              <BIC>HABAEE2X</BIC>
              <BankName>Swedbank</BankName>
            </AccountInfo>
          </SellerParty>
          <BuyerParty>
            <Name>Buyer AS</Name>
            <RegNumber>87654321</RegNumber>
          </BuyerParty>
        </InvoiceParties>
        <InvoiceInformation>
          <Type type="DEB"/>
          <DocumentName>Arve</DocumentName>
          <InvoiceNumber>100</InvoiceNumber>
          <InvoiceDate>2020-04-20</InvoiceDate>
          <DueDate>2020-05-04</DueDate>
        </InvoiceInformation>
        <InvoiceSumGroup>
          <InvoiceSum>1.0000</InvoiceSum>
          <VAT>
            <SumBeforeVAT>1.0000</SumBeforeVAT>
            <VATRate>20.00</VATRate>
            <VATSum>0.2000</VATSum>
            <Currency>EUR</Currency>
            <SumAfterVAT>1.2000</SumAfterVAT>
          </VAT>
          <TotalSum>1.20</TotalSum>
          <TotalToPay>1.20</TotalToPay>
          <Currency>EUR</Currency>
        </InvoiceSumGroup>
        <InvoiceItemGroup>
          <ItemEntry>
            <Description>Consulting</Description>
            <ItemDetailInfo>
              <ItemUnit>h</ItemUnit>
              <ItemAmount>1.0000</ItemAmount>
              <ItemPrice>1.0000</ItemPrice>
            </ItemDetailInfo>
            <ItemSum>1.0000</ItemSum>
            <VAT>
              <SumBeforeVAT>1.0000</SumBeforeVAT>
              <VATRate>20.00</VATRate>
              <VATSum>0.2000</VATSum>
              <Currency>EUR</Currency>
              <SumAfterVAT>1.2000</SumAfterVAT>
            </VAT>
            <ItemTotal>1.2000</ItemTotal>
          </ItemEntry>
        </InvoiceItemGroup>
        <PaymentInfo>
          <Currency>EUR</Currency>
          <PaymentDescription>Arve 100</PaymentDescription>
          <Payable>YES</Payable>
          <PayDueDate>2020-05-04</PayDueDate>
          <PaymentTotalSum>1.20</PaymentTotalSum>
          <PayerName>Buyer AS</PayerName>
          <PaymentID>100</PaymentID>
          <PayToAccount>EE382200221020145685</PayToAccount>
          <PayToName>Seller OÜ</PayToName>
        </PaymentInfo>
      </Invoice>
      <Footer>
        <TotalNumberInvoices>1</TotalNumberInvoices>
        <TotalAmount>1.20</TotalAmount>
      </Footer>
    </E_Invoice>
    "###);
}

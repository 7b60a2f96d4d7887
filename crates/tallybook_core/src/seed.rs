//! Demo records every store starts from.

use chrono::NaiveDate;

use crate::ids::RecordId;
use crate::models::{
    Bill, BillStatus, Challan, ChallanStatus, ChallanType, CreditNote, CreditStatus, Expense, Frequency,
    Invoice, InvoiceStatus, LineItem, PaymentMade, PaymentMode, PaymentReceived, Quote, QuoteStatus,
    RecurringPurchase, RecurringStatus, Vendor, VendorCredit, VendorStatus,
};

fn id(s: &str) -> RecordId {
    RecordId(s.to_string())
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn some(s: &str) -> Option<String> {
    Some(s.to_string())
}

pub fn vendors() -> Vec<Vendor> {
    let vendor = |n: u32, name: &str, company: Option<&str>, email: &str, payables: f64, status| Vendor {
        id: id(&format!("vendor-{}", n)),
        number: format!("VEN-{:04}", n),
        name: name.to_string(),
        company_name: company.map(String::from),
        email: some(email),
        phone: some(&format!("+1 555 010{}", n)),
        payables,
        status,
    };
    vec![
        vendor(1, "Harper Office Supply", Some("Harper & Sons Ltd"), "billing@harperoffice.com", 1_245.50, VendorStatus::Active),
        vendor(2, "Northwind Freight", Some("Northwind Logistics"), "accounts@northwind.io", 3_980.00, VendorStatus::Active),
        vendor(3, "Bluebird Print Co", None, "hello@bluebirdprint.co", 0.0, VendorStatus::Inactive),
        vendor(4, "Cedar Cloud Hosting", Some("Cedar Cloud Inc"), "invoices@cedarcloud.dev", 640.00, VendorStatus::Active),
    ]
}

pub fn expenses() -> Vec<Expense> {
    vec![
        Expense {
            id: id("expense-1"),
            number: "EXP-0001".to_string(),
            date: day(2026, 9, 3),
            category: "Office Supplies".to_string(),
            vendor_name: some("Harper Office Supply"),
            paid_through: "Company Card".to_string(),
            amount: 182.40,
            reference: some("RCPT-8812"),
            notes: None,
        },
        Expense {
            id: id("expense-2"),
            number: "EXP-0002".to_string(),
            date: day(2026, 9, 14),
            category: "Travel".to_string(),
            vendor_name: None,
            paid_through: "Petty Cash".to_string(),
            amount: 64.00,
            reference: None,
            notes: some("Taxi to client site"),
        },
        Expense {
            id: id("expense-3"),
            number: "EXP-0003".to_string(),
            date: day(2026, 10, 1),
            category: "Rent".to_string(),
            vendor_name: None,
            paid_through: "Business Checking".to_string(),
            amount: 2_400.00,
            reference: some("OCT-RENT"),
            notes: None,
        },
    ]
}

pub fn recurring_purchases() -> Vec<RecurringPurchase> {
    vec![
        RecurringPurchase {
            id: id("recurring-1"),
            number: "RP-0001".to_string(),
            profile_name: "Cloud hosting".to_string(),
            vendor_name: "Cedar Cloud Hosting".to_string(),
            frequency: Frequency::Monthly,
            start_date: day(2026, 1, 31),
            end_date: None,
            status: RecurringStatus::Active,
            line_items: vec![LineItem::new("rp1-1", "Managed server", 2.0, 160.0, 0.0)],
        },
        RecurringPurchase {
            id: id("recurring-2"),
            number: "RP-0002".to_string(),
            profile_name: "Weekly courier".to_string(),
            vendor_name: "Northwind Freight".to_string(),
            frequency: Frequency::Weekly,
            start_date: day(2026, 6, 1),
            end_date: Some(day(2026, 12, 31)),
            status: RecurringStatus::Active,
            line_items: vec![LineItem::new("rp2-1", "Courier pickup", 1.0, 45.0, 0.0)],
        },
        RecurringPurchase {
            id: id("recurring-3"),
            number: "RP-0003".to_string(),
            profile_name: "Print maintenance".to_string(),
            vendor_name: "Bluebird Print Co".to_string(),
            frequency: Frequency::Yearly,
            start_date: day(2024, 3, 15),
            end_date: None,
            status: RecurringStatus::Stopped,
            line_items: vec![LineItem::new("rp3-1", "Service contract", 1.0, 900.0, 100.0)],
        },
    ]
}

pub fn bills() -> Vec<Bill> {
    vec![
        Bill {
            id: id("bill-1"),
            number: "BILL-0001".to_string(),
            vendor_name: "Harper Office Supply".to_string(),
            order_number: some("PO-311"),
            date: day(2026, 8, 20),
            due_date: Some(day(2026, 9, 19)),
            status: BillStatus::Overdue,
            line_items: vec![
                LineItem::new("b1-1", "Copy paper (box)", 10.0, 5.0, 0.0),
                LineItem::new("b1-2", "Toner cartridge", 2.0, 75.0, 0.0),
            ],
            notes: None,
        },
        Bill {
            id: id("bill-2"),
            number: "BILL-0002".to_string(),
            vendor_name: "Northwind Freight".to_string(),
            order_number: None,
            date: day(2026, 9, 28),
            due_date: Some(day(2026, 10, 28)),
            status: BillStatus::Open,
            line_items: vec![LineItem::new("b2-1", "Pallet shipment", 4.0, 320.0, 50.0)],
            notes: some("Net 30"),
        },
        Bill {
            id: id("bill-3"),
            number: "BILL-0003".to_string(),
            vendor_name: "Cedar Cloud Hosting".to_string(),
            order_number: None,
            date: day(2026, 10, 1),
            due_date: Some(day(2026, 10, 15)),
            status: BillStatus::Paid,
            line_items: vec![LineItem::new("b3-1", "Managed server", 2.0, 160.0, 0.0)],
            notes: None,
        },
        Bill {
            id: id("bill-4"),
            number: "BILL-0004".to_string(),
            vendor_name: "Bluebird Print Co".to_string(),
            order_number: some("PO-318"),
            date: day(2026, 10, 12),
            due_date: None,
            status: BillStatus::Draft,
            line_items: vec![LineItem::new("b4-1", "Brochures (500)", 1.0, 410.0, 0.0)],
            notes: None,
        },
    ]
}

pub fn payments_made() -> Vec<PaymentMade> {
    vec![
        PaymentMade {
            id: id("payment-made-1"),
            number: "PM-0001".to_string(),
            vendor_name: "Cedar Cloud Hosting".to_string(),
            bill_number: some("BILL-0003"),
            date: day(2026, 10, 10),
            mode: PaymentMode::BankTransfer,
            amount: 320.00,
            reference: some("TRX-55120"),
        },
        PaymentMade {
            id: id("payment-made-2"),
            number: "PM-0002".to_string(),
            vendor_name: "Harper Office Supply".to_string(),
            bill_number: some("BILL-0001"),
            date: day(2026, 9, 2),
            mode: PaymentMode::Cheque,
            amount: 100.00,
            reference: some("CHQ-1043"),
        },
        PaymentMade {
            id: id("payment-made-3"),
            number: "PM-0003".to_string(),
            vendor_name: "Northwind Freight".to_string(),
            bill_number: None,
            date: day(2026, 10, 5),
            mode: PaymentMode::Card,
            amount: 250.00,
            reference: None,
        },
    ]
}

pub fn vendor_credits() -> Vec<VendorCredit> {
    vec![
        VendorCredit {
            id: id("vendor-credit-1"),
            number: "VC-0001".to_string(),
            vendor_name: "Northwind Freight".to_string(),
            bill_number: some("BILL-0002"),
            date: day(2026, 10, 3),
            status: CreditStatus::Open,
            line_items: vec![LineItem::new("vc1-1", "Damaged pallet refund", 1.0, 320.0, 0.0)],
            notes: some("Pallet 3 arrived damaged"),
        },
        VendorCredit {
            id: id("vendor-credit-2"),
            number: "VC-0002".to_string(),
            vendor_name: "Harper Office Supply".to_string(),
            bill_number: some("BILL-0001"),
            date: day(2026, 9, 1),
            status: CreditStatus::Closed,
            line_items: vec![LineItem::new("vc2-1", "Returned toner", 1.0, 75.0, 0.0)],
            notes: None,
        },
        VendorCredit {
            id: id("vendor-credit-3"),
            number: "VC-0003".to_string(),
            vendor_name: "Cedar Cloud Hosting".to_string(),
            bill_number: None,
            date: day(2026, 10, 14),
            status: CreditStatus::Open,
            line_items: vec![LineItem::new("vc3-1", "Downtime credit", 1.0, 40.0, 0.0)],
            notes: None,
        },
    ]
}

pub fn invoices() -> Vec<Invoice> {
    vec![
        Invoice {
            id: id("invoice-1"),
            number: "INV-0001".to_string(),
            customer_name: "Wayne Enterprises".to_string(),
            customer_email: some("ap@wayne-enterprises.com"),
            date: day(2026, 8, 30),
            due_date: Some(day(2026, 9, 29)),
            status: InvoiceStatus::Overdue,
            line_items: vec![
                LineItem::new("i1-1", "Consulting (hours)", 12.0, 150.0, 0.0),
                LineItem::new("i1-2", "Travel", 1.0, 220.0, 20.0),
            ],
            notes: None,
        },
        Invoice {
            id: id("invoice-2"),
            number: "INV-0002".to_string(),
            customer_name: "Stark Industries".to_string(),
            customer_email: some("payables@stark.com"),
            date: day(2026, 9, 15),
            due_date: Some(day(2026, 10, 15)),
            status: InvoiceStatus::Paid,
            line_items: vec![LineItem::new("i2-1", "Website redesign", 1.0, 4_800.0, 300.0)],
            notes: some("Thank you for your business."),
        },
        Invoice {
            id: id("invoice-3"),
            number: "INV-0003".to_string(),
            customer_name: "Acme Corporation".to_string(),
            customer_email: None,
            date: day(2026, 10, 9),
            due_date: Some(day(2026, 11, 8)),
            status: InvoiceStatus::Sent,
            line_items: vec![
                LineItem::new("i3-1", "Support plan", 3.0, 99.0, 0.0),
                LineItem::new("i3-2", "Onboarding session", 2.0, 180.0, 0.0),
            ],
            notes: None,
        },
        Invoice {
            id: id("invoice-4"),
            number: "INV-0004".to_string(),
            customer_name: "Wayne Enterprises".to_string(),
            customer_email: some("ap@wayne-enterprises.com"),
            date: day(2026, 10, 16),
            due_date: None,
            status: InvoiceStatus::Draft,
            line_items: vec![LineItem::new("i4-1", "Consulting (hours)", 6.0, 150.0, 0.0)],
            notes: None,
        },
    ]
}

pub fn payments_received() -> Vec<PaymentReceived> {
    vec![
        PaymentReceived {
            id: id("payment-received-1"),
            number: "PR-0001".to_string(),
            customer_name: "Stark Industries".to_string(),
            invoice_number: some("INV-0002"),
            date: day(2026, 10, 2),
            mode: PaymentMode::BankTransfer,
            amount: 4_500.00,
            reference: some("WIRE-7731"),
        },
        PaymentReceived {
            id: id("payment-received-2"),
            number: "PR-0002".to_string(),
            customer_name: "Wayne Enterprises".to_string(),
            invoice_number: some("INV-0001"),
            date: day(2026, 10, 11),
            mode: PaymentMode::Cheque,
            amount: 1_000.00,
            reference: some("CHQ-2209"),
        },
        PaymentReceived {
            id: id("payment-received-3"),
            number: "PR-0003".to_string(),
            customer_name: "Acme Corporation".to_string(),
            invoice_number: None,
            date: day(2026, 10, 17),
            mode: PaymentMode::Cash,
            amount: 150.00,
            reference: None,
        },
    ]
}

pub fn quotes() -> Vec<Quote> {
    vec![
        Quote {
            id: id("quote-1"),
            number: "QT-0001".to_string(),
            customer_name: "Acme Corporation".to_string(),
            customer_email: some("purchasing@acme.example"),
            date: day(2026, 9, 20),
            expiry_date: Some(day(2026, 10, 20)),
            status: QuoteStatus::Accepted,
            line_items: vec![LineItem::new("q1-1", "Support plan", 12.0, 99.0, 88.0)],
            notes: None,
        },
        Quote {
            id: id("quote-2"),
            number: "QT-0002".to_string(),
            customer_name: "Stark Industries".to_string(),
            customer_email: some("payables@stark.com"),
            date: day(2026, 10, 4),
            expiry_date: Some(day(2026, 11, 3)),
            status: QuoteStatus::Sent,
            line_items: vec![
                LineItem::new("q2-1", "Mobile app MVP", 1.0, 12_000.0, 0.0),
                LineItem::new("q2-2", "Design sprint", 1.0, 2_400.0, 400.0),
            ],
            notes: some("Valid for 30 days"),
        },
        Quote {
            id: id("quote-3"),
            number: "QT-0003".to_string(),
            customer_name: "Wayne Enterprises".to_string(),
            customer_email: None,
            date: day(2026, 8, 12),
            expiry_date: Some(day(2026, 9, 11)),
            status: QuoteStatus::Declined,
            line_items: vec![LineItem::new("q3-1", "Security audit", 1.0, 6_500.0, 0.0)],
            notes: None,
        },
    ]
}

pub fn credit_notes() -> Vec<CreditNote> {
    vec![
        CreditNote {
            id: id("credit-note-1"),
            number: "CN-0001".to_string(),
            customer_name: "Stark Industries".to_string(),
            customer_email: some("payables@stark.com"),
            invoice_number: some("INV-0002"),
            date: day(2026, 10, 6),
            status: CreditStatus::Open,
            line_items: vec![LineItem::new("cn1-1", "Scope reduction", 1.0, 300.0, 0.0)],
            reason: some("Removed blog module"),
        },
        CreditNote {
            id: id("credit-note-2"),
            number: "CN-0002".to_string(),
            customer_name: "Acme Corporation".to_string(),
            customer_email: None,
            invoice_number: None,
            date: day(2026, 9, 9),
            status: CreditStatus::Closed,
            line_items: vec![LineItem::new("cn2-1", "Goodwill credit", 1.0, 50.0, 0.0)],
            reason: None,
        },
        CreditNote {
            id: id("credit-note-3"),
            number: "CN-0003".to_string(),
            customer_name: "Wayne Enterprises".to_string(),
            customer_email: some("ap@wayne-enterprises.com"),
            invoice_number: some("INV-0001"),
            date: day(2026, 10, 13),
            status: CreditStatus::Open,
            line_items: vec![LineItem::new("cn3-1", "Travel overcharge", 1.0, 20.0, 0.0)],
            reason: some("Travel billed twice"),
        },
    ]
}

pub fn challans() -> Vec<Challan> {
    vec![
        Challan {
            id: id("challan-1"),
            number: "DC-0001".to_string(),
            customer_name: "Acme Corporation".to_string(),
            date: day(2026, 10, 7),
            challan_type: ChallanType::SupplyOnApproval,
            status: ChallanStatus::Delivered,
            line_items: vec![LineItem::new("c1-1", "Demo kiosk", 2.0, 850.0, 0.0)],
            notes: None,
        },
        Challan {
            id: id("challan-2"),
            number: "DC-0002".to_string(),
            customer_name: "Stark Industries".to_string(),
            date: day(2026, 10, 15),
            challan_type: ChallanType::JobWork,
            status: ChallanStatus::Draft,
            line_items: vec![LineItem::new("c2-1", "Prototype casing", 25.0, 18.0, 0.0)],
            notes: some("Return after assembly"),
        },
        Challan {
            id: id("challan-3"),
            number: "DC-0003".to_string(),
            customer_name: "Wayne Enterprises".to_string(),
            date: day(2026, 9, 25),
            challan_type: ChallanType::Others,
            status: ChallanStatus::Invoiced,
            line_items: vec![LineItem::new("c3-1", "Spare parts", 10.0, 12.5, 0.0)],
            notes: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Entity;
    use std::collections::HashSet;

    fn unique<T: Entity>(records: &[T]) -> bool {
        let ids: HashSet<_> = records.iter().map(|r| r.id()).collect();
        ids.len() == records.len()
    }

    #[test]
    fn seed_ids_are_unique_per_kind() {
        assert!(unique(&vendors()));
        assert!(unique(&expenses()));
        assert!(unique(&recurring_purchases()));
        assert!(unique(&bills()));
        assert!(unique(&payments_made()));
        assert!(unique(&vendor_credits()));
        assert!(unique(&invoices()));
        assert!(unique(&payments_received()));
        assert!(unique(&quotes()));
        assert!(unique(&credit_notes()));
        assert!(unique(&challans()));
    }

    #[test]
    fn first_bill_totals_two_hundred() {
        assert_eq!(bills()[0].amount(), 200.0);
    }
}

labelled_enum!(
    VendorStatus {
        Active => "active", "Active",
        Inactive => "inactive", "Inactive",
    }
);

labelled_enum!(
    BillStatus {
        Draft => "draft", "Draft",
        Open => "open", "Open",
        Overdue => "overdue", "Overdue",
        Paid => "paid", "Paid",
    }
);

labelled_enum!(
    InvoiceStatus {
        Draft => "draft", "Draft",
        Sent => "sent", "Sent",
        Overdue => "overdue", "Overdue",
        Paid => "paid", "Paid",
    }
);

labelled_enum!(
    QuoteStatus {
        Draft => "draft", "Draft",
        Sent => "sent", "Sent",
        Accepted => "accepted", "Accepted",
        Declined => "declined", "Declined",
        Invoiced => "invoiced", "Invoiced",
    }
);

labelled_enum!(
    /// Shared by credit notes and vendor credits.
    CreditStatus {
        Open => "open", "Open",
        Closed => "closed", "Closed",
    }
);

labelled_enum!(
    ChallanStatus {
        Draft => "draft", "Draft",
        Delivered => "delivered", "Delivered",
        Invoiced => "invoiced", "Invoiced",
    }
);

labelled_enum!(
    ChallanType {
        SupplyOnApproval => "supply_on_approval", "Supply on approval",
        JobWork => "job_work", "Job work",
        Others => "others", "Others",
    }
);

labelled_enum!(
    RecurringStatus {
        Active => "active", "Active",
        Stopped => "stopped", "Stopped",
    }
);

labelled_enum!(
    Frequency {
        Weekly => "weekly", "Weekly",
        Monthly => "monthly", "Monthly",
        Yearly => "yearly", "Yearly",
    }
);

labelled_enum!(
    PaymentMode {
        Cash => "cash", "Cash",
        BankTransfer => "bank_transfer", "Bank transfer",
        Cheque => "cheque", "Cheque",
        Card => "card", "Card",
    }
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_wire_string_and_label() {
        assert_eq!(PaymentMode::parse("bank_transfer"), Some(PaymentMode::BankTransfer));
        assert_eq!(PaymentMode::parse("Bank Transfer"), Some(PaymentMode::BankTransfer));
        assert_eq!(BillStatus::parse(" PAID "), Some(BillStatus::Paid));
        assert_eq!(BillStatus::parse("sent"), None);
    }

    #[test]
    fn serde_uses_wire_string() {
        let json = serde_json::to_string(&ChallanType::SupplyOnApproval).unwrap();
        assert_eq!(json, "\"supply_on_approval\"");
        for status in QuoteStatus::ALL {
            let json = serde_json::to_string(status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }
}

use rust_decimal_macros::dec;
use tally_core::CurrencyCode;
use tally_ingest::extract_transactions;
use tally_report::{format_amount, monthly_totals, sort_by_date, write_transactions, Summary};

const STATEMENT: &str = "\
London branch
05/03/2024 Card payment TO Tesco 42.10
01/03/2024 Salary FROM Acme Ltd 2,400.00
03/03/2024 Refund -18.00
Closing balance 2,339.90
";

#[test]
fn test_summary_of_extracted_statement() {
    let ex = extract_transactions(STATEMENT, None).unwrap();
    assert_eq!(ex.currency(), CurrencyCode::GBP);
    assert_eq!(ex.records.len(), 3);

    let s = Summary::from_records(&ex.records, ex.currency());
    assert_eq!(s.total_count, 3);
    assert_eq!(s.incoming_count, 1);
    assert_eq!(s.outgoing_count, 2);
    assert_eq!(s.total_incoming, dec!(2400.00));
    assert_eq!(s.total_outgoing, dec!(60.10));
    assert_eq!(s.net, dec!(2339.90));
    assert_eq!(s.currency, CurrencyCode::GBP);
    assert_eq!(format_amount(s.net, s.currency), "+2,339.90 GBP");
}

#[test]
fn test_sorted_export() {
    let mut records = extract_transactions(STATEMENT, None).unwrap().records;
    sort_by_date(&mut records);
    let dates: Vec<_> = records.iter().map(|r| r.date()).collect();
    // Month-first reading: all three fall in different months.
    assert_eq!(dates, vec!["01/03/2024", "03/03/2024", "05/03/2024"]);

    let mut buf = Vec::new();
    write_transactions(&records, &mut buf).unwrap();
    let csv = String::from_utf8(buf).unwrap();
    assert_eq!(csv.lines().count(), 4);
    assert!(csv.contains("01/03/2024,Salary FROM Acme Ltd,2400.00,GBP,Incoming,2400.00"));

    let months = monthly_totals(&records);
    assert_eq!(months.len(), 3);
    assert_eq!(months[0].month, "2024-01");
}

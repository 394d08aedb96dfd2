// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use benyfin::commands::exporter;
use benyfin::models::{PaymentMethod, Transaction, TransactionStatus, TransactionType};

fn sample() -> Vec<Transaction> {
    vec![
        Transaction {
            id: "1".to_string(),
            date: "2024-03-05T00:00:00Z".parse().unwrap(),
            description: "Monthly salary".to_string(),
            amount: "1000".parse().unwrap(),
            r#type: TransactionType::Income,
            category: "Salary".to_string(),
            payment_method: PaymentMethod::Cash,
            card_id: None,
            status: TransactionStatus::Paid,
        },
        Transaction {
            id: "2".to_string(),
            date: "2024-03-12T00:00:00Z".parse().unwrap(),
            description: "Fuel".to_string(),
            amount: "200.5".parse().unwrap(),
            r#type: TransactionType::Expense,
            category: "Car".to_string(),
            payment_method: PaymentMethod::CreditCard,
            card_id: Some("2".to_string()),
            status: TransactionStatus::Pending,
        },
    ]
}

#[test]
fn csv_export_writes_header_and_rows() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("tx.csv");

    exporter::write_csv(&out, &sample()).unwrap();

    let content = std::fs::read_to_string(&out).unwrap();
    let mut lines = content.lines();
    assert_eq!(
        lines.next().unwrap(),
        "id,date,description,amount,type,category,payment_method,card_id,status"
    );
    assert_eq!(content.lines().count(), 3);
    assert!(content.contains("Fuel"));
    assert!(content.contains("credit_card"));
    assert!(content.contains("200.5"));
}

#[test]
fn json_export_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("tx.json");

    exporter::write_json(&out, &sample()).unwrap();

    let content = std::fs::read_to_string(&out).unwrap();
    let items: Vec<serde_json::Value> = serde_json::from_str(&content).unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["type"], "income");
    assert_eq!(items[1]["paymentMethod"], "credit_card");
    assert_eq!(items[1]["cardId"], "2");
    assert!(items[0]["cardId"].is_null());
}

// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use benyfin::models::{PaymentMethod, RecurringTemplate, TransactionStatus, TransactionType};
use benyfin::recurring::materialize;
use chrono::Datelike;
use rust_decimal::Decimal;

fn templates() -> Vec<RecurringTemplate> {
    vec![
        RecurringTemplate {
            id: "1".to_string(),
            description: "Rent".to_string(),
            amount: "1500".parse().unwrap(),
            category: "Home".to_string(),
        },
        RecurringTemplate {
            id: "2".to_string(),
            description: "Gym".to_string(),
            amount: "90".parse().unwrap(),
            category: "Health".to_string(),
        },
    ]
}

#[test]
fn generated_entries_are_zero_amount_pending_on_the_tenth() {
    let generated = materialize(&templates(), 4, 2024);

    assert_eq!(generated.len(), 2);
    for entry in &generated {
        // Documented but surprising: the stored template amount is ignored
        // and every generated bill starts at 0.00 on day 10.
        assert_eq!(entry.amount, Decimal::ZERO);
        assert_eq!(entry.date.day(), 10);
        assert_eq!(entry.date.month(), 4);
        assert_eq!(entry.date.year(), 2024);
        assert_eq!(entry.status, TransactionStatus::Pending);
        assert_eq!(entry.payment_method, PaymentMethod::Cash);
        assert_eq!(entry.r#type, TransactionType::Expense);
        assert!(entry.card_id.is_none());
    }
}

#[test]
fn template_description_and_category_carry_over() {
    let generated = materialize(&templates(), 12, 2023);
    let fields: Vec<(&str, &str)> = generated
        .iter()
        .map(|t| (t.description.as_str(), t.category.as_str()))
        .collect();
    assert_eq!(fields, [("Rent", "Home"), ("Gym", "Health")]);
}

#[test]
fn no_templates_generate_nothing() {
    assert!(materialize(&[], 1, 2024).is_empty());
}

// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use benyfin::models::{PaymentMethod, Transaction, TransactionStatus, TransactionType};
use benyfin::summary::summarize;
use rust_decimal::Decimal;

fn tx(
    id: &str,
    date: &str,
    amount: &str,
    kind: TransactionType,
    category: &str,
    method: PaymentMethod,
) -> Transaction {
    Transaction {
        id: id.to_string(),
        date: format!("{}T12:00:00Z", date).parse().unwrap(),
        description: format!("Entry {}", id),
        amount: amount.parse().unwrap(),
        r#type: kind,
        category: category.to_string(),
        payment_method: method,
        card_id: match method {
            PaymentMethod::CreditCard => Some("card-1".to_string()),
            PaymentMethod::Cash => None,
        },
        status: TransactionStatus::Paid,
    }
}

fn march_2024() -> Vec<Transaction> {
    vec![
        tx(
            "1",
            "2024-03-05",
            "1000",
            TransactionType::Income,
            "Salary",
            PaymentMethod::Cash,
        ),
        tx(
            "2",
            "2024-03-10",
            "300",
            TransactionType::Expense,
            "Home",
            PaymentMethod::Cash,
        ),
        tx(
            "3",
            "2024-03-12",
            "200",
            TransactionType::Expense,
            "Car",
            PaymentMethod::CreditCard,
        ),
    ]
}

#[test]
fn monthly_totals_follow_the_cash_balance_rule() {
    let summary = summarize(&march_2024(), 3, 2024);

    assert_eq!(summary.income, Decimal::from(1000));
    assert_eq!(summary.expense, Decimal::from(500));
    assert_eq!(summary.card_expense, Decimal::from(200));
    assert_eq!(summary.cash_expense, Decimal::from(300));
    // Card expenses are billed later; only cash spending reduces the balance.
    assert_eq!(summary.balance, Decimal::from(700));
}

#[test]
fn empty_snapshot_yields_zero_summary() {
    let summary = summarize(&[], 7, 2025);

    assert_eq!(summary.balance, Decimal::ZERO);
    assert_eq!(summary.income, Decimal::ZERO);
    assert_eq!(summary.expense, Decimal::ZERO);
    assert_eq!(summary.card_expense, Decimal::ZERO);
    assert_eq!(summary.cash_expense, Decimal::ZERO);
    assert!(summary.expense_by_category.is_empty());
    assert!(summary.recent.is_empty());
    assert_eq!(summary.trend.len(), 6);
    for point in &summary.trend {
        assert_eq!(point.income, Decimal::ZERO);
        assert_eq!(point.expense, Decimal::ZERO);
    }
}

#[test]
fn trend_spans_six_months_ending_at_the_target() {
    let mut all = march_2024();
    all.push(tx(
        "4",
        "2023-09-20",
        "50",
        TransactionType::Expense,
        "Home",
        PaymentMethod::Cash,
    ));
    all.push(tx(
        "5",
        "2023-08-31",
        "999",
        TransactionType::Expense,
        "Home",
        PaymentMethod::Cash,
    ));

    let summary = summarize(&all, 2, 2024);
    let labels: Vec<&str> = summary.trend.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(
        labels,
        ["2023-09", "2023-10", "2023-11", "2023-12", "2024-01", "2024-02"]
    );
    // The September entry lands in the oldest bucket; August is outside the window.
    assert_eq!(summary.trend[0].expense, Decimal::from(50));
    assert_eq!(summary.trend[5].expense, Decimal::ZERO);
}

#[test]
fn balance_identity_holds_for_every_month() {
    let mut all = march_2024();
    all.push(tx(
        "4",
        "2024-01-02",
        "80",
        TransactionType::Expense,
        "Health",
        PaymentMethod::CreditCard,
    ));
    all.push(tx(
        "5",
        "2024-06-15",
        "120",
        TransactionType::Income,
        "Extra",
        PaymentMethod::Cash,
    ));

    for month in 1..=12 {
        let s = summarize(&all, month, 2024);
        assert_eq!(
            s.balance,
            s.income - (s.expense - s.card_expense),
            "identity broken for month {}",
            month
        );
    }
}

#[test]
fn recent_is_capped_at_five_newest_first() {
    let mut all = Vec::new();
    for day in 1..=7 {
        all.push(tx(
            &day.to_string(),
            &format!("2024-03-{:02}", day),
            "10",
            TransactionType::Expense,
            "Home",
            PaymentMethod::Cash,
        ));
    }
    all.push(tx(
        "out",
        "2024-02-28",
        "10",
        TransactionType::Expense,
        "Home",
        PaymentMethod::Cash,
    ));

    let summary = summarize(&all, 3, 2024);
    assert_eq!(summary.recent.len(), 5);
    let ids: Vec<&str> = summary.recent.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["7", "6", "5", "4", "3"]);
}

#[test]
fn category_breakdown_groups_expenses_by_name() {
    let mut all = march_2024();
    all.push(tx(
        "4",
        "2024-03-20",
        "45",
        TransactionType::Expense,
        "Home",
        PaymentMethod::Cash,
    ));

    let summary = summarize(&all, 3, 2024);
    let entries: Vec<(&str, Decimal)> = summary
        .expense_by_category
        .iter()
        .map(|e| (e.category.as_str(), e.total))
        .collect();
    // Income never shows up; groups keep first-encountered order.
    assert_eq!(
        entries,
        [("Home", Decimal::from(345)), ("Car", Decimal::from(200))]
    );
}

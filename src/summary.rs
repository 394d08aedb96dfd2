// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::Datelike;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{PaymentMethod, Transaction, TransactionType};
use crate::utils::roll_month;

/// How many trailing months the trend series covers, target month included.
pub const TREND_MONTHS: u32 = 6;

/// How many recent entries the dashboard surfaces.
pub const RECENT_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub label: String,
    pub year: i32,
    pub month: u32,
    pub income: Decimal,
    pub expense: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Decimal,
}

/// Display-ready monthly dashboard data.
///
/// `balance` counts income minus *cash* expenses only; card expenses are
/// billed later and tracked separately in `card_expense`.
#[derive(Debug, Clone, Serialize)]
pub struct MonthlySummary {
    pub balance: Decimal,
    pub income: Decimal,
    pub expense: Decimal,
    pub card_expense: Decimal,
    pub cash_expense: Decimal,
    pub trend: Vec<TrendPoint>,
    pub expense_by_category: Vec<CategoryTotal>,
    pub recent: Vec<Transaction>,
}

/// Compute the dashboard summary for one calendar month.
///
/// Pure function over the full transaction snapshot; an empty snapshot
/// yields an all-zero summary with a zero-valued 6-point trend.
pub fn summarize(transactions: &[Transaction], month: u32, year: i32) -> MonthlySummary {
    let (income, expense, card_expense) = month_totals(transactions, month, year);
    let cash_expense = expense - card_expense;
    let balance = income - cash_expense;

    let mut trend = Vec::with_capacity(TREND_MONTHS as usize);
    for back in (0..TREND_MONTHS).rev() {
        let (y, m) = roll_month(year, month as i32 - back as i32);
        let (inc, exp, _) = month_totals(transactions, m, y);
        trend.push(TrendPoint {
            label: format!("{:04}-{:02}", y, m),
            year: y,
            month: m,
            income: inc,
            expense: exp,
        });
    }

    let mut expense_by_category: Vec<CategoryTotal> = Vec::new();
    for t in transactions {
        if !in_month(t, month, year) || t.r#type != TransactionType::Expense {
            continue;
        }
        match expense_by_category
            .iter_mut()
            .find(|e| e.category == t.category)
        {
            Some(entry) => entry.total += t.amount,
            None => expense_by_category.push(CategoryTotal {
                category: t.category.clone(),
                total: t.amount,
            }),
        }
    }

    let mut recent: Vec<Transaction> = transactions
        .iter()
        .filter(|t| in_month(t, month, year))
        .cloned()
        .collect();
    recent.sort_by(|a, b| b.date.cmp(&a.date));
    recent.truncate(RECENT_LIMIT);

    MonthlySummary {
        balance,
        income,
        expense,
        card_expense,
        cash_expense,
        trend,
        expense_by_category,
        recent,
    }
}

fn in_month(t: &Transaction, month: u32, year: i32) -> bool {
    t.date.year() == year && t.date.month() == month
}

fn month_totals(transactions: &[Transaction], month: u32, year: i32) -> (Decimal, Decimal, Decimal) {
    let mut income = Decimal::ZERO;
    let mut expense = Decimal::ZERO;
    let mut card_expense = Decimal::ZERO;
    for t in transactions.iter().filter(|t| in_month(t, month, year)) {
        match t.r#type {
            TransactionType::Income => income += t.amount,
            TransactionType::Expense => {
                expense += t.amount;
                if t.payment_method == PaymentMethod::CreditCard {
                    card_expense += t.amount;
                }
            }
        }
    }
    (income, expense, card_expense)
}

// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::{Datelike, Utc};

use crate::api::ApiClient;
use crate::models::{self, TransactionType};
use crate::summary;
use crate::utils::{fmt_money, maybe_print_json, parse_month, pretty_table};

pub fn handle(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let (year, month) = match sub.get_one::<String>("month") {
        Some(s) => parse_month(s)?,
        None => {
            let today = Utc::now();
            (today.year(), today.month())
        }
    };

    // The 6-month trend needs history, so fetch the full snapshot rather
    // than asking the server for the target month only.
    let transactions = api
        .get_transactions(None, None, None)
        .context("Fetch transactions")?;
    models::validate_snapshot(&transactions).context("Server returned malformed transactions")?;

    let summary = summary::summarize(&transactions, month, year);
    if maybe_print_json(json_flag, jsonl_flag, &summary)? {
        return Ok(());
    }

    println!("Dashboard {:04}-{:02}", year, month);
    println!(
        "{}",
        pretty_table(
            &["Balance", "Income", "Expenses", "Card bill"],
            vec![vec![
                fmt_money(&summary.balance),
                fmt_money(&summary.income),
                fmt_money(&summary.expense),
                fmt_money(&summary.card_expense),
            ]],
        )
    );

    let trend_rows = summary
        .trend
        .iter()
        .map(|p| {
            vec![
                p.label.clone(),
                fmt_money(&p.income),
                fmt_money(&p.expense),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Month", "Income", "Expenses"], trend_rows));

    if !summary.expense_by_category.is_empty() {
        let rows = summary
            .expense_by_category
            .iter()
            .map(|e| vec![e.category.clone(), fmt_money(&e.total)])
            .collect();
        println!("{}", pretty_table(&["Category", "Spent"], rows));
    }

    if !summary.recent.is_empty() {
        let rows = summary
            .recent
            .iter()
            .map(|t| {
                let sign = match t.r#type {
                    TransactionType::Income => "+",
                    TransactionType::Expense => "-",
                };
                vec![
                    t.date.format("%Y-%m-%d").to_string(),
                    t.description.clone(),
                    t.category.clone(),
                    format!("{}{}", sign, fmt_money(&t.amount)),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Date", "Description", "Category", "Amount"], rows)
        );
    }
    Ok(())
}

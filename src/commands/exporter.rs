// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use serde_json::json;
use std::path::Path;

use crate::api::ApiClient;
use crate::models::{self, Transaction};
use crate::utils::parse_month;

pub fn handle(api: &ApiClient, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(api, sub),
        _ => Ok(()),
    }
}

fn export_transactions(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    let (month, year) = match sub.get_one::<String>("month") {
        Some(s) => {
            let (y, m) = parse_month(s)?;
            (Some(m), Some(y))
        }
        None => (None, None),
    };
    let kind = match sub.get_one::<String>("type") {
        Some(s) => Some(s.parse()?),
        None => None,
    };
    let transactions = api
        .get_transactions(month, year, kind)
        .context("Fetch transactions")?;
    models::validate_snapshot(&transactions).context("Server returned malformed transactions")?;

    match fmt.as_str() {
        "csv" => write_csv(Path::new(out), &transactions)?,
        "json" => write_json(Path::new(out), &transactions)?,
        _ => {
            eprintln!("Unknown format: {} (use csv|json)", fmt);
            return Ok(());
        }
    }
    println!("Exported {} transactions to {}", transactions.len(), out);
    Ok(())
}

pub fn write_csv(out: &Path, transactions: &[Transaction]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(out)?;
    wtr.write_record([
        "id", "date", "description", "amount", "type", "category", "payment_method", "card_id",
        "status",
    ])?;
    for t in transactions {
        let date = t.date.to_rfc3339();
        let amount = t.amount.to_string();
        wtr.write_record([
            t.id.as_str(),
            date.as_str(),
            t.description.as_str(),
            amount.as_str(),
            t.r#type.as_str(),
            t.category.as_str(),
            t.payment_method.as_str(),
            t.card_id.as_deref().unwrap_or_default(),
            t.status.as_str(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_json(out: &Path, transactions: &[Transaction]) -> Result<()> {
    let items: Vec<serde_json::Value> = transactions
        .iter()
        .map(|t| {
            json!({
                "id": t.id,
                "date": t.date.to_rfc3339(),
                "description": t.description,
                "amount": t.amount,
                "type": t.r#type,
                "category": t.category,
                "paymentMethod": t.payment_method,
                "cardId": t.card_id,
                "status": t.status,
            })
        })
        .collect();
    std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
    Ok(())
}

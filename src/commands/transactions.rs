// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::Utc;

use crate::api::ApiClient;
use crate::models::{self, NewTransaction, TransactionType};
use crate::query::{self, FilterSpec, PageSpec, SortSpec};
use crate::utils::{
    day_end, day_start, fmt_money, maybe_print_json, parse_date, parse_decimal, parse_month,
    pretty_table,
};

pub fn handle(api: &ApiClient, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(api, sub)?,
        Some(("add", sub)) => add(api, sub)?,
        Some(("edit", sub)) => edit(api, sub)?,
        Some(("rm", sub)) => rm(api, sub)?,
        _ => {}
    }
    Ok(())
}

pub fn filter_from_matches(sub: &clap::ArgMatches) -> Result<FilterSpec> {
    // An empty flag value counts as unset, like a cleared form field.
    let text = |name: &str| {
        sub.get_one::<String>(name)
            .filter(|s| !s.is_empty())
            .cloned()
    };
    let mut filters = FilterSpec {
        search: text("search"),
        category: text("category"),
        ..FilterSpec::default()
    };
    if let Some(s) = text("type") {
        filters.r#type = Some(s.parse()?);
    }
    if let Some(s) = text("payment") {
        filters.payment_method = Some(s.parse()?);
    }
    if let Some(s) = text("status") {
        filters.status = Some(s.parse()?);
    }
    if let Some(s) = text("from") {
        filters.date_from = Some(day_start(parse_date(&s)?));
    }
    if let Some(s) = text("to") {
        filters.date_to = Some(day_end(parse_date(&s)?));
    }
    if let Some(s) = text("min") {
        filters.amount_min = Some(parse_decimal(&s)?);
    }
    if let Some(s) = text("max") {
        filters.amount_max = Some(parse_decimal(&s)?);
    }
    Ok(filters)
}

pub fn sort_from_matches(sub: &clap::ArgMatches) -> Result<SortSpec> {
    let mut sort = SortSpec::default();
    if let Some(s) = sub.get_one::<String>("sort") {
        sort.key = s.parse()?;
    }
    if let Some(s) = sub.get_one::<String>("dir") {
        sort.direction = s.parse()?;
    }
    Ok(sort)
}

pub fn page_from_matches(sub: &clap::ArgMatches) -> PageSpec {
    let mut page = PageSpec::default();
    if let Some(p) = sub.get_one::<u64>("page") {
        page.page = *p as usize;
    }
    if let Some(s) = sub.get_one::<u64>("page-size") {
        page.page_size = *s as usize;
    }
    page
}

fn list(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let filters = filter_from_matches(sub)?;
    let sort = sort_from_matches(sub)?;
    let page = page_from_matches(sub);

    let (month, year) = match sub.get_one::<String>("month") {
        Some(s) => {
            let (y, m) = parse_month(s)?;
            (Some(m), Some(y))
        }
        None => (None, None),
    };
    let transactions = api
        .get_transactions(month, year, None)
        .context("Fetch transactions")?;
    models::validate_snapshot(&transactions).context("Server returned malformed transactions")?;
    let categories = api.get_categories().context("Fetch categories")?;

    let result = query::run(&transactions, &categories, &filters, &sort, &page);
    if maybe_print_json(json_flag, jsonl_flag, &result)? {
        return Ok(());
    }

    let rows: Vec<Vec<String>> = result
        .rows
        .iter()
        .map(|t| {
            let sign = match t.r#type {
                TransactionType::Income => "+",
                TransactionType::Expense => "-",
            };
            vec![
                t.id.clone(),
                t.date.format("%Y-%m-%d").to_string(),
                t.description.clone(),
                t.category.clone(),
                t.payment_method.to_string(),
                t.status.to_string(),
                format!("{}{}", sign, fmt_money(&t.amount)),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["ID", "Date", "Description", "Category", "Payment", "Status", "Amount"],
            rows,
        )
    );
    println!(
        "Page {}/{} | {} entries | income {} | expenses {} | net {}",
        page.page.min(result.total_pages),
        result.total_pages,
        result.total_count,
        fmt_money(&result.total_income),
        fmt_money(&result.total_expense),
        fmt_money(&result.net_total),
    );
    if !result.top_categories.is_empty() {
        println!("Top categories: {}", result.top_categories.join(", "));
    }
    if !result.status_counts.is_empty() {
        let parts: Vec<String> = result
            .status_counts
            .iter()
            .map(|s| format!("{} {}", s.count, s.status))
            .collect();
        println!("Status: {}", parts.join(", "));
    }
    Ok(())
}

fn payload_from_matches(sub: &clap::ArgMatches) -> Result<NewTransaction> {
    let date = match sub.get_one::<String>("date") {
        Some(s) => day_start(parse_date(s)?),
        None => Utc::now(),
    };
    let tx = NewTransaction {
        date,
        description: sub.get_one::<String>("description").unwrap().clone(),
        amount: parse_decimal(sub.get_one::<String>("amount").unwrap())?,
        r#type: sub.get_one::<String>("type").unwrap().parse()?,
        category: sub.get_one::<String>("category").unwrap().clone(),
        payment_method: sub.get_one::<String>("payment").unwrap().parse()?,
        card_id: sub.get_one::<String>("card").cloned(),
        status: sub.get_one::<String>("status").unwrap().parse()?,
    };
    tx.validate()?;
    Ok(tx)
}

fn add(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let tx = payload_from_matches(sub)?;
    let created = api.add_transaction(&tx).context("Create transaction")?;
    println!(
        "Recorded {} '{}' on {} (id: {})",
        fmt_money(&created.amount),
        created.description,
        created.date.format("%Y-%m-%d"),
        created.id
    );
    Ok(())
}

fn edit(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let tx = payload_from_matches(sub)?;
    api.update_transaction(id, &tx)
        .with_context(|| format!("Update transaction '{}'", id))?;
    println!("Updated transaction '{}'", id);
    Ok(())
}

fn rm(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    api.delete_transaction(id)
        .with_context(|| format!("Delete transaction '{}'", id))?;
    println!("Deleted transaction '{}'", id);
    Ok(())
}

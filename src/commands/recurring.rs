// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::{Datelike, Utc};

use crate::api::ApiClient;
use crate::models::NewRecurringTemplate;
use crate::recurring;
use crate::utils::{fmt_money, maybe_print_json, parse_decimal, parse_month, pretty_table};

pub fn handle(api: &ApiClient, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(api, sub)?,
        Some(("add", sub)) => add(api, sub)?,
        Some(("rm", sub)) => rm(api, sub)?,
        Some(("generate", sub)) => generate(api, sub)?,
        _ => {}
    }
    Ok(())
}

fn list(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let templates = api
        .get_recurring_templates()
        .context("Fetch recurring templates")?;
    if maybe_print_json(json_flag, jsonl_flag, &templates)? {
        return Ok(());
    }
    let rows = templates
        .iter()
        .map(|t| {
            vec![
                t.id.clone(),
                t.description.clone(),
                t.category.clone(),
                fmt_money(&t.amount),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["ID", "Description", "Category", "Amount"], rows)
    );
    Ok(())
}

fn add(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let payload = NewRecurringTemplate {
        description: sub.get_one::<String>("description").unwrap().clone(),
        amount: parse_decimal(sub.get_one::<String>("amount").unwrap())?,
        category: sub.get_one::<String>("category").unwrap().clone(),
    };
    let created = api
        .add_recurring_template(&payload)
        .context("Create recurring template")?;
    println!(
        "Added recurring template '{}' (id: {})",
        created.description, created.id
    );
    Ok(())
}

fn rm(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    api.delete_recurring_template(id)
        .with_context(|| format!("Delete recurring template '{}'", id))?;
    println!("Removed recurring template '{}'", id);
    Ok(())
}

fn generate(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let (year, month) = match sub.get_one::<String>("month") {
        Some(s) => parse_month(s)?,
        None => {
            let today = Utc::now();
            (today.year(), today.month())
        }
    };

    if sub.get_flag("dry-run") {
        let templates = api
            .get_recurring_templates()
            .context("Fetch recurring templates")?;
        let preview = recurring::materialize(&templates, month, year);
        if maybe_print_json(json_flag, jsonl_flag, &preview)? {
            return Ok(());
        }
        let rows = preview
            .iter()
            .map(|t| {
                vec![
                    t.date.format("%Y-%m-%d").to_string(),
                    t.description.clone(),
                    t.category.clone(),
                    t.status.to_string(),
                    fmt_money(&t.amount),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Date", "Description", "Category", "Status", "Amount"], rows)
        );
        println!("Dry run: nothing was sent to the server");
        return Ok(());
    }

    let created = api
        .generate_monthly(month, year)
        .context("Generate monthly transactions")?;
    println!(
        "Generated {} pending entries for {:04}-{:02} (day {}, amount R$ 0,00)",
        created.len(),
        year,
        month,
        recurring::GENERATION_DAY
    );
    Ok(())
}

// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};

use crate::api::ApiClient;
use crate::models::NewCard;
use crate::utils::{fmt_money, maybe_print_json, parse_decimal, pretty_table};

pub fn handle(api: &ApiClient, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => {
            let json_flag = sub.get_flag("json");
            let jsonl_flag = sub.get_flag("jsonl");
            let cards = api.get_cards().context("Fetch cards")?;
            if maybe_print_json(json_flag, jsonl_flag, &cards)? {
                return Ok(());
            }
            let rows = cards
                .iter()
                .map(|c| {
                    vec![
                        c.id.clone(),
                        c.name.clone(),
                        c.bank.clone(),
                        fmt_money(&c.limit),
                        c.closing_day.to_string(),
                        c.due_day.to_string(),
                    ]
                })
                .collect();
            println!(
                "{}",
                pretty_table(&["ID", "Name", "Bank", "Limit", "Closes", "Due"], rows)
            );
        }
        Some(("add", sub)) => {
            let payload = NewCard {
                name: sub.get_one::<String>("name").unwrap().clone(),
                bank: sub.get_one::<String>("bank").unwrap().clone(),
                limit: parse_decimal(sub.get_one::<String>("limit").unwrap())?,
                closing_day: *sub.get_one::<u32>("closing-day").unwrap(),
                due_day: *sub.get_one::<u32>("due-day").unwrap(),
            };
            let created = api.add_card(&payload).context("Create card")?;
            println!("Added card '{}' (id: {})", created.name, created.id);
        }
        Some(("rm", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            api.delete_card(id)
                .with_context(|| format!("Delete card '{}'", id))?;
            println!("Removed card '{}'", id);
        }
        _ => {}
    }
    Ok(())
}

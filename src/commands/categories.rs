// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};

use crate::api::ApiClient;
use crate::models::NewCategory;
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(api: &ApiClient, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => {
            let json_flag = sub.get_flag("json");
            let jsonl_flag = sub.get_flag("jsonl");
            let categories = api.get_categories().context("Fetch categories")?;
            if maybe_print_json(json_flag, jsonl_flag, &categories)? {
                return Ok(());
            }
            let rows = categories
                .iter()
                .map(|c| vec![c.id.clone(), c.name.clone(), c.color.clone()])
                .collect();
            println!("{}", pretty_table(&["ID", "Name", "Color"], rows));
        }
        Some(("add", sub)) => {
            let payload = NewCategory {
                name: sub.get_one::<String>("name").unwrap().clone(),
                color: sub.get_one::<String>("color").unwrap().clone(),
            };
            let created = api.add_category(&payload).context("Create category")?;
            println!("Added category '{}' (id: {})", created.name, created.id);
        }
        Some(("edit", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            let payload = NewCategory {
                name: sub.get_one::<String>("name").unwrap().clone(),
                color: sub.get_one::<String>("color").unwrap().clone(),
            };
            match api.update_category(id, &payload) {
                Ok(()) => println!("Updated category '{}'", id),
                Err(e) if e.is_unsupported_endpoint() => {
                    eprintln!("Warning: this server does not support category update");
                }
                Err(e) => return Err(e).with_context(|| format!("Update category '{}'", id)),
            }
        }
        Some(("rm", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            api.delete_category(id)
                .with_context(|| format!("Delete category '{}'", id))?;
            println!("Removed category '{}'", id);
        }
        _ => {}
    }
    Ok(())
}

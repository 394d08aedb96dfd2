// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};

use crate::api::ApiClient;
use crate::models::TransactionType;
use crate::utils::pretty_table;

pub fn handle(api: &ApiClient) -> Result<()> {
    let transactions = api
        .get_transactions(None, None, None)
        .context("Fetch transactions")?;
    let categories = api.get_categories().context("Fetch categories")?;
    let cards = api.get_cards().context("Fetch cards")?;

    let mut rows = Vec::new();

    // 1) Entry-level invariants (amount sign, card/payment pairing)
    for t in &transactions {
        if let Err(e) = t.validate() {
            rows.push(vec!["invalid_transaction".into(), format!("{} {}", t.id, e)]);
        }
    }

    // 2) Expenses pointing at categories the server does not know
    for t in &transactions {
        if t.r#type == TransactionType::Expense
            && !categories.iter().any(|c| c.name == t.category)
        {
            rows.push(vec![
                "unknown_category".into(),
                format!("{} '{}'", t.id, t.category),
            ]);
        }
    }

    // 3) Card references that resolve to no card
    for t in &transactions {
        if let Some(card_id) = &t.card_id {
            if !cards.iter().any(|c| &c.id == card_id) {
                rows.push(vec!["unknown_card".into(), format!("{} '{}'", t.id, card_id)]);
            }
        }
    }

    // 4) Card billing days outside the calendar
    for card in &cards {
        if let Err(e) = card.validate() {
            rows.push(vec!["invalid_card".into(), e.to_string()]);
        }
    }

    if rows.is_empty() {
        println!("doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}

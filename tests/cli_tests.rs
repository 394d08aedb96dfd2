// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use benyfin::cli;
use benyfin::commands::transactions;
use benyfin::models::{PaymentMethod, TransactionType};
use benyfin::query::{SortDirection, SortKey};
use rust_decimal::Decimal;

fn tx_list_matches(args: &[&str]) -> clap::ArgMatches {
    let mut argv = vec!["benyfin", "tx", "list"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    let Some(("tx", tx_m)) = matches.subcommand() else {
        panic!("no tx subcommand");
    };
    let Some(("list", list_m)) = tx_m.subcommand() else {
        panic!("no list subcommand");
    };
    list_m.clone()
}

#[test]
fn list_flags_populate_filter_sort_and_page() {
    let sub = tx_list_matches(&[
        "--search",
        "fuel",
        "--type",
        "expense",
        "--payment",
        "credit_card",
        "--min",
        "10.5",
        "--sort",
        "amount",
        "--dir",
        "asc",
        "--page",
        "2",
        "--page-size",
        "5",
    ]);

    let filters = transactions::filter_from_matches(&sub).unwrap();
    assert_eq!(filters.search.as_deref(), Some("fuel"));
    assert_eq!(filters.r#type, Some(TransactionType::Expense));
    assert_eq!(filters.payment_method, Some(PaymentMethod::CreditCard));
    assert_eq!(filters.amount_min, Some("10.5".parse::<Decimal>().unwrap()));
    assert!(filters.amount_max.is_none());
    assert!(filters.status.is_none());

    let sort = transactions::sort_from_matches(&sub).unwrap();
    assert_eq!(sort.key, SortKey::Amount);
    assert_eq!(sort.direction, SortDirection::Asc);

    let page = transactions::page_from_matches(&sub);
    assert_eq!(page.page, 2);
    assert_eq!(page.page_size, 5);
}

#[test]
fn list_defaults_to_date_desc_page_one() {
    let sub = tx_list_matches(&[]);

    let filters = transactions::filter_from_matches(&sub).unwrap();
    assert!(filters.search.is_none());
    assert!(filters.r#type.is_none());
    assert!(filters.date_from.is_none());

    let sort = transactions::sort_from_matches(&sub).unwrap();
    assert_eq!(sort.key, SortKey::Date);
    assert_eq!(sort.direction, SortDirection::Desc);

    let page = transactions::page_from_matches(&sub);
    assert_eq!(page.page, 1);
    assert_eq!(page.page_size, 20);
}

#[test]
fn date_bounds_cover_whole_days() {
    let sub = tx_list_matches(&["--from", "2024-03-01", "--to", "2024-03-31"]);
    let filters = transactions::filter_from_matches(&sub).unwrap();
    let from = filters.date_from.unwrap();
    let to = filters.date_to.unwrap();
    assert_eq!(from.to_rfc3339(), "2024-03-01T00:00:00+00:00");
    assert!(to > "2024-03-31T23:59:58Z".parse::<chrono::DateTime<chrono::Utc>>().unwrap());
}

#[test]
fn empty_bound_values_count_as_unset() {
    let sub = tx_list_matches(&["--min", "", "--from", "", "--search", ""]);
    let filters = transactions::filter_from_matches(&sub).unwrap();
    assert!(filters.amount_min.is_none());
    assert!(filters.date_from.is_none());
    assert!(filters.search.is_none());
}

#[test]
fn bad_enum_tokens_are_parse_errors() {
    let sub = tx_list_matches(&["--type", "transfer"]);
    assert!(transactions::filter_from_matches(&sub).is_err());

    let sub = tx_list_matches(&["--sort", "payee"]);
    assert!(transactions::sort_from_matches(&sub).is_err());
}

#[test]
fn card_days_are_range_checked_at_parse_time() {
    let result = cli::build_cli().try_get_matches_from([
        "benyfin",
        "card",
        "add",
        "--name",
        "Nubank",
        "--bank",
        "Nubank",
        "--limit",
        "5000",
        "--closing-day",
        "40",
        "--due-day",
        "17",
    ]);
    assert!(result.is_err());
}

#[test]
fn zero_page_size_is_rejected() {
    let result =
        cli::build_cli().try_get_matches_from(["benyfin", "tx", "list", "--page-size", "0"]);
    assert!(result.is_err());
}

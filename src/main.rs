// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use benyfin::{api::ApiClient, cli, commands, config};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let cfg = config::load()?;

    match matches.subcommand() {
        Some(("login", sub)) => commands::auth::login(cfg, sub)?,
        Some(("register", sub)) => commands::auth::register(cfg, sub)?,
        Some(("logout", _)) => commands::auth::logout(cfg)?,
        Some(("dashboard", sub)) => commands::dashboard::handle(&ApiClient::new(&cfg)?, sub)?,
        Some(("tx", sub)) => commands::transactions::handle(&ApiClient::new(&cfg)?, sub)?,
        Some(("category", sub)) => commands::categories::handle(&ApiClient::new(&cfg)?, sub)?,
        Some(("card", sub)) => commands::cards::handle(&ApiClient::new(&cfg)?, sub)?,
        Some(("recurring", sub)) => commands::recurring::handle(&ApiClient::new(&cfg)?, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&ApiClient::new(&cfg)?, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&ApiClient::new(&cfg)?)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}

// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::api::ApiClient;
use crate::config::{self, Config};

pub fn login(mut cfg: Config, sub: &clap::ArgMatches) -> Result<()> {
    let email = sub.get_one::<String>("email").unwrap();
    let password = sub.get_one::<String>("password").unwrap();
    let api = ApiClient::new(&cfg)?;
    let resp = api.login(email, password)?;
    cfg.token = Some(resp.token);
    config::save(&cfg)?;
    println!("Logged in as {} <{}>", resp.user.name, resp.user.email);
    Ok(())
}

pub fn register(mut cfg: Config, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap();
    let email = sub.get_one::<String>("email").unwrap();
    let password = sub.get_one::<String>("password").unwrap();
    let api = ApiClient::new(&cfg)?;
    let resp = api.register(name, email, password)?;
    cfg.token = Some(resp.token);
    config::save(&cfg)?;
    println!("Account created for {} <{}>", resp.user.name, resp.user.email);
    Ok(())
}

pub fn logout(mut cfg: Config) -> Result<()> {
    cfg.token = None;
    config::save(&cfg)?;
    println!("Session token cleared");
    Ok(())
}

// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::utils::{
    current_user, get_api_url, get_currency, get_language, get_period, pretty_table,
    set_currency, set_language, set_period, set_setting,
};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", _)) => show(conn)?,
        Some(("set-currency", sub)) => {
            let ccy = sub.get_one::<String>("currency").unwrap();
            set_currency(conn, ccy)?;
            println!("Display currency set to {}", ccy);
        }
        Some(("set-period", sub)) => {
            let days = *sub.get_one::<u32>("days").unwrap();
            set_period(conn, days)?;
            println!("Default period set to {} days", days);
        }
        Some(("set-language", sub)) => {
            let lang = sub.get_one::<String>("language").unwrap();
            set_language(conn, lang)?;
            println!("Category language set to {}", lang);
        }
        Some(("set-url", sub)) => {
            let url = sub.get_one::<String>("url").unwrap();
            set_setting(conn, "api_url", url)?;
            println!("Service URL set to {}", url);
        }
        _ => {}
    }
    Ok(())
}

fn show(conn: &Connection) -> Result<()> {
    let signed_in = match current_user(conn)? {
        Some(u) => format!("{} <{}>", u.name, u.email),
        None => "(not signed in)".to_string(),
    };
    let data = vec![
        vec!["Account".to_string(), signed_in],
        vec!["Currency".to_string(), get_currency(conn)?],
        vec!["Period (days)".to_string(), get_period(conn)?.to_string()],
        vec!["Language".to_string(), get_language(conn)?],
        vec!["Service URL".to_string(), get_api_url(conn)?],
    ];
    println!("{}", pretty_table(&["Setting", "Value"], data));
    Ok(())
}

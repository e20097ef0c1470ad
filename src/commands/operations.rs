// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{bail, Result};
use rusqlite::Connection;
use serde::Serialize;

use crate::categories;
use crate::utils::{fmt_amount, get_currency, get_language, maybe_print_json, parse_date, pretty_table};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("rm", sub)) => rm(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let amount = *sub.get_one::<i64>("amount").unwrap();
    let category = sub.get_one::<String>("category").unwrap();
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;

    let (user, mut total) = super::load_total(conn)?;
    let id = super::client(conn)?.add_operation(amount, category, date, user.id)?;
    if id < 0 {
        bail!("Service rejected the operation");
    }
    total.add(amount, category.as_str(), date, id);

    let ccy = get_currency(conn)?;
    println!(
        "Recorded {} ({}) on {} as operation {}",
        fmt_amount(amount, &ccy),
        category,
        date,
        id
    );
    Ok(())
}

fn rm(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let (_user, mut total) = super::load_total(conn)?;

    let id = match sub.get_one::<i64>("id") {
        Some(id) => *id,
        None => {
            let (Some(date), Some(amount), Some(category)) = (
                sub.get_one::<String>("date"),
                sub.get_one::<i64>("amount"),
                sub.get_one::<String>("category"),
            ) else {
                bail!("Pass --id, or all of --date, --amount and --category");
            };
            let date = parse_date(date)?;
            total.find_id(date, *amount, categories::resolve(category))
        }
    };
    if id < 0 {
        println!("No matching operation found.");
        return Ok(());
    }

    if !super::client(conn)?.delete_operation(id)? {
        bail!("Service refused to delete operation {}", id);
    }
    total.remove(id);
    println!("Deleted operation {} ({} left)", id, total.len());
    Ok(())
}

#[derive(Serialize)]
struct OperationRow {
    date: String,
    category: String,
    amount: i64,
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let kind = sub.get_one::<String>("kind").unwrap().as_str();
    let days = super::period_days(conn, sub)?;

    let (_user, total) = super::load_total(conn)?;
    let mut current = super::period_view(&total, days);
    if let Some(name) = sub.get_one::<String>("category") {
        current = current.select_by_category(categories::resolve(name));
    }
    let lang = get_language(conn)?;
    let ccy = get_currency(conn)?;

    let rows: Vec<OperationRow> = current
        .sorted_by_date()
        .into_iter()
        .filter(|(_, _, amount)| match kind {
            "incomes" => *amount > 0,
            "expenses" => *amount < 0,
            _ => true,
        })
        .map(|(date, category, amount)| OperationRow {
            date: date.to_string(),
            category: category.label(&lang).to_string(),
            amount,
        })
        .collect();

    if !maybe_print_json(json_flag, jsonl_flag, &rows)? {
        let data = rows
            .iter()
            .map(|r| vec![r.date.clone(), r.category.clone(), fmt_amount(r.amount, &ccy)])
            .collect();
        println!("{}", pretty_table(&["Date", "Category", "Amount"], data));
    }
    Ok(())
}

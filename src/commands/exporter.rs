// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;
use serde_json::json;
use std::path::Path;

use crate::models::Operation;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("operations", sub)) => export_operations(conn, sub),
        _ => Ok(()),
    }
}

fn export_operations(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().as_str();
    let out = sub.get_one::<String>("out").unwrap();
    let kind = sub.get_one::<String>("kind").unwrap().as_str();
    let days = super::period_days(conn, sub)?;

    let (_user, total) = super::load_total(conn)?;
    let current = super::period_view(&total, days);
    let ops = match kind {
        "incomes" => current.incomes(),
        "expenses" => current.expenses(),
        _ => current.operations().to_vec(),
    };

    match fmt {
        "json" => write_json(&ops, out)?,
        _ => write_csv(&ops, out)?,
    }
    println!("Exported {} operations to {}", ops.len(), out);
    Ok(())
}

/// One row per operation, header included, default quoting.
pub fn write_csv(ops: &[Operation], path: impl AsRef<Path>) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["OperationId", "Category", "Amount", "Date"])?;
    for op in ops {
        wtr.write_record([
            op.id.to_string(),
            op.category.clone(),
            op.amount.to_string(),
            op.date.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_json(ops: &[Operation], path: impl AsRef<Path>) -> Result<()> {
    let mut items = Vec::new();
    for op in ops {
        items.push(json!({
            "id": op.id,
            "category": op.category,
            "amount": op.amount,
            "date": op.date.to_string(),
        }));
    }
    std::fs::write(path, serde_json::to_string_pretty(&items)?)?;
    Ok(())
}

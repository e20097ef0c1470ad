// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;
use serde::Serialize;

use crate::utils::{fmt_amount, get_currency, get_language, maybe_print_json, pretty_table};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(conn, sub)?,
        Some(("by-category", sub)) => by_category(conn, sub)?,
        Some(("cashflow", sub)) => cashflow(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn summary(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let days = super::period_days(conn, sub)?;
    let (_user, total) = super::load_total(conn)?;
    let current = super::period_view(&total, days);
    let ccy = get_currency(conn)?;

    let incomes = current.total_incomes();
    let expenses = current.total_expenses();
    let data = vec![
        vec!["Incomes".to_string(), fmt_amount(incomes, &ccy)],
        vec!["Expenses".to_string(), fmt_amount(expenses, &ccy)],
        vec!["Net".to_string(), fmt_amount(incomes + expenses, &ccy)],
    ];
    println!("Last {} days, {} operations", days, current.len());
    println!("{}", pretty_table(&["", "Amount"], data));
    Ok(())
}

#[derive(Serialize)]
struct CategoryRow {
    category: String,
    count: usize,
    sum: i64,
}

fn by_category(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let kind = sub.get_one::<String>("kind").unwrap().as_str();
    let days = super::period_days(conn, sub)?;

    let (_user, total) = super::load_total(conn)?;
    let current = super::period_view(&total, days);
    let lang = get_language(conn)?;
    let ccy = get_currency(conn)?;

    let totals = if kind == "incomes" {
        current.by_category_incomes()
    } else {
        current.by_category_expenses()
    };
    let rows: Vec<CategoryRow> = totals
        .iter()
        .map(|t| CategoryRow {
            category: t.category.label(&lang).to_string(),
            count: t.count,
            sum: t.sum,
        })
        .collect();

    if !maybe_print_json(json_flag, jsonl_flag, &rows)? {
        let data = rows
            .iter()
            .map(|r| {
                vec![
                    r.category.clone(),
                    r.count.to_string(),
                    fmt_amount(r.sum, &ccy),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Category", "Count", "Sum"], data));
    }
    Ok(())
}

#[derive(Serialize)]
struct CashflowRow {
    date: String,
    incomes: i64,
    expenses: i64,
}

fn cashflow(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let days = super::period_days(conn, sub)?;

    let (_user, total) = super::load_total(conn)?;
    let current = super::period_view(&total, days);
    let ccy = get_currency(conn)?;

    let rows: Vec<CashflowRow> = current
        .by_date_income_expense()
        .into_iter()
        .map(|(date, incomes, expenses)| CashflowRow {
            date: date.to_string(),
            incomes,
            expenses,
        })
        .collect();

    if !maybe_print_json(json_flag, jsonl_flag, &rows)? {
        let data = rows
            .iter()
            .map(|r| {
                vec![
                    r.date.clone(),
                    fmt_amount(r.incomes, &ccy),
                    fmt_amount(r.expenses, &ccy),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Date", "Incomes", "Expenses"], data));
    }
    Ok(())
}

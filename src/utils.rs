// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use rusqlite::{params, Connection, OptionalExtension};

use crate::models::User;

pub const DEFAULT_API_URL: &str = "https://api.outlay.app/";
pub const DEFAULT_PERIOD_DAYS: u32 = 30;

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn fmt_amount(amount: i64, ccy: &str) -> String {
    format!("{}{}", amount, ccy)
}

pub fn fmt_projection(value: f64, ccy: &str) -> String {
    format!("{:.2}{}", value, ccy)
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

// Settings key-value access

pub fn get_setting(conn: &Connection, key: &str) -> Result<Option<String>> {
    let v: Option<String> = conn
        .query_row("SELECT value FROM settings WHERE key=?1", params![key], |r| {
            r.get(0)
        })
        .optional()?;
    Ok(v)
}

pub fn set_setting(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO settings(key, value) VALUES(?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value",
        params![key, value],
    )?;
    Ok(())
}

pub fn get_api_url(conn: &Connection) -> Result<String> {
    Ok(get_setting(conn, "api_url")?.unwrap_or_else(|| DEFAULT_API_URL.to_string()))
}

pub fn get_currency(conn: &Connection) -> Result<String> {
    Ok(get_setting(conn, "currency")?.unwrap_or_else(|| "$".to_string()))
}

pub fn set_currency(conn: &Connection, ccy: &str) -> Result<()> {
    set_setting(conn, "currency", ccy)
}

pub fn get_period(conn: &Connection) -> Result<u32> {
    match get_setting(conn, "period")? {
        Some(v) => v
            .parse::<u32>()
            .with_context(|| format!("Invalid stored period '{}'", v)),
        None => Ok(DEFAULT_PERIOD_DAYS),
    }
}

pub fn set_period(conn: &Connection, days: u32) -> Result<()> {
    set_setting(conn, "period", &days.to_string())
}

pub fn get_language(conn: &Connection) -> Result<String> {
    Ok(get_setting(conn, "language")?.unwrap_or_else(|| "en".to_string()))
}

pub fn set_language(conn: &Connection, lang: &str) -> Result<()> {
    set_setting(conn, "language", lang)
}

// Cached identity. user_id -1 means signed out, matching the service's
// "not found" sentinel.

pub fn current_user(conn: &Connection) -> Result<Option<User>> {
    let id = match get_setting(conn, "user_id")? {
        Some(v) => v
            .parse::<i64>()
            .with_context(|| format!("Invalid stored user id '{}'", v))?,
        None => -1,
    };
    if id < 0 {
        return Ok(None);
    }
    Ok(Some(User {
        id,
        email: get_setting(conn, "user_email")?.unwrap_or_default(),
        password: String::new(),
        name: get_setting(conn, "user_name")?.unwrap_or_default(),
        surname: get_setting(conn, "user_surname")?.unwrap_or_default(),
    }))
}

pub fn set_current_user(conn: &Connection, user: &User) -> Result<()> {
    set_setting(conn, "user_id", &user.id.to_string())?;
    set_setting(conn, "user_email", &user.email)?;
    set_setting(conn, "user_name", &user.name)?;
    set_setting(conn, "user_surname", &user.surname)?;
    Ok(())
}

pub fn clear_current_user(conn: &Connection) -> Result<()> {
    set_setting(conn, "user_id", "-1")
}

pub fn require_user(conn: &Connection) -> Result<User> {
    current_user(conn)?.context("Not signed in. Run 'outlay auth login' first")
}

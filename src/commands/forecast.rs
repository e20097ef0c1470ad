// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::forecast::project_expenses;
use crate::utils::{fmt_projection, get_currency};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let days = super::period_days(conn, m)?;
    let (_user, total) = super::load_total(conn)?;
    let current = super::period_view(&total, days);

    let expenses = current.expenses();
    let projection = project_expenses(&expenses);
    let ccy = get_currency(conn)?;
    println!(
        "30-day spending forecast (from {} expense operations over the last {} days): {}",
        expenses.len(),
        days,
        fmt_projection(projection, &ccy)
    );
    Ok(())
}

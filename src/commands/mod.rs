// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod auth;
pub mod exporter;
pub mod forecast;
pub mod operations;
pub mod reports;
pub mod settings;

use anyhow::Result;
use rusqlite::Connection;

use crate::api::ApiClient;
use crate::models::User;
use crate::operations::OperationStore;
use crate::utils;

pub(crate) fn client(conn: &Connection) -> Result<ApiClient> {
    Ok(ApiClient::new(utils::get_api_url(conn)?)?)
}

/// Fetches the signed-in user's full history and wraps it in the canonical
/// "total" store. Period views are derived from it per command.
pub(crate) fn load_total(conn: &Connection) -> Result<(User, OperationStore)> {
    let user = utils::require_user(conn)?;
    let ops = client(conn)?.operations(user.id)?;
    Ok((user, OperationStore::new(ops)))
}

pub(crate) fn period_days(conn: &Connection, sub: &clap::ArgMatches) -> Result<u32> {
    match sub.get_one::<u32>("period") {
        Some(days) => Ok(*days),
        None => utils::get_period(conn),
    }
}

pub(crate) fn period_view(total: &OperationStore, days: u32) -> OperationStore {
    OperationStore::new(total.select_within_period(days))
}

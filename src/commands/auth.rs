// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{bail, Result};
use rusqlite::Connection;

use crate::utils::{
    clear_current_user, current_user, require_user, set_current_user, set_setting,
};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("login", sub)) => login(conn, sub)?,
        Some(("register", sub)) => register(conn, sub)?,
        Some(("logout", _)) => {
            clear_current_user(conn)?;
            println!("Signed out.");
        }
        Some(("status", _)) => match current_user(conn)? {
            Some(u) => println!("{} {} <{}> (user id {})", u.name, u.surname, u.email, u.id),
            None => println!("Not signed in."),
        },
        Some(("change-login", sub)) => change_login(conn, sub)?,
        Some(("change-password", sub)) => change_password(conn, sub)?,
        Some(("change-name", sub)) => change_name(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn login(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let email = sub.get_one::<String>("email").unwrap();
    let password = sub.get_one::<String>("password").unwrap();
    let user = super::client(conn)?.user_by_login(email, password)?;
    if user.id < 0 {
        bail!("Invalid email or password");
    }
    set_current_user(conn, &user)?;
    println!("Signed in as {} {} <{}>", user.name, user.surname, user.email);
    Ok(())
}

fn register(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let email = sub.get_one::<String>("email").unwrap();
    let password = sub.get_one::<String>("password").unwrap();
    let name = sub.get_one::<String>("name").unwrap();
    let surname = sub.get_one::<String>("surname").unwrap();
    let api = super::client(conn)?;
    if api.login_exists(email)? {
        bail!("Email '{}' is already registered", email);
    }
    let user = api.register_user(email, password, name, surname)?;
    if user.id < 0 {
        bail!("Registration was rejected by the service");
    }
    set_current_user(conn, &user)?;
    println!("Registered and signed in as {} {} <{}>", user.name, user.surname, user.email);
    Ok(())
}

fn change_login(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let email = sub.get_one::<String>("email").unwrap();
    let user = require_user(conn)?;
    if !super::client(conn)?.change_login(user.id, email)? {
        bail!("Service refused to change the email");
    }
    set_setting(conn, "user_email", email)?;
    println!("Email changed to {}", email);
    Ok(())
}

fn change_password(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let password = sub.get_one::<String>("password").unwrap();
    let user = require_user(conn)?;
    if !super::client(conn)?.change_password(user.id, password)? {
        bail!("Service refused to change the password");
    }
    println!("Password changed.");
    Ok(())
}

fn change_name(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap();
    let surname = sub.get_one::<String>("surname").unwrap();
    let user = require_user(conn)?;
    if !super::client(conn)?.change_name(user.id, name, surname)? {
        bail!("Service refused to change the name");
    }
    set_setting(conn, "user_name", name)?;
    set_setting(conn, "user_surname", surname)?;
    println!("Name changed to {} {}", name, surname);
    Ok(())
}

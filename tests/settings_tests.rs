// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use outlay::models::User;
use outlay::utils;
use rusqlite::Connection;

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE settings(key TEXT PRIMARY KEY, value TEXT NOT NULL);",
    )
    .unwrap();
    conn
}

#[test]
fn unset_keys_fall_back_to_defaults() {
    let conn = setup();
    assert_eq!(utils::get_currency(&conn).unwrap(), "$");
    assert_eq!(utils::get_period(&conn).unwrap(), utils::DEFAULT_PERIOD_DAYS);
    assert_eq!(utils::get_language(&conn).unwrap(), "en");
    assert_eq!(utils::get_api_url(&conn).unwrap(), utils::DEFAULT_API_URL);
    assert!(utils::current_user(&conn).unwrap().is_none());
}

#[test]
fn set_then_get_round_trips() {
    let conn = setup();
    utils::set_currency(&conn, "₽").unwrap();
    utils::set_period(&conn, 7).unwrap();
    utils::set_language(&conn, "ru").unwrap();
    assert_eq!(utils::get_currency(&conn).unwrap(), "₽");
    assert_eq!(utils::get_period(&conn).unwrap(), 7);
    assert_eq!(utils::get_language(&conn).unwrap(), "ru");

    // Overwrites, not duplicates.
    utils::set_period(&conn, 90).unwrap();
    assert_eq!(utils::get_period(&conn).unwrap(), 90);
}

#[test]
fn identity_cache_round_trips_and_clears() {
    let conn = setup();
    let user = User {
        id: 17,
        email: "ada@example.com".into(),
        password: String::new(),
        name: "Ada".into(),
        surname: "Lovelace".into(),
    };
    utils::set_current_user(&conn, &user).unwrap();

    let cached = utils::current_user(&conn).unwrap().unwrap();
    assert_eq!(cached.id, 17);
    assert_eq!(cached.email, "ada@example.com");
    assert_eq!(cached.name, "Ada");
    // Passwords never land in the cache.
    assert!(cached.password.is_empty());

    utils::clear_current_user(&conn).unwrap();
    assert!(utils::current_user(&conn).unwrap().is_none());
    assert!(utils::require_user(&conn).is_err());
}

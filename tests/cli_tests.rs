// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use outlay::cli;

#[test]
fn op_add_accepts_negative_amounts() {
    let matches = cli::build_cli().get_matches_from([
        "outlay", "op", "add", "--amount", "-50", "--category", "Food", "--date", "2025-01-02",
    ]);
    if let Some(("op", op_m)) = matches.subcommand() {
        if let Some(("add", add_m)) = op_m.subcommand() {
            assert_eq!(*add_m.get_one::<i64>("amount").unwrap(), -50);
            assert_eq!(add_m.get_one::<String>("category").unwrap(), "Food");
        } else {
            panic!("no add subcommand");
        }
    } else {
        panic!("no op subcommand");
    }
}

#[test]
fn op_list_defaults_to_all_kinds_and_stored_period() {
    let matches = cli::build_cli().get_matches_from(["outlay", "op", "list"]);
    if let Some(("op", op_m)) = matches.subcommand() {
        if let Some(("list", list_m)) = op_m.subcommand() {
            assert_eq!(list_m.get_one::<String>("kind").unwrap(), "all");
            assert!(list_m.get_one::<u32>("period").is_none());
            assert!(!list_m.get_flag("json"));
        } else {
            panic!("no list subcommand");
        }
    } else {
        panic!("no op subcommand");
    }
}

#[test]
fn report_by_category_requires_a_kind() {
    let res = cli::build_cli().try_get_matches_from(["outlay", "report", "by-category"]);
    assert!(res.is_err());
}

#[test]
fn negative_period_is_rejected_at_the_boundary() {
    let res = cli::build_cli().try_get_matches_from([
        "outlay", "report", "summary", "--period", "-3",
    ]);
    assert!(res.is_err());
}

#[test]
fn export_rejects_unknown_formats() {
    let res = cli::build_cli().try_get_matches_from([
        "outlay",
        "export",
        "operations",
        "--format",
        "xml",
        "--out",
        "ops.xml",
    ]);
    assert!(res.is_err());
}

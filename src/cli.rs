// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{crate_version, value_parser, Arg, ArgAction, Command};

fn period_arg() -> Arg {
    Arg::new("period")
        .long("period")
        .value_parser(value_parser!(u32))
        .help("Rolling window in days (defaults to the stored period setting)")
}

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print pretty JSON instead of a table"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per line"),
    )
}

pub fn build_cli() -> Command {
    Command::new("outlay")
        .version(crate_version!())
        .about("Personal income/expense tracking, category reports, and a 30-day spending forecast")
        .subcommand(Command::new("init").about("Initialize the local settings database"))
        .subcommand(
            Command::new("auth")
                .about("Sign in, register, and manage the account")
                .subcommand(
                    Command::new("login")
                        .about("Sign in and cache the identity locally")
                        .arg(Arg::new("email").long("email").required(true))
                        .arg(Arg::new("password").long("password").required(true)),
                )
                .subcommand(
                    Command::new("register")
                        .about("Create an account and sign in")
                        .arg(Arg::new("email").long("email").required(true))
                        .arg(Arg::new("password").long("password").required(true))
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("surname").long("surname").required(true)),
                )
                .subcommand(Command::new("logout").about("Drop the cached identity"))
                .subcommand(Command::new("status").about("Show the cached identity"))
                .subcommand(
                    Command::new("change-login")
                        .about("Change the account email")
                        .arg(Arg::new("email").long("email").required(true)),
                )
                .subcommand(
                    Command::new("change-password")
                        .about("Change the account password")
                        .arg(Arg::new("password").long("password").required(true)),
                )
                .subcommand(
                    Command::new("change-name")
                        .about("Change the account name")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("surname").long("surname").required(true)),
                ),
        )
        .subcommand(
            Command::new("op")
                .about("Record and list operations")
                .subcommand(
                    Command::new("add")
                        .about("Record an operation (positive amount = income, negative = expense)")
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .required(true)
                                .allow_hyphen_values(true)
                                .value_parser(value_parser!(i64)),
                        )
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(Arg::new("date").long("date").required(true).help("YYYY-MM-DD")),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete an operation by id, or by date + amount + category")
                        .arg(Arg::new("id").long("id").value_parser(value_parser!(i64)))
                        .arg(Arg::new("date").long("date").help("YYYY-MM-DD"))
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .allow_hyphen_values(true)
                                .value_parser(value_parser!(i64)),
                        )
                        .arg(Arg::new("category").long("category")),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List operations, newest first")
                        .arg(period_arg())
                        .arg(
                            Arg::new("kind")
                                .long("kind")
                                .value_parser(["incomes", "expenses", "all"])
                                .default_value("all"),
                        )
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .help("Only operations in this category"),
                        ),
                )),
        )
        .subcommand(
            Command::new("report")
                .about("Aggregated views over the period")
                .subcommand(
                    Command::new("summary")
                        .about("Total incomes, total expenses, and net balance")
                        .arg(period_arg()),
                )
                .subcommand(json_flags(
                    Command::new("by-category")
                        .about("Per-category operation counts and sums")
                        .arg(
                            Arg::new("kind")
                                .long("kind")
                                .required(true)
                                .value_parser(["incomes", "expenses"]),
                        )
                        .arg(period_arg()),
                ))
                .subcommand(json_flags(
                    Command::new("cashflow")
                        .about("Per-date income and expense sums")
                        .arg(period_arg()),
                )),
        )
        .subcommand(
            Command::new("forecast")
                .about("Project the next 30 days of spending from the period's expenses")
                .arg(period_arg()),
        )
        .subcommand(
            Command::new("export")
                .about("Export operations to a file")
                .subcommand(
                    Command::new("operations")
                        .about("Write operations as CSV or JSON")
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .value_parser(["csv", "json"])
                                .default_value("csv"),
                        )
                        .arg(Arg::new("out").long("out").required(true))
                        .arg(
                            Arg::new("kind")
                                .long("kind")
                                .value_parser(["incomes", "expenses", "all"])
                                .default_value("all"),
                        )
                        .arg(period_arg()),
                ),
        )
        .subcommand(
            Command::new("settings")
                .about("Local display and service settings")
                .subcommand(Command::new("show").about("Show the effective settings"))
                .subcommand(
                    Command::new("set-currency")
                        .about("Set the display currency symbol")
                        .arg(Arg::new("currency").required(true)),
                )
                .subcommand(
                    Command::new("set-period")
                        .about("Set the default rolling window in days")
                        .arg(Arg::new("days").required(true).value_parser(value_parser!(u32))),
                )
                .subcommand(
                    Command::new("set-language")
                        .about("Set the category label language")
                        .arg(Arg::new("language").required(true).value_parser(["en", "ru"])),
                )
                .subcommand(
                    Command::new("set-url")
                        .about("Set the persistence service base URL")
                        .arg(Arg::new("url").required(true)),
                ),
        )
}

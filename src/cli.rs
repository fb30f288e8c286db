// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{value_parser, Arg, ArgAction, Command};

fn json_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per line"),
    )
}

fn month_arg() -> Arg {
    Arg::new("month")
        .long("month")
        .value_name("YYYY-MM")
        .help("Month prefix to filter on")
}

pub fn build_cli() -> Command {
    Command::new("pitaka")
        .version(clap::crate_version!())
        .about("Local personal finance ledger with installment tracking")
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .value_name("PATH")
                .help("SQLite database path (overrides PITAKA_DB)"),
        )
        .subcommand(
            Command::new("login")
                .about("Sign in with a Gmail address")
                .arg(Arg::new("email").long("email").required(true)),
        )
        .subcommand(Command::new("logout").about("Sign out, keeping stored data"))
        .subcommand(Command::new("whoami").about("Show the signed-in user"))
        .subcommand(
            Command::new("tx")
                .about("Record and manage transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .default_value("expense")
                                .help("income|expense|savings|savings-withdrawal"),
                        )
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(
                            Arg::new("method")
                                .long("method")
                                .default_value("cash")
                                .help("cash|debit|credit"),
                        )
                        .arg(Arg::new("bank").long("bank").help("Credit card issuer"))
                        .arg(
                            Arg::new("statement-date")
                                .long("statement-date")
                                .value_name("YYYY-MM-DD"),
                        )
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .value_name("YYYY-MM-DD")
                                .help("Defaults to today"),
                        )
                        .arg(
                            Arg::new("accounting")
                                .long("accounting")
                                .default_value("none")
                                .help("none|asset|liability"),
                        )
                        .arg(Arg::new("description").long("description"))
                        .arg(
                            Arg::new("installment-months")
                                .long("installment-months")
                                .value_parser(value_parser!(u32).range(1..=36))
                                .help("Split a credit purchase over N months (at most 36)"),
                        ),
                )
                .subcommand(json_args(
                    Command::new("list")
                        .about("List transactions, newest submission first")
                        .arg(month_arg())
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Remove a transaction by id")
                        .arg(Arg::new("id").long("id").required(true)),
                )
                .subcommand(
                    Command::new("clear")
                        .about("Remove every transaction for the signed-in user")
                        .arg(
                            Arg::new("yes")
                                .long("yes")
                                .action(ArgAction::SetTrue)
                                .help("Skip the confirmation prompt"),
                        ),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Aggregated figures")
                .subcommand(json_args(
                    Command::new("summary").about("Lifetime totals and balance sheet"),
                ))
                .subcommand(json_args(
                    Command::new("month")
                        .about("Income, expenses and savings for one month")
                        .arg(month_arg()),
                ))
                .subcommand(json_args(
                    Command::new("by-category").about("Expenses per category"),
                ))
                .subcommand(json_args(
                    Command::new("by-bank").about("Credit card spending per bank"),
                )),
        )
        .subcommand(Command::new("banks").about("List suggested bank names"))
        .subcommand(
            Command::new("export")
                .about("Export data")
                .subcommand(
                    Command::new("transactions")
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .required(true)
                                .help("csv|json"),
                        )
                        .arg(Arg::new("out").long("out").required(true)),
                ),
        )
}

// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print one JSON document per line"),
    )
}

fn month_arg() -> Arg {
    Arg::new("month")
        .long("month")
        .help("YYYY-MM, or 'all' for the whole history")
}

fn id_arg() -> Arg {
    Arg::new("id").long("id").required(true)
}

fn record_args(cmd: Command) -> Command {
    cmd.arg(Arg::new("amount").long("amount").required(true))
        .arg(Arg::new("description").long("description").required(true))
        .arg(Arg::new("date").long("date").help("YYYY-MM-DD (default: now)"))
        .arg(
            Arg::new("payment-method")
                .long("payment-method")
                .default_value("Efectivo"),
        )
        .arg(
            Arg::new("currency")
                .long("currency")
                .help("ISO 4217 code (default: configured currency)"),
        )
}

/// Same fields as `record_args`, all optional and without defaults.
fn edit_args(cmd: Command) -> Command {
    cmd.arg(id_arg())
        .arg(Arg::new("amount").long("amount"))
        .arg(Arg::new("description").long("description"))
        .arg(Arg::new("date").long("date").help("YYYY-MM-DD"))
        .arg(Arg::new("payment-method").long("payment-method"))
        .arg(Arg::new("currency").long("currency"))
}

pub fn build_cli() -> Command {
    Command::new("fintrack")
        .about("Expense, income and savings-goal dashboards over a REST ledger")
        .version(clap::crate_version!())
        .subcommand(
            json_flags(Command::new("summary").about("KPIs, breakdown, goals, activity and tips"))
                .arg(month_arg())
                .arg(
                    Arg::new("year")
                        .long("year")
                        .value_parser(value_parser!(i32))
                        .help("Year of the income vs expenses series (default: current)"),
                ),
        )
        .subcommand(
            json_flags(Command::new("chart").about("Monthly income vs expenses for one year")).arg(
                Arg::new("year")
                    .long("year")
                    .value_parser(value_parser!(i32)),
            ),
        )
        .subcommand(
            json_flags(Command::new("activity").about("Most recent expenses and incomes"))
                .arg(month_arg())
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .value_parser(value_parser!(usize)),
                ),
        )
        .subcommand(
            Command::new("expense")
                .about("Manage expenses")
                .subcommand(
                    record_args(Command::new("add"))
                        .arg(Arg::new("category").long("category").required(true)),
                )
                .subcommand(
                    edit_args(Command::new("edit").about("Change fields of an expense"))
                        .arg(Arg::new("category").long("category")),
                )
                .subcommand(
                    json_flags(Command::new("list"))
                        .arg(month_arg())
                        .arg(Arg::new("category").long("category"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                )
                .subcommand(Command::new("delete").arg(id_arg())),
        )
        .subcommand(
            Command::new("income")
                .about("Manage incomes")
                .subcommand(
                    record_args(Command::new("add"))
                        .arg(Arg::new("source").long("source").required(true)),
                )
                .subcommand(
                    edit_args(Command::new("edit").about("Change fields of an income"))
                        .arg(Arg::new("source").long("source")),
                )
                .subcommand(json_flags(Command::new("list")).arg(month_arg()))
                .subcommand(Command::new("delete").arg(id_arg())),
        )
        .subcommand(
            Command::new("goal")
                .about("Manage savings goals")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("target").long("target").required(true))
                        .arg(Arg::new("current").long("current").default_value("0"))
                        .arg(Arg::new("deadline").long("deadline").required(true))
                        .arg(Arg::new("category").long("category").default_value("Metas")),
                )
                .subcommand(json_flags(Command::new("list")))
                .subcommand(
                    Command::new("contribute")
                        .arg(id_arg())
                        .arg(Arg::new("amount").long("amount").required(true)),
                )
                .subcommand(json_flags(Command::new("history")).arg(id_arg()))
                .subcommand(Command::new("delete").arg(id_arg())),
        )
        .subcommand(
            Command::new("export")
                .about("Write the merged activity ledger to a file")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .value_parser(["csv", "json"])
                        .default_value("csv"),
                )
                .arg(Arg::new("out").long("out").required(true))
                .arg(month_arg()),
        )
        .subcommand(Command::new("config").about("Show effective settings"))
}

// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{crate_version, Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print output as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print output as JSON lines"),
    )
}

fn transaction_payload_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("date")
            .long("date")
            .value_name("YYYY-MM-DD")
            .help("Transaction date (defaults to today)"),
    )
    .arg(
        Arg::new("description")
            .long("description")
            .required(true)
            .value_name("TEXT"),
    )
    .arg(
        Arg::new("amount")
            .long("amount")
            .required(true)
            .value_name("DECIMAL"),
    )
    .arg(
        Arg::new("type")
            .long("type")
            .value_name("income|expense")
            .default_value("expense"),
    )
    .arg(
        Arg::new("category")
            .long("category")
            .required(true)
            .value_name("NAME"),
    )
    .arg(
        Arg::new("payment")
            .long("payment")
            .value_name("cash|credit_card")
            .default_value("cash"),
    )
    .arg(
        Arg::new("card")
            .long("card")
            .value_name("CARD_ID")
            .help("Card reference, required with --payment credit_card"),
    )
    .arg(
        Arg::new("status")
            .long("status")
            .value_name("paid|pending|canceled")
            .default_value("pending"),
    )
}

pub fn build_cli() -> Command {
    Command::new("benyfin")
        .about("Track income, expenses, cards, and recurring bills against a BenyFinance server")
        .version(crate_version!())
        .subcommand(
            Command::new("login")
                .about("Authenticate and store the session token")
                .arg(Arg::new("email").long("email").required(true))
                .arg(Arg::new("password").long("password").required(true)),
        )
        .subcommand(
            Command::new("register")
                .about("Create an account and store the session token")
                .arg(Arg::new("name").long("name").required(true))
                .arg(Arg::new("email").long("email").required(true))
                .arg(Arg::new("password").long("password").required(true)),
        )
        .subcommand(Command::new("logout").about("Forget the stored session token"))
        .subcommand(json_flags(
            Command::new("dashboard")
                .about("Monthly overview: balance, trend, category spend, recent entries")
                .arg(
                    Arg::new("month")
                        .long("month")
                        .value_name("YYYY-MM")
                        .help("Target month (defaults to the current month)"),
                ),
        ))
        .subcommand(
            Command::new("tx")
                .about("Manage transactions")
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List transactions with filters, sorting, and paging")
                        .arg(
                            Arg::new("month")
                                .long("month")
                                .value_name("YYYY-MM")
                                .help("Ask the server for a single month up front"),
                        )
                        .arg(Arg::new("search").long("search").value_name("TEXT"))
                        .arg(Arg::new("type").long("type").value_name("income|expense"))
                        .arg(Arg::new("category").long("category").value_name("NAME"))
                        .arg(
                            Arg::new("payment")
                                .long("payment")
                                .value_name("cash|credit_card"),
                        )
                        .arg(
                            Arg::new("status")
                                .long("status")
                                .value_name("paid|pending|canceled"),
                        )
                        .arg(Arg::new("from").long("from").value_name("YYYY-MM-DD"))
                        .arg(Arg::new("to").long("to").value_name("YYYY-MM-DD"))
                        .arg(Arg::new("min").long("min").value_name("DECIMAL"))
                        .arg(Arg::new("max").long("max").value_name("DECIMAL"))
                        .arg(
                            Arg::new("sort")
                                .long("sort")
                                .value_name("KEY")
                                .default_value("date")
                                .help("date|amount|status|payment|description|category"),
                        )
                        .arg(
                            Arg::new("dir")
                                .long("dir")
                                .value_name("asc|desc")
                                .default_value("desc"),
                        )
                        .arg(
                            Arg::new("page")
                                .long("page")
                                .value_parser(clap::value_parser!(u64).range(1..))
                                .default_value("1"),
                        )
                        .arg(
                            Arg::new("page-size")
                                .long("page-size")
                                .value_parser(clap::value_parser!(u64).range(1..))
                                .default_value("20"),
                        ),
                ))
                .subcommand(transaction_payload_args(
                    Command::new("add").about("Record a new transaction"),
                ))
                .subcommand(transaction_payload_args(
                    Command::new("edit")
                        .about("Replace a transaction")
                        .arg(Arg::new("id").required(true)),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Delete a transaction")
                        .arg(Arg::new("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("category")
                .about("Manage categories")
                .subcommand(json_flags(Command::new("list")))
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(
                            Arg::new("color")
                                .long("color")
                                .value_name("#RRGGBB")
                                .default_value("#6b7280"),
                        ),
                )
                .subcommand(
                    Command::new("edit")
                        .about("Rename or recolor a category (best-effort)")
                        .arg(Arg::new("id").required(true))
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(
                            Arg::new("color")
                                .long("color")
                                .value_name("#RRGGBB")
                                .required(true),
                        ),
                )
                .subcommand(Command::new("rm").arg(Arg::new("id").required(true))),
        )
        .subcommand(
            Command::new("card")
                .about("Manage credit cards")
                .subcommand(json_flags(Command::new("list")))
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("bank").long("bank").required(true))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .required(true)
                                .value_name("DECIMAL"),
                        )
                        .arg(
                            Arg::new("closing-day")
                                .long("closing-day")
                                .required(true)
                                .value_parser(clap::value_parser!(u32).range(1..=31)),
                        )
                        .arg(
                            Arg::new("due-day")
                                .long("due-day")
                                .required(true)
                                .value_parser(clap::value_parser!(u32).range(1..=31)),
                        ),
                )
                .subcommand(Command::new("rm").arg(Arg::new("id").required(true))),
        )
        .subcommand(
            Command::new("recurring")
                .about("Manage recurring bill templates")
                .subcommand(json_flags(Command::new("list")))
                .subcommand(
                    Command::new("add")
                        .arg(
                            Arg::new("description")
                                .long("description")
                                .required(true),
                        )
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .required(true)
                                .value_name("DECIMAL"),
                        )
                        .arg(Arg::new("category").long("category").required(true)),
                )
                .subcommand(Command::new("rm").arg(Arg::new("id").required(true)))
                .subcommand(json_flags(
                    Command::new("generate")
                        .about("Create this month's pending bills from the templates")
                        .arg(
                            Arg::new("month")
                                .long("month")
                                .value_name("YYYY-MM")
                                .help("Target month (defaults to the current month)"),
                        )
                        .arg(
                            Arg::new("dry-run")
                                .long("dry-run")
                                .action(ArgAction::SetTrue)
                                .help("Show what would be created without calling the server"),
                        ),
                )),
        )
        .subcommand(
            Command::new("export").about("Export data").subcommand(
                Command::new("transactions")
                    .arg(
                        Arg::new("format")
                            .long("format")
                            .value_name("csv|json")
                            .default_value("csv"),
                    )
                    .arg(
                        Arg::new("out")
                            .long("out")
                            .required(true)
                            .value_name("FILE"),
                    )
                    .arg(
                        Arg::new("month")
                            .long("month")
                            .value_name("YYYY-MM")
                            .help("Restrict the export to one month"),
                    )
                    .arg(Arg::new("type").long("type").value_name("income|expense")),
            ),
        )
        .subcommand(Command::new("doctor").about("Check the server data for inconsistencies"))
}

// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use pitaka::config::{Config, LOG_ENV};
use pitaka::session::Session;
use pitaka::store::SqliteStore;
use pitaka::{cli, commands, db};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let config = Config::resolve(matches.get_one::<String>("db").map(String::as_str))?;
    let conn = db::open_or_init(&config.db_path)?;
    let mut session = Session::open(SqliteStore::new(conn))?;

    match matches.subcommand() {
        Some(("login", sub)) => commands::login::login(&mut session, sub)?,
        Some(("logout", _)) => commands::login::logout(&mut session)?,
        Some(("whoami", _)) => commands::login::whoami(&session)?,
        Some(("tx", sub)) => commands::transactions::handle(&mut session, sub)?,
        Some(("report", sub)) => commands::reports::handle(&session, sub)?,
        Some(("banks", _)) => commands::banks::handle()?,
        Some(("export", sub)) => commands::exporter::handle(&session, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}

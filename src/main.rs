// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use fintrack::api::ApiClient;
use fintrack::config::Settings;
use fintrack::{cli, commands};

fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let settings = Settings::load()?;

    if let Some(("config", _)) = matches.subcommand() {
        return commands::settings::handle(&settings);
    }

    let client = ApiClient::new(&settings)?;
    tracing::debug!(api = client.base_url(), "using ledger API");

    match matches.subcommand() {
        Some(("summary", sub)) => commands::summary::handle(&client, &settings, sub)?,
        Some(("chart", sub)) => commands::chart::handle(&client, &settings, sub)?,
        Some(("activity", sub)) => commands::activity::handle(&client, &settings, sub)?,
        Some(("expense", sub)) => commands::expenses::handle(&client, &settings, sub)?,
        Some(("income", sub)) => commands::incomes::handle(&client, &settings, sub)?,
        Some(("goal", sub)) => commands::goals::handle(&client, &settings, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&client, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}

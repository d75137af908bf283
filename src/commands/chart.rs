// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::fetch_snapshot;
use crate::api::DataSource;
use crate::config::Settings;
use crate::engine::{MonthlyPoint, income_vs_expenses};
use crate::format::format_currency;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;
use chrono::{Datelike, Utc};

pub fn handle(source: &dyn DataSource, settings: &Settings, m: &clap::ArgMatches) -> Result<()> {
    let year = m
        .get_one::<i32>("year")
        .copied()
        .unwrap_or(Utc::now().year());
    let series = query(source, year)?;
    if !maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &series)? {
        let rows = series
            .iter()
            .map(|p| {
                vec![
                    p.label.to_string(),
                    format_currency(p.income, settings),
                    format_currency(p.expenses, settings),
                    format_currency(p.income - p.expenses, settings),
                ]
            })
            .collect();
        println!("Income vs expenses, {}", year);
        println!(
            "{}",
            pretty_table(&["Month", "Income", "Expenses", "Net"], rows)
        );
    }
    Ok(())
}

pub fn query(source: &dyn DataSource, year: i32) -> Result<Vec<MonthlyPoint>> {
    let snapshot = fetch_snapshot(source)?;
    Ok(income_vs_expenses(&snapshot.expenses, &snapshot.incomes, year)?)
}

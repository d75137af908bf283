// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{fetch_snapshot, month_filter};
use crate::api::DataSource;
use crate::config::Settings;
use crate::engine::{Activity, ActivityKind, MonthFilter, filter_by_month, recent_transactions};
use crate::format::format_currency;
use crate::models::Record;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(source: &dyn DataSource, settings: &Settings, m: &clap::ArgMatches) -> Result<()> {
    let rows = query(source, settings, m)?;
    if !maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &rows)? {
        print_activity(&rows, settings);
    }
    Ok(())
}

pub fn query(source: &dyn DataSource, settings: &Settings, m: &clap::ArgMatches) -> Result<Vec<Activity>> {
    let month = month_filter(m, MonthFilter::All)?;
    let limit = m
        .get_one::<usize>("limit")
        .copied()
        .unwrap_or(settings.recent_limit);
    let snapshot = fetch_snapshot(source)?;
    let expenses = filter_by_month(&snapshot.expenses, &month);
    let incomes = filter_by_month(&snapshot.incomes, &month);
    Ok(recent_transactions(&expenses, &incomes, limit))
}

pub fn print_activity(rows: &[Activity], settings: &Settings) {
    if rows.is_empty() {
        println!("No recent activity.");
        return;
    }
    let data = rows
        .iter()
        .map(|a| {
            let sign = match a.kind() {
                ActivityKind::Income => "+",
                ActivityKind::Expense => "-",
            };
            vec![
                a.date().format("%Y-%m-%d").to_string(),
                a.kind().as_str().to_string(),
                a.description().to_string(),
                a.label().to_string(),
                a.payment_method().to_string(),
                format!("{}{}", sign, format_currency(a.amount(), settings)),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Date", "Type", "Description", "Category", "Method", "Amount"],
            data
        )
    );
}

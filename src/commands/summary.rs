// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{fetch_snapshot, metric_cell, month_filter};
use crate::api::DataSource;
use crate::config::Settings;
use crate::engine::insights::EMPTY_STATE_MESSAGE;
use crate::engine::{Dashboard, MonthFilter, dominant_label};
use crate::format::{format_currency, format_percent};
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;
use chrono::{DateTime, Datelike, Utc};

pub fn handle(source: &dyn DataSource, settings: &Settings, m: &clap::ArgMatches) -> Result<()> {
    let dash = build(source, settings, m, Utc::now())?;
    if !maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &dash)? {
        render(&dash, settings);
    }
    Ok(())
}

/// Defaults to the month and year of `now`.
pub fn build(
    source: &dyn DataSource,
    settings: &Settings,
    m: &clap::ArgMatches,
    now: DateTime<Utc>,
) -> Result<Dashboard> {
    let month = month_filter(m, MonthFilter::current(now))?;
    let year = m.get_one::<i32>("year").copied().unwrap_or(now.year());
    let snapshot = fetch_snapshot(source)?;
    tracing::debug!(
        expenses = snapshot.expenses.len(),
        incomes = snapshot.incomes.len(),
        goals = snapshot.goals.len(),
        %month,
        "computing dashboard"
    );
    Ok(Dashboard::compute(&snapshot, month, year, settings.recent_limit))
}

fn render(dash: &Dashboard, settings: &Settings) {
    let money = |d: &rust_decimal::Decimal| format_currency(*d, settings);

    println!("Summary for {}", dash.month);
    println!(
        "{}",
        pretty_table(
            &["Balance", "Income", "Expenses", "Savings"],
            vec![vec![
                metric_cell(&dash.balance, money),
                metric_cell(&dash.total_income, money),
                metric_cell(&dash.total_expense, money),
                metric_cell(&dash.savings_rate, |r| format_percent(*r)),
            ]],
        )
    );

    let categories = match dash.expenses_by_category.value() {
        Some(shares) => shares
            .iter()
            .map(|s| vec![s.category.to_string(), money(&s.amount), format_percent(s.share)])
            .collect(),
        None => vec![vec![
            metric_cell(&dash.expenses_by_category, |_| String::new()),
            String::new(),
            String::new(),
        ]],
    };
    println!("{} transactions", dash.expense_count);
    println!("{}", pretty_table(&["Category", "Spent", "Share"], categories));
    println!(
        "Top category: {}   Main income source: {}",
        metric_cell(&dash.top_category, |c| dominant_label(c.as_ref())),
        metric_cell(&dash.main_income_source, |s| dominant_label(s.as_ref())),
    );

    if dash.goals.cards.is_empty() {
        println!("No savings goals yet.");
    } else {
        let rows = dash
            .goals
            .cards
            .iter()
            .map(|g| {
                vec![
                    g.name.clone(),
                    metric_cell(&g.progress, |p| format!("{:.0}%", p.round_dp(0))),
                    metric_cell(&g.remaining, money),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Goal", "Progress", "Remaining"], rows));
        if dash.goals.more > 0 {
            println!("+ {} more goals (fintrack goal list)", dash.goals.more);
        }
    }

    super::activity::print_activity(&dash.recent, settings);

    match dash.insights.value() {
        Some(list) if list.is_empty() => println!("{}", EMPTY_STATE_MESSAGE),
        Some(list) => {
            for insight in list {
                println!("* {}: {}", insight.title(), insight);
            }
        }
        None => println!("{}", metric_cell(&dash.insights, |_| String::new())),
    }
}

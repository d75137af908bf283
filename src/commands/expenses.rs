// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{fetch_snapshot, month_filter};
use crate::api::{DataSource, find_expense};
use crate::config::Settings;
use crate::engine::{MonthFilter, dominant_key, dominant_label, filter_by_month, group_totals, total_amount};
use crate::format::format_currency;
use crate::models::{Expense, ExpenseCategory, NewExpense};
use crate::utils::{maybe_print_json, parse_amount, parse_date, pretty_table};
use anyhow::{Context, Result, anyhow};
use chrono::Utc;

pub fn handle(source: &dyn DataSource, settings: &Settings, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(source, settings, sub)?,
        Some(("edit", sub)) => edit(source, settings, sub)?,
        Some(("list", sub)) => list(source, settings, sub)?,
        Some(("delete", sub)) => delete(source, sub)?,
        _ => {}
    }
    Ok(())
}

pub fn new_expense(settings: &Settings, sub: &clap::ArgMatches) -> Result<NewExpense> {
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let category = sub
        .get_one::<String>("category")
        .unwrap()
        .parse::<ExpenseCategory>()
        .map_err(|e| anyhow!(e))?;
    let date = match sub.get_one::<String>("date") {
        Some(d) => parse_date(d)?,
        None => Utc::now(),
    };
    let currency = sub
        .get_one::<String>("currency")
        .map(|c| c.trim().to_uppercase())
        .unwrap_or_else(|| settings.currency.clone());
    Ok(NewExpense {
        amount,
        currency,
        description: sub.get_one::<String>("description").unwrap().trim().to_string(),
        category,
        date,
        payment_method: sub.get_one::<String>("payment-method").unwrap().to_string(),
    })
}

fn add(source: &dyn DataSource, settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let new = new_expense(settings, sub)?;
    let created = source.create_expense(&new).context("Could not record expense")?;
    tracing::info!(id = %created.id, amount = %created.amount, "expense recorded");
    println!(
        "Recorded expense {} of {} in {} ({})",
        created.id,
        format_currency(created.amount, settings),
        created.category,
        created.description
    );
    Ok(())
}

/// `current` with the fields given on the command line replaced.
pub fn edited_expense(current: &Expense, sub: &clap::ArgMatches) -> Result<NewExpense> {
    let mut next = NewExpense::from(current.clone());
    if let Some(a) = sub.get_one::<String>("amount") {
        next.amount = parse_amount(a)?;
    }
    if let Some(d) = sub.get_one::<String>("description") {
        next.description = d.trim().to_string();
    }
    if let Some(c) = sub.get_one::<String>("category") {
        next.category = c.parse::<ExpenseCategory>().map_err(|e| anyhow!(e))?;
    }
    if let Some(d) = sub.get_one::<String>("date") {
        next.date = parse_date(d)?;
    }
    if let Some(p) = sub.get_one::<String>("payment-method") {
        next.payment_method = p.trim().to_string();
    }
    if let Some(c) = sub.get_one::<String>("currency") {
        next.currency = c.trim().to_uppercase();
    }
    Ok(next)
}

/// Writes the edit; `None` when the flags leave the expense unchanged.
pub fn update(source: &dyn DataSource, sub: &clap::ArgMatches) -> Result<Option<Expense>> {
    let id = sub.get_one::<String>("id").unwrap();
    let current = find_expense(source, id)?;
    let next = edited_expense(&current, sub)?;
    if next == NewExpense::from(current) {
        return Ok(None);
    }
    let updated = source
        .update_expense(id, &next)
        .with_context(|| format!("Could not update expense '{}'", id))?;
    tracing::info!(id = %updated.id, "expense updated");
    Ok(Some(updated))
}

fn edit(source: &dyn DataSource, settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let Some(updated) = update(source, sub)? else {
        println!("Nothing to change for expense {}", sub.get_one::<String>("id").unwrap());
        return Ok(());
    };
    println!(
        "Updated expense {}: {} in {} ({})",
        updated.id,
        format_currency(updated.amount, settings),
        updated.category,
        updated.description
    );
    Ok(())
}

/// Newest first, optionally narrowed by month and category and cut to `--limit`.
pub fn query_rows(source: &dyn DataSource, sub: &clap::ArgMatches) -> Result<Vec<Expense>> {
    let month = month_filter(sub, MonthFilter::All)?;
    let category = match sub.get_one::<String>("category") {
        Some(c) => Some(c.parse::<ExpenseCategory>().map_err(|e| anyhow!(e))?),
        None => None,
    };
    let snapshot = fetch_snapshot(source)?;
    let mut rows: Vec<Expense> = filter_by_month(&snapshot.expenses, &month)
        .into_iter()
        .filter(|e| category.is_none_or(|c| e.category == c))
        .collect();
    rows.sort_by(|a, b| b.date.cmp(&a.date));
    if let Some(limit) = sub.get_one::<usize>("limit") {
        rows.truncate(*limit);
    }
    Ok(rows)
}

fn list(source: &dyn DataSource, settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let data = query_rows(source, sub)?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        return Ok(());
    }
    let rows: Vec<Vec<String>> = data
        .iter()
        .map(|e| {
            vec![
                e.id.clone(),
                e.date.format("%Y-%m-%d").to_string(),
                e.description.clone(),
                e.category.to_string(),
                e.payment_method.clone(),
                format_currency(e.amount, settings),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Id", "Date", "Description", "Category", "Method", "Amount"],
            rows,
        )
    );
    let total = total_amount(&data)?;
    let top = dominant_key(&group_totals(&data, |e| e.category)?);
    println!(
        "Total: {}   Top category: {}",
        format_currency(total, settings),
        dominant_label(top)
    );
    Ok(())
}

fn delete(source: &dyn DataSource, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    source
        .delete_expense(id)
        .with_context(|| format!("Could not delete expense '{}'", id))?;
    println!("Deleted expense {}", id);
    Ok(())
}

// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{fetch_snapshot, month_filter};
use crate::api::{DataSource, find_income};
use crate::config::Settings;
use crate::engine::{MonthFilter, dominant_key, dominant_label, filter_by_month, group_totals, total_amount};
use crate::format::format_currency;
use crate::models::{Income, IncomeSource, NewIncome};
use crate::utils::{maybe_print_json, parse_amount, parse_date, pretty_table};
use anyhow::{Context, Result, anyhow};
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Serialize;

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

fn add(source: &dyn DataSource, settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let income_source = sub
        .get_one::<String>("source")
        .unwrap()
        .parse::<IncomeSource>()
        .map_err(|e| anyhow!(e))?;
    let date = match sub.get_one::<String>("date") {
        Some(d) => parse_date(d)?,
        None => Utc::now(),
    };
    let new = NewIncome {
        amount,
        currency: sub
            .get_one::<String>("currency")
            .map(|c| c.trim().to_uppercase())
            .unwrap_or_else(|| settings.currency.clone()),
        description: sub.get_one::<String>("description").unwrap().trim().to_string(),
        source: income_source,
        date,
        payment_method: sub.get_one::<String>("payment-method").unwrap().to_string(),
    };
    let created = source.create_income(&new).context("Could not record income")?;
    tracing::info!(id = %created.id, amount = %created.amount, "income recorded");
    println!(
        "Recorded income {} of {} from {}",
        created.id,
        format_currency(created.amount, settings),
        created.source
    );
    Ok(())
}

/// `current` with the fields given on the command line replaced.
pub fn edited_income(current: &Income, sub: &clap::ArgMatches) -> Result<NewIncome> {
    let mut next = NewIncome::from(current.clone());
    if let Some(a) = sub.get_one::<String>("amount") {
        next.amount = parse_amount(a)?;
    }
    if let Some(d) = sub.get_one::<String>("description") {
        next.description = d.trim().to_string();
    }
    if let Some(s) = sub.get_one::<String>("source") {
        next.source = s.parse::<IncomeSource>().map_err(|e| anyhow!(e))?;
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

/// Writes the edit; `None` when the flags leave the income unchanged.
pub fn update(source: &dyn DataSource, sub: &clap::ArgMatches) -> Result<Option<Income>> {
    let id = sub.get_one::<String>("id").unwrap();
    let current = find_income(source, id)?;
    let next = edited_income(&current, sub)?;
    if next == NewIncome::from(current) {
        return Ok(None);
    }
    let updated = source
        .update_income(id, &next)
        .with_context(|| format!("Could not update income '{}'", id))?;
    tracing::info!(id = %updated.id, "income updated");
    Ok(Some(updated))
}

fn edit(source: &dyn DataSource, settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let Some(updated) = update(source, sub)? else {
        println!("Nothing to change for income {}", sub.get_one::<String>("id").unwrap());
        return Ok(());
    };
    println!(
        "Updated income {}: {} from {}",
        updated.id,
        format_currency(updated.amount, settings),
        updated.source
    );
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct IncomeListing {
    pub incomes: Vec<Income>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub main_source: String,
}

pub fn query(source: &dyn DataSource, sub: &clap::ArgMatches) -> Result<IncomeListing> {
    let month = month_filter(sub, MonthFilter::All)?;
    let snapshot = fetch_snapshot(source)?;
    let mut incomes = filter_by_month(&snapshot.incomes, &month);
    incomes.sort_by(|a, b| b.date.cmp(&a.date));
    let total = total_amount(&incomes)?;
    let main_source = dominant_label(dominant_key(&group_totals(&incomes, |i| i.source)?));
    Ok(IncomeListing {
        incomes,
        total,
        main_source,
    })
}

fn list(source: &dyn DataSource, settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let listing = query(source, sub)?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &listing)? {
        return Ok(());
    }
    let rows: Vec<Vec<String>> = listing
        .incomes
        .iter()
        .map(|i| {
            vec![
                i.id.clone(),
                i.date.format("%Y-%m-%d").to_string(),
                i.description.clone(),
                i.source.to_string(),
                i.payment_method.clone(),
                format_currency(i.amount, settings),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Id", "Date", "Description", "Source", "Method", "Amount"], rows)
    );
    println!(
        "Total: {}   Main source: {}",
        format_currency(listing.total, settings),
        listing.main_source
    );
    Ok(())
}

fn delete(source: &dyn DataSource, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    source
        .delete_income(id)
        .with_context(|| format!("Could not delete income '{}'", id))?;
    println!("Deleted income {}", id);
    Ok(())
}

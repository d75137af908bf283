// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{fetch_snapshot, metric_cell};
use crate::api::{DataSource, find_goal};
use crate::config::Settings;
use crate::contribution::{GoalContribution, contribute as contribute_to_goal, contributions_for_goal};
use crate::engine::{GoalCard, Metric, goal_progress, goal_remaining};
use crate::format::format_currency;
use crate::models::{Goal, NewGoal};
use crate::utils::{maybe_print_json, parse_amount, parse_date, parse_decimal, pretty_table};
use anyhow::{Context, Result, bail};
use chrono::Utc;
use rust_decimal::Decimal;

pub fn handle(source: &dyn DataSource, settings: &Settings, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(source, settings, sub)?,
        Some(("list", sub)) => list(source, settings, sub)?,
        Some(("contribute", sub)) => contribute(source, settings, sub)?,
        Some(("history", sub)) => history(source, settings, sub)?,
        Some(("delete", sub)) => delete(source, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(source: &dyn DataSource, settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let target_amount = parse_amount(sub.get_one::<String>("target").unwrap())?;
    let current_amount = parse_decimal(sub.get_one::<String>("current").unwrap())?;
    if current_amount < Decimal::ZERO {
        bail!("Saved amount cannot be negative");
    }
    let new = NewGoal {
        name: sub.get_one::<String>("name").unwrap().trim().to_string(),
        target_amount,
        current_amount,
        deadline: parse_date(sub.get_one::<String>("deadline").unwrap())?,
        category: sub.get_one::<String>("category").unwrap().trim().to_string(),
    };
    let goal = source.create_goal(&new).context("Could not create goal")?;
    println!(
        "Created goal {} '{}' targeting {}",
        goal.id,
        goal.name,
        format_currency(goal.target_amount, settings)
    );
    Ok(())
}

pub fn cards(source: &dyn DataSource) -> Result<Vec<GoalCard>> {
    let goals = source.list_goals().context("Could not load goals")?;
    Ok(goals.iter().map(GoalCard::from_goal).collect())
}

fn list(source: &dyn DataSource, settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let data = cards(source)?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        return Ok(());
    }
    if data.is_empty() {
        println!("No savings goals yet.");
        return Ok(());
    }
    let money = |d: &Decimal| format_currency(*d, settings);
    let rows = data
        .iter()
        .map(|g| {
            vec![
                g.id.clone(),
                g.name.clone(),
                g.category.clone(),
                g.deadline.format("%Y-%m-%d").to_string(),
                money(&g.current_amount),
                money(&g.target_amount),
                metric_cell(&g.progress, |p| format!("{:.0}%", p.round_dp(0))),
                metric_cell(&g.remaining, money),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Id", "Goal", "Category", "Deadline", "Saved", "Target", "Progress", "Remaining"],
            rows,
        )
    );
    Ok(())
}

fn contribute(source: &dyn DataSource, settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let goal = find_goal(source, id)?;
    let done = contribute_to_goal(source, &goal, amount, settings, Utc::now())
        .with_context(|| format!("Contribution to '{}' failed", goal.name))?;
    println!("{}", contribution_receipt(&goal, &done, settings));
    Ok(())
}

/// One-line confirmation; figures the goal cannot support show as `n/a`.
pub fn contribution_receipt(goal: &Goal, done: &GoalContribution, settings: &Settings) -> String {
    let updated = Goal {
        current_amount: goal.current_amount + done.amount,
        ..goal.clone()
    };
    let money = |d: &Decimal| format_currency(*d, settings);
    let progress = Metric::<Decimal>::from(goal_progress(&updated));
    let remaining = Metric::<Decimal>::from(goal_remaining(&updated));
    format!(
        "Added {} to '{}': {} saved, {} done, {} to go",
        money(&done.amount),
        done.goal_name,
        money(&updated.current_amount),
        metric_cell(&progress, |p| format!("{:.0}%", p.round_dp(0))),
        metric_cell(&remaining, money),
    )
}

pub fn history_rows(
    source: &dyn DataSource,
    settings: &Settings,
    id: &str,
) -> Result<Vec<GoalContribution>> {
    let snapshot = fetch_snapshot(source)?;
    let goal = snapshot
        .goals
        .iter()
        .find(|g| g.id == id)
        .with_context(|| format!("Goal '{}' not found", id))?;
    Ok(contributions_for_goal(&snapshot.expenses, goal, settings))
}

fn history(source: &dyn DataSource, settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let data = history_rows(source, settings, id)?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        return Ok(());
    }
    let rows = data
        .iter()
        .map(|c| {
            vec![
                c.date.format("%Y-%m-%d").to_string(),
                format_currency(c.amount, settings),
                c.linked_expense_id.clone().unwrap_or_default(),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Date", "Amount", "Expense"], rows));
    Ok(())
}

fn delete(source: &dyn DataSource, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    source
        .delete_goal(id)
        .with_context(|| format!("Could not delete goal '{}'", id))?;
    println!("Deleted goal {}", id);
    Ok(())
}

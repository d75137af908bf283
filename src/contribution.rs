// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Goal contributions.
//!
//! A contribution raises a goal's saved amount and records a `Metas` expense so
//! the money leaves the balance and shows up in recent activity. The two writes
//! are separate API calls; if the expense insert fails the goal update is rolled
//! back, and a failed rollback surfaces as [`Error::PartialWrite`].

use crate::api::DataSource;
use crate::config::Settings;
use crate::engine::apply_contribution;
use crate::error::{Error, Result};
use crate::models::{Expense, ExpenseCategory, Goal, NewExpense};
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use serde::Serialize;

static LINKED_DESCRIPTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(?P<prefix>[^:]+?)\s*:\s*(?P<goal>.+?)\s*$").unwrap());

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalContribution {
    pub goal_id: String,
    pub goal_name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub date: DateTime<Utc>,
    /// Ledger expense mirroring this contribution, when one was written.
    pub linked_expense_id: Option<String>,
}

pub fn contribution_description(prefix: &str, goal_name: &str) -> String {
    format!("{}: {}", prefix, goal_name)
}

/// Name of the goal a `Metas` expense was recorded for. Only descriptions
/// starting with one of `prefixes` (case-insensitive) count.
pub fn linked_goal_name<'a>(expense: &'a Expense, prefixes: &[&str]) -> Option<&'a str> {
    if expense.category != ExpenseCategory::Metas {
        return None;
    }
    let caps = LINKED_DESCRIPTION.captures(&expense.description)?;
    let prefix = caps.name("prefix")?.as_str();
    if !prefixes.iter().any(|p| p.trim().eq_ignore_ascii_case(prefix)) {
        return None;
    }
    caps.name("goal").map(|m| m.as_str())
}

/// Contributions to `goal` recovered from the expense ledger, oldest first.
pub fn contributions_for_goal(
    expenses: &[Expense],
    goal: &Goal,
    settings: &Settings,
) -> Vec<GoalContribution> {
    let prefixes = settings.contribution_prefixes();
    let mut out: Vec<GoalContribution> = expenses
        .iter()
        .filter(|e| linked_goal_name(e, &prefixes) == Some(goal.name.as_str()))
        .map(|e| GoalContribution {
            goal_id: goal.id.clone(),
            goal_name: goal.name.clone(),
            amount: e.amount,
            date: e.date,
            linked_expense_id: Some(e.id.clone()),
        })
        .collect();
    out.sort_by(|a, b| a.date.cmp(&b.date));
    out
}

/// Adds `amount` to `goal` and writes the linked expense.
pub fn contribute<D: DataSource + ?Sized>(
    source: &D,
    goal: &Goal,
    amount: Decimal,
    settings: &Settings,
    now: DateTime<Utc>,
) -> Result<GoalContribution> {
    let updated = apply_contribution(goal, amount)?;
    source.update_goal(&goal.id, &updated)?;
    tracing::info!(goal = %goal.id, %amount, "goal contribution applied");

    let linked = NewExpense {
        amount,
        currency: settings.currency.clone(),
        description: contribution_description(&settings.contribution_prefix, &goal.name),
        category: ExpenseCategory::Metas,
        date: now,
        payment_method: settings.contribution_payment_method.clone(),
    };
    match source.create_expense(&linked) {
        Ok(expense) => Ok(GoalContribution {
            goal_id: goal.id.clone(),
            goal_name: goal.name.clone(),
            amount,
            date: now,
            linked_expense_id: Some(expense.id),
        }),
        Err(cause) => {
            tracing::warn!(goal = %goal.id, error = %cause, "linked expense failed, rolling back goal");
            match source.update_goal(&goal.id, goal) {
                Ok(_) => Err(cause),
                Err(rollback) => {
                    tracing::error!(goal = %goal.id, error = %rollback, "goal rollback failed");
                    Err(Error::PartialWrite {
                        goal_id: goal.id.clone(),
                        cause: cause.to_string(),
                        rollback: rollback.to_string(),
                    })
                }
            }
        }
    }
}

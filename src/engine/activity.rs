// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Expense, Income, Record};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

pub const DEFAULT_RECENT_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Expense,
    Income,
}

impl ActivityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::Expense => "expense",
            ActivityKind::Income => "income",
        }
    }
}

/// One row of the merged expense/income feed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Activity {
    Expense(Expense),
    Income(Income),
}

impl Activity {
    pub fn kind(&self) -> ActivityKind {
        match self {
            Activity::Expense(_) => ActivityKind::Expense,
            Activity::Income(_) => ActivityKind::Income,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Activity::Expense(e) => &e.description,
            Activity::Income(i) => &i.description,
        }
    }

    pub fn payment_method(&self) -> &str {
        match self {
            Activity::Expense(e) => &e.payment_method,
            Activity::Income(i) => &i.payment_method,
        }
    }

    pub fn currency(&self) -> &str {
        match self {
            Activity::Expense(e) => &e.currency,
            Activity::Income(i) => &i.currency,
        }
    }

    /// Category for expenses, source for incomes.
    pub fn label(&self) -> &'static str {
        match self {
            Activity::Expense(e) => e.category.as_str(),
            Activity::Income(i) => i.source.as_str(),
        }
    }

    /// Amount signed by direction: incomes positive, expenses negative.
    pub fn signed_amount(&self) -> Decimal {
        match self {
            Activity::Expense(e) => -e.amount,
            Activity::Income(i) => i.amount,
        }
    }
}

impl Record for Activity {
    fn id(&self) -> &str {
        match self {
            Activity::Expense(e) => &e.id,
            Activity::Income(i) => &i.id,
        }
    }

    fn amount(&self) -> Decimal {
        match self {
            Activity::Expense(e) => e.amount,
            Activity::Income(i) => i.amount,
        }
    }

    fn date(&self) -> DateTime<Utc> {
        match self {
            Activity::Expense(e) => e.date,
            Activity::Income(i) => i.date,
        }
    }
}

/// Every expense and income, newest first. Equal timestamps keep input order,
/// expenses ahead of incomes.
pub fn activity_ledger(expenses: &[Expense], incomes: &[Income]) -> Vec<Activity> {
    let mut all: Vec<Activity> = expenses
        .iter()
        .cloned()
        .map(Activity::Expense)
        .chain(incomes.iter().cloned().map(Activity::Income))
        .collect();
    // Vec::sort_by is stable
    all.sort_by(|a, b| b.date().cmp(&a.date()));
    all
}

pub fn recent_transactions(expenses: &[Expense], incomes: &[Income], limit: usize) -> Vec<Activity> {
    let mut all = activity_ledger(expenses, incomes);
    all.truncate(limit);
    all
}

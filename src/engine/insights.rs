// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Rule-based advice shown next to the dashboard charts.

use crate::engine::totals::{dominant_key, group_totals, savings_rate, total_amount};
use crate::error::Result;
use crate::models::{Expense, ExpenseCategory, Income};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// Savings rate (percent) above which the positive insight fires.
pub const HIGH_SAVINGS_RATE: Decimal = Decimal::from_parts(20, 0, 0, false, 0);
/// Expense count above which the subscription tip fires.
pub const SUBSCRIPTION_TIP_MIN_EXPENSES: usize = 10;

/// Shown instead of an empty insight list.
pub const EMPTY_STATE_MESSAGE: &str = "Record more transactions to get personalised tips.";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Insight {
    HighSavings {
        #[serde(with = "rust_decimal::serde::float")]
        rate: Decimal,
    },
    SavingsGoal,
    TopCategory {
        category: ExpenseCategory,
    },
    ReviewSubscriptions,
}

impl Insight {
    /// Message key for an external translator.
    pub fn key(&self) -> &'static str {
        match self {
            Insight::HighSavings { .. } => "insights.highSavings",
            Insight::SavingsGoal => "insights.savingsGoal",
            Insight::TopCategory { .. } => "insights.topCategory",
            Insight::ReviewSubscriptions => "insights.reviewSubscriptions",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Insight::HighSavings { .. } => "Great savings!",
            Insight::SavingsGoal => "Savings goal",
            Insight::TopCategory { .. } => "Top spending",
            Insight::ReviewSubscriptions => "Money tip",
        }
    }
}

impl fmt::Display for Insight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Insight::HighSavings { rate } => write!(
                f,
                "You are saving {:.1}% of your income. Keep it up.",
                rate.round_dp(1)
            ),
            Insight::SavingsGoal => f.write_str(
                "Try to reach a 20% monthly savings rate to build your emergency fund.",
            ),
            Insight::TopCategory { category } => write!(
                f,
                "Your biggest expense is {}. Could you cut it by 10% next month?",
                category
            ),
            Insight::ReviewSubscriptions => f.write_str(
                "Review your active subscriptions; some may be services you no longer use.",
            ),
        }
    }
}

/// Applies the advice rules in priority order. An empty list means there is
/// not enough data to say anything.
pub fn derive_insights(expenses: &[Expense], incomes: &[Income]) -> Result<Vec<Insight>> {
    let rate = savings_rate(total_amount(incomes)?, total_amount(expenses)?)?;
    let by_category = group_totals(expenses, |e| e.category)?;

    let mut out = Vec::new();
    if rate > HIGH_SAVINGS_RATE {
        out.push(Insight::HighSavings { rate });
    } else if rate > Decimal::ZERO {
        out.push(Insight::SavingsGoal);
    }
    if let Some(category) = dominant_key(&by_category) {
        out.push(Insight::TopCategory { category });
    }
    if expenses.len() > SUBSCRIPTION_TIP_MIN_EXPENSES {
        out.push(Insight::ReviewSubscriptions);
    }
    Ok(out)
}

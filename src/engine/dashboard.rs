// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::Metric;
use super::activity::{Activity, recent_transactions};
use super::goals::GoalCard;
use super::insights::{Insight, derive_insights};
use super::monthly::{MonthFilter, MonthlyPoint, filter_by_month, income_vs_expenses};
use super::totals::{dominant_key, group_totals, savings_rate, share_percent, total_amount};
use crate::error::Result;
use crate::models::{Expense, ExpenseCategory, IncomeSource, Snapshot};
use rust_decimal::Decimal;
use serde::Serialize;

/// Goals shown on the summary page before pointing to the goals list.
pub const GOALS_PREVIEW_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: ExpenseCategory,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub share: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalsPreview {
    pub cards: Vec<GoalCard>,
    /// Goals left out of `cards`.
    pub more: usize,
}

/// Everything the summary page renders, computed in one pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub month: MonthFilter,
    pub year: i32,
    pub balance: Metric<Decimal>,
    pub total_income: Metric<Decimal>,
    pub total_expense: Metric<Decimal>,
    pub savings_rate: Metric<Decimal>,
    pub expense_count: usize,
    pub expenses_by_category: Metric<Vec<CategoryShare>>,
    pub top_category: Metric<Option<ExpenseCategory>>,
    pub main_income_source: Metric<Option<IncomeSource>>,
    pub monthly: Metric<Vec<MonthlyPoint>>,
    pub goals: GoalsPreview,
    pub recent: Vec<Activity>,
    pub insights: Metric<Vec<Insight>>,
}

fn category_breakdown(expenses: &[Expense]) -> Result<Vec<CategoryShare>> {
    let totals = group_totals(expenses, |e| e.category)?;
    let whole = total_amount(expenses)?;
    let mut out = totals
        .into_iter()
        .map(|(category, amount)| -> Result<CategoryShare> {
            Ok(CategoryShare {
                category,
                amount,
                share: share_percent(amount, whole)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    // biggest slice first; the sort is stable so equal slices stay in category order
    out.sort_by(|a, b| b.amount.cmp(&a.amount));
    Ok(out)
}

impl Dashboard {
    /// Balance is all-time. Totals, rate, breakdown, activity and insights
    /// follow `month`. The bar series covers calendar `year`.
    pub fn compute(snapshot: &Snapshot, month: MonthFilter, year: i32, recent_limit: usize) -> Self {
        let expenses = filter_by_month(&snapshot.expenses, &month);
        let incomes = filter_by_month(&snapshot.incomes, &month);

        let balance = total_amount(&snapshot.incomes)
            .and_then(|i| total_amount(&snapshot.expenses).map(|e| i - e));
        let total_income = total_amount(&incomes);
        let total_expense = total_amount(&expenses);
        let rate = match (&total_income, &total_expense) {
            (Ok(i), Ok(e)) => Metric::from(savings_rate(*i, *e)),
            (Err(err), _) | (_, Err(err)) => Metric::Invalid {
                reason: err.to_string(),
            },
        };

        let cards: Vec<GoalCard> = snapshot
            .goals
            .iter()
            .take(GOALS_PREVIEW_LIMIT)
            .map(GoalCard::from_goal)
            .collect();
        let more = snapshot.goals.len().saturating_sub(cards.len());

        Dashboard {
            month,
            year,
            balance: balance.into(),
            savings_rate: rate,
            total_income: total_income.into(),
            total_expense: total_expense.into(),
            expense_count: expenses.len(),
            expenses_by_category: category_breakdown(&expenses).into(),
            top_category: group_totals(&expenses, |e| e.category)
                .map(|t| dominant_key(&t))
                .into(),
            main_income_source: group_totals(&incomes, |i| i.source)
                .map(|t| dominant_key(&t))
                .into(),
            monthly: income_vs_expenses(&snapshot.expenses, &snapshot.incomes, year).into(),
            goals: GoalsPreview { cards, more },
            recent: recent_transactions(&expenses, &incomes, recent_limit),
            insights: derive_insights(&expenses, &incomes).into(),
        }
    }
}

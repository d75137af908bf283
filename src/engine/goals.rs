// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::engine::Metric;
use crate::error::{Error, Result};
use crate::models::Goal;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

fn validate_goal(goal: &Goal) -> Result<()> {
    if goal.target_amount <= Decimal::ZERO {
        return Err(Error::Validation(format!(
            "goal '{}' has non-positive target {}",
            goal.name, goal.target_amount
        )));
    }
    if goal.current_amount < Decimal::ZERO {
        return Err(Error::Validation(format!(
            "goal '{}' has negative saved amount {}",
            goal.name, goal.current_amount
        )));
    }
    Ok(())
}

/// Saved share of the target as a percentage, capped at 100.
pub fn goal_progress(goal: &Goal) -> Result<Decimal> {
    validate_goal(goal)?;
    if goal.current_amount >= goal.target_amount {
        return Ok(Decimal::ONE_HUNDRED);
    }
    goal.current_amount
        .checked_div(goal.target_amount)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .ok_or_else(|| Error::Validation(format!("goal '{}' progress is out of range", goal.name)))
}

/// Amount still missing to reach the target, never negative.
pub fn goal_remaining(goal: &Goal) -> Result<Decimal> {
    validate_goal(goal)?;
    Ok((goal.target_amount - goal.current_amount).max(Decimal::ZERO))
}

/// Goal with `amount` added to its saved total.
pub fn apply_contribution(goal: &Goal, amount: Decimal) -> Result<Goal> {
    if amount <= Decimal::ZERO {
        return Err(Error::Validation(format!(
            "contribution to '{}' must be positive, got {}",
            goal.name, amount
        )));
    }
    let current_amount = goal
        .current_amount
        .checked_add(amount)
        .ok_or_else(|| Error::Validation(format!("goal '{}' saved total overflows", goal.name)))?;
    Ok(Goal {
        current_amount,
        ..goal.clone()
    })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalCard {
    pub id: String,
    pub name: String,
    pub category: String,
    pub deadline: DateTime<Utc>,
    #[serde(with = "rust_decimal::serde::float")]
    pub target_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub current_amount: Decimal,
    pub progress: Metric<Decimal>,
    pub remaining: Metric<Decimal>,
}

impl GoalCard {
    pub fn from_goal(goal: &Goal) -> Self {
        GoalCard {
            id: goal.id.clone(),
            name: goal.name.clone(),
            category: goal.category.clone(),
            deadline: goal.deadline,
            target_amount: goal.target_amount,
            current_amount: goal.current_amount,
            progress: goal_progress(goal).into(),
            remaining: goal_remaining(goal).into(),
        }
    }
}

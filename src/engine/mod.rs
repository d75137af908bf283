// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Aggregation engine: pure functions from ledger snapshots to the figures
//! the dashboard shows. Nothing here performs I/O or keeps state between calls.

pub mod activity;
pub mod dashboard;
pub mod goals;
pub mod insights;
pub mod monthly;
pub mod totals;

pub use activity::{
    Activity, ActivityKind, DEFAULT_RECENT_LIMIT, activity_ledger, recent_transactions,
};
pub use dashboard::{CategoryShare, Dashboard, GoalsPreview};
pub use goals::{GoalCard, apply_contribution, goal_progress, goal_remaining};
pub use insights::{Insight, derive_insights};
pub use monthly::{
    MONTH_LABELS, MonthFilter, MonthlyPoint, filter_by_month, income_vs_expenses, monthly_buckets,
};
pub use totals::{
    NO_DOMINANT_KEY, dominant_key, dominant_label, group_totals, savings_rate, total_amount,
};

use serde::{Serialize, Serializer};

/// A derived figure, or the reason it could not be computed.
#[derive(Debug, Clone, PartialEq)]
pub enum Metric<T> {
    Value(T),
    Invalid { reason: String },
}

impl<T> Metric<T> {
    pub fn value(&self) -> Option<&T> {
        match self {
            Metric::Value(v) => Some(v),
            Metric::Invalid { .. } => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Metric::Value(_))
    }
}

impl<T> From<crate::Result<T>> for Metric<T> {
    fn from(r: crate::Result<T>) -> Self {
        match r {
            Ok(v) => Metric::Value(v),
            Err(e) => {
                tracing::warn!(error = %e, "derived figure skipped");
                Metric::Invalid {
                    reason: e.to_string(),
                }
            }
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum MetricRepr<'a, T> {
    Ok { value: &'a T },
    Invalid { reason: &'a str },
}

impl<T: Serialize> Serialize for Metric<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Metric::Value(value) => MetricRepr::Ok { value }.serialize(serializer),
            Metric::Invalid { reason } => {
                let repr: MetricRepr<'_, T> = MetricRepr::Invalid { reason };
                repr.serialize(serializer)
            }
        }
    }
}

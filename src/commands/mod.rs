// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod activity;
pub mod chart;
pub mod expenses;
pub mod exporter;
pub mod goals;
pub mod incomes;
pub mod settings;
pub mod summary;

use crate::api::{DataSource, load_snapshot};
use crate::engine::{Metric, MonthFilter};
use crate::models::Snapshot;
use anyhow::Result;

/// `--month` when given, `default` otherwise.
pub fn month_filter(m: &clap::ArgMatches, default: MonthFilter) -> Result<MonthFilter> {
    match m.get_one::<String>("month") {
        Some(s) => Ok(s.parse::<MonthFilter>()?),
        None => Ok(default),
    }
}

/// Transient failures carry a retry hint; the rest pass through as-is.
pub fn fetch_snapshot(source: &dyn DataSource) -> Result<Snapshot> {
    match load_snapshot(source) {
        Ok(snapshot) => Ok(snapshot),
        Err(e) if e.is_retryable() => Err(anyhow::Error::new(e)
            .context("Could not load the ledger; make sure the API is running and retry")),
        Err(e) => Err(anyhow::Error::new(e).context("Could not load the ledger")),
    }
}

/// Table cell for a derived figure; invalid figures show their reason.
pub fn metric_cell<T>(m: &Metric<T>, show: impl Fn(&T) -> String) -> String {
    match m {
        Metric::Value(v) => show(v),
        Metric::Invalid { reason } => format!("n/a ({})", reason),
    }
}

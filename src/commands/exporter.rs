// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{fetch_snapshot, month_filter};
use crate::api::DataSource;
use crate::engine::{Activity, MonthFilter, activity_ledger, filter_by_month};
use crate::models::Record;
use anyhow::{Result, bail};
use std::path::Path;

pub fn handle(source: &dyn DataSource, m: &clap::ArgMatches) -> Result<()> {
    let fmt = m.get_one::<String>("format").unwrap().to_lowercase();
    let out = m.get_one::<String>("out").unwrap();
    let month = month_filter(m, MonthFilter::All)?;

    let snapshot = fetch_snapshot(source)?;
    let rows = activity_ledger(
        &filter_by_month(&snapshot.expenses, &month),
        &filter_by_month(&snapshot.incomes, &month),
    );
    let n = write_ledger(&rows, &fmt, Path::new(out))?;
    println!("Exported {} transactions to {}", n, out);
    Ok(())
}

/// Writes `rows` as `csv` or `json`; returns the number of rows written.
pub fn write_ledger(rows: &[Activity], fmt: &str, out: &Path) -> Result<usize> {
    match fmt {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record([
                "date",
                "type",
                "id",
                "description",
                "category",
                "payment_method",
                "amount",
                "currency",
            ])?;
            for a in rows {
                wtr.write_record([
                    a.date().to_rfc3339(),
                    a.kind().as_str().to_string(),
                    a.id().to_string(),
                    a.description().to_string(),
                    a.label().to_string(),
                    a.payment_method().to_string(),
                    a.signed_amount().to_string(),
                    a.currency().to_string(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(rows)?)?;
        }
        other => bail!("Unknown format: {} (use csv|json)", other),
    }
    tracing::info!(rows = rows.len(), path = %out.display(), "ledger exported");
    Ok(rows.len())
}

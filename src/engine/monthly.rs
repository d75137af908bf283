// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::engine::totals::checked_amount;
use crate::error::{Error, Result};
use crate::models::{Expense, Income, Record};
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Time window selected on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    Month { year: i32, month: u32 },
}

impl MonthFilter {
    pub fn current(now: DateTime<Utc>) -> Self {
        MonthFilter::Month {
            year: now.year(),
            month: now.month(),
        }
    }

    pub fn matches(&self, date: &DateTime<Utc>) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Month { year, month } => date.year() == *year && date.month() == *month,
        }
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => f.write_str("all"),
            MonthFilter::Month { year, month } => write!(f, "{:04}-{:02}", year, month),
        }
    }
}

impl FromStr for MonthFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(MonthFilter::All);
        }
        let bad = || Error::Validation(format!("Invalid month '{}', expected YYYY-MM or 'all'", s));
        // zero-padded month only: "2025-3" is rejected
        if s.len() != 7 || s.as_bytes()[4] != b'-' {
            return Err(bad());
        }
        let first = NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d").map_err(|_| bad())?;
        Ok(MonthFilter::Month {
            year: first.year(),
            month: first.month(),
        })
    }
}

impl Serialize for MonthFilter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

pub fn filter_by_month<R: Record + Clone>(records: &[R], filter: &MonthFilter) -> Vec<R> {
    match filter {
        MonthFilter::All => records.to_vec(),
        _ => records
            .iter()
            .filter(|r| filter.matches(&r.date()))
            .cloned()
            .collect(),
    }
}

/// Twelve Jan..Dec totals for `year`. Records from other years are skipped.
pub fn monthly_buckets<R: Record>(records: &[R], year: i32) -> Result<[Decimal; 12]> {
    let mut buckets = [Decimal::ZERO; 12];
    for r in records {
        let date = r.date();
        if date.year() != year {
            continue;
        }
        let amount = checked_amount(r)?;
        let idx = date.month0() as usize;
        buckets[idx] = buckets[idx].checked_add(amount).ok_or_else(|| {
            Error::Validation(format!("{} total overflows", MONTH_LABELS[idx]))
        })?;
    }
    Ok(buckets)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyPoint {
    pub month: u32,
    pub label: &'static str,
    #[serde(with = "rust_decimal::serde::float")]
    pub income: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub expenses: Decimal,
}

/// Income-vs-expenses bar series for one calendar year.
pub fn income_vs_expenses(
    expenses: &[Expense],
    incomes: &[Income],
    year: i32,
) -> Result<Vec<MonthlyPoint>> {
    let out = monthly_buckets(expenses, year)?;
    let inc = monthly_buckets(incomes, year)?;
    Ok((0..12)
        .map(|i| MonthlyPoint {
            month: i as u32 + 1,
            label: MONTH_LABELS[i],
            income: inc[i],
            expenses: out[i],
        })
        .collect())
}

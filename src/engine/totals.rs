// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{Error, Result};
use crate::models::Record;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::fmt::Display;

/// Label shown when there is no dominant key to name.
pub const NO_DOMINANT_KEY: &str = "---";

/// Returns the record's amount, refusing anything that is not strictly positive.
pub fn checked_amount<R: Record>(record: &R) -> Result<Decimal> {
    let amount = record.amount();
    if amount <= Decimal::ZERO {
        return Err(Error::Validation(format!(
            "record '{}' has non-positive amount {}",
            record.id(),
            amount
        )));
    }
    Ok(amount)
}

fn add(acc: Decimal, amount: Decimal) -> Result<Decimal> {
    acc.checked_add(amount)
        .ok_or_else(|| Error::Validation(format!("sum overflows at {} + {}", acc, amount)))
}

/// Sums `amount` over the records. No currency conversion happens here.
pub fn total_amount<R: Record>(records: &[R]) -> Result<Decimal> {
    records
        .iter()
        .try_fold(Decimal::ZERO, |acc, r| add(acc, checked_amount(r)?))
}

/// Sums amounts per key, one entry for every distinct key seen.
pub fn group_totals<R, K, F>(records: &[R], key_fn: F) -> Result<BTreeMap<K, Decimal>>
where
    R: Record,
    K: Ord,
    F: Fn(&R) -> K,
{
    let mut totals: BTreeMap<K, Decimal> = BTreeMap::new();
    for r in records {
        let amount = checked_amount(r)?;
        let slot = totals.entry(key_fn(r)).or_insert(Decimal::ZERO);
        *slot = add(*slot, amount)?;
    }
    Ok(totals)
}

/// Key with the largest total. Equal totals resolve to the smallest key.
pub fn dominant_key<K: Ord + Clone>(totals: &BTreeMap<K, Decimal>) -> Option<K> {
    let mut best: Option<(&K, Decimal)> = None;
    for (key, amount) in totals {
        if best.is_none_or(|(_, top)| *amount > top) {
            best = Some((key, *amount));
        }
    }
    best.map(|(k, _)| k.clone())
}

pub fn dominant_label<K: Display>(key: Option<K>) -> String {
    key.map(|k| k.to_string())
        .unwrap_or_else(|| NO_DOMINANT_KEY.to_string())
}

fn percent_of(part: Decimal, whole: Decimal) -> Result<Decimal> {
    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .ok_or_else(|| Error::Validation(format!("{} / {} is out of range", part, whole)))
}

/// Percentage of income left after expenses; zero when there is no income.
pub fn savings_rate(total_income: Decimal, total_expense: Decimal) -> Result<Decimal> {
    if total_income <= Decimal::ZERO {
        return Ok(Decimal::ZERO);
    }
    let left = total_income
        .checked_sub(total_expense)
        .ok_or_else(|| Error::Validation(format!("{} - {} overflows", total_income, total_expense)))?;
    percent_of(left, total_income)
}

/// `part` as a percentage of `whole`; zero for an empty whole.
pub fn share_percent(part: Decimal, whole: Decimal) -> Result<Decimal> {
    if whole <= Decimal::ZERO {
        return Ok(Decimal::ZERO);
    }
    percent_of(part, whole)
}

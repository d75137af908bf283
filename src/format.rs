// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Settings;
use crate::engine::MONTH_LABELS;
use rust_decimal::Decimal;

/// `1234.5` -> `"1,234.50"`.
pub fn group_thousands(amount: Decimal) -> String {
    let fixed = format!("{:.2}", amount.abs().round_dp(2));
    let (int_part, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if amount.is_sign_negative() && !amount.round_dp(2).is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}{}.{}", sign, grouped, frac)
}

pub fn format_currency(amount: Decimal, settings: &Settings) -> String {
    let body = group_thousands(amount);
    match body.strip_prefix('-') {
        Some(abs) => format!("-{}{}", settings.currency_symbol, abs),
        None => format!("{}{}", settings.currency_symbol, body),
    }
}

pub fn format_percent(rate: Decimal) -> String {
    format!("{:.1}%", rate.round_dp(1))
}

/// Short English label for a 1-based month number.
pub fn month_label(month: u32) -> Option<&'static str> {
    let idx = usize::try_from(month).ok()?.checked_sub(1)?;
    MONTH_LABELS.get(idx).copied()
}

// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use fintrack::config::Settings;
use fintrack::format::{format_currency, format_percent, group_thousands, month_label};
use rust_decimal::Decimal;
use std::str::FromStr;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

#[test]
fn groups_thousands_with_two_decimals() {
    assert_eq!(group_thousands(dec("0")), "0.00");
    assert_eq!(group_thousands(dec("999.9")), "999.90");
    assert_eq!(group_thousands(dec("1234.5")), "1,234.50");
    assert_eq!(group_thousands(dec("1234567.891")), "1,234,567.89");
    assert_eq!(group_thousands(dec("-2500")), "-2,500.00");
}

#[test]
fn currency_uses_configured_symbol() {
    let usd = Settings::default();
    assert_eq!(format_currency(dec("2722.5"), &usd), "$2,722.50");
    assert_eq!(format_currency(dec("-45"), &usd), "-$45.00");

    let eur = Settings {
        currency_symbol: "€".into(),
        ..Settings::default()
    };
    assert_eq!(format_currency(dec("10"), &eur), "€10.00");
}

#[test]
fn percent_keeps_one_decimal() {
    assert_eq!(format_percent(dec("97.7")), "97.7%");
    assert_eq!(format_percent(dec("50")), "50.0%");
    assert_eq!(format_percent(dec("33.333")), "33.3%");
}

#[test]
fn month_labels_are_one_based() {
    assert_eq!(month_label(1), Some("Jan"));
    assert_eq!(month_label(12), Some("Dec"));
    assert_eq!(month_label(0), None);
    assert_eq!(month_label(13), None);
}

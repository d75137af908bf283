// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use common::{dec, expense, income};
use fintrack::engine::{Insight, derive_insights};
use fintrack::models::{Expense, ExpenseCategory, IncomeSource};

fn fifteen_expenses() -> Vec<Expense> {
    (0..15)
        .map(|i| {
            let cat = if i < 10 {
                ExpenseCategory::Alimentacion
            } else {
                ExpenseCategory::Transporte
            };
            expense(&format!("e{}", i), "100", cat, "2025-04-10")
        })
        .collect()
}

#[test]
fn high_savings_top_category_and_subscription_tip() {
    let expenses = fifteen_expenses();
    let incomes = vec![income("i", "2000", IncomeSource::Salario, "2025-04-01")];
    let out = derive_insights(&expenses, &incomes).unwrap();
    assert_eq!(
        out,
        vec![
            Insight::HighSavings { rate: dec("25") },
            Insight::TopCategory {
                category: ExpenseCategory::Alimentacion
            },
            Insight::ReviewSubscriptions,
        ]
    );
    assert_eq!(
        out[0].to_string(),
        "You are saving 25.0% of your income. Keep it up."
    );
}

#[test]
fn modest_savings_get_a_nudge() {
    let expenses = vec![expense("e", "90", ExpenseCategory::Salud, "2025-04-10")];
    let incomes = vec![income("i", "100", IncomeSource::Freelance, "2025-04-01")];
    let out = derive_insights(&expenses, &incomes).unwrap();
    assert_eq!(out[0], Insight::SavingsGoal);
    assert_eq!(out.len(), 2);
}

#[test]
fn exactly_twenty_percent_is_not_high() {
    let expenses = vec![expense("e", "80", ExpenseCategory::Salud, "2025-04-10")];
    let incomes = vec![income("i", "100", IncomeSource::Salario, "2025-04-01")];
    let out = derive_insights(&expenses, &incomes).unwrap();
    assert_eq!(out[0], Insight::SavingsGoal);
}

#[test]
fn overspending_only_names_top_category() {
    // negative savings fire neither savings rule
    let expenses = vec![expense("e", "500", ExpenseCategory::Otros, "2025-04-10")];
    let incomes = vec![income("i", "100", IncomeSource::Salario, "2025-04-01")];
    let out = derive_insights(&expenses, &incomes).unwrap();
    assert_eq!(
        out,
        vec![Insight::TopCategory {
            category: ExpenseCategory::Otros
        }]
    );
}

#[test]
fn no_data_means_no_insights() {
    let out = derive_insights(&[], &[]).unwrap();
    assert!(out.is_empty());
}

#[test]
fn insights_have_translation_keys() {
    assert_eq!(Insight::SavingsGoal.key(), "insights.savingsGoal");
    let v = serde_json::to_value(Insight::HighSavings { rate: dec("30") }).unwrap();
    assert_eq!(v["kind"], "high_savings");
    assert_eq!(v["rate"], 30.0);
}

#[test]
fn subscription_tip_needs_more_than_ten_expenses() {
    let incomes = vec![income("i", "5000", IncomeSource::Salario, "2025-04-01")];
    let batch = |n: usize| -> Vec<Expense> {
        (0..n)
            .map(|i| expense(&format!("e{}", i), "10", ExpenseCategory::Servicios, "2025-04-10"))
            .collect()
    };

    let ten = derive_insights(&batch(10), &incomes).unwrap();
    assert!(!ten.contains(&Insight::ReviewSubscriptions));
    assert_eq!(ten.len(), 2);

    let eleven = derive_insights(&batch(11), &incomes).unwrap();
    assert_eq!(eleven.last(), Some(&Insight::ReviewSubscriptions));
    assert_eq!(eleven.len(), 3);
}

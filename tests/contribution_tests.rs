// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use common::{MemoryLedger, at, dec, expense, goal};
use fintrack::Error;
use fintrack::config::Settings;
use fintrack::contribution::{
    contribute, contribution_description, contributions_for_goal, linked_goal_name,
};
use fintrack::models::ExpenseCategory;

fn ledger() -> MemoryLedger {
    MemoryLedger::new(
        vec![],
        vec![],
        vec![goal("g1", "Viaje a Japón", "3000", "450")],
    )
}

#[test]
fn contribution_updates_goal_and_links_expense() {
    let db = ledger();
    let settings = Settings::default();
    let g = db.goal("g1");

    let c = contribute(&db, &g, dec("50"), &settings, at("2025-07-01")).unwrap();

    assert_eq!(db.goal("g1").current_amount, dec("500"));
    let expenses = db.expenses.borrow();
    assert_eq!(expenses.len(), 1);
    let linked = &expenses[0];
    assert_eq!(c.linked_expense_id.as_deref(), Some(linked.id.as_str()));
    assert_eq!(linked.category, ExpenseCategory::Metas);
    assert_eq!(linked.amount, dec("50"));
    assert_eq!(linked.currency, "USD");
    assert_eq!(linked.payment_method, "Efectivo");
    assert_eq!(linked.description, "Contribution to goal: Viaje a Japón");
    assert_eq!(c.goal_id, "g1");
}

#[test]
fn failed_expense_insert_rolls_goal_back() {
    let db = ledger();
    db.fail_create_expense.set(true);
    let g = db.goal("g1");

    let err = contribute(&db, &g, dec("50"), &Settings::default(), at("2025-07-01")).unwrap_err();

    assert!(matches!(err, Error::DataFetch(_)));
    assert_eq!(db.goal("g1").current_amount, dec("450"));
    assert_eq!(db.goal_updates.get(), 2);
    assert!(db.expenses.borrow().is_empty());
}

#[test]
fn failed_rollback_is_reported_as_partial_write() {
    let db = ledger();
    db.fail_create_expense.set(true);
    db.goal_updates_allowed.set(Some(1));
    let g = db.goal("g1");

    let err = contribute(&db, &g, dec("50"), &Settings::default(), at("2025-07-01")).unwrap_err();

    match err {
        Error::PartialWrite { goal_id, cause, rollback } => {
            assert_eq!(goal_id, "g1");
            assert!(cause.contains("500"));
            assert!(rollback.contains("timed out"));
        }
        other => panic!("expected partial write, got {:?}", other),
    }
    // the goal keeps the unreconciled amount
    assert_eq!(db.goal("g1").current_amount, dec("500"));
}

#[test]
fn failed_goal_update_writes_nothing() {
    let db = ledger();
    db.goal_updates_allowed.set(Some(0));
    let g = db.goal("g1");
    assert!(contribute(&db, &g, dec("10"), &Settings::default(), at("2025-07-01")).is_err());
    assert!(db.expenses.borrow().is_empty());
    assert_eq!(db.goal("g1").current_amount, dec("450"));
}

#[test]
fn non_positive_contribution_is_refused_before_any_write() {
    let db = ledger();
    let g = db.goal("g1");
    let err = contribute(&db, &g, dec("0"), &Settings::default(), at("2025-07-01")).unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
    assert_eq!(db.goal_updates.get(), 0);
}

#[test]
fn contributions_are_recovered_from_the_ledger() {
    let settings = Settings {
        contribution_prefix: "Aporte a meta".into(),
        ..Settings::default()
    };
    let g = goal("g1", "Fondo de Emergencia", "5000", "1200");
    let mut first = expense("x1", "100", ExpenseCategory::Metas, "2025-03-01");
    first.description = contribution_description("Aporte a meta", "Fondo de Emergencia");
    let mut second = expense("x2", "50", ExpenseCategory::Metas, "2025-01-01");
    second.description = "Contribution to goal: Fondo de Emergencia".into();
    let mut other_goal = expense("x3", "70", ExpenseCategory::Metas, "2025-02-01");
    other_goal.description = "Contribution to goal: Laptop".into();
    let mut not_metas = expense("x4", "10", ExpenseCategory::Otros, "2025-02-01");
    not_metas.description = "Contribution to goal: Fondo de Emergencia".into();

    let prefixes = settings.contribution_prefixes();
    assert_eq!(linked_goal_name(&not_metas, &prefixes), None);
    assert_eq!(linked_goal_name(&other_goal, &prefixes), Some("Laptop"));

    let found = contributions_for_goal(&[first, second, other_goal, not_metas], &g, &settings);
    let ids: Vec<_> = found
        .iter()
        .map(|c| c.linked_expense_id.clone().unwrap())
        .collect();
    assert_eq!(ids, ["x2", "x1"]);
    assert_eq!(found[1].amount, dec("100"));
    assert!(found.iter().all(|c| c.goal_id == "g1"));
}

#[test]
fn metas_expense_with_foreign_prefix_is_not_a_contribution() {
    let settings = Settings::default();
    let g = goal("g1", "Laptop", "1500", "0");
    let mut bonus = expense("x1", "200", ExpenseCategory::Metas, "2025-03-01");
    bonus.description = "Bonus: Laptop".into();
    let mut linked = expense("x2", "50", ExpenseCategory::Metas, "2025-03-02");
    linked.description = "contribution to goal : Laptop".into();

    assert_eq!(linked_goal_name(&bonus, &settings.contribution_prefixes()), None);
    let found = contributions_for_goal(&[bonus, linked], &g, &settings);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].linked_expense_id.as_deref(), Some("x2"));
}

#[test]
fn written_contribution_is_found_again() {
    let db = ledger();
    let settings = Settings::default();
    let g = db.goal("g1");
    contribute(&db, &g, dec("25"), &settings, at("2025-07-01")).unwrap();
    let found = contributions_for_goal(&db.expenses.borrow(), &g, &settings);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].amount, dec("25"));
}

// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use fintrack::models::{Expense, ExpenseCategory, Goal, Income, IncomeSource, NewExpense};
use rust_decimal::Decimal;
use std::str::FromStr;

#[test]
fn decodes_api_payloads() {
    let raw = r#"{
        "id": "e-1",
        "amount": 45.5,
        "currency": "USD",
        "description": "Supermercado",
        "category": "Alimentación",
        "date": "2025-06-03T09:30:00-05:00",
        "payment_method": "Tarjeta"
    }"#;
    let e: Expense = serde_json::from_str(raw).unwrap();
    assert_eq!(e.category, ExpenseCategory::Alimentacion);
    assert_eq!(e.amount, Decimal::from_str("45.5").unwrap());
    assert_eq!(e.date.to_rfc3339(), "2025-06-03T14:30:00+00:00");

    let raw = r#"{"id":"i-1","amount":2500,"currency":"USD","description":"Nómina",
        "source":"Salario","date":"2025-06-01T00:00:00Z","payment_method":"Transferencia"}"#;
    let i: Income = serde_json::from_str(raw).unwrap();
    assert_eq!(i.source, IncomeSource::Salario);

    let raw = r#"{"id":"g-1","name":"Viaje","target_amount":3000,"current_amount":0,
        "deadline":"2026-01-15T00:00:00Z","category":"Viajes"}"#;
    let g: Goal = serde_json::from_str(raw).unwrap();
    assert_eq!(g.target_amount, Decimal::from(3000));
}

#[test]
fn unknown_category_is_rejected() {
    let raw = r#"{"id":"e-1","amount":1,"currency":"USD","description":"x",
        "category":"Viajes","date":"2025-06-03T09:30:00Z","payment_method":"Efectivo"}"#;
    assert!(serde_json::from_str::<Expense>(raw).is_err());
}

#[test]
fn new_records_serialize_amounts_as_numbers() {
    let body = NewExpense {
        amount: Decimal::from_str("12.5").unwrap(),
        currency: "USD".into(),
        description: "Taxi".into(),
        category: ExpenseCategory::Transporte,
        date: "2025-06-03T12:00:00Z".parse().unwrap(),
        payment_method: "Efectivo".into(),
    };
    let v = serde_json::to_value(&body).unwrap();
    assert_eq!(v["amount"], serde_json::json!(12.5));
    assert_eq!(v["category"], "Transporte");
    assert!(v.get("id").is_none());

    let created = body.with_id("e-9");
    assert_eq!(created.id, "e-9");
    assert_eq!(created.description, "Taxi");
}

#[test]
fn labels_parse_case_insensitively() {
    assert_eq!(
        "alimentacion".parse::<ExpenseCategory>().unwrap(),
        ExpenseCategory::Alimentacion
    );
    assert_eq!(
        "ALIMENTACIÓN".parse::<ExpenseCategory>().unwrap(),
        ExpenseCategory::Alimentacion
    );
    assert_eq!(" metas ".parse::<ExpenseCategory>().unwrap(), ExpenseCategory::Metas);
    assert_eq!("freelance".parse::<IncomeSource>().unwrap(), IncomeSource::Freelance);
    assert!("Lotería".parse::<IncomeSource>().is_err());
    assert_eq!(ExpenseCategory::Alimentacion.to_string(), "Alimentación");
}

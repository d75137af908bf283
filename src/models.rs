// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Anything the engine can sum and place on a timeline.
pub trait Record {
    fn id(&self) -> &str;
    fn amount(&self) -> Decimal;
    fn date(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExpenseCategory {
    #[serde(rename = "Alimentación")]
    Alimentacion,
    Transporte,
    Servicios,
    Entretenimiento,
    Salud,
    Metas,
    Otros,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 7] = [
        ExpenseCategory::Alimentacion,
        ExpenseCategory::Transporte,
        ExpenseCategory::Servicios,
        ExpenseCategory::Entretenimiento,
        ExpenseCategory::Salud,
        ExpenseCategory::Metas,
        ExpenseCategory::Otros,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::Alimentacion => "Alimentación",
            ExpenseCategory::Transporte => "Transporte",
            ExpenseCategory::Servicios => "Servicios",
            ExpenseCategory::Entretenimiento => "Entretenimiento",
            ExpenseCategory::Salud => "Salud",
            ExpenseCategory::Metas => "Metas",
            ExpenseCategory::Otros => "Otros",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExpenseCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        // accept the unaccented spelling typed on a plain keyboard
        if wanted == "alimentacion" {
            return Ok(ExpenseCategory::Alimentacion);
        }
        ExpenseCategory::ALL
            .into_iter()
            .find(|c| c.as_str().to_lowercase() == wanted)
            .ok_or_else(|| format!("Unknown expense category: {}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum IncomeSource {
    Salario,
    Freelance,
    Inversiones,
    Regalo,
    Otros,
}

impl IncomeSource {
    pub const ALL: [IncomeSource; 5] = [
        IncomeSource::Salario,
        IncomeSource::Freelance,
        IncomeSource::Inversiones,
        IncomeSource::Regalo,
        IncomeSource::Otros,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IncomeSource::Salario => "Salario",
            IncomeSource::Freelance => "Freelance",
            IncomeSource::Inversiones => "Inversiones",
            IncomeSource::Regalo => "Regalo",
            IncomeSource::Otros => "Otros",
        }
    }
}

impl fmt::Display for IncomeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IncomeSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        IncomeSource::ALL
            .into_iter()
            .find(|c| c.as_str().to_lowercase() == wanted)
            .ok_or_else(|| format!("Unknown income source: {}", s))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub currency: String,
    pub description: String,
    pub category: ExpenseCategory,
    pub date: DateTime<Utc>,
    pub payment_method: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Income {
    pub id: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub currency: String,
    pub description: String,
    pub source: IncomeSource,
    pub date: DateTime<Utc>,
    pub payment_method: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub target_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub current_amount: Decimal,
    pub deadline: DateTime<Utc>,
    pub category: String,
}

/// Body of `POST /api/expenses`; the server assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewExpense {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub currency: String,
    pub description: String,
    pub category: ExpenseCategory,
    pub date: DateTime<Utc>,
    pub payment_method: String,
}

impl NewExpense {
    pub fn with_id(self, id: impl Into<String>) -> Expense {
        Expense {
            id: id.into(),
            amount: self.amount,
            currency: self.currency,
            description: self.description,
            category: self.category,
            date: self.date,
            payment_method: self.payment_method,
        }
    }
}

impl From<Expense> for NewExpense {
    fn from(e: Expense) -> Self {
        NewExpense {
            amount: e.amount,
            currency: e.currency,
            description: e.description,
            category: e.category,
            date: e.date,
            payment_method: e.payment_method,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewIncome {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub currency: String,
    pub description: String,
    pub source: IncomeSource,
    pub date: DateTime<Utc>,
    pub payment_method: String,
}

impl NewIncome {
    pub fn with_id(self, id: impl Into<String>) -> Income {
        Income {
            id: id.into(),
            amount: self.amount,
            currency: self.currency,
            description: self.description,
            source: self.source,
            date: self.date,
            payment_method: self.payment_method,
        }
    }
}

impl From<Income> for NewIncome {
    fn from(i: Income) -> Self {
        NewIncome {
            amount: i.amount,
            currency: i.currency,
            description: i.description,
            source: i.source,
            date: i.date,
            payment_method: i.payment_method,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewGoal {
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub target_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub current_amount: Decimal,
    pub deadline: DateTime<Utc>,
    pub category: String,
}

impl NewGoal {
    pub fn with_id(self, id: impl Into<String>) -> Goal {
        Goal {
            id: id.into(),
            name: self.name,
            target_amount: self.target_amount,
            current_amount: self.current_amount,
            deadline: self.deadline,
            category: self.category,
        }
    }
}

impl Record for Expense {
    fn id(&self) -> &str {
        &self.id
    }
    fn amount(&self) -> Decimal {
        self.amount
    }
    fn date(&self) -> DateTime<Utc> {
        self.date
    }
}

impl Record for Income {
    fn id(&self) -> &str {
        &self.id
    }
    fn amount(&self) -> Decimal {
        self.amount
    }
    fn date(&self) -> DateTime<Utc> {
        self.date
    }
}

/// Immutable point-in-time view of the ledger handed to the engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub expenses: Vec<Expense>,
    pub incomes: Vec<Income>,
    pub goals: Vec<Goal>,
}
